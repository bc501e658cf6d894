//! Integration tests for the `gridkit` command line.

use clap::Parser;
use gridkit::cli::{self, Cli};

#[test]
fn test_gradient_command_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gradient.png");
    let cli = Cli::try_parse_from([
        "gridkit",
        "gradient",
        "-o",
        out.to_str().unwrap(),
        "--direction",
        "vertical",
        "--width",
        "4",
        "--height",
        "50",
        "--start",
        "#ff0000",
        "--end",
        "0000ffff",
    ])
    .unwrap();
    cli::run(cli).unwrap();

    let image = image::open(&out).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (4, 50));
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(3, 25).0, [127, 0, 127, 255]);
}

#[test]
fn test_gradient_command_rejects_empty_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.png");
    let cli = Cli::try_parse_from([
        "gridkit",
        "gradient",
        "-o",
        out.to_str().unwrap(),
        "--width",
        "0",
    ])
    .unwrap();
    assert!(cli::run(cli).is_err());
    assert!(!out.exists());
}

#[test]
fn test_render_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "hello\n").unwrap();
    let cli = Cli::try_parse_from([
        "gridkit",
        "render",
        input.to_str().unwrap(),
        "-o",
        dir.path().join("out.png").to_str().unwrap(),
        "--config",
        dir.path().join("missing.yaml").to_str().unwrap(),
    ])
    .unwrap();
    let err = cli::run(cli).unwrap_err();
    assert!(
        err.downcast_ref::<gridkit::config::ConfigError>().is_some(),
        "unexpected error: {err:#}"
    );
}
