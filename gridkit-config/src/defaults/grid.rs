//! Default values for the text grid widget.

pub fn theme() -> String {
    "dark".to_string()
}

pub fn line_numbers() -> bool {
    false
}

pub fn whitespace() -> bool {
    false
}
