//! Length and angle helpers producing CSS unit strings.

/// Default used wherever an edge or dimension is left unspecified.
pub const ZERO_LENGTH: &str = "0px";

/// Shortest text that reads back as `value`, without a trailing `.0`.
/// Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// [`format_number`] for values stored as `f32`, printed at `f32` precision.
pub(crate) fn format_f32(value: f32) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

pub fn deg(value: f64) -> String {
    format!("{}deg", format_number(value))
}
