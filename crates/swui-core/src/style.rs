//! Style and property maps.

use std::fmt;

use indexmap::IndexMap;
use swui_graphics::format_number;

/// A single style value: CSS text or a bare number.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl StyleValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            StyleValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(number) => Some(*number),
            StyleValue::Text(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(number) => f.write_str(&format_number(*number)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

impl From<f64> for StyleValue {
    fn from(number: f64) -> Self {
        StyleValue::Number(number)
    }
}

impl From<i32> for StyleValue {
    fn from(number: i32) -> Self {
        StyleValue::Number(f64::from(number))
    }
}

impl From<u16> for StyleValue {
    fn from(number: u16) -> Self {
        StyleValue::Number(f64::from(number))
    }
}

impl PartialEq<&str> for StyleValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Style property name to value. Iteration follows insertion order.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Non-style attributes such as drag flags, data tags and autocomplete hints.
pub type PropertyMap = IndexMap<String, String>;
