//! Argument records for the box modifiers. Every field may be lazy.

use std::fmt;

use swui_core::Value;
use swui_graphics::{Paint, ZERO_LENGTH};

/// A CSS length such as `"4px"` or `"50%"`, given directly or produced on demand.
pub type Length = Value<String>;

fn resolve_or_zero(length: Option<&Length>) -> String {
    match length.map(Value::resolve) {
        Some(text) if !text.is_empty() => text,
        _ => ZERO_LENGTH.to_owned(),
    }
}

/// Four-sided insets for `margin` and `padding`.
#[derive(Clone, Debug, Default)]
pub struct EdgeInsets {
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
}

impl EdgeInsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(length: impl Into<Length>) -> Self {
        let length = length.into();
        Self {
            top: Some(length.clone()),
            right: Some(length.clone()),
            bottom: Some(length.clone()),
            left: Some(length),
        }
    }

    pub fn symmetric(vertical: impl Into<Length>, horizontal: impl Into<Length>) -> Self {
        let vertical = vertical.into();
        let horizontal = horizontal.into();
        Self {
            top: Some(vertical.clone()),
            right: Some(horizontal.clone()),
            bottom: Some(vertical),
            left: Some(horizontal),
        }
    }

    pub fn top(mut self, length: impl Into<Length>) -> Self {
        self.top = Some(length.into());
        self
    }

    pub fn right(mut self, length: impl Into<Length>) -> Self {
        self.right = Some(length.into());
        self
    }

    pub fn bottom(mut self, length: impl Into<Length>) -> Self {
        self.bottom = Some(length.into());
        self
    }

    pub fn left(mut self, length: impl Into<Length>) -> Self {
        self.left = Some(length.into());
        self
    }

    /// `"top right bottom left"`, with missing or empty sides as `0px`.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {} {} {}",
            resolve_or_zero(self.top.as_ref()),
            resolve_or_zero(self.right.as_ref()),
            resolve_or_zero(self.bottom.as_ref()),
            resolve_or_zero(self.left.as_ref()),
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameSize {
    pub width: Option<Length>,
    pub height: Option<Length>,
}

impl FrameSize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, length: impl Into<Length>) -> Self {
        self.width = Some(length.into());
        self
    }

    pub fn height(mut self, length: impl Into<Length>) -> Self {
        self.height = Some(length.into());
        self
    }

    pub(crate) fn resolve(&self) -> (String, String) {
        (
            resolve_or_zero(self.width.as_ref()),
            resolve_or_zero(self.height.as_ref()),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Border {
    pub width: Length,
    pub style: Value<BorderStyle>,
    pub color: Value<Paint>,
}

impl Border {
    pub fn new(
        width: impl Into<Length>,
        style: impl Into<Value<BorderStyle>>,
        color: impl Into<Value<Paint>>,
    ) -> Self {
        Self {
            width: width.into(),
            style: style.into(),
            color: color.into(),
        }
    }

    /// `"width style color"`.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {} {}",
            self.width.resolve(),
            self.style.resolve(),
            self.color.resolve()
        )
    }
}
