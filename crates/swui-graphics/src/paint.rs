//! The color-or-gradient value accepted by foreground and background modifiers.

use std::fmt;

use crate::color::Color;
use crate::gradient::Gradient;

/// A resolved paint: either a solid color or a gradient.
///
/// Consumers branch on the variant to decide which style keys to populate;
/// both variants print their canonical CSS text through `Display`.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Paint {
    pub fn is_gradient(&self) -> bool {
        matches!(self, Paint::Gradient(_))
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Paint::Solid(color) => Some(*color),
            Paint::Gradient(_) => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Paint::Gradient(gradient)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(color) => color.fmt(f),
            Paint::Gradient(gradient) => gradient.fmt(f),
        }
    }
}
