//! Cross-axis alignment.

/// Anything that can be written as an `align-items` token.
pub trait CrossAlignment {
    fn align_items(&self) -> &'static str;
}

/// Cross-axis alignment of children inside a vertical stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
    Fill,
}

impl CrossAlignment for HorizontalAlignment {
    fn align_items(&self) -> &'static str {
        match self {
            HorizontalAlignment::Leading => "flex-start",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Trailing => "flex-end",
            HorizontalAlignment::Fill => "stretch",
        }
    }
}

/// Cross-axis alignment of children inside a horizontal stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
    Fill,
}

impl CrossAlignment for VerticalAlignment {
    fn align_items(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "flex-start",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "flex-end",
            VerticalAlignment::Fill => "stretch",
        }
    }
}
