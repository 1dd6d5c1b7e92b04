use swui_core::{StyleValue, Value, View, ViewKind};
use swui_graphics::{FontStyle, FontWeight, TextAlign, TextDecoration};

use super::Modifiable;
use crate::bundle::HasText;

/// Typography modifiers, available on text views.
pub trait TextModifiers: Modifiable {
    fn font_size(self, size: impl Into<Value<String>>) -> Self {
        self.set_style("font-size", size.into().resolve())
    }

    /// Numeric weights are stored as numbers, keywords as text.
    fn font_weight(self, weight: impl Into<FontWeight>) -> Self {
        let weight = weight.into();
        let value = match weight.numeric() {
            Some(numeric) => StyleValue::from(numeric),
            None => StyleValue::from(weight.to_string()),
        };
        self.set_style("font-weight", value)
    }

    fn text_align(self, alignment: TextAlign) -> Self {
        self.set_style("text-align", alignment.as_str())
    }

    fn font_style(self, style: FontStyle) -> Self {
        self.set_style("font-style", style.as_str())
    }

    fn text_decoration(self, decoration: TextDecoration) -> Self {
        self.set_style("text-decoration", decoration.as_str())
    }
}

impl<K: ViewKind, B: HasText> TextModifiers for View<K, B> {}
