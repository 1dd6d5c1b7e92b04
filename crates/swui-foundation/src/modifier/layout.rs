use swui_core::{View, ViewKind};
use swui_graphics::px;
use swui_layout::{Axis, CrossAlignment, Distribution};

use super::Modifiable;
use crate::bundle::HasLayout;

/// Flex container modifiers, available on stack and list views.
pub trait LayoutModifiers: Modifiable {
    fn spacing(self, spacing: f64) -> Self {
        self.set_style("gap", px(spacing))
    }

    fn alignment(self, alignment: impl CrossAlignment) -> Self {
        self.set_style("align-items", alignment.align_items())
    }

    fn distribution(self, distribution: Distribution) -> Self {
        self.set_style("justify-content", distribution.justify_content())
    }

    fn axis(self, axis: Axis) -> Self {
        self.set_style("flex-direction", axis.flex_direction())
    }

    fn wrap(self, wrap: bool) -> Self {
        self.set_style("flex-wrap", if wrap { "wrap" } else { "nowrap" })
    }
}

impl<K: ViewKind, B: HasLayout> LayoutModifiers for View<K, B> {}
