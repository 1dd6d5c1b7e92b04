//! Modifier bundles for swui views.
//!
//! Every modifier writes into the view's shared state and hands the same
//! handle back, so calls chain left to right and each one sees the writes of
//! those before it.

mod args;
mod base;
mod layout;
mod text;

pub use self::args::{Border, BorderStyle, EdgeInsets, FrameSize, Length};
pub use self::base::CoreModifiers;
pub use self::layout::LayoutModifiers;
pub use self::text::TextModifiers;

use swui_core::{BundleSet, SharedState, StyleValue, View, ViewKind, ViewState};

/// Something whose view state modifiers can write to.
pub trait Modifiable: Sized {
    fn shared_state(&self) -> &SharedState;

    /// Applies `f` to the state and returns `self` for chaining.
    fn update(self, f: impl FnOnce(&mut ViewState)) -> Self {
        f(&mut *self.shared_state().borrow_mut());
        self
    }

    fn set_style(self, key: &str, value: impl Into<StyleValue>) -> Self {
        let value = value.into();
        self.update(|state| {
            state.style.insert(key.to_owned(), value);
        })
    }

    fn set_property(self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        self.update(|state| {
            state.properties.insert(key.to_owned(), value);
        })
    }
}

impl<K: ViewKind, B: BundleSet> Modifiable for View<K, B> {
    fn shared_state(&self) -> &SharedState {
        View::shared_state(self)
    }
}

#[cfg(test)]
#[path = "../tests/modifier_tests.rs"]
mod tests;
