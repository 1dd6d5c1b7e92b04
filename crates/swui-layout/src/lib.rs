//! Layout tokens for swui
//!
//! swui does not measure or place anything itself; stacks describe their
//! layout to the host renderer as flexbox tokens. This crate holds the typed
//! vocabulary those tokens come from.

mod alignment;
mod arrangement;
mod axis;

pub use alignment::*;
pub use arrangement::*;
pub use axis::*;

pub mod prelude {
    pub use crate::alignment::{CrossAlignment, HorizontalAlignment, VerticalAlignment};
    pub use crate::arrangement::Distribution;
    pub use crate::axis::Axis;
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
