//! Pure data for drawing & units in swui
//!
//! This crate contains color definitions, gradients, the color-or-gradient
//! [`Paint`] value, typography tokens and unit helpers. Everything here
//! resolves to the canonical CSS text a style map stores.

mod color;
mod gradient;
mod paint;
mod typography;
mod unit;

pub use color::*;
pub use gradient::*;
pub use paint::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::gradient::{ColorStop, Gradient, GradientKind};
    pub use crate::paint::Paint;
    pub use crate::typography::{
        FontStyle, FontWeight, TextAlign, TextCase, TextDecoration, TruncationMode,
    };
    pub use crate::unit::{deg, percent, px, ZERO_LENGTH};
}
