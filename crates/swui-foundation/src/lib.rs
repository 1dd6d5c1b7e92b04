//! Foundation layer for swui
//!
//! Modifier bundles live here. [`CoreModifiers`] is available on every view;
//! [`TextModifiers`] and [`LayoutModifiers`] only on views whose bundle set
//! opts into them through [`TextBundle`] or [`LayoutBundle`].

mod bundle;
pub mod gestures;
mod hover;
pub mod modifier;

pub use bundle::*;
pub use hover::HoverEffect;
pub use modifier::{
    Border, BorderStyle, CoreModifiers, EdgeInsets, FrameSize, LayoutModifiers, Length,
    Modifiable, TextModifiers,
};

pub mod prelude {
    pub use crate::bundle::{CoreBundle, LayoutBundle, TextBundle};
    pub use crate::hover::HoverEffect;
    pub use crate::modifier::{
        Border, BorderStyle, CoreModifiers, EdgeInsets, FrameSize, LayoutModifiers,
        TextModifiers,
    };
}
