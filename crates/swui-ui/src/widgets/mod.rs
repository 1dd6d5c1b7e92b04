//! UI Widget components

pub mod builder;
pub mod button;
pub mod foreach;
pub mod group;
pub mod shape;
pub mod spacer;
pub mod stack;
pub mod text;

pub use builder::*;
pub use button::*;
pub use foreach::*;
pub use group::*;
pub use shape::*;
pub use spacer::*;
pub use stack::*;
pub use text::*;
