//! Normalized bounding box types and overlap geometry.

mod common;

pub use bounding_box::*;
pub mod bounding_box;

pub use into_bounding_box::*;
pub mod into_bounding_box;

pub use rect::*;
pub mod rect;

pub use element::*;
pub mod element;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
