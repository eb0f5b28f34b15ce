//! Intersection-over-union scores for pairs of bounding boxes.

mod common;

pub use score::*;
mod score;

pub use make_iou::*;
mod make_iou;
