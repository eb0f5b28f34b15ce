use crate::{element::Element, rect::Rect, BoundingBox};

/// Bounding box with public, unchecked fields.
///
/// Converting it into a [BoundingBox] normalizes the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox_<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl<T> Rect for BoundingBox_<T>
where
    T: Copy,
{
    type Type = T;

    fn left(&self) -> Self::Type {
        self.left
    }

    fn right(&self) -> Self::Type {
        self.right
    }

    fn top(&self) -> Self::Type {
        self.top
    }

    fn bottom(&self) -> Self::Type {
        self.bottom
    }
}

impl<T> From<BoundingBox_<T>> for BoundingBox<T>
where
    T: Element,
{
    fn from(from: BoundingBox_<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&BoundingBox_<T>> for BoundingBox<T>
where
    T: Element,
{
    fn from(from: &BoundingBox_<T>) -> Self {
        let BoundingBox_ {
            left,
            right,
            top,
            bottom,
        } = *from;
        Self::new(left, right, top, bottom)
    }
}

impl<T> From<BoundingBox<T>> for BoundingBox_<T> {
    fn from(from: BoundingBox<T>) -> Self {
        let BoundingBox {
            left,
            right,
            top,
            bottom,
        } = from;
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}
