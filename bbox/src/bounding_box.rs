use crate::{
    common::*,
    element::{partial_max, partial_min, Element},
    rect::{Rect, RectNum},
};

#[cfg(feature = "serde")]
use crate::into_bounding_box::BoundingBox_;

/// Alias a bounding box with integer pixel coordinates.
pub type IntegerBox = BoundingBox<i32>;

/// Bounding box on an image, normalized so that `left <= right` and `top <= bottom`.
///
/// The box is immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "BoundingBox_<T>",
        into = "BoundingBox_<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: Element + serde::Deserialize<'de>"
        )
    )
)]
pub struct BoundingBox<T> {
    pub(crate) left: T,
    pub(crate) right: T,
    pub(crate) top: T,
    pub(crate) bottom: T,
}

impl<T> BoundingBox<T>
where
    T: Element,
{
    /// Construct a bounding box from two column and two row coordinates.
    ///
    /// The smaller column becomes `left` and the larger `right`; likewise the
    /// smaller row becomes `top` and the larger `bottom`.
    pub fn new(column_1: T, column_2: T, row_1: T, row_2: T) -> Self {
        Self {
            left: partial_min(column_1, column_2),
            right: partial_max(column_1, column_2),
            top: partial_min(row_1, row_2),
            bottom: partial_max(row_1, row_2),
        }
    }
}

impl<T> BoundingBox<T> {
    pub fn try_cast<V>(self) -> Option<BoundingBox<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(BoundingBox {
            left: V::from(self.left)?,
            right: V::from(self.right)?,
            top: V::from(self.top)?,
            bottom: V::from(self.bottom)?,
        })
    }

    /// Like [try_cast](Self::try_cast), but panics if a coordinate does not fit.
    pub fn cast<V>(self) -> BoundingBox<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> Default for BoundingBox<T>
where
    T: Element,
{
    fn default() -> Self {
        let zero = T::zero();
        Self {
            left: zero,
            right: zero,
            top: zero,
            bottom: zero,
        }
    }
}

impl<T> Rect for BoundingBox<T>
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

impl<T> Display for BoundingBox<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.right, self.top, self.bottom
        )
    }
}

/// Area of the box.
///
/// Computed in `T`, so integer areas overflow like the plain integer product.
pub fn area<T>(rect: &BoundingBox<T>) -> T
where
    T: Element,
{
    rect.area()
}

/// Overlapping region of two boxes, or the zero box if they are disjoint.
pub fn intersection<T>(a: &BoundingBox<T>, b: &BoundingBox<T>) -> BoundingBox<T>
where
    T: Element,
{
    a.intersect_with(b)
}

/// Area covered by either box.
///
/// The union of two rectangles is generally not a rectangle, so only its area
/// is returned. It is computed in `T` and shares the overflow behavior of
/// [area].
pub fn box_union_area<T>(a: &BoundingBox<T>, b: &BoundingBox<T>) -> T
where
    T: Element,
{
    a.union_area_with(b)
}
