use crate::{
    element::{abs_diff, partial_max, partial_min, Element},
    BoundingBox,
};

/// The generic axis-aligned rectangle.
///
/// Coordinates grow from left to right and from top to bottom.
pub trait Rect {
    type Type;

    fn left(&self) -> Self::Type;
    fn right(&self) -> Self::Type;
    fn top(&self) -> Self::Type;
    fn bottom(&self) -> Self::Type;
}

pub trait RectNum: Rect
where
    Self::Type: Element,
{
    fn lrtb(&self) -> [Self::Type; 4] {
        [self.left(), self.right(), self.top(), self.bottom()]
    }

    fn width(&self) -> Self::Type {
        abs_diff(self.left(), self.right())
    }

    fn height(&self) -> Self::Type {
        abs_diff(self.top(), self.bottom())
    }

    fn to_bounding_box(&self) -> BoundingBox<Self::Type> {
        let [l, r, t, b] = self.lrtb();
        BoundingBox::new(l, r, t, b)
    }

    /// Width times height, computed in the coordinate type.
    ///
    /// Integer coordinates overflow like the plain integer product, so an
    /// `i32` box whose width times height exceeds `i32::MAX` panics in debug
    /// builds. Use a wider coordinate type such as `i64` for such boxes.
    fn area(&self) -> Self::Type {
        self.width() * self.height()
    }

    /// True when the two rectangles share no pixel, not even an edge.
    fn is_disjoint_with<R>(&self, other: &R) -> bool
    where
        R: Rect<Type = Self::Type>,
    {
        self.bottom() < other.top()
            || other.bottom() < self.top()
            || self.right() < other.left()
            || other.right() < self.left()
    }

    /// Compute the overlapping region.
    ///
    /// Disjoint rectangles yield the zero box, which is indistinguishable
    /// from a genuine zero-area overlap at the origin.
    fn intersect_with<R>(&self, other: &R) -> BoundingBox<Self::Type>
    where
        R: Rect<Type = Self::Type>,
    {
        if self.is_disjoint_with(other) {
            return BoundingBox::default();
        }

        BoundingBox::new(
            partial_max(self.left(), other.left()),
            partial_min(self.right(), other.right()),
            partial_max(self.top(), other.top()),
            partial_min(self.bottom(), other.bottom()),
        )
    }

    /// Area covered by either rectangle.
    fn union_area_with<R>(&self, other: &R) -> Self::Type
    where
        R: Rect<Type = Self::Type>,
    {
        self.area() + other.area() - self.intersect_with(other).area()
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Element,
{
}
