use crate::common::*;

/// Scalar types usable as box coordinates.
pub trait Element: Copy + Num + PartialOrd {}

impl<T> Element for T where T: Copy + Num + PartialOrd {}

/// The smaller of two values. Returns `a` when they are equal or unordered.
pub(crate) fn partial_min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b < a {
        b
    } else {
        a
    }
}

/// The larger of two values. Returns `a` when they are equal or unordered.
pub(crate) fn partial_max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if a < b {
        b
    } else {
        a
    }
}

/// `|a - b|` that also works for unsigned types.
pub(crate) fn abs_diff<T>(a: T, b: T) -> T
where
    T: Element,
{
    if a < b {
        b - a
    } else {
        a - b
    }
}
