use crate::{common::*, IoU, Value};
use bbox::{area, intersection};

/// Compute the intersection over union of two boxes.
///
/// This never fails. When [try_make_iou] reports a fault the zero score is
/// returned instead. A zero denominator is not a fault: two degenerate boxes
/// produce NaN, which is returned as is.
pub fn make_iou<T>(a: &BoundingBox<T>, b: &BoundingBox<T>) -> IoU
where
    T: Element + ToPrimitive,
{
    try_make_iou(a, b).unwrap_or_else(|err| {
        debug!("IoU derivation failed, falling back to zero: {:#}", err);
        IoU::default()
    })
}

/// Compute the intersection over union of two boxes, reporting faults.
///
/// The geometry is evaluated in `f64` so that narrow boxes far from the origin
/// and very small float boxes keep their extent, and integer areas cannot
/// overflow. Only the final ratio is narrowed to [Value]. It fails if a
/// coordinate cannot be represented as `f64` or if an area is not finite.
pub fn try_make_iou<T>(a: &BoundingBox<T>, b: &BoundingBox<T>) -> Result<IoU>
where
    T: Element + ToPrimitive,
{
    let out_of_range = || format_err!("box coordinates are out of f64 range");
    let a: BoundingBox<f64> = a.try_cast().ok_or_else(out_of_range)?;
    let b: BoundingBox<f64> = b.try_cast().ok_or_else(out_of_range)?;

    let area_a = area(&a);
    let area_b = area(&b);
    ensure!(
        area_a.is_finite() && area_b.is_finite(),
        "box area is not finite, got {} and {}",
        area_a,
        area_b
    );

    let inter_area = area(&intersection(&a, &b));
    let ratio = inter_area / (area_a + area_b - inter_area);
    Ok(IoU::new(ratio as Value))
}

/// Method form of [make_iou] on rectangles.
pub trait IoUExt: RectNum
where
    Self::Type: Element + ToPrimitive,
{
    fn iou_with<R>(&self, other: &R) -> IoU
    where
        R: Rect<Type = Self::Type>,
    {
        make_iou(&self.to_bounding_box(), &other.to_bounding_box())
    }
}

impl<T> IoUExt for T
where
    T: Rect,
    T::Type: Element + ToPrimitive,
{
}
