use crate::common::*;

/// The scalar type carried by [IoU].
pub type Value = f32;

/// Absolute tolerance of IoU equality, effective near zero.
pub const FUZZY_EPSILON: Value = Value::EPSILON;

/// Relative tolerance of IoU equality.
pub const FUZZY_MAX_RELATIVE: Value = 1e-5;

/// An intersection-over-union ratio.
///
/// The value is expected to lie in `[0, 1]` but is neither clamped nor
/// validated. Arithmetic forwards to the underlying [Value], including NaN and
/// infinity propagation.
///
/// # Warning
///
/// Division and remainder do not guard against division by zero.
///
/// # Comparison
///
/// `==` and `!=` are fuzzy: values that differ only by rounding error compare
/// equal. `<` and `>` compare the values exactly, while `<=` and `>=` are
/// `<` or `>` combined with the fuzzy `==`.
///
/// `partial_cmp` reports `Equal` for fuzzy-equal values, so it can disagree
/// with `<` and `>`: sorting or `max_by` through `partial_cmp` treats such
/// values as ties even though `<` tells them apart.
///
/// ```
/// use iou::IoU;
///
/// let a = IoU::new(0.3);
/// let b = IoU::new(0.300_000_04);
/// assert!(a == b);
/// assert!(a < b);
/// assert!(b <= a);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IoU(Value);

unit_wrapper::unit_ops!(IoU, Value);

impl IoU {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Value {
        self.0
    }

    /// Replace the stored value.
    pub fn set(&mut self, value: Value) -> &mut Self {
        self.0 = value;
        self
    }
}

impl AbsDiffEq for IoU {
    type Epsilon = Value;

    fn default_epsilon() -> Self::Epsilon {
        FUZZY_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for IoU {
    fn default_max_relative() -> Self::Epsilon {
        FUZZY_MAX_RELATIVE
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl PartialEq for IoU {
    fn eq(&self, other: &Self) -> bool {
        self.relative_eq(other, Self::default_epsilon(), Self::default_max_relative())
    }
}

impl PartialOrd for IoU {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    fn le(&self, other: &Self) -> bool {
        self.0 < other.0 || self == other
    }

    fn gt(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    fn ge(&self, other: &Self) -> bool {
        self.0 > other.0 || self == other
    }
}

impl Display for IoU {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
