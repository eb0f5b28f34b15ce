//! Arithmetic for single-field scalar newtypes.
//!
//! [unit_ops] implements the operator surface of the wrapped scalar on a tuple
//! struct `Name(scalar)`, so the newtype can be combined with itself and with
//! bare scalars on either side. Comparison is left to the caller.

/// Implement arithmetic operators for the newtype `$name` wrapping `$scalar`.
///
/// Generated impls:
///
/// - `From<$scalar>` for `$name` and `From<$name>` for `$scalar`,
/// - `Add`, `Sub`, `Mul`, `Div` and `Rem` for `$name op $name`,
///   `$name op $scalar` and `$scalar op $name`,
/// - the matching `*Assign` impls with `$name` or `$scalar` on the right,
/// - `Neg` and `Sum`.
///
/// The operators forward to the scalar and add no checks, so integer types
/// keep their overflow and division-by-zero behavior and float types produce
/// infinities and NaN.
///
/// The macro must be invoked in the module that defines `$name`.
#[macro_export]
macro_rules! unit_ops {
    (@binary $name:ident, $scalar:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl std::ops::$op<$name> for $name {
            type Output = $name;

            fn $method(self, rhs: $name) -> Self::Output {
                use std::ops::$op;
                $name(self.0.$method(rhs.0))
            }
        }

        impl std::ops::$op<$scalar> for $name {
            type Output = $name;

            fn $method(self, rhs: $scalar) -> Self::Output {
                use std::ops::$op;
                $name(self.0.$method(rhs))
            }
        }

        impl std::ops::$op<$name> for $scalar {
            type Output = $name;

            fn $method(self, rhs: $name) -> Self::Output {
                use std::ops::$op;
                $name(self.$method(rhs.0))
            }
        }

        impl std::ops::$op_assign<$name> for $name {
            fn $method_assign(&mut self, rhs: $name) {
                use std::ops::$op_assign;
                self.0.$method_assign(rhs.0);
            }
        }

        impl std::ops::$op_assign<$scalar> for $name {
            fn $method_assign(&mut self, rhs: $scalar) {
                use std::ops::$op_assign;
                self.0.$method_assign(rhs);
            }
        }
    };
    ($name:ident, $scalar:ty) => {
        impl From<$scalar> for $name {
            fn from(value: $scalar) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $scalar {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        $crate::unit_ops!(@binary $name, $scalar, Add, add, AddAssign, add_assign);
        $crate::unit_ops!(@binary $name, $scalar, Sub, sub, SubAssign, sub_assign);
        $crate::unit_ops!(@binary $name, $scalar, Mul, mul, MulAssign, mul_assign);
        $crate::unit_ops!(@binary $name, $scalar, Div, div, DivAssign, div_assign);
        $crate::unit_ops!(@binary $name, $scalar, Rem, rem, RemAssign, rem_assign);

        impl std::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                $name(-self.0)
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I>(iter: I) -> Self
            where
                I: Iterator<Item = Self>,
            {
                $name(iter.map(|value| value.0).sum())
            }
        }
    };
}
