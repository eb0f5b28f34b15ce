use approx::assert_abs_diff_eq;
use unit_wrapper::unit_ops;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pixel(f64);

unit_ops!(Pixel, f64);

#[test]
fn f64_wrapper_test() {
    let zero: Pixel = Pixel(2.0) * Pixel(3.0) - Pixel(6.0);
    assert!(zero.0.abs() <= 1e-10);
}

#[test]
fn scalar_on_either_side() {
    assert_eq!(Pixel(4.0) + 5.0, Pixel(9.0));
    assert_eq!(4.0_f64 - Pixel(5.0), Pixel(-1.0));
    assert_eq!(Pixel(4.0) * 5.0, Pixel(20.0));
    assert_eq!(20.0_f64 / Pixel(5.0), Pixel(4.0));
    assert_eq!(23.0_f64 % Pixel(5.0), Pixel(3.0));
    assert_eq!(-Pixel(4.0), Pixel(-4.0));
}

#[test]
fn compound_assignment() {
    let mut pixel = Pixel(23.0);
    pixel %= Pixel(5.0);
    assert_eq!(pixel, Pixel(3.0));
    pixel %= 2.0;
    assert_eq!(pixel, Pixel(1.0));

    pixel += 4.0;
    pixel *= Pixel(3.0);
    pixel -= 5.0;
    pixel /= Pixel(2.0);
    assert_eq!(pixel, Pixel(5.0));
}

#[test]
fn division_by_zero_is_unchecked() {
    assert!((Pixel(1.0) / 0.0).0.is_infinite());
    assert!((Pixel(0.0) / Pixel(0.0)).0.is_nan());
    assert!((Pixel(1.0) % 0.0).0.is_nan());
}

#[test]
fn conversions_and_sum() {
    let pixel: Pixel = 1.5_f64.into();
    let raw: f64 = pixel.into();
    assert_abs_diff_eq!(raw, 1.5);

    let total: Pixel = [0.25, 0.5, 0.75].into_iter().map(Pixel).sum();
    assert_abs_diff_eq!(total.0, 1.5);
}
