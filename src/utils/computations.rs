use super::{Real, Vec3};

/// Map a coordinate difference onto its nearest periodic image.
///
/// The result lies in `[-L/2, L/2]`. Only a single box image is considered,
/// so pair interactions are exact only while the cutoff is below `L/2`.
///
/// ```rust
/// use tiny_md::utils::minimum_image;
///
/// assert_eq!(minimum_image(9.0_f64, 10.0), -1.0);
/// assert_eq!(minimum_image(-4.0_f64, 10.0), -4.0);
/// ```
#[inline]
pub fn minimum_image<T: Real>(d: T, length: T) -> T {
    d - length * (d / length).round()
}

/// Wrap a coordinate back into the half-open box `[0, L)`.
///
/// ```rust
/// use tiny_md::utils::wrap_into_box;
///
/// assert_eq!(wrap_into_box(12.5_f64, 10.0), 2.5);
/// assert_eq!(wrap_into_box(-2.5_f64, 10.0), 7.5);
/// ```
#[inline]
pub fn wrap_into_box<T: Real>(x: T, length: T) -> T {
    let mut wrapped = x - length * (x / length).floor();
    // x just below k·L can round x/L up to k
    if wrapped < T::zero() {
        wrapped += length;
    }
    // a tiny negative x rounds up to exactly L
    if wrapped >= length {
        T::zero()
    } else {
        wrapped
    }
}

/// Minimum-image displacement `a - b` and its squared norm.
#[inline]
pub fn displacement<T: Real>(a: &Vec3<T>, b: &Vec3<T>, length: T) -> (Vec3<T>, T) {
    let d = [
        minimum_image(a[0] - b[0], length),
        minimum_image(a[1] - b[1], length),
        minimum_image(a[2] - b[2], length),
    ];
    (d, d[0] * d[0] + d[1] * d[1] + d[2] * d[2])
}

/// Sum of squared magnitudes over a set of vectors.
pub fn sum_squares<T: Real>(vectors: &[Vec3<T>]) -> T {
    vectors
        .iter()
        .map(|v| v[0] * v[0] + v[1] * v[1] + v[2] * v[2])
        .sum()
}
