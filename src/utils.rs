/// Linear interpolation between `from` and `to`.
///
/// `t = 0.` returns `from`, `t = 1.` returns `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (1. - t) * from + t * to
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_abs_diff_eq!(lerp(2., 10., 0.), 2.);
        assert_abs_diff_eq!(lerp(2., 10., 1.), 10.);
    }

    #[test]
    fn lerp_midpoint() {
        assert_abs_diff_eq!(lerp(0., 10., 0.5), 5.);
        assert_abs_diff_eq!(lerp(-4., 4., 0.5), 0.);
    }
}
