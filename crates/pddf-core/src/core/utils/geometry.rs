use nalgebra::Point3;

/// Euclidean distance between two points, `sqrt(dx² + dy² + dz²)`.
#[inline]
pub fn euclidean_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Number of unordered pairs `(i, j)` with `i < j` among `n` atoms.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn euclidean_distance_includes_all_three_components() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(2.0, 4.0, 5.0);
        assert!(f64_approx_equal(euclidean_distance(&a, &b), 3.0));
    }

    #[test]
    fn euclidean_distance_is_symmetric_and_non_negative() {
        let a = Point3::new(-1.5, 0.25, 7.0);
        let b = Point3::new(3.0, -2.0, 1.0);
        let forward = euclidean_distance(&a, &b);
        let backward = euclidean_distance(&b, &a);
        assert_eq!(forward, backward);
        assert!(forward >= 0.0);
    }

    #[test]
    fn euclidean_distance_of_identical_points_is_zero() {
        let a = Point3::new(0.5, 0.5, 0.5);
        assert_eq!(euclidean_distance(&a, &a), 0.0);
    }

    #[test]
    fn pair_count_matches_triangular_numbers() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(3), 3);
        assert_eq!(pair_count(147), 147 * 146 / 2);
    }
}
