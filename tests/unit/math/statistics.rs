//! Tests for linearly interpolated percentiles

#[cfg(test)]
mod tests {
    use pointillize::math::statistics::{percentile_sorted, percentile_spread};

    // Tests interpolation between closest ranks
    // Verified by rounding the rank to the nearest index
    #[test]
    fn test_percentile_sorted_interpolates() {
        let values = [0.0_f64, 10.0, 20.0, 30.0, 40.0];

        assert_eq!(percentile_sorted(&values, 0.0), Some(0.0));
        assert_eq!(percentile_sorted(&values, 100.0), Some(40.0));
        assert_eq!(percentile_sorted(&values, 50.0), Some(20.0));

        let p5 = percentile_sorted(&values, 5.0).unwrap();
        assert!((p5 - 2.0).abs() < 1e-12, "got {p5}");
        let p95 = percentile_sorted(&values, 95.0).unwrap();
        assert!((p95 - 38.0).abs() < 1e-12, "got {p95}");
    }

    // Tests a single value is every percentile
    // Verified by dividing by n instead of n - 1
    #[test]
    fn test_percentile_sorted_single_value() {
        assert_eq!(percentile_sorted(&[0.25_f64], 5.0), Some(0.25));
        assert_eq!(percentile_sorted(&[0.25_f64], 95.0), Some(0.25));
    }

    // Tests empty input and out-of-range percentiles are rejected
    // Verified by removing the range guard
    #[test]
    fn test_percentile_sorted_rejects_invalid_input() {
        let empty: [f64; 0] = [];
        assert_eq!(percentile_sorted(&empty, 50.0), None);
        assert_eq!(percentile_sorted(&[1.0_f64, 2.0], -1.0), None);
        assert_eq!(percentile_sorted(&[1.0_f64, 2.0], 101.0), None);
        assert_eq!(percentile_sorted(&[1.0_f64, 2.0], f64::NAN), None);
    }

    // Tests spread sorts its input before measuring
    // Verified by skipping the sort
    #[test]
    fn test_percentile_spread_unsorted_input() {
        let mut values = vec![40.0_f64, 0.0, 30.0, 10.0, 20.0];
        let spread = percentile_spread(&mut values, 5.0, 95.0).unwrap();

        assert!((spread - 36.0).abs() < 1e-12, "got {spread}");
        assert_eq!(values, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    // Tests a few outliers barely move the spread
    // Verified by using min and max instead of percentiles
    #[test]
    fn test_percentile_spread_robust_to_outlier() {
        let mut values = vec![0.5_f64; 99];
        values.push(1.0);

        let spread = percentile_spread(&mut values, 5.0, 95.0).unwrap();
        assert!(spread.abs() < 1e-12, "got {spread}");
    }

    // Tests constant data has zero spread
    // Verified by returning the upper percentile alone
    #[test]
    fn test_percentile_spread_constant() {
        let mut values = vec![0.7_f32; 12];
        assert_eq!(percentile_spread(&mut values, 5.0, 95.0), Some(0.0));
    }
}
