//! Tests for disks, radius bounds and radius policies

#[cfg(test)]
mod tests {
    use pointillize::AlgorithmError;
    use pointillize::spatial::disk::center_distance;
    use pointillize::spatial::{Disk, RadiusBounds, RadiusPolicy};

    // Tests bounds follow the ceil(side / divisor) rule
    // Verified by using floor division
    #[test]
    fn test_from_dimensions_uses_ceiling() {
        let bounds = RadiusBounds::from_dimensions(640, 480, 200, 50).unwrap();
        assert_eq!(bounds.min, 3);
        assert_eq!(bounds.max, 13);

        let bounds = RadiusBounds::from_dimensions(100, 100, 200, 50).unwrap();
        assert_eq!(bounds.min, 1);
        assert_eq!(bounds.max, 2);
    }

    // Tests orientation does not matter, only shorter and longer side
    // Verified by dividing width and height instead of shorter and longer side
    #[test]
    fn test_from_dimensions_orientation_independent() {
        let landscape = RadiusBounds::from_dimensions(800, 200, 20, 10).unwrap();
        let portrait = RadiusBounds::from_dimensions(200, 800, 20, 10).unwrap();
        assert_eq!(landscape, portrait);
        assert_eq!(landscape.min, 10);
        assert_eq!(landscape.max, 80);
    }

    // Tests zero dimensions and divisors are rejected
    // Verified by removing the zero checks
    #[test]
    fn test_from_dimensions_rejects_zero() {
        assert!(RadiusBounds::from_dimensions(0, 10, 200, 50).is_err());
        assert!(RadiusBounds::from_dimensions(10, 10, 0, 50).is_err());
        assert!(RadiusBounds::from_dimensions(10, 10, 200, 0).is_err());
    }

    // Tests divisors producing an inverted range are rejected
    // Verified by skipping the min > max check
    #[test]
    fn test_from_dimensions_rejects_inverted_divisors() {
        let result = RadiusBounds::from_dimensions(1000, 1000, 10, 500);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "max_radius",
                ..
            })
        ));
    }

    // Tests explicit bounds validation
    // Verified by allowing a zero minimum radius
    #[test]
    fn test_new_validates() {
        assert!(RadiusBounds::new(0, 5).is_err());
        assert!(RadiusBounds::new(6, 5).is_err());
        let bounds = RadiusBounds::new(5, 5).unwrap();
        assert!(bounds.contains(5));
        assert!(!bounds.contains(4));
        assert!(!bounds.contains(6));
    }

    // Tests both policy variants resolve
    // Verified by ignoring explicit values
    #[test]
    fn test_radius_policy_resolve() {
        let derived = RadiusPolicy::default().resolve(400, 200).unwrap();
        assert_eq!(derived, RadiusBounds { min: 1, max: 8 });

        let explicit = RadiusPolicy::Explicit { min: 2, max: 9 }
            .resolve(400, 200)
            .unwrap();
        assert_eq!(explicit, RadiusBounds { min: 2, max: 9 });
    }

    // Tests normalized distance divides by the disk's own radius
    // Verified by dividing by the squared radius
    #[test]
    fn test_normalized_distance() {
        let disk = Disk {
            center: [10, 10],
            radius: 4,
            color: [0.0, 0.0, 0.0],
        };

        assert!((disk.distance_to([13, 14]) - 5.0).abs() < 1e-12);
        assert!((disk.normalized_distance_to([13, 14]) - 1.25).abs() < 1e-12);
        assert!((center_distance([0, 0], [6, 8]) - 10.0).abs() < 1e-12);
    }

    // Tests color quantization rounds and clamps
    // Verified by truncating instead of rounding
    #[test]
    fn test_color_bytes() {
        let disk = Disk {
            center: [0, 0],
            radius: 1,
            color: [1.0, 0.5, 0.0],
        };
        assert_eq!(disk.color_bytes(), [255, 128, 0]);

        let out_of_range = Disk {
            color: [1.5, -0.2, 0.2],
            ..disk
        };
        assert_eq!(out_of_range.color_bytes(), [255, 0, 51]);
    }
}
