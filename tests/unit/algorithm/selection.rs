//! Tests for candidate scoring and selection

#[cfg(test)]
mod tests {
    use pointillize::algorithm::selection::{CandidateSelector, NeighborMode};
    use pointillize::spatial::{Disk, PlacedSet};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn disk(center: [u32; 2], radius: u32) -> Disk {
        Disk {
            center,
            radius,
            color: [0.0, 0.0, 0.0],
        }
    }

    fn placed_with(disks: &[Disk]) -> PlacedSet {
        let mut placed = PlacedSet::new(100, 100, 10);
        for &d in disks {
            placed.push(d);
        }
        placed
    }

    // Tests the kernel uses distance normalized by the neighbor's radius
    // Verified by dropping the radius normalization
    #[test]
    fn test_score_normalizes_by_radius() {
        let placed = placed_with(&[disk([10, 10], 2)]);
        let mut selector = CandidateSelector::new(1, NeighborMode::BruteForce);

        assert!((selector.score([10, 10], &placed) - 1.0).abs() < 1e-12);
        assert!((selector.score([14, 10], &placed) - (-4.0_f64).exp()).abs() < 1e-12);
    }

    // Tests the score is a mean, not a sum, over considered disks
    // Verified by summing kernel values
    #[test]
    fn test_score_is_mean() {
        let placed = placed_with(&[disk([10, 10], 5), disk([90, 90], 5)]);
        let mut selector = CandidateSelector::new(1, NeighborMode::BruteForce);

        let score = selector.score([10, 10], &placed);
        let far = (-(80.0_f64.hypot(80.0) / 5.0).powi(2)).exp();

        assert!((score - (1.0 + far) / 2.0).abs() < 1e-12);
    }

    // Tests nearest mode only averages over the k closest centers
    // Verified by scoring against every disk in nearest mode
    #[test]
    fn test_nearest_mode_limits_neighbors() {
        let placed = placed_with(&[disk([10, 10], 5), disk([12, 10], 5), disk([90, 90], 5)]);
        let mut nearest = CandidateSelector::new(1, NeighborMode::Nearest(1));
        let mut brute = CandidateSelector::new(1, NeighborMode::BruteForce);

        assert!((nearest.score([10, 10], &placed) - 1.0).abs() < 1e-12);
        assert!(brute.score([10, 10], &placed) < 1.0);

        let mut wide = CandidateSelector::new(1, NeighborMode::Nearest(50));
        assert!((wide.score([40, 40], &placed) - brute.score([40, 40], &placed)).abs() < 1e-12);
    }

    // Tests the first round returns one unscored random point
    // Verified by scoring candidates against an empty set
    #[test]
    fn test_select_empty_set() {
        let placed = PlacedSet::new(30, 20, 5);
        let mut selector = CandidateSelector::new(100, NeighborMode::default());
        let mut rng = StdRng::seed_from_u64(3);

        let candidate = selector.select(&mut rng, 30, 20, &placed);

        assert_eq!(candidate.score, 0.0);
        assert!(candidate.position[0] < 30 && candidate.position[1] < 20);

        let mut replay = StdRng::seed_from_u64(3);
        let expected = [replay.random_range(0..30), replay.random_range(0..20)];
        assert_eq!(candidate.position, expected);
    }

    // Tests the lowest score wins with ties going to the earliest draw
    // Verified by keeping the highest score
    #[test]
    fn test_select_minimum_score() {
        let placed = placed_with(&[disk([50, 50], 10), disk([20, 80], 4)]);
        let mut selector = CandidateSelector::new(64, NeighborMode::BruteForce);
        let mut rng = StdRng::seed_from_u64(11);

        let chosen = selector.select(&mut rng, 100, 100, &placed);

        let mut replay = StdRng::seed_from_u64(11);
        let mut best: Option<([u32; 2], f64)> = None;
        for _ in 0..64 {
            let point = [replay.random_range(0..100), replay.random_range(0..100)];
            let score = selector.score(point, &placed);
            if best.is_none_or(|(_, b)| score < b) {
                best = Some((point, score));
            }
        }

        let (position, score) = best.unwrap();
        assert_eq!(chosen.position, position);
        assert_eq!(chosen.score, score);
    }

    // Tests candidates far from placed disks are preferred
    // Verified by selecting the first candidate regardless of score
    #[test]
    fn test_select_avoids_placed_disks() {
        let placed = placed_with(&[disk([25, 50], 30)]);
        let mut selector = CandidateSelector::new(200, NeighborMode::Nearest(5));
        let mut rng = StdRng::seed_from_u64(5);

        let chosen = selector.select(&mut rng, 100, 100, &placed);

        assert!(chosen.position[0] > 70, "Chose {:?}", chosen.position);
        assert_eq!(selector.n_tries(), 200);
        assert_eq!(selector.mode(), NeighborMode::Nearest(5));
    }

    // Tests contradictory neighbor options are rejected
    // Verified by letting brute force silently win
    #[test]
    fn test_neighbor_mode_from_options() {
        assert_eq!(
            NeighborMode::from_options(false, None).unwrap(),
            NeighborMode::Nearest(50)
        );
        assert_eq!(
            NeighborMode::from_options(true, None).unwrap(),
            NeighborMode::BruteForce
        );
        assert_eq!(
            NeighborMode::from_options(false, Some(8)).unwrap(),
            NeighborMode::Nearest(8)
        );
        assert!(NeighborMode::from_options(true, Some(8)).is_err());
        assert!(NeighborMode::from_options(false, Some(0)).is_err());
    }
}
