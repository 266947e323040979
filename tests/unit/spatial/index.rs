//! Tests for the bucket grid nearest-center index

#[cfg(test)]
mod tests {
    use pointillize::spatial::disk::center_distance;
    use pointillize::spatial::index::{Neighbor, SpatialIndex};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn brute_force_nearest(centers: &[[u32; 2]], point: [u32; 2], k: usize) -> Vec<Neighbor> {
        let mut all: Vec<Neighbor> = centers
            .iter()
            .enumerate()
            .map(|(index, &center)| Neighbor {
                index,
                distance: center_distance(center, point),
            })
            .collect();
        all.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        all.truncate(k);
        all
    }

    // Tests an empty index yields no neighbors
    // Verified by returning a default neighbor
    #[test]
    fn test_nearest_empty() {
        let index = SpatialIndex::new(50, 50, 5);
        let mut out = vec![Neighbor {
            index: 9,
            distance: 1.0,
        }];

        index.nearest([10, 10], 3, &mut out);

        assert!(index.is_empty());
        assert!(out.is_empty(), "Output buffer should be cleared");
    }

    // Tests k is capped by the number of centers
    // Verified by removing the min with len
    #[test]
    fn test_nearest_caps_k() {
        let mut index = SpatialIndex::new(50, 50, 5);
        index.insert([1, 1]);
        index.insert([40, 40]);

        let mut out = Vec::new();
        index.nearest([0, 0], 10, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].index, 0);
        assert_eq!(out[1].index, 1);
    }

    // Tests a far neighbor in a distant cell is still found
    // Verified by stopping after the first ring
    #[test]
    fn test_nearest_searches_distant_cells() {
        let mut index = SpatialIndex::new(200, 100, 4);
        index.insert([199, 99]);

        let mut out = Vec::new();
        index.nearest([0, 0], 1, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].index, 0);
        assert!((out[0].distance - center_distance([199, 99], [0, 0])).abs() < 1e-12);
    }

    // Tests the ring search matches an exhaustive scan
    // Verified by breaking as soon as k candidates are collected
    #[test]
    fn test_nearest_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let (width, height) = (300, 180);
        let mut index = SpatialIndex::new(width, height, 9);
        let mut centers = Vec::new();

        for _ in 0..400 {
            let center = [rng.random_range(0..width), rng.random_range(0..height)];
            assert_eq!(index.insert(center), centers.len());
            centers.push(center);
        }

        let mut out = Vec::new();
        for _ in 0..100 {
            let point = [rng.random_range(0..width), rng.random_range(0..height)];
            for k in [1, 5, 50] {
                index.nearest(point, k, &mut out);
                let expected = brute_force_nearest(&centers, point, k);

                assert_eq!(out.len(), expected.len());
                for (found, wanted) in out.iter().zip(&expected) {
                    assert!(
                        (found.distance - wanted.distance).abs() < 1e-9,
                        "k={k} point={point:?}: {found:?} vs {wanted:?}"
                    );
                }
            }
        }
    }

    // Tests results are sorted by distance then insertion order
    // Verified by skipping the final sort
    #[test]
    fn test_nearest_sorted_with_index_tiebreak() {
        let mut index = SpatialIndex::new(20, 20, 3);
        index.insert([12, 10]);
        index.insert([8, 10]);
        index.insert([10, 10]);

        let mut out = Vec::new();
        index.nearest([10, 10], 3, &mut out);

        let order: Vec<usize> = out.iter().map(|n| n.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    // Tests a zero cell size is promoted to one pixel
    // Verified by allowing a zero cell size
    #[test]
    fn test_zero_cell_size() {
        let mut index = SpatialIndex::new(4, 4, 0);
        assert_eq!(index.cell_size(), 1);
        index.insert([3, 3]);
        assert_eq!(index.len(), 1);
    }
}
