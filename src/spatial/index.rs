//! Uniform bucket grid for nearest-center queries
//!
//! Placed centers are hashed into square cells. A k-nearest query visits
//! cells in rings of increasing Chebyshev distance around the query cell and
//! stops once the k-th best distance can no longer be beaten by any
//! unvisited cell.

use ndarray::Array2;

use crate::spatial::disk::center_distance;

/// A placed center found by a nearest-neighbor query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Insertion index of the center
    pub index: usize,
    /// Euclidean distance from the query point
    pub distance: f64,
}

/// Bucket grid over placed centers
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size: u32,
    /// Insertion indices per cell, indexed by (row, col)
    cells: Array2<Vec<usize>>,
    centers: Vec<[u32; 2]>,
}

impl SpatialIndex {
    /// Create an empty index covering a `width` x `height` image
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        let rows = height.div_ceil(cell_size).max(1) as usize;
        let cols = width.div_ceil(cell_size).max(1) as usize;

        Self {
            cell_size,
            cells: Array2::from_elem((rows, cols), Vec::new()),
            centers: Vec::new(),
        }
    }

    /// Number of indexed centers
    pub const fn len(&self) -> usize {
        self.centers.len()
    }

    /// Whether the index holds no centers
    pub const fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Side length of a grid cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Add a center and return its insertion index
    ///
    /// Centers outside the covered area are clamped into the border cells.
    pub fn insert(&mut self, center: [u32; 2]) -> usize {
        let index = self.centers.len();
        self.centers.push(center);

        let [row, col] = self.cell_of(center);
        if let Some(bucket) = self.cells.get_mut([row, col]) {
            bucket.push(index);
        }

        index
    }

    /// Collect the `k` centers closest to `point` into `out`
    ///
    /// `out` is cleared first and left sorted by distance, then by insertion
    /// index, so equal distances resolve to the earlier center.
    pub fn nearest(&self, point: [u32; 2], k: usize, out: &mut Vec<Neighbor>) {
        out.clear();
        let k = k.min(self.centers.len());
        if k == 0 {
            return;
        }

        let (rows, cols) = self.cells.dim();
        let [origin_row, origin_col] = self.cell_of(point);
        let max_ring = origin_row
            .max(rows - 1 - origin_row)
            .max(origin_col)
            .max(cols - 1 - origin_col);

        for ring in 0..=max_ring {
            self.visit_ring(point, [origin_row, origin_col], ring, out);

            if out.len() >= k {
                out.select_nth_unstable_by(k - 1, compare_neighbors);
                let kth = out.get(k - 1).map_or(f64::INFINITY, |n| n.distance);
                // Anything outside the visited rings is strictly farther than this
                if kth <= ring as f64 * f64::from(self.cell_size) {
                    break;
                }
            }
        }

        if out.len() > k {
            out.select_nth_unstable_by(k - 1, compare_neighbors);
            out.truncate(k);
        }
        out.sort_by(compare_neighbors);
    }

    fn visit_ring(
        &self,
        point: [u32; 2],
        origin: [usize; 2],
        ring: usize,
        out: &mut Vec<Neighbor>,
    ) {
        let ring = ring as isize;
        let origin_row = origin[0] as isize;
        let origin_col = origin[1] as isize;

        for d_row in -ring..=ring {
            let on_edge = d_row.abs() == ring;
            let step = if on_edge { 1 } else { (2 * ring).max(1) as usize };

            for d_col in (-ring..=ring).step_by(step) {
                let row = origin_row + d_row;
                let col = origin_col + d_col;
                if row < 0 || col < 0 {
                    continue;
                }
                let Some(bucket) = self.cells.get([row as usize, col as usize]) else {
                    continue;
                };
                for &index in bucket {
                    if let Some(&center) = self.centers.get(index) {
                        out.push(Neighbor {
                            index,
                            distance: center_distance(center, point),
                        });
                    }
                }
            }
        }
    }

    fn cell_of(&self, point: [u32; 2]) -> [usize; 2] {
        let (rows, cols) = self.cells.dim();
        let row = ((point[1] / self.cell_size) as usize).min(rows - 1);
        let col = ((point[0] / self.cell_size) as usize).min(cols - 1);
        [row, col]
    }
}

fn compare_neighbors(a: &Neighbor, b: &Neighbor) -> std::cmp::Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}
