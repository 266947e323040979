//! Candidate center selection by radius-normalized sparsity
//!
//! Each round draws random candidate centers and scores them against the
//! disks placed so far. For a candidate `c` and a considered disk `i` the
//! normalized distance is `d_i = |c - center_i| / radius_i`, and the score is
//! the mean of `exp(-d_i^2)` over the considered disks.
//!
//! The kernel decays with distance, so a low score means the candidate is far
//! from its neighbors relative to their size. The selector therefore keeps the
//! candidate with the SMALLEST score. Flipping this to a maximum would place
//! disks on top of each other.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::PlacedSet;
use crate::spatial::index::Neighbor;
use rand::Rng;

/// Which placed disks contribute to a candidate's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborMode {
    /// Every placed disk
    BruteForce,
    /// The given number of placed disks nearest by raw center distance
    ///
    /// Approximates the brute-force score: the nearest centers are not
    /// necessarily the ones with the largest normalized contribution.
    Nearest(usize),
}

impl Default for NeighborMode {
    fn default() -> Self {
        Self::Nearest(crate::io::configuration::DEFAULT_NEIGHBORS)
    }
}

impl NeighborMode {
    /// Build a mode from independent option values
    ///
    /// Without `brute_force` a missing count falls back to the default
    /// neighbor count.
    ///
    /// # Errors
    ///
    /// Returns an error if a neighbor count is combined with brute-force
    /// scoring, or if the count is zero
    pub fn from_options(brute_force: bool, neighbors: Option<usize>) -> Result<Self> {
        let mode = match (brute_force, neighbors) {
            (true, Some(count)) => {
                return Err(invalid_parameter(
                    "neighbors",
                    &count,
                    &"a neighbor count cannot be combined with brute-force scoring",
                ));
            }
            (true, None) => Self::BruteForce,
            (false, Some(count)) => Self::Nearest(count),
            (false, None) => Self::default(),
        };
        mode.validate()?;
        Ok(mode)
    }

    /// Check that a nearest-neighbor mode considers at least one disk
    ///
    /// # Errors
    ///
    /// Returns an error for `Nearest(0)`
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Nearest(0) => Err(invalid_parameter(
                "neighbors",
                &0,
                &"at least one neighbor is needed to score candidates",
            )),
            _ => Ok(()),
        }
    }
}

/// A scored candidate center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Candidate pixel (x, y)
    pub position: [u32; 2],
    /// Mean neighbor kernel value; lower is sparser
    pub score: f64,
}

/// Draws and scores candidate centers
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    n_tries: usize,
    mode: NeighborMode,
    /// Reused between candidates to avoid per-candidate allocation
    neighbors: Vec<Neighbor>,
}

impl CandidateSelector {
    /// Create a selector drawing `n_tries` candidates per round
    pub const fn new(n_tries: usize, mode: NeighborMode) -> Self {
        Self {
            n_tries,
            mode,
            neighbors: Vec::new(),
        }
    }

    /// Candidates drawn per round
    pub const fn n_tries(&self) -> usize {
        self.n_tries
    }

    /// Active neighbor mode
    pub const fn mode(&self) -> NeighborMode {
        self.mode
    }

    /// Pick the next center inside a `width` x `height` image
    ///
    /// With no placed disks a single uniform point is returned unscored.
    /// Otherwise `n_tries` uniform points are scored and the lowest score wins,
    /// ties going to the earliest draw.
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        width: u32,
        height: u32,
        placed: &PlacedSet,
    ) -> Candidate {
        if placed.is_empty() {
            return Candidate {
                position: random_point(rng, width, height),
                score: 0.0,
            };
        }

        let mut best: Option<Candidate> = None;
        for _ in 0..self.n_tries.max(1) {
            let position = random_point(rng, width, height);
            let score = self.score(position, placed);
            if best.is_none_or(|b| score < b.score) {
                best = Some(Candidate { position, score });
            }
        }

        best.unwrap_or(Candidate {
            position: [0, 0],
            score: 0.0,
        })
    }

    /// Neighbor score of a single point against the placed disks
    pub fn score(&mut self, point: [u32; 2], placed: &PlacedSet) -> f64 {
        match self.mode {
            NeighborMode::BruteForce => mean_kernel(
                placed
                    .disks()
                    .iter()
                    .map(|disk| disk.normalized_distance_to(point)),
            ),
            NeighborMode::Nearest(k) => {
                placed.nearest(point, k, &mut self.neighbors);
                mean_kernel(self.neighbors.iter().filter_map(|neighbor| {
                    placed.get(neighbor.index).map(|disk| {
                        neighbor.distance / f64::from(disk.radius.max(1))
                    })
                }))
            }
        }
    }
}

/// Mean of `exp(-d^2)` over normalized distances, zero when there are none
fn mean_kernel(normalized_distances: impl Iterator<Item = f64>) -> f64 {
    let (total, count) = normalized_distances
        .fold((0.0, 0usize), |(total, count), d| (total + (-d * d).exp(), count + 1));
    if count == 0 { 0.0 } else { total / count as f64 }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> [u32; 2] {
    let x = rng.random_range(0..width.max(1));
    let y = rng.random_range(0..height.max(1));
    [x, y]
}
