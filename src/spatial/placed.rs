//! Append-only record of committed disks

use crate::spatial::disk::Disk;
use crate::spatial::index::{Neighbor, SpatialIndex};

/// Ordered sequence of committed disks
///
/// Insertion order is placement order. Disks are never removed or revised;
/// the spatial index is kept in step with the disk list on every push.
#[derive(Debug, Clone)]
pub struct PlacedSet {
    disks: Vec<Disk>,
    index: SpatialIndex,
}

impl PlacedSet {
    /// Create an empty set for an image of the given size
    ///
    /// `cell_size` controls the bucket size of the nearest-center index;
    /// the largest disk radius is a good choice.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            disks: Vec::new(),
            index: SpatialIndex::new(width, height, cell_size),
        }
    }

    /// Commit a disk
    pub fn push(&mut self, disk: Disk) {
        self.index.insert(disk.center);
        self.disks.push(disk);
    }

    /// All committed disks in placement order
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Number of committed disks
    pub const fn len(&self) -> usize {
        self.disks.len()
    }

    /// Whether no disk has been committed yet
    pub const fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disk committed at the given placement index
    pub fn get(&self, index: usize) -> Option<&Disk> {
        self.disks.get(index)
    }

    /// The `k` disks whose centers are closest to `point`, by raw distance
    pub fn nearest(&self, point: [u32; 2], k: usize, out: &mut Vec<Neighbor>) {
        self.index.nearest(point, k, out);
    }

    /// Consume the set, keeping only the disks
    pub fn into_disks(self) -> Vec<Disk> {
        self.disks
    }
}
