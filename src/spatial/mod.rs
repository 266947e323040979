//! Spatial data structures for placed disks
//!
//! This module contains spatial-related functionality including:
//! - Disk and radius range types
//! - Nearest-center bucket grid
//! - The append-only set of committed disks

/// Disks, radius bounds and radius policies
pub mod disk;
/// Bucket grid for nearest-center queries
pub mod index;
/// Committed disks in placement order
pub mod placed;

pub use disk::{Disk, RadiusBounds, RadiusPolicy};
pub use placed::PlacedSet;
