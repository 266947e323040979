//! Pointillist rendering of images by greedy, radius-aware disk placement
//!
//! Each disk is centered on the sparsest of a batch of random candidates,
//! where sparsity is measured against nearby disks relative to their radii,
//! and then grown for as long as the covered region stays uniform in lightness.

#![forbid(unsafe_code)]

/// Candidate selection, radius growth and the placement engine
pub mod algorithm;
/// Color sampling over disk regions of the source image
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Color conversions and percentile statistics
pub mod math;
/// Disks, radius bounds and nearest-center lookup
pub mod spatial;

pub use algorithm::executor::{AlgorithmConfig, PointillistPlacement, place_disks};
pub use io::error::{AlgorithmError, Result};
pub use io::image::PixelSource;
pub use io::render::RenderSurface;
pub use spatial::Disk;
