//! Color analysis of source image regions

/// Disk-region color sampling and lightness spread
pub mod sampling;
