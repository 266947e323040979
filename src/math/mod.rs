//! Mathematical utilities for the algorithm

/// Color model conversions
pub mod color;
/// Percentiles and summary statistics
pub mod statistics;
