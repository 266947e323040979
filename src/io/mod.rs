//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for all fallible operations
pub mod error;
/// Source image decoding and pixel access
pub mod image;
/// Multi-file progress display
pub mod progress;
/// Disk rasterization and PNG export
pub mod render;
/// GIF and snapshot capture of the placement progression
pub mod visualization;
