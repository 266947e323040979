//! Algorithm constants and runtime configuration defaults

// Placement defaults
/// Number of disks placed per image
pub const DEFAULT_POINTS: usize = 1000;
/// Number of random candidate centers scored per placement round
pub const DEFAULT_TRIES: usize = 1000;
/// Number of nearest placed disks considered when scoring a candidate
pub const DEFAULT_NEIGHBORS: usize = 50;

// Radius growth defaults
/// Maximum lightness spread for a region to count as uniform
pub const DEFAULT_TOLERANCE: f64 = 0.05;
/// Multiplicative step applied to the radius (or area) on each growth step
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.1;
/// Upper bound on sampling iterations in a single growth call
pub const MAX_GROWTH_ITERATIONS: usize = 100;
/// Shorter image side divided by this gives the minimum radius
pub const DEFAULT_MIN_RADIUS_DIVISOR: u32 = 200;
/// Longer image side divided by this gives the maximum radius
pub const DEFAULT_MAX_RADIUS_DIVISOR: u32 = 50;

// Lightness spread is measured between these percentiles
/// Lower percentile of the lightness distribution
pub const DEFAULT_LOWER_PERCENTILE: f64 = 5.0;
/// Upper percentile of the lightness distribution
pub const DEFAULT_UPPER_PERCENTILE: f64 = 95.0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pointillized";
/// Input extensions picked up when processing a directory
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
/// Number of placements between captured animation frames
pub const DEFAULT_FRAME_INTERVAL: usize = 10;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the frame delay of the last frame
pub const FINAL_FRAME_HOLD: u32 = 25;
/// Background color of the render canvas
pub const CANVAS_BACKGROUND: [u8; 3] = [255, 255, 255];
