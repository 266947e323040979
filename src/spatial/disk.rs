//! Committed disks and the radius range they are allowed to occupy

use crate::io::error::{Result, invalid_parameter};

/// A placed circular region with a single representative color
///
/// Disks are immutable once committed by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    /// Center pixel (x, y)
    pub center: [u32; 2],
    /// Radius in pixels, at least one
    pub radius: u32,
    /// Mean RGB color of the covered region, each channel in [0, 1]
    pub color: [f64; 3],
}

impl Disk {
    /// Euclidean distance from the disk center to a point
    pub fn distance_to(&self, point: [u32; 2]) -> f64 {
        center_distance(self.center, point)
    }

    /// Distance to a point measured in multiples of this disk's radius
    pub fn normalized_distance_to(&self, point: [u32; 2]) -> f64 {
        self.distance_to(point) / f64::from(self.radius.max(1))
    }

    /// Color quantized back to 8-bit channels
    pub fn color_bytes(&self) -> [u8; 3] {
        self.color
            .map(|channel| (channel * 255.0).round().clamp(0.0, 255.0) as u8)
    }
}

/// Euclidean distance between two pixel positions
pub fn center_distance(a: [u32; 2], b: [u32; 2]) -> f64 {
    let dx = f64::from(a[0]) - f64::from(b[0]);
    let dy = f64::from(a[1]) - f64::from(b[1]);
    dx.hypot(dy)
}

/// Inclusive radius range for every disk placed on one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusBounds {
    /// Smallest radius, also the starting point of growth
    pub min: u32,
    /// Largest radius growth may reach
    pub max: u32,
}

impl RadiusBounds {
    /// Create bounds from explicit values
    ///
    /// # Errors
    ///
    /// Returns an error if `min` is zero or exceeds `max`
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 {
            return Err(invalid_parameter(
                "min_radius",
                &min,
                &"must be at least 1 so every disk covers its center pixel",
            ));
        }
        if min > max {
            return Err(invalid_parameter(
                "max_radius",
                &max,
                &format!("must not be smaller than the minimum radius {min}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Derive bounds from image dimensions
    ///
    /// `min = ceil(shorter_side / min_divisor)` and
    /// `max = ceil(longer_side / max_divisor)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension or divisor is zero, or if the divisors
    /// produce a minimum above the maximum
    pub fn from_dimensions(
        width: u32,
        height: u32,
        min_divisor: u32,
        max_divisor: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"image must contain at least one pixel",
            ));
        }
        if min_divisor == 0 {
            return Err(invalid_parameter("min_divisor", &min_divisor, &"must be positive"));
        }
        if max_divisor == 0 {
            return Err(invalid_parameter("max_divisor", &max_divisor, &"must be positive"));
        }

        let shorter = width.min(height);
        let longer = width.max(height);
        Self::new(
            shorter.div_ceil(min_divisor),
            longer.div_ceil(max_divisor),
        )
    }

    /// Check whether a radius lies inside the bounds
    pub const fn contains(&self, radius: u32) -> bool {
        radius >= self.min && radius <= self.max
    }
}

/// How the radius range is obtained for an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusPolicy {
    /// Scale with the image: shorter side / `min_divisor`, longer side / `max_divisor`
    Derived {
        /// Divisor applied to the shorter image side
        min_divisor: u32,
        /// Divisor applied to the longer image side
        max_divisor: u32,
    },
    /// Fixed radii independent of the image
    Explicit {
        /// Minimum radius
        min: u32,
        /// Maximum radius
        max: u32,
    },
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        use crate::io::configuration::{DEFAULT_MAX_RADIUS_DIVISOR, DEFAULT_MIN_RADIUS_DIVISOR};
        Self::Derived {
            min_divisor: DEFAULT_MIN_RADIUS_DIVISOR,
            max_divisor: DEFAULT_MAX_RADIUS_DIVISOR,
        }
    }
}

impl RadiusPolicy {
    /// Resolve the policy against concrete image dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting bounds are invalid
    pub fn resolve(&self, width: u32, height: u32) -> Result<RadiusBounds> {
        match *self {
            Self::Derived {
                min_divisor,
                max_divisor,
            } => RadiusBounds::from_dimensions(width, height, min_divisor, max_divisor),
            Self::Explicit { min, max } => RadiusBounds::new(min, max),
        }
    }
}
