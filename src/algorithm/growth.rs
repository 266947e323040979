//! Radius growth driven by color uniformity

use crate::analysis::sampling::ColorSampler;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::PixelSource;
use crate::spatial::RadiusBounds;

/// How the proposed radius scales between growth steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthMode {
    /// `r' = ceil(r * factor)`
    #[default]
    Linear,
    /// `r' = ceil(sqrt(r^2 * factor))`, the disk area grows by `factor`
    Area,
}

/// Growth step parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSchedule {
    /// Multiplier applied per step, strictly greater than one
    pub factor: f64,
    /// Whether the factor scales the radius or the area
    pub mode: GrowthMode,
    /// Maximum number of region samples in one growth call
    pub max_iterations: usize,
}

impl Default for GrowthSchedule {
    fn default() -> Self {
        use crate::io::configuration::{DEFAULT_GROWTH_FACTOR, MAX_GROWTH_ITERATIONS};
        Self {
            factor: DEFAULT_GROWTH_FACTOR,
            mode: GrowthMode::Linear,
            max_iterations: MAX_GROWTH_ITERATIONS,
        }
    }
}

impl GrowthSchedule {
    /// Check the factor and iteration limit
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is not a finite number above one or the
    /// iteration limit is zero
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() || self.factor <= 1.0 {
            return Err(invalid_parameter(
                "growth_factor",
                &self.factor,
                &"must be a finite number greater than 1",
            ));
        }
        if self.max_iterations == 0 {
            return Err(invalid_parameter(
                "max_iterations",
                &self.max_iterations,
                &"at least one sample is needed to color a disk",
            ));
        }
        Ok(())
    }

    /// Radius proposed after `radius`, always at least `radius + 1`
    pub fn next_radius(&self, radius: u32) -> u32 {
        let r = f64::from(radius);
        let proposed = match self.mode {
            GrowthMode::Linear => (r * self.factor).ceil(),
            GrowthMode::Area => (r * r * self.factor).sqrt().ceil(),
        };
        let proposed = if proposed < f64::from(u32::MAX) {
            proposed as u32
        } else {
            u32::MAX
        };
        proposed.max(radius.saturating_add(1))
    }
}

/// Result of growing one disk
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthOutcome {
    /// Last accepted radius
    pub radius: u32,
    /// Mean color sampled at the last accepted radius
    pub color: [f64; 3],
    /// Every accepted radius in order, starting with the minimum radius
    pub accepted_radii: Vec<u32>,
    /// Number of region samples taken
    pub iterations: usize,
}

/// Expands disks while their region stays uniform in lightness
#[derive(Debug, Clone, Copy)]
pub struct RadiusGrower {
    schedule: GrowthSchedule,
    tolerance: f64,
}

impl RadiusGrower {
    /// Create a grower with a lightness spread cutoff
    pub const fn new(schedule: GrowthSchedule, tolerance: f64) -> Self {
        Self {
            schedule,
            tolerance,
        }
    }

    /// Growth step parameters
    pub const fn schedule(&self) -> &GrowthSchedule {
        &self.schedule
    }

    /// Whether a lightness spread is small enough to accept a radius
    pub const fn is_uniform(&self, lightness_spread: f64) -> bool {
        lightness_spread < self.tolerance
    }

    /// Grow a disk at `center` from `bounds.min`
    ///
    /// The first sample always sets the color, so a region that is already
    /// too varied at the minimum radius still yields `bounds.min` and that
    /// sample's color. Afterwards a radius is accepted while its lightness
    /// spread is below the tolerance; proposals are clamped to `bounds.max`
    /// and growth ends once the maximum is accepted, a sample is rejected,
    /// or the iteration limit is reached. A rejected radius is never returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a region sample contains no pixels
    pub fn grow<P: PixelSource>(
        &self,
        sampler: &ColorSampler<'_, P>,
        center: [u32; 2],
        bounds: RadiusBounds,
    ) -> Result<GrowthOutcome> {
        let mut candidate = bounds.min;
        let mut sample = sampler.sample(center, candidate)?;
        let mut iterations = 1;

        let mut radius = bounds.min;
        let mut color = sample.mean_color;
        let mut accepted_radii = vec![bounds.min];

        loop {
            if !self.is_uniform(sample.lightness_spread) {
                break;
            }
            if candidate > radius {
                accepted_radii.push(candidate);
            }
            radius = candidate;
            color = sample.mean_color;

            if candidate >= bounds.max || iterations >= self.schedule.max_iterations {
                break;
            }

            candidate = self.schedule.next_radius(candidate).min(bounds.max);
            sample = sampler.sample(center, candidate)?;
            iterations += 1;
        }

        Ok(GrowthOutcome {
            radius,
            color,
            accepted_radii,
            iterations,
        })
    }
}
