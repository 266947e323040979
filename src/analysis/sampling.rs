//! Color statistics over disk-shaped regions of the source image

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::PixelSource;
use crate::math::color::{normalize_rgb, rgb_to_hls};
use crate::math::statistics::percentile_spread;

/// Percentiles of the lightness distribution whose gap measures uniformity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileRange {
    /// Lower percentile in [0, 100]
    pub lower: f64,
    /// Upper percentile in [0, 100]
    pub upper: f64,
}

impl Default for PercentileRange {
    fn default() -> Self {
        use crate::io::configuration::{DEFAULT_LOWER_PERCENTILE, DEFAULT_UPPER_PERCENTILE};
        Self {
            lower: DEFAULT_LOWER_PERCENTILE,
            upper: DEFAULT_UPPER_PERCENTILE,
        }
    }
}

impl PercentileRange {
    /// Check that both percentiles are in range and ordered
    ///
    /// # Errors
    ///
    /// Returns an error if a percentile is outside [0, 100] or `lower > upper`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("lower_percentile", self.lower), ("upper_percentile", self.upper)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid_parameter(name, &value, &"must be within [0, 100]"));
            }
        }
        if self.lower > self.upper {
            return Err(invalid_parameter(
                "lower_percentile",
                &self.lower,
                &format!("must not exceed the upper percentile {}", self.upper),
            ));
        }
        Ok(())
    }
}

/// Aggregated colors of one disk region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Per-channel mean rounded to the nearest 8-bit level, normalized to [0, 1]
    pub mean_color: [f64; 3],
    /// Gap between the upper and lower lightness percentiles
    pub lightness_spread: f64,
    /// Number of pixels inside the disk and the image
    pub pixel_count: usize,
}

/// Samples disk regions of a pixel source
///
/// A pixel belongs to the disk when its Euclidean distance to the center is
/// strictly less than the radius. Pixels outside the image are skipped.
pub struct ColorSampler<'a, P: PixelSource> {
    source: &'a P,
    percentiles: PercentileRange,
}

impl<'a, P: PixelSource> ColorSampler<'a, P> {
    /// Create a sampler over `source`
    pub const fn new(source: &'a P, percentiles: PercentileRange) -> Self {
        Self {
            source,
            percentiles,
        }
    }

    /// The sampled pixel source
    pub const fn source(&self) -> &'a P {
        self.source
    }

    /// Mean color and lightness spread of the disk at `center` with `radius`
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::EmptySample`] if no pixel of the disk lies
    /// inside the image
    pub fn sample(&self, center: [u32; 2], radius: u32) -> Result<ColorSample> {
        let (width, height) = self.source.dimensions();
        let [cx, cy] = center.map(i64::from);
        let r = i64::from(radius);
        let r_squared = r * r;

        let x_range = (cx - r).max(0)..=(cx + r).min(i64::from(width) - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(i64::from(height) - 1);

        let mut channel_sums = [0u64; 3];
        let mut lightness_values = Vec::new();

        for y in y_range {
            let dy = y - cy;
            for x in x_range.clone() {
                let dx = x - cx;
                if dx * dx + dy * dy >= r_squared {
                    continue;
                }

                let rgb = self.source.pixel(x as u32, y as u32);
                for (sum, &channel) in channel_sums.iter_mut().zip(&rgb) {
                    *sum += u64::from(channel);
                }
                let [_, lightness, _] = rgb_to_hls(normalize_rgb(rgb));
                lightness_values.push(lightness);
            }
        }

        let pixel_count = lightness_values.len();
        if pixel_count == 0 {
            return Err(AlgorithmError::EmptySample { center, radius });
        }

        let count = pixel_count as f64;
        let mean_color =
            channel_sums.map(|sum| (sum as f64 / count).round_ties_even() / 255.0);

        let lightness_spread = percentile_spread(
            &mut lightness_values,
            self.percentiles.lower,
            self.percentiles.upper,
        )
        .ok_or(AlgorithmError::EmptySample { center, radius })?;

        Ok(ColorSample {
            mean_color,
            lightness_spread,
            pixel_count,
        })
    }
}
