//! Decoded source rasters and read access to their pixels

use crate::io::error::{AlgorithmError, Result, computation_error};
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Read-only access to the pixels of a 2D RGB image
///
/// Coordinates are `(x, y)` with the origin at the top-left corner.
pub trait PixelSource {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// RGB value at `(x, y)`
    ///
    /// Callers stay within `[0, width) x [0, height)`; implementations
    /// return black for anything outside.
    fn pixel(&self, x: u32, y: u32) -> [u8; 3];

    /// `(width, height)` pair
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        Self::width(self)
    }

    fn height(&self) -> u32 {
        Self::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel_checked(x, y).map_or([0, 0, 0], |p| p.0)
    }
}

/// Source image stored as a `(height, width, channel)` array
#[derive(Debug, Clone)]
pub struct SourceImage {
    data: Array3<u8>,
}

impl SourceImage {
    /// Load and decode an image file, discarding any alpha channel
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file at the given path cannot be opened or read
    /// - The file is not in a format the `image` crate can decode
    /// - The decoded image has no pixels
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| AlgorithmError::ImageLoad {
            path: path_buf.clone(),
            source: e,
        })?;

        let source = Self::from_rgb_image(img.to_rgb8())?;
        log::debug!(
            "Loaded {} ({}x{})",
            path_buf.display(),
            source.width(),
            source.height()
        );
        Ok(source)
    }

    /// Take ownership of an already decoded RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty
    pub fn from_rgb_image(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("image has no pixels ({width}x{height})"),
            });
        }

        let data = Array3::from_shape_vec((height as usize, width as usize, 3), img.into_raw())
            .map_err(|e| computation_error("source image layout", &e))?;

        Ok(Self { data })
    }

    /// Raw `(height, width, channel)` pixel array
    pub const fn data(&self) -> &Array3<u8> {
        &self.data
    }
}

impl PixelSource for SourceImage {
    fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let (row, col) = (y as usize, x as usize);
        [0, 1, 2].map(|c| self.data.get((row, col, c)).copied().unwrap_or(0))
    }
}
