//! Rasterization of placed disks and PNG export

use crate::io::configuration::CANVAS_BACKGROUND;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::Disk;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Consumer of placed disks
///
/// Disks are drawn in the order given, later disks painting over earlier ones.
pub trait RenderSurface {
    /// Draw a single disk
    fn draw_disk(&mut self, disk: &Disk);

    /// Draw a sequence of disks in order
    fn draw_disks(&mut self, disks: &[Disk]) {
        for disk in disks {
            self.draw_disk(disk);
        }
    }
}

/// RGB canvas matching the source image dimensions
///
/// The y axis points down, matching pixel coordinates of the source.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with the default background
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, CANVAS_BACKGROUND)
    }

    /// Create a canvas filled with `background`
    pub fn with_background(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
        }
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, keeping the rendered pixels
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl RenderSurface for Canvas {
    /// Fill every pixel whose center is within `radius` of the disk center
    fn draw_disk(&mut self, disk: &Disk) {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let [cx, cy] = disk.center.map(i64::from);
        let r = i64::from(disk.radius);
        let r_squared = r * r;
        let color = Rgb(disk.color_bytes());

        let x_min = (cx - r).max(0);
        let x_max = (cx + r).min(i64::from(width) - 1);
        let y_min = (cy - r).max(0);
        let y_max = (cy + r).min(i64::from(height) - 1);

        for y in y_min..=y_max {
            let dy = y - cy;
            for x in x_min..=x_max {
                let dx = x - cx;
                if dx * dx + dy * dy <= r_squared {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Save a rendered canvas as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
