//! Placement progression capture: animated GIF and sequential snapshots

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{AlgorithmError, Result};
use crate::io::render::{Canvas, RenderSurface, export_canvas_as_png};
use crate::spatial::Disk;
use image::{Frame, buffer::ConvertBuffer};
use std::path::{Path, PathBuf};

/// Records placed disks to replay them as an animation
///
/// A frame is rendered every `frame_interval` placements, plus a blank first
/// frame and a held final frame.
pub struct VisualizationCapture {
    pub(crate) placements: Vec<Disk>,
    width: u32,
    height: u32,
    frame_interval: usize,
}

impl VisualizationCapture {
    /// Create a capture for a `width` x `height` image
    pub fn new(width: u32, height: u32, frame_interval: usize, max_placements: usize) -> Self {
        Self {
            placements: Vec::with_capacity(max_placements),
            width,
            height,
            frame_interval: frame_interval.max(1),
        }
    }

    /// Records a committed disk
    pub fn record_placement(&mut self, disk: Disk) {
        self.placements.push(disk);
    }

    /// Returns all recorded disks
    pub fn get_placements(&self) -> &[Disk] {
        &self.placements
    }

    /// Returns the total number of recorded disks
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the recorded placements as a GIF
    ///
    /// Frame delays below what viewers support are raised to the minimum and
    /// frames are skipped to keep the apparent speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "No placements captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, self.frame_interval * skip_factor);

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, interval: usize) -> Vec<Frame> {
        let mut canvas = Canvas::new(self.width, self.height);
        let mut frames = vec![render_frame(&canvas, delay_ms)];

        for (count, disk) in self.placements.iter().enumerate() {
            canvas.draw_disk(disk);
            if (count + 1).is_multiple_of(interval) {
                frames.push(render_frame(&canvas, delay_ms));
            }
        }

        if !self.placements.len().is_multiple_of(interval) {
            frames.push(render_frame(&canvas, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(render_frame(&canvas, delay_ms * FINAL_FRAME_HOLD));

        frames
    }
}

fn render_frame(canvas: &Canvas, delay_ms: u32) -> Frame {
    Frame::from_parts(
        canvas.image().convert(),
        0,
        0,
        image::Delay::from_numer_denom_ms(delay_ms, 1),
    )
}

/// Writes numbered PNG snapshots of the canvas during placement
///
/// Snapshot `n` is written to `<directory>/<stem>_<n:04>.png`, where `n` is the
/// number of disks placed so far.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    directory: PathBuf,
    stem: String,
    every: usize,
}

impl SnapshotWriter {
    /// Create a writer emitting a snapshot every `every` placements
    pub fn new(directory: impl Into<PathBuf>, stem: impl Into<String>, every: usize) -> Self {
        Self {
            directory: directory.into(),
            stem: stem.into(),
            every: every.max(1),
        }
    }

    /// Path of the snapshot taken after `placed` disks
    pub fn snapshot_path(&self, placed: usize) -> PathBuf {
        self.directory
            .join(format!("{}_{placed:04}.png", self.stem))
    }

    /// Whether a snapshot is due after `placed` disks
    pub const fn is_due(&self, placed: usize) -> bool {
        placed > 0 && placed.is_multiple_of(self.every)
    }

    /// Write a snapshot if one is due, returning its path
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written
    pub fn maybe_write(&self, placed: usize, canvas: &Canvas) -> Result<Option<PathBuf>> {
        if !self.is_due(placed) {
            return Ok(None);
        }
        let path = self.snapshot_path(placed);
        export_canvas_as_png(canvas, &path)?;
        Ok(Some(path))
    }
}
