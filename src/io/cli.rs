//! Command-line interface for batch processing images into pointillist renderings

use crate::algorithm::executor::{AlgorithmConfig, PointillistPlacement};
use crate::algorithm::growth::{GrowthMode, GrowthSchedule};
use crate::algorithm::selection::NeighborMode;
use crate::analysis::sampling::PercentileRange;
use crate::io::configuration::{
    DEFAULT_FRAME_INTERVAL, DEFAULT_GROWTH_FACTOR, DEFAULT_LOWER_PERCENTILE,
    DEFAULT_MAX_RADIUS_DIVISOR, DEFAULT_MIN_RADIUS_DIVISOR, DEFAULT_POINTS, DEFAULT_SEED,
    DEFAULT_TOLERANCE, DEFAULT_TRIES, DEFAULT_UPPER_PERCENTILE, GIF_FRAME_DELAY_MS,
    MAX_GROWTH_ITERATIONS, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{ErrorContext, Result, WithContext, io_error};
use crate::io::image::{PixelSource, SourceImage};
use crate::io::progress::ProgressManager;
use crate::io::render::{Canvas, RenderSurface, export_canvas_as_png};
use crate::io::visualization::{SnapshotWriter, VisualizationCapture};
use crate::spatial::RadiusPolicy;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Growth schedule selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrowthModeArg {
    /// Multiply the radius by the growth factor
    Linear,
    /// Multiply the disk area by the growth factor
    Area,
}

impl From<GrowthModeArg> for GrowthMode {
    fn from(arg: GrowthModeArg) -> Self {
        match arg {
            GrowthModeArg::Linear => Self::Linear,
            GrowthModeArg::Area => Self::Area,
        }
    }
}

#[derive(Parser)]
#[command(name = "pointillize")]
#[command(
    author,
    version,
    about = "Render images as greedily placed, color-uniform disks"
)]
/// Command-line arguments for the pointillist renderer
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of disks to place
    #[arg(short = 'n', long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Random candidate centers scored per disk
    #[arg(short, long, default_value_t = DEFAULT_TRIES)]
    pub tries: usize,

    /// Score candidates against this many nearest disks [default: 50]
    #[arg(short = 'k', long)]
    pub neighbors: Option<usize>,

    /// Score candidates against every placed disk
    #[arg(short, long, conflicts_with = "neighbors")]
    pub brute_force: bool,

    /// Lightness spread below which a disk keeps growing
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Growth factor applied per growth step
    #[arg(long, default_value_t = DEFAULT_GROWTH_FACTOR)]
    pub growth_factor: f64,

    /// Whether the growth factor scales radius or area
    #[arg(long, value_enum, default_value_t = GrowthModeArg::Linear)]
    pub growth_mode: GrowthModeArg,

    /// Minimum radius is the shorter image side divided by this
    #[arg(long, default_value_t = DEFAULT_MIN_RADIUS_DIVISOR)]
    pub min_divisor: u32,

    /// Maximum radius is the longer image side divided by this
    #[arg(long, default_value_t = DEFAULT_MAX_RADIUS_DIVISOR)]
    pub max_divisor: u32,

    /// Lower lightness percentile of the uniformity check
    #[arg(long, default_value_t = DEFAULT_LOWER_PERCENTILE)]
    pub lower_percentile: f64,

    /// Upper lightness percentile of the uniformity check
    #[arg(long, default_value_t = DEFAULT_UPPER_PERCENTILE)]
    pub upper_percentile: f64,

    /// Write a PNG snapshot every N placed disks
    #[arg(long, value_name = "N")]
    pub snapshot_every: Option<usize>,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assemble and validate the placement configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the options are contradictory or out of range
    pub fn algorithm_config(&self) -> Result<AlgorithmConfig> {
        let config = AlgorithmConfig {
            n_points: self.points,
            n_tries: self.tries,
            neighbor_mode: NeighborMode::from_options(self.brute_force, self.neighbors)?,
            tolerance: self.tolerance,
            radius_policy: RadiusPolicy::Derived {
                min_divisor: self.min_divisor,
                max_divisor: self.max_divisor,
            },
            growth: GrowthSchedule {
                factor: self.growth_factor,
                mode: self.growth_mode.into(),
                max_iterations: MAX_GROWTH_ITERATIONS,
            },
            percentiles: PercentileRange {
                lower: self.lower_percentile,
                upper: self.upper_percentile,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// The configuration is validated before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, target validation or
    /// file processing fails
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.algorithm_config()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("Nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, config)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a PNG or JPEG image"))
            }
        } else if self.cli.target.is_dir() {
            Ok(scan_directory(&self.cli.target)?
                .into_iter()
                .filter(|path| self.should_process_file(path))
                .collect())
        } else {
            Err(io_error("Target must be an image file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, config: AlgorithmConfig) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.n_points);
        }

        let source = SourceImage::from_path(input_path)?;
        let (width, height) = source.dimensions();
        let mut engine = PointillistPlacement::new(&source, config, self.cli.seed)?;

        info!(
            "Processing {} ({width}x{height}, radius {}..={})",
            input_path.display(),
            engine.bounds.min,
            engine.bounds.max
        );

        let mut canvas = Canvas::new(width, height);
        let mut visualization = self.cli.visualize.then(|| {
            VisualizationCapture::new(width, height, DEFAULT_FRAME_INTERVAL, config.n_points)
        });
        let snapshots = self
            .cli
            .snapshot_every
            .map(|every| SnapshotWriter::new(Self::get_snapshot_dir(input_path), file_stem(input_path), every));

        while !engine.is_complete() {
            let disk = engine.run_iteration()?;
            canvas.draw_disk(&disk);

            if let Some(ref mut viz) = visualization {
                viz.record_placement(disk);
            }
            if let Some(ref writer) = snapshots {
                writer.maybe_write(engine.iteration, &canvas)?;
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_placements(index, engine.iteration, start_time.elapsed());
            }
        }

        export_canvas_as_png(&canvas, &output_path)?;

        if let Some(ref viz) = visualization {
            viz.export_gif(&Self::get_visualization_path(input_path), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        info!(
            "Wrote {} ({} disks in {:.2?})",
            output_path.display(),
            engine.disks().len(),
            start_time.elapsed()
        );

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, &format!("{}{OUTPUT_SUFFIX}.png", file_stem(input_path)))
    }

    fn get_visualization_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, &format!("{}_visualization.gif", file_stem(input_path)))
    }

    fn get_snapshot_dir(input_path: &Path) -> PathBuf {
        sibling_path(input_path, &format!("{}_frames", file_stem(input_path)))
    }
}

/// Input images directly inside `dir`, sorted by path
///
/// Files this tool generated are left out.
///
/// # Errors
///
/// Returns a [`crate::AlgorithmError::FileSystem`] error naming `dir` if it cannot
/// be listed
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let context = || ErrorContext {
        path: Some(dir.to_path_buf()),
        operation: Some("read directory"),
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(context())? {
        let path = entry.with_context(context())?.path();
        if is_supported_image(&path) && !is_generated_output(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().unwrap_or_default().to_string_lossy().to_string()
}

fn sibling_path(input_path: &Path, name: &str) -> PathBuf {
    input_path
        .parent()
        .map_or_else(|| PathBuf::from(name), |parent| parent.join(name))
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Outputs land next to their inputs and must not be picked up on re-runs
fn is_generated_output(path: &Path) -> bool {
    file_stem(path).ends_with(OUTPUT_SUFFIX)
}
