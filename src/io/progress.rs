//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Placement progress of one input file
#[derive(Debug, Clone, Default)]
struct FileProgress {
    name: String,
    placed: usize,
    total: usize,
    elapsed: Duration,
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for small batches. Larger batches add a file-count
/// bar and keep only the most recent files visible.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("●◉○")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(PLACEMENT_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a file about to receive `total` placements
    pub fn start_file(&mut self, index: usize, path: &Path, total: usize) {
        if index >= self.files.len() {
            self.files.resize_with(index + 1, FileProgress::default);
        }
        if let Some(file) = self.files.get_mut(index) {
            *file = FileProgress {
                name: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
                placed: 0,
                total,
                elapsed: Duration::ZERO,
            };
        }
        self.update_bars();
    }

    /// Report the number of disks placed so far
    pub fn update_placements(&mut self, index: usize, placed: usize, elapsed: Duration) {
        if let Some(file) = self.files.get_mut(index) {
            file.placed = placed;
            file.elapsed = elapsed;
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(file) = self.files.get_mut(index) {
            file.name = format!("✓ {}", file.name);
            file.placed = file.total;
            file.elapsed = elapsed;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of disks reported for a file
    pub fn placed(&self, index: usize) -> Option<usize> {
        self.files.get(index).map(|file| file.placed)
    }

    /// Show the most recently started files on the available bars
    fn update_bars(&self) {
        let active: Vec<&FileProgress> =
            self.files.iter().filter(|file| !file.name.is_empty()).collect();
        let start = active.len().saturating_sub(self.file_bars.len());
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_idx, bar) in self.file_bars.iter().enumerate() {
            if let Some(file) = visible.get(bar_idx) {
                bar.set_length(file.total as u64);
                bar.set_position(file.placed as u64);
                let width = file.total.to_string().len();
                bar.set_message(format!(
                    "{:>width$}/{} {:>5.1}s",
                    file.placed,
                    file.total,
                    file.elapsed.as_secs_f64()
                ));
                bar.set_prefix(file.name.clone());
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
