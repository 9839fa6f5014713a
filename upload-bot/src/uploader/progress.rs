//! Progress bar, percentages and the final completion report.

use std::time::{Duration, Instant};

/// Cells in the rendered progress bar.
pub const BAR_WIDTH: usize = 20;

const FILLED: char = '█';
const EMPTY: char = '░';

/// floor(100 * done / total); 0 when `total` is 0.
pub fn percent(done: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    done.min(total) * 100 / total
}

/// floor(width * done / total); 0 when `total` is 0.
pub fn filled_len(done: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    done.min(total) * width / total
}

/// `[████░░░░]` with `filled_len(done, total, width)` filled cells.
pub fn render_bar(done: usize, total: usize, width: usize) -> String {
    let filled = filled_len(done, total, width);
    let mut bar = String::with_capacity(width * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar.push(']');
    bar
}

/// Files per second; 0.0 when `elapsed` is zero.
pub fn throughput(files: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    files as f64 / secs
}

/// Running count for one upload run.
#[derive(Debug, Clone)]
pub struct ProgressState {
    pub files_uploaded: usize,
    pub total_files: usize,
    pub started_at: Instant,
}

impl ProgressState {
    pub fn start(total_files: usize) -> Self {
        Self {
            files_uploaded: 0,
            total_files,
            started_at: Instant::now(),
        }
    }

    pub fn advance(&mut self, files: usize) {
        self.files_uploaded = (self.files_uploaded + files).min(self.total_files);
    }

    pub fn percent(&self) -> usize {
        percent(self.files_uploaded, self.total_files)
    }

    pub fn render(&self) -> String {
        format!(
            "Uploading... {} {}% ({}/{} files)",
            render_bar(self.files_uploaded, self.total_files, BAR_WIDTH),
            self.percent(),
            self.files_uploaded,
            self.total_files
        )
    }

    /// Freezes the run into a report measured up to now.
    pub fn finish(&self, batches: usize) -> CompletionReport {
        CompletionReport::new(self.files_uploaded, batches, self.started_at.elapsed())
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReport {
    pub total_files: usize,
    pub batches: usize,
    pub duration: Duration,
    /// Files per second.
    pub throughput: f64,
}

impl CompletionReport {
    pub fn new(total_files: usize, batches: usize, duration: Duration) -> Self {
        Self {
            total_files,
            batches,
            duration,
            throughput: throughput(total_files, duration),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "✅ Finished uploading all {} screenshots in {} batch(es)!\nTime: {:.1}s | Speed: {:.2} files/s",
            self.total_files,
            self.batches,
            self.duration.as_secs_f64(),
            self.throughput
        )
    }
}
