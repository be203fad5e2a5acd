//! Sheet layout analysis
//!
//! Diagnostic report of how sprites are laid out on a sheet: foreground
//! counts per row and column, the near-empty gaps between content, and
//! the grid size those gaps suggest. The report is informational only;
//! cropping always goes through connected components.

use std::fmt;

use image::DynamicImage;
use log::{debug, info};

use crate::segment::ForegroundMask;

/// A run of near-empty lines between content (`end` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub start: u32,
    pub end: u32,
}

impl Gap {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Result of a layout analysis
#[derive(Debug, Clone)]
pub struct LayoutReport {
    pub width: u32,
    pub height: u32,
    /// Foreground pixels in each row
    pub row_counts: Vec<u32>,
    /// Foreground pixels in each column
    pub col_counts: Vec<u32>,
    pub row_gaps: Vec<Gap>,
    pub col_gaps: Vec<Gap>,
}

impl LayoutReport {
    /// Estimated number of sprite rows (0 when the sheet has no content)
    pub fn estimated_rows(&self) -> usize {
        estimate(&self.row_counts, &self.row_gaps)
    }

    /// Estimated number of sprite columns (0 when the sheet has no content)
    pub fn estimated_columns(&self) -> usize {
        estimate(&self.col_counts, &self.col_gaps)
    }
}

fn estimate(counts: &[u32], gaps: &[Gap]) -> usize {
    if counts.iter().all(|&count| count == 0) {
        0
    } else {
        gaps.len() + 1
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Layout Analysis Results:")?;
        writeln!(f, "  Image size: {}x{}", self.width, self.height)?;

        writeln!(f, "  Row gaps: {}", self.row_gaps.len())?;
        for (i, gap) in self.row_gaps.iter().enumerate() {
            writeln!(f, "    Gap {}: rows {}-{}", i + 1, gap.start, gap.end)?;
        }

        writeln!(f, "  Column gaps: {}", self.col_gaps.len())?;
        for (i, gap) in self.col_gaps.iter().enumerate() {
            writeln!(f, "    Gap {}: columns {}-{}", i + 1, gap.start, gap.end)?;
        }

        let rows = self.estimated_rows();
        let cols = self.estimated_columns();
        writeln!(f, "  Estimated grid: {} rows x {} columns ({} cells)", rows, cols, rows * cols)
    }
}

/// Analyze the row/column structure of a sheet
///
/// # Arguments
/// * `image` - The decoded sheet
/// * `alpha_threshold` - Alpha values strictly above this count as content
/// * `empty_line_max` - A line with fewer foreground pixels than this is empty
pub fn analyze_layout(image: &DynamicImage, alpha_threshold: u8, empty_line_max: u32) -> LayoutReport {
    let mask = ForegroundMask::from_image(image, alpha_threshold);
    let (width, height) = (mask.width(), mask.height());

    let mut row_counts = vec![0u32; height as usize];
    let mut col_counts = vec![0u32; width as usize];
    for y in 0..height {
        for x in 0..width {
            if mask.is_foreground(x, y) {
                row_counts[y as usize] += 1;
                col_counts[x as usize] += 1;
            }
        }
    }

    let row_gaps = find_gaps(&row_counts, empty_line_max);
    let col_gaps = find_gaps(&col_counts, empty_line_max);
    info!("Layout: {} row gaps, {} column gaps", row_gaps.len(), col_gaps.len());

    LayoutReport { width, height, row_counts, col_counts, row_gaps, col_gaps }
}

/// Find runs of empty lines bounded by content on both sides
pub fn find_gaps(counts: &[u32], empty_line_max: u32) -> Vec<Gap> {
    let mut gaps = Vec::new();
    let mut gap_start: Option<usize> = None;
    let mut seen_content = false;

    for (i, &count) in counts.iter().enumerate() {
        if count < empty_line_max {
            if seen_content && gap_start.is_none() {
                gap_start = Some(i);
            }
        } else {
            if let Some(start) = gap_start.take() {
                debug!("Gap from {} to {}", start, i);
                gaps.push(Gap { start: start as u32, end: i as u32 });
            }
            seen_content = true;
        }
    }

    // A trailing run touches the border and is not a gap
    gaps
}
