//! End-to-end runs: read image, locate sprites, crop, write files
//!
//! Both the CLI commands and the library facade go through these
//! functions. Nothing is written until every sprite has been located and
//! cropped in memory, and the crops are committed all-or-nothing, so a
//! failed run leaves no sprite files behind.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::SpriteConfig;
use crate::errors::SpriteResult;
use crate::layout::{analyze_layout, LayoutReport};
use crate::segment::{Region, RegionExtractor};
use crate::utils::image_utils::{crop_region, load_image, write_crops};
use crate::utils::logger::Logger;
use crate::utils::naming::NamePattern;
use crate::utils::progress::ProgressTracker;

/// Locate the sprites of an image file without writing anything
pub fn locate_sprites(input: &Path, config: &SpriteConfig) -> SpriteResult<Vec<Region>> {
    let image = load_image(input)?;
    let params = config.extraction_params();
    info!("Locating sprites: alpha > {}, more than {} pixels, padding {}, {}",
          params.alpha_threshold, params.min_component_size, params.padding, params.connectivity);

    Ok(RegionExtractor::new(params).extract_regions(&image))
}

/// Locate, crop and write every sprite of an image file
///
/// # Arguments
/// * `input` - Source sheet
/// * `output_dir` - Destination directory, created if absent
/// * `config` - Effective configuration
/// * `logger` - Run log receiving one line per written file
/// * `show_progress` - Draw a progress bar while writing
///
/// # Returns
/// The written file paths in reading order
pub fn extract_sprites(input: &Path, output_dir: &Path, config: &SpriteConfig,
                       logger: &Logger, show_progress: bool) -> SpriteResult<Vec<PathBuf>> {
    let pattern = NamePattern::parse(&config.name_pattern)?;
    let image = load_image(input)?;

    let params = config.extraction_params();
    let regions = RegionExtractor::new(params).extract_regions(&image);

    if regions.is_empty() {
        warn!("No sprites found in {}; nothing to write", input.display());
        return Ok(Vec::new());
    }

    let crops: Vec<_> = regions.iter()
        .map(|region| crop_region(&image, region))
        .collect();

    let progress = if show_progress {
        ProgressTracker::new(crops.len() as u64, "Writing sprites")
    } else {
        ProgressTracker::hidden(crops.len() as u64)
    };
    let written = write_crops(&crops, output_dir, &pattern, &progress)?;

    for (path, region) in written.iter().zip(&regions) {
        let line = format!("Saved {} ({}x{} at {},{}; {} pixels)",
                           path.display(), region.width(), region.height(),
                           region.left, region.top, region.pixel_count);
        info!("{}", line);
        logger.log(&line)?;
    }

    info!("Extracted {} sprites to {}", written.len(), output_dir.display());
    Ok(written)
}

/// Analyze the row/column layout of an image file
pub fn analyze_sheet(input: &Path, config: &SpriteConfig) -> SpriteResult<LayoutReport> {
    let image = load_image(input)?;
    Ok(analyze_layout(&image, config.alpha_threshold, config.empty_line_max))
}
