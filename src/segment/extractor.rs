//! Region extraction from connected components
//!
//! Ties the mask, the labeler and the bounding-box post-processing
//! together: threshold alpha, label components, drop small ones, pad and
//! clamp the boxes, then sort them into reading order.

use image::DynamicImage;
use log::{debug, info, warn};

use super::labeling::{label_components, ComponentStats, Connectivity};
use super::mask::ForegroundMask;
use super::region::Region;

/// Parameters controlling region extraction
///
/// No `Default`: threshold and minimum size are tuned per source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionParams {
    /// Alpha values strictly above this are foreground
    pub alpha_threshold: u8,
    /// Components with this many pixels or fewer are discarded
    pub min_component_size: u64,
    /// Margin added on every side of a bounding box
    pub padding: u32,
    /// Neighbourhood used for labeling
    pub connectivity: Connectivity,
}

impl ExtractionParams {
    /// Create parameters using 4-connectivity
    pub fn new(alpha_threshold: u8, min_component_size: u64, padding: u32) -> Self {
        ExtractionParams {
            alpha_threshold,
            min_component_size,
            padding,
            connectivity: Connectivity::Four,
        }
    }

    /// Use a different connectivity
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Locates sprites in an image
pub struct RegionExtractor {
    params: ExtractionParams,
}

impl RegionExtractor {
    /// Create a new extractor
    pub fn new(params: ExtractionParams) -> Self {
        RegionExtractor { params }
    }

    pub fn params(&self) -> &ExtractionParams {
        &self.params
    }

    /// Extract the ordered regions of an image
    ///
    /// # Arguments
    /// * `image` - The decoded source image
    ///
    /// # Returns
    /// Padded regions sorted by top, then left. An image without
    /// foreground yields an empty vector.
    pub fn extract_regions(&self, image: &DynamicImage) -> Vec<Region> {
        let mask = ForegroundMask::from_image(image, self.params.alpha_threshold);
        self.extract_from_mask(&mask)
    }

    /// Extract the ordered regions of an already built mask
    pub fn extract_from_mask(&self, mask: &ForegroundMask) -> Vec<Region> {
        let (_, components) = label_components(mask, self.params.connectivity);
        info!("Found {} {} components", components.len(), self.params.connectivity);

        let mut regions: Vec<Region> = components.iter()
            .filter(|stats| {
                let keep = stats.pixel_count > self.params.min_component_size;
                if !keep {
                    debug!("Discarding component {} ({} pixels <= {})",
                           stats.label, stats.pixel_count, self.params.min_component_size);
                }
                keep
            })
            .map(|stats| pad_component(stats, self.params.padding, mask.width(), mask.height()))
            .collect();

        // Vec::sort_by_key is stable, equal keys keep label order
        regions.sort_by_key(|region| (region.top, region.left));

        if regions.is_empty() {
            warn!("No component larger than {} pixels survived filtering", self.params.min_component_size);
        } else {
            info!("Kept {} regions", regions.len());
        }

        regions
    }
}

/// Expand a component's bounding box by `padding`, clamped to the image
fn pad_component(stats: &ComponentStats, padding: u32, width: u32, height: u32) -> Region {
    let left = stats.min_x.saturating_sub(padding);
    let top = stats.min_y.saturating_sub(padding);
    let right = (stats.max_x as u64 + 1 + padding as u64).min(width as u64) as u32;
    let bottom = (stats.max_y as u64 + 1 + padding as u64).min(height as u64) as u32;

    Region::new(left, top, right, bottom, stats.pixel_count)
}

/// Extract regions with 4-connectivity
///
/// Convenience wrapper around [`RegionExtractor`].
pub fn extract_regions(image: &DynamicImage, alpha_threshold: u8,
                       min_component_size: u64, padding: u32) -> Vec<Region> {
    RegionExtractor::new(ExtractionParams::new(alpha_threshold, min_component_size, padding))
        .extract_regions(image)
}
