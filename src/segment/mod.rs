//! Sprite segmentation
//!
//! This module locates individual sprites on a transparent sheet by
//! labeling connected foreground components of the alpha channel.

mod region;
mod mask;
mod labeling;
mod extractor;
#[cfg(test)]
mod tests;

// Public exports
pub use region::Region;
pub use mask::ForegroundMask;
pub use labeling::{label_components, ComponentStats, Connectivity, LabelMap};
pub use extractor::{extract_regions, ExtractionParams, RegionExtractor};
