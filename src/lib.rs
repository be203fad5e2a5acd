pub mod errors;
pub mod segment;
pub mod layout;
pub mod config;
pub mod utils;
pub mod pipeline;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::SpriteCut;

pub use errors::{SpriteError, SpriteResult};
pub use config::SpriteConfig;
pub use segment::{extract_regions, Connectivity, ExtractionParams, Region, RegionExtractor};
pub use layout::{analyze_layout, LayoutReport};
