//! Library facade bundling configuration and a run logger

use std::path::{Path, PathBuf};

use log::info;

use crate::config::SpriteConfig;
use crate::errors::SpriteResult;
use crate::pipeline;
use crate::segment::Region;
use crate::utils::logger::Logger;

/// Main interface to the spritecut library
pub struct SpriteCut {
    config: SpriteConfig,
    logger: Logger,
}

impl SpriteCut {
    /// Create a new SpriteCut instance
    ///
    /// # Arguments
    /// * `config` - Extraction and analysis settings
    /// * `log_file` - Optional run log path; without one nothing is recorded
    ///
    /// # Returns
    /// A SpriteCut instance or an error if the log file cannot be created
    pub fn new(config: SpriteConfig, log_file: Option<&str>) -> SpriteResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::sink(),
        };
        Ok(SpriteCut { config, logger })
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Locate the sprites of an image without writing anything
    ///
    /// # Returns
    /// Padded regions in reading order (top to bottom, then left to right)
    pub fn locate<P: AsRef<Path>>(&self, input_path: P) -> SpriteResult<Vec<Region>> {
        pipeline::locate_sprites(input_path.as_ref(), &self.config)
    }

    /// Crop every sprite of an image into its own PNG file
    ///
    /// # Arguments
    /// * `input_path` - Source sheet
    /// * `output_dir` - Destination directory, created if absent
    ///
    /// # Returns
    /// Paths of the written files in reading order; empty when the sheet
    /// holds no sprite
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_dir: Q) -> SpriteResult<Vec<PathBuf>> {
        let written = pipeline::extract_sprites(
            input_path.as_ref(), output_dir.as_ref(), &self.config, &self.logger, false)?;
        info!("Extracted {} sprites", written.len());
        Ok(written)
    }

    /// Analyze the row/column layout of an image
    ///
    /// # Returns
    /// A human-readable report
    pub fn analyze<P: AsRef<Path>>(&self, input_path: P) -> SpriteResult<String> {
        let report = pipeline::analyze_sheet(input_path.as_ref(), &self.config)?;
        Ok(report.to_string())
    }
}
