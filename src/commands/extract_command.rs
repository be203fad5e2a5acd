//! Sprite extraction command
//!
//! This module implements the command that locates every sprite on a
//! sheet and writes each one to its own file.

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, input_from_args};
use crate::config::SpriteConfig;
use crate::errors::SpriteResult;
use crate::pipeline;
use crate::utils::logger::Logger;
use crate::utils::naming::NamePattern;

/// Command for extracting sprites from a sheet
pub struct ExtractCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Effective configuration (defaults, config file, flags)
    config: SpriteConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// The name pattern is validated here so that a bad pattern fails
    /// before the input is even read.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SpriteResult<Self> {
        let input_file = input_from_args(args)?;
        info!("Input file: {}", input_file);

        let config = config_from_args(args)?;
        NamePattern::parse(&config.name_pattern)?;
        info!("Output directory: {}", config.output_dir);

        Ok(ExtractCommand {
            input_file,
            config,
            logger,
        })
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> SpriteResult<()> {
        info!("Extracting sprites from {}", self.input_file);
        debug!("Using configuration {:?}", self.config);

        let written = pipeline::extract_sprites(
            Path::new(&self.input_file),
            Path::new(&self.config.output_dir),
            &self.config,
            self.logger,
            true,
        )?;

        let summary = format!("Extracted {} sprites from {} to {}",
                              written.len(), self.input_file, self.config.output_dir);
        info!("{}", summary);
        self.logger.log(&summary)?;

        Ok(())
    }
}
