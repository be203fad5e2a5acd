//! Sheet layout analysis command
//!
//! This module implements the command that reports the row/column
//! structure of a sprite sheet without writing any sprite.

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, input_from_args};
use crate::config::SpriteConfig;
use crate::errors::SpriteResult;
use crate::layout::LayoutReport;
use crate::pipeline;
use crate::utils::logger::Logger;

/// Command for analyzing sheet layout
pub struct AnalyzeCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Whether to print per-line foreground counts
    verbose: bool,
    config: SpriteConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SpriteResult<Self> {
        let input_file = input_from_args(args)?;
        let verbose = args.get_flag("verbose");
        let config = config_from_args(args)?;

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            config,
            logger,
        })
    }

    /// Display the foreground count of every non-empty row and column
    fn display_line_counts(&self, report: &LayoutReport) {
        for (y, count) in report.row_counts.iter().enumerate().filter(|(_, count)| **count > 0) {
            debug!("  Row {}: {} foreground pixels", y, count);
        }
        for (x, count) in report.col_counts.iter().enumerate().filter(|(_, count)| **count > 0) {
            debug!("  Column {}: {} foreground pixels", x, count);
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> SpriteResult<()> {
        info!("Analyzing file: {}", self.input_file);

        let report = pipeline::analyze_sheet(Path::new(&self.input_file), &self.config)?;

        for line in report.to_string().lines() {
            info!("{}", line);
        }

        if self.verbose {
            self.display_line_counts(&report);
        }

        debug!("Analysis completed successfully");
        self.logger.log("Analysis completed successfully")?;

        Ok(())
    }
}
