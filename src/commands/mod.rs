//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use extract_command::ExtractCommand;

use std::str::FromStr;

use clap::ArgMatches;
use log::debug;

use crate::config::SpriteConfig;
use crate::errors::{SpriteError, SpriteResult};
use crate::segment::Connectivity;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct SpritecutCommandFactory;

impl SpritecutCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SpritecutCommandFactory
    }
}

impl Default for SpritecutCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SpritecutCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SpriteResult<Box<dyn Command + 'a>> {
        if args.get_flag("analyze") {
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        } else {
            // Extraction is the default
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}

/// Build the effective configuration for a run
///
/// Starts from the built-in defaults, applies the `--config` file if
/// given, then any explicit command-line values.
pub(crate) fn config_from_args(args: &ArgMatches) -> SpriteResult<SpriteConfig> {
    let config_path = args.get_one::<String>("config").map(String::as_str);
    let mut config = SpriteConfig::load(config_path)?;

    if let Some(value) = parse_arg::<u8>(args, "alpha-threshold")? {
        config.alpha_threshold = value;
    }
    if let Some(value) = parse_arg::<u64>(args, "min-size")? {
        config.min_component_size = value;
    }
    if let Some(value) = parse_arg::<u32>(args, "padding")? {
        config.padding = value;
    }
    if let Some(value) = parse_arg::<Connectivity>(args, "connectivity")? {
        config.connectivity = value;
    }
    if let Some(value) = parse_arg::<u32>(args, "empty-line-max")? {
        config.empty_line_max = value;
    }
    if let Some(value) = args.get_one::<String>("name-pattern") {
        config.name_pattern = value.clone();
    }
    if let Some(value) = args.get_one::<String>("output") {
        config.output_dir = value.clone();
    }

    debug!("Configuration after command-line overrides: {:?}", config);
    Ok(config)
}

/// Parse an optional string argument into `T`
fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> SpriteResult<Option<T>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>()
            .map(Some)
            .map_err(|_| SpriteError::InvalidParameter(format!("Invalid value for --{}: {}", name, raw))),
    }
}

/// Input file argument shared by all commands
pub(crate) fn input_from_args(args: &ArgMatches) -> SpriteResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| SpriteError::InvalidParameter("Missing input file".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn matches(args: &[&str]) -> ArgMatches {
        build_cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = matches(&["spritecut", "sheet.png", "--alpha-threshold", "10",
            "--min-size", "30", "--connectivity", "8", "-o", "sprites"]);
        let config = config_from_args(&args).unwrap();

        assert_eq!(config.alpha_threshold, 10);
        assert_eq!(config.min_component_size, 30);
        assert_eq!(config.connectivity, Connectivity::Eight);
        assert_eq!(config.output_dir, "sprites");
        assert_eq!(config.padding, 2);
    }

    #[test]
    fn test_invalid_flag_value() {
        let args = matches(&["spritecut", "sheet.png", "--alpha-threshold", "256"]);
        let result = config_from_args(&args);
        assert!(matches!(result, Err(SpriteError::InvalidParameter(_))));

        let args = matches(&["spritecut", "sheet.png", "--connectivity", "6"]);
        assert!(config_from_args(&args).is_err());
    }

    #[test]
    fn test_bad_name_pattern_rejected_before_reading_input() {
        let logger = Logger::sink();
        let args = matches(&["spritecut", "missing.png", "--name-pattern", "sprite.png"]);
        let result = SpritecutCommandFactory::new().create_command(&args, &logger);
        assert!(matches!(result, Err(SpriteError::InvalidParameter(_))));
    }

    #[test]
    fn test_factory_selects_analyze() {
        let logger = Logger::sink();
        let args = matches(&["spritecut", "missing.png", "--analyze"]);
        let command = SpritecutCommandFactory::new().create_command(&args, &logger).unwrap();

        // The input does not exist, so running fails with a lookup error
        assert!(matches!(command.execute(), Err(SpriteError::InputNotFound(_))));
    }
}
