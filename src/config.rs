//! Configuration for extraction and analysis
//!
//! Built-in defaults are embedded from `defaults.toml` and parsed once at
//! startup. A user file can override any subset of keys, and command-line
//! flags override both.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info};
use toml::Value;

use crate::errors::{SpriteError, SpriteResult};
use crate::segment::{Connectivity, ExtractionParams};

lazy_static! {
    static ref DEFAULT_CONFIG: SpriteConfig = {
        let content = include_str!("../defaults.toml");
        let mut config = SpriteConfig::default();
        match config.merge_toml_str(content) {
            Ok(()) => config,
            Err(e) => {
                eprintln!("Warning: Failed to parse built-in defaults: {}", e);
                SpriteConfig::default()
            }
        }
    };
}

/// Settings shared by the extract and analyze commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteConfig {
    pub alpha_threshold: u8,
    pub min_component_size: u64,
    pub padding: u32,
    pub connectivity: Connectivity,
    /// Output file name pattern, see `utils::naming`
    pub name_pattern: String,
    pub output_dir: String,
    /// Analysis: lines with fewer foreground pixels than this are empty
    pub empty_line_max: u32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        SpriteConfig {
            alpha_threshold: 50,
            min_component_size: 100,
            padding: 2,
            connectivity: Connectivity::Four,
            name_pattern: "ornament-{index}.png".to_string(),
            output_dir: "ornaments".to_string(),
            empty_line_max: 10,
        }
    }
}

impl SpriteConfig {
    /// The built-in defaults from `defaults.toml`
    pub fn builtin() -> Self {
        DEFAULT_CONFIG.clone()
    }

    /// Built-in defaults, overridden by an optional user file
    ///
    /// # Arguments
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    /// The merged configuration or a `ConfigError`
    pub fn load(path: Option<&str>) -> SpriteResult<Self> {
        let mut config = Self::builtin();

        if let Some(path) = path {
            info!("Loading configuration from {}", path);
            config.merge_file(path)?;
        }

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Override settings with the keys present in a TOML file
    pub fn merge_file<P: AsRef<Path>>(&mut self, path: P) -> SpriteResult<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SpriteError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        self.merge_toml_str(&content)
    }

    /// Override settings with the keys present in a TOML document
    ///
    /// Unknown keys are ignored; present keys must hold valid values.
    pub fn merge_toml_str(&mut self, content: &str) -> SpriteResult<()> {
        let document: Value = content.parse()
            .map_err(|e| SpriteError::ConfigError(format!("Invalid TOML: {}", e)))?;

        if let Some(table) = document.get("extract") {
            if let Some(value) = integer_in(table, "alpha_threshold", 0, u8::MAX as i64)? {
                self.alpha_threshold = value as u8;
            }
            if let Some(value) = integer_in(table, "min_component_size", 0, i64::MAX)? {
                self.min_component_size = value as u64;
            }
            if let Some(value) = integer_in(table, "padding", 0, u32::MAX as i64)? {
                self.padding = value as u32;
            }
            if let Some(value) = integer_in(table, "connectivity", 4, 8)? {
                self.connectivity = Connectivity::from_neighbours(value).ok_or_else(|| {
                    SpriteError::ConfigError(format!("extract.connectivity must be 4 or 8, got {}", value))
                })?;
            }
            if let Some(value) = string_in(table, "name_pattern")? {
                self.name_pattern = value;
            }
            if let Some(value) = string_in(table, "output_dir")? {
                self.output_dir = value;
            }
        }

        if let Some(table) = document.get("analyze") {
            if let Some(value) = integer_in(table, "empty_line_max", 0, u32::MAX as i64)? {
                self.empty_line_max = value as u32;
            }
        }

        Ok(())
    }

    /// Extraction parameters derived from this configuration
    pub fn extraction_params(&self) -> ExtractionParams {
        ExtractionParams::new(self.alpha_threshold, self.min_component_size, self.padding)
            .with_connectivity(self.connectivity)
    }
}

fn integer_in(table: &Value, key: &str, min: i64, max: i64) -> SpriteResult<Option<i64>> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };

    let number = value.as_integer()
        .ok_or_else(|| SpriteError::ConfigError(format!("{} must be an integer", key)))?;

    if number < min || number > max {
        return Err(SpriteError::ConfigError(
            format!("{} = {} is out of range ({}..={})", key, number, min, max)));
    }

    Ok(Some(number))
}

fn string_in(table: &Value, key: &str) -> SpriteResult<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value.as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| SpriteError::ConfigError(format!("{} must be a string", key))),
    }
}
