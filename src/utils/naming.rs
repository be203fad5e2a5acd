//! Output file naming
//!
//! Sprites are written under names built from a pattern such as
//! `ornament-{index}.png`. `{index}` expands to the 1-based position of
//! the sprite in reading order, and `{index:N}` zero-pads it to N digits.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::errors::{SpriteError, SpriteResult};

lazy_static! {
    static ref INDEX_PLACEHOLDER: Regex = Regex::new(r"\{index(?::(\d{1,2}))?\}")
        .unwrap_or_else(|e| panic!("invalid index placeholder regex: {}", e));
}

/// Validated output name pattern
#[derive(Debug, Clone)]
pub struct NamePattern {
    pattern: String,
}

impl NamePattern {
    /// Parse a name pattern
    ///
    /// The pattern must contain at least one index placeholder and must
    /// not contain path separators.
    pub fn parse(pattern: &str) -> SpriteResult<Self> {
        if !INDEX_PLACEHOLDER.is_match(pattern) {
            return Err(SpriteError::InvalidParameter(
                format!("Name pattern '{}' has no {{index}} placeholder", pattern)));
        }

        if pattern.contains('/') || pattern.contains('\\') {
            return Err(SpriteError::InvalidParameter(
                format!("Name pattern '{}' must be a file name, not a path", pattern)));
        }

        Ok(NamePattern { pattern: pattern.to_string() })
    }

    /// File name for the sprite at `index` (1-based)
    pub fn file_name(&self, index: usize) -> String {
        INDEX_PLACEHOLDER
            .replace_all(&self.pattern, |caps: &Captures| {
                match caps.get(1).and_then(|width| width.as_str().parse::<usize>().ok()) {
                    Some(width) => format!("{:0width$}", index, width = width),
                    None => index.to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::NamePattern;

    #[test]
    fn test_default_pattern() {
        let pattern = NamePattern::parse("ornament-{index}.png").unwrap();
        assert_eq!(pattern.file_name(1), "ornament-1.png");
        assert_eq!(pattern.file_name(14), "ornament-14.png");
    }

    #[test]
    fn test_zero_padding() {
        let pattern = NamePattern::parse("sprite_{index:3}.png").unwrap();
        assert_eq!(pattern.file_name(7), "sprite_007.png");
        assert_eq!(pattern.file_name(1234), "sprite_1234.png");
    }

    #[test]
    fn test_rejects_missing_placeholder() {
        assert!(NamePattern::parse("ornament.png").is_err());
        assert!(NamePattern::parse("ornament-{idx}.png").is_err());
    }

    #[test]
    fn test_rejects_paths() {
        assert!(NamePattern::parse("../ornament-{index}.png").is_err());
    }
}
