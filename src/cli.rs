//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `spritecut` binary
///
/// Numeric options are kept as strings and parsed by the commands so that
/// invalid values surface as `InvalidParameter` errors. Options without a
/// value fall back to the configuration file and built-in defaults.
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("spritecut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Locate and crop individual sprites from a transparent sprite sheet")
        .arg(
            Arg::new("input")
                .help("Input image (PNG with alpha channel)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for the cropped sprites")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("analyze")
                .short('a')
                .long("analyze")
                .help("Report the row/column layout instead of extracting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("alpha-threshold")
                .long("alpha-threshold")
                .help("Pixels with alpha above this value are foreground (0-255)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .help("Discard components with this many pixels or fewer")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("padding")
                .long("padding")
                .help("Margin added around every sprite, clamped to the image")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("connectivity")
                .long("connectivity")
                .help("Pixel neighbourhood: 4 (edges) or 8 (edges and corners)")
                .value_name("4|8")
                .required(false),
        )
        .arg(
            Arg::new("name-pattern")
                .long("name-pattern")
                .help("Output file name, {index} or {index:N} is replaced by the sprite number")
                .value_name("PATTERN")
                .required(false),
        )
        .arg(
            Arg::new("empty-line-max")
                .long("empty-line-max")
                .help("Analysis: lines with fewer foreground pixels than this are empty")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
