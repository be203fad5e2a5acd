//! End-to-end tests: write a synthetic sheet, then extract and analyze it

extern crate std;

use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use spritecut::{SpriteConfig, SpriteCut, SpriteError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh scratch directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spritecut-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 3 x 2 sheet of filled circles with some faint noise
fn write_sheet(path: &PathBuf) {
    let mut sheet = RgbaImage::from_pixel(120, 80, Rgba([0, 0, 0, 0]));
    for row in 0..2i32 {
        for col in 0..3i32 {
            let cx = 20 + col * 40;
            let cy = 20 + row * 40;
            for y in (cy - 10)..=(cy + 10) {
                for x in (cx - 10)..=(cx + 10) {
                    if (x - cx).pow(2) + (y - cy).pow(2) <= 100 {
                        sheet.put_pixel(x as u32, y as u32, Rgba([220, 40, 40, 255]));
                    }
                }
            }
        }
    }
    // A lone anti-aliasing speck that must be filtered out by size
    sheet.put_pixel(60, 40, Rgba([255, 255, 255, 200]));
    // Faint shadow below the alpha threshold
    sheet.put_pixel(0, 79, Rgba([0, 0, 0, 20]));

    DynamicImage::ImageRgba8(sheet).save(path).unwrap();
}

#[test]
fn test_extract_sheet_to_files() {
    init_logging();
    let dir = scratch_dir("extract");
    let input = dir.join("sheet.png");
    write_sheet(&input);
    let output = dir.join("ornaments");

    let api = SpriteCut::new(SpriteConfig::builtin(), None).unwrap();
    let written = api.extract(&input, &output).unwrap();

    std::assert_eq!(written.len(), 6);
    std::assert_eq!(written[0], output.join("ornament-1.png"));
    std::assert_eq!(written[5], output.join("ornament-6.png"));

    // Circle of radius 10 is 21 pixels across, plus 2 pixels padding per side
    let first = image::open(&written[0]).unwrap();
    std::assert_eq!(first.dimensions(), (25, 25));
    std::assert_eq!(first.get_pixel(12, 12), Rgba([220, 40, 40, 255]));
    std::assert_eq!(first.get_pixel(0, 0)[3], 0);

    std::assert_eq!(fs::read_dir(&output).unwrap().count(), 6);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_locate_reading_order() {
    init_logging();
    let dir = scratch_dir("locate");
    let input = dir.join("sheet.png");
    write_sheet(&input);

    let api = SpriteCut::new(SpriteConfig::builtin(), None).unwrap();
    let regions = api.locate(&input).unwrap();

    let corners: Vec<(u32, u32)> = regions.iter().map(|r| (r.left, r.top)).collect();
    std::assert_eq!(corners, vec![(8, 8), (48, 8), (88, 8), (8, 48), (48, 48), (88, 48)]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_custom_name_pattern_and_config_file() {
    init_logging();
    let dir = scratch_dir("config");
    let input = dir.join("sheet.png");
    write_sheet(&input);

    let config_path = dir.join("spritecut.toml");
    fs::write(&config_path, "[extract]\npadding = 0\nname_pattern = \"sprite_{index:2}.png\"\n").unwrap();

    let mut config = SpriteConfig::builtin();
    config.merge_file(&config_path).unwrap();

    let api = SpriteCut::new(config, None).unwrap();
    let written = api.extract(&input, dir.join("out")).unwrap();

    std::assert_eq!(written[2].file_name().unwrap(), "sprite_03.png");
    std::assert_eq!(image::open(&written[2]).unwrap().dimensions(), (21, 21));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_sheet_writes_nothing() {
    init_logging();
    let dir = scratch_dir("empty");
    let input = dir.join("empty.png");
    DynamicImage::ImageRgba8(RgbaImage::new(16, 16)).save(&input).unwrap();
    let output = dir.join("out");

    let api = SpriteCut::new(SpriteConfig::builtin(), None).unwrap();
    let written = api.extract(&input, &output).unwrap();

    std::assert!(written.is_empty());
    std::assert!(!output.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_fails_before_writing() {
    init_logging();
    let dir = scratch_dir("missing");
    let output = dir.join("out");

    let api = SpriteCut::new(SpriteConfig::builtin(), None).unwrap();
    let result = api.extract(dir.join("nope.png"), &output);

    std::assert!(matches!(result, Err(SpriteError::InputNotFound(_))));
    std::assert!(!output.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_failed_write_leaves_no_sprites() {
    init_logging();
    let dir = scratch_dir("blocked");
    let input = dir.join("sheet.png");
    write_sheet(&input);
    let output = dir.join("out");
    // A directory already holding the second sprite's name
    fs::create_dir_all(output.join("ornament-2.png")).unwrap();

    let api = SpriteCut::new(SpriteConfig::builtin(), None).unwrap();
    let result = api.extract(&input, &output);

    std::assert!(matches!(result, Err(SpriteError::EncodeError(_))));
    let files: Vec<PathBuf> = fs::read_dir(&output).unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_file())
        .collect();
    std::assert!(files.is_empty(), "left behind: {:?}", files);
    std::assert!(!output.join("ornament-1.png").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_analyze_report() {
    init_logging();
    let dir = scratch_dir("analyze");
    let input = dir.join("sheet.png");
    write_sheet(&input);

    let mut config = SpriteConfig::builtin();
    config.empty_line_max = 2;
    let api = SpriteCut::new(config, None).unwrap();
    let report = api.analyze(&input).unwrap();

    std::assert!(report.contains("Estimated grid: 2 rows x 3 columns (6 cells)"));
    let _ = fs::remove_dir_all(&dir);
}
