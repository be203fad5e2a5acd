//! Image loading, cropping and writing helpers

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use log::{debug, info, warn};

use crate::errors::{SpriteError, SpriteResult};
use crate::segment::Region;
use crate::utils::naming::NamePattern;
use crate::utils::progress::ProgressTracker;

/// Load and decode an image file
///
/// The format is guessed from the file content, not the extension.
///
/// # Arguments
/// * `path` - Path to the input image
///
/// # Returns
/// The decoded image, `InputNotFound` if the path cannot be opened, or
/// `DecodeError` if the content is not a supported image
pub fn load_image<P: AsRef<Path>>(path: P) -> SpriteResult<DynamicImage> {
    let path = path.as_ref();
    info!("Loading image {}", path.display());

    let reader = ImageReader::open(path)
        .map_err(|e| open_error(path, e))?
        .with_guessed_format()
        .map_err(|e| open_error(path, e))?;

    let image = reader.decode().map_err(|e| match e {
        ImageError::IoError(io_err) => open_error(path, io_err),
        other => SpriteError::DecodeError(format!("{}: {}", path.display(), other)),
    })?;

    info!("Image size: {}x{} ({:?})", image.width(), image.height(), image.color());
    Ok(image)
}

fn open_error(path: &Path, error: io::Error) -> SpriteError {
    match error.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            SpriteError::InputNotFound(format!("{} ({})", path.display(), error))
        }
        _ => SpriteError::IoError(error),
    }
}

/// Crop a region out of an image
///
/// The source is left untouched; the result is a new image of exactly
/// `region.width() x region.height()` pixels.
pub fn crop_region(image: &DynamicImage, region: &Region) -> DynamicImage {
    image.crop_imm(region.left, region.top, region.width(), region.height())
}

/// Write cropped sprites as PNG files into a directory
///
/// The directory is created if it does not exist. Files are named from
/// `pattern` with 1-based indices in the order given.
///
/// Writing is all-or-nothing: every crop is first saved under a hidden
/// staging name, and only once all of them are saved are they renamed
/// into place. On any failure the staged and already renamed files are
/// removed before the error is returned.
///
/// # Arguments
/// * `crops` - Cropped sprites in reading order
/// * `output_dir` - Destination directory
/// * `pattern` - File name pattern
/// * `progress` - Progress tracker advanced once per file
///
/// # Returns
/// The paths written, in order
pub fn write_crops(crops: &[DynamicImage], output_dir: &Path, pattern: &NamePattern,
                   progress: &ProgressTracker) -> SpriteResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let targets: Vec<(PathBuf, PathBuf)> = (1..=crops.len())
        .map(|index| {
            let file_name = pattern.file_name(index);
            let staged = output_dir.join(format!(".{}.partial", file_name));
            (staged, output_dir.join(file_name))
        })
        .collect();

    let mut staged_count = 0;
    for (crop, (staged, target)) in crops.iter().zip(&targets) {
        progress.set_message(&target.display().to_string());
        if let Err(e) = crop.save_with_format(staged, ImageFormat::Png) {
            // save_with_format may have created a truncated file
            remove_all(targets[..=staged_count].iter().map(|(staged, _)| staged));
            return Err(SpriteError::EncodeError(format!("{}: {}", target.display(), e)));
        }
        staged_count += 1;
        debug!("Staged {} ({}x{})", target.display(), crop.width(), crop.height());
        progress.increment(1);
    }

    for (renamed, (staged, target)) in targets.iter().enumerate() {
        if let Err(e) = fs::rename(staged, target) {
            remove_all(targets[..renamed].iter().map(|(_, target)| target));
            remove_all(targets[renamed..].iter().map(|(staged, _)| staged));
            return Err(SpriteError::EncodeError(format!("{}: {}", target.display(), e)));
        }
    }

    progress.finish();
    Ok(targets.into_iter().map(|(_, target)| target).collect())
}

/// Best-effort removal of files left by an aborted write
fn remove_all<'p>(paths: impl Iterator<Item = &'p PathBuf>) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Could not remove {}: {}", path.display(), e);
            }
        }
    }
}
