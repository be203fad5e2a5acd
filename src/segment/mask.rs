//! Foreground mask built from the alpha channel

use image::{DynamicImage, RgbaImage};
use log::{debug, warn};

/// Binary foreground grid with the same dimensions as the source image
#[derive(Debug, Clone)]
pub struct ForegroundMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl ForegroundMask {
    /// Build a mask from an RGBA buffer
    ///
    /// A pixel is foreground when its alpha is strictly greater than
    /// `alpha_threshold`.
    pub fn from_rgba(image: &RgbaImage, alpha_threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let cells: Vec<bool> = image.pixels()
            .map(|pixel| pixel[3] > alpha_threshold)
            .collect();

        let mask = ForegroundMask { width, height, cells };
        debug!("Built {}x{} foreground mask (threshold {}): {} foreground pixels",
               width, height, alpha_threshold, mask.foreground_count());
        mask
    }

    /// Build a mask from any decoded image
    ///
    /// Images without an alpha channel are converted to RGBA, which makes
    /// every pixel fully opaque.
    pub fn from_image(image: &DynamicImage, alpha_threshold: u8) -> Self {
        if !image.color().has_alpha() {
            warn!("Image has no alpha channel ({:?}); treating it as fully opaque", image.color());
        }
        Self::from_rgba(&image.to_rgba8(), alpha_threshold)
    }

    /// Build a mask directly from rows of booleans
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map(|row| row.len()).unwrap_or(0) as u32;
        let cells = rows.iter().flat_map(|row| row.iter().copied()).collect();
        ForegroundMask { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is foreground; out-of-bounds is background
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[self.index(x, y)]
    }

    /// Total number of foreground pixels
    pub fn foreground_count(&self) -> u64 {
        self.cells.iter().filter(|&&cell| cell).count() as u64
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }
}
