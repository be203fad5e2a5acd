//! Region structure describing one located sprite
//!
//! A Region is the padded bounding box of a single connected component,
//! in pixel coordinates where (0,0) is the top-left corner of the image.
//! `right` and `bottom` are exclusive, so a region always covers
//! `width() x height()` pixels and can be handed straight to a crop.

/// Located sprite (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column (inclusive)
    pub left: u32,

    /// Topmost row (inclusive)
    pub top: u32,

    /// Column immediately right of the region (exclusive)
    pub right: u32,

    /// Row immediately below the region (exclusive)
    pub bottom: u32,

    /// Number of foreground pixels in the source component
    pub pixel_count: u64,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `left` - Leftmost column (inclusive)
    /// * `top` - Topmost row (inclusive)
    /// * `right` - Right edge (exclusive)
    /// * `bottom` - Bottom edge (exclusive)
    /// * `pixel_count` - Foreground pixels of the component
    pub fn new(left: u32, top: u32, right: u32, bottom: u32, pixel_count: u64) -> Self {
        Region { left, top, right, bottom, pixel_count }
    }

    /// Width of the region in pixels
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the region in pixels
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Check whether the pixel (x, y) lies inside the region
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check whether two regions share at least one pixel
    pub fn overlaps(&self, other: &Region) -> bool {
        self.left < other.right && other.left < self.right &&
            self.top < other.bottom && other.top < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn test_dimensions() {
        let region = Region::new(3, 4, 13, 24, 50);
        assert_eq!(region.width(), 10);
        assert_eq!(region.height(), 20);
        assert!(region.contains(3, 4));
        assert!(!region.contains(13, 4));
    }

    #[test]
    fn test_overlaps() {
        let a = Region::new(0, 0, 10, 10, 1);
        let b = Region::new(9, 9, 20, 20, 1);
        let c = Region::new(10, 0, 20, 10, 1);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
