//! Connected-component labeling over a foreground mask
//!
//! Components are found with an iterative flood fill driven by an explicit
//! queue, scanning the mask in raster order. Labels are therefore assigned
//! in the order each component's first (top-most, then left-most) pixel
//! is met: 1, 2, 3, ... Background cells keep label 0.
//!
//! Bounding boxes and pixel counts are accumulated during the fill, so no
//! second pass over the label map is needed.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::debug;

use super::mask::ForegroundMask;

/// Pixel neighbourhood used when growing a component
///
/// This decides whether diagonally touching pixels belong to the same
/// component, so it changes segmentation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Edge neighbours only (up, down, left, right)
    #[default]
    Four,
    /// Edge and diagonal neighbours
    Eight,
}

impl Connectivity {
    /// Map a neighbour count (4 or 8) to a connectivity
    pub fn from_neighbours(count: i64) -> Option<Self> {
        match count {
            4 => Some(Connectivity::Four),
            8 => Some(Connectivity::Eight),
            _ => None,
        }
    }

    /// Neighbour count of this connectivity
    pub fn neighbours(&self) -> u8 {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }

    fn offsets(&self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(i64, i64); 8] = [
            (-1, -1), (0, -1), (1, -1),
            (-1, 0), (1, 0),
            (-1, 1), (0, 1), (1, 1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connected", self.neighbours())
    }
}

impl FromStr for Connectivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().ok()
            .and_then(Connectivity::from_neighbours)
            .ok_or_else(|| format!("Invalid connectivity '{}'. Expected 4 or 8", s))
    }
}

/// Bounding box and size of one labelled component
///
/// Coordinates are inclusive: `max_x`/`max_y` are the last foreground
/// column/row of the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentStats {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u64,
}

impl ComponentStats {
    fn seed(label: u32, x: u32, y: u32) -> Self {
        ComponentStats { label, min_x: x, min_y: y, max_x: x, max_y: y, pixel_count: 0 }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
    }
}

/// Integer label grid with the same dimensions as the mask
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Label at (x, y); 0 for background or out-of-bounds
    pub fn label_at(&self, x: u32, y: u32) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.labels[y as usize * self.width as usize + x as usize]
    }
}

/// Label every connected group of foreground cells
///
/// # Arguments
/// * `mask` - The foreground mask
/// * `connectivity` - Neighbourhood used to join pixels
///
/// # Returns
/// The label map and one `ComponentStats` per label, ordered by label
pub fn label_components(mask: &ForegroundMask, connectivity: Connectivity) -> (LabelMap, Vec<ComponentStats>) {
    let width = mask.width();
    let height = mask.height();
    let cells = mask.cells();
    let mut labels = vec![0u32; cells.len()];
    let mut components: Vec<ComponentStats> = Vec::new();
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            let start = mask.index(x, y);
            if !cells[start] || labels[start] != 0 {
                continue;
            }

            let label = components.len() as u32 + 1;
            let mut stats = ComponentStats::seed(label, x, y);
            labels[start] = label;
            queue.push_back((x, y));

            while let Some((cx, cy)) = queue.pop_front() {
                stats.include(cx, cy);

                for &(dx, dy) in connectivity.offsets() {
                    let nx = cx as i64 + dx;
                    let ny = cy as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }

                    let (nx, ny) = (nx as u32, ny as u32);
                    let neighbour = mask.index(nx, ny);
                    if cells[neighbour] && labels[neighbour] == 0 {
                        labels[neighbour] = label;
                        queue.push_back((nx, ny));
                    }
                }
            }

            components.push(stats);
        }
    }

    debug!("Labelled {} {} components", components.len(), connectivity);

    (LabelMap { width, height, labels }, components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_raster_order() {
        let mask = ForegroundMask::from_rows(&[
            &[false, false, true],
            &[true, false, false],
        ]);
        let (map, components) = label_components(&mask, Connectivity::Four);

        assert_eq!(components.len(), 2);
        assert_eq!(map.label_at(2, 0), 1);
        assert_eq!(map.label_at(0, 1), 2);
        assert_eq!(map.label_at(1, 0), 0);
    }

    #[test]
    fn test_diagonal_pixels_depend_on_connectivity() {
        let mask = ForegroundMask::from_rows(&[
            &[true, false],
            &[false, true],
        ]);

        let (_, four) = label_components(&mask, Connectivity::Four);
        assert_eq!(four.len(), 2);

        let (map, eight) = label_components(&mask, Connectivity::Eight);
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 2);
        assert_eq!(map.label_at(1, 1), 1);
    }

    #[test]
    fn test_stats_cover_concave_shape() {
        // U shape: the fill has to walk back up the right arm
        let mask = ForegroundMask::from_rows(&[
            &[true, false, true],
            &[true, false, true],
            &[true, true, true],
        ]);
        let (_, components) = label_components(&mask, Connectivity::Four);

        assert_eq!(components.len(), 1);
        let stats = components[0];
        assert_eq!((stats.min_x, stats.min_y, stats.max_x, stats.max_y), (0, 0, 2, 2));
        assert_eq!(stats.pixel_count, 7);
    }

    #[test]
    fn test_empty_mask() {
        let mask = ForegroundMask::from_rows(&[&[false, false], &[false, false]]);
        let (map, components) = label_components(&mask, Connectivity::Eight);
        assert!(components.is_empty());
        assert_eq!(map.label_at(0, 0), 0);
    }

    #[test]
    fn test_parse_connectivity() {
        assert_eq!("4".parse::<Connectivity>(), Ok(Connectivity::Four));
        assert_eq!(" 8 ".parse::<Connectivity>(), Ok(Connectivity::Eight));
        assert!("6".parse::<Connectivity>().is_err());
    }
}
