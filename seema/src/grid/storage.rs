//! Weighted terrain raster.
//!
//! Uses a Structure-of-Arrays layout: the class byte and the traversal
//! weight of each cell live in separate contiguous arrays.

use serde::{Deserialize, Serialize};

use crate::core::{CellClass, GridCoord, WorldPoint};

use super::traits::TerrainMap;

/// Smallest weight stored for a free cell.
///
/// Keeps edge costs strictly positive so path costs stay comparable.
pub const MIN_WEIGHT: f32 = 1e-3;

/// Weighted occupancy raster.
///
/// ## Memory Layout
///
/// ```text
/// classes: [C C C C C C C C|...]   CellClass as u8
/// weights: [W W W W W W W W|...]   meaningful only where class == Free
/// ```
///
/// ## Weight band convention
///
/// [`WeightGrid::from_weights`] reads a single weight band the way the
/// navigation weight maps are produced upstream:
///
/// | raw value          | class    | weight |
/// |--------------------|----------|--------|
/// | `NaN` or `< 0`     | Unknown  | -      |
/// | `+∞`               | Obstacle | -      |
/// | finite, `>= 0`     | Free     | `max(raw, MIN_WEIGHT)` |
#[derive(Clone, Debug)]
pub struct WeightGrid {
    classes: Vec<u8>,
    weights: Vec<f32>,

    width: usize,
    height: usize,
    resolution: f32,
    origin: WorldPoint,
}

/// Cell counts by class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    /// Cells never observed
    pub unknown: usize,
    /// Traversable cells
    pub free: usize,
    /// Non-traversable cells
    pub obstacle: usize,
}

impl ClassCounts {
    /// Observed cells (free + obstacle).
    pub fn known(&self) -> usize {
        self.free + self.obstacle
    }

    /// All cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}

impl WeightGrid {
    /// Create an all-unknown grid.
    pub fn new(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> Self {
        let size = width * height;
        Self {
            classes: vec![CellClass::Unknown as u8; size],
            weights: vec![0.0; size],
            width,
            height,
            resolution,
            origin,
        }
    }

    /// Create an all-unknown grid centred on the world origin.
    pub fn centered(width: usize, height: usize, resolution: f32) -> Self {
        let half_width = (width as f32 * resolution) / 2.0;
        let half_height = (height as f32 * resolution) / 2.0;
        Self::new(
            width,
            height,
            resolution,
            WorldPoint::new(-half_width, -half_height),
        )
    }

    /// Build a grid from a row-major weight band (row 0 first).
    ///
    /// Returns `None` when `band.len() != width * height`.
    pub fn from_weights(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        band: &[f32],
    ) -> Option<Self> {
        if band.len() != width * height {
            return None;
        }

        let mut grid = Self::new(width, height, resolution, origin);
        for (i, &raw) in band.iter().enumerate() {
            if raw.is_nan() || raw < 0.0 {
                continue;
            }
            if raw.is_infinite() {
                grid.classes[i] = CellClass::Obstacle as u8;
            } else {
                grid.classes[i] = CellClass::Free as u8;
                grid.weights[i] = raw.max(MIN_WEIGHT);
            }
        }
        Some(grid)
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Mark a cell free with the given traversal weight.
    /// Returns false if the coordinate is outside the grid.
    pub fn set_free(&mut self, coord: GridCoord, weight: f32) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => {
                self.classes[i] = CellClass::Free as u8;
                self.weights[i] = weight.max(MIN_WEIGHT);
                true
            }
            None => false,
        }
    }

    /// Mark a cell as an obstacle.
    pub fn set_obstacle(&mut self, coord: GridCoord) -> bool {
        self.set_class(coord, CellClass::Obstacle)
    }

    /// Forget a cell.
    pub fn set_unknown(&mut self, coord: GridCoord) -> bool {
        self.set_class(coord, CellClass::Unknown)
    }

    fn set_class(&mut self, coord: GridCoord, class: CellClass) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => {
                self.classes[i] = class as u8;
                self.weights[i] = 0.0;
                true
            }
            None => false,
        }
    }

    /// Mark every cell of the inclusive rectangle `[min, max]` free.
    pub fn fill_free(&mut self, min: GridCoord, max: GridCoord, weight: f32) {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                self.set_free(GridCoord::new(x, y), weight);
            }
        }
    }

    /// Mark every cell of the inclusive rectangle `[min, max]` as obstacle.
    pub fn fill_obstacle(&mut self, min: GridCoord, max: GridCoord) {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                self.set_obstacle(GridCoord::new(x, y));
            }
        }
    }

    /// Smallest weight among free cells, `None` if there are none.
    pub fn min_free_weight(&self) -> Option<f32> {
        self.classes
            .iter()
            .zip(&self.weights)
            .filter(|&(&c, _)| c == CellClass::Free as u8)
            .map(|(_, &w)| w)
            .reduce(f32::min)
    }

    /// Count cells by class.
    pub fn count_by_class(&self) -> ClassCounts {
        let mut counts = ClassCounts::default();
        for &c in &self.classes {
            match CellClass::from_u8(c) {
                CellClass::Unknown => counts.unknown += 1,
                CellClass::Free => counts.free += 1,
                CellClass::Obstacle => counts.obstacle += 1,
            }
        }
        counts
    }

    /// ASCII rendering, top row first. Handy in failing test output.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let class = CellClass::from_u8(self.classes[y * self.width + x]);
                out.push(class.as_char());
            }
            out.push('\n');
        }
        out
    }
}

impl TerrainMap for WeightGrid {
    #[inline]
    fn classify(&self, coord: GridCoord) -> CellClass {
        self.coord_to_index(coord)
            .map(|i| CellClass::from_u8(self.classes[i]))
            .unwrap_or(CellClass::Unknown)
    }

    #[inline]
    fn weight(&self, coord: GridCoord) -> Option<f32> {
        let i = self.coord_to_index(coord)?;
        (self.classes[i] == CellClass::Free as u8).then(|| self.weights[i])
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    fn origin(&self) -> WorldPoint {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unknown() {
        let grid = WeightGrid::new(10, 5, 0.5, WorldPoint::ZERO);
        let counts = grid.count_by_class();
        assert_eq!(counts.unknown, 50);
        assert_eq!(counts.known(), 0);
        assert_eq!(grid.classify(GridCoord::new(3, 3)), CellClass::Unknown);
        assert_eq!(grid.weight(GridCoord::new(3, 3)), None);
    }

    #[test]
    fn test_out_of_bounds_is_unknown() {
        let mut grid = WeightGrid::new(4, 4, 1.0, WorldPoint::ZERO);
        grid.fill_free(GridCoord::new(0, 0), GridCoord::new(3, 3), 1.0);
        assert_eq!(grid.classify(GridCoord::new(-1, 0)), CellClass::Unknown);
        assert_eq!(grid.classify(GridCoord::new(4, 0)), CellClass::Unknown);
        assert!(!grid.set_free(GridCoord::new(0, 4), 1.0));
    }

    #[test]
    fn test_from_weights_convention() {
        let band = [1.0, f32::NAN, f32::INFINITY, -1.0, 0.0, 2.5];
        let grid = WeightGrid::from_weights(3, 2, 1.0, WorldPoint::ZERO, &band).unwrap();

        assert_eq!(grid.classify(GridCoord::new(0, 0)), CellClass::Free);
        assert_eq!(grid.classify(GridCoord::new(1, 0)), CellClass::Unknown);
        assert_eq!(grid.classify(GridCoord::new(2, 0)), CellClass::Obstacle);
        assert_eq!(grid.classify(GridCoord::new(0, 1)), CellClass::Unknown);
        assert_eq!(grid.weight(GridCoord::new(1, 1)), Some(MIN_WEIGHT));
        assert_eq!(grid.weight(GridCoord::new(2, 1)), Some(2.5));
        assert_eq!(grid.min_free_weight(), Some(MIN_WEIGHT));
    }

    #[test]
    fn test_from_weights_size_mismatch() {
        assert!(WeightGrid::from_weights(3, 3, 1.0, WorldPoint::ZERO, &[1.0; 8]).is_none());
    }

    #[test]
    fn test_coordinate_conversion() {
        let grid = WeightGrid::new(10, 10, 0.5, WorldPoint::new(-2.0, 1.0));
        let coord = grid.world_to_grid(WorldPoint::new(-1.9, 1.1));
        assert_eq!(coord, GridCoord::new(0, 0));

        let center = grid.grid_to_world(GridCoord::new(2, 3));
        assert!((center.x - (-0.75)).abs() < 1e-6);
        assert!((center.y - 2.75).abs() < 1e-6);
        assert_eq!(grid.world_to_grid(center), GridCoord::new(2, 3));
    }

    #[test]
    fn test_centered_bounds() {
        let grid = WeightGrid::centered(20, 10, 0.1);
        let (origin, width, height) = grid.extent();
        assert_eq!((width, height), (20, 10));
        assert_eq!(origin, grid.origin());

        let (min, max) = grid.bounds();
        assert!((min.x + 1.0).abs() < 1e-6);
        assert!((min.y + 0.5).abs() < 1e-6);
        assert!((max.x - 1.0).abs() < 1e-6);
        assert!((max.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_set_class_clears_weight() {
        let mut grid = WeightGrid::new(3, 3, 1.0, WorldPoint::ZERO);
        let c = GridCoord::new(1, 1);
        grid.set_free(c, 4.0);
        assert_eq!(grid.weight(c), Some(4.0));
        grid.set_obstacle(c);
        assert_eq!(grid.weight(c), None);
        assert_eq!(grid.classify(c), CellClass::Obstacle);
        grid.set_unknown(c);
        assert_eq!(grid.classify(c), CellClass::Unknown);
    }

    #[test]
    fn test_ascii_top_row_first() {
        let mut grid = WeightGrid::new(2, 2, 1.0, WorldPoint::ZERO);
        grid.set_free(GridCoord::new(0, 0), 1.0);
        grid.set_obstacle(GridCoord::new(1, 1));
        assert_eq!(grid.to_ascii(), "?#\n.?\n");
    }
}
