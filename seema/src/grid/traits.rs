//! Terrain capability consumed by the frontier detector.

use crate::core::{CellClass, GridCoord, WorldPoint};

/// Read-only view of a classified, weighted terrain raster.
///
/// Cell (x, y) covers the square from `origin + (x, y) * resolution` to
/// `origin + (x + 1, y + 1) * resolution`. Implementations must answer
/// [`CellClass::Unknown`] for coordinates outside the raster.
///
/// The trait requires `Sync`: a map is shared read-only between detectors
/// (and, with the `parallel` feature, between worker threads).
pub trait TerrainMap: Sync {
    /// Classification of a cell.
    fn classify(&self, coord: GridCoord) -> CellClass;

    /// Traversal weight of a free cell; `None` for any other class.
    fn weight(&self, coord: GridCoord) -> Option<f32>;

    /// Raster width in cells.
    fn width(&self) -> usize;

    /// Raster height in cells.
    fn height(&self) -> usize;

    /// Meters per cell.
    fn resolution(&self) -> f32;

    /// World position of the corner of cell (0, 0).
    fn origin(&self) -> WorldPoint;

    /// `(origin, width, height)` of the raster.
    fn extent(&self) -> (WorldPoint, usize, usize) {
        (self.origin(), self.width(), self.height())
    }

    /// World bounds: (min_point, max_point)
    fn bounds(&self) -> (WorldPoint, WorldPoint) {
        let origin = self.origin();
        let resolution = self.resolution();
        let max = WorldPoint::new(
            origin.x + self.width() as f32 * resolution,
            origin.y + self.height() as f32 * resolution,
        );
        (origin, max)
    }

    /// Convert world coordinates to the containing cell.
    #[inline]
    fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let origin = self.origin();
        let resolution = self.resolution();
        let x = ((point.x - origin.x) / resolution).floor() as i32;
        let y = ((point.y - origin.y) / resolution).floor() as i32;
        GridCoord::new(x, y)
    }

    /// Convert a cell to the world position of its centre.
    #[inline]
    fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        let origin = self.origin();
        let resolution = self.resolution();
        WorldPoint::new(
            origin.x + (coord.x as f32 + 0.5) * resolution,
            origin.y + (coord.y as f32 + 0.5) * resolution,
        )
    }

    /// Is the coordinate inside the raster?
    #[inline]
    fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width()
            && (coord.y as usize) < self.height()
    }
}
