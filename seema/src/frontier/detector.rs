//! Frontier detector: one query runs Detection → Filtering → Attributes.

use log::debug;

use crate::core::WorldPoint;
use crate::error::{FrontierError, Result};
use crate::grid::{AreaOfInterest, TerrainMap, WeightGrid};
use crate::planning::{NavGraph, PathPlanner};

use super::attributes::compute_attributes;
use super::filter::filter_frontiers;
use super::types::{Algorithm, Frontier, FrontierAttributes, FrontierParams};
use super::wfd;

/// Frontier detector bound to a terrain, a planner and an area of interest.
///
/// The detector borrows both capabilities for `'a` and never outlives them.
/// Each [`compute_frontiers`](Self::compute_frontiers) call replaces the
/// previous results; `attributes()[i]` always describes `frontiers()[i]`.
///
/// # Example
///
/// ```rust
/// use seema::core::{GridCoord, WorldPoint};
/// use seema::frontier::{FrontierDetector, FrontierParams};
/// use seema::grid::{AreaOfInterest, WeightGrid};
/// use seema::planning::NavGraph;
///
/// let mut grid = WeightGrid::new(40, 40, 1.0, WorldPoint::ZERO);
/// grid.fill_free(GridCoord::new(10, 10), GridCoord::new(17, 17), 1.0);
/// let graph = NavGraph::with_defaults(grid);
///
/// let area = AreaOfInterest::covering(graph.map());
/// let mut detector = FrontierDetector::from_graph(&graph, area);
/// detector
///     .compute_frontiers(&[WorldPoint::new(13.5, 13.5)], 0.0, &FrontierParams::default())
///     .unwrap();
///
/// assert_eq!(detector.frontiers().len(), 1);
/// assert_eq!(detector.attributes().len(), 1);
/// ```
pub struct FrontierDetector<'a, M: TerrainMap + ?Sized, P: PathPlanner + ?Sized> {
    map: &'a M,
    planner: &'a P,
    area: AreaOfInterest,

    frontiers: Vec<Frontier>,
    attributes: Vec<FrontierAttributes>,
}

impl<'a> FrontierDetector<'a, WeightGrid, NavGraph> {
    /// Bind to a navigation graph; the graph's grid is the terrain.
    pub fn from_graph(graph: &'a NavGraph, area: AreaOfInterest) -> Self {
        Self::new(graph.map(), graph, area)
    }

    /// The navigation graph the detector plans with.
    pub fn graph(&self) -> &'a NavGraph {
        self.planner
    }
}

impl<'a, M: TerrainMap + ?Sized, P: PathPlanner + ?Sized> FrontierDetector<'a, M, P> {
    /// Bind to a terrain and a planner over the same frame.
    pub fn new(map: &'a M, planner: &'a P, area: AreaOfInterest) -> Self {
        Self {
            map,
            planner,
            area,
            frontiers: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Bind with an area covering the whole raster.
    pub fn covering(map: &'a M, planner: &'a P) -> Self {
        Self::new(map, planner, AreaOfInterest::covering(map))
    }

    /// Detect, filter and describe the frontiers seen from `positions[0]`.
    ///
    /// `positions[1..]` are teammates (used for proximity only); `yaw` is the
    /// querying robot's heading. Parameters are checked before anything is
    /// touched, so an invalid query leaves the previous results in place. Any
    /// later failure leaves both lists empty.
    pub fn compute_frontiers(
        &mut self,
        positions: &[WorldPoint],
        yaw: f32,
        params: &FrontierParams,
    ) -> Result<()> {
        let detect = match params.algorithm {
            Algorithm::Wfd => wfd::detect::<M>,
            Algorithm::Ffd => return Err(FrontierError::UnsupportedAlgorithm(Algorithm::Ffd)),
        };
        let Some(&robot) = positions.first() else {
            return Err(FrontierError::NoRobotPosition);
        };
        params.validate_bounds()?;

        self.frontiers.clear();
        self.attributes.clear();

        let detected = detect(self.map, &self.area, robot)?;
        let detected_count = detected.len();

        let resolution = self.map.resolution();
        let frontiers = filter_frontiers(detected, robot, resolution, params);
        let attributes = compute_attributes(&frontiers, self.planner, positions, yaw, resolution);

        debug!(
            "[FrontierDetector] robot=({:.2},{:.2}) team={} detected={} kept={}",
            robot.x,
            robot.y,
            positions.len() - 1,
            detected_count,
            frontiers.len()
        );

        self.frontiers = frontiers;
        self.attributes = attributes;
        Ok(())
    }

    /// [`compute_frontiers`](Self::compute_frontiers) with the parameters
    /// given one by one.
    #[allow(clippy::too_many_arguments)]
    pub fn compute_frontiers_with(
        &mut self,
        positions: &[WorldPoint],
        yaw: f32,
        algorithm: Algorithm,
        max_frontiers: usize,
        min_size: f32,
        max_size: f32,
        min_distance: f32,
        max_distance: f32,
    ) -> Result<()> {
        let params = FrontierParams {
            algorithm,
            max_frontiers,
            min_size,
            max_size,
            min_distance,
            max_distance,
        };
        self.compute_frontiers(positions, yaw, &params)
    }

    /// Frontiers of the last query, best first.
    pub fn frontiers(&self) -> &[Frontier] {
        &self.frontiers
    }

    /// Attributes of the last query, aligned with [`frontiers`](Self::frontiers).
    pub fn attributes(&self) -> &[FrontierAttributes] {
        &self.attributes
    }

    /// Frontier/attribute pairs of the last query.
    pub fn results(&self) -> impl Iterator<Item = (&Frontier, &FrontierAttributes)> {
        self.frontiers.iter().zip(&self.attributes)
    }

    /// Drop the results of the last query.
    pub fn clear(&mut self) {
        self.frontiers.clear();
        self.attributes.clear();
    }

    /// The terrain.
    pub fn map(&self) -> &'a M {
        self.map
    }

    /// The planner.
    pub fn planner(&self) -> &'a P {
        self.planner
    }

    /// The area of interest.
    pub fn area(&self) -> &AreaOfInterest {
        &self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    fn room_graph() -> NavGraph {
        // 30x30 unknown with a 10x10 explored room in the middle
        let mut grid = WeightGrid::new(30, 30, 1.0, WorldPoint::ZERO);
        grid.fill_free(GridCoord::new(10, 10), GridCoord::new(19, 19), 1.0);
        NavGraph::with_defaults(grid)
    }

    fn open_params() -> FrontierParams {
        FrontierParams {
            min_size: 0.0,
            max_size: 1000.0,
            min_distance: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_room_has_one_frontier() {
        let graph = room_graph();
        let area = AreaOfInterest::covering(graph.map());
        let mut detector = FrontierDetector::from_graph(&graph, area);
        detector
            .compute_frontiers(&[WorldPoint::new(15.5, 15.5)], 0.0, &open_params())
            .unwrap();

        assert_eq!(detector.frontiers().len(), 1);
        assert_eq!(detector.frontiers()[0].len(), 36);
        assert_eq!(detector.attributes().len(), 1);
        assert_eq!(detector.attributes()[0].id, 0);
        assert!(detector.attributes()[0].is_reachable());
        assert_eq!(detector.results().count(), 1);
        assert!(std::ptr::eq(detector.graph(), &graph));
        assert!(std::ptr::eq(detector.planner(), &graph));
        assert!(std::ptr::eq(detector.map(), graph.map()));
    }

    #[test]
    fn test_invalid_query_keeps_previous_results() {
        let graph = room_graph();
        let mut detector = FrontierDetector::covering(graph.map(), &graph);
        detector
            .compute_frontiers(&[WorldPoint::new(15.5, 15.5)], 0.0, &open_params())
            .unwrap();
        assert_eq!(detector.frontiers().len(), 1);

        let ffd = FrontierParams {
            algorithm: Algorithm::Ffd,
            ..open_params()
        };
        assert_eq!(
            detector.compute_frontiers(&[WorldPoint::new(15.5, 15.5)], 0.0, &ffd),
            Err(FrontierError::UnsupportedAlgorithm(Algorithm::Ffd))
        );
        assert_eq!(
            detector.compute_frontiers(&[], 0.0, &open_params()),
            Err(FrontierError::NoRobotPosition)
        );
        assert_eq!(detector.frontiers().len(), 1);
        assert_eq!(detector.attributes().len(), 1);
    }

    #[test]
    fn test_invalid_seed_clears_results() {
        let graph = room_graph();
        let mut detector = FrontierDetector::covering(graph.map(), &graph);
        detector
            .compute_frontiers(&[WorldPoint::new(15.5, 15.5)], 0.0, &open_params())
            .unwrap();

        let result =
            detector.compute_frontiers(&[WorldPoint::new(2.5, 2.5)], 0.0, &open_params());
        assert!(matches!(result, Err(FrontierError::InvalidSeed { .. })));
        assert!(detector.frontiers().is_empty());
        assert!(detector.attributes().is_empty());
    }

    #[test]
    fn test_scalar_parameters() {
        let graph = room_graph();
        let mut detector = FrontierDetector::covering(graph.map(), &graph);
        detector
            .compute_frontiers_with(
                &[WorldPoint::new(15.5, 15.5)],
                0.0,
                Algorithm::Wfd,
                50,
                40.0,
                60.0,
                0.0,
                50.0,
            )
            .unwrap();
        // 36 cells is below min_size 40
        assert!(detector.frontiers().is_empty());

        detector.clear();
        assert!(detector.attributes().is_empty());
    }
}
