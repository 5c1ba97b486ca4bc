//! Planner capability consumed by the frontier detector.

use thiserror::Error;

use crate::core::{PointSequence, WorldPoint};

/// A route between two world points.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedPath {
    /// Waypoints in traversal order, start first
    pub waypoints: PointSequence,
    /// Scalar cost reported by the planner (weighted length)
    pub cost: f32,
}

impl PlannedPath {
    /// Geometric length of the polyline in meters.
    pub fn length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

/// Why a shortest-path query produced no route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Start or goal lies outside the planner's map
    #[error("start or goal outside the map")]
    OutOfBounds,

    /// Start cell is not traversable
    #[error("start position is not traversable")]
    StartBlocked,

    /// Goal cell is not traversable
    #[error("goal position is not traversable")]
    GoalBlocked,

    /// Start and goal are in disconnected parts of the graph
    #[error("no path between start and goal")]
    NoPath,

    /// The search gave up after expanding too many nodes
    #[error("search exhausted after {0} expansions")]
    SearchExhausted(usize),
}

/// Shortest-path oracle over a navigable graph.
///
/// Implementations are queried concurrently when the `parallel` feature is
/// enabled, hence the `Sync` bound. A query never blocks: an unreachable goal
/// is reported as an error.
pub trait PathPlanner: Sync {
    /// Shortest route from `from` to `to` and its cost.
    fn shortest_path(&self, from: WorldPoint, to: WorldPoint) -> Result<PlannedPath, PlanError>;

    /// Cost of the shortest route, without keeping the path.
    fn path_cost(&self, from: WorldPoint, to: WorldPoint) -> Result<f32, PlanError> {
        self.shortest_path(from, to).map(|p| p.cost)
    }
}
