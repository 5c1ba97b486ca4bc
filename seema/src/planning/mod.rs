//! Shortest-path planning.
//!
//! - [`PathPlanner`]: the capability the detector queries
//! - [`NavGraph`]: weighted A* over a [`WeightGrid`](crate::grid::WeightGrid)

mod nav_graph;
mod traits;

pub use nav_graph::{NavGraph, NavGraphConfig};
pub use traits::{PathPlanner, PlanError, PlannedPath};
