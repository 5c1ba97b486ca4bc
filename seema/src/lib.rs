//! # Seema
//!
//! Frontier detection and ranking for multi-robot exploration on a partially
//! known 2D terrain.
//!
//! ## Overview
//!
//! A frontier is a connected run of known free cells that touch unexplored
//! space. For a robot (or a team) Seema finds the frontiers reachable from
//! the robot, keeps the useful ones and describes each with the attributes
//! a goal allocator ranks on:
//!
//! - **size**: frontier length in meters
//! - **lookout**: the frontier point the robot should head for
//! - **distance** and **yaw_diff**: straight-line offset and heading change
//! - **path** and **cost**: planned route to the lookout
//! - **proximity**: teammates that would get there more cheaply
//! - **ratio**: size/cost gain normalized over the batch
//!
//! ## Quick Start
//!
//! ```rust
//! use seema::{FrontierDetector, FrontierParams, GridCoord, NavGraph, WeightGrid, WorldPoint};
//! use seema::grid::AreaOfInterest;
//!
//! // 0.5 m cells, a 10 x 10 m explored room in unknown terrain
//! let mut grid = WeightGrid::new(100, 100, 0.5, WorldPoint::ZERO);
//! grid.fill_free(GridCoord::new(40, 40), GridCoord::new(59, 59), 1.0);
//! grid.fill_obstacle(GridCoord::new(40, 40), GridCoord::new(59, 40));
//!
//! let graph = NavGraph::with_defaults(grid);
//! let area = AreaOfInterest::covering(graph.map());
//! let mut detector = FrontierDetector::from_graph(&graph, area);
//!
//! let robot = WorldPoint::new(25.0, 25.0);
//! let teammate = WorldPoint::new(28.0, 29.0);
//! let params = FrontierParams { max_size: 100.0, ..Default::default() };
//! detector.compute_frontiers(&[robot, teammate], 0.0, &params).unwrap();
//!
//! for attrs in detector.attributes() {
//!     println!("{attrs}");
//! }
//! ```
//!
//! ## Coordinate System
//!
//! All positions are in the terrain frame, in meters. Cell (x, y) covers
//! `origin + [x, x + 1) × [y, y + 1) · resolution`; its world point is the
//! cell centre. Headings are radians, CCW positive from +X.
//!
//! ## Features
//!
//! - `parallel`: describe frontiers on the rayon thread pool

#![warn(missing_docs)]

// Points, cell classes, angles
pub mod core;

// Terrain raster and area of interest
pub mod grid;

// Shortest-path planning
pub mod planning;

// Detection, filtering and attributes
pub mod frontier;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{CellClass, GridCoord, PointSequence, WorldPoint};

pub use grid::{AreaOfInterest, TerrainMap, WeightGrid};

pub use planning::{NavGraph, NavGraphConfig, PathPlanner, PlanError, PlannedPath};

pub use frontier::{Algorithm, Frontier, FrontierAttributes, FrontierDetector, FrontierParams};

pub use config::{ConfigLoadError, SeemaConfig};

pub use error::{FrontierError, Result};
