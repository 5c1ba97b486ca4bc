//! Unified configuration loading for Seema.
//!
//! Loads all configuration from a single YAML file. Every field is
//! optional; missing fields take the defaults below.
//!
//! ```yaml
//! frontier:
//!   algorithm: WFD
//!   max_frontiers: 50
//!   min_size: 2.0        # meters
//!   max_size: 30.0
//!   min_distance: 1.6    # meters from the robot
//!   max_distance: 50.0
//! area:                  # optional, whole raster when absent
//!   x0: 0.0
//!   y0: 0.0
//!   width: 100.0
//!   height: 100.0
//! nav_graph:
//!   allow_diagonal: true
//!   max_iterations: 100000
//! ```

mod defaults;
mod error;
mod frontier;
mod nav_graph;
mod seema;

pub use error::ConfigLoadError;
pub use seema::SeemaConfig;

pub use frontier::FrontierSection;
pub use nav_graph::NavGraphSection;
