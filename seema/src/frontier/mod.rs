//! Frontier detection and ranking.
//!
//! A query runs three stages, each a pure function over the previous
//! stage's output:
//!
//! ```text
//!  TerrainMap ──► wfd::detect ──► filter_frontiers ──► compute_attributes
//!   + seed        (all frontiers   (bounds + cap,        (lookout, path,
//!                  reachable from   best first)           proximity, ratio)
//!                  the seed)                                   ▲
//!                                                          PathPlanner
//! ```
//!
//! [`FrontierDetector`] binds a terrain, a planner and an area of interest
//! and keeps the results of the last query.

mod attributes;
mod detector;
mod filter;
mod types;
pub mod wfd;

pub use attributes::{GAIN_EPSILON, compute_attributes};
pub use detector::FrontierDetector;
pub use filter::filter_frontiers;
pub use types::{Algorithm, Frontier, FrontierAttributes, FrontierParams};
