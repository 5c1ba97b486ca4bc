//! Core types shared by every stage of the pipeline.
//!
//! - [`GridCoord`] and [`WorldPoint`]: coordinate types
//! - [`CellClass`]: free / obstacle / unknown classification
//! - [`math`]: angle normalization

mod cell;
pub mod math;
mod point;

pub use cell::CellClass;
pub use math::{angle_diff, normalize_angle};
pub use point::{GridCoord, PointSequence, WorldPoint};
