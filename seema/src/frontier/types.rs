//! Frontier data model: detected frontiers, their attributes, query parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, PointSequence, WorldPoint};
use crate::error::{FrontierError, Result};

/// Frontier detection algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Wavefront Frontier Detection (BFS over known free space)
    #[default]
    #[serde(rename = "WFD", alias = "wfd")]
    Wfd,

    /// Fast Frontier Detection. Selectable, not implemented.
    #[serde(rename = "FFD", alias = "ffd")]
    Ffd,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Wfd => write!(f, "WFD"),
            Algorithm::Ffd => write!(f, "FFD"),
        }
    }
}

/// One connected group of frontier cells.
///
/// `cells[i]` and `points[i]` describe the same cell; `points` holds the cell
/// centres in the terrain frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frontier {
    /// Member cells, in flood-fill discovery order
    pub cells: Vec<GridCoord>,
    /// Cell centres (meters)
    pub points: PointSequence,
}

impl Frontier {
    /// Number of member cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the frontier has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Size in meters: cell count × resolution.
    #[inline]
    pub fn size(&self, resolution: f32) -> f32 {
        self.cells.len() as f32 * resolution
    }

    /// Point nearest to `from` and its distance.
    ///
    /// Ties go to the earliest point. `None` for an empty frontier.
    pub fn nearest_point(&self, from: WorldPoint) -> Option<(WorldPoint, f32)> {
        let mut best: Option<(WorldPoint, f32)> = None;
        for &p in &self.points {
            let d = p.distance_squared(&from);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((p, d));
            }
        }
        best.map(|(p, d)| (p, d.sqrt()))
    }

    /// Mean of the member points.
    pub fn centroid(&self) -> Option<WorldPoint> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(WorldPoint::new(sx / n, sy / n))
    }
}

/// Ranking attributes of one frontier.
///
/// `FrontierAttributes` at index `i` of a detector's output always describes
/// the frontier at index `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierAttributes {
    /// Index of the frontier in the filtered list
    pub id: usize,
    /// Frontier size in meters
    pub size: f32,
    /// Normalized gain in (0, 1]; `None` when the lookout is unreachable
    pub ratio: Option<f32>,
    /// Frontier point the robot should head for
    pub lookout: WorldPoint,
    /// Euclidean distance from the robot to the lookout
    pub distance: f32,
    /// Heading change to face the lookout, in (-π, π]
    pub yaw_diff: f32,
    /// Planned route to the lookout; empty when unreachable
    pub path: PointSequence,
    /// Planner cost of `path`; `None` when unreachable
    pub cost: Option<f32>,
    /// Teammates strictly closer (by path cost) to the lookout
    pub proximity: usize,
}

impl FrontierAttributes {
    /// Can the robot reach the lookout?
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// Path cost, `+∞` when unreachable.
    #[inline]
    pub fn cost_or_infinity(&self) -> f32 {
        self.cost.unwrap_or(f32::INFINITY)
    }

    /// Ratio, `-1.0` when not computable.
    #[inline]
    pub fn ratio_or_sentinel(&self) -> f32 {
        self.ratio.unwrap_or(-1.0)
    }
}

impl fmt::Display for FrontierAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ #{}: size = {:.2}; ratio = ",
            self.id, self.size
        )?;
        match self.ratio {
            Some(r) => write!(f, "{r:.3}")?,
            None => write!(f, "n/a")?,
        }
        write!(
            f,
            "; lookout = {}; distance = {:.2}; yaw difference = {:.3}; path size = {}; cost = ",
            self.lookout,
            self.distance,
            self.yaw_diff,
            self.path.len()
        )?;
        match self.cost {
            Some(c) => write!(f, "{c:.2}")?,
            None => write!(f, "unreachable")?,
        }
        write!(f, "; proximity = {} }}", self.proximity)
    }
}

/// Per-query detection parameters.
///
/// Robot positions and yaw are passed to the query separately.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierParams {
    /// Detection algorithm
    pub algorithm: Algorithm,
    /// Maximum number of frontiers kept after filtering
    pub max_frontiers: usize,
    /// Smallest frontier kept (meters)
    pub min_size: f32,
    /// Largest frontier kept (meters)
    pub max_size: f32,
    /// Closest frontier kept (meters from the robot)
    pub min_distance: f32,
    /// Farthest frontier kept (meters from the robot)
    pub max_distance: f32,
}

impl Default for FrontierParams {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Wfd,
            max_frontiers: 50,
            min_size: 2.0,
            max_size: 30.0,
            min_distance: 1.6,
            max_distance: 50.0,
        }
    }
}

impl FrontierParams {
    /// Check the parameters before a query touches any state.
    pub fn validate(&self) -> Result<()> {
        if self.algorithm != Algorithm::Wfd {
            return Err(FrontierError::UnsupportedAlgorithm(self.algorithm));
        }
        self.validate_bounds()
    }

    /// Size and distance bounds only.
    pub(crate) fn validate_bounds(&self) -> Result<()> {
        let bounds = [
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
        ];
        for (name, value) in bounds {
            if value.is_nan() || value < 0.0 {
                return Err(FrontierError::InvalidParameters(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.min_size > self.max_size {
            return Err(FrontierError::InvalidParameters(format!(
                "min_size {} exceeds max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(FrontierError::InvalidParameters(format!(
                "min_distance {} exceeds max_distance {}",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}
