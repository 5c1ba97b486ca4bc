//! Frontier attributes: lookout, heading change, path, team proximity, ratio.
//!
//! Every frontier is described independently; only the ratio normalization
//! looks across the whole batch. With the `parallel` feature the per-frontier
//! work runs on the rayon pool, output order unchanged.

use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{WorldPoint, angle_diff};
use crate::planning::PathPlanner;

use super::types::{Frontier, FrontierAttributes};

/// Floor on path cost when computing gain, so a lookout under the robot
/// does not divide by zero.
pub const GAIN_EPSILON: f32 = 1e-3;

/// Describe each frontier as seen from `positions[0]`.
///
/// `positions[1..]` are teammates, used only for proximity. `attributes[i]`
/// describes `frontiers[i]` and carries `id == i`. Returns an empty list when
/// `positions` is empty.
pub fn compute_attributes<P: PathPlanner + ?Sized>(
    frontiers: &[Frontier],
    planner: &P,
    positions: &[WorldPoint],
    yaw: f32,
    resolution: f32,
) -> Vec<FrontierAttributes> {
    let Some((&robot, team)) = positions.split_first() else {
        return Vec::new();
    };

    let describe = |(id, frontier): (usize, &Frontier)| {
        describe_frontier(id, frontier, planner, robot, team, yaw, resolution)
    };

    #[cfg(feature = "parallel")]
    let mut attributes: Vec<FrontierAttributes> =
        frontiers.par_iter().enumerate().map(describe).collect();

    #[cfg(not(feature = "parallel"))]
    let mut attributes: Vec<FrontierAttributes> =
        frontiers.iter().enumerate().map(describe).collect();

    normalize_ratios(&mut attributes);

    debug!(
        "[Attributes] {} frontiers, {} reachable",
        attributes.len(),
        attributes.iter().filter(|a| a.is_reachable()).count()
    );
    attributes
}

fn describe_frontier<P: PathPlanner + ?Sized>(
    id: usize,
    frontier: &Frontier,
    planner: &P,
    robot: WorldPoint,
    team: &[WorldPoint],
    yaw: f32,
    resolution: f32,
) -> FrontierAttributes {
    let (lookout, distance) = frontier.nearest_point(robot).unwrap_or((robot, 0.0));
    let yaw_diff = angle_diff(yaw, robot.angle_to(&lookout));

    let (path, cost) = match planner.shortest_path(robot, lookout) {
        Ok(planned) => (planned.waypoints, Some(planned.cost)),
        Err(e) => {
            debug!(
                "[Attributes] frontier #{} lookout {} unreachable: {}",
                id, lookout, e
            );
            (Vec::new(), None)
        }
    };

    let robot_cost = cost.unwrap_or(f32::INFINITY);
    let proximity = team
        .iter()
        .filter(|mate| mate.is_finite())
        .filter(|mate| {
            planner
                .path_cost(**mate, lookout)
                .is_ok_and(|c| c < robot_cost)
        })
        .count();

    trace!(
        "[Attributes] #{} lookout={} distance={:.2} cost={:?} proximity={}",
        id, lookout, distance, cost, proximity
    );

    FrontierAttributes {
        id,
        size: frontier.size(resolution),
        ratio: None,
        lookout,
        distance,
        yaw_diff,
        path,
        cost,
        proximity,
    }
}

/// Set `ratio = gain / max_gain` with `gain = size / max(cost, ε)` over the
/// reachable frontiers; unreachable ones keep `None`.
fn normalize_ratios(attributes: &mut [FrontierAttributes]) {
    let gain = |a: &FrontierAttributes| a.cost.map(|c| a.size / c.max(GAIN_EPSILON));

    let max_gain = attributes
        .iter()
        .filter_map(gain)
        .fold(0.0f32, f32::max);
    if max_gain <= 0.0 {
        return;
    }

    for a in attributes.iter_mut() {
        a.ratio = gain(a).map(|g| g / max_gain);
    }
}
