//! Frontier filtering: size and distance bounds, then a count cap.

use std::cmp::Ordering;

use log::debug;

use crate::core::WorldPoint;

use super::types::{Frontier, FrontierParams};

/// Keep the frontiers that satisfy the bounds in `params`, best first.
///
/// A frontier survives when `min_size <= size <= max_size` (size is cell count
/// × `resolution`) and the distance from `robot` to its nearest point lies in
/// `[min_distance, max_distance]`. Survivors are ordered by size descending,
/// then distance ascending, then detection order, and at most
/// `max_frontiers` are kept.
pub fn filter_frontiers(
    frontiers: Vec<Frontier>,
    robot: WorldPoint,
    resolution: f32,
    params: &FrontierParams,
) -> Vec<Frontier> {
    let detected = frontiers.len();

    let mut candidates: Vec<(usize, f32, f32, Frontier)> = frontiers
        .into_iter()
        .enumerate()
        .filter_map(|(index, frontier)| {
            let size = frontier.size(resolution);
            let (_, distance) = frontier.nearest_point(robot)?;
            let keep = size >= params.min_size
                && size <= params.max_size
                && distance >= params.min_distance
                && distance <= params.max_distance;
            keep.then_some((index, size, distance, frontier))
        })
        .collect();

    let in_bounds = candidates.len();

    candidates.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal))
            .then(a.0.cmp(&b.0))
    });
    candidates.truncate(params.max_frontiers);

    debug!(
        "[Filter] detected={} in_bounds={} kept={} (cap {})",
        detected,
        in_bounds,
        candidates.len(),
        params.max_frontiers
    );

    candidates.into_iter().map(|(_, _, _, f)| f).collect()
}
