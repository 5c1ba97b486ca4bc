//! Test utilities for Seema.
//!
//! Terrain builders for the frontier scenarios and the invariant checks
//! shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use seema::frontier::wfd::is_frontier_cell;
use seema::{
    CellClass, Frontier, FrontierAttributes, FrontierParams, GridCoord, PathPlanner, TerrainMap,
    WeightGrid, WorldPoint,
};

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    env_logger::try_init().ok();
}

/// Parameters that keep every frontier.
pub fn permissive_params() -> FrontierParams {
    FrontierParams {
        max_frontiers: 1000,
        min_size: 0.0,
        max_size: f32::MAX,
        min_distance: 0.0,
        max_distance: f32::MAX,
        ..Default::default()
    }
}

/// Centre of a cell on a unit-resolution grid anchored at the origin.
pub fn center(x: i32, y: i32) -> WorldPoint {
    WorldPoint::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// All-unknown unit grid.
pub fn unknown_grid(width: usize, height: usize) -> WeightGrid {
    WeightGrid::new(width, height, 1.0, WorldPoint::ZERO)
}

/// Corridor walled along y = 5 and y = 9, free for y in 6..=8 and x in
/// 3..=26, open to unknown space at both ends. A free island at
/// (10..=12, 12..=13) sits behind the upper wall and cannot be reached.
pub fn corridor_with_island() -> WeightGrid {
    let mut grid = unknown_grid(30, 15);
    grid.fill_obstacle(GridCoord::new(3, 5), GridCoord::new(26, 5));
    grid.fill_obstacle(GridCoord::new(3, 9), GridCoord::new(26, 9));
    grid.fill_free(GridCoord::new(3, 6), GridCoord::new(26, 8), 1.0);
    grid.fill_free(GridCoord::new(10, 12), GridCoord::new(12, 13), 1.0);
    grid
}

/// Same corridor with the right end narrowed to a single cell at (26, 7).
pub fn corridor_with_narrow_end() -> WeightGrid {
    let mut grid = corridor_with_island();
    grid.set_obstacle(GridCoord::new(26, 6));
    grid.set_obstacle(GridCoord::new(26, 8));
    grid
}

/// Two walled rooms joined only by a diagonal chain of free cells.
///
/// Room A covers (1..=8, 1..=8) and is fully enclosed. Room B covers
/// (10..=17, 10..=17) and is open to unknown space along x = 18. The chain
/// (8,8) → (9,9) → (10,10) is passable with diagonal moves only.
pub fn rooms_with_diagonal_link() -> WeightGrid {
    let mut grid = unknown_grid(20, 20);
    grid.fill_obstacle(GridCoord::new(0, 0), GridCoord::new(19, 19));
    grid.fill_free(GridCoord::new(1, 1), GridCoord::new(8, 8), 1.0);
    grid.set_free(GridCoord::new(9, 9), 1.0);
    grid.fill_free(GridCoord::new(10, 10), GridCoord::new(17, 17), 1.0);
    for y in 10..=17 {
        grid.set_unknown(GridCoord::new(18, y));
    }
    grid
}

/// Walled room (5..=34, 5..=14) whose top wall (y = 15) has six openings
/// onto unknown space, of widths 2, 3, 4, 2, 3, 4 from left to right.
pub fn room_with_openings() -> WeightGrid {
    let mut grid = unknown_grid(40, 25);
    grid.fill_obstacle(GridCoord::new(4, 4), GridCoord::new(35, 15));
    grid.fill_free(GridCoord::new(5, 5), GridCoord::new(34, 14), 1.0);
    for (x0, x1) in opening_spans() {
        grid.fill_free(GridCoord::new(x0, 15), GridCoord::new(x1, 15), 1.0);
    }
    grid
}

/// Inclusive x spans of the openings in [`room_with_openings`].
pub fn opening_spans() -> [(i32, i32); 6] {
    [(6, 7), (10, 12), (15, 18), (21, 22), (25, 27), (30, 33)]
}

/// Deterministic cluttered terrain: free space with scattered obstacles and
/// unknown patches. `seed` selects the layout.
pub fn cluttered_terrain(width: usize, height: usize, resolution: f32, seed: u64) -> WeightGrid {
    let mut grid = WeightGrid::new(width, height, resolution, WorldPoint::ZERO);
    let mut rng = Lcg(seed);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let coord = GridCoord::new(x, y);
            match rng.next() % 10 {
                0 => {
                    grid.set_obstacle(coord);
                }
                1 => {
                    grid.set_unknown(coord);
                }
                r => {
                    grid.set_free(coord, 1.0 + r as f32 * 0.25);
                }
            }
        }
    }
    grid
}

/// Minimal linear congruential generator for reproducible layouts.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Every frontier cell is free with an unknown 8-neighbour.
pub fn assert_frontier_validity<M: TerrainMap>(map: &M, frontiers: &[Frontier]) {
    for (i, f) in frontiers.iter().enumerate() {
        assert!(!f.is_empty(), "frontier #{i} is empty");
        assert_eq!(f.cells.len(), f.points.len());
        for (c, p) in f.cells.iter().zip(&f.points) {
            assert_eq!(map.classify(*c), CellClass::Free);
            assert!(is_frontier_cell(map, *c), "frontier #{i} cell {c:?}");
            assert_eq!(map.world_to_grid(*p), *c);
        }
    }
}

/// Every frontier is one 8-connected component, and frontiers are disjoint.
pub fn assert_frontier_connectivity(frontiers: &[Frontier]) {
    let mut seen = HashSet::new();
    for (i, f) in frontiers.iter().enumerate() {
        let members: HashSet<GridCoord> = f.cells.iter().copied().collect();
        assert_eq!(members.len(), f.len(), "frontier #{i} repeats a cell");

        let mut reached = HashSet::from([f.cells[0]]);
        let mut queue = VecDeque::from([f.cells[0]]);
        while let Some(c) = queue.pop_front() {
            for n in c.neighbors_8() {
                if members.contains(&n) && reached.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        assert_eq!(reached.len(), members.len(), "frontier #{i} is split");

        for c in &f.cells {
            assert!(seen.insert(*c), "cell {c:?} in two frontiers");
        }
    }
}

/// Attribute records line up with frontiers and satisfy their invariants.
///
/// `positions[0]` is the querying robot; cost and proximity are recomputed
/// with `planner`.
pub fn assert_attribute_invariants<P: PathPlanner>(
    frontiers: &[Frontier],
    attributes: &[FrontierAttributes],
    planner: &P,
    positions: &[WorldPoint],
    resolution: f32,
    params: &FrontierParams,
) {
    let (&robot, team) = positions.split_first().expect("robot position");
    assert_eq!(frontiers.len(), attributes.len());
    assert!(frontiers.len() <= params.max_frontiers);

    for (i, (f, a)) in frontiers.iter().zip(attributes).enumerate() {
        assert_eq!(a.id, i);
        assert!((a.size - f.len() as f32 * resolution).abs() < 1e-4);
        assert!(a.size >= params.min_size && a.size <= params.max_size);
        assert!(a.distance >= params.min_distance && a.distance <= params.max_distance);
        assert!(f.points.contains(&a.lookout));
        assert!((a.distance - robot.distance(&a.lookout)).abs() < 1e-4);
        assert!(a.yaw_diff > -std::f32::consts::PI - 1e-6);
        assert!(a.yaw_diff <= std::f32::consts::PI + 1e-6);

        let robot_cost = planner.path_cost(robot, a.lookout).ok();
        assert_eq!(a.cost, robot_cost, "frontier #{i} cost");
        let cheaper = team
            .iter()
            .filter(|mate| {
                planner
                    .path_cost(**mate, a.lookout)
                    .is_ok_and(|c| c < robot_cost.unwrap_or(f32::INFINITY))
            })
            .count();
        assert_eq!(a.proximity, cheaper, "frontier #{i} proximity");

        match a.cost {
            Some(cost) => {
                assert!(cost >= 0.0);
                assert!(!a.path.is_empty());
                let ratio = a.ratio.expect("reachable frontier has a ratio");
                assert!(ratio > 0.0 && ratio <= 1.0 + 1e-6);
            }
            None => {
                assert!(a.path.is_empty());
                assert!(a.ratio.is_none());
            }
        }
    }

    if attributes.iter().any(|a| a.cost.is_some()) {
        let best = attributes
            .iter()
            .filter_map(|a| a.ratio)
            .fold(0.0f32, f32::max);
        assert!((best - 1.0).abs() < 1e-5);
    }
}
