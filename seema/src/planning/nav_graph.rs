//! Navigation graph over a weight grid.
//!
//! Vertices are the free cells of the owned [`WeightGrid`]; edges join
//! neighbouring free cells. Shortest paths come from an A* search:
//! - Edge cost: Euclidean length in meters × mean weight of the two cells
//! - Heuristic: Euclidean length × smallest free weight (admissible)
//! - 8-connected movement, or 4-connected when diagonals are disabled

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::{MIN_WEIGHT, TerrainMap, WeightGrid};

use super::traits::{PathPlanner, PlanError, PlannedPath};

/// A node in the A* open set
#[derive(Clone, Debug)]
struct AStarNode {
    coord: GridCoord,
    g_cost: f32, // Cost from start
    f_cost: f32, // g_cost + heuristic
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search configuration
#[derive(Clone, Debug, PartialEq)]
pub struct NavGraphConfig {
    /// Allow diagonal movement (8-connected vs 4-connected)
    pub allow_diagonal: bool,
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for NavGraphConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            max_iterations: 100_000,
        }
    }
}

/// Weighted grid graph answering shortest-path queries.
#[derive(Clone, Debug)]
pub struct NavGraph {
    map: WeightGrid,
    config: NavGraphConfig,
    /// Smallest free weight, scales the heuristic
    min_weight: f32,
}

impl NavGraph {
    /// Build a graph over `map`.
    pub fn new(map: WeightGrid, config: NavGraphConfig) -> Self {
        let min_weight = map.min_free_weight().unwrap_or(MIN_WEIGHT);
        Self {
            map,
            config,
            min_weight,
        }
    }

    /// Build a graph with the default search configuration.
    pub fn with_defaults(map: WeightGrid) -> Self {
        Self::new(map, NavGraphConfig::default())
    }

    /// The terrain the graph was built from.
    pub fn map(&self) -> &WeightGrid {
        &self.map
    }

    /// Search configuration.
    pub fn config(&self) -> &NavGraphConfig {
        &self.config
    }

    /// Number of vertices (free cells).
    pub fn vertex_count(&self) -> usize {
        self.map.count_by_class().free
    }

    /// Centre of the free cell nearest to `point`.
    ///
    /// Searches square rings of growing radius around the containing cell, up
    /// to `max_radius` cells. Within a ring the Euclidean-nearest centre wins.
    pub fn closest_vertex(&self, point: WorldPoint, max_radius: usize) -> Option<WorldPoint> {
        let center = self.map.world_to_grid(point);
        let max_radius = max_radius as i32;

        let mut best: Option<(f32, WorldPoint)> = None;
        for r in 0..=max_radius {
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx.abs() != r && dy.abs() != r {
                        continue;
                    }
                    let coord = GridCoord::new(center.x + dx, center.y + dy);
                    if !self.map.classify(coord).is_free() {
                        continue;
                    }
                    let candidate = self.map.grid_to_world(coord);
                    let d = candidate.distance_squared(&point);
                    if best.is_none_or(|(bd, _)| d < bd) {
                        best = Some((d, candidate));
                    }
                }
            }
            // No centre in ring r + 1 is closer than (r + 0.5) cells.
            if let Some((d, _)) = best {
                let reach = (r as f32 + 0.5) * self.map.resolution();
                if d <= reach * reach {
                    break;
                }
            }
        }
        best.map(|(_, p)| p)
    }

    /// Find a path between two cells.
    ///
    /// Returns the cell sequence (start first) and its cost.
    pub fn find_path(
        &self,
        start: GridCoord,
        goal: GridCoord,
    ) -> Result<(Vec<GridCoord>, f32), PlanError> {
        trace!(
            "[NavGraph] find_path: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        if !self.map.is_valid_coord(start) || !self.map.is_valid_coord(goal) {
            debug!("[NavGraph] FAILED: OutOfBounds - start or goal outside grid");
            return Err(PlanError::OutOfBounds);
        }
        if !self.map.classify(start).is_free() {
            debug!("[NavGraph] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return Err(PlanError::StartBlocked);
        }
        if !self.map.classify(goal).is_free() {
            debug!("[NavGraph] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return Err(PlanError::GoalBlocked);
        }

        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, f32> = HashMap::new();

        open_set.push(AStarNode {
            coord: start,
            g_cost: 0.0,
            f_cost: self.heuristic(start, goal),
        });
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            if current.coord == goal {
                let path = Self::reconstruct_path(&came_from, goal);
                trace!(
                    "[NavGraph] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
                    path.len(),
                    current.g_cost,
                    nodes_expanded
                );
                return Ok((path, current.g_cost));
            }

            if !closed_set.insert(current.coord) {
                continue;
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[NavGraph] FAILED: SearchExhausted ({} nodes)",
                    nodes_expanded
                );
                return Err(PlanError::SearchExhausted(nodes_expanded));
            }

            let Some(current_weight) = self.map.weight(current.coord) else {
                continue;
            };

            let neighbors = current.coord.neighbors_8();
            let count = if self.config.allow_diagonal { 8 } else { 4 };

            for (i, neighbor) in neighbors.iter().take(count).enumerate() {
                if closed_set.contains(neighbor) {
                    continue;
                }
                let Some(neighbor_weight) = self.map.weight(*neighbor) else {
                    continue;
                };

                let step = if i >= 4 {
                    std::f32::consts::SQRT_2
                } else {
                    1.0
                };
                let edge_cost =
                    step * self.map.resolution() * 0.5 * (current_weight + neighbor_weight);
                let tentative_g = current.g_cost + edge_cost;

                let known_g = g_scores.get(neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g < known_g {
                    came_from.insert(*neighbor, current.coord);
                    g_scores.insert(*neighbor, tentative_g);
                    open_set.push(AStarNode {
                        coord: *neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + self.heuristic(*neighbor, goal),
                    });
                }
            }
        }

        debug!(
            "[NavGraph] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Err(PlanError::NoPath)
    }

    fn heuristic(&self, from: GridCoord, to: GridCoord) -> f32 {
        let dx = (from.x - to.x) as f32;
        let dy = (from.y - to.y) as f32;
        (dx * dx + dy * dy).sqrt() * self.map.resolution() * self.min_weight
    }

    fn reconstruct_path(
        came_from: &HashMap<GridCoord, GridCoord>,
        goal: GridCoord,
    ) -> Vec<GridCoord> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&prev) = came_from.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl PathPlanner for NavGraph {
    fn shortest_path(&self, from: WorldPoint, to: WorldPoint) -> Result<PlannedPath, PlanError> {
        if !from.is_finite() || !to.is_finite() {
            return Err(PlanError::OutOfBounds);
        }
        let start = self.map.world_to_grid(from);
        let goal = self.map.world_to_grid(to);
        let (cells, cost) = self.find_path(start, goal)?;
        Ok(PlannedPath {
            waypoints: cells.iter().map(|c| self.map.grid_to_world(*c)).collect(),
            cost,
        })
    }
}
