//! Wavefront Frontier Detection.
//!
//! Breadth-first flood fill over known free space starting at the robot.
//! Every free cell reached that touches unknown space is a frontier cell;
//! frontier cells are then grouped into 8-connected frontiers.
//!
//! ```text
//!   ? ? ? ? ?        ? = unknown
//!   ? F F F ?        F = frontier cell (free, touches unknown)
//!   ? F . F ?        . = interior free cell
//!   ? F F F ?
//!   ? ? ? ? ?
//! ```

use std::collections::VecDeque;

use log::{debug, warn};

use crate::core::{CellClass, GridCoord, WorldPoint};
use crate::error::{FrontierError, Result};
use crate::grid::{AreaOfInterest, GridBounds, TerrainMap};

use super::types::Frontier;

/// Is `coord` a frontier cell: known free with at least one unknown
/// 8-neighbour?
///
/// Neighbours outside the raster count as unknown.
#[inline]
pub fn is_frontier_cell<M: TerrainMap + ?Sized>(map: &M, coord: GridCoord) -> bool {
    map.classify(coord).is_free()
        && coord
            .neighbors_8()
            .iter()
            .any(|n| map.classify(*n) == CellClass::Unknown)
}

/// Detect the frontiers reachable from `seed` inside `area`.
///
/// Frontiers are returned in the order the flood fill first met one of
/// their cells. Fails with [`FrontierError::InvalidSeed`] when the seed is
/// not a known free cell inside the area.
pub fn detect<M: TerrainMap + ?Sized>(
    map: &M,
    area: &AreaOfInterest,
    seed: WorldPoint,
) -> Result<Vec<Frontier>> {
    let seed_cell = map.world_to_grid(seed);
    let seed_class = map.classify(seed_cell);

    let bounds = match area.to_grid_bounds(map) {
        Some(b) if area.contains(seed) && b.contains(seed_cell) && seed_class.is_free() => b,
        _ => {
            warn!(
                "[WFD] invalid seed ({:.2},{:.2}): cell ({},{}) is {:?}",
                seed.x, seed.y, seed_cell.x, seed_cell.y, seed_class
            );
            return Err(FrontierError::InvalidSeed {
                x: seed.x,
                y: seed.y,
                class: seed_class,
            });
        }
    };

    let window = Window::new(bounds);
    let frontier_cells = flood_fill(map, &window, seed_cell);
    let frontiers = group(map, &window, &frontier_cells);

    debug!(
        "[WFD] {} frontier cells in {} frontiers",
        frontier_cells.len(),
        frontiers.len()
    );
    Ok(frontiers)
}

/// Cell rectangle with a dense local index, used for visited flags.
struct Window {
    bounds: GridBounds,
    width: usize,
}

impl Window {
    fn new(bounds: GridBounds) -> Self {
        let width = (bounds.max.x - bounds.min.x + 1) as usize;
        Self { bounds, width }
    }

    fn flags(&self) -> Vec<bool> {
        vec![false; self.bounds.cell_count()]
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if !self.bounds.contains(coord) {
            return None;
        }
        let x = (coord.x - self.bounds.min.x) as usize;
        let y = (coord.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }
}

/// BFS over free cells of the window; returns frontier cells in discovery
/// order.
fn flood_fill<M: TerrainMap + ?Sized>(
    map: &M,
    window: &Window,
    seed: GridCoord,
) -> Vec<GridCoord> {
    let mut visited = window.flags();
    let mut queue = VecDeque::new();
    let mut frontier_cells = Vec::new();

    if let Some(i) = window.index(seed) {
        visited[i] = true;
        queue.push_back(seed);
    }

    let mut visited_count = 0usize;
    while let Some(current) = queue.pop_front() {
        visited_count += 1;

        if is_frontier_cell(map, current) {
            frontier_cells.push(current);
        }

        for neighbor in current.neighbors_8() {
            let Some(i) = window.index(neighbor) else {
                continue;
            };
            if visited[i] || !map.classify(neighbor).is_free() {
                continue;
            }
            visited[i] = true;
            queue.push_back(neighbor);
        }
    }

    debug!(
        "[WFD] flood fill visited {} free cells, {} on a frontier",
        visited_count,
        frontier_cells.len()
    );
    frontier_cells
}

/// Split frontier cells into 8-connected components.
///
/// Components are started in the order of `cells`, so the first component
/// holds the first-discovered cell.
fn group<M: TerrainMap + ?Sized>(
    map: &M,
    window: &Window,
    cells: &[GridCoord],
) -> Vec<Frontier> {
    let mut is_frontier = window.flags();
    for &c in cells {
        if let Some(i) = window.index(c) {
            is_frontier[i] = true;
        }
    }

    let mut assigned = window.flags();
    let mut frontiers = Vec::new();

    for &start in cells {
        let Some(start_idx) = window.index(start) else {
            continue;
        };
        if assigned[start_idx] {
            continue;
        }
        assigned[start_idx] = true;

        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            members.push(current);
            for neighbor in current.neighbors_8() {
                let Some(i) = window.index(neighbor) else {
                    continue;
                };
                if is_frontier[i] && !assigned[i] {
                    assigned[i] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        let points = members.iter().map(|c| map.grid_to_world(*c)).collect();
        frontiers.push(Frontier {
            cells: members,
            points,
        });
    }

    frontiers
}
