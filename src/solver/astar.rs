use grid_util::Point;
use log::{info, warn};

use crate::{
    astar_search::{astar, Outcome},
    error::{MazeError, MazeResult},
    maze_grid::MazeGrid,
    route::Route,
    solver::MazeSolver,
};

/// A* over the open cells of a maze, guided by the
/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal. Routes have
/// the same length as those of [BfsSolver](crate::solver::bfs::BfsSolver) as long as
/// `heuristic_factor` does not exceed 1, but may take a different shape.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Just the Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as i32
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl MazeSolver for AstarSolver {
    fn solve_until<F>(
        &self,
        grid: &MazeGrid,
        start: Point,
        end: Point,
        cancelled: F,
    ) -> MazeResult<Route>
    where
        F: FnMut() -> bool,
    {
        if start == end {
            return Ok(Route::new());
        }
        // Check if start and goal are on the same connected component.
        if grid.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return Err(MazeError::NoPathFound { start, end });
        }
        match astar(
            &start,
            |node| grid.neighbours_and_cost(node),
            |point| self.heuristic(point, &end),
            |point| *point == end,
            cancelled,
        ) {
            Outcome::Found(points, _cost) => Route::from_points(&points),
            Outcome::Exhausted => {
                warn!("Reachable goal could not be pathed to, are the components correct?");
                Err(MazeError::NoPathFound { start, end })
            }
            Outcome::Cancelled { expanded } => {
                warn!(
                    "Search from {} to {} cancelled after {} expansions",
                    start, end, expanded
                );
                Err(MazeError::Cancelled { expanded })
            }
        }
    }
}
