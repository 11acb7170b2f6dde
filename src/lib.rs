//! # maze_pathfinding
//!
//! Shortest-route maze solving on walled, 4-connected grids. The default solver is a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) that expands
//! neighbours in a fixed North, South, East, West order, so the same maze always yields the same
//! route. Routes are encoded as strings of direction letters, e.g. `"EESWN"`.
//!
//! Searches can be cancelled cooperatively through a callback, a deadline or an
//! [AtomicBool](std::sync::atomic::AtomicBool); see [MazeSolver].
//!
//! ```
//! use maze_pathfinding::{solve, MazeGrid, Point};
//!
//! let grid = MazeGrid::from_rows(&[
//!     vec!["A", " ", " "],
//!     vec![" ", "X", " "],
//!     vec![" ", " ", "B"],
//! ])
//! .unwrap();
//! let route = solve(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(route.as_str(), "SSEE");
//! ```
mod astar_search;
pub mod error;
pub mod frontier;
pub mod maze_grid;
pub mod message;
pub mod route;
pub mod solver;

pub use error::{GridDefect, MazeError, MazeResult};
pub use grid_util::Point;
pub use maze_grid::{CellType, MazeGrid};
pub use route::{Move, Route};
pub use solver::{astar::AstarSolver, bfs::BfsSolver, MazeSolver};

/// Token marking a wall cell. Every other token is passable.
pub const WALL_TOKEN: &str = "X";
/// Token marking the nominal start cell.
pub const START_TOKEN: &str = "A";
/// Token marking the nominal end cell.
pub const END_TOKEN: &str = "B";

/// Finds a route with the minimal number of moves from `start` to `end` using [BfsSolver].
pub fn solve(grid: &MazeGrid, start: Point, end: Point) -> MazeResult<Route> {
    BfsSolver.solve(grid, start, end)
}
