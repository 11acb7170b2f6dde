use crate::{error::MazeResult, maze_grid::MazeGrid, route::Route};
use grid_util::Point;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

pub mod astar;
pub mod bfs;

/// A shortest-route search on a [MazeGrid]. Implementors only provide
/// [solve_until](Self::solve_until); the other entry points are different ways of
/// expressing when to give up.
pub trait MazeSolver {
    /// Searches a route with the minimal number of moves from `start` to `end`. `cancelled` is
    /// polled once before every expansion; as soon as it returns [true] the search is abandoned
    /// with [MazeError::Cancelled](crate::MazeError::Cancelled).
    fn solve_until<F>(
        &self,
        grid: &MazeGrid,
        start: Point,
        end: Point,
        cancelled: F,
    ) -> MazeResult<Route>
    where
        F: FnMut() -> bool;

    fn solve(&self, grid: &MazeGrid, start: Point, end: Point) -> MazeResult<Route> {
        self.solve_until(grid, start, end, || false)
    }

    /// Gives up once `deadline` has passed.
    fn solve_before(
        &self,
        grid: &MazeGrid,
        start: Point,
        end: Point,
        deadline: Instant,
    ) -> MazeResult<Route> {
        self.solve_until(grid, start, end, || Instant::now() >= deadline)
    }

    /// Gives up once `flag` is raised, possibly from another thread.
    fn solve_with_flag(
        &self,
        grid: &MazeGrid,
        start: Point,
        end: Point,
        flag: &AtomicBool,
    ) -> MazeResult<Route> {
        self.solve_until(grid, start, end, || flag.load(Ordering::Relaxed))
    }
}
