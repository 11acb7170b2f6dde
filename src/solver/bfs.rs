use grid_util::Point;
use log::{debug, info, warn};

use crate::{
    error::{MazeError, MazeResult},
    frontier::{Frontier, SearchState, Visited},
    maze_grid::MazeGrid,
    route::{Move, Route},
    solver::MazeSolver,
};

/// Breadth-first search over the open cells of a maze. All moves cost the same, so the first
/// time the goal is generated it is at a minimal number of moves. Neighbours are generated in
/// [Move::ALL] order, which makes the returned route deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl MazeSolver for BfsSolver {
    fn solve_until<F>(
        &self,
        grid: &MazeGrid,
        start: Point,
        end: Point,
        mut cancelled: F,
    ) -> MazeResult<Route>
    where
        F: FnMut() -> bool,
    {
        // The loop below only ever looks at neighbours, so the start is never matched as goal
        if start == end {
            return Ok(Route::new());
        }
        debug!(
            "Searching {}x{} maze from {} to {}",
            grid.width(),
            grid.height(),
            start,
            end
        );
        let mut visited = Visited::new(start);
        let mut frontier = Frontier::new(SearchState::new(start, Route::new()));
        let mut expanded = 0;
        while let Some(SearchState { position, route }) = frontier.pop() {
            if cancelled() {
                warn!(
                    "Search from {} to {} cancelled after {} expansions",
                    start, end, expanded
                );
                return Err(MazeError::Cancelled { expanded });
            }
            expanded += 1;
            for m in Move::ALL {
                let next = match m.apply(position) {
                    Some(next) if !visited.contains(&next) && grid.is_passable(next) => next,
                    _ => continue,
                };
                if next == end {
                    let route = route.then(m);
                    debug!(
                        "Found {} move route after {} expansions",
                        route.len(),
                        expanded
                    );
                    return Ok(route);
                }
                visited.insert(next);
                frontier.push(SearchState::new(next, route.then(m)));
            }
        }
        info!("{} is not reachable from {}", end, start);
        Err(MazeError::NoPathFound { start, end })
    }
}
