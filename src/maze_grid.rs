use crate::error::{GridDefect, MazeResult};
use crate::route::Move;
use crate::{END_TOKEN, START_TOKEN, WALL_TOKEN};
use core::fmt;
use grid_util::{BoolGrid, Point, ValueGrid};
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Classification of the content of a maze cell. Only [CellType::Wall] blocks movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    Open,
    Wall,
    Start,
    End,
}

impl CellType {
    pub fn from_token(token: &str) -> CellType {
        match token {
            WALL_TOKEN => CellType::Wall,
            START_TOKEN => CellType::Start,
            END_TOKEN => CellType::End,
            _ => CellType::Open,
        }
    }
    pub fn is_passable(self) -> bool {
        self != CellType::Wall
    }
}

/// [MazeGrid] stores the walls of a rectangular maze in a [BoolGrid] (a wall is [true]) together
/// with the positions of the nominal start and end markers. Connected components of the open
/// cells are maintained using a [UnionFind] structure so reachability can be answered without
/// searching.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    start_marker: Option<Point>,
    end_marker: Option<Point>,
}

impl MazeGrid {
    /// Builds a grid from rows of cell tokens, see [CellType::from_token]. Rows must be non-empty
    /// and all of the same length.
    pub fn from_rows<R, S>(rows: &[R]) -> MazeResult<MazeGrid>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let first = rows.first().ok_or(GridDefect::NoRows)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridDefect::EmptyRow { row: 0 }.into());
        }
        for (row, cells) in rows.iter().enumerate() {
            match cells.as_ref().len() {
                0 => return Err(GridDefect::EmptyRow { row }.into()),
                found if found != width => {
                    return Err(GridDefect::RaggedRow {
                        row,
                        found,
                        expected: width,
                    }
                    .into())
                }
                _ => {}
            }
        }
        let height = rows.len();
        let mut maze_grid = MazeGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            start_marker: None,
            end_marker: None,
        };
        for (y, cells) in rows.iter().enumerate() {
            for (x, token) in cells.as_ref().iter().enumerate() {
                let point = Point::new(x as i32, y as i32);
                match CellType::from_token(token.as_ref()) {
                    CellType::Wall => maze_grid.grid.set(point.x, point.y, true),
                    CellType::Start if maze_grid.start_marker.is_none() => {
                        maze_grid.start_marker = Some(point)
                    }
                    CellType::End if maze_grid.end_marker.is_none() => {
                        maze_grid.end_marker = Some(point)
                    }
                    _ => {}
                }
            }
        }
        maze_grid.generate_components();
        debug!("Built {}x{} maze grid", width, height);
        Ok(maze_grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    /// Classifies the cell at `point`, returning [None] if it lies outside the grid.
    pub fn cell(&self, point: Point) -> Option<CellType> {
        if !self.in_bounds(point) {
            return None;
        }
        let cell = if self.grid.get(point.x, point.y) {
            CellType::Wall
        } else if self.start_marker == Some(point) {
            CellType::Start
        } else if self.end_marker == Some(point) {
            CellType::End
        } else {
            CellType::Open
        };
        Some(cell)
    }

    pub fn is_passable(&self, point: Point) -> bool {
        self.cell(point).is_some_and(CellType::is_passable)
    }

    /// Position of the first start marker token, if the rows contained one.
    pub fn start_marker(&self) -> Option<Point> {
        self.start_marker
    }
    /// Position of the first end marker token, if the rows contained one.
    pub fn end_marker(&self) -> Option<Point> {
        self.end_marker
    }

    /// Passable 4-neighbours of `point` together with the move leading to them, in
    /// [Move::ALL] order.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[(Move, Point); 4]> {
        Move::ALL
            .into_iter()
            .filter_map(|m| Some((m, m.apply(*point)?)))
            .filter(|(_, p)| self.is_passable(*p))
            .collect()
    }

    /// Passable 4-neighbours of `pos`, each at unit cost.
    pub fn neighbours_and_cost(&self, pos: &Point) -> SmallVec<[(Point, i32); 4]> {
        self.neighbours(pos)
            .into_iter()
            .map(|(_, p)| (p, 1))
            .collect()
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width() + point.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to, [None] if it is out of bounds.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(*point)
            .then(|| self.components.find(self.get_ix_point(point)))
    }

    /// Checks whether a search starting at `start` can arrive at `goal`. A start that is itself
    /// blocked or outside the grid can still step onto its passable neighbours.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if start == goal {
            return true;
        }
        if !self.is_passable(*goal) {
            return false;
        }
        let goal_ix = self.get_ix_point(goal);
        if self.is_passable(*start) {
            self.components.equiv(self.get_ix_point(start), goal_ix)
        } else {
            self.neighbours(start)
                .iter()
                .any(|(_, p)| self.components.equiv(self.get_ix_point(p), goal_ix))
        }
    }

    /// Checks if start and goal are not connected through open cells.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Generates a new [UnionFind] structure and links up open 4-neighbours to the same components.
    fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                // Right and down neighbours suffice to visit every edge once
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_passable(p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let c = match self.cell(Point::new(x, y)) {
                    Some(CellType::Wall) => '#',
                    Some(CellType::Start) => 'A',
                    Some(CellType::End) => 'B',
                    _ => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MazeError;

    fn grid(rows: &[&str]) -> MazeGrid {
        let rows = rows
            .iter()
            .map(|r| r.chars().map(|c| c.to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        MazeGrid::from_rows(&rows).unwrap()
    }

    #[test]
    fn classifies_tokens() {
        let g = grid(&["AX", " B"]);
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 2);
        assert_eq!(g.cell(Point::new(0, 0)), Some(CellType::Start));
        assert_eq!(g.cell(Point::new(1, 0)), Some(CellType::Wall));
        assert_eq!(g.cell(Point::new(0, 1)), Some(CellType::Open));
        assert_eq!(g.cell(Point::new(1, 1)), Some(CellType::End));
        assert_eq!(g.start_marker(), Some(Point::new(0, 0)));
        assert_eq!(g.end_marker(), Some(Point::new(1, 1)));
    }

    /// Points outside the grid are never treated as open.
    #[test]
    fn out_of_bounds_is_distinct() {
        let g = grid(&["  ", "  "]);
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(2, 0),
            Point::new(0, 2),
        ] {
            assert_eq!(g.cell(p), None);
            assert!(!g.is_passable(p));
            assert_eq!(g.get_component(&p), None);
        }
    }

    #[test]
    fn rejects_malformed_rows() {
        let empty: Vec<Vec<&str>> = vec![];
        assert!(matches!(
            MazeGrid::from_rows(&empty),
            Err(MazeError::MalformedGrid(GridDefect::NoRows))
        ));
        assert!(matches!(
            MazeGrid::from_rows(&[vec![" ", " "], vec![]]),
            Err(MazeError::MalformedGrid(GridDefect::EmptyRow { row: 1 }))
        ));
        assert!(matches!(
            MazeGrid::from_rows(&[vec![" ", " "], vec![" "]]),
            Err(MazeError::MalformedGrid(GridDefect::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            }))
        ));
    }

    #[test]
    fn neighbours_follow_move_order() {
        let g = grid(&["   ", "   ", "   "]);
        let moves = g
            .neighbours(&Point::new(1, 1))
            .iter()
            .map(|(m, _)| *m)
            .collect::<Vec<_>>();
        assert_eq!(moves, Move::ALL.to_vec());
        // Corner only has two neighbours
        assert_eq!(g.neighbours(&Point::new(0, 0)).len(), 2);
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // | X |
        // | X |
        let g = grid(&[" X ", " X "]);
        assert!(g.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(g.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(g.unreachable(&Point::new(0, 0), &Point::new(1, 0)));
    }

    /// Diagonal contact does not connect two cells on a 4-grid.
    #[test]
    fn diagonal_is_not_connected() {
        let g = grid(&[" X", "X "]);
        assert!(g.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn blocked_start_reaches_through_neighbours() {
        let g = grid(&["X  "]);
        assert!(g.reachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(!g.reachable(&Point::new(-1, 0), &Point::new(2, 0)));
        assert!(g.reachable(&Point::new(1, 0), &Point::new(1, 0)));
    }

    #[test]
    fn neighbours_at_coordinate_limits() {
        let g = grid(&["  "]);
        assert!(g.neighbours(&Point::new(i32::MAX, 0)).is_empty());
        assert!(g.neighbours(&Point::new(i32::MIN, i32::MIN)).is_empty());
        assert!(g.unreachable(&Point::new(i32::MIN, 0), &Point::new(1, 0)));
        assert!(g.unreachable(&Point::new(i32::MAX, i32::MAX), &Point::new(0, 0)));
    }

    #[test]
    fn displays_walls_and_markers() {
        let g = grid(&["A X", " XB"]);
        assert_eq!(g.to_string(), "A.#\n.#B\n");
    }
}
