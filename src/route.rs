use crate::error::{MazeError, MazeResult};
use crate::maze_grid::MazeGrid;
use core::fmt;
use grid_util::Point;
use itertools::Itertools;
use std::str::FromStr;

/// A unit move on the 4-grid. `y` grows downward, so [Move::North] decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    /// The order in which searches expand neighbours. Fixed so that results are reproducible.
    pub const ALL: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    pub fn letter(self) -> char {
        match self {
            Move::North => 'N',
            Move::South => 'S',
            Move::East => 'E',
            Move::West => 'W',
        }
    }
    pub fn from_letter(letter: char) -> Option<Move> {
        match letter {
            'N' => Some(Move::North),
            'S' => Some(Move::South),
            'E' => Some(Move::East),
            'W' => Some(Move::West),
            _ => None,
        }
    }
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
        }
    }
    /// The point one step away in this direction, [None] if it leaves the `i32` coordinate range.
    pub fn apply(self, point: Point) -> Option<Point> {
        let (dx, dy) = self.delta();
        Some(Point::new(point.x.checked_add(dx)?, point.y.checked_add(dy)?))
    }
    /// The move leading from `from` to `to`, if they are 4-neighbours.
    pub fn between(from: Point, to: Point) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.apply(from) == Some(to))
    }
}

/// A route through a maze, encoded as the concatenation of the letters of its moves
/// (`N`, `S`, `E` and `W`) without separators. Always holds valid letters only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new() -> Route {
        Route(String::new())
    }
    /// A new route extended by one move; `self` is left untouched.
    pub fn then(&self, m: Move) -> Route {
        let mut moves = String::with_capacity(self.0.len() + 1);
        moves.push_str(&self.0);
        moves.push(m.letter());
        Route(moves)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn into_string(self) -> String {
        self.0
    }
    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.0.chars().filter_map(Move::from_letter)
    }

    /// Every point visited when following the route from `start`, `start` included. Stops at the
    /// first move that would leave the `i32` coordinate range.
    pub fn points(&self, start: Point) -> Vec<Point> {
        let mut path = Vec::with_capacity(self.len() + 1);
        path.push(start);
        path.extend(self.moves().scan(start, |current, m| {
            *current = m.apply(*current)?;
            Some(*current)
        }));
        path
    }

    /// Turns a sequence of 4-adjacent points back into a route. Fails on the first pair of
    /// consecutive points that are not neighbours.
    pub fn from_points(points: &[Point]) -> MazeResult<Route> {
        let mut moves = String::with_capacity(points.len().saturating_sub(1));
        for (step, (from, to)) in points.iter().tuple_windows().enumerate() {
            let m = Move::between(*from, *to).ok_or(MazeError::IllegalMove {
                step,
                position: *to,
            })?;
            moves.push(m.letter());
        }
        Ok(Route(moves))
    }

    /// Follows the route from `start`, checking that every step stays inside the grid and off
    /// walls, and returns the final position.
    pub fn replay(&self, grid: &MazeGrid, start: Point) -> MazeResult<Point> {
        let mut current = start;
        for (step, m) in self.moves().enumerate() {
            current = match m.apply(current) {
                Some(next) if grid.is_passable(next) => next,
                next => {
                    return Err(MazeError::IllegalMove {
                        step,
                        position: next.unwrap_or(current),
                    })
                }
            };
        }
        Ok(current)
    }
}

impl FromStr for Route {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().enumerate().find(|(_, c)| Move::from_letter(*c).is_none()) {
            Some((index, found)) => Err(MazeError::InvalidDirection { index, found }),
            None => Ok(Route(s.to_owned())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&[Move]> for Route {
    fn from(moves: &[Move]) -> Self {
        Route(moves.iter().map(|m| m.letter()).join(""))
    }
}
