//! JSON envelopes exchanged with a maze server: the maze itself, the submitted solution and the
//! server's verdict. Only the message shapes live here; moving them over a transport is up to
//! the caller.
use grid_util::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::{MazeError, MazeResult};
use crate::maze_grid::MazeGrid;
use crate::route::Route;
use crate::solver::{bfs::BfsSolver, MazeSolver};

/// A maze as sent by the server. Coordinates are kept as raw arrays until the message is
/// validated into a [Maze].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeMessage {
    #[serde(default)]
    pub name: String,
    /// URL path the solution is posted to
    #[serde(default)]
    pub maze_path: String,
    pub starting_position: Vec<i32>,
    pub ending_position: Vec<i32>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_solution: Option<MazeSolution>,
    pub map: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSolution {
    pub directions: String,
}

impl From<Route> for MazeSolution {
    fn from(route: Route) -> Self {
        MazeSolution {
            directions: route.into_string(),
        }
    }
}

/// The server's response to a submitted solution, and to the start of a race.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "shortestSolutionLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shortest_solution_length: Option<usize>,
    #[serde(
        rename = "yourSolutionLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub solution_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<u64>,
    #[serde(rename = "nextMaze", default, skip_serializing_if = "Option::is_none")]
    pub next_maze_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl SolutionResult {
    pub const SUCCESS: &'static str = "success";
    pub const FAILED: &'static str = "failed";

    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(Self::SUCCESS)
    }
}

/// Decodes a `[x, y]` coordinate.
pub fn decode_coordinate(values: &[i32]) -> MazeResult<Point> {
    match values {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => Err(MazeError::InvalidCoordinate {
            found: values.len(),
        }),
    }
}

/// A validated maze: a well-formed grid plus the authoritative start and end.
#[derive(Clone, Debug)]
pub struct Maze {
    pub name: String,
    pub maze_path: String,
    pub grid: MazeGrid,
    pub start: Point,
    pub end: Point,
}

impl TryFrom<MazeMessage> for Maze {
    type Error = MazeError;

    fn try_from(message: MazeMessage) -> MazeResult<Maze> {
        let start = decode_coordinate(&message.starting_position)?;
        let end = decode_coordinate(&message.ending_position)?;
        let grid = MazeGrid::from_rows(&message.map)?;
        Ok(Maze {
            name: message.name,
            maze_path: message.maze_path,
            grid,
            start,
            end,
        })
    }
}

impl Maze {
    pub fn from_json(json: &str) -> MazeResult<Maze> {
        let message: MazeMessage = serde_json::from_str(json)?;
        Maze::try_from(message)
    }

    pub fn solve(&self) -> MazeResult<Route> {
        BfsSolver.solve(&self.grid, self.start, self.end)
    }

    /// Solves with the given solver, giving up at `deadline` if there is one.
    pub fn solve_with<S: MazeSolver>(
        &self,
        solver: &S,
        deadline: Option<Instant>,
    ) -> MazeResult<Route> {
        match deadline {
            Some(deadline) => solver.solve_before(&self.grid, self.start, self.end, deadline),
            None => solver.solve(&self.grid, self.start, self.end),
        }
    }

    /// Grades a submitted solution: it succeeds if its directions lead from the start to the
    /// end without leaving the open maze. Fails only if the maze itself has no solution.
    pub fn check(&self, solution: &MazeSolution) -> MazeResult<SolutionResult> {
        let shortest = self.solve()?;
        let verdict = solution
            .directions
            .parse::<Route>()
            .and_then(|route| Ok((route.len(), route.replay(&self.grid, self.start)?)));
        let (result, message, solution_length) = match verdict {
            Ok((len, position)) if position == self.end => (
                SolutionResult::SUCCESS,
                format!("You solved it in {len} steps"),
                len,
            ),
            Ok((len, position)) => (
                SolutionResult::FAILED,
                format!("Your solution ends at {position}, not at {}", self.end),
                len,
            ),
            Err(e) => (
                SolutionResult::FAILED,
                e.to_string(),
                solution.directions.chars().count(),
            ),
        };
        debug!("Checked solution for {}: {}", self.name, message);
        Ok(SolutionResult {
            result: Some(result.to_owned()),
            message: Some(message),
            shortest_solution_length: Some(shortest.len()),
            solution_length: Some(solution_length),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Move;

    const CORRIDOR: &str = r#"{
        "name": "corridor",
        "mazePath": "/mazebot/mazes/corridor",
        "startingPosition": [0, 0],
        "endingPosition": [2, 1],
        "map": [["A", " ", "X"], ["X", " ", "B"]]
    }"#;

    #[test]
    fn decodes_coordinates() {
        assert_eq!(decode_coordinate(&[4, 3]).unwrap(), Point::new(4, 3));
        for bad in [&[][..], &[1][..], &[1, 2, 3][..]] {
            assert!(matches!(
                decode_coordinate(bad),
                Err(MazeError::InvalidCoordinate { found }) if found == bad.len()
            ));
        }
    }

    #[test]
    fn parses_and_solves_message() {
        let maze = Maze::from_json(CORRIDOR).unwrap();
        assert_eq!(maze.name, "corridor");
        assert_eq!(maze.maze_path, "/mazebot/mazes/corridor");
        assert_eq!(maze.start, Point::new(0, 0));
        assert_eq!(maze.end, Point::new(2, 1));
        assert_eq!(maze.solve().unwrap().as_str(), "ESE");
    }

    #[test]
    fn rejects_bad_coordinates() {
        let json = CORRIDOR.replace("[2, 1]", "[2, 1, 0]");
        assert!(matches!(
            Maze::from_json(&json),
            Err(MazeError::InvalidCoordinate { found: 3 })
        ));
    }

    #[test]
    fn start_at_coordinate_limit_has_no_route() {
        let json = CORRIDOR.replace("[0, 0]", "[-2147483648, 0]");
        let maze = Maze::from_json(&json).unwrap();
        assert_eq!(maze.start, Point::new(i32::MIN, 0));
        assert!(matches!(maze.solve(), Err(MazeError::NoPathFound { .. })));
        let solution = MazeSolution::from(Route::new().then(Move::East));
        assert_eq!(solution.directions, "E");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(Maze::from_json("{"), Err(MazeError::Json(_))));
    }

    #[test]
    fn grades_solutions() {
        let maze = Maze::from_json(CORRIDOR).unwrap();
        let good = maze
            .check(&MazeSolution {
                directions: "ESE".to_owned(),
            })
            .unwrap();
        assert!(good.is_success());
        assert_eq!(good.shortest_solution_length, Some(3));
        assert_eq!(good.solution_length, Some(3));

        let short = maze
            .check(&MazeSolution {
                directions: "ES".to_owned(),
            })
            .unwrap();
        assert!(!short.is_success());

        let into_wall = maze
            .check(&MazeSolution {
                directions: "EE".to_owned(),
            })
            .unwrap();
        assert_eq!(into_wall.result.as_deref(), Some(SolutionResult::FAILED));

        let garbage = maze
            .check(&MazeSolution {
                directions: "up".to_owned(),
            })
            .unwrap();
        assert!(!garbage.is_success());
        assert_eq!(garbage.solution_length, Some(2));
    }

    #[test]
    fn serializes_with_wire_names() {
        let result = SolutionResult {
            result: Some("success".to_owned()),
            next_maze_path: Some("/mazebot/race/next".to_owned()),
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"result":"success","nextMaze":"/mazebot/race/next"}"#);

        let solution: MazeSolution = serde_json::from_str(r#"{"directions":"NSEW"}"#).unwrap();
        assert_eq!(solution.directions, "NSEW");
    }
}
