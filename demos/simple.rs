use maze_pathfinding::{AstarSolver, MazeGrid, MazeSolver, Point};

// In this example a route is found on a grid with shape
// #####
// #A  #
// # # #
// #  B#
// #####
// A marks the start
// B marks the end
fn main() {
    let rows = [
        "XXXXX", //
        "XA  X", //
        "X X X", //
        "X  BX", //
        "XXXXX",
    ]
    .map(|row| row.chars().map(String::from).collect::<Vec<_>>());
    let grid = MazeGrid::from_rows(&rows).unwrap();
    println!("{}", grid);
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    match maze_pathfinding::solve(&grid, start, end) {
        Ok(route) => {
            println!("A route has been found: {}", route);
            for p in route.points(start) {
                println!("{:?}", p);
            }
        }
        Err(e) => println!("{}", e),
    }
    let route = AstarSolver::new().solve(&grid, start, end).unwrap();
    println!("A* takes {} moves: {}", route.len(), route);
}
