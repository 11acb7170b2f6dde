use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{AstarSolver, BfsSolver, MazeGrid, MazeSolver, Point, WALL_TOKEN};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Random mazes with a guaranteed route between opposite corners.
fn random_mazes(n: usize, count: usize) -> Vec<MazeGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(n as i32 - 1, n as i32 - 1);
    let mut mazes = Vec::new();
    while mazes.len() < count {
        let rows = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| if rng.gen_bool(0.3) { WALL_TOKEN } else { " " })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let grid = MazeGrid::from_rows(&rows).unwrap();
        if grid.is_passable(start) && grid.reachable(&start, &end) {
            mazes.push(grid);
        }
    }
    mazes
}

fn maze_bench_solver<S: MazeSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for n in [32, 128] {
        let mazes = random_mazes(n, 10);
        let start = Point::new(0, 0);
        let end = Point::new(n as i32 - 1, n as i32 - 1);
        c.bench_function(format!("{solver_name}, {n}x{n}").as_str(), |b| {
            b.iter(|| {
                for maze in &mazes {
                    black_box(solver.solve(maze, start, end)).unwrap();
                }
            })
        });
    }
}

fn bfs_bench(c: &mut Criterion) {
    maze_bench_solver(c, "BFS", BfsSolver);
}

fn astar_bench(c: &mut Criterion) {
    maze_bench_solver(c, "A*", AstarSolver::new());
}

criterion_group!(benches, bfs_bench, astar_bench);
criterion_main!(benches);
