use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn, LevelFilter};
use maze_pathfinding::message::{Maze, MazeSolution};
use maze_pathfinding::{AstarSolver, BfsSolver, Route};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SolverKind {
    Bfs,
    Astar,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Solve mazes given as JSON maze messages and print one solution message per maze
#[derive(Parser, Debug)]
#[command(name = "maze_solve")]
struct Args {
    /// Maze message files, solved in order (reads one maze from stdin if none are given)
    inputs: Vec<PathBuf>,

    /// Time budget for the whole run, in seconds
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = SolverKind::Bfs)]
    solver: SolverKind,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    fast_log::init(
        fast_log::config::Config::new()
            .console()
            .level(args.log_level.into()),
    )
    .map_err(|e| anyhow!("Failed to initialize fast_log: {}", e))?;

    let deadline = deadline_after(args.timeout_secs);
    if deadline.is_none() {
        warn!("Timeout of {}s is out of range, running without a deadline", args.timeout_secs);
    }
    let result = run(&args, deadline);
    log::logger().flush();
    result
}

/// [None] when the timeout is too large to be represented as an [Instant].
fn deadline_after(timeout_secs: u64) -> Option<Instant> {
    Instant::now().checked_add(Duration::from_secs(timeout_secs))
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn solve(maze: &Maze, kind: SolverKind, deadline: Option<Instant>) -> Result<Route> {
    let route = match kind {
        SolverKind::Bfs => maze.solve_with(&BfsSolver, deadline),
        SolverKind::Astar => maze.solve_with(&AstarSolver::new(), deadline),
    };
    Ok(route?)
}

fn run(args: &Args, deadline: Option<Instant>) -> Result<()> {
    let sources: Vec<Option<&PathBuf>> = if args.inputs.is_empty() {
        vec![None]
    } else {
        args.inputs.iter().map(Some).collect()
    };
    for source in &sources {
        let label = source.map_or("stdin".to_owned(), |p| p.display().to_string());
        let json = read_input(*source)?;
        let maze =
            Maze::from_json(&json).with_context(|| format!("Unable to get maze from {label}"))?;
        let started = Instant::now();
        let route = solve(&maze, args.solver, deadline)
            .with_context(|| format!("Error solving {label}"))?;
        info!(
            "{}: size {}x{}, {} moves in {:?}",
            maze.name,
            maze.grid.width(),
            maze.grid.height(),
            route.len(),
            started.elapsed()
        );
        println!("{}", serde_json::to_string(&MazeSolution::from(route))?);
    }
    info!("Solved {} mazes", sources.len());
    Ok(())
}
