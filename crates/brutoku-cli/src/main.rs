//! Command-line Sudoku solver.
//!
//! Reads a puzzle from a file (or standard input when no path is given),
//! validates it, and prints either the solved grid or `no solution`.
//!
//! # Usage
//!
//! ```sh
//! brutoku puzzle.txt
//! cat puzzle.txt | brutoku
//! brutoku --stats puzzle.txt
//! ```
//!
//! The puzzle format uses digits `1`-`9` for givens and `.`, `_`, or `0` for
//! blanks; whitespace is ignored.
//!
//! # Exit status
//!
//! - `0`: a solution was found and printed
//! - `1`: the puzzle has no solution (including pre-existing conflicts)
//! - `2`: the input could not be read or parsed

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use brutoku_core::Grid;
use brutoku_solver::BacktrackSolver;
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file. Reads standard input when omitted.
    puzzle: Option<PathBuf>,

    /// Print search statistics to standard error after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(args.puzzle.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: failed to read puzzle: {err}");
            return ExitCode::from(2);
        }
    };

    let mut grid: Grid = match input.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    // A grid with a pre-existing duplicate has no solution; the solver is
    // not invoked at all.
    if !grid.is_consistent() {
        println!("no solution");
        return ExitCode::from(1);
    }

    let (solved, stats) = BacktrackSolver::new().solve_with_stats(&mut grid);
    debug!(
        "search visited {} nodes, hit {} dead ends",
        stats.nodes, stats.dead_ends
    );
    if args.stats {
        eprintln!("nodes: {}", stats.nodes);
        eprintln!("dead ends: {}", stats.dead_ends);
    }

    if solved {
        println!("{grid}");
        ExitCode::SUCCESS
    } else {
        println!("no solution");
        ExitCode::from(1)
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
