//! Benchmarks for the backtracking solver.
//!
//! Measures full solves on representative inputs: a classic 30-clue puzzle,
//! an empty grid, and a nearly complete grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::{hint, str::FromStr as _};

use brutoku_core::{Grid, Position};
use brutoku_solver::BacktrackSolver;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn classic_puzzle() -> Grid {
    Grid::from_str(
        "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ",
    )
    .unwrap()
}

fn nearly_complete_grid() -> Grid {
    let mut grid = classic_puzzle();
    assert!(BacktrackSolver::new().solve(&mut grid));
    grid.set(Position::new(0, 0), None);
    grid.set(Position::new(4, 4), None);
    grid.set(Position::new(8, 8), None);
    grid
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("classic", classic_puzzle()),
        ("empty", Grid::new()),
        ("nearly_complete", nearly_complete_grid()),
    ];

    let solver = BacktrackSolver::new();

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let solved = solver.solve(grid);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
