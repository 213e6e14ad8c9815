//! Move-selection benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use noughts::{select_move, Board, CellMask, CellSet, Player};

fn cells(indices: &[u8]) -> CellSet {
    indices.iter().map(|&i| CellMask::at(i)).collect()
}

fn bench_select_move(c: &mut Criterion) {
    let empty = Board::new();
    // Opening-trap position: O holds two adjacent edges.
    let trap = Board::from_marks(cells(&[4]), cells(&[1, 3]));
    // Midgame position that reaches the fallback scorer.
    let midgame = Board::from_marks(cells(&[0, 4, 5]), cells(&[3, 8]));

    c.bench_function("select_move/empty", |b| {
        b.iter(|| select_move(black_box(&empty), Player::X))
    });
    c.bench_function("select_move/opening_trap", |b| {
        b.iter(|| select_move(black_box(&trap), Player::X))
    });
    c.bench_function("select_move/midgame", |b| {
        b.iter(|| select_move(black_box(&midgame), Player::O))
    });
}

criterion_group!(benches, bench_select_move);
criterion_main!(benches);
