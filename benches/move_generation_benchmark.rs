//! Benchmarks for candidate generation and static evaluation, the two pieces
//! of work every search node repeats.

use caro::board::{Board, Player};
use caro::caro_position;
use caro::evaluate::{evaluate_board, score_cell};
use caro::move_generator::MoveGenerator;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Positions from different phases of a game on the standard board.
fn benchmark_positions() -> Vec<(String, Board)> {
    vec![
        (
            "opening".to_string(),
            "15/15/15/15/15/15/6o8/7x7/8x6/15/15/15/15/15/15 o"
                .parse()
                .unwrap_or_default(),
        ),
        (
            "middlegame".to_string(),
            caro_position! {
                ...............
                ...............
                ...............
                ...............
                .....o.........
                ....xxo........
                .....ox.x......
                ....oxxo.......
                .....o.x.......
                ......x.o......
                ...............
                ...............
                ...............
                ...............
                ...............
            },
        ),
        (
            "crowded".to_string(),
            caro_position! {
                ...............
                ...............
                ...o..x........
                ..xoox.o.......
                ..oxxxo.x......
                ...oxoxo.......
                ..xoxxoxo......
                ...xooxo.x.....
                ..o.xoxxo......
                ....o..o.......
                ...x...........
                ...............
                ...............
                ...............
                ...............
            },
        ),
    ]
}

fn candidate_generation(c: &mut Criterion) {
    let generator = MoveGenerator::default();
    let mut group = c.benchmark_group("candidate_generation");

    for (name, board) in benchmark_positions() {
        group.bench_with_input(BenchmarkId::from_parameter(&name), &board, |b, board| {
            b.iter(|| generator.generate_candidates(black_box(board), Player::Second))
        });
    }

    group.finish();
}

fn static_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_evaluation");

    for (name, board) in benchmark_positions() {
        group.bench_with_input(BenchmarkId::new("evaluate_board", &name), &board, |b, board| {
            b.iter(|| evaluate_board(black_box(board), Player::Second))
        });
        group.bench_with_input(BenchmarkId::new("score_cell", &name), &board, |b, board| {
            let center = board.center();
            b.iter(|| score_cell(black_box(board), center, Player::First))
        });
    }

    group.finish();
}

criterion_group!(benches, candidate_generation, static_evaluation);
criterion_main!(benches);
