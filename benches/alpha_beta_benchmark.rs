use caro::alpha_beta_searcher::SearchContext;
use caro::board::Board;
use caro::caro_position;
use caro::caro_search::search_best_move;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn middlegame() -> Board {
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
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta_search");
    group.sample_size(10);

    for depth in 1..=3u8 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let mut board = middlegame();
            let mut context = SearchContext::new(depth);
            b.iter(|| search_best_move(&mut context, black_box(&mut board)))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
