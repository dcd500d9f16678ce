use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughts_engine::game_repr::Position;

fn bench_perft_depth_5(c: &mut Criterion) {
    let pos = Position::starting();
    c.bench_function("perft depth 5", |b| b.iter(|| black_box(pos.perft(5))));
}

fn bench_perft_parallel_depth_6(c: &mut Criterion) {
    let pos = Position::starting();
    c.bench_function("perft parallel depth 6", |b| {
        b.iter(|| black_box(pos.perft_parallel(6)))
    });
}

criterion_group!(benches, bench_perft_depth_5, bench_perft_parallel_depth_6);
criterion_main!(benches);
