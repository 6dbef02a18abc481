use criterion::{criterion_group, criterion_main, Criterion};
use mazegen::{
    generators,
    renderers::{self, RenderOptions},
    units::SideLength,
};

fn bench_frontier_growth_32(c: &mut Criterion) {
    c.bench_function("frontier_growth_32", |b| {
        b.iter(|| generators::generate_maze(SideLength(32)).unwrap())
    });
}

fn bench_rasterize_32(c: &mut Criterion) {
    let size = SideLength(32);
    let edges = generators::generate_maze(size).unwrap();
    let options = RenderOptions::default();

    c.bench_function("rasterize_32", move |b| {
        b.iter(|| renderers::rasterize(&edges, size, &options))
    });
}

criterion_group!(benches, bench_frontier_growth_32, bench_rasterize_32);
criterion_main!(benches);
