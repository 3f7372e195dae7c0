use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use randgen::{seeded_rng, Gen, SpanningPath, UnifyQueries};
use union_find::UnionFind;

fn bench_unify(c: &mut Criterion) {
    let mut group = c.benchmark_group("unify");

    let mut rng = seeded_rng(0x55EF_E03C_71DA_FCAB);

    for len in [1 << 8, 1 << 12] {
        let query = UnifyQueries { len, count: 2 * len }.generate(&mut rng);
        group
            .bench_function(BenchmarkId::new("union-find", len), |b| {
                b.iter(|| {
                    let mut uf = UnionFind::new(len).unwrap();
                    for &(u, v) in &query {
                        black_box(uf.unify(u, v).unwrap());
                    }
                    uf
                })
            })
            .bench_function(BenchmarkId::new("naive", len), |b| {
                b.iter(|| {
                    let mut ds = naive::DisjointSet::new(len);
                    for &(u, v) in &query {
                        black_box(ds.unite(u, v));
                    }
                    ds
                })
            });
    }

    group.finish();

    let mut group = c.benchmark_group("find");

    let len = 1 << 16;
    let path = SpanningPath { len }.generate(&mut rng);
    let query = UnifyQueries { len, count: len }.generate(&mut rng);
    group.bench_function(BenchmarkId::new("after-path", len), |b| {
        b.iter(|| {
            let mut uf = UnionFind::new(len).unwrap();
            for &(u, v) in &path {
                uf.unify(u, v).unwrap();
            }
            for &(u, v) in &query {
                black_box(uf.connected(u, v).unwrap());
            }
            uf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_unify);
criterion_main!(benches);
