use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weighted_paths::graph::generators::{generate_grid, generate_random_graph};
use weighted_paths::{Direction, PriorityQueue};

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for &n in &[1_000usize, 10_000] {
        let graph = generate_random_graph(n, 4.0, 7, Direction::Directed);
        group.bench_with_input(BenchmarkId::new("random", n), &graph, |b, graph| {
            b.iter(|| graph.dijkstra(black_box(&0), black_box(&(n - 1))))
        });
    }

    let grid = generate_grid(100, 100);
    group.bench_function("grid_100x100", |b| {
        b.iter(|| grid.dijkstra(black_box(&0), black_box(&9_999)))
    });
    group.finish();
}

fn bench_priority_queue(c: &mut Criterion) {
    c.bench_function("priority_queue_10k", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::min();
            queue.enqueue_all((0..10_000u32).map(|i| (i, (i * 7919) % 10_007)));
            while let Some(node) = queue.dequeue() {
                black_box(node);
            }
        })
    });
}

criterion_group!(benches, bench_dijkstra, bench_priority_queue);
criterion_main!(benches);
