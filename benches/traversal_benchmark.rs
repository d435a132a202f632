use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vertex_dfs::{
    all_odd, has_strictly_increasing_path, leaves, max, reachable, write_vertex_vals, GraphLayout,
    GraphToken,
};

const SIZE: usize = 1000;

/// Binary tree `i / 2 -> i` plus a back edge from every leaf to the root.
fn tree_with_back_edges() -> GraphLayout<i64> {
    let mut layout: GraphLayout<i64> = (0..SIZE as i64).map(|i| 2 * i + 1).collect();
    for i in 1..SIZE {
        layout.push_edge(i / 2, i).unwrap();
    }
    for i in SIZE / 2..SIZE {
        layout.push_edge(i, 0).unwrap();
    }
    layout
}

fn bench_single_source(c: &mut Criterion) {
    let layout = tree_with_back_edges();

    GraphToken::new(|mut token| {
        let vertices = layout.allocate();
        layout.wire(&mut token, &vertices).unwrap();
        let root = vertices.first();

        c.bench_function("reachable_tree_cyclic", |b| {
            b.iter(|| black_box(reachable(&token, root).len()));
        });

        c.bench_function("leaves_tree_cyclic", |b| {
            b.iter(|| black_box(leaves(&token, root).len()));
        });

        c.bench_function("max_tree_cyclic", |b| {
            b.iter(|| black_box(max(&token, root)));
        });

        c.bench_function("all_odd_tree_cyclic", |b| {
            b.iter(|| black_box(all_odd(&token, root)));
        });

        c.bench_function("write_vertex_vals_tree_cyclic", |b| {
            let mut sink = Vec::with_capacity(SIZE * 8);
            b.iter(|| {
                sink.clear();
                write_vertex_vals(&token, root, &mut sink).unwrap();
                black_box(sink.len())
            });
        });
    });
}

fn bench_increasing_path(c: &mut Criterion) {
    let layout = tree_with_back_edges();

    GraphToken::new(|mut token| {
        let vertices = layout.allocate();
        layout.wire(&mut token, &vertices).unwrap();

        // Deepest leaf: the tree edges rise, the back edges fall.
        c.bench_function("increasing_path_root_to_leaf", |b| {
            b.iter(|| {
                black_box(has_strictly_increasing_path(
                    &token,
                    vertices.first(),
                    vertices.last(),
                ))
            });
        });

        // Unreachable by rising edges: every branch is exhausted.
        c.bench_function("increasing_path_exhaustive_miss", |b| {
            b.iter(|| {
                black_box(has_strictly_increasing_path(
                    &token,
                    vertices.get(1),
                    vertices.get(2),
                ))
            });
        });
    });
}

criterion_group!(benches, bench_single_source, bench_increasing_path);
criterion_main!(benches);
