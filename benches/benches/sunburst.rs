// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Vec2;
use understory_sunburst::{ChildOrder, Hierarchy, Node, Partition, Sunburst, SunburstConfig};

/// A balanced tree with `fanout` children per node, `depth` levels below the root.
fn balanced(fanout: u32, depth: u32) -> Node<u32> {
    fn grow(next: &mut u32, fanout: u32, depth: u32) -> Node<u32> {
        let id = *next;
        *next += 1;
        if depth == 0 {
            return Node::leaf(id, "leaf", f64::from(id % 17 + 1));
        }
        let mut node = Node::new(id, "branch");
        for _ in 0..fanout {
            node = node.with_child(grow(next, fanout, depth - 1));
        }
        node
    }
    let mut next = 0;
    grow(&mut next, fanout, depth)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunburst/layout");
    for (fanout, depth) in [(4_u32, 4_u32), (6, 5), (10, 4)] {
        let tree = balanced(fanout, depth);
        let len = Hierarchy::build(&tree, ChildOrder::Input).unwrap().len();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("build", len), &tree, |b, tree| {
            b.iter(|| black_box(Hierarchy::build(tree, ChildOrder::Input).unwrap()));
        });
        group.bench_with_input(
            BenchmarkId::new("build_weight_descending", len),
            &tree,
            |b, tree| {
                b.iter(|| black_box(Hierarchy::build(tree, ChildOrder::WeightDescending).unwrap()));
            },
        );

        let hierarchy = Hierarchy::build(&tree, ChildOrder::Input).unwrap();
        group.bench_with_input(BenchmarkId::new("partition", len), &hierarchy, |b, h| {
            b.iter(|| black_box(Partition::new(h)));
        });
    }
    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunburst/transition");
    for (fanout, depth) in [(4_u32, 4_u32), (6, 5)] {
        let tree = balanced(fanout, depth);
        let base = Sunburst::new(&tree, SunburstConfig::for_width(900.0)).unwrap();
        let len = base.hierarchy().len();
        group.throughput(Throughput::Elements(len as u64));

        // Zooming into the first top-level branch retargets every node.
        group.bench_with_input(BenchmarkId::new("select", len), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut s| {
                    s.on_arc_click(&1);
                    black_box(s);
                },
                BatchSize::LargeInput,
            );
        });

        let mut zooming = base.clone();
        zooming.on_arc_click(&1);
        group.bench_with_input(BenchmarkId::new("frame", len), &zooming, |b, zooming| {
            b.iter_batched(
                || zooming.clone(),
                |mut s| {
                    black_box(s.on_frame(16.0).arcs.len());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("hit_test", len), &base, |b, s| {
            b.iter(|| black_box(s.hit_test(Vec2::new(120.0, -200.0))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_transition);
criterion_main!(benches);
