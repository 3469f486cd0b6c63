// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use mindmap_layout::{CollapseState, FixedAdvance, LayoutConfig, hit_test, layout};
use mindmap_tree::{TreeNode, filter};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

const WORDS: &[&str] = &[
    "plan", "design", "review", "ship", "launch", "research", "interview", "draft",
];

/// Random tree of `n` nodes where each node hangs under an earlier one.
fn build_tree(n: usize, seed: u64) -> TreeNode {
    let mut rng = Lcg::new(seed);
    let mut parents = vec![usize::MAX];
    let mut labels = vec![String::from("root")];
    for i in 1..n {
        parents.push(rng.gen_range_usize(i));
        let words = 1 + rng.gen_range_usize(6);
        let label: Vec<_> = (0..words)
            .map(|_| WORDS[rng.gen_range_usize(WORDS.len())])
            .collect();
        labels.push(label.join(" "));
    }
    // Children always have larger indices than parents: assemble back to front.
    let mut nodes: Vec<Option<TreeNode>> = labels
        .into_iter()
        .enumerate()
        .map(|(i, text)| Some(TreeNode::new(format!("n{i}"), text)))
        .collect();
    for i in (1..n).rev() {
        let child = nodes[i].take().unwrap();
        nodes[parents[i]].as_mut().unwrap().nodes.insert(0, child);
    }
    nodes[0].take().unwrap()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("mindmap_layout");
    group.sample_size(50);
    let config = LayoutConfig::default();
    let measurer = FixedAdvance::new(12.0);
    let viewport = Size::new(1280.0, 800.0);

    for &n in &[64_usize, 1_024, 8_192] {
        let tree = build_tree(n, 0x3D3A_0000_0000_0001);
        let collapse = CollapseState::new();

        group.bench_function(format!("layout(n={n})"), |b| {
            b.iter(|| black_box(layout(&measurer, &tree, &collapse, &config, viewport)));
        });

        let mut half = CollapseState::new();
        for node in tree.iter().step_by(2) {
            half.set(node.id.clone(), true);
        }
        group.bench_function(format!("layout_half_collapsed(n={n})"), |b| {
            b.iter(|| black_box(layout(&measurer, &tree, &half, &config, viewport)));
        });

        let root = layout(&measurer, &tree, &collapse, &config, viewport);
        let centers: Vec<Point> = root.iter().map(|node| node.rect().center()).collect();
        group.bench_function(format!("hit_test_every_node(n={n})"), |b| {
            b.iter(|| {
                for &pt in &centers {
                    black_box(hit_test(&root, pt, config.icon_size));
                }
            });
        });
        group.bench_function(format!("hit_test_miss(n={n})"), |b| {
            b.iter(|| black_box(hit_test(&root, Point::new(-10.0, -10.0), config.icon_size)));
        });

        group.bench_function(format!("filter(n={n})"), |b| {
            b.iter(|| black_box(filter(&tree, "DESIGN")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
