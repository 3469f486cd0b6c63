// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use mindmap_layout::{CollapseState, LayoutConfig, layout};
use mindmap_render::{CanvasMeasurer, Font, RecordingCanvas, RenderStyle, Renderer, Scene};
use mindmap_tree::TreeNode;
use mindmap_view::{ViewConfig, Viewport};

/// Complete `arity`-ary tree of the given depth.
fn build_tree(depth: usize, arity: usize) -> TreeNode {
    fn grow(id: String, depth: usize, arity: usize) -> TreeNode {
        let mut node = TreeNode::new(id.clone(), format!("Topic {id}"));
        if depth > 0 {
            for i in 0..arity {
                node.nodes.push(grow(format!("{id}.{i}"), depth - 1, arity));
            }
        }
        node
    }
    grow("0".into(), depth, arity)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("mindmap_render");
    group.sample_size(50);
    let config = LayoutConfig::default();
    let font = Font::default();
    let viewport = Viewport::new(Rect::new(0.0, 0.0, 1280.0, 800.0), &ViewConfig::default());
    let renderer = Renderer::new(RenderStyle::default(), font.clone(), config.clone());

    for &(depth, arity) in &[(3_usize, 4_usize), (5, 4)] {
        let tree = build_tree(depth, arity);
        let measure_canvas = RecordingCanvas::new(12.0);
        let root = layout(
            &CanvasMeasurer::new(&measure_canvas, &font),
            &tree,
            &CollapseState::new(),
            &config,
            viewport.canvas_size(),
        );

        for (name, scene) in [
            ("plain", Scene::default()),
            (
                "search_and_hover",
                Scene {
                    search_term: "topic 0.1",
                    hover: Some("0.1"),
                },
            ),
        ] {
            group.bench_function(format!("{name}(depth={depth},arity={arity})"), |b| {
                b.iter_batched(
                    || RecordingCanvas::new(12.0),
                    |mut canvas| {
                        renderer.render(&mut canvas, &viewport, &root, &scene);
                        black_box(canvas);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
