use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tally_core::CostConfig;
use tally_tree::{CostTree, NodeSpec, TreeBuilder};

/// Ten features, each with eight estimated tasks alternating resources.
fn project() -> CostTree {
    let mut builder = TreeBuilder::new(NodeSpec::new("project"));
    let root = builder.root();
    for feature in 0..10 {
        let parent = builder
            .add_child(root, NodeSpec::new("feature").with_data(format!("feature {feature}")))
            .unwrap();
        for task in 0..8 {
            let low = 2 + task;
            let spec = NodeSpec::new("task")
                .with_resource(if task % 2 == 0 { "dollars" } else { "hours" })
                .with_estimate(&format!("({low}-{})", low * 4))
                .unwrap();
            builder.add_child(parent, spec).unwrap();
        }
    }
    builder.build()
}

fn bench_aggregate(c: &mut Criterion) {
    let config = CostConfig::new("dollars", [("dollars", 1.0), ("hours", 120.0)]).unwrap();

    c.bench_function("cost_unmemoized_91_nodes", |b| {
        let tree = project();
        b.iter(|| tree.cost(tree.root(), black_box(Some(&config))).unwrap());
    });
    c.bench_function("final_cost_memo_hit", |b| {
        let tree = project();
        tree.final_cost(tree.root(), Some(&config)).unwrap();
        b.iter(|| tree.final_cost(tree.root(), black_box(Some(&config))).unwrap());
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
