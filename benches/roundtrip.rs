use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_config::{parse, to_bytes, ConfigNode};
use rust_decimal::Decimal;

fn sample_document(services: usize) -> Vec<u8> {
    let mut root = ConfigNode::root();
    root.insert(ConfigNode::text("cluster", "production"));
    root.insert(ConfigNode::number("version", Decimal::from(3)));

    let mut items = Vec::with_capacity(services);
    for i in 0..services {
        let mut service = ConfigNode::new(json_config::NodeType::ConfigNodes, "");
        service.insert(ConfigNode::text("name", format!("service-{i}")));
        service.insert(ConfigNode::number("port", Decimal::from(8000 + i as i64)));
        service.insert(ConfigNode::boolean("enabled", i % 2 == 0));
        service.insert(ConfigNode::array(
            "tags",
            vec![
                ConfigNode::text("", "internal"),
                ConfigNode::text("", "http"),
            ],
        ));
        items.push(service);
    }
    root.insert(ConfigNode::array("services", items));

    to_bytes(&root)
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [10, 100, 1000] {
        let document = sample_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, doc| {
            b.iter(|| parse(black_box(doc)));
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for size in [10, 100, 1000] {
        let tree = parse(&sample_document(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_bytes(black_box(tree)));
        });
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let document = sample_document(100);
    c.bench_function("roundtrip_100", |b| {
        b.iter(|| to_bytes(&parse(black_box(&document))));
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_roundtrip
);
criterion_main!(benches);
