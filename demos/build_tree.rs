//! Build a document programmatically, two ways, and serialize it.
//!
//! Run with: `cargo run --example build_tree`

use json_config::{config, to_string, ConfigNode, NodeMap};
use rust_decimal::Decimal;

fn main() {
    // Explicit constructors.
    let mut root = ConfigNode::root();
    root.insert(ConfigNode::text("name", "worker"));
    root.insert(ConfigNode::number("retries", Decimal::from(3)));

    let mut limits = NodeMap::new();
    limits.insert(ConfigNode::number("cpu", Decimal::new(15, 1))); // 1.5
    limits.insert(ConfigNode::number("memory", Decimal::from(512)));
    root.insert(ConfigNode::config_nodes("limits", limits));

    root.insert(ConfigNode::array(
        "queues",
        vec![ConfigNode::text("", "high"), ConfigNode::text("", "low")],
    ));

    println!("{}", to_string(&root));

    // The config! macro builds the same shape from a literal.
    let from_macro = config!({
        "name": "worker",
        "retries": 3,
        "limits": { "cpu": 1.5, "memory": 512 },
        "queues": ["high", "low"],
    });

    assert_eq!(from_macro, root);
    println!("macro and constructors agree");
}
