//! Property-based tests for the parse/serialize round trip.
//!
//! Trees are generated bottom-up over all five node kinds; the round-trip
//! property uses the tree's own structural equality, which is
//! order-sensitive for arrays and order-insensitive for object members.

use proptest::prelude::*;

use json_config::{parse, to_bytes, to_bytes_with_options, ConfigNode, NodeType, NodeValue,
    WriteOptions};
use rust_decimal::Decimal;

fn arb_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // printable ASCII, including quotes and backslashes
        "[ -~]{0,16}",
        // arbitrary unicode, exercising the escape paths
        prop::collection::vec(any::<char>(), 0..8).prop_map(String::from_iter),
    ]
}

fn arb_value() -> impl Strategy<Value = NodeValue> {
    let leaf = prop_oneof![
        arb_decimal().prop_map(NodeValue::Number),
        arb_text().prop_map(NodeValue::Text),
        any::<bool>().prop_map(NodeValue::Boolean),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|values| {
                NodeValue::Array(
                    values
                        .into_iter()
                        .map(|value| ConfigNode::with_value("", value))
                        .collect(),
                )
            }),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..6).prop_map(|members| {
                NodeValue::ConfigNodes(
                    members
                        .into_iter()
                        .map(|(key, value)| ConfigNode::with_value(key, value))
                        .collect(),
                )
            }),
        ]
    })
}

fn arb_root() -> impl Strategy<Value = ConfigNode> {
    prop::collection::btree_map("[a-z]{1,8}", arb_value(), 0..8).prop_map(|members| {
        ConfigNode::with_value(
            "",
            NodeValue::ConfigNodes(
                members
                    .into_iter()
                    .map(|(key, value)| ConfigNode::with_value(key, value))
                    .collect(),
            ),
        )
    })
}

proptest! {
    #[test]
    fn prop_roundtrip_pretty(root in arb_root()) {
        let bytes = to_bytes(&root);
        prop_assert_eq!(parse(&bytes), root);
    }

    #[test]
    fn prop_roundtrip_compact(root in arb_root()) {
        let bytes = to_bytes_with_options(&root, WriteOptions::compact());
        prop_assert_eq!(parse(&bytes), root);
    }

    #[test]
    fn prop_output_is_valid_json(root in arb_root()) {
        let bytes = to_bytes(&root);
        prop_assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_ok());
    }

    #[test]
    fn prop_parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let root = parse(&bytes);
        prop_assert_eq!(root.node_type(), NodeType::ConfigNodes);
        prop_assert_eq!(root.key(), "");
    }

    #[test]
    fn prop_mangled_documents_never_panic(root in arb_root(), cut in 0usize..64) {
        // Truncating a valid document mid-token must still fold to a root.
        let mut bytes = to_bytes(&root);
        let len = bytes.len();
        bytes.truncate(len.saturating_sub(cut));
        let reparsed = parse(&bytes);
        prop_assert_eq!(reparsed.node_type(), NodeType::ConfigNodes);
    }

    #[test]
    fn prop_decimal_display_roundtrips(value in arb_decimal()) {
        let text = value.to_string();
        prop_assert_eq!(text.parse::<Decimal>().unwrap(), value);
    }
}
