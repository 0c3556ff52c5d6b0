#[macro_export]
/// Builds a document root from a JSON-like literal.
///
/// Object keys become member keys on the child nodes; array elements get
/// empty keys. The outermost literal becomes the payload of a node with an
/// empty key, so `config!({ ... })` produces a well-formed document root.
///
/// ```rust
/// use json_config::config;
///
/// let root = config!({
///     "name": "server",
///     "port": 8080,
///     "tags": ["a", "b"],
/// });
///
/// assert_eq!(root.get("name").unwrap().to_text(), "server");
/// assert_eq!(root.get("tags").unwrap()[0].to_text(), "a");
/// ```
macro_rules! config {
    ( $($tree:tt)+ ) => {
        $crate::ConfigNode::with_value("", $crate::config_value!($($tree)+))
    };
}

#[macro_export]
#[doc(hidden)]
/// Builds a [`NodeValue`](crate::NodeValue) from a literal. Used by
/// [`config!`]; not part of the public surface.
macro_rules! config_value {
    (true) => {
        $crate::NodeValue::Boolean(true)
    };

    (false) => {
        $crate::NodeValue::Boolean(false)
    };

    ([]) => {
        $crate::NodeValue::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::NodeValue::Array(::std::vec![
            $( $crate::ConfigNode::with_value("", $crate::config_value!($elem)) ),*
        ])
    };

    ({}) => {
        $crate::NodeValue::ConfigNodes($crate::NodeMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut members = $crate::NodeMap::new();
        $(
            members.insert($crate::ConfigNode::with_value($key, $crate::config_value!($value)));
        )*
        $crate::NodeValue::ConfigNodes(members)
    }};

    ($other:expr) => {
        $crate::NodeValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{NodeType, NodeValue};
    use rust_decimal::Decimal;

    #[test]
    fn macro_primitives() {
        assert_eq!(config_value!(true), NodeValue::Boolean(true));
        assert_eq!(config_value!(false), NodeValue::Boolean(false));
        assert_eq!(config_value!(42), NodeValue::Number(Decimal::from(42)));
        assert_eq!(
            config_value!("hello"),
            NodeValue::Text("hello".to_string())
        );
    }

    #[test]
    fn macro_arrays() {
        let value = config_value!([1, 2, 3]);
        match value {
            NodeValue::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].to_number(), Decimal::from(1));
                assert_eq!(items[0].key(), "");
            }
            _ => panic!("expected array"),
        }
    }

    #[test]
    fn macro_objects() {
        let root = config!({
            "name": "server",
            "nested": { "deep": [true] },
        });
        assert_eq!(root.node_type(), NodeType::ConfigNodes);
        assert_eq!(root.key(), "");
        let nested = root.get("nested").unwrap();
        assert_eq!(nested.key(), "nested");
        assert!(nested.get("deep").unwrap()[0].to_boolean());
    }

    #[test]
    fn macro_empty_containers() {
        assert_eq!(config_value!([]), NodeValue::Array(Vec::new()));
        let root = config!({});
        assert!(root.to_config_nodes().unwrap().is_empty());
    }
}
