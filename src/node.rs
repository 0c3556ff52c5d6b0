//! The configuration document tree.
//!
//! This module provides [`ConfigNode`], the variant node type that forms
//! configuration documents, together with its parse and serialize
//! algorithms.
//!
//! ## Core Types
//!
//! - [`ConfigNode`]: a `(key, payload)` pair; the payload is one of five
//!   variants
//! - [`NodeValue`]: the payload sum type (number, text, boolean, array,
//!   nested object)
//! - [`NodeType`]: the five-value discriminant, derived from the payload
//!
//! ## Usage Patterns
//!
//! ### Creating Nodes
//!
//! ```rust
//! use json_config::{ConfigNode, NodeType};
//!
//! let flag = ConfigNode::boolean("enabled", true);
//! let name = ConfigNode::text("name", "server");
//! let empty = ConfigNode::new(NodeType::Array, "tags");
//!
//! assert_eq!(flag.node_type(), NodeType::Boolean);
//! assert_eq!(empty.to_array().unwrap().len(), 0);
//! ```
//!
//! ### Reading Values
//!
//! Payload accessors never fail: a mismatched variant reads as the natural
//! default instead.
//!
//! ```rust
//! use json_config::ConfigNode;
//!
//! let name = ConfigNode::text("name", "server");
//! assert_eq!(name.to_text(), "server");
//! assert!(!name.to_boolean());
//! assert_eq!(name.to_number().to_string(), "0");
//! assert!(name.to_array().is_none());
//! ```
//!
//! ### Mutating Values
//!
//! Setters are contract-checked: calling a setter that does not match the
//! node's fixed type is a programming error and panics.
//!
//! ```rust
//! use json_config::ConfigNode;
//!
//! let mut flag = ConfigNode::boolean("enabled", true);
//! flag.set_boolean(false);
//! assert!(!flag.to_boolean());
//! ```

use std::fmt;
use std::ops::Index;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::NodeMap;
use crate::reader::{JsonReader, JsonToken};
use crate::writer::JsonWriter;
use crate::{Error, Result};

/// The five node kinds.
///
/// Numbers are decimal values with 28–29 significant digits and a magnitude
/// bound of roughly ±7.9228×10²⁸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Number,
    Text,
    Boolean,
    Array,
    /// A nested set of keyed child nodes (the object variant).
    ConfigNodes,
}

impl NodeType {
    /// Returns a lowercase name for diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Number => "number",
            NodeType::Text => "text",
            NodeType::Boolean => "boolean",
            NodeType::Array => "array",
            NodeType::ConfigNodes => "config nodes",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of a node: exactly one variant is live, fixed at
/// construction.
///
/// Modeling the payload as a sum type makes a stale payload (say, an array
/// buffer behind a number-typed node) unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Number(Decimal),
    Text(String),
    Boolean(bool),
    Array(Vec<ConfigNode>),
    ConfigNodes(NodeMap),
}

impl NodeValue {
    /// The discriminant of the live variant.
    #[must_use]
    pub const fn node_type(&self) -> NodeType {
        match self {
            NodeValue::Number(_) => NodeType::Number,
            NodeValue::Text(_) => NodeType::Text,
            NodeValue::Boolean(_) => NodeType::Boolean,
            NodeValue::Array(_) => NodeType::Array,
            NodeValue::ConfigNodes(_) => NodeType::ConfigNodes,
        }
    }
}

impl From<Decimal> for NodeValue {
    fn from(value: Decimal) -> Self {
        NodeValue::Number(value)
    }
}

impl From<i32> for NodeValue {
    fn from(value: i32) -> Self {
        NodeValue::Number(Decimal::from(value))
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        NodeValue::Number(Decimal::from(value))
    }
}

impl From<u32> for NodeValue {
    fn from(value: u32) -> Self {
        NodeValue::Number(Decimal::from(value))
    }
}

impl From<u64> for NodeValue {
    fn from(value: u64) -> Self {
        NodeValue::Number(Decimal::from(value))
    }
}

impl From<f64> for NodeValue {
    /// Converts via the nearest decimal. Values outside the decimal range
    /// (including NaN and infinities) fall back to zero.
    fn from(value: f64) -> Self {
        NodeValue::Number(Decimal::from_f64(value).unwrap_or(Decimal::ZERO))
    }
}

impl From<bool> for NodeValue {
    fn from(value: bool) -> Self {
        NodeValue::Boolean(value)
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        NodeValue::Text(value.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        NodeValue::Text(value)
    }
}

impl From<Vec<ConfigNode>> for NodeValue {
    fn from(value: Vec<ConfigNode>) -> Self {
        NodeValue::Array(value)
    }
}

impl From<NodeMap> for NodeValue {
    fn from(value: NodeMap) -> Self {
        NodeValue::ConfigNodes(value)
    }
}

/// A single element of a configuration document.
///
/// Every node carries the member key it is stored under (empty for array
/// elements and for the document root) and one typed payload. The type is
/// fixed when the node is built; reads degrade gracefully across types
/// while writes are contract-checked.
///
/// # Examples
///
/// ```rust
/// use json_config::{parse, ConfigNode, NodeType};
///
/// let root = parse(br#"{"port": 8080, "tags": ["a", "b"]}"#);
/// assert_eq!(root.node_type(), NodeType::ConfigNodes);
/// assert_eq!(root.get("port").unwrap().to_number().to_string(), "8080");
/// assert_eq!(root.get("tags").unwrap()[1].to_text(), "b");
/// assert!(root.get("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNode {
    key: String,
    value: NodeValue,
}

impl ConfigNode {
    /// Creates the synthetic document root: a `ConfigNodes` node with an
    /// empty key and no members.
    #[must_use]
    pub fn root() -> Self {
        ConfigNode {
            key: String::new(),
            value: NodeValue::ConfigNodes(NodeMap::new()),
        }
    }

    /// Creates a node of the given type with the default payload for that
    /// type. Container variants start out empty, never absent.
    pub fn new(node_type: NodeType, key: impl Into<String>) -> Self {
        let value = match node_type {
            NodeType::Number => NodeValue::Number(Decimal::ZERO),
            NodeType::Text => NodeValue::Text(String::new()),
            NodeType::Boolean => NodeValue::Boolean(false),
            NodeType::Array => NodeValue::Array(Vec::new()),
            NodeType::ConfigNodes => NodeValue::ConfigNodes(NodeMap::new()),
        };
        ConfigNode {
            key: key.into(),
            value,
        }
    }

    /// Creates a node from a key and any payload convertible to
    /// [`NodeValue`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_config::{ConfigNode, NodeType};
    ///
    /// let node = ConfigNode::with_value("retries", 3);
    /// assert_eq!(node.node_type(), NodeType::Number);
    /// ```
    pub fn with_value(key: impl Into<String>, value: impl Into<NodeValue>) -> Self {
        ConfigNode {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a number node.
    pub fn number(key: impl Into<String>, value: Decimal) -> Self {
        Self::with_value(key, NodeValue::Number(value))
    }

    /// Creates a text node.
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(key, NodeValue::Text(value.into()))
    }

    /// Creates a boolean node.
    pub fn boolean(key: impl Into<String>, value: bool) -> Self {
        Self::with_value(key, NodeValue::Boolean(value))
    }

    /// Creates an array node from its elements.
    pub fn array(key: impl Into<String>, value: Vec<ConfigNode>) -> Self {
        Self::with_value(key, NodeValue::Array(value))
    }

    /// Creates an object node from its members.
    pub fn config_nodes(key: impl Into<String>, value: NodeMap) -> Self {
        Self::with_value(key, NodeValue::ConfigNodes(value))
    }

    /// The discriminant of this node's payload.
    #[inline]
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.value.node_type()
    }

    /// The member key this node is stored under; empty for array elements
    /// and the document root.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrows the raw payload.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// The number payload, or zero if this is not a number node.
    #[inline]
    #[must_use]
    pub fn to_number(&self) -> Decimal {
        match self.value {
            NodeValue::Number(value) => value,
            _ => Decimal::ZERO,
        }
    }

    /// The text payload, or the empty string if this is not a text node.
    #[inline]
    #[must_use]
    pub fn to_text(&self) -> &str {
        match &self.value {
            NodeValue::Text(value) => value,
            _ => "",
        }
    }

    /// The boolean payload, or `false` if this is not a boolean node.
    #[inline]
    #[must_use]
    pub fn to_boolean(&self) -> bool {
        match self.value {
            NodeValue::Boolean(value) => value,
            _ => false,
        }
    }

    /// The elements of an array node, or `None` for any other type.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> Option<&[ConfigNode]> {
        match &self.value {
            NodeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members of an object node, or `None` for any other type.
    #[inline]
    #[must_use]
    pub fn to_config_nodes(&self) -> Option<&NodeMap> {
        match &self.value {
            NodeValue::ConfigNodes(members) => Some(members),
            _ => None,
        }
    }

    /// Replaces the number payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a number node.
    pub fn set_number(&mut self, value: Decimal) {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::Number(slot) => *slot = value,
            _ => panic!("set_number called on a {node_type} node"),
        }
    }

    /// Replaces the text payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a text node.
    pub fn set_text(&mut self, value: impl Into<String>) {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::Text(slot) => *slot = value.into(),
            _ => panic!("set_text called on a {node_type} node"),
        }
    }

    /// Replaces the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a boolean node.
    pub fn set_boolean(&mut self, value: bool) {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::Boolean(slot) => *slot = value,
            _ => panic!("set_boolean called on a {node_type} node"),
        }
    }

    /// Replaces the elements of an array node.
    ///
    /// # Panics
    ///
    /// Panics if this is not an array node.
    pub fn set_array(&mut self, value: Vec<ConfigNode>) {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::Array(slot) => *slot = value,
            _ => panic!("set_array called on a {node_type} node"),
        }
    }

    /// Replaces the members of an object node.
    ///
    /// # Panics
    ///
    /// Panics if this is not an object node.
    pub fn set_config_nodes(&mut self, value: NodeMap) {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::ConfigNodes(slot) => *slot = value,
            _ => panic!("set_config_nodes called on a {node_type} node"),
        }
    }

    /// Mutable access to the elements of an array node.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<ConfigNode>> {
        match &mut self.value {
            NodeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to the members of an object node.
    #[must_use]
    pub fn as_config_nodes_mut(&mut self) -> Option<&mut NodeMap> {
        match &mut self.value {
            NodeValue::ConfigNodes(members) => Some(members),
            _ => None,
        }
    }

    /// Appends an element to an array node.
    ///
    /// # Panics
    ///
    /// Panics if this is not an array node.
    pub fn push(&mut self, child: ConfigNode) {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::Array(items) => items.push(child),
            _ => panic!("push called on a {node_type} node"),
        }
    }

    /// Inserts a member into an object node, keyed by the child's own key.
    /// Returns the displaced member, if any.
    ///
    /// # Panics
    ///
    /// Panics if this is not an object node.
    pub fn insert(&mut self, child: ConfigNode) -> Option<ConfigNode> {
        let node_type = self.node_type();
        match &mut self.value {
            NodeValue::ConfigNodes(members) => members.insert(child),
            _ => panic!("insert called on a {node_type} node"),
        }
    }

    /// Looks up a member of an object node by key.
    ///
    /// Probe-only: an absent key returns `None`, as does a lookup on a
    /// non-object node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_config::parse;
    ///
    /// let root = parse(br#"{"name": "server"}"#);
    /// assert!(root.get("name").is_some());
    /// assert!(root.get("absent").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.to_config_nodes().and_then(|members| members.get(key))
    }

    fn rekeyed(mut self, key: String) -> Self {
        self.key = key;
        self
    }

    /// Parses one whole document off `reader`.
    ///
    /// Empty input is a valid empty document. The first token of non-empty
    /// input must open an object; anything else is rejected, which the
    /// tolerant entry point folds into the empty-root result.
    pub(crate) fn parse_document(reader: &mut JsonReader<'_>) -> Result<ConfigNode> {
        match reader.next_token()? {
            None => Ok(ConfigNode::root()),
            Some(JsonToken::BeginObject) => Self::parse_object(reader, String::new()),
            Some(token) => Err(Error::unexpected_token(
                reader.line(),
                reader.column(),
                "`{` at the top level",
                token.description(),
            )),
        }
    }

    /// Builds an object node by consuming member tokens up to the matching
    /// `}`. Children are built by value, so a failed parse drops every
    /// partial subtree on the way out.
    fn parse_object(reader: &mut JsonReader<'_>, key: String) -> Result<ConfigNode> {
        let mut node = ConfigNode::new(NodeType::ConfigNodes, key);
        loop {
            match reader.next_token()? {
                None => return Err(Error::unexpected_eof(reader.line(), reader.column())),
                Some(JsonToken::EndObject) => return Ok(node),
                Some(JsonToken::PropertyName(name)) => {
                    let (line, column) = (reader.line(), reader.column());
                    let token = reader
                        .next_token()?
                        .ok_or_else(|| Error::unexpected_eof(reader.line(), reader.column()))?;
                    let child = Self::parse_value(reader, name.clone(), token)?;
                    if node.insert(child).is_some() {
                        return Err(Error::duplicate_key(line, column, &name));
                    }
                }
                Some(token) => {
                    return Err(Error::unexpected_token(
                        reader.line(),
                        reader.column(),
                        "member name or `}`",
                        token.description(),
                    ))
                }
            }
        }
    }

    /// Builds an array node by consuming element tokens up to the matching
    /// `]`. Elements carry no key.
    fn parse_array(reader: &mut JsonReader<'_>, key: String) -> Result<ConfigNode> {
        let mut node = ConfigNode::new(NodeType::Array, key);
        loop {
            match reader.next_token()? {
                None => return Err(Error::unexpected_eof(reader.line(), reader.column())),
                Some(JsonToken::EndArray) => return Ok(node),
                Some(token) => {
                    let child = Self::parse_value(reader, String::new(), token)?;
                    node.push(child);
                }
            }
        }
    }

    /// Turns a value token into a child node, recursing for containers.
    /// A `null` value has no node representation and is a structural error.
    fn parse_value(
        reader: &mut JsonReader<'_>,
        key: String,
        token: JsonToken,
    ) -> Result<ConfigNode> {
        match token {
            JsonToken::Text(value) => Ok(ConfigNode::text(key, value)),
            JsonToken::Number(value) => Ok(ConfigNode::number(key, value)),
            JsonToken::Bool(value) => Ok(ConfigNode::boolean(key, value)),
            JsonToken::BeginArray => Self::parse_array(reader, key),
            JsonToken::BeginObject => Self::parse_object(reader, key),
            other => Err(Error::unexpected_token(
                reader.line(),
                reader.column(),
                "a value",
                other.description(),
            )),
        }
    }

    /// Writes this node and its subtree, depth-first in pre-order.
    ///
    /// A node with an empty key writes a bare value; otherwise it writes a
    /// named member. Array elements keep their stored order; object members
    /// follow map iteration order, which is not part of the contract.
    pub(crate) fn write_json(&self, writer: &mut JsonWriter) {
        match &self.value {
            NodeValue::Number(value) => {
                if self.key.is_empty() {
                    writer.write_number(*value);
                } else {
                    writer.write_named_number(&self.key, *value);
                }
            }
            NodeValue::Text(value) => {
                if self.key.is_empty() {
                    writer.write_string(value);
                } else {
                    writer.write_named_string(&self.key, value);
                }
            }
            NodeValue::Boolean(value) => {
                if self.key.is_empty() {
                    writer.write_bool(*value);
                } else {
                    writer.write_named_bool(&self.key, *value);
                }
            }
            NodeValue::Array(items) => {
                if self.key.is_empty() {
                    writer.start_array();
                } else {
                    writer.start_named_array(&self.key);
                }
                for item in items {
                    item.write_json(writer);
                }
                writer.end_array();
            }
            NodeValue::ConfigNodes(members) => {
                if self.key.is_empty() {
                    writer.start_object();
                } else {
                    writer.start_named_object(&self.key);
                }
                for member in members.values() {
                    member.write_json(writer);
                }
                writer.end_object();
            }
        }
    }
}

/// Positional lookup on an array node.
///
/// # Panics
///
/// Panics if the node is not an array or the index is out of range.
impl Index<usize> for ConfigNode {
    type Output = ConfigNode;

    fn index(&self, index: usize) -> &ConfigNode {
        match &self.value {
            NodeValue::Array(items) => &items[index],
            _ => panic!("indexed a {} node by position", self.value.node_type()),
        }
    }
}

/// Compact single-line JSON rendering.
impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = JsonWriter::with_options(crate::WriteOptions::compact());
        self.write_json(&mut writer);
        f.write_str(writer.as_str())
    }
}

impl Serialize for ConfigNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            NodeValue::Number(value) => {
                if value.fract().is_zero() {
                    if let Some(int) = value.to_i64() {
                        return serializer.serialize_i64(int);
                    }
                }
                serializer.serialize_f64(value.to_f64().unwrap_or(0.0))
            }
            NodeValue::Text(value) => serializer.serialize_str(value),
            NodeValue::Boolean(value) => serializer.serialize_bool(*value),
            NodeValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            NodeValue::ConfigNodes(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, member) in members.iter() {
                    map.serialize_entry(key, member)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConfigNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = ConfigNode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, string, boolean, array, or object")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(ConfigNode::boolean("", value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(ConfigNode::number("", Decimal::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(ConfigNode::number("", Decimal::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                match Decimal::from_f64(value) {
                    Some(decimal) => Ok(ConfigNode::number("", decimal)),
                    None => Err(E::custom("number cannot be represented as a decimal")),
                }
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(ConfigNode::text("", value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(ConfigNode::text("", value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Err(de::Error::invalid_type(de::Unexpected::Unit, &self))
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Err(de::Error::invalid_type(de::Unexpected::Option, &self))
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<ConfigNode>()? {
                    items.push(item);
                }
                Ok(ConfigNode::array("", items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = NodeMap::new();
                while let Some((key, node)) = map.next_entry::<String, ConfigNode>()? {
                    members.insert(node.rekeyed(key));
                }
                Ok(ConfigNode::config_nodes("", members))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fix_the_discriminant() {
        assert_eq!(
            ConfigNode::number("n", Decimal::from(1)).node_type(),
            NodeType::Number
        );
        assert_eq!(ConfigNode::text("t", "x").node_type(), NodeType::Text);
        assert_eq!(
            ConfigNode::boolean("b", true).node_type(),
            NodeType::Boolean
        );
        assert_eq!(ConfigNode::array("a", vec![]).node_type(), NodeType::Array);
        assert_eq!(
            ConfigNode::config_nodes("c", NodeMap::new()).node_type(),
            NodeType::ConfigNodes
        );
    }

    #[test]
    fn new_initializes_containers_empty() {
        let array = ConfigNode::new(NodeType::Array, "a");
        assert_eq!(array.to_array().unwrap().len(), 0);
        let object = ConfigNode::new(NodeType::ConfigNodes, "o");
        assert!(object.to_config_nodes().unwrap().is_empty());
    }

    #[test]
    fn mismatched_reads_return_defaults() {
        let text = ConfigNode::text("t", "hello");
        assert_eq!(text.to_number(), Decimal::ZERO);
        assert!(!text.to_boolean());
        assert!(text.to_array().is_none());
        assert!(text.to_config_nodes().is_none());

        let array = ConfigNode::array("a", vec![]);
        assert_eq!(array.to_number(), Decimal::ZERO);
        assert_eq!(array.to_text(), "");
    }

    #[test]
    fn get_on_non_object_is_none() {
        let number = ConfigNode::number("n", Decimal::from(5));
        assert!(number.get("anything").is_none());
    }

    #[test]
    #[should_panic(expected = "set_number called on a text node")]
    fn set_number_on_text_node_panics() {
        let mut text = ConfigNode::text("t", "hello");
        text.set_number(Decimal::from(1));
    }

    #[test]
    #[should_panic(expected = "push called on a boolean node")]
    fn push_on_scalar_panics() {
        let mut flag = ConfigNode::boolean("b", true);
        flag.push(ConfigNode::boolean("", false));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let array = ConfigNode::array("a", vec![ConfigNode::boolean("", true)]);
        let _ = &array[3];
    }

    #[test]
    fn setters_replace_matching_payloads() {
        let mut number = ConfigNode::number("n", Decimal::from(1));
        number.set_number(Decimal::from(2));
        assert_eq!(number.to_number(), Decimal::from(2));

        let mut text = ConfigNode::text("t", "a");
        text.set_text("b");
        assert_eq!(text.to_text(), "b");
    }

    #[test]
    fn insert_replaces_same_key() {
        let mut root = ConfigNode::root();
        assert!(root.insert(ConfigNode::boolean("flag", true)).is_none());
        let old = root.insert(ConfigNode::boolean("flag", false));
        assert!(old.unwrap().to_boolean());
        assert!(!root.get("flag").unwrap().to_boolean());
    }

    #[test]
    fn display_renders_compact_json() {
        let mut root = ConfigNode::root();
        root.insert(ConfigNode::text("name", "server"));
        assert_eq!(root.to_string(), r#"{"name":"server"}"#);
    }

    #[test]
    fn serde_roundtrip_through_json_value() {
        let mut root = ConfigNode::root();
        root.insert(ConfigNode::number("port", Decimal::from(8080)));
        root.insert(ConfigNode::array(
            "tags",
            vec![ConfigNode::text("", "a"), ConfigNode::text("", "b")],
        ));

        let json = serde_json::to_string(&root).unwrap();
        let back: ConfigNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }
}
