//! Ordered map type for object-variant nodes.
//!
//! This module provides [`NodeMap`], a wrapper around [`IndexMap`] that maps
//! member keys to child [`ConfigNode`]s. Entries are keyed by the child
//! node's own key, so a map can never hold a node under a name that differs
//! from the node's `key` field.
//!
//! Iteration follows insertion order, but member order is not part of the
//! serialization contract: two documents that differ only in object member
//! order are considered equal, and [`NodeMap`]'s `PartialEq` (inherited from
//! `IndexMap`) compares entries without regard to order.
//!
//! ## Examples
//!
//! ```rust
//! use json_config::{ConfigNode, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert(ConfigNode::text("name", "server"));
//! map.insert(ConfigNode::boolean("enabled", true));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").unwrap().to_text(), "server");
//! ```

use indexmap::IndexMap;

use crate::ConfigNode;

/// An ordered map of member keys to child nodes.
///
/// # Examples
///
/// ```rust
/// use json_config::{ConfigNode, NodeMap};
///
/// let mut map = NodeMap::new();
/// map.insert(ConfigNode::boolean("first", true));
/// map.insert(ConfigNode::boolean("second", false));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMap(IndexMap<String, ConfigNode>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a child node, keyed by the node's own key.
    ///
    /// If the map already contained a node under that key, the old node is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_config::{ConfigNode, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert(ConfigNode::boolean("flag", true)).is_none());
    /// assert!(map.insert(ConfigNode::boolean("flag", false)).is_some());
    /// ```
    pub fn insert(&mut self, node: ConfigNode) -> Option<ConfigNode> {
        self.0.insert(node.key().to_string(), node)
    }

    /// Returns a reference to the node stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the node stored under `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigNode> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains a node under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes and returns the node stored under `key`, preserving the
    /// order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ConfigNode> {
        self.0.shift_remove(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the member keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ConfigNode> {
        self.0.keys()
    }

    /// Returns an iterator over the child nodes, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ConfigNode> {
        self.0.values()
    }

    /// Returns an iterator over the key-node pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigNode> {
        self.0.iter()
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Default for NodeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, ConfigNode);
    type IntoIter = indexmap::map::IntoIter<String, ConfigNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a ConfigNode);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ConfigNode> for NodeMap {
    fn from_iter<T: IntoIterator<Item = ConfigNode>>(iter: T) -> Self {
        let mut map = NodeMap::new();
        for node in iter {
            map.insert(node);
        }
        map
    }
}
