//! # json_config
//!
//! A typed, in-memory document tree for JSON configuration files, with
//! tolerant parsing and indented round-trip output.
//!
//! ## Overview
//!
//! Configuration documents are trees of [`ConfigNode`]s. Each node carries
//! the member key it is stored under and one of five payloads: a decimal
//! number, text, a boolean, an ordered array of child nodes, or a keyed set
//! of child nodes. The document root is always the keyed-set variant.
//!
//! Two operations connect the tree to bytes:
//!
//! - [`parse`] builds a tree from a JSON-like buffer. It never fails:
//!   malformed input of any kind yields an empty root instead of an error,
//!   so untrusted configuration files can be read without error plumbing.
//! - [`to_bytes`] serializes a tree back to indented JSON text.
//!
//! ## Key Features
//!
//! - **Tolerant input**: trailing commas and `//` / `/* */` comments are
//!   accepted and skipped
//! - **All-or-nothing parsing**: a corrupt document never produces a
//!   partial tree
//! - **Decimal numbers**: 28–29 significant digits with exact scale
//!   round-trip (`3.10` stays `3.10`)
//! - **Order guarantees**: array element order is preserved; object member
//!   order is explicitly not part of the contract
//! - **Serde interop**: trees embed in [`serde`]-enabled host types
//!
//! ## Quick Start
//!
//! ```rust
//! use json_config::{parse, to_bytes};
//!
//! let root = parse(br#"
//!     {
//!         // connection settings
//!         "host": "0.0.0.0",
//!         "port": 8080,
//!         "tls": { "enabled": true },
//!     }
//! "#);
//!
//! assert_eq!(root.get("host").unwrap().to_text(), "0.0.0.0");
//! assert!(root.get("tls").unwrap().get("enabled").unwrap().to_boolean());
//!
//! let bytes = to_bytes(&root);
//! assert_eq!(parse(&bytes), root);
//! ```
//!
//! ### Building Trees
//!
//! ```rust
//! use json_config::{config, to_string};
//!
//! let root = config!({
//!     "name": "worker",
//!     "retries": 3,
//!     "queues": ["high", "low"],
//! });
//!
//! let text = to_string(&root);
//! assert!(text.contains("\"retries\": 3"));
//! ```
//!
//! ### Diagnosing Bad Input
//!
//! [`parse`] deliberately hides why a document was rejected. When that
//! matters, [`try_parse`] runs the same algorithm and reports the first
//! error with its line and column:
//!
//! ```rust
//! use json_config::try_parse;
//!
//! let err = try_parse(b"{\"a\": }").unwrap_err();
//! assert!(err.to_string().contains("line 1"));
//! ```
//!
//! ## Format
//!
//! See the [`format`] module for the accepted input dialect and the exact
//! output shape.

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod node;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use map::NodeMap;
pub use node::{ConfigNode, NodeType, NodeValue};
pub use options::{ParseOptions, WriteOptions};
pub use reader::{JsonReader, JsonToken};
pub use writer::JsonWriter;

use std::io;

/// Parses a configuration document from a byte buffer.
///
/// Never fails: empty input, malformed text, invalid UTF-8, and a
/// non-object top level all yield an empty root. Use [`try_parse`] when the
/// reason for rejection matters.
///
/// # Examples
///
/// ```rust
/// use json_config::parse;
///
/// let root = parse(br#"{"a": 1}"#);
/// assert_eq!(root.get("a").unwrap().to_number().to_string(), "1");
///
/// // Corrupt input parses to an empty root, not an error.
/// let root = parse(b"{\"a\": ");
/// assert!(root.to_config_nodes().unwrap().is_empty());
/// ```
#[must_use]
pub fn parse(content: &[u8]) -> ConfigNode {
    parse_with_options(content, ParseOptions::default())
}

/// Parses with explicit input tolerances. Never fails; see [`parse`].
#[must_use]
pub fn parse_with_options(content: &[u8], options: ParseOptions) -> ConfigNode {
    try_parse_with_options(content, options).unwrap_or_else(|_| ConfigNode::root())
}

/// Parses a configuration document from a string slice. Never fails; see
/// [`parse`].
#[must_use]
pub fn parse_str(content: &str) -> ConfigNode {
    parse(content.as_bytes())
}

/// Parses a configuration document, surfacing the first error instead of
/// swallowing it.
///
/// Empty input is still a valid empty document. The returned tree is
/// complete: there is no partial result on the error path.
///
/// # Errors
///
/// Returns an error describing the first lexical or structural problem,
/// with its line and column.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn try_parse(content: &[u8]) -> Result<ConfigNode> {
    try_parse_with_options(content, ParseOptions::default())
}

/// [`try_parse`] with explicit input tolerances.
///
/// # Errors
///
/// Returns an error describing the first lexical or structural problem.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn try_parse_with_options(content: &[u8], options: ParseOptions) -> Result<ConfigNode> {
    let text = std::str::from_utf8(content).map_err(|_| Error::InvalidUtf8)?;
    let mut reader = JsonReader::with_options(text, options);
    ConfigNode::parse_document(&mut reader)
}

/// Parses a configuration document from an I/O stream.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails; malformed content
/// still yields an empty root, as with [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<ConfigNode> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(parse(&content))
}

/// Serializes a tree to indented JSON bytes.
///
/// # Examples
///
/// ```rust
/// use json_config::{config, to_bytes};
///
/// let root = config!({ "a": 1 });
/// assert_eq!(to_bytes(&root), b"{\n  \"a\": 1\n}");
/// ```
#[must_use]
pub fn to_bytes(root: &ConfigNode) -> Vec<u8> {
    to_bytes_with_options(root, WriteOptions::default())
}

/// Serializes a tree with explicit formatting options.
#[must_use]
pub fn to_bytes_with_options(root: &ConfigNode, options: WriteOptions) -> Vec<u8> {
    let mut writer = JsonWriter::with_options(options);
    root.write_json(&mut writer);
    writer.into_bytes()
}

/// Serializes a tree to an indented JSON string.
#[must_use]
pub fn to_string(root: &ConfigNode) -> String {
    let mut writer = JsonWriter::new();
    root.write_json(&mut writer);
    writer.into_string()
}

/// Serializes a tree into an I/O writer.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, root: &ConfigNode) -> Result<()> {
    writer
        .write_all(&to_bytes(root))
        .map_err(|e| Error::io(&e.to_string()))
}
