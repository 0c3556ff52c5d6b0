//! The configuration text format.
//!
//! This module documents the dialect of JSON that this library reads and
//! writes. There is no implementation code here.
//!
//! # Documents
//!
//! A configuration document is a JSON object. The document root is always
//! the object variant: parsing an empty buffer yields an empty root, and
//! parsing anything that is not an object at the top level (a bare array,
//! scalar, or `null`) is treated like any other malformed input.
//!
//! ```text
//! {
//!   "name": "server",
//!   "port": 8080,
//!   "tags": ["a", "b"]
//! }
//! ```
//!
//! # Value Types
//!
//! | JSON value     | Node type     | Notes                                    |
//! |----------------|---------------|------------------------------------------|
//! | number         | `Number`      | 96-bit decimal, 28–29 significant digits |
//! | string         | `Text`        | full escape support, surrogate pairs     |
//! | `true`/`false` | `Boolean`     |                                          |
//! | array          | `Array`       | element order preserved on write         |
//! | object         | `ConfigNodes` | member order not guaranteed on write     |
//! | `null`         | —             | rejected: no node representation         |
//!
//! Numbers cover the decimal range ±79,228,162,514,264,337,593,543,950,335.
//! Exponent notation is accepted on input (`1.5e3`) but output is always
//! plain decimal notation with the original scale (`1500`, `3.10`).
//!
//! # Input Tolerances
//!
//! Two deviations from strict JSON are tolerated by default (see
//! [`ParseOptions`](crate::ParseOptions)):
//!
//! - trailing commas: `[1, 2, 3,]` and `{"a": 1,}`
//! - comments, skipped wherever whitespace is allowed:
//!
//! ```text
//! {
//!   // per-host override
//!   "port": 9090, /* was 8080 */
//! }
//! ```
//!
//! Everything else is strict: member names and strings must be quoted,
//! literals are lowercase `true`/`false`, numbers may not have leading
//! zeros, and control characters inside strings must be escaped.
//!
//! # Malformed Input
//!
//! Parsing is all-or-nothing. Any structural or lexical error anywhere in
//! the document discards the whole tree: [`parse`](crate::parse) returns an
//! empty root and no error escapes. Callers that need to distinguish an
//! empty file from a corrupt one use [`try_parse`](crate::try_parse), which
//! reports the first error with its line and column.
//!
//! Rejected inputs include:
//!
//! ```text
//! {"a": }              value missing after member name
//! {"a": 1 "b": 2}      missing separator
//! {"a": null}          null has no node representation
//! {"a": 1, "a": 2}     duplicate member key
//! ["a"]                top level is not an object
//! {"a": "unterminated  string never closes
//! ```
//!
//! # Output
//!
//! Serialization produces indented, strictly JSON-compliant text: two-space
//! indentation, `": "` after member names, one member or element per line,
//! `{}`/`[]` for empty containers, and standard escaping (`\"`, `\\`,
//! `\n`, `\r`, `\t`, `\b`, `\f`, `\u00XX` for other control characters).
//! [`WriteOptions::compact`](crate::WriteOptions::compact) emits the same
//! document without whitespace.
//!
//! Array elements are written in stored order; that order survives a full
//! round-trip. Object members are written in the map's iteration order,
//! and consumers must not depend on it.

// This module contains only documentation; no implementation code
