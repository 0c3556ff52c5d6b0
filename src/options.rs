//! Configuration options for parsing and writing documents.
//!
//! - [`ParseOptions`]: input tolerances (trailing commas, comments)
//! - [`WriteOptions`]: output formatting (indentation, pretty vs. compact)
//!
//! The defaults match the behavior configuration files usually want:
//! trailing commas tolerated, comments skipped, output indented.
//!
//! ## Examples
//!
//! ```rust
//! use json_config::{parse_with_options, ParseOptions};
//!
//! // Reject comments instead of skipping them.
//! let options = ParseOptions::new().with_comments(false);
//! let root = parse_with_options(b"// not tolerated\n{}", options);
//! assert!(root.to_config_nodes().unwrap().is_empty());
//! ```

/// Input tolerances applied by the tokenizer.
///
/// # Examples
///
/// ```rust
/// use json_config::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_trailing_commas(false)
///     .with_comments(false);
/// assert!(!options.allow_trailing_commas);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Tolerate a comma before a closing `]` or `}`.
    pub allow_trailing_commas: bool,
    /// Skip `//` line comments and `/* */` block comments.
    pub skip_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            allow_trailing_commas: true,
            skip_comments: true,
        }
    }
}

impl ParseOptions {
    /// Creates the default tolerant options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a trailing comma before `]`/`}` is tolerated.
    #[must_use]
    pub fn with_trailing_commas(mut self, allow: bool) -> Self {
        self.allow_trailing_commas = allow;
        self
    }

    /// Sets whether comments are skipped. When disabled, a `/` outside a
    /// string is a syntax error.
    #[must_use]
    pub fn with_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }
}

/// Output formatting for the writer.
///
/// # Examples
///
/// ```rust
/// use json_config::WriteOptions;
///
/// let options = WriteOptions::compact();
/// assert!(!options.pretty);
///
/// let options = WriteOptions::new().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Emit newlines and indentation.
    pub pretty: bool,
    /// Spaces per nesting level. Only used when `pretty` is set.
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            pretty: true,
            indent: 2,
        }
    }
}

impl WriteOptions {
    /// Creates the default indented options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line output with no whitespace.
    #[must_use]
    pub fn compact() -> Self {
        WriteOptions {
            pretty: false,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether output is pretty-printed.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
