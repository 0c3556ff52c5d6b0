//! Streaming JSON writer.
//!
//! [`JsonWriter`] builds the whole document into an in-memory buffer; the
//! caller takes the finished bytes with [`into_bytes`](JsonWriter::into_bytes)
//! once the tree has written itself. Keys and string values pass through one
//! escaping routine, so the tree code never deals with encoding rules.
//!
//! Output is indented by default ([`WriteOptions`]); compact mode emits the
//! same document with no whitespace.

use rust_decimal::Decimal;

use crate::options::WriteOptions;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scope {
    Object,
    Array,
}

#[derive(Debug)]
struct Frame {
    scope: Scope,
    entries: usize,
}

/// The streaming document writer.
pub struct JsonWriter {
    out: String,
    options: WriteOptions,
    stack: Vec<Frame>,
}

impl JsonWriter {
    /// Creates a writer with the default indented options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(WriteOptions::default())
    }

    /// Creates a writer with explicit options.
    #[must_use]
    pub fn with_options(options: WriteOptions) -> Self {
        JsonWriter {
            out: String::with_capacity(256),
            options,
            stack: Vec::new(),
        }
    }

    /// Opens an unnamed object (array element or document root).
    pub fn start_object(&mut self) {
        self.begin_entry();
        self.out.push('{');
        self.push_frame(Scope::Object);
    }

    /// Opens an object member holding an object.
    pub fn start_named_object(&mut self, key: &str) {
        self.write_key(key);
        self.out.push('{');
        self.push_frame(Scope::Object);
    }

    /// Closes the current object.
    pub fn end_object(&mut self) {
        self.end_scope(Scope::Object, '}');
    }

    /// Opens an unnamed array.
    pub fn start_array(&mut self) {
        self.begin_entry();
        self.out.push('[');
        self.push_frame(Scope::Array);
    }

    /// Opens an object member holding an array.
    pub fn start_named_array(&mut self, key: &str) {
        self.write_key(key);
        self.out.push('[');
        self.push_frame(Scope::Array);
    }

    /// Closes the current array.
    pub fn end_array(&mut self) {
        self.end_scope(Scope::Array, ']');
    }

    /// Writes an unnamed number value.
    pub fn write_number(&mut self, value: Decimal) {
        self.begin_entry();
        self.out.push_str(&value.to_string());
    }

    /// Writes a `"key": number` member.
    pub fn write_named_number(&mut self, key: &str, value: Decimal) {
        self.write_key(key);
        self.out.push_str(&value.to_string());
    }

    /// Writes an unnamed string value.
    pub fn write_string(&mut self, value: &str) {
        self.begin_entry();
        self.push_escaped(value);
    }

    /// Writes a `"key": "value"` member.
    pub fn write_named_string(&mut self, key: &str, value: &str) {
        self.write_key(key);
        self.push_escaped(value);
    }

    /// Writes an unnamed boolean value.
    pub fn write_bool(&mut self, value: bool) {
        self.begin_entry();
        self.out.push_str(if value { "true" } else { "false" });
    }

    /// Writes a `"key": boolean` member.
    pub fn write_named_bool(&mut self, key: &str, value: bool) {
        self.write_key(key);
        self.out.push_str(if value { "true" } else { "false" });
    }

    /// Returns the finished document as a string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Returns the finished document as bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }

    /// Current output, without consuming the writer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    fn push_frame(&mut self, scope: Scope) {
        self.stack.push(Frame { scope, entries: 0 });
    }

    fn end_scope(&mut self, scope: Scope, bracket: char) {
        let frame = self
            .stack
            .pop()
            .expect("close called without a matching open");
        debug_assert_eq!(frame.scope, scope);
        if self.options.pretty && frame.entries > 0 {
            self.out.push('\n');
            self.push_indent(self.stack.len());
        }
        self.out.push(bracket);
    }

    /// Separator, newline, and indentation in front of the next entry.
    fn begin_entry(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            if frame.entries > 0 {
                self.out.push(',');
            }
            frame.entries += 1;
            if self.options.pretty {
                self.out.push('\n');
                self.push_indent(self.stack.len());
            }
        }
    }

    fn write_key(&mut self, key: &str) {
        self.begin_entry();
        self.push_escaped(key);
        self.out.push(':');
        if self.options.pretty {
            self.out.push(' ');
        }
    }

    fn push_indent(&mut self, depth: usize) {
        for _ in 0..depth * self.options.indent {
            self.out.push(' ');
        }
    }

    fn push_escaped(&mut self, value: &str) {
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_braces() {
        let mut writer = JsonWriter::new();
        writer.start_object();
        writer.end_object();
        assert_eq!(writer.as_str(), "{}");
    }

    #[test]
    fn indented_members() {
        let mut writer = JsonWriter::new();
        writer.start_object();
        writer.write_named_bool("a", true);
        writer.write_named_string("b", "x");
        writer.end_object();
        assert_eq!(writer.as_str(), "{\n  \"a\": true,\n  \"b\": \"x\"\n}");
    }

    #[test]
    fn compact_members() {
        let mut writer = JsonWriter::with_options(WriteOptions::compact());
        writer.start_object();
        writer.write_named_bool("a", true);
        writer.start_named_array("b");
        writer.write_number(Decimal::from(1));
        writer.end_array();
        writer.end_object();
        assert_eq!(writer.as_str(), r#"{"a":true,"b":[1]}"#);
    }

    #[test]
    fn escapes_keys_and_values() {
        let mut writer = JsonWriter::with_options(WriteOptions::compact());
        writer.start_object();
        writer.write_named_string("a\"b", "line\nbreak\u{0001}");
        writer.end_object();
        assert_eq!(writer.as_str(), r#"{"a\"b":"line\nbreak\u0001"}"#);
    }

    #[test]
    fn bare_scalar_at_root() {
        let mut writer = JsonWriter::new();
        writer.write_string("alone");
        assert_eq!(writer.as_str(), "\"alone\"");
    }
}
