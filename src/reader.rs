//! Streaming JSON token reader.
//!
//! [`JsonReader`] is a pull tokenizer over an in-memory buffer: a single
//! advancing cursor that yields one [`JsonToken`] per call. The tree builder
//! threads one reader by mutable reference through its whole recursion, so
//! sibling and child parses observe the same cursor position. Two concurrent
//! parses need two readers.
//!
//! The reader validates token *sequencing* (member names inside objects,
//! separators, matching close brackets) so that consumers only see
//! well-ordered streams. Tolerances for trailing commas and comments are
//! controlled by [`ParseOptions`](crate::ParseOptions).

use rust_decimal::Decimal;

use crate::options::ParseOptions;
use crate::{Error, Result};

/// A single token pulled from the input buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonToken {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    /// An object member name. The `name:` colon is consumed along with it.
    PropertyName(String),
    Text(String),
    Number(Decimal),
    Bool(bool),
    Null,
}

impl JsonToken {
    /// Short token description used in diagnostics.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            JsonToken::BeginObject => "`{`",
            JsonToken::EndObject => "`}`",
            JsonToken::BeginArray => "`[`",
            JsonToken::EndArray => "`]`",
            JsonToken::PropertyName(_) => "member name",
            JsonToken::Text(_) => "string",
            JsonToken::Number(_) => "number",
            JsonToken::Bool(_) => "boolean",
            JsonToken::Null => "null",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Expect {
    RootValue,
    MemberName { after_comma: bool },
    MemberValue,
    MemberSeparator,
    Element { after_comma: bool },
    ElementSeparator,
    Done,
}

/// The streaming token reader.
///
/// Created per parse via [`JsonReader::new`] or
/// [`JsonReader::with_options`], then drained with
/// [`next_token`](JsonReader::next_token) until it returns `Ok(None)` or the
/// consumer stops pulling.
pub struct JsonReader<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    options: ParseOptions,
    stack: Vec<Container>,
    expect: Expect,
}

impl<'a> JsonReader<'a> {
    /// Creates a reader with the default tolerant options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a reader with explicit options.
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        JsonReader {
            input,
            position: 0,
            line: 1,
            column: 1,
            options,
            stack: Vec::new(),
            expect: Expect::RootValue,
        }
    }

    /// Line of the cursor, 1-based.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the cursor, 1-based.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Pulls the next token.
    ///
    /// `Ok(None)` means the input was exhausted; it is only returned before
    /// the first token (empty input) or after the document value closed.
    pub fn next_token(&mut self) -> Result<Option<JsonToken>> {
        loop {
            self.skip_trivia()?;
            match self.expect {
                Expect::RootValue => {
                    return if self.at_end() {
                        Ok(None)
                    } else {
                        self.read_value().map(Some)
                    };
                }
                Expect::Done => {
                    return if self.at_end() {
                        Ok(None)
                    } else {
                        Err(self.syntax_here("trailing characters after document"))
                    };
                }
                Expect::MemberName { after_comma } => {
                    return match self.peek_char() {
                        Some('}') => {
                            if after_comma && !self.options.allow_trailing_commas {
                                return Err(self.syntax_here("trailing comma before `}`"));
                            }
                            self.next_char();
                            self.close(Container::Object).map(Some)
                        }
                        Some('"') => {
                            let name = self.read_string()?;
                            self.skip_trivia()?;
                            match self.next_char() {
                                Some(':') => {
                                    self.expect = Expect::MemberValue;
                                    Ok(Some(JsonToken::PropertyName(name)))
                                }
                                Some(other) => Err(Error::unexpected_token(
                                    self.line,
                                    self.column,
                                    "`:` after member name",
                                    &format!("`{other}`"),
                                )),
                                None => Err(Error::unexpected_eof(self.line, self.column)),
                            }
                        }
                        Some(other) => Err(Error::unexpected_token(
                            self.line,
                            self.column,
                            "member name or `}`",
                            &format!("`{other}`"),
                        )),
                        None => Err(Error::unexpected_eof(self.line, self.column)),
                    };
                }
                Expect::MemberValue => return self.read_value().map(Some),
                Expect::MemberSeparator => match self.next_char() {
                    Some(',') => {
                        self.expect = Expect::MemberName { after_comma: true };
                    }
                    Some('}') => return self.close(Container::Object).map(Some),
                    Some(other) => {
                        return Err(Error::unexpected_token(
                            self.line,
                            self.column,
                            "`,` or `}`",
                            &format!("`{other}`"),
                        ))
                    }
                    None => return Err(Error::unexpected_eof(self.line, self.column)),
                },
                Expect::Element { after_comma } => {
                    if self.peek_char() == Some(']') {
                        if after_comma && !self.options.allow_trailing_commas {
                            return Err(self.syntax_here("trailing comma before `]`"));
                        }
                        self.next_char();
                        return self.close(Container::Array).map(Some);
                    }
                    return self.read_value().map(Some);
                }
                Expect::ElementSeparator => match self.next_char() {
                    Some(',') => {
                        self.expect = Expect::Element { after_comma: true };
                    }
                    Some(']') => return self.close(Container::Array).map(Some),
                    Some(other) => {
                        return Err(Error::unexpected_token(
                            self.line,
                            self.column,
                            "`,` or `]`",
                            &format!("`{other}`"),
                        ))
                    }
                    None => return Err(Error::unexpected_eof(self.line, self.column)),
                },
            }
        }
    }

    fn read_value(&mut self) -> Result<JsonToken> {
        match self.peek_char() {
            Some('{') => {
                self.next_char();
                self.stack.push(Container::Object);
                self.expect = Expect::MemberName { after_comma: false };
                Ok(JsonToken::BeginObject)
            }
            Some('[') => {
                self.next_char();
                self.stack.push(Container::Array);
                self.expect = Expect::Element { after_comma: false };
                Ok(JsonToken::BeginArray)
            }
            Some('"') => {
                let value = self.read_string()?;
                self.expect = self.after_value_state();
                Ok(JsonToken::Text(value))
            }
            Some('t') => {
                self.read_literal("true")?;
                self.expect = self.after_value_state();
                Ok(JsonToken::Bool(true))
            }
            Some('f') => {
                self.read_literal("false")?;
                self.expect = self.after_value_state();
                Ok(JsonToken::Bool(false))
            }
            Some('n') => {
                self.read_literal("null")?;
                self.expect = self.after_value_state();
                Ok(JsonToken::Null)
            }
            Some(c) if c == '-' || c.is_ascii_digit() => {
                let value = self.read_number()?;
                self.expect = self.after_value_state();
                Ok(JsonToken::Number(value))
            }
            Some(c) => Err(self.syntax_here(&format!("unexpected character `{c}`"))),
            None => Err(Error::unexpected_eof(self.line, self.column)),
        }
    }

    fn close(&mut self, container: Container) -> Result<JsonToken> {
        let top = self.stack.pop();
        debug_assert_eq!(top, Some(container));
        self.expect = self.after_value_state();
        Ok(match container {
            Container::Object => JsonToken::EndObject,
            Container::Array => JsonToken::EndArray,
        })
    }

    fn after_value_state(&self) -> Expect {
        match self.stack.last() {
            None => Expect::Done,
            Some(Container::Object) => Expect::MemberSeparator,
            Some(Container::Array) => Expect::ElementSeparator,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn syntax_here(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            while matches!(self.peek_char(), Some(' ' | '\t' | '\r' | '\n')) {
                self.next_char();
            }
            if self.peek_char() != Some('/') {
                return Ok(());
            }
            if !self.options.skip_comments {
                return Err(self.syntax_here("comments are not allowed"));
            }
            self.next_char();
            match self.next_char() {
                Some('/') => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.next_char();
                    }
                }
                Some('*') => {
                    let mut closed = false;
                    while let Some(c) = self.next_char() {
                        if c == '*' && self.peek_char() == Some('/') {
                            self.next_char();
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(self.syntax_here("unterminated block comment"));
                    }
                }
                _ => return Err(self.syntax_here("invalid comment")),
            }
        }
    }

    /// Consumes an exact `true`/`false`/`null` literal. The literal must be
    /// followed by a delimiter, so `truex` is rejected as a whole.
    fn read_literal(&mut self, literal: &'static str) -> Result<()> {
        let (start_line, start_column) = (self.line, self.column);
        if !self.input[self.position..].starts_with(literal) {
            return Err(Error::syntax(start_line, start_column, "invalid literal"));
        }
        for _ in 0..literal.len() {
            self.next_char();
        }
        match self.peek_char() {
            None | Some(' ' | '\t' | '\r' | '\n' | ',' | '}' | ']' | '/') => Ok(()),
            Some(_) => Err(Error::syntax(start_line, start_column, "invalid literal")),
        }
    }

    /// Reads a quoted string starting at the opening `"`.
    fn read_string(&mut self) -> Result<String> {
        self.next_char();
        let mut out = String::new();
        loop {
            match self.next_char() {
                None => return Err(self.syntax_here("unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => match self.next_char() {
                    Some('"') => out.push('"'),
                    Some('\\') => out.push('\\'),
                    Some('/') => out.push('/'),
                    Some('b') => out.push('\u{0008}'),
                    Some('f') => out.push('\u{000C}'),
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('u') => out.push(self.read_unicode_escape()?),
                    Some(other) => {
                        return Err(self.syntax_here(&format!("invalid escape `\\{other}`")))
                    }
                    None => return Err(self.syntax_here("unterminated string")),
                },
                Some(c) if (c as u32) < 0x20 => {
                    return Err(self.syntax_here("control character in string"))
                }
                Some(c) => out.push(c),
            }
        }
    }

    /// Reads the four hex digits of a `\uXXXX` escape, combining surrogate
    /// pairs into a single scalar value.
    fn read_unicode_escape(&mut self) -> Result<char> {
        let units = self.read_hex4()?;
        if !(0xD800..0xE000).contains(&units) {
            return char::from_u32(units)
                .ok_or_else(|| self.syntax_here("invalid unicode escape"));
        }
        if units >= 0xDC00 {
            return Err(self.syntax_here("unpaired low surrogate in unicode escape"));
        }
        if self.next_char() != Some('\\') || self.next_char() != Some('u') {
            return Err(self.syntax_here("high surrogate not followed by `\\u` escape"));
        }
        let low = self.read_hex4()?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(self.syntax_here("invalid low surrogate in unicode escape"));
        }
        let code = 0x10000 + ((units - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(code).ok_or_else(|| self.syntax_here("invalid unicode escape"))
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            match self.next_char() {
                Some(c) if c.is_ascii_hexdigit() => {
                    value = value * 16 + c.to_digit(16).unwrap_or(0);
                }
                _ => {
                    return Err(
                        self.syntax_here("invalid unicode escape (expected 4 hex digits)")
                    )
                }
            }
        }
        Ok(value)
    }

    fn read_number(&mut self) -> Result<Decimal> {
        let start = self.position;
        let (start_line, start_column) = (self.line, self.column);
        let mut has_exponent = false;

        if self.peek_char() == Some('-') {
            self.next_char();
        }
        match self.peek_char() {
            Some(c) if c.is_ascii_digit() => {
                self.next_char();
                if c != '0' {
                    while matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
                        self.next_char();
                    }
                } else if matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
                    return Err(Error::syntax(
                        start_line,
                        start_column,
                        "number has a leading zero",
                    ));
                }
            }
            _ => {
                return Err(Error::syntax(
                    start_line,
                    start_column,
                    "invalid number literal",
                ))
            }
        }
        if self.peek_char() == Some('.') {
            self.next_char();
            if !matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
                return Err(Error::invalid_number(
                    start_line,
                    start_column,
                    &self.input[start..self.position],
                ));
            }
            while matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
                self.next_char();
            }
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            has_exponent = true;
            self.next_char();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.next_char();
            }
            if !matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
                return Err(Error::invalid_number(
                    start_line,
                    start_column,
                    &self.input[start..self.position],
                ));
            }
            while matches!(self.peek_char(), Some(d) if d.is_ascii_digit()) {
                self.next_char();
            }
        }

        let literal = &self.input[start..self.position];
        let parsed = if has_exponent {
            Decimal::from_scientific(literal)
        } else {
            literal.parse::<Decimal>()
        };
        parsed.map_err(|_| Error::invalid_number(start_line, start_column, literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<JsonToken>> {
        let mut reader = JsonReader::new(input);
        let mut out = Vec::new();
        while let Some(token) = reader.next_token()? {
            out.push(token);
        }
        Ok(out)
    }

    #[test]
    fn tokenizes_flat_object() {
        let stream = tokens(r#"{"a": 1, "b": true}"#).unwrap();
        assert_eq!(
            stream,
            vec![
                JsonToken::BeginObject,
                JsonToken::PropertyName("a".to_string()),
                JsonToken::Number(Decimal::from(1)),
                JsonToken::PropertyName("b".to_string()),
                JsonToken::Bool(true),
                JsonToken::EndObject,
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokens("").unwrap(), vec![]);
        assert_eq!(tokens("  \n\t ").unwrap(), vec![]);
        assert_eq!(tokens("// just a comment\n").unwrap(), vec![]);
    }

    #[test]
    fn strings_in_arrays_are_values_not_names() {
        let stream = tokens(r#"["x"]"#).unwrap();
        assert_eq!(
            stream,
            vec![
                JsonToken::BeginArray,
                JsonToken::Text("x".to_string()),
                JsonToken::EndArray,
            ]
        );
    }

    #[test]
    fn trailing_commas_tolerated_by_default() {
        assert!(tokens(r#"{"a": [1, 2,],}"#).is_ok());
        let strict = ParseOptions::new().with_trailing_commas(false);
        let mut reader = JsonReader::with_options(r#"[1, 2,]"#, strict);
        let mut result = Ok(None);
        for _ in 0..4 {
            result = reader.next_token();
            if result.is_err() {
                break;
            }
        }
        assert!(result.is_err());
    }

    #[test]
    fn comments_are_skipped() {
        let stream = tokens("{ // line\n \"a\" /* block */ : 1 }").unwrap();
        assert_eq!(stream.len(), 4);
    }

    #[test]
    fn surrogate_pair_escape() {
        let stream = tokens(r#"["\ud83d\ude00"]"#).unwrap();
        assert_eq!(stream[1], JsonToken::Text("\u{1F600}".to_string()));
    }

    #[test]
    fn rejects_unterminated_string() {
        assert!(tokens(r#"{"a": "oops}"#).is_err());
    }

    #[test]
    fn rejects_leading_zero() {
        assert!(tokens(r#"[012]"#).is_err());
    }

    #[test]
    fn scientific_notation_parses() {
        let stream = tokens(r#"[1.5e3]"#).unwrap();
        assert_eq!(stream[1], JsonToken::Number(Decimal::from(1500)));
    }

    #[test]
    fn number_beyond_decimal_range_is_invalid() {
        let result = tokens("[99999999999999999999999999999999999]");
        assert!(matches!(result, Err(Error::InvalidNumber { .. })));
    }
}
