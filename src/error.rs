//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate. Parsing reports
//! syntax errors through it, the JSON boundary reports invalid AST nodes through it, and document
//! lookups such as `Document::operation` report GraphQL errors through it.

use logos::Span;
use std::{fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For parsing the context string
/// is populated with a snippet of the source text that underlines the offending token.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits, and
/// [`std::error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone, thiserror::Error)]
#[error("{}", self.print(true))]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of failure an [Error] describes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorType {
    /// A document-level error, e.g. an operation that can't be found in a document.
    GraphQL,
    /// Malformed source text, raised by the lexer or the parser.
    Syntax,
    /// A value that isn't a member of the AST node set was handed to the printer boundary.
    InvalidNode,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GraphQL => f.write_str("GraphQL Error"),
            ErrorType::Syntax => f.write_str("Syntax Error"),
            ErrorType::InvalidNode => f.write_str("Invalid AST Node"),
        }
    }
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            location: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the kind of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = format!("{}: {}", self.error_type, self.message);
        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

/// Position of an error in the source text.
///
/// `line` and `column` are 1-based, `column` counts characters, and `offset` is the byte offset
/// into the source text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

/// Lookup table from byte offsets to lines, built once per source text.
///
/// `\r\n`, `\r` and `\n` all terminate a line.
pub(crate) struct LineIndex {
    starts: std::vec::Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let mut starts = vec![0];
        let bytes = source.as_bytes();
        let mut index = 0;
        while index < bytes.len() {
            match bytes[index] {
                b'\n' => starts.push(index + 1),
                b'\r' if bytes.get(index + 1) == Some(&b'\n') => {
                    index += 1;
                    starts.push(index + 1);
                }
                b'\r' => starts.push(index + 1),
                _ => {}
            }
            index += 1;
        }
        LineIndex { starts }
    }

    pub(crate) fn location(&self, source: &str, offset: usize) -> Location {
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let start = self.starts.get(line).copied().unwrap_or(0);
        let column = source
            .get(start..offset)
            .map_or(offset.saturating_sub(start), |text| text.chars().count());
        Location {
            line: line + 1,
            column: column + 1,
            offset,
        }
    }
}

#[inline]
fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Counts line terminators, where `\r\n` counts once.
#[inline]
fn count_line_breaks(text: &str) -> usize {
    text.matches('\n').count() + text.matches('\r').count() - text.matches("\r\n").count()
}

/// Returns the offset at which the line containing `offset` starts.
#[inline]
fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind(is_line_break).map_or(0, |idx| idx + 1)
}

/// Renders the line of `span` and the line before it with line numbers, and underlines the span
/// when it doesn't cross a line break.
pub(crate) fn print_span(source: &str, span: Span, location: &Location) -> String {
    let mut out = String::new();

    let current = line_start(source, span.start);
    let start = match current {
        0 => 0,
        _ if source[..current].ends_with("\r\n") => line_start(source, current - 2),
        _ => line_start(source, current - 1),
    };

    let end = source[span.end..]
        .find(is_line_break)
        .map_or(source.len(), |idx| idx + span.end);

    let snippet = &source[start..end];
    let start_line = location
        .line
        .saturating_sub(count_line_breaks(&source[start..span.start]));
    let last_line = start_line + count_line_breaks(snippet);
    let line_num_pad = last_line.to_string().len();
    let lines = snippet
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'));
    for (index, line) in lines.enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (start_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line);
    }
    let underlined = &source[span.start..span.end];
    if underlined.find(is_line_break).is_none() {
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(source[current..span.start].chars().count()));
        out.push_str(&"^".repeat(underlined.chars().count().max(1)));
    };

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_index() {
        let source = "a\nbc\r\nd\re";
        let index = LineIndex::new(source);
        assert_eq!(
            index.location(source, 0),
            Location {
                line: 1,
                column: 1,
                offset: 0
            }
        );
        assert_eq!(index.location(source, 3).line, 2);
        assert_eq!(index.location(source, 3).column, 2);
        assert_eq!(index.location(source, 6).line, 3);
        assert_eq!(index.location(source, 8).line, 4);
        assert_eq!(index.location(source, 8).column, 1);
    }

    #[test]
    fn columns_count_characters() {
        let source = "\"é\" x";
        let index = LineIndex::new(source);
        assert_eq!(index.location(source, 5).column, 5);
    }

    #[test]
    fn print_with_context() {
        let error = Error::new_with_context(
            "Expected Name, found `}`",
            None,
            "1 | { }\n  |   ^",
            Some(ErrorType::Syntax),
        );
        assert_eq!(error.print(false), "Syntax Error: Expected Name, found `}`");
        assert_eq!(
            error.to_string(),
            "Syntax Error: Expected Name, found `}`\n1 | { }\n  |   ^"
        );
    }

    #[test]
    fn snippet() {
        let source = "query {\n  field(\n}";
        let span = 17..18;
        let location = LineIndex::new(source).location(source, span.start);
        assert_eq!(location.line, 3);
        assert_eq!(
            print_span(source, span, &location),
            " 2 |   field(\n 3 | }\n   | ^"
        );
    }

    #[test]
    fn snippet_line_breaks() {
        let source = "a\rb \u{e9} c";
        let span = 7..8;
        let location = LineIndex::new(source).location(source, span.start);
        assert_eq!((location.line, location.column), (2, 5));
        assert_eq!(
            print_span(source, span, &location),
            " 1 | a\n 2 | b \u{e9} c\n   |     ^"
        );

        let source = "a\r\nb c";
        let span = 5..6;
        let location = LineIndex::new(source).location(source, span.start);
        assert_eq!(
            print_span(source, span, &location),
            " 1 | a\n 2 | b c\n   |   ^"
        );
    }
}
