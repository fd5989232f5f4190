use logos::{internal::LexerInternal, Lexer, Logos, Span};

#[derive(Clone)]
pub struct Extras<'a> {
    pub arena: &'a bumpalo::Bump,
}

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = Extras<'s>)]
pub enum Token<'a> {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("!")]
    Exclam,

    #[token("...")]
    Ellipsis,

    #[token("|")]
    Pipe,

    #[token("&")]
    Ampersand,

    #[token("@")]
    At,

    #[token("$")]
    Dollar,

    #[regex(r"@[_a-zA-Z][_0-9a-zA-Z]*", |lex| &lex.slice()[1..])]
    DirectiveName(&'a str),

    #[regex(r"\$[_a-zA-Z][_0-9a-zA-Z]*", |lex| &lex.slice()[1..])]
    VariableName(&'a str),

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)[.][0-9]+([eE][+-]?[0-9]+)?")]
    #[regex("-?([1-9][0-9]*|0)[eE][+-]?[0-9]+")]
    Float(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)")]
    Integer(&'a str),

    #[token("\"", lex_string)]
    String(&'a str),

    #[token("\"\"\"", lex_block_string)]
    BlockString(&'a str),

    #[error]
    #[regex(r"([\u{FEFF} ,\t\n\r]+|#[^\n\r]*)+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}

#[derive(Logos, Debug, PartialEq)]
pub(crate) enum BlockPart {
    #[regex(r#"[^"\\\x00-\x08\x0A-\x1F]+"#)]
    #[token("\"")]
    #[token("\"\"")]
    #[token("\\")]
    Text,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[token(r#"\""""#)]
    EscapedEndBlock,

    #[token(r#"""""#)]
    EndBlock,

    #[error]
    Error,
}

#[derive(Logos, Debug, PartialEq)]
pub(crate) enum StringPart {
    #[regex(r#"[^\x00-\x08\x0A-\x1F\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedFormfeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

#[inline]
fn parse_hex(digits: &str) -> Option<u32> {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
    parse_with_options::<u32, FORMAT>(digits.as_bytes(), &OPTIONS).ok()
}

#[inline]
fn lex_escaped_string<'a>(lex: &mut Lexer<'a, Token<'a>>, mut output: String) -> Option<&'a str> {
    let mut sublex = StringPart::lexer(lex.remainder());
    // A `\uD800`-`\uDBFF` escape must be directly followed by its low surrogate.
    let mut high_surrogate: Option<u32> = None;
    while let Some(token) = sublex.next() {
        if high_surrogate.is_some() && token != StringPart::EscapedCodepoint {
            return None;
        }
        match token {
            StringPart::Error => break,
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push('\u{8}'),
            StringPart::EscapedFormfeed => output.push('\u{c}'),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => {
                let code = parse_hex(&sublex.slice()[2..])?;
                match (high_surrogate.take(), code) {
                    (Some(high), 0xDC00..=0xDFFF) => {
                        let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                        output.push(char::from_u32(combined)?);
                    }
                    (Some(_), _) => return None,
                    (None, 0xD800..=0xDBFF) => high_surrogate = Some(code),
                    (None, code) => output.push(char::from_u32(code)?),
                }
            }
            StringPart::EndString => {
                lex.bump_unchecked(sublex.span().end);
                return Some(lex.extras.arena.alloc(output));
            }
        }
    }
    None
}

fn lex_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    // Strings without escapes are borrowed from the source, so only strings containing a
    // backslash go through the `StringPart` lexer.
    let remainder = lex.remainder();
    for (i, c) in remainder.char_indices() {
        match c {
            c if is_control(c) || c == '\n' || c == '\r' => return None,
            '\\' => {
                lex.bump_unchecked(i);
                return lex_escaped_string(lex, remainder[0..i].to_string());
            }
            '"' => {
                lex.bump_unchecked(i + 1);
                return Some(&remainder[0..i]);
            }
            _ => {}
        }
    }
    None
}

fn lex_block_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    let mut raw = String::new();
    let mut sublex = BlockPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            BlockPart::Text => raw.push_str(sublex.slice()),
            BlockPart::Newline => raw.push('\n'),
            BlockPart::EscapedEndBlock => raw.push_str("\"\"\""),
            BlockPart::EndBlock => {
                lex.bump_unchecked(sublex.span().end);
                return Some(lex.extras.arena.alloc(block_string_value(&raw)));
            }
            BlockPart::Error => break,
        }
    }
    None
}

/// Control characters that may not appear in source text. Tab and line terminators are allowed.
#[inline]
fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.bytes().all(|byte| byte == b' ' || byte == b'\t')
}

#[inline]
fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|byte| *byte == b' ' || *byte == b'\t')
        .count()
}

/// Computes the value of a block string from its raw contents, whose line terminators are already
/// normalised to `\n`.
///
/// The common indentation of all lines but the first is removed, as are leading and trailing
/// blank lines.
/// [Reference](https://spec.graphql.org/October2021/#BlockStringValue())
pub(crate) fn block_string_value(raw: &str) -> String {
    let common_indent = raw
        .split('\n')
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(leading_whitespace)
        .min()
        .unwrap_or(0);

    let lines: std::vec::Vec<&str> = raw
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line
            } else {
                &line[common_indent.min(leading_whitespace(line))..]
            }
        })
        .collect();

    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Explains why the lexer produced an error token at `span`.
pub(crate) fn describe_error(source: &str, span: Span) -> String {
    let slice = &source[span.clone()];
    if slice.starts_with("\"\"\"") {
        let rest = &source[span.end..];
        let body = rest.find("\"\"\"").map_or(rest, |end| &rest[..end]);
        return match body.chars().find(|c| is_control(*c)) {
            Some(c) => format!("Invalid character within String: {:?}", c),
            None => "Unterminated block string".to_string(),
        };
    } else if !slice.starts_with('"') {
        return match slice.chars().next() {
            Some(c) => format!("Unexpected character {:?}", c),
            None => "Unexpected end of input".to_string(),
        };
    }

    let mut chars = source[span.end..].chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return "Invalid Unicode escape sequence".to_string(),
            '\n' | '\r' => break,
            c if is_control(c) => return format!("Invalid character within String: {:?}", c),
            '\\' => match chars.next() {
                Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {}
                Some('u') => {
                    let digits: String = chars.clone().take(4).collect();
                    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                        return format!("Invalid escape sequence \\u{}", digits);
                    }
                }
                Some(c) => return format!("Invalid escape sequence \\{}", c),
                None => break,
            },
            _ => {}
        }
    }
    "Unterminated string".to_string()
}
