use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{describe_error, Extras, Token};
use crate::error::{print_span, Error, ErrorType, LineIndex, Result};
use bumpalo::collections::Vec;
use log::{debug, trace};
use logos::{Lexer, Logos, Span};

/// The default limit of nested selection sets, list and object values, and list types.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options that change how source text is parsed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ParseOptions {
    /// The maximum nesting depth of selection sets, list and object values, and list types
    /// combined. Source text that nests deeper is rejected with a syntax error instead of
    /// exhausting the stack.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The reason a node failed to parse, which is turned into an [Error] once parsing stops.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    Expected(ASTKind),
    VariableInConst,
    TrailingInput,
    DepthLimit(usize),
}

use private::ParseNode as _;
use ParseError::Expected;

type ParseResult<T> = std::result::Result<T, ParseError>;

pub(crate) mod private {
    use super::{
        describe_error, print_span, trace, ASTContext, Error, ErrorType, Extras, Lexer,
        LineIndex, Loc, Logos, ParseError, ParseOptions, ParseResult, SourceSpan, Span, Token,
    };

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Lexer].
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) iter: Lexer<'a, Token<'a>>,
        pub(crate) in_var_def: bool,
        /// Span of the most recently lexed token, which is the peeked token if there is one.
        span: Span,
        last_end: usize,
        lexical_error: bool,
        lines: LineIndex,
        depth: usize,
        max_depth: usize,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str, options: ParseOptions) -> Self {
            let extras = Extras { arena: &ctx.arena };
            ParserContext {
                arena: &ctx.arena,
                peek: None,
                iter: Token::lexer_with_extras(source, extras),
                in_var_def: false,
                span: 0..0,
                last_end: 0,
                lexical_error: false,
                lines: LineIndex::new(source),
                depth: 0,
                max_depth: options.max_depth,
            }
        }

        #[inline]
        fn lex(&mut self) -> Token<'a> {
            match self.iter.next() {
                Some(token) => {
                    self.span = self.iter.span();
                    self.lexical_error = token == Token::Error;
                    token
                }
                None => {
                    let end = self.iter.source().len();
                    self.span = end..end;
                    self.lexical_error = false;
                    Token::End
                }
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            let token = match self.peek.take() {
                Some(token) => token,
                None => self.lex(),
            };
            self.last_end = self.span.end;
            token
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> &Token<'a> {
            if self.peek.is_none() {
                let token = self.lex();
                self.peek = Some(token);
            }
            self.peek.get_or_insert(Token::End)
        }

        #[inline]
        pub(crate) fn source(&self) -> &'a str {
            self.iter.source()
        }

        /// Returns the start offset of the next token, which is where a node starting with it
        /// begins.
        #[inline]
        pub(crate) fn start(&mut self) -> usize {
            self.peek();
            self.span.start
        }

        /// Creates the location of a node that started at `start` and ends with the last
        /// consumed token.
        #[inline]
        pub(crate) fn loc(&self, start: usize) -> Loc {
            let location = self.lines.location(self.source(), start);
            Loc(Some(SourceSpan {
                start,
                end: self.last_end.max(start),
                line: location.line,
                column: location.column,
            }))
        }

        #[inline]
        pub(crate) fn descend(&mut self) -> ParseResult<()> {
            self.depth += 1;
            if self.depth > self.max_depth {
                Err(ParseError::DepthLimit(self.max_depth))
            } else {
                Ok(())
            }
        }

        #[inline]
        pub(crate) fn ascend(&mut self) {
            self.depth = self.depth.saturating_sub(1);
        }

        /// Converts a parse error into a syntax [Error] pointing at the current token.
        pub(crate) fn error(&self, error: ParseError) -> Error {
            let source = self.source();
            let span = self.span.clone();
            let found = if span.is_empty() {
                "<EOF>".to_string()
            } else {
                format!("`{}`", &source[span.clone()])
            };
            let message = match error {
                ParseError::DepthLimit(max_depth) => {
                    format!("Maximum nesting depth of {} exceeded", max_depth)
                }
                _ if self.lexical_error => describe_error(source, span.clone()),
                ParseError::Expected(kind) => format!("Expected {}, found {}", kind, found),
                ParseError::VariableInConst => {
                    format!("Unexpected variable {} in constant value", found)
                }
                ParseError::TrailingInput => {
                    format!("Unexpected {}, expected end of input", found)
                }
            };
            let location = self.lines.location(source, span.start);
            let context = print_span(source, span, &location);
            trace!("parse failed at offset {}", location.offset);
            Error::new_with_context(message, Some(location), context, Some(ErrorType::Syntax))
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`.
///
/// The whole source text must form exactly one node, so trailing input after the node is a syntax
/// error.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        Self::parse_with_options(ctx, source, ParseOptions::default())
    }

    /// Parse an input source text like [`ParseNode::parse`] with explicit [`ParseOptions`].
    fn parse_with_options<T: ToString>(
        ctx: &'a ASTContext,
        source: T,
        options: ParseOptions,
    ) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        trace!("parsing {} bytes of source text", source.len());
        let mut parser_ctx = private::ParserContext::new(ctx, source, options);
        let result = Self::new_with_ctx(&mut parser_ctx).and_then(|node| {
            if let Token::End = parser_ctx.peek() {
                Ok(node)
            } else {
                Err(ParseError::TrailingInput)
            }
        });
        match result {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(error) => {
                let error = parser_ctx.error(error);
                debug!("{}", error.print(false));
                Err(error)
            }
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<BooleanValue> {
        let start = ctx.start();
        let value = match ctx.next() {
            Token::Name("true") => true,
            Token::Name("false") => false,
            _ => return Err(Expected(ASTKind::Boolean)),
        };
        Ok(BooleanValue {
            value,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValue<'a>> {
        let start = ctx.start();
        match ctx.next() {
            Token::Name("true" | "false" | "null") => Err(Expected(ASTKind::Enum)),
            Token::Name(value) => Ok(EnumValue {
                value,
                loc: ctx.loc(start),
            }),
            _ => Err(Expected(ASTKind::Enum)),
        }
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FloatValue<'a>> {
        let start = ctx.start();
        if let Token::Float(value) = ctx.next() {
            Ok(FloatValue {
                value,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::Float))
        }
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<IntValue<'a>> {
        let start = ctx.start();
        if let Token::Integer(value) = ctx.next() {
            Ok(IntValue {
                value,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::Int))
        }
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        let start = ctx.start();
        match ctx.next() {
            Token::String(value) | Token::BlockString(value) => Ok(StringValue {
                value,
                loc: ctx.loc(start),
            }),
            _ => Err(Expected(ASTKind::String)),
        }
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Variable<'a>> {
        let start = ctx.start();
        let name = match ctx.next() {
            Token::VariableName(name) => name,
            Token::Dollar => match ctx.next() {
                Token::Name(name) => name,
                _ => return Err(Expected(ASTKind::Variable)),
            },
            _ => return Err(Expected(ASTKind::Variable)),
        };
        Ok(Variable {
            name,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Value<'a>> {
        let in_var_def = ctx.in_var_def;
        match ctx.peek() {
            Token::Name("null") => {
                ctx.next();
                Ok(Value::Null)
            }
            Token::VariableName(_) | Token::Dollar if in_var_def => {
                Err(ParseError::VariableInConst)
            }
            Token::VariableName(_) | Token::Dollar => {
                Variable::new_with_ctx(ctx).map(Value::Variable)
            }
            Token::Name("true" | "false") => BooleanValue::new_with_ctx(ctx).map(Value::Boolean),
            Token::Name(_) => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            Token::Float(_) => FloatValue::new_with_ctx(ctx).map(Value::Float),
            Token::Integer(_) => IntValue::new_with_ctx(ctx).map(Value::Int),
            Token::String(_) | Token::BlockString(_) => {
                StringValue::new_with_ctx(ctx).map(Value::String)
            }
            Token::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            Token::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => Err(Expected(ASTKind::Value)),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let start = ctx.start();
        if let Token::Name(name) = ctx.next() {
            if let Token::Colon = ctx.next() {
                let value = Value::new_with_ctx(ctx)?;
                return Ok(ObjectField {
                    name,
                    value,
                    loc: ctx.loc(start),
                });
            }
        }
        Err(Expected(ASTKind::ObjectField))
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectValue<'a>> {
        let start = ctx.start();
        if let Token::BraceOpen = ctx.next() {
            ctx.descend()?;
            let mut children = Vec::new_in(ctx.arena);
            loop {
                if let Token::BraceClose = ctx.peek() {
                    ctx.next();
                    break;
                }
                children.push(ObjectField::new_with_ctx(ctx)?);
            }
            ctx.ascend();
            Ok(ObjectValue {
                children,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::Object))
        }
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ListValue<'a>> {
        let start = ctx.start();
        if let Token::BracketOpen = ctx.next() {
            ctx.descend()?;
            let mut children = Vec::new_in(ctx.arena);
            loop {
                if let Token::BracketClose = ctx.peek() {
                    ctx.next();
                    break;
                }
                children.push(Value::new_with_ctx(ctx)?);
            }
            ctx.ascend();
            Ok(ListValue {
                children,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::List))
        }
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let start = ctx.start();
        if let Token::Name(name) = ctx.next() {
            if let Token::Colon = ctx.next() {
                let value = Value::new_with_ctx(ctx)?;
                return Ok(Argument {
                    name,
                    value,
                    loc: ctx.loc(start),
                });
            }
        }
        Err(Expected(ASTKind::Argument))
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            loop {
                if let Token::ParenClose = ctx.peek() {
                    ctx.next();
                    break;
                }
                children.push(Argument::new_with_ctx(ctx)?);
            }
        }
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directive<'a>> {
        let start = ctx.start();
        let name = match ctx.next() {
            Token::DirectiveName(name) => name,
            Token::At => match ctx.next() {
                Token::Name(name) => name,
                _ => return Err(Expected(ASTKind::Directive)),
            },
            _ => return Err(Expected(ASTKind::Directive)),
        };
        let arguments = Arguments::new_with_ctx(ctx)?;
        Ok(Directive {
            name,
            arguments,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directives<'a>> {
        let mut builder = Vec::new_in(ctx.arena);
        while let Token::DirectiveName(_) | Token::At = ctx.peek() {
            builder.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children: builder })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Field<'a>> {
        let start = ctx.start();
        if let Token::Name(name_or_alias) = ctx.next() {
            let (alias, name) = if let Token::Colon = ctx.peek() {
                ctx.next();
                if let Token::Name(name) = ctx.next() {
                    (Some(name_or_alias), name)
                } else {
                    return Err(Expected(ASTKind::Field));
                }
            } else {
                (None, name_or_alias)
            };

            let arguments = Arguments::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = if let Token::BraceOpen = ctx.peek() {
                Some(SelectionSet::new_with_ctx(ctx)?)
            } else {
                None
            };

            Ok(Field {
                alias,
                name,
                arguments,
                directives,
                selection_set,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::Field))
        }
    }
}

/// Parses the remainder of a fragment spread after its `...` that started at `start`.
#[inline]
fn fragment_spread_after_ellipsis<'a>(
    ctx: &mut private::ParserContext<'a>,
    start: usize,
) -> ParseResult<FragmentSpread<'a>> {
    match ctx.peek() {
        Token::Name("on") => Err(Expected(ASTKind::FragmentSpread)),
        Token::Name(_) => {
            let name = NamedType::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            Ok(FragmentSpread {
                name,
                directives,
                loc: ctx.loc(start),
            })
        }
        _ => Err(Expected(ASTKind::FragmentSpread)),
    }
}

/// Parses the remainder of an inline fragment after its `...` that started at `start`.
#[inline]
fn inline_fragment_after_ellipsis<'a>(
    ctx: &mut private::ParserContext<'a>,
    start: usize,
) -> ParseResult<InlineFragment<'a>> {
    let type_condition = if let Token::Name("on") = ctx.peek() {
        ctx.next();
        Some(NamedType::new_with_ctx(ctx)?)
    } else {
        None
    };
    let directives = Directives::new_with_ctx(ctx)?;
    let selection_set = SelectionSet::new_with_ctx(ctx)?;
    Ok(InlineFragment {
        type_condition,
        directives,
        selection_set,
        loc: ctx.loc(start),
    })
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentSpread<'a>> {
        let start = ctx.start();
        if let Token::Ellipsis = ctx.next() {
            fragment_spread_after_ellipsis(ctx, start)
        } else {
            Err(Expected(ASTKind::FragmentSpread))
        }
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let start = ctx.start();
        if let Token::Name(name) = ctx.next() {
            Ok(NamedType {
                name,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::NamedType))
        }
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<InlineFragment<'a>> {
        let start = ctx.start();
        if let Token::Ellipsis = ctx.next() {
            inline_fragment_after_ellipsis(ctx, start)
        } else {
            Err(Expected(ASTKind::InlineFragment))
        }
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Selection<'a>> {
        let start = ctx.start();
        match ctx.peek() {
            Token::Name(_) => Field::new_with_ctx(ctx).map(Selection::Field),
            Token::Ellipsis => {
                ctx.next();
                match ctx.peek() {
                    Token::DirectiveName(_) | Token::At | Token::BraceOpen | Token::Name("on") => {
                        inline_fragment_after_ellipsis(ctx, start).map(Selection::InlineFragment)
                    }
                    Token::Name(_) => {
                        fragment_spread_after_ellipsis(ctx, start).map(Selection::FragmentSpread)
                    }
                    _ => Err(Expected(ASTKind::Selection)),
                }
            }
            _ => Err(Expected(ASTKind::Selection)),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        let start = ctx.start();
        if let Token::BraceOpen = ctx.next() {
            ctx.descend()?;
            let mut selections = Vec::new_in(ctx.arena);
            loop {
                selections.push(Selection::new_with_ctx(ctx)?);
                if let Token::BraceClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            ctx.ascend();
            Ok(SelectionSet {
                selections,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::SelectionSet))
        }
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Type<'a>> {
        let start = ctx.start();
        let of_type = match ctx.next() {
            Token::BracketOpen => {
                ctx.descend()?;
                let inner = Type::new_with_ctx(ctx)?;
                if let Token::BracketClose = ctx.next() {
                    ctx.ascend();
                    Type::ListType(ctx.arena.alloc(inner))
                } else {
                    return Err(Expected(ASTKind::ListType));
                }
            }
            Token::Name(name) => Type::NamedType(NamedType {
                name,
                loc: ctx.loc(start),
            }),
            _ => return Err(Expected(ASTKind::Type)),
        };
        if let Token::Exclam = ctx.peek() {
            ctx.next();
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinition<'a>> {
        let start = ctx.start();
        let variable = Variable::new_with_ctx(ctx)?;
        let of_type = if let Token::Colon = ctx.next() {
            Type::new_with_ctx(ctx)?
        } else {
            return Err(Expected(ASTKind::VariableDefinition));
        };
        // Default values and the directives of a variable definition are constant.
        ctx.in_var_def = true;
        let default_value = if let Token::Equal = ctx.peek() {
            ctx.next();
            Some(Value::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        ctx.in_var_def = false;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinitions<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            loop {
                children.push(VariableDefinition::new_with_ctx(ctx)?);
                if let Token::ParenClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
        }
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentDefinition<'a>> {
        let start = ctx.start();
        if let Token::Name("fragment") = ctx.next() {
            if let Token::Name("on") = ctx.peek() {
                return Err(Expected(ASTKind::NamedType));
            }
            let name = NamedType::new_with_ctx(ctx)?;
            let type_condition = if let Token::Name("on") = ctx.next() {
                NamedType::new_with_ctx(ctx)?
            } else {
                return Err(Expected(ASTKind::TypeCondition));
            };
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            Ok(FragmentDefinition {
                name,
                type_condition,
                directives,
                selection_set,
                loc: ctx.loc(start),
            })
        } else {
            Err(Expected(ASTKind::FragmentDefinition))
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationKind> {
        match ctx.next() {
            Token::Name("query") => Ok(OperationKind::Query),
            Token::Name("mutation") => Ok(OperationKind::Mutation),
            Token::Name("subscription") => Ok(OperationKind::Subscription),
            _ => Err(Expected(ASTKind::OperationKind)),
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        let start = ctx.start();
        if let Token::BraceOpen = ctx.peek() {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: VariableDefinitions::default_in(ctx.arena),
                directives: Directives::default_in(ctx.arena),
                selection_set,
                loc: ctx.loc(start),
            });
        }
        let operation = match OperationKind::new_with_ctx(ctx) {
            Ok(operation) => operation,
            Err(_) => return Err(Expected(ASTKind::OperationDefinition)),
        };
        let name = if let Token::Name(_) = ctx.peek() {
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Definition<'a>> {
        match ctx.peek() {
            Token::BraceOpen | Token::Name("query" | "mutation" | "subscription") => {
                OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
            }
            Token::Name("fragment") => {
                FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
            }
            _ => Err(Expected(ASTKind::Definition)),
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Document<'a>> {
        let start = ctx.start();
        let mut definitions = Vec::new_in(ctx.arena);
        loop {
            definitions.push(Definition::new_with_ctx(ctx)?);
            if let Token::End = ctx.peek() {
                break;
            }
        }
        Ok(Document {
            definitions,
            size_hint: ctx.source().len(),
            loc: ctx.loc(start),
        })
    }
}
