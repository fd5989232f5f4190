//! # GraphQL Query Language AST
//!
//! The `graphql_query_syntax::ast` module contains the GraphQL query language AST and traits to
//! parse and print the AST. The AST implemented in this crate is specialized to only implement
//! the client-side GraphQL query language that clients use to make requests to a GraphQL service.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_query_syntax::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse(&ctx, "query { field }").unwrap();
//!
//! // Print the Document node to an output String
//! let output = ast.print();
//! assert_eq!(output, "{\n  field\n}\n");
//!
//! // Printed documents parse back into the same tree
//! assert_eq!(parse(&ctx, &output).unwrap(), ast);
//! ```
//!
//! Parsed nodes carry a [`Loc`] with their position in the source text. Locations are ignored
//! when nodes are compared, so trees compare structurally.

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod ast_util;
mod lexer;
mod parser;
mod printer;


pub use ast::*;
pub use ast_kind::{ASTKind, Node};
pub use ast_util::is_valid_name;
pub use parser::{ParseNode, ParseOptions, DEFAULT_MAX_DEPTH};
pub use printer::PrintNode;

pub(crate) use lexer::{Extras, Token};

use crate::error::Result;

/// Parses a query language document from source text into the given AST context.
///
/// This is shorthand for `Document::parse`.
#[inline]
pub fn parse<'a, T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Document<'a>> {
    Document::parse(ctx, source)
}

/// Prints any AST node to source text.
///
/// This is shorthand for `PrintNode::print`.
#[inline]
pub fn print<N: PrintNode + ?Sized>(node: &N) -> String {
    node.print()
}
