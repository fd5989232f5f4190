//! `graphql_query_syntax`
//! =========
//!
//! _Parse GraphQL query documents into an AST and print them back as canonical text._
//!
//! The **`graphql_query_syntax`** library covers the syntax layer of the GraphQL query language:
//!
//! - A lexer that turns source text into tokens
//! - A recursive descent parser that builds an arena-allocated AST from those tokens
//! - A printer that turns any AST node back into consistently formatted source text
//!
//! Printing is stable: a printed document parses back into a tree that's structurally equal to the
//! original, and printing that tree again yields the same text. This makes the crate a good fit for
//! intermediary GraphQL layers that normalise, inspect, or rewrite queries between GraphQL clients
//! and GraphQL servers.
//!
//! The crate doesn't validate documents against a schema, doesn't execute them, and doesn't
//! support the GraphQL Schema Definition Language.
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
