//! # JSON Interchange
//!
//! The `graphql_query_syntax::json` module converts AST nodes from and to `serde_json` values. The
//! JSON representation follows the object shape of the GraphQL.js reference implementation, where
//! each node is an object tagged with a `kind` key, so ASTs can be handed across process or
//! language boundaries and printed on the other side.
//!
//! - [ToJson] converts any AST node into a JSON value using a `to_json` method.
//! - [node_from_json] validates a JSON value and builds the AST node it describes.
//! - [print_json] is shorthand for building a node from JSON and printing it.
//!
//! ```
//! use graphql_query_syntax::{ast::*, json::*};
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "{ field }").unwrap();
//! let json = document.to_json();
//! assert_eq!(json["kind"], "Document");
//! assert_eq!(print_json(&json).unwrap(), "{\n  field\n}\n");
//! ```

mod deserialize;
mod serialize;

pub use deserialize::node_from_json;
pub use serialize::ToJson;

use crate::ast::{ASTContext, PrintNode};
use crate::error::Result;
use log::trace;

/// Builds an AST node from its JSON representation and prints it to source text.
///
/// Fails with an [`ErrorType::InvalidNode`](crate::error::ErrorType::InvalidNode) error when the
/// JSON value doesn't describe a valid AST node. See [node_from_json].
pub fn print_json(value: &serde_json::Value) -> Result<String> {
    let ctx = ASTContext::new();
    let node = node_from_json(&ctx, value)?;
    trace!("Printing {} from JSON", node.kind());
    Ok(node.print())
}
