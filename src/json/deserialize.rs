use crate::ast::*;
use crate::error::{Error, ErrorType, Result};
use bumpalo::collections::Vec;
use log::debug;
use logos::Logos;
use serde_json::{Map as JSMap, Value as JSValue};

/// Builds an AST node from its JSON representation, as produced by [`ToJson`](super::ToJson).
///
/// The JSON value must be an object tagged with a `kind` key, and so must all of its children.
/// Names are checked to be valid GraphQL names, numeric literals are checked to lex as a single
/// GraphQL number, selection sets mustn't be empty and variables aren't accepted inside of
/// default values or the directives of variable definitions. Nesting is limited to
/// [`DEFAULT_MAX_DEPTH`] in the same way the parser limits it. `loc` keys are optional and
/// malformed locations are dropped.
///
/// Any violation returns an [`Error`] of type [`ErrorType::InvalidNode`] whose message is the
/// offending JSON value.
pub fn node_from_json<'a>(ctx: &'a ASTContext, value: &JSValue) -> Result<Node<'a>> {
    Loader::new(ctx).node(value).map_err(invalid)
}

/// Loading stops at the first JSON value that's rejected.
type LoadResult<'v, T> = std::result::Result<T, &'v JSValue>;

#[cold]
fn invalid(value: &JSValue) -> Error {
    let message = value.to_string();
    debug!("Rejected JSON AST node: {}", message);
    Error::new(message, Some(ErrorType::InvalidNode))
}

#[inline]
fn kind_of(value: &JSValue) -> Option<&str> {
    value.get("kind").and_then(JSValue::as_str)
}

/// Returns a JSON value's key, treating explicit `null`s as missing.
#[inline]
fn optional<'v>(obj: &'v JSMap<String, JSValue>, key: &str) -> Option<&'v JSValue> {
    obj.get(key).filter(|value| !value.is_null())
}

#[inline]
fn required<'v>(
    obj: &'v JSMap<String, JSValue>,
    value: &'v JSValue,
    key: &str,
) -> LoadResult<'v, &'v JSValue> {
    optional(obj, key).ok_or(value)
}

/// Returns a list of child nodes, where a missing list is treated as empty.
#[inline]
fn items<'v>(obj: &'v JSMap<String, JSValue>, key: &str) -> LoadResult<'v, &'v [JSValue]> {
    match obj.get(key) {
        None | Some(JSValue::Null) => Ok(&[]),
        Some(JSValue::Array(items)) => Ok(items),
        Some(other) => Err(other),
    }
}

#[inline]
fn loc_of(obj: &JSMap<String, JSValue>) -> Loc {
    Loc(optional(obj, "loc").and_then(|loc| serde_json::from_value::<SourceSpan>(loc.clone()).ok()))
}

/// A selection that's waiting for its selection set to be loaded.
enum Pending<'a> {
    Field(Field<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Pending<'a> {
    #[inline]
    fn finish(self, selection_set: SelectionSet<'a>) -> Selection<'a> {
        match self {
            Pending::Field(mut field) => {
                field.selection_set = Some(selection_set);
                Selection::Field(field)
            }
            Pending::InlineFragment(mut fragment) => {
                fragment.selection_set = selection_set;
                Selection::InlineFragment(fragment)
            }
        }
    }
}

/// A selection set whose selections are being loaded.
struct Frame<'a, 'v> {
    items: std::slice::Iter<'v, JSValue>,
    selections: Vec<'a, Selection<'a>>,
    loc: Loc,
    owner: Option<Pending<'a>>,
}

struct Loader<'a> {
    ctx: &'a ASTContext,
    depth: usize,
    in_const: bool,
}

impl<'a> Loader<'a> {
    fn new(ctx: &'a ASTContext) -> Self {
        Loader {
            ctx,
            depth: 0,
            in_const: false,
        }
    }

    #[inline]
    fn descend<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, ()> {
        self.depth += 1;
        if self.depth > DEFAULT_MAX_DEPTH {
            Err(value)
        } else {
            Ok(())
        }
    }

    #[inline]
    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Returns the node's object if its `kind` matches the given one.
    #[inline]
    fn object<'v>(&self, value: &'v JSValue, kind: &str) -> LoadResult<'v, &'v JSMap<String, JSValue>> {
        match value {
            JSValue::Object(obj) if kind_of(value) == Some(kind) => Ok(obj),
            _ => Err(value),
        }
    }

    fn node<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Node<'a>> {
        match kind_of(value) {
            Some("Document") => self.document(value).map(Node::Document),
            Some("OperationDefinition") => self
                .operation_definition(value)
                .map(Node::OperationDefinition),
            Some("FragmentDefinition") => self
                .fragment_definition(value)
                .map(Node::FragmentDefinition),
            Some("VariableDefinition") => self
                .variable_definition(value)
                .map(Node::VariableDefinition),
            Some("SelectionSet") => self.selection_set(value).map(Node::SelectionSet),
            Some("Field") => self.field(value).map(Node::Field),
            Some("FragmentSpread") => self.fragment_spread(value).map(Node::FragmentSpread),
            Some("InlineFragment") => self.inline_fragment(value).map(Node::InlineFragment),
            Some("Argument") => self.argument(value).map(Node::Argument),
            Some("Directive") => self.directive(value).map(Node::Directive),
            Some("ObjectField") => self.object_field(value).map(Node::ObjectField),
            Some("NamedType") => self.named_type(value).map(Node::NamedType),
            Some("ListType" | "NonNullType") => self.of_type(value).map(Node::Type),
            Some("Name") => self.name(value).map(Node::Name),
            Some(
                "Variable" | "IntValue" | "FloatValue" | "StringValue" | "BooleanValue"
                | "NullValue" | "EnumValue" | "ListValue" | "ObjectValue",
            ) => self.value(value).map(Node::Value),
            _ => Err(value),
        }
    }

    fn name<'v>(&self, value: &'v JSValue) -> LoadResult<'v, &'a str> {
        let obj = self.object(value, "Name")?;
        match obj.get("value").and_then(JSValue::as_str) {
            Some(name) if is_valid_name(name) => Ok(self.ctx.alloc_str(name)),
            _ => Err(value),
        }
    }

    fn named_type<'v>(&self, value: &'v JSValue) -> LoadResult<'v, NamedType<'a>> {
        let obj = self.object(value, "NamedType")?;
        Ok(NamedType {
            name: self.name(required(obj, value, "name")?)?,
            loc: loc_of(obj),
        })
    }

    fn of_type<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Type<'a>> {
        match kind_of(value) {
            Some("NamedType") => self.named_type(value).map(Type::NamedType),
            Some("ListType") => {
                let obj = self.object(value, "ListType")?;
                self.descend(value)?;
                let inner = self.of_type(required(obj, value, "type")?)?;
                self.ascend();
                Ok(inner.into_list(self.ctx))
            }
            Some("NonNullType") => {
                let obj = self.object(value, "NonNullType")?;
                match self.of_type(required(obj, value, "type")?)? {
                    Type::NonNullType(_) => Err(value),
                    inner => Ok(inner.into_nonnull(self.ctx)),
                }
            }
            _ => Err(value),
        }
    }

    fn variable<'v>(&self, value: &'v JSValue) -> LoadResult<'v, Variable<'a>> {
        let obj = self.object(value, "Variable")?;
        if self.in_const {
            return Err(value);
        }
        Ok(Variable {
            name: self.name(required(obj, value, "name")?)?,
            loc: loc_of(obj),
        })
    }

    /// Checks that a numeric literal lexes as exactly one token of the expected kind.
    fn is_number(&self, text: &str, float: bool) -> bool {
        let mut lex = Token::lexer_with_extras(
            text,
            Extras {
                arena: &self.ctx.arena,
            },
        );
        let is_kind = match lex.next() {
            Some(Token::Integer(_)) => !float,
            Some(Token::Float(_)) => float,
            _ => false,
        };
        is_kind && lex.span() == (0..text.len()) && lex.next().is_none()
    }

    fn number<'v>(
        &self,
        obj: &'v JSMap<String, JSValue>,
        value: &'v JSValue,
        float: bool,
    ) -> LoadResult<'v, &'a str> {
        match obj.get("value").and_then(JSValue::as_str) {
            Some(text) if self.is_number(text, float) => Ok(self.ctx.alloc_str(text)),
            _ => Err(value),
        }
    }

    fn value<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Value<'a>> {
        let obj = match value {
            JSValue::Object(obj) => obj,
            _ => return Err(value),
        };
        match kind_of(value) {
            Some("Variable") => self.variable(value).map(Value::Variable),
            Some("IntValue") => Ok(Value::Int(IntValue {
                value: self.number(obj, value, false)?,
                loc: loc_of(obj),
            })),
            Some("FloatValue") => Ok(Value::Float(FloatValue {
                value: self.number(obj, value, true)?,
                loc: loc_of(obj),
            })),
            Some("StringValue") => match obj.get("value").and_then(JSValue::as_str) {
                Some(string) => Ok(Value::String(StringValue {
                    value: self.ctx.alloc_str(string),
                    loc: loc_of(obj),
                })),
                None => Err(value),
            },
            Some("BooleanValue") => match obj.get("value").and_then(JSValue::as_bool) {
                Some(boolean) => Ok(Value::Boolean(BooleanValue {
                    value: boolean,
                    loc: loc_of(obj),
                })),
                None => Err(value),
            },
            Some("EnumValue") => match obj.get("value").and_then(JSValue::as_str) {
                Some(name)
                    if is_valid_name(name) && !matches!(name, "true" | "false" | "null") =>
                {
                    Ok(Value::Enum(EnumValue {
                        value: self.ctx.alloc_str(name),
                        loc: loc_of(obj),
                    }))
                }
                _ => Err(value),
            },
            Some("NullValue") => Ok(Value::Null),
            Some("ListValue") => {
                self.descend(value)?;
                let mut children = Vec::new_in(&self.ctx.arena);
                for item in items(obj, "values")? {
                    children.push(self.value(item)?);
                }
                self.ascend();
                Ok(Value::List(ListValue {
                    children,
                    loc: loc_of(obj),
                }))
            }
            Some("ObjectValue") => {
                self.descend(value)?;
                let mut children = Vec::new_in(&self.ctx.arena);
                for field in items(obj, "fields")? {
                    children.push(self.object_field(field)?);
                }
                self.ascend();
                Ok(Value::Object(ObjectValue {
                    children,
                    loc: loc_of(obj),
                }))
            }
            _ => Err(value),
        }
    }

    fn object_field<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, ObjectField<'a>> {
        let obj = self.object(value, "ObjectField")?;
        Ok(ObjectField {
            name: self.name(required(obj, value, "name")?)?,
            value: self.value(required(obj, value, "value")?)?,
            loc: loc_of(obj),
        })
    }

    fn argument<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Argument<'a>> {
        let obj = self.object(value, "Argument")?;
        Ok(Argument {
            name: self.name(required(obj, value, "name")?)?,
            value: self.value(required(obj, value, "value")?)?,
            loc: loc_of(obj),
        })
    }

    fn arguments<'v>(&mut self, obj: &'v JSMap<String, JSValue>) -> LoadResult<'v, Arguments<'a>> {
        let mut children = Vec::new_in(&self.ctx.arena);
        for argument in items(obj, "arguments")? {
            children.push(self.argument(argument)?);
        }
        Ok(Arguments { children })
    }

    fn directive<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Directive<'a>> {
        let obj = self.object(value, "Directive")?;
        Ok(Directive {
            name: self.name(required(obj, value, "name")?)?,
            arguments: self.arguments(obj)?,
            loc: loc_of(obj),
        })
    }

    fn directives<'v>(&mut self, obj: &'v JSMap<String, JSValue>) -> LoadResult<'v, Directives<'a>> {
        let mut children = Vec::new_in(&self.ctx.arena);
        for directive in items(obj, "directives")? {
            children.push(self.directive(directive)?);
        }
        Ok(Directives { children })
    }

    /// Starts loading a selection set that belongs to `owner`.
    fn open<'v>(
        &mut self,
        value: &'v JSValue,
        owner: Option<Pending<'a>>,
    ) -> LoadResult<'v, Frame<'a, 'v>> {
        let obj = self.object(value, "SelectionSet")?;
        let list = items(obj, "selections")?;
        if list.is_empty() {
            return Err(value);
        }
        self.descend(value)?;
        Ok(Frame {
            items: list.iter(),
            selections: Vec::with_capacity_in(list.len(), &self.ctx.arena),
            loc: loc_of(obj),
            owner,
        })
    }

    /// Loads a selection set and all selection sets nested inside of it.
    ///
    /// Nested selection sets are kept on an explicit stack of frames rather than on the call
    /// stack, so that deeply nested documents don't exhaust the thread's stack.
    fn selection_set<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, SelectionSet<'a>> {
        let mut stack = std::vec::Vec::new();
        stack.push(self.open(value, None)?);
        while let Some(frame) = stack.last_mut() {
            if let Some(item) = frame.items.next() {
                match kind_of(item) {
                    Some("Field") => {
                        let (field, selection_set) = self.field_head(item)?;
                        match selection_set {
                            Some(selection_set) => {
                                let frame = self.open(selection_set, Some(Pending::Field(field)))?;
                                stack.push(frame);
                            }
                            None => frame.selections.push(Selection::Field(field)),
                        }
                    }
                    Some("FragmentSpread") => {
                        let spread = self.fragment_spread(item)?;
                        frame.selections.push(Selection::FragmentSpread(spread));
                    }
                    Some("InlineFragment") => {
                        let (fragment, selection_set) = self.inline_fragment_head(item)?;
                        let frame =
                            self.open(selection_set, Some(Pending::InlineFragment(fragment)))?;
                        stack.push(frame);
                    }
                    _ => return Err(item),
                }
            } else {
                let Frame {
                    selections,
                    loc,
                    owner,
                    ..
                } = match stack.pop() {
                    Some(frame) => frame,
                    None => break,
                };
                self.ascend();
                let selection_set = SelectionSet { selections, loc };
                match (owner, stack.last_mut()) {
                    (Some(owner), Some(outer)) => outer.selections.push(owner.finish(selection_set)),
                    _ => return Ok(selection_set),
                }
            }
        }
        Err(value)
    }

    /// Loads a field without its selection set, which is returned alongside it.
    fn field_head<'v>(
        &mut self,
        value: &'v JSValue,
    ) -> LoadResult<'v, (Field<'a>, Option<&'v JSValue>)> {
        let obj = self.object(value, "Field")?;
        let alias = match optional(obj, "alias") {
            Some(alias) => Some(self.name(alias)?),
            None => None,
        };
        let field = Field {
            alias,
            name: self.name(required(obj, value, "name")?)?,
            arguments: self.arguments(obj)?,
            directives: self.directives(obj)?,
            selection_set: None,
            loc: loc_of(obj),
        };
        Ok((field, optional(obj, "selectionSet")))
    }

    fn field<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Field<'a>> {
        let (mut field, selection_set) = self.field_head(value)?;
        if let Some(selection_set) = selection_set {
            field.selection_set = Some(self.selection_set(selection_set)?);
        }
        Ok(field)
    }

    /// Names of fragments are stored as [`NamedType`]s, but appear as plain names in JSON.
    fn fragment_name<'v>(
        &self,
        obj: &'v JSMap<String, JSValue>,
        value: &'v JSValue,
    ) -> LoadResult<'v, NamedType<'a>> {
        let name = required(obj, value, "name")?;
        match self.name(name)? {
            "on" => Err(name),
            name => Ok(NamedType::from(name)),
        }
    }

    fn fragment_spread<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, FragmentSpread<'a>> {
        let obj = self.object(value, "FragmentSpread")?;
        Ok(FragmentSpread {
            name: self.fragment_name(obj, value)?,
            directives: self.directives(obj)?,
            loc: loc_of(obj),
        })
    }

    /// Loads an inline fragment with an empty selection set, and returns its selection set.
    fn inline_fragment_head<'v>(
        &mut self,
        value: &'v JSValue,
    ) -> LoadResult<'v, (InlineFragment<'a>, &'v JSValue)> {
        let obj = self.object(value, "InlineFragment")?;
        let type_condition = match optional(obj, "typeCondition") {
            Some(type_condition) => Some(self.named_type(type_condition)?),
            None => None,
        };
        let fragment = InlineFragment {
            type_condition,
            directives: self.directives(obj)?,
            selection_set: SelectionSet::default_in(&self.ctx.arena),
            loc: loc_of(obj),
        };
        Ok((fragment, required(obj, value, "selectionSet")?))
    }

    fn inline_fragment<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, InlineFragment<'a>> {
        let (mut fragment, selection_set) = self.inline_fragment_head(value)?;
        fragment.selection_set = self.selection_set(selection_set)?;
        Ok(fragment)
    }

    fn fragment_definition<'v>(
        &mut self,
        value: &'v JSValue,
    ) -> LoadResult<'v, FragmentDefinition<'a>> {
        let obj = self.object(value, "FragmentDefinition")?;
        Ok(FragmentDefinition {
            name: self.fragment_name(obj, value)?,
            type_condition: self.named_type(required(obj, value, "typeCondition")?)?,
            directives: self.directives(obj)?,
            selection_set: self.selection_set(required(obj, value, "selectionSet")?)?,
            loc: loc_of(obj),
        })
    }

    fn variable_definition<'v>(
        &mut self,
        value: &'v JSValue,
    ) -> LoadResult<'v, VariableDefinition<'a>> {
        let obj = self.object(value, "VariableDefinition")?;
        let variable = self.variable(required(obj, value, "variable")?)?;
        let of_type = self.of_type(required(obj, value, "type")?)?;
        // Default values and the directives of a variable definition are constant.
        self.in_const = true;
        let default_value = match optional(obj, "defaultValue") {
            Some(default_value) => Some(self.value(default_value)?),
            None => None,
        };
        let directives = self.directives(obj)?;
        self.in_const = false;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
            loc: loc_of(obj),
        })
    }

    fn operation_definition<'v>(
        &mut self,
        value: &'v JSValue,
    ) -> LoadResult<'v, OperationDefinition<'a>> {
        let obj = self.object(value, "OperationDefinition")?;
        let operation = required(obj, value, "operation")?;
        let operation =
            serde_json::from_value::<OperationKind>(operation.clone()).map_err(|_| operation)?;
        let name = match optional(obj, "name") {
            Some(name) => Some(NamedType::from(self.name(name)?)),
            None => None,
        };
        let mut children = Vec::new_in(&self.ctx.arena);
        for var_def in items(obj, "variableDefinitions")? {
            children.push(self.variable_definition(var_def)?);
        }
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions: VariableDefinitions { children },
            directives: self.directives(obj)?,
            selection_set: self.selection_set(required(obj, value, "selectionSet")?)?,
            loc: loc_of(obj),
        })
    }

    fn document<'v>(&mut self, value: &'v JSValue) -> LoadResult<'v, Document<'a>> {
        let obj = self.object(value, "Document")?;
        let list = items(obj, "definitions")?;
        if list.is_empty() {
            return Err(value);
        }
        let mut definitions = Vec::new_in(&self.ctx.arena);
        for definition in list {
            definitions.push(match kind_of(definition) {
                Some("OperationDefinition") => {
                    Definition::Operation(self.operation_definition(definition)?)
                }
                Some("FragmentDefinition") => {
                    Definition::Fragment(self.fragment_definition(definition)?)
                }
                _ => return Err(definition),
            });
        }
        Ok(Document {
            definitions,
            size_hint: 0,
            loc: loc_of(obj),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::ToJson;
    use serde_json::json;

    #[test]
    fn invalid_nodes() {
        let ctx = ASTContext::new();
        let error = node_from_json(&ctx, &json!({ "random": "Data" })).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);
        assert_eq!(error.to_string(), "Invalid AST Node: {\"random\":\"Data\"}");

        assert!(node_from_json(&ctx, &json!("Field")).is_err());
        assert!(node_from_json(&ctx, &json!({ "kind": "Field" })).is_err());
        assert!(node_from_json(&ctx, &json!({ "kind": "Name", "value": "1a" })).is_err());
        assert!(node_from_json(&ctx, &json!({ "kind": "IntValue", "value": "1.0" })).is_err());
        assert!(node_from_json(&ctx, &json!({ "kind": "IntValue", "value": " 1" })).is_err());
        assert!(node_from_json(&ctx, &json!({ "kind": "FloatValue", "value": "1" })).is_err());
        assert!(node_from_json(&ctx, &json!({ "kind": "EnumValue", "value": "null" })).is_err());
    }

    #[test]
    fn reports_innermost_node() {
        let ctx = ASTContext::new();
        let name = json!({ "kind": "Name", "value": "not valid" });
        let error = node_from_json(&ctx, &json!({ "kind": "Field", "name": name })).unwrap_err();
        assert_eq!(error.message(), name.to_string());
    }

    #[test]
    fn field_from_json() {
        let ctx = ASTContext::new();
        let node = node_from_json(
            &ctx,
            &json!({
                "kind": "Field",
                "name": { "kind": "Name", "value": "foo" },
            }),
        )
        .unwrap();
        assert_eq!(node, Node::Field(Field::new_leaf(&ctx, "foo")));
        assert_eq!(node.print(), "foo");
    }

    #[test]
    fn empty_selection_sets() {
        let ctx = ASTContext::new();
        let selection_set = json!({ "kind": "SelectionSet", "selections": [] });
        assert!(node_from_json(&ctx, &selection_set).is_err());
        let field = json!({
            "kind": "Field",
            "name": { "kind": "Name", "value": "foo" },
            "selectionSet": selection_set,
        });
        assert!(node_from_json(&ctx, &field).is_err());
    }

    #[test]
    fn constant_default_values() {
        let ctx = ASTContext::new();
        let var_def = json!({
            "kind": "VariableDefinition",
            "variable": { "kind": "Variable", "name": { "kind": "Name", "value": "a" } },
            "type": { "kind": "NamedType", "name": { "kind": "Name", "value": "Int" } },
            "defaultValue": { "kind": "Variable", "name": { "kind": "Name", "value": "b" } },
        });
        assert!(node_from_json(&ctx, &var_def).is_err());
    }

    #[test]
    fn nested_non_null_types() {
        let ctx = ASTContext::new();
        let named = json!({ "kind": "NamedType", "name": { "kind": "Name", "value": "T" } });
        let non_null = json!({ "kind": "NonNullType", "type": named });
        assert_eq!(node_from_json(&ctx, &non_null).unwrap().print(), "T!");
        let twice = json!({ "kind": "NonNullType", "type": non_null });
        assert!(node_from_json(&ctx, &twice).is_err());
    }

    #[test]
    fn depth_limit() {
        let ctx = ASTContext::new();
        let mut value = json!({ "kind": "NullValue" });
        for _ in 0..DEFAULT_MAX_DEPTH + 1 {
            value = json!({ "kind": "ListValue", "values": [value] });
        }
        assert!(node_from_json(&ctx, &value).is_err());
    }

    #[test]
    fn constant_variable_definition_directives() {
        let ctx = ASTContext::new();
        let var_def = json!({
            "kind": "VariableDefinition",
            "variable": { "kind": "Variable", "name": { "kind": "Name", "value": "a" } },
            "type": { "kind": "NamedType", "name": { "kind": "Name", "value": "Int" } },
            "directives": [{
                "kind": "Directive",
                "name": { "kind": "Name", "value": "dir" },
                "arguments": [{
                    "kind": "Argument",
                    "name": { "kind": "Name", "value": "x" },
                    "value": { "kind": "Variable", "name": { "kind": "Name", "value": "b" } },
                }],
            }],
        });
        let error = node_from_json(&ctx, &var_def).unwrap_err();
        assert_eq!(error.message(), var_def["directives"][0]["arguments"][0]["value"].to_string());
    }

    #[test]
    fn deeply_nested_selection_sets() {
        let ctx = ASTContext::new();
        let source = "{ a ".repeat(DEFAULT_MAX_DEPTH) + &"}".repeat(DEFAULT_MAX_DEPTH);
        let document = Document::parse(&ctx, &source).unwrap();
        let node = node_from_json(&ctx, &document.to_json()).unwrap();
        assert_eq!(node.print(), document.print());

        let leaf = json!({ "kind": "Field", "name": { "kind": "Name", "value": "a" } });
        let mut selection_set = json!({ "kind": "SelectionSet", "selections": [leaf] });
        for _ in 0..DEFAULT_MAX_DEPTH {
            selection_set = json!({
                "kind": "SelectionSet",
                "selections": [{
                    "kind": "InlineFragment",
                    "selectionSet": selection_set,
                }],
            });
        }
        assert!(node_from_json(&ctx, &selection_set).is_err());
    }

    #[test]
    fn non_null_types_do_not_count_towards_depth() {
        let ctx = ASTContext::new();
        let depth = 300;
        let source = format!(
            "query ($a: {}Int!{}) {{ a }}",
            "[".repeat(depth),
            "]!".repeat(depth)
        );
        let document = Document::parse(&ctx, &source).unwrap();
        let node = node_from_json(&ctx, &document.to_json()).unwrap();
        assert_eq!(node.print(), document.print());
    }

    #[test]
    fn round_trip() {
        let ctx = ASTContext::new();
        let source = "query Q($a: [Int!]! = [1, 2], $b: In = {x: 1.5, y: \"s\"}) @d(x: ENUM) {\n  alias: field(arg: $a) {\n    ... on T {\n      x\n    }\n    ...Frag @include(if: true)\n  }\n}\n\nfragment Frag on T {\n  y(z: null)\n}\n";
        let document = Document::parse(&ctx, source).unwrap();
        let node = node_from_json(&ctx, &document.to_json()).unwrap();
        assert_eq!(node, Node::Document(document.clone()));
        assert_eq!(node.print(), source);
        match node {
            Node::Document(loaded) => {
                assert_eq!(
                    loaded.definitions[0].operation().unwrap().loc.span(),
                    document.definitions[0].operation().unwrap().loc.span()
                );
            }
            _ => panic!("expected a document"),
        }
    }
}
