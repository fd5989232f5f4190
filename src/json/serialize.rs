use crate::ast::*;
use serde_json::{json, Value as JSValue};

/// Trait for converting AST Nodes to [serde_json::Value]s.
///
/// Nodes are converted to objects in the shape that the reference implementation GraphQL.js uses,
/// with a `kind` key naming the node, camel-cased keys for child nodes, and a `loc` key holding
/// the node's [`SourceSpan`] or `null`.
pub trait ToJson {
    /// Convert the current AST Node to a [serde_json::Value].
    fn to_json(&self) -> JSValue;
}

#[inline]
fn loc_to_json(loc: &Loc) -> JSValue {
    loc.span()
        .and_then(|span| serde_json::to_value(span).ok())
        .unwrap_or(JSValue::Null)
}

#[inline]
fn name_to_json(name: &str) -> JSValue {
    json!({ "kind": "Name", "value": name })
}

#[inline]
fn list_to_json<'b, T: ToJson + 'b>(items: impl IntoIterator<Item = &'b T>) -> JSValue {
    JSValue::Array(items.into_iter().map(|item| item.to_json()).collect())
}

impl<'a> ToJson for Variable<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "Variable",
            "name": name_to_json(self.name),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Value<'a> {
    fn to_json(&self) -> JSValue {
        match self {
            Value::Variable(variable) => variable.to_json(),
            Value::String(string) => json!({
                "kind": "StringValue",
                "value": string.value,
                "block": string.is_block(),
                "loc": loc_to_json(&string.loc),
            }),
            Value::Float(float) => json!({
                "kind": "FloatValue",
                "value": float.value,
                "loc": loc_to_json(&float.loc),
            }),
            Value::Int(int) => json!({
                "kind": "IntValue",
                "value": int.value,
                "loc": loc_to_json(&int.loc),
            }),
            Value::Boolean(boolean) => json!({
                "kind": "BooleanValue",
                "value": boolean.value,
                "loc": loc_to_json(&boolean.loc),
            }),
            Value::Enum(value) => json!({
                "kind": "EnumValue",
                "value": value.value,
                "loc": loc_to_json(&value.loc),
            }),
            Value::List(list) => json!({
                "kind": "ListValue",
                "values": list_to_json(list.children.iter()),
                "loc": loc_to_json(&list.loc),
            }),
            Value::Object(object) => json!({
                "kind": "ObjectValue",
                "fields": list_to_json(object.children.iter()),
                "loc": loc_to_json(&object.loc),
            }),
            Value::Null => json!({ "kind": "NullValue", "loc": JSValue::Null }),
        }
    }
}

impl<'a> ToJson for ObjectField<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "ObjectField",
            "name": name_to_json(self.name),
            "value": self.value.to_json(),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Argument<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "Argument",
            "name": name_to_json(self.name),
            "value": self.value.to_json(),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Directive<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "Directive",
            "name": name_to_json(self.name),
            "arguments": list_to_json(self.arguments.children.iter()),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for NamedType<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "NamedType",
            "name": name_to_json(self.name),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Type<'a> {
    fn to_json(&self) -> JSValue {
        match self {
            Type::NamedType(named) => named.to_json(),
            Type::ListType(inner) => json!({
                "kind": "ListType",
                "type": inner.to_json(),
                "loc": JSValue::Null,
            }),
            Type::NonNullType(inner) => json!({
                "kind": "NonNullType",
                "type": inner.to_json(),
                "loc": JSValue::Null,
            }),
        }
    }
}

impl<'a> ToJson for VariableDefinition<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "VariableDefinition",
            "variable": self.variable.to_json(),
            "type": self.of_type.to_json(),
            "defaultValue": self.default_value.as_ref().map(ToJson::to_json),
            "directives": list_to_json(self.directives.children.iter()),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Selection<'a> {
    fn to_json(&self) -> JSValue {
        match self {
            Selection::Field(field) => field.to_json(),
            Selection::FragmentSpread(spread) => spread.to_json(),
            Selection::InlineFragment(fragment) => fragment.to_json(),
        }
    }
}

impl<'a> ToJson for SelectionSet<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "SelectionSet",
            "selections": list_to_json(self.selections.iter()),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Field<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "Field",
            "alias": self.alias.map(name_to_json),
            "name": name_to_json(self.name),
            "arguments": list_to_json(self.arguments.children.iter()),
            "directives": list_to_json(self.directives.children.iter()),
            "selectionSet": self.selection_set.as_ref().map(ToJson::to_json),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for FragmentSpread<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "FragmentSpread",
            "name": name_to_json(self.name.name),
            "directives": list_to_json(self.directives.children.iter()),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for InlineFragment<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "InlineFragment",
            "typeCondition": self.type_condition.as_ref().map(ToJson::to_json),
            "directives": list_to_json(self.directives.children.iter()),
            "selectionSet": self.selection_set.to_json(),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for FragmentDefinition<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "FragmentDefinition",
            "name": name_to_json(self.name.name),
            "typeCondition": self.type_condition.to_json(),
            "directives": list_to_json(self.directives.children.iter()),
            "selectionSet": self.selection_set.to_json(),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for OperationDefinition<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "OperationDefinition",
            "operation": self.operation,
            "name": self.name.as_ref().map(|name| name_to_json(name.name)),
            "variableDefinitions": list_to_json(self.variable_definitions.children.iter()),
            "directives": list_to_json(self.directives.children.iter()),
            "selectionSet": self.selection_set.to_json(),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Definition<'a> {
    fn to_json(&self) -> JSValue {
        match self {
            Definition::Operation(operation) => operation.to_json(),
            Definition::Fragment(fragment) => fragment.to_json(),
        }
    }
}

impl<'a> ToJson for Document<'a> {
    fn to_json(&self) -> JSValue {
        json!({
            "kind": "Document",
            "definitions": list_to_json(self.definitions.iter()),
            "loc": loc_to_json(&self.loc),
        })
    }
}

impl<'a> ToJson for Node<'a> {
    fn to_json(&self) -> JSValue {
        match self {
            Node::Document(document) => document.to_json(),
            Node::OperationDefinition(operation) => operation.to_json(),
            Node::FragmentDefinition(fragment) => fragment.to_json(),
            Node::VariableDefinition(var_def) => var_def.to_json(),
            Node::SelectionSet(selection_set) => selection_set.to_json(),
            Node::Field(field) => field.to_json(),
            Node::FragmentSpread(spread) => spread.to_json(),
            Node::InlineFragment(fragment) => fragment.to_json(),
            Node::Argument(argument) => argument.to_json(),
            Node::Directive(directive) => directive.to_json(),
            Node::Value(value) => value.to_json(),
            Node::ObjectField(field) => field.to_json(),
            Node::Type(of_type) => of_type.to_json(),
            Node::NamedType(named) => named.to_json(),
            Node::Name(name) => name_to_json(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "a: b(x: 1)").unwrap();
        assert_eq!(
            field.to_json(),
            json!({
                "kind": "Field",
                "alias": { "kind": "Name", "value": "a" },
                "name": { "kind": "Name", "value": "b" },
                "arguments": [{
                    "kind": "Argument",
                    "name": { "kind": "Name", "value": "x" },
                    "value": {
                        "kind": "IntValue",
                        "value": "1",
                        "loc": { "start": 8, "end": 9, "line": 1, "column": 9 },
                    },
                    "loc": { "start": 5, "end": 9, "line": 1, "column": 6 },
                }],
                "directives": [],
                "selectionSet": null,
                "loc": { "start": 0, "end": 10, "line": 1, "column": 1 },
            })
        );
    }

    #[test]
    fn operation() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "mutation M($a: [Int!] = null) { a }").unwrap();
        let json = document.to_json();
        let operation = &json["definitions"][0];
        assert_eq!(operation["kind"], "OperationDefinition");
        assert_eq!(operation["operation"], "mutation");
        assert_eq!(operation["name"]["value"], "M");
        let var_def = &operation["variableDefinitions"][0];
        assert_eq!(var_def["defaultValue"]["kind"], "NullValue");
        assert_eq!(var_def["type"]["kind"], "ListType");
        assert_eq!(var_def["type"]["type"]["kind"], "NonNullType");
        assert_eq!(var_def["type"]["type"]["type"]["name"]["value"], "Int");
        assert_eq!(
            operation["selectionSet"]["selections"][0]["name"]["value"],
            "a"
        );
    }

    #[test]
    fn hand_built_nodes() {
        let ctx = ASTContext::new();
        let node = Node::from(Field::new_leaf(&ctx, "foo"));
        assert_eq!(node.to_json()["loc"], JSValue::Null);
        assert_eq!(
            Node::Name("foo").to_json(),
            json!({ "kind": "Name", "value": "foo" })
        );
    }
}
