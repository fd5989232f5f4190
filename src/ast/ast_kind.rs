use super::ast::*;
use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// When parsing this enum is used to indicate what AST node encountered a parsing error.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::OperationKind]
    OperationKind,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// The `on Type` condition of fragments
    TypeCondition,
    /// See: [crate::ast::VariableDefinitions]
    VariableDefinitions,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: `ListType` on [crate::ast::Type]
    ListType,
    /// See: `NonNullType` on [crate::ast::Type]
    NonNullType,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Selection]
    Selection,
    /// See: [crate::ast::Directives]
    Directives,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Arguments]
    Arguments,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::ObjectValue]
    Object,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::FloatValue]
    Float,
    /// See: [crate::ast::IntValue]
    Int,
    /// See: [crate::ast::BooleanValue]
    Boolean,
    /// See: [crate::ast::EnumValue]
    Enum,
    /// See: [crate::ast::ListValue]
    List,
    /// See: `Null` on [crate::ast::Value]
    Null,
    /// A bare identifier
    Name,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Definition => f.write_str("Definition"),
            ASTKind::Document => f.write_str("Document"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::OperationKind => f.write_str("Operation Kind"),
            ASTKind::FragmentDefinition => f.write_str("Fragment Definition"),
            ASTKind::TypeCondition => f.write_str("Type Condition"),
            ASTKind::VariableDefinitions => f.write_str("Variable Definitions"),
            ASTKind::VariableDefinition => f.write_str("Variable Definition"),
            ASTKind::Type => f.write_str("Type"),
            ASTKind::NamedType => f.write_str("Type Name"),
            ASTKind::ListType => f.write_str("List Type"),
            ASTKind::NonNullType => f.write_str("Non-null Type"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::FragmentSpread => f.write_str("Fragment Spread"),
            ASTKind::InlineFragment => f.write_str("Inline Fragment"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Selection => f.write_str("Selection"),
            ASTKind::Directives => f.write_str("Directives"),
            ASTKind::Directive => f.write_str("Directive"),
            ASTKind::Arguments => f.write_str("Arguments"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::Object => f.write_str("Object"),
            ASTKind::ObjectField => f.write_str("Object Field"),
            ASTKind::Value => f.write_str("Value"),
            ASTKind::Variable => f.write_str("Variable"),
            ASTKind::String => f.write_str("String"),
            ASTKind::Float => f.write_str("Float"),
            ASTKind::Int => f.write_str("Integer"),
            ASTKind::Boolean => f.write_str("Boolean"),
            ASTKind::Enum => f.write_str("Enum"),
            ASTKind::List => f.write_str("List"),
            ASTKind::Null => f.write_str("Null"),
            ASTKind::Name => f.write_str("Name"),
        }
    }
}

/// Any single node of the AST.
///
/// This is the closed set of nodes that can be handed to the printer on their own, e.g. after
/// they've been assembled dynamically from JSON. List wrappers such as [`Arguments`] aren't
/// nodes of their own; their items are.
#[derive(Debug, PartialEq, Clone)]
pub enum Node<'a> {
    Document(Document<'a>),
    OperationDefinition(OperationDefinition<'a>),
    FragmentDefinition(FragmentDefinition<'a>),
    VariableDefinition(VariableDefinition<'a>),
    SelectionSet(SelectionSet<'a>),
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
    Argument(Argument<'a>),
    Directive(Directive<'a>),
    Value(Value<'a>),
    ObjectField(ObjectField<'a>),
    Type(Type<'a>),
    NamedType(NamedType<'a>),
    Name(&'a str),
}

impl<'a> Node<'a> {
    /// Returns the kind of the contained node. Values and types report their specific variant.
    pub fn kind(&self) -> ASTKind {
        match self {
            Node::Document(_) => ASTKind::Document,
            Node::OperationDefinition(_) => ASTKind::OperationDefinition,
            Node::FragmentDefinition(_) => ASTKind::FragmentDefinition,
            Node::VariableDefinition(_) => ASTKind::VariableDefinition,
            Node::SelectionSet(_) => ASTKind::SelectionSet,
            Node::Field(_) => ASTKind::Field,
            Node::FragmentSpread(_) => ASTKind::FragmentSpread,
            Node::InlineFragment(_) => ASTKind::InlineFragment,
            Node::Argument(_) => ASTKind::Argument,
            Node::Directive(_) => ASTKind::Directive,
            Node::Value(value) => match value {
                Value::Variable(_) => ASTKind::Variable,
                Value::String(_) => ASTKind::String,
                Value::Float(_) => ASTKind::Float,
                Value::Int(_) => ASTKind::Int,
                Value::Boolean(_) => ASTKind::Boolean,
                Value::Enum(_) => ASTKind::Enum,
                Value::List(_) => ASTKind::List,
                Value::Object(_) => ASTKind::Object,
                Value::Null => ASTKind::Null,
            },
            Node::ObjectField(_) => ASTKind::ObjectField,
            Node::Type(of_type) => match of_type {
                Type::NamedType(_) => ASTKind::NamedType,
                Type::ListType(_) => ASTKind::ListType,
                Type::NonNullType(_) => ASTKind::NonNullType,
            },
            Node::NamedType(_) => ASTKind::NamedType,
            Node::Name(_) => ASTKind::Name,
        }
    }
}

macro_rules! node_from {
    ($($variant:ident),*) => {
        $(
            impl<'a> From<$variant<'a>> for Node<'a> {
                #[inline]
                fn from(node: $variant<'a>) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

node_from!(
    Document,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    Argument,
    Directive,
    Value,
    ObjectField,
    Type,
    NamedType
);

impl<'a> From<Definition<'a>> for Node<'a> {
    #[inline]
    fn from(definition: Definition<'a>) -> Self {
        match definition {
            Definition::Operation(operation) => Node::OperationDefinition(operation),
            Definition::Fragment(fragment) => Node::FragmentDefinition(fragment),
        }
    }
}

impl<'a> From<Selection<'a>> for Node<'a> {
    #[inline]
    fn from(selection: Selection<'a>) -> Self {
        match selection {
            Selection::Field(field) => Node::Field(field),
            Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
            Selection::InlineFragment(fragment) => Node::InlineFragment(fragment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kinds() {
        let ctx = ASTContext::new();
        assert_eq!(Node::from(Field::new_leaf(&ctx, "a")).kind(), ASTKind::Field);
        assert_eq!(Node::Value(Value::Null).kind(), ASTKind::Null);
        assert_eq!(
            Node::from(Value::from(IntValue::from("1"))).kind(),
            ASTKind::Int
        );
        let list = Type::from(NamedType::from("T")).into_list(&ctx);
        assert_eq!(Node::from(list).kind(), ASTKind::ListType);
        assert_eq!(Node::Name("a").kind().to_string(), "Name");
        assert_eq!(ASTKind::NamedType.to_string(), "Type Name");
    }
}
