pub use super::ast_conversion::*;
use crate::error::{Error, ErrorType, Result};
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, storing, traversing, and printing an AST its performant and
/// convenient to allocate memory in one chunk for the AST's operations. This context represents
/// the lifetime of an AST and its derivatives.
///
/// An AST Context in other words represents the memory a document and the operations you perform
/// on it take up. Once you're done with the document this entire allocated memory is dropped all
/// at once, hence it's inadvisable to reuse the AST Context across unrelated documents.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A range of source text that an AST node was parsed from.
///
/// `start` and `end` are byte offsets, `line` and `column` are 1-based and point at `start`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

/// The optional source location of an AST node.
///
/// Nodes created by the parser always carry a [`SourceSpan`], while nodes that are created by
/// hand typically carry none. Locations are diagnostic only: any two `Loc`s compare as equal
/// and hash identically, which makes the derived `PartialEq` of all AST nodes a structural
/// comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct Loc(pub Option<SourceSpan>);

impl Loc {
    /// A location for nodes that weren't parsed from any source text.
    #[inline]
    pub const fn none() -> Self {
        Loc(None)
    }

    /// Returns the source span, if one was recorded.
    #[inline]
    pub fn span(&self) -> Option<&SourceSpan> {
        self.0.as_ref()
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Loc,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
    pub loc: Loc,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`". The names
/// `true`, `false`, and `null` are never enum values.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
    pub loc: Loc,
}

/// AST Node of an integer value.
///
/// The literal is kept as written in the source text and is never coerced to a number, so even
/// integers that overflow 32 bits survive printing unchanged.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
    pub loc: Loc,
}

/// AST Node of a floating point value.
///
/// Like [`IntValue`] the literal is kept as written, including its exponent notation.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
    pub loc: Loc,
}

/// AST Node of a string value.
///
/// GraphQL has a number of escaped characters that are normalised away when parsing and
/// hence this `value` is expected to not contain escaped characters. Block strings are stored
/// as their computed value as well, without the common indentation of their lines.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    pub loc: Loc,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
            loc: Loc::none(),
        }
    }

    /// Determines whether a string should be printed as a block string rather than a regular
    /// single-line string.
    ///
    /// Only multi-line strings qualify whose block form parses back to the exact same value. This
    /// rules out non-printable characters, leading or trailing blank lines, and strings in which
    /// every line is indented, since the common indentation of a block string is removed.
    #[inline]
    pub fn is_block(&self) -> bool {
        let mut has_newline = false;
        for c in self.value.chars() {
            match c {
                '\n' => has_newline = true,
                '\t' => {}
                '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => return false,
                _ => {}
            }
        }
        if !has_newline {
            return false;
        }

        let is_blank = |line: &str| line.bytes().all(|byte| byte == b' ' || byte == b'\t');
        let mut lines = self.value.split('\n');
        let first_is_blank = lines.next().map_or(true, is_blank);
        let last_is_blank = self.value.rsplit('\n').next().map_or(true, is_blank);
        let has_unindented_line = self
            .value
            .split('\n')
            .any(|line| !is_blank(line) && !line.starts_with([' ', '\t']));
        !first_is_blank && !last_is_blank && has_unindented_line
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values
    Null,
}

impl<'a> Value<'a> {
    /// Returns the location of this value. `null` literals don't record a location.
    #[inline]
    pub fn loc(&self) -> Loc {
        match self {
            Value::Variable(value) => value.loc,
            Value::String(value) => value.loc,
            Value::Float(value) => value.loc,
            Value::Int(value) => value.loc,
            Value::Boolean(value) => value.loc,
            Value::Enum(value) => value.loc,
            Value::List(value) => value.loc,
            Value::Object(value) => value.loc,
            Value::Null => Loc::none(),
        }
    }
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: bumpalo::collections::Vec<'a, Value<'a>>,
    pub loc: Loc,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
/// An Object literal's contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub loc: Loc,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: bumpalo::collections::Vec<'a, ObjectField<'a>>,
    pub loc: Loc,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all object field's names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for field in self.children.iter() {
            map.insert(field.name, &field.value);
        }
        map
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub loc: Loc,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// Arguments keep the order in which they were written.
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all arguments' names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for argument in self.children.iter() {
            map.insert(argument.name, &argument.value);
        }
        map
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip`, @include`, and `@defer`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
    pub loc: Loc,
}

/// AST Node for lists of GraphQL Directives.
///
/// The order of directives is kept and duplicates are allowed.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: bumpalo::collections::Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// Parsed Selection Sets always contain at least one selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    pub loc: Loc,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    /// See: [Arguments]
    pub arguments: Arguments<'a>,
    /// Directives that are annotating this Field.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type.
    ///
    /// Leaf fields have no Selection Set, which is `None` rather than an empty set.
    /// See: [SelectionSet]
    pub selection_set: Option<SelectionSet<'a>>,
    pub loc: Loc,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// The `arguments` and `directives` lists will be created as empty defaults.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: None,
            loc: Loc::none(),
        }
    }

    /// Creates a new leaf field with the given `name` and `alias`.
    #[inline]
    pub fn new_aliased_leaf(ctx: &'a ASTContext, alias: &'a str, name: &'a str) -> Self {
        Field {
            alias: Some(alias),
            ..Field::new_leaf(ctx, name)
        }
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread.
    pub name: NamedType<'a>,
    /// Directives that are annotating this Fragment Spread.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    pub loc: Loc,
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition's type name that must match before this fragment is applied. On
    /// inline fragments this is optional and no type condition has to be passed.
    pub type_condition: Option<NamedType<'a>>,
    /// Directives that are annotating this Inline Fragment.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub loc: Loc,
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Any given Selection Set may contain fields, fragment spread, and inline fragments.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&'a self) -> Option<&'a Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::FragmentSpread(_) => None,
            Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&'a self) -> Option<&'a FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            Selection::Field(_) => None,
            Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&'a self) -> Option<&'a InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            Selection::FragmentSpread(_) => None,
            Selection::Field(_) => None,
        }
    }
}

/// AST Node for a type name.
///
/// This AST uses this reference instead of a raw `&str` slice whenever the AST refers to a
/// concrete object type, input type, fragment name, or operation name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
    pub loc: Loc,
}

/// AST Node for a type reference.
///
/// [`VariableDefinitions`] must describe their type when they're defined, including whether they
/// expect lists, non-null values, or a type reference, which is a recursive type definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named input type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list
    /// of the contained type in place.
    ListType(&'a Type<'a>),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null`
    /// instead of the contained type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list, indicating that it expects the current Type to be a list of
    /// itself instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ctx.alloc(self))
    }

    /// A non-null node wrapper for a Type, indicating that a GraphQL API may not pass `null`
    /// instead of the contained type.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNullType(ctx.alloc(self))
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(inner) | Type::NonNullType(inner) => inner.of_type(),
        }
    }
}

/// AST Node for a variable definition.
///
/// A variable definition defines a [Variable] identifier that can be used in place of any other
/// non-static [Value] throughout the operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable<'a>,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// A GraphQL variable may be replaced by a default value when it's not passed.
    ///
    /// A definition without a default value holds `None`, which is distinct from an explicit
    /// `= null` default.
    pub default_value: Option<Value<'a>>,
    /// Directives that are annotating this Variable Definition.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    pub loc: Loc,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all variable names mapped to their definitions.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &'a VariableDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for var_def in self.children.iter() {
            map.insert(var_def.variable.name, var_def);
        }
        map
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// This may only be applied when the type condition matches and extends a Selection Set by being
/// applied using a [`FragmentSpread`] selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition.
    pub name: NamedType<'a>,
    /// A given type condition's type name that must match before this fragment is applied.
    pub type_condition: NamedType<'a>,
    /// Directives that are annotating this Fragment.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub loc: Loc,
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// In GraphQL there are three different operations, with each having a unique identifier on
/// Operation Definitions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The keyword that introduces this kind of operation.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    /// An optional name, as given to the operation definition.
    ///
    /// A [Document] may contain multiple Operation Definitions from which a single one can be
    /// selected. When a Document contains only a single operation, it doesn't have to have a
    /// name.
    pub name: Option<NamedType<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    ///
    /// When an Operation Definition defines no variables this may be an empty list, as can be
    /// checked using `VariableDefinitions::is_empty`.
    pub variable_definitions: VariableDefinitions<'a>,
    /// Directives that are annotating this Operation Definition.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Operation Definition is executed to the root
    /// type of the specified kind of operation.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub loc: Loc,
}

impl<'a> OperationDefinition<'a> {
    /// Checks whether this operation is written in its shorthand form, i.e. as a bare Selection
    /// Set without the `query` keyword.
    #[inline]
    pub fn is_shorthand(&self) -> bool {
        self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

/// AST Root Node for a GraphQL query language document. This contains one or more definitions of
/// fragments or operations.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub definitions: bumpalo::collections::Vec<'a, Definition<'a>>,
    /// A hint on how large the source text was from which this Document was parsed.
    ///
    /// This gives an initial indication of the starting capacity of a `String` that will hold the
    /// stringified document. It isn't part of the Document's structure and is ignored when
    /// comparing Documents.
    pub size_hint: usize,
    pub loc: Loc,
}

impl<'a> PartialEq for Document<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions
    }
}

impl<'a, 'b> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns a `Map` keyed by all fragment names mapped to their fragment definitions.
    /// This is useful for manually traversing the document and resolving [`FragmentSpread`] nodes
    /// to their definitions.
    pub fn fragments(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &'a FragmentDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for definition in self.definitions.iter() {
            if let Definition::Fragment(fragment) = definition {
                map.insert(fragment.name.name, fragment);
            }
        }
        map
    }

    /// Finds an operation definition by name or the single operation contained in the document
    /// when `None` is passed.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#GetOperation())
    pub fn operation(&'a self, by_name: Option<&'b str>) -> Result<&'a OperationDefinition<'a>> {
        if let Some(by_name) = by_name {
            self.definitions
                .iter()
                .find_map(|definition| match definition {
                    Definition::Operation(
                        operation @ OperationDefinition {
                            name: Some(NamedType { name, .. }),
                            ..
                        },
                    ) if *name == by_name => Some(operation),
                    _ => None,
                })
                .ok_or(Error::new(
                    format!("Operation with name {by_name} does not exist"),
                    Some(ErrorType::GraphQL),
                ))
        } else {
            let mut operations = self
                .definitions
                .iter()
                .filter_map(|definition| definition.operation());
            match (operations.next(), operations.next()) {
                (None, _) => Err(Error::new(
                    "Document does not contain any operations",
                    Some(ErrorType::GraphQL),
                )),
                (Some(operation), None) => Ok(operation),
                (Some(_), Some(_)) => Err(Error::new(
                    "Document contains more than one operation, missing operation name",
                    Some(ErrorType::GraphQL),
                )),
            }
        }
    }
}

/// AST Node for a Definition inside a query language document, which may either be an Operation
/// Definition or a Fragment Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an
    /// `OperationDefinition`.
    #[inline]
    pub fn operation(&'a self) -> Option<&'a OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            Definition::Fragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a
    /// `FragmentDefinition`.
    #[inline]
    pub fn fragment(&'a self) -> Option<&'a FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParseNode, PrintNode};

    #[test]
    fn operation_no_operations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"fragment Foo on Query { hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message,
            "Operation with name queryName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message,
            "Document does not contain any operations"
        );
    }

    #[test]
    fn operation_one_operation() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"query queryName { hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap().print(),
            "query queryName {\n  hello\n}"
        );
        assert_eq!(
            ast.operation(None).unwrap().print(),
            "query queryName {\n  hello\n}"
        );
    }

    #[test]
    fn operation_one_operation_anonymous() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"{ hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message,
            "Operation with name queryName does not exist"
        );
        assert_eq!(ast.operation(None).unwrap().print(), "{\n  hello\n}");
    }

    #[test]
    fn operation_two_operations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            r#"query queryName { hello } query otherName { world }"#,
        )
        .unwrap();
        assert_eq!(
            ast.operation(Some("otherName")).unwrap().print(),
            "query otherName {\n  world\n}"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message,
            "Document contains more than one operation, missing operation name"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().error_type(),
            ErrorType::GraphQL
        );
    }

    #[test]
    fn fragments_by_name() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "{ ...A } fragment A on T { a } fragment B on T { b }",
        )
        .unwrap();
        let fragments = ast.fragments(&ctx);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments["B"].type_condition.name, "T");
    }

    #[test]
    fn argument_and_variable_maps() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "field(a: 1, b: { c: true })").unwrap();
        let arguments = field.arguments.as_map(&ctx);
        assert_eq!(arguments["a"], &Value::Int(IntValue::from("1")));
        if let Value::Object(object) = arguments["b"] {
            assert_eq!(
                object.as_map(&ctx)["c"],
                &Value::Boolean(BooleanValue::from(true))
            );
        } else {
            panic!("expected an object value");
        }

        let operation = OperationDefinition::parse(&ctx, "query ($a: Int = 1) { a }").unwrap();
        let definitions = operation.variable_definitions.as_map(&ctx);
        assert_eq!(
            definitions["a"].default_value,
            Some(Value::Int(IntValue::from("1")))
        );
    }

    #[test]
    fn locations_are_ignored_by_equality() {
        let span = SourceSpan {
            start: 0,
            end: 3,
            line: 1,
            column: 1,
        };
        let parsed = NamedType {
            name: "Foo",
            loc: Loc(Some(span)),
        };
        assert_eq!(parsed, NamedType::from("Foo"));
        assert_eq!(parsed.loc.span(), Some(&span));
        assert_ne!(parsed, NamedType::from("Bar"));
    }

    #[test]
    fn type_helpers() {
        let ctx = ASTContext::new();
        let of_type = Type::from(NamedType::from("Int"))
            .into_nonnull(&ctx)
            .into_list(&ctx);
        assert_eq!(of_type.of_type().name, "Int");
        assert_eq!(of_type.print(), "[Int!]");
    }

    #[test]
    fn block_string_detection() {
        assert!(StringValue::from("a\n  b").is_block());
        assert!(!StringValue::from("single line").is_block());
        assert!(!StringValue::from("  a\n  b").is_block());
        assert!(!StringValue::from("a\n").is_block());
        assert!(!StringValue::from("\na").is_block());
        assert!(!StringValue::from("a\r\nb").is_block());
    }

    #[test]
    fn leaf_fields() {
        let ctx = ASTContext::new();
        let field = Field::new_aliased_leaf(&ctx, "alias", "name");
        assert_eq!(field.alias_or_name(), "alias");
        assert_eq!(field.selection_set, None);
        assert_eq!(Field::new_leaf(&ctx, "name").alias_or_name(), "name");
    }
}
