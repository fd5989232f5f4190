use super::ast::*;
use super::ast_kind::Node;
use log::trace;
use std::{fmt, fmt::Write};

/// Trait for printing AST Nodes to a new String allocated on the heap.
/// This is implemented by all AST Nodes and can hence be used to granularly print GraphQL language.
/// However, mostly this will be used via `Document::print`.
///
/// This typically is the last operation that's done in a given AST context and is hence outside
/// of its lifetime and arena. Printing only borrows a node and never alters it.
///
/// For convience when debugging, AST Nodes that implement `PrintNode` also automatically
/// implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write an AST node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with each [`SelectionSet`]
    /// and is typically initialized as zero (`0`).
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print an AST Node to source text as a String allocated on the heap.
    ///
    /// For convience when debugging, AST Nodes that implement `PrintNode` also automatically
    /// implement the [`fmt::Display`] trait.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode + '_ {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

impl<'a> PrintNode for NamedType<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)
    }
}

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl PrintNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }
}

impl<'a> PrintNode for EnumValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for FloatValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for IntValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

#[inline]
fn write_unicode_escape(c: char, buffer: &mut dyn Write) -> fmt::Result {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
    let mut buf = [b'0'; u32::FORMATTED_SIZE];
    let digits = write_with_options::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
    let digits = std::str::from_utf8(digits).map_err(|_| fmt::Error)?;
    write!(buffer, "\\u{:0>4}", digits)
}

impl<'a> PrintNode for StringValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        // See: https://github.com/graphql-rust/graphql-parser/blob/ff34bae/src/format.rs#L127-L167
        if !self.is_block() {
            buffer.write_char('"')?;
            for c in self.value.chars() {
                match c {
                    '"' => buffer.write_str("\\\"")?,
                    '\\' => buffer.write_str(r"\\")?,
                    '\u{8}' => buffer.write_str(r"\b")?,
                    '\u{c}' => buffer.write_str(r"\f")?,
                    '\n' => buffer.write_str(r"\n")?,
                    '\r' => buffer.write_str(r"\r")?,
                    '\t' => buffer.write_str(r"\t")?,
                    '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => write_unicode_escape(c, buffer)?,
                    _ => buffer.write_char(c)?,
                };
            }
            buffer.write_char('"')
        } else {
            buffer.write_str("\"\"\"\n")?;
            for line in self.value.split('\n') {
                if !line.is_empty() {
                    write_indent(level, buffer)?;
                    buffer.write_str(&line.replace(r#"""""#, r#"\""""#))?;
                }
                buffer.write_char('\n')?;
            }
            write_indent(level, buffer)?;
            buffer.write_str("\"\"\"")
        }
    }
}

impl<'a> PrintNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_to_buffer(level, buffer),
            Value::Enum(value) => value.write_to_buffer(level, buffer),
            Value::Float(value) => value.write_to_buffer(level, buffer),
            Value::Int(value) => value.write_to_buffer(level, buffer),
            Value::String(value) => value.write_to_buffer(level, buffer),
            Value::Variable(value) => value.write_to_buffer(level, buffer),
            Value::Object(value) => value.write_to_buffer(level, buffer),
            Value::List(value) => value.write_to_buffer(level, buffer),
            Value::Null => buffer.write_str("null"),
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{")?;
        let mut first = true;
        for field in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            field.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("}")
    }
}

impl<'a> PrintNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("[")?;
        let mut first = true;
        for value in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            value.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("]")
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Arguments<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for argument in self.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                argument.write_to_buffer(level, buffer)?;
            }
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "@{}", self.name)?;
        self.arguments.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Directives<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        for directive in self.children.iter() {
            buffer.write_str(" ")?;
            directive.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(level, buffer),
            Selection::FragmentSpread(spread) => spread.write_to_buffer(level, buffer),
            Selection::InlineFragment(inline) => inline.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            let level = level + 1;
            buffer.write_str("{")?;
            for selection in self.selections.iter() {
                buffer.write_char('\n')?;
                write_indent(level, buffer)?;
                selection.write_to_buffer(level, buffer)?;
            }
            buffer.write_char('\n')?;
            write_indent(level - 1, buffer)?;
            buffer.write_char('}')
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for Field<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(self.name)?;
        };
        self.arguments.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        match &self.selection_set {
            Some(selection_set) if !selection_set.is_empty() => {
                buffer.write_str(" ")?;
                selection_set.write_to_buffer(level, buffer)
            }
            _ => Ok(()),
        }
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        if let Some(name) = &self.type_condition {
            buffer.write_str(" on ")?;
            name.write_to_buffer(level, buffer)?;
        };
        self.directives.write_to_buffer(level, buffer)?;
        buffer.write_str(" ")?;
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Type<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(name) => name.write_to_buffer(level, buffer),
            Type::ListType(inner) => {
                buffer.write_str("[")?;
                inner.write_to_buffer(level, buffer)?;
                buffer.write_str("]")
            }
            Type::NonNullType(inner) => {
                inner.write_to_buffer(level, buffer)?;
                buffer.write_str("!")
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.variable.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        if let Some(default_value) = &self.default_value {
            buffer.write_str(" = ")?;
            default_value.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for VariableDefinitions<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for var_definition in self.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                var_definition.write_to_buffer(level, buffer)?;
            }
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("fragment ")?;
        self.name.write_to_buffer(level, buffer)?;
        buffer.write_str(" on ")?;
        self.type_condition.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        buffer.write_str(" ")?;
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_shorthand() {
            self.selection_set.write_to_buffer(level, buffer)
        } else {
            buffer.write_str(self.operation.as_str())?;
            if let Some(name) = &self.name {
                buffer.write_str(" ")?;
                name.write_to_buffer(level, buffer)?;
            };
            if self.name.is_none() && !self.variable_definitions.is_empty() {
                buffer.write_str(" ")?;
            }
            self.variable_definitions.write_to_buffer(level, buffer)?;
            self.directives.write_to_buffer(level, buffer)?;
            buffer.write_str(" ")?;
            self.selection_set.write_to_buffer(level, buffer)
        }
    }
}

impl<'a> PrintNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Definition::Operation(operation) => operation.write_to_buffer(level, buffer),
            Definition::Fragment(fragment) => fragment.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Document<'a> {
    /// Writes all definitions separated by a blank line and terminates the document with a
    /// newline. An empty document writes nothing.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for definition in self.definitions.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str("\n\n")?;
            }
            definition.write_to_buffer(level, buffer)?;
        }
        if !first {
            buffer.write_char('\n')?;
        }
        Ok(())
    }

    #[inline]
    fn print(&self) -> String {
        trace!("printing {} definitions", self.definitions.len());
        let mut buf = String::with_capacity(self.size_hint);
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl<'a> PrintNode for Node<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Node::Document(document) => document.write_to_buffer(level, buffer),
            Node::OperationDefinition(operation) => operation.write_to_buffer(level, buffer),
            Node::FragmentDefinition(fragment) => fragment.write_to_buffer(level, buffer),
            Node::VariableDefinition(var_def) => var_def.write_to_buffer(level, buffer),
            Node::SelectionSet(selection_set) => selection_set.write_to_buffer(level, buffer),
            Node::Field(field) => field.write_to_buffer(level, buffer),
            Node::FragmentSpread(spread) => spread.write_to_buffer(level, buffer),
            Node::InlineFragment(fragment) => fragment.write_to_buffer(level, buffer),
            Node::Argument(argument) => argument.write_to_buffer(level, buffer),
            Node::Directive(directive) => directive.write_to_buffer(level, buffer),
            Node::Value(value) => value.write_to_buffer(level, buffer),
            Node::ObjectField(field) => field.write_to_buffer(level, buffer),
            Node::Type(of_type) => of_type.write_to_buffer(level, buffer),
            Node::NamedType(name) => name.write_to_buffer(level, buffer),
            Node::Name(name) => buffer.write_str(name),
        }
    }
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let ast = Value::parse(&ctx, "{ a: true, b: [1, 2] }");
        assert_eq!(ast.unwrap().print(), "{a: true, b: [1, 2]}");
        let ast = Value::parse(&ctx, "123.23");
        assert_eq!(ast.unwrap().print(), "123.23");
        let ast = Value::parse(&ctx, "123.23e20");
        assert_eq!(ast.unwrap().print(), "123.23e20");
        let ast = Value::parse(&ctx, "[]");
        assert_eq!(ast.unwrap().print(), "[]");
        let ast = Value::parse(&ctx, "{}");
        assert_eq!(ast.unwrap().print(), "{}");
    }

    #[test]
    fn arguments() {
        let ctx = ASTContext::new();
        let ast = Arguments::parse(&ctx, "()");
        assert_eq!(ast.unwrap().print(), "");
        let ast = Arguments::parse(&ctx, "(a:1)");
        assert_eq!(ast.unwrap().print(), "(a: 1)");
        let ast = Arguments::parse(&ctx, "(a:1 b:2)");
        assert_eq!(ast.unwrap().print(), "(a: 1, b: 2)");
    }

    #[test]
    fn directives() {
        let ctx = ASTContext::new();
        let ast = Directives::parse(&ctx, "@skip(if: true)");
        assert_eq!(ast.unwrap().print(), " @skip(if: true)");
        let ast = Directives::parse(&ctx, "@skip(if: true) @include(if: false)");
        assert_eq!(ast.unwrap().print(), " @skip(if: true) @include(if: false)");
    }

    #[test]
    fn field() {
        let ctx = ASTContext::new();
        let ast = Field::parse(&ctx, "field { child }");
        assert_eq!(ast.unwrap().print(), "field {\n  child\n}");
        let ast = Field::parse(&ctx, "field { child { child } }");
        assert_eq!(
            ast.unwrap().print(),
            "field {\n  child {\n    child\n  }\n}"
        );
        let ast = Field::parse(&ctx, "alias : field");
        assert_eq!(ast.unwrap().print(), "alias: field");
        let ast = Field::parse(&ctx, "field: field");
        assert_eq!(ast.unwrap().print(), "field: field");
        let ast = Field::parse(&ctx, "field (test: true)");
        assert_eq!(ast.unwrap().print(), "field(test: true)");
        let ast = Field::parse(&ctx, "field (test: true) @test");
        assert_eq!(ast.unwrap().print(), "field(test: true) @test");
        let ast = Field::parse(&ctx, "field()");
        assert_eq!(ast.unwrap().print(), "field");
    }

    #[test]
    fn minimal_field() {
        let ctx = ASTContext::new();
        assert_eq!(Field::new_leaf(&ctx, "foo").print(), "foo");
    }

    #[test]
    fn fragment_spread() {
        let ctx = ASTContext::new();
        let ast = FragmentSpread::parse(&ctx, "...Type");
        assert_eq!(ast.unwrap().print(), "...Type");
        let ast = FragmentSpread::parse(&ctx, "...Type @test");
        assert_eq!(ast.unwrap().print(), "...Type @test");
    }

    #[test]
    fn inline_fragment() {
        let ctx = ASTContext::new();
        let ast = InlineFragment::parse(&ctx, "... on Type { field }");
        assert_eq!(ast.unwrap().print(), "... on Type {\n  field\n}");
        let ast = InlineFragment::parse(&ctx, "... on Type @test{ field }");
        assert_eq!(ast.unwrap().print(), "... on Type @test {\n  field\n}");
        let ast = InlineFragment::parse(&ctx, "...@test { field }");
        assert_eq!(ast.unwrap().print(), "... @test {\n  field\n}");
    }

    #[test]
    fn _type() {
        let ctx = ASTContext::new();
        let ast = Type::parse(&ctx, "[Type]");
        assert_eq!(ast.unwrap().print(), "[Type]");
        let ast = Type::parse(&ctx, "[Type !] !");
        assert_eq!(ast.unwrap().print(), "[Type!]!");
        let ast = Type::parse(&ctx, "Type!");
        assert_eq!(ast.unwrap().print(), "Type!");
    }

    #[test]
    fn variable_definitions() {
        let ctx = ASTContext::new();
        let ast = VariableDefinitions::parse(&ctx, "($x : Int)");
        assert_eq!(ast.unwrap().print(), "($x: Int)");
        let ast = VariableDefinitions::parse(&ctx, "($x : Int = 1)");
        assert_eq!(ast.unwrap().print(), "($x: Int = 1)");
        let ast = VariableDefinitions::parse(&ctx, "($x : Int = null)");
        assert_eq!(ast.unwrap().print(), "($x: Int = null)");
        let ast = VariableDefinitions::parse(&ctx, "($x : Int = 1, $y: Bool @deprecated)");
        assert_eq!(ast.unwrap().print(), "($x: Int = 1, $y: Bool @deprecated)");
    }

    #[test]
    fn strings() {
        let ctx = ASTContext::new();
        let ast = Value::parse(&ctx, "\"\\u0001\"");
        assert_eq!(ast.unwrap().print(), "\"\\u0001\"");
        let ast = Value::parse(&ctx, "\"\\u0019\"");
        assert_eq!(ast.unwrap().print(), "\"\\u0019\"");
        let ast = Value::parse(&ctx, "\"\0\"");
        assert_eq!(ast.unwrap().print(), "\"\\u0000\"");
        let ast = Value::parse(&ctx, "\"\\u007F \\u0085\"");
        assert_eq!(ast.unwrap().print(), "\"\\u007F \\u0085\"");
        let ast = Value::parse(&ctx, r#""\b\f\n\r\t \" \\ \/""#);
        assert_eq!(ast.unwrap().print(), r#""\b\f\n\r\t \" \\ /""#);
        let ast = Value::parse(&ctx, "\"\\u00e9 \\u4e2d \\uD83D\\uDE00\"");
        assert_eq!(ast.unwrap().print(), "\"é 中 😀\"");
    }

    #[test]
    fn block_strings() {
        let ctx = ASTContext::new();
        let ast = Value::parse(
            &ctx,
            r#"
            """
            this
              is
            doc
            """
        "#,
        );
        assert_eq!(ast.unwrap().print(), "\"\"\"\nthis\n  is\ndoc\n\"\"\"");

        let ast = Value::parse(
            &ctx,
            r#"
            """this
              is
            doc"""
        "#,
        );
        assert_eq!(ast.unwrap().print(), "\"\"\"\nthis\n  is\ndoc\n\"\"\"");

        // Every line is indented, so the block form would lose the indentation
        let ast = Value::parse(&ctx, "\"  this\\n  is\\n  doc\"");
        assert_eq!(ast.unwrap().print(), "\"  this\\n  is\\n  doc\"");

        let ast = Value::parse(&ctx, "\"a\\n\\nb \\\"\\\"\\\" c\"");
        assert_eq!(ast.unwrap().print(), "\"\"\"\na\n\nb \\\"\"\" c\n\"\"\"");

        let ast = Field::parse(&ctx, "field(arg: \"\"\"\n  a\n    b\n\"\"\") { child }");
        assert_eq!(
            ast.unwrap().print(),
            "field(arg: \"\"\"\na\n  b\n\"\"\") {\n  child\n}"
        );
    }

    #[test]
    fn fragment_definitions() {
        let ctx = ASTContext::new();
        let ast = FragmentDefinition::parse(
            &ctx,
            r#"
            fragment Test on Type {
              field
            }
        "#,
        );
        assert_eq!(ast.unwrap().print(), "fragment Test on Type {\n  field\n}");

        let ast = FragmentDefinition::parse(
            &ctx,
            r#"
            fragment Test on Type @test {
              field
            }
        "#,
        );
        assert_eq!(
            ast.unwrap().print(),
            "fragment Test on Type @test {\n  field\n}"
        );
    }

    #[test]
    fn operation_definition() {
        let ctx = ASTContext::new();
        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query {
              field
            }
        "#,
        );
        assert_eq!(ast.unwrap().print(), "{\n  field\n}");

        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query Name {
              field
            }
        "#,
        );
        assert_eq!(ast.unwrap().print(), "query Name {\n  field\n}");

        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query Name ($var: String) {
              field
            }
        "#,
        );
        assert_eq!(
            ast.unwrap().print(),
            "query Name($var: String) {\n  field\n}"
        );

        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query ($var: String) {
              field
            }
        "#,
        );
        assert_eq!(ast.unwrap().print(), "query ($var: String) {\n  field\n}");

        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query Name ($var: String) @defer{
              field
            }
        "#,
        );
        assert_eq!(
            ast.unwrap().print(),
            "query Name($var: String) @defer {\n  field\n}"
        );

        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            mutation {
              doThing
            }
        "#,
        );
        assert_eq!(ast.unwrap().print(), "mutation {\n  doThing\n}");
    }

    #[test]
    fn documents() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ a } fragment F on T { b }");
        assert_eq!(
            ast.unwrap().print(),
            "{\n  a\n}\n\nfragment F on T {\n  b\n}\n"
        );
        assert_eq!(Document::default_in(&ctx.arena).print(), "");
    }

    #[test]
    fn nodes() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "a { b }").unwrap();
        assert_eq!(Node::from(field.clone()).print(), "a {\n  b\n}");
        assert_eq!(Node::Name("name").print(), "name");
        assert_eq!(
            Node::Value(Value::List(ListValue::default_in(&ctx.arena))).print(),
            "[]"
        );
        let node: &dyn PrintNode = field;
        assert_eq!(node.to_string(), "a {\n  b\n}");
    }
}
