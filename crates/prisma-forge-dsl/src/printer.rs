//! Unformatted SDL text for each AST node.
//!
//! Block bodies are emitted without indentation (data sources and generators
//! excepted); layout is the formatter's job.

use prisma_forge_core::types::{
    DataSource, DataSourceUrl, DefaultValue, Enum, Field, FieldArity, FieldKind, Generator,
    Literal, Model, ObjectField, Relation, ScalarField, Schema,
};

/// Print a whole schema without formatting.
///
/// Statements appear in a fixed order: the data source, every generator,
/// every model, then every enum, separated by one blank line. An empty
/// schema prints as an empty string.
pub fn print_raw(schema: &Schema) -> String {
    let mut statements = Vec::with_capacity(schema.statement_count());
    if let Some(data_source) = schema.data_source() {
        statements.push(print_data_source(data_source));
    }
    statements.extend(schema.generators().iter().map(print_generator));
    statements.extend(schema.models().iter().map(print_model));
    statements.extend(schema.enums().iter().map(print_enum));
    statements.join("\n\n")
}

/// Print a documentation comment line: `/// <text>`.
pub fn print_documentation(documentation: &str) -> String {
    format!("/// {documentation}")
}

/// Print an enum block.
pub fn print_enum(enumeration: &Enum) -> String {
    let mut output = String::new();
    push_documentation(enumeration.documentation(), &mut output);
    output.push_str("enum ");
    output.push_str(enumeration.name().as_str());
    output.push_str(" {\n");
    for value in enumeration.values() {
        output.push_str(value);
        output.push('\n');
    }
    output.push('}');
    output
}

/// Print a model block with one field per line.
pub fn print_model(model: &Model) -> String {
    let mut output = String::new();
    push_documentation(model.documentation(), &mut output);
    output.push_str("model ");
    output.push_str(model.name().as_str());
    output.push_str(" {\n");
    for field in model.fields() {
        push_field(field, &mut output);
        output.push('\n');
    }
    output.push('}');
    output
}

/// Print a single field line, preceded by its documentation if present.
pub fn print_field(field: &Field) -> String {
    let mut output = String::new();
    push_field(field, &mut output);
    output
}

/// Print a `datasource` block.
pub fn print_data_source(data_source: &DataSource) -> String {
    format!(
        "datasource {} {{\n  provider = \"{}\"\n  url      = {}\n}}",
        data_source.name(),
        data_source.provider(),
        print_url(data_source.url()),
    )
}

/// Print a `generator` block.
///
/// `output` appears only when present and non-empty; `binaryTargets` only
/// when the list is non-empty, rendered as a JSON array.
pub fn print_generator(generator: &Generator) -> String {
    let mut output = String::new();
    output.push_str("generator ");
    output.push_str(generator.name().as_str());
    output.push_str(" {\n");
    output.push_str(&format!("  provider = \"{}\"\n", generator.provider()));

    if let Some(out) = generator.output().filter(|o| !o.is_empty()) {
        output.push_str(&format!("  output = \"{out}\"\n"));
    }

    if !generator.binary_targets().is_empty() {
        // A list of strings always serializes.
        let targets = serde_json::to_string(generator.binary_targets()).unwrap_or_default();
        output.push_str(&format!("  binaryTargets = {targets}\n"));
    }

    output.push('}');
    output
}

fn push_documentation(documentation: Option<&str>, output: &mut String) {
    if let Some(doc) = documentation.filter(|d| !d.is_empty()) {
        output.push_str(&print_documentation(doc));
        output.push('\n');
    }
}

fn push_field(field: &Field, output: &mut String) {
    push_documentation(field.documentation(), output);

    let type_text = format!("{}{}", field.type_name(), modifiers(field.arity()));
    let attributes = match field.kind() {
        FieldKind::Scalar(scalar) => scalar_attributes(scalar),
        FieldKind::Object(object) => object_attributes(object),
    };

    let segments = [
        field.name().as_str(),
        type_text.as_str(),
        attributes.as_str(),
    ];
    let line: Vec<&str> = segments.into_iter().filter(|s| !s.is_empty()).collect();
    output.push_str(&line.join(" "));
}

fn modifiers(arity: FieldArity) -> &'static str {
    match arity {
        FieldArity::Required => "",
        FieldArity::Optional => "?",
        FieldArity::List => "[]",
    }
}

fn scalar_attributes(scalar: &ScalarField) -> String {
    let mut attributes = Vec::new();
    if scalar.is_id() {
        attributes.push("@id".to_string());
    }
    if scalar.is_unique() {
        attributes.push("@unique".to_string());
    }
    if scalar.is_updated_at() {
        attributes.push("@updatedAt".to_string());
    }
    if let Some(default) = scalar.default() {
        attributes.push(format!("@default({})", print_default(default)));
    }
    attributes.join(" ")
}

fn object_attributes(object: &ObjectField) -> String {
    let relation = object.relation();
    if relation.is_explicit() {
        print_relation(relation)
    } else {
        String::new()
    }
}

fn print_default(value: &DefaultValue) -> String {
    match value {
        // Rendered verbatim: callers own quoting of string defaults.
        DefaultValue::Literal(Literal::String(s)) => s.clone(),
        DefaultValue::Literal(Literal::Boolean(b)) => b.to_string(),
        DefaultValue::Literal(Literal::Int(i)) => i.to_string(),
        DefaultValue::Literal(Literal::Float(f)) => f.to_string(),
        DefaultValue::Call(function) => format!("{function}()"),
    }
}

fn print_relation(relation: &Relation) -> String {
    let mut arguments = Vec::new();
    if let Some(name) = relation.name().filter(|n| !n.is_empty()) {
        arguments.push(format!("name: \"{name}\""));
    }
    if !relation.fields().is_empty() {
        arguments.push(format!("fields: [{}]", relation.fields().join(",")));
    }
    if !relation.references().is_empty() {
        arguments.push(format!("references: [{}]", relation.references().join(",")));
    }
    format!("@relation({})", arguments.join(", "))
}

fn print_url(url: &DataSourceUrl) -> String {
    match url {
        DataSourceUrl::Literal(url) => format!("\"{url}\""),
        DataSourceUrl::Env(name) => format!("env(\"{name}\")"),
    }
}
