//! Markdown rendering of Swagger descriptions
//!
//! Every string taken from the description goes through [`escape_html`] (or a
//! code span) before it is written. The only raw HTML in the output is what
//! this module emits itself: `<br>` inside table cells and the anchors of
//! definition headings.

use crate::adapters::swagger::models::{
    AdditionalProperties, HttpMethod, Operation, Parameter, PathItem, Schema, SecurityScheme,
    SwaggerDocument,
};
use crate::domain::GroupBy;
use serde_json::Value;
use std::collections::BTreeSet;

const DEFAULT_TITLE: &str = "API documentation";
const UNTAGGED_SECTION: &str = "Untagged";

/// Renders the full document
pub(crate) fn render_markdown(doc: &SwaggerDocument, group_by: GroupBy) -> String {
    let mut md = MarkdownBuilder::default();

    let title = doc
        .info
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TITLE);
    md.heading(1, title);

    write_overview(&mut md, doc);
    write_paths(&mut md, doc, group_by);
    write_definitions(&mut md, doc);
    write_security_definitions(&mut md, doc);

    md.finish()
}

fn write_overview(md: &mut MarkdownBuilder, doc: &SwaggerDocument) {
    md.heading(2, "Overview");

    if let Some(ref description) = doc.info.description {
        md.paragraph(description);
    }

    if let Some(ref version) = doc.info.version {
        md.heading(3, "Version information");
        md.labelled_lines(&[("Version", Some(version.as_str()))]);
    }

    if let Some(ref contact) = doc.info.contact {
        md.heading(3, "Contact information");
        md.labelled_lines(&[
            ("Contact", contact.name.as_deref()),
            ("Contact URL", contact.url.as_deref()),
            ("Contact Email", contact.email.as_deref()),
        ]);
    }

    if doc.info.license.is_some() || doc.info.terms_of_service.is_some() {
        let license = doc.info.license.clone().unwrap_or_default();
        md.heading(3, "License information");
        md.labelled_lines(&[
            ("License", license.name.as_deref()),
            ("License URL", license.url.as_deref()),
            ("Terms of service", doc.info.terms_of_service.as_deref()),
        ]);
    }

    if doc.host.is_some() || doc.base_path.is_some() || !doc.schemes.is_empty() {
        let schemes = doc
            .schemes
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        md.heading(3, "URI scheme");
        md.labelled_lines(&[
            ("Host", doc.host.as_deref()),
            ("BasePath", doc.base_path.as_deref()),
            ("Schemes", Some(schemes.as_str()).filter(|s| !s.is_empty())),
        ]);
    }

    if !doc.tags.is_empty() {
        md.heading(3, "Tags");
        let items: Vec<String> = doc
            .tags
            .iter()
            .map(|tag| match tag.description.as_deref() {
                Some(description) => format!(
                    "{} : {}",
                    escape_inline(&tag.name),
                    escape_inline(description)
                ),
                None => escape_inline(&tag.name),
            })
            .collect();
        md.bullet_list(&items);
    }

    write_media_types(md, 3, "Consumes", &doc.consumes);
    write_media_types(md, 3, "Produces", &doc.produces);
}

/// An operation together with where it lives
struct OperationRef<'a> {
    path: &'a str,
    method: HttpMethod,
    item: &'a PathItem,
    operation: &'a Operation,
}

fn collect_operations(doc: &SwaggerDocument) -> Vec<OperationRef<'_>> {
    doc.paths
        .iter()
        .flat_map(|(path, item)| {
            item.operations()
                .into_iter()
                .map(move |(method, operation)| OperationRef {
                    path: path.as_str(),
                    method,
                    item,
                    operation,
                })
        })
        .collect()
}

fn write_paths(md: &mut MarkdownBuilder, doc: &SwaggerDocument, group_by: GroupBy) {
    let operations = collect_operations(doc);
    if operations.is_empty() {
        return;
    }

    md.heading(2, "Paths");

    match group_by {
        GroupBy::AsIs => {
            for op in &operations {
                write_operation(md, doc, op, 3);
            }
        }
        GroupBy::Tags => {
            for tag in tag_order(doc, &operations) {
                let tagged: Vec<&OperationRef<'_>> = operations
                    .iter()
                    .filter(|op| op.operation.tags.iter().any(|t| t == &tag))
                    .collect();
                if tagged.is_empty() {
                    continue;
                }

                md.heading(3, &tag);
                if let Some(description) = doc
                    .tags
                    .iter()
                    .find(|t| t.name == tag)
                    .and_then(|t| t.description.as_deref())
                {
                    md.paragraph(description);
                }
                for op in tagged {
                    write_operation(md, doc, op, 4);
                }
            }

            let untagged: Vec<&OperationRef<'_>> = operations
                .iter()
                .filter(|op| op.operation.tags.is_empty())
                .collect();
            if !untagged.is_empty() {
                md.heading(3, UNTAGGED_SECTION);
                for op in untagged {
                    write_operation(md, doc, op, 4);
                }
            }
        }
    }
}

/// Declared tags in declaration order, then undeclared tags sorted
fn tag_order(doc: &SwaggerDocument, operations: &[OperationRef<'_>]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for tag in &doc.tags {
        if !order.contains(&tag.name) {
            order.push(tag.name.clone());
        }
    }

    let undeclared: BTreeSet<&String> = operations
        .iter()
        .flat_map(|op| op.operation.tags.iter())
        .filter(|t| !order.contains(t))
        .collect();
    order.extend(undeclared.into_iter().cloned());
    order
}

fn write_operation(
    md: &mut MarkdownBuilder,
    doc: &SwaggerDocument,
    op: &OperationRef<'_>,
    level: usize,
) {
    let operation = op.operation;
    let fallback = format!("{} {}", op.method, op.path);
    let title = operation
        .summary
        .as_deref()
        .or(operation.operation_id.as_deref())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(&fallback);

    md.heading(level, title);
    md.code_block(&fallback);

    if operation.deprecated {
        md.raw_paragraph("**Deprecated**");
    }

    if let Some(ref description) = operation.description {
        md.heading(level + 1, "Description");
        md.paragraph(description);
    }

    let parameters = merged_parameters(doc, op.item, operation);
    if !parameters.is_empty() {
        md.heading(level + 1, "Parameters");
        let rows: Vec<Vec<String>> = parameters.iter().map(|p| parameter_row(p)).collect();
        md.table(&["Type", "Name", "Description", "Schema", "Default"], &rows);
    }

    if !operation.responses.is_empty() {
        md.heading(level + 1, "Responses");
        let rows: Vec<Vec<String>> = operation
            .responses
            .iter()
            .map(|(code, response)| {
                let mut description = escape_html(&response.description);
                if !response.headers.is_empty() {
                    description.push_str("\n**Headers** :");
                    for (name, header) in &response.headers {
                        let header_schema = Schema {
                            type_name: header.type_name.clone(),
                            format: header.format.clone(),
                            ..Default::default()
                        };
                        description.push_str(&format!(
                            "\n{} ({})",
                            code_span(name),
                            schema_type(&header_schema)
                        ));
                        if let Some(ref text) = header.description {
                            description.push_str(&format!(" : {}", escape_inline(text)));
                        }
                    }
                }
                let schema = response
                    .schema
                    .as_ref()
                    .map(schema_type)
                    .unwrap_or_else(|| "No Content".to_string());
                vec![format!("**{}**", escape_inline(code)), description, schema]
            })
            .collect();
        md.table(&["HTTP Code", "Description", "Schema"], &rows);
    }

    write_media_types(md, level + 1, "Consumes", &operation.consumes);
    write_media_types(md, level + 1, "Produces", &operation.produces);

    if !operation.security.is_empty() {
        md.heading(level + 1, "Security");
        let items: Vec<String> = operation
            .security
            .iter()
            .flat_map(|requirement| requirement.iter())
            .map(|(name, scopes)| {
                if scopes.is_empty() {
                    code_span(name)
                } else {
                    format!("{} : {}", code_span(name), escape_inline(&scopes.join(", ")))
                }
            })
            .collect();
        md.bullet_list(&items);
    }
}

/// Path-level parameters overridden by operation parameters with the same
/// name and location
fn merged_parameters<'a>(
    doc: &'a SwaggerDocument,
    item: &'a PathItem,
    operation: &'a Operation,
) -> Vec<&'a Parameter> {
    let own: Vec<&Parameter> = operation
        .parameters
        .iter()
        .map(|p| doc.resolve_parameter(p))
        .collect();

    let mut merged: Vec<&Parameter> = item
        .parameters
        .iter()
        .map(|p| doc.resolve_parameter(p))
        .filter(|shared| {
            !own.iter()
                .any(|p| p.name == shared.name && p.location == shared.location)
        })
        .collect();
    merged.extend(own);
    merged
}

fn parameter_row(parameter: &Parameter) -> Vec<String> {
    let name = if parameter.name.is_empty() {
        parameter
            .reference
            .as_deref()
            .unwrap_or("unnamed")
            .to_string()
    } else {
        parameter.name.clone()
    };
    let requirement = if parameter.required || parameter.location == "path" {
        "required"
    } else {
        "optional"
    };

    let schema = match parameter.schema {
        Some(ref schema) => schema_type(schema),
        None => schema_type(&Schema {
            type_name: parameter.type_name.clone(),
            format: parameter.format.clone(),
            items: parameter.items.clone(),
            enum_values: parameter.enum_values.clone(),
            ..Default::default()
        }),
    };

    vec![
        format!("**{}**", escape_inline(&location_label(&parameter.location))),
        format!("**{}**\n*{}*", escape_inline(&name), requirement),
        parameter
            .description
            .as_deref()
            .map(escape_html)
            .unwrap_or_default(),
        schema,
        parameter
            .default
            .as_ref()
            .map(|v| code_span(&value_text(v)))
            .unwrap_or_default(),
    ]
}

fn location_label(location: &str) -> String {
    match location {
        "formData" => "FormData".to_string(),
        "" => "Unknown".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn write_definitions(md: &mut MarkdownBuilder, doc: &SwaggerDocument) {
    if doc.definitions.is_empty() {
        return;
    }

    md.heading(2, "Definitions");

    for (name, schema) in &doc.definitions {
        md.anchored_heading(3, name, &definition_anchor(name));

        if let Some(ref description) = schema.description {
            md.paragraph(description);
        }

        let composed: Vec<String> = schema
            .all_of
            .iter()
            .filter(|s| s.reference.is_some())
            .map(schema_type)
            .collect();
        if !composed.is_empty() {
            md.raw_paragraph(&format!("*Composition* : {}", composed.join(", ")));
        }

        let mut required: Vec<&String> = schema.required.iter().collect();
        let mut properties: Vec<(&String, &Schema)> = schema.properties.iter().collect();
        for inline in schema.all_of.iter().filter(|s| s.reference.is_none()) {
            required.extend(inline.required.iter());
            properties.extend(inline.properties.iter());
        }

        if properties.is_empty() {
            if schema.all_of.is_empty() {
                md.raw_paragraph(&format!("*Type* : {}", schema_type_inline(schema)));
            }
            continue;
        }

        let rows: Vec<Vec<String>> = properties
            .into_iter()
            .map(|(property, property_schema)| {
                let requirement = if required.contains(&property) {
                    "required"
                } else {
                    "optional"
                };
                let mut name_cell = format!("**{}**\n*{}*", escape_inline(property), requirement);
                if property_schema.read_only {
                    name_cell.push_str("\n*read-only*");
                }

                let mut description = property_schema
                    .description
                    .as_deref()
                    .map(escape_html)
                    .unwrap_or_default();
                if let Some(ref example) = property_schema.example {
                    if !description.is_empty() {
                        description.push('\n');
                    }
                    description.push_str(&format!("**Example** : {}", code_span(&value_text(example))));
                }

                vec![name_cell, description, schema_type(property_schema)]
            })
            .collect();
        md.table(&["Name", "Description", "Schema"], &rows);
    }
}

fn write_security_definitions(md: &mut MarkdownBuilder, doc: &SwaggerDocument) {
    if doc.security_definitions.is_empty() {
        return;
    }

    md.heading(2, "Security");

    for (name, scheme) in &doc.security_definitions {
        md.heading(3, name);
        write_security_scheme(md, scheme);
    }
}

fn write_security_scheme(md: &mut MarkdownBuilder, scheme: &SecurityScheme) {
    if let Some(ref description) = scheme.description {
        md.paragraph(description);
    }

    let location = scheme.location.as_deref().map(str::to_uppercase);
    md.labelled_lines(&[
        ("Type", Some(scheme.type_name.as_str())),
        ("Name", scheme.name.as_deref()),
        ("In", location.as_deref()),
        ("Flow", scheme.flow.as_deref()),
        ("Authorization URL", scheme.authorization_url.as_deref()),
        ("Token URL", scheme.token_url.as_deref()),
    ]);

    if !scheme.scopes.is_empty() {
        let rows: Vec<Vec<String>> = scheme
            .scopes
            .iter()
            .map(|(scope, description)| vec![code_span(scope), escape_html(description)])
            .collect();
        md.table(&["Name", "Description"], &rows);
    }
}

fn write_media_types(md: &mut MarkdownBuilder, level: usize, label: &str, types: &[String]) {
    if types.is_empty() {
        return;
    }
    md.heading(level, label);
    let items: Vec<String> = types.iter().map(|t| code_span(t)).collect();
    md.bullet_list(&items);
}

/// Type description of a schema, linking to referenced definitions
pub(crate) fn schema_type(schema: &Schema) -> String {
    if let Some(name) = schema.reference_name() {
        return format!("[{}](#{})", escape_inline(name), definition_anchor(name));
    }
    schema_type_inline(schema)
}

fn schema_type_inline(schema: &Schema) -> String {
    if !schema.enum_values.is_empty() {
        let values: Vec<String> = schema.enum_values.iter().map(value_text).collect();
        return format!("enum ({})", escape_inline(&values.join(", ")));
    }

    if !schema.all_of.is_empty() {
        let parts: Vec<String> = schema.all_of.iter().map(schema_type).collect();
        return parts.join(" & ");
    }

    match schema.type_name.as_deref() {
        Some("array") => {
            let items = schema
                .items
                .as_deref()
                .map(schema_type)
                .unwrap_or_else(|| "object".to_string());
            format!("&lt; {items} &gt; array")
        }
        Some("object") | None => match schema.additional_properties {
            Some(AdditionalProperties::Schema(ref values)) => {
                format!("&lt; string, {} &gt; map", schema_type(values))
            }
            _ => "object".to_string(),
        },
        Some(type_name) => match schema.format.as_deref() {
            Some(format) => format!("{} ({})", escape_inline(type_name), escape_inline(format)),
            None => escape_inline(type_name),
        },
    }
}

fn definition_anchor(name: &str) -> String {
    format!("definition-{}", slug::slugify(name))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escapes the characters that would otherwise reach the HTML output raw
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escaped single-line text
fn escape_inline(text: &str) -> String {
    escape_html(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline code span able to hold backticks
pub(crate) fn code_span(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let longest_run = longest_backtick_run(&text);
    let fence = "`".repeat(longest_run + 1);
    let pad = if text.starts_with('`') || text.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{text}{pad}{fence}")
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Accumulates Markdown blocks separated by blank lines
#[derive(Default)]
struct MarkdownBuilder {
    buf: String,
}

impl MarkdownBuilder {
    fn heading(&mut self, level: usize, text: &str) {
        self.buf.push_str(&"#".repeat(level.clamp(1, 6)));
        self.buf.push(' ');
        self.buf.push_str(&escape_inline(text));
        self.buf.push_str("\n\n");
    }

    /// Heading with an explicit anchor that links can rely on
    fn anchored_heading(&mut self, level: usize, text: &str, anchor: &str) {
        self.buf.push_str(&"#".repeat(level.clamp(1, 6)));
        self.buf.push_str(&format!(" <a id=\"{anchor}\"></a>"));
        self.buf.push_str(&escape_inline(text));
        self.buf.push_str("\n\n");
    }

    /// Free text from the description; Markdown is kept, HTML is escaped
    fn paragraph(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.buf.push_str(&escape_html(text));
        self.buf.push_str("\n\n");
    }

    /// Markdown composed by this module, already escaped
    fn raw_paragraph(&mut self, markdown: &str) {
        self.buf.push_str(markdown);
        self.buf.push_str("\n\n");
    }

    fn labelled_lines(&mut self, lines: &[(&str, Option<&str>)]) {
        let rendered: Vec<String> = lines
            .iter()
            .filter_map(|(label, value)| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| format!("*{}* : {}", label, escape_inline(v)))
            })
            .collect();
        if rendered.is_empty() {
            return;
        }
        self.buf.push_str(&rendered.join("  \n"));
        self.buf.push_str("\n\n");
    }

    fn bullet_list(&mut self, items: &[String]) {
        if items.is_empty() {
            return;
        }
        for item in items {
            self.buf.push_str("* ");
            self.buf.push_str(item);
            self.buf.push('\n');
        }
        self.buf.push('\n');
    }

    fn code_block(&mut self, text: &str) {
        let fence = "`".repeat(longest_backtick_run(text).max(2) + 1);
        self.buf.push_str(&fence);
        self.buf.push('\n');
        self.buf.push_str(text);
        self.buf.push('\n');
        self.buf.push_str(&fence);
        self.buf.push_str("\n\n");
    }

    /// GFM table; cells are Markdown, line breaks become `<br>`
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        self.buf.push('|');
        for header in headers {
            self.buf.push_str(header);
            self.buf.push('|');
        }
        self.buf.push_str("\n|");
        for _ in headers {
            self.buf.push_str("---|");
        }
        self.buf.push('\n');

        for row in rows {
            self.buf.push('|');
            for cell in row {
                self.buf.push_str(&table_cell(cell));
                self.buf.push('|');
            }
            self.buf.push('\n');
        }
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        let mut out = self.buf.trim_end().to_string();
        out.push('\n');
        out
    }
}

fn table_cell(markdown: &str) -> String {
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.replace('|', "\\|"))
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petstore() -> SwaggerDocument {
        SwaggerDocument::from_json(
            r##"{
                "swagger": "2.0",
                "info": {
                    "title": "Petstore",
                    "description": "Sample <b>store</b>",
                    "version": "1.0.0",
                    "license": {"name": "MIT"}
                },
                "host": "petstore.example.com",
                "basePath": "/v1",
                "schemes": ["http", "https"],
                "tags": [
                    {"name": "pet", "description": "Everything about pets"},
                    {"name": "store"}
                ],
                "paths": {
                    "/pets": {
                        "get": {
                            "tags": ["pet"],
                            "summary": "List pets",
                            "parameters": [
                                {"name": "limit", "in": "query", "type": "integer", "format": "int32", "default": 20}
                            ],
                            "responses": {
                                "200": {"description": "A list", "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}}}
                            }
                        },
                        "post": {
                            "tags": ["pet", "admin"],
                            "summary": "Create pet",
                            "consumes": ["application/json"],
                            "parameters": [
                                {"name": "body", "in": "body", "required": true, "schema": {"$ref": "#/definitions/Pet"}}
                            ],
                            "responses": {"201": {"description": "Created"}}
                        }
                    },
                    "/health": {
                        "get": {"responses": {"200": {"description": "UP | DOWN"}}}
                    }
                },
                "definitions": {
                    "Pet": {
                        "type": "object",
                        "required": ["name"],
                        "properties": {
                            "id": {"type": "integer", "format": "int64", "readOnly": true},
                            "name": {"type": "string", "description": "Pet name", "example": "doggie"},
                            "tags": {"type": "object", "additionalProperties": {"type": "string"}}
                        }
                    }
                },
                "securityDefinitions": {
                    "api_key": {"type": "apiKey", "name": "X-API-Key", "in": "header"}
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_document_sections_in_order() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        let title = md.find("# Petstore").unwrap();
        let overview = md.find("## Overview").unwrap();
        let paths = md.find("## Paths").unwrap();
        let definitions = md.find("## Definitions").unwrap();
        let security = md.find("## Security").unwrap();
        assert!(title < overview && overview < paths && paths < definitions && definitions < security);
    }

    #[test]
    fn test_group_by_tags_orders_declared_then_undeclared() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        let pet = md.find("### pet").unwrap();
        let admin = md.find("### admin").unwrap();
        let untagged = md.find("### Untagged").unwrap();
        assert!(pet < admin && admin < untagged);
        // Declared tag without operations gets no section
        assert!(!md.contains("### store"));
        // Multi-tagged operation appears under each tag
        assert_eq!(md.matches("#### Create pet").count(), 2);
    }

    #[test]
    fn test_group_as_is_lists_operations_without_tag_sections() {
        let md = render_markdown(&petstore(), GroupBy::AsIs);

        assert!(!md.contains("### pet\n"));
        assert!(md.contains("### List pets"));
        assert_eq!(md.matches("### Create pet").count(), 1);
        // Falls back to method and path when there is no summary
        assert!(md.contains("### GET /health"));
    }

    #[test]
    fn test_operation_details() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        assert!(md.contains("```\nGET /pets\n```"));
        assert!(md.contains("|**Query**|**limit**<br>*optional*||integer (int32)|`20`|"));
        assert!(md.contains("|**Body**|**body**<br>*required*||[Pet](#definition-pet)||"));
        assert!(md.contains("|**200**|A list|&lt; [Pet](#definition-pet) &gt; array|"));
        assert!(md.contains("|**201**|Created|No Content|"));
        assert!(md.contains("* `application/json`"));
    }

    #[test]
    fn test_definitions_table() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        assert!(md.contains("### <a id=\"definition-pet\"></a>Pet\n"));
        assert!(md.contains("|**id**<br>*optional*<br>*read-only*||integer (int64)|"));
        assert!(md.contains("|**name**<br>*required*|Pet name<br>**Example** : `doggie`|string|"));
        assert!(md.contains("&lt; string, string &gt; map"));
    }

    #[test]
    fn test_overview_metadata() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        assert!(md.contains("*Version* : 1.0.0"));
        assert!(md.contains("*License* : MIT"));
        assert!(md.contains("*Host* : petstore.example.com  \n*BasePath* : /v1  \n*Schemes* : HTTP, HTTPS"));
        assert!(md.contains("* pet : Everything about pets"));
    }

    #[test]
    fn test_security_definitions() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        assert!(md.contains("### api_key"));
        assert!(md.contains("*Type* : apiKey  \n*Name* : X-API-Key  \n*In* : HEADER"));
    }

    #[test]
    fn test_description_html_is_escaped() {
        let md = render_markdown(&petstore(), GroupBy::Tags);

        assert!(md.contains("Sample &lt;b&gt;store&lt;/b&gt;"));
        assert!(!md.contains("<b>"));
    }

    #[test]
    fn test_pipe_in_cell_is_escaped() {
        let md = render_markdown(&petstore(), GroupBy::Tags);
        assert!(md.contains("UP \\| DOWN"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = petstore();
        assert_eq!(
            render_markdown(&doc, GroupBy::Tags),
            render_markdown(&doc, GroupBy::Tags)
        );
    }

    #[test]
    fn test_default_title() {
        let doc = SwaggerDocument::from_json(r#"{"swagger": "2.0"}"#).unwrap();
        let md = render_markdown(&doc, GroupBy::Tags);
        assert!(md.starts_with("# API documentation\n"));
        assert!(!md.contains("## Paths"));
    }

    #[test]
    fn test_code_span_handles_backticks() {
        assert_eq!(code_span("plain"), "`plain`");
        assert_eq!(code_span("a`b"), "``a`b``");
        assert_eq!(code_span("`x`"), "`` `x` ``");
    }

    #[test]
    fn test_location_label() {
        assert_eq!(location_label("path"), "Path");
        assert_eq!(location_label("formData"), "FormData");
        assert_eq!(location_label("header"), "Header");
    }
}
