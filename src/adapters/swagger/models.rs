//! Swagger 2.0 description models
//!
//! Only the parts of the description that end up in the rendered document are
//! modelled; unknown fields are ignored. Maps are ordered so that rendering is
//! deterministic regardless of the order in which a service emits its JSON.

use crate::domain::RenderError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Root of a Swagger 2.0 API description
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    /// Specification version, `"2.0"` for supported documents
    #[serde(default)]
    pub swagger: Option<String>,

    /// Present on OpenAPI 3 documents, which are not supported
    #[serde(default)]
    pub openapi: Option<String>,

    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub base_path: Option<String>,

    #[serde(default)]
    pub schemes: Vec<String>,

    #[serde(default)]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub produces: Vec<String>,

    /// Declared tags, in declaration order
    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    #[serde(default)]
    pub definitions: BTreeMap<String, Schema>,

    /// Reusable parameters referenced by `#/parameters/<name>`
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,

    #[serde(default)]
    pub security_definitions: BTreeMap<String, SecurityScheme>,
}

impl SwaggerDocument {
    /// Parses and checks a Swagger 2.0 description
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDescription`] when the body is not a JSON
    /// object describing an API, and [`RenderError::UnsupportedVersion`] for
    /// anything other than Swagger 2.0.
    pub fn from_json(body: &str) -> Result<Self, RenderError> {
        let document: SwaggerDocument = serde_json::from_str(body)
            .map_err(|e| RenderError::InvalidDescription(e.to_string()))?;

        match (document.swagger.as_deref(), document.openapi.as_deref()) {
            (Some("2.0"), _) => Ok(document),
            (Some(other), _) => Err(RenderError::UnsupportedVersion(format!("swagger {other}"))),
            (None, Some(openapi)) => {
                Err(RenderError::UnsupportedVersion(format!("openapi {openapi}")))
            }
            (None, None) => Err(RenderError::InvalidDescription(
                "missing 'swagger' version field".to_string(),
            )),
        }
    }

    /// Resolves a `#/parameters/<name>` reference
    pub fn resolve_parameter<'a>(&'a self, parameter: &'a Parameter) -> &'a Parameter {
        parameter
            .reference
            .as_deref()
            .and_then(|r| r.strip_prefix("#/parameters/"))
            .and_then(|name| self.parameters.get(name))
            .unwrap_or(parameter)
    }
}

/// General API metadata
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub terms_of_service: Option<String>,

    #[serde(default)]
    pub contact: Option<Contact>,

    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// HTTP methods in the order operations are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        };
        f.write_str(name)
    }
}

/// Operations available on a single path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,

    #[serde(default)]
    pub put: Option<Operation>,

    #[serde(default)]
    pub post: Option<Operation>,

    #[serde(default)]
    pub delete: Option<Operation>,

    #[serde(default)]
    pub options: Option<Operation>,

    #[serde(default)]
    pub head: Option<Operation>,

    #[serde(default)]
    pub patch: Option<Operation>,

    /// Parameters shared by every operation on this path
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// Operations defined on this path, in rendering order
    pub fn operations(&self) -> Vec<(HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Options, &self.options),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Patch, &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub produces: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub responses: BTreeMap<String, Response>,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub security: Vec<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Location: path, query, header, body or formData
    #[serde(rename = "in", default)]
    pub location: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    /// Body parameters describe their payload with a schema
    #[serde(default)]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub headers: BTreeMap<String, Header>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// JSON schema subset used by Swagger 2.0
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,

    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default)]
    pub all_of: Vec<Schema>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,

    #[serde(default)]
    pub example: Option<Value>,

    #[serde(default)]
    pub read_only: bool,
}

impl Schema {
    /// Name of the definition this schema references, if any
    pub fn reference_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(|r| r.strip_prefix("#/definitions/").unwrap_or(r))
    }
}

/// `additionalProperties` is either a flag or a schema
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Flag(bool),
    Schema(Box<Schema>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "in", default)]
    pub location: Option<String>,

    #[serde(default)]
    pub flow: Option<String>,

    #[serde(default)]
    pub authorization_url: Option<String>,

    #[serde(default)]
    pub token_url: Option<String>,

    #[serde(default)]
    pub scopes: BTreeMap<String, String>,
}
