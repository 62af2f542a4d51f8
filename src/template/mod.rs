pub mod builders;
pub mod generator;

pub use builders::*;
pub use generator::*;

use crate::error::TemplateError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The CloudFormation template format version every generated document
/// carries.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// One named entry in a generated template: a resource type tag plus its
/// properties, mirroring the node's configuration under the
/// target-template key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties")]
    pub properties: serde_json::Value,
}

/// A generated infrastructure template.
///
/// Resources are kept in insertion order (node order, then supporting
/// resources), so generating twice from the same workflow yields
/// byte-identical encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Resources")]
    pub resources: IndexMap<String, Resource>,
    #[serde(rename = "Outputs", default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<IndexMap<String, serde_json::Value>>,
}

impl TemplateDocument {
    /// An empty template with the fixed format version.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description: description.into(),
            resources: IndexMap::new(),
            outputs: None,
        }
    }

    /// Structured-data encoding: pretty-printed JSON, two-space indent.
    ///
    /// On failure the export is abandoned whole; no partial document is
    /// ever produced.
    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Block-structured encoding: YAML. Losslessly equivalent to the JSON
    /// encoding — both decode back to the same logical document.
    pub fn to_yaml(&self) -> Result<String, TemplateError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_yaml(input: &str) -> Result<Self, TemplateError> {
        Ok(serde_yaml::from_str(input)?)
    }
}

/// Derives a template logical id from a node's display name.
///
/// Strips every character outside `[A-Za-z0-9]`, then escapes a leading
/// digit with an `R` prefix (logical ids must not start with a digit).
/// Idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_logical_id(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    match stripped.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("R{stripped}"),
        _ => stripped,
    }
}
