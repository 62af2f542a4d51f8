use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Static metadata and connection rules for one supported service type.
///
/// Descriptors are value objects: loaded once into a `ServiceCatalog` at
/// startup and never mutated afterwards. The serde shape matches the JSON
/// catalog format emitted by the designer frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub id: String,
    pub name: String,
    /// Target-template resource type tag, e.g. `AWS::Lambda::Function`.
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub category: String,
    pub description: String,
    /// Seed configuration applied when a node of this type is placed.
    #[serde(default)]
    pub default_configuration: AHashMap<String, serde_json::Value>,
    pub connection_rules: ConnectionRules,
}

/// The two directed rule sets consulted by connection validation.
///
/// Both sides must agree before an edge is legal: `can_connect_to` on the
/// source and `can_receive_from` on the target. Either set alone may veto.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRules {
    pub can_connect_to: Vec<String>,
    pub can_receive_from: Vec<String>,
}
