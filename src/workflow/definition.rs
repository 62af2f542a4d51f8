use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a designed workflow: the unit of
/// persistence and the input to connection validation and template generation.
/// This is the target structure for any custom canvas format conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    #[serde(default)]
    pub metadata: WorkflowMetadata,
}

/// Bookkeeping attached to a stored workflow. Timestamps are set by the
/// persistence collaborator, never by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub version: String,
}

impl Default for WorkflowMetadata {
    fn default() -> Self {
        Self {
            created_at: None,
            updated_at: None,
            version: "1.0.0".to_string(),
        }
    }
}

/// A single service instance placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: Position,
    pub data: NodeData,
}

impl WorkflowNode {
    /// Creates a node with an empty configuration at the canvas origin.
    pub fn new(
        id: impl Into<String>,
        service: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        let service = service.into();
        Self {
            id: id.into(),
            kind: if service == crate::catalog::TRIGGER_SERVICE {
                "trigger".to_string()
            } else {
                "custom".to_string()
            },
            position: Position::default(),
            data: NodeData {
                label: label.into(),
                service,
                configuration: AHashMap::new(),
                icon: None,
                color: None,
            },
        }
    }

    /// The service identifier this node was placed as.
    pub fn service(&self) -> &str {
        &self.data.service
    }

    /// Looks up a single configuration option.
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.configuration.get(key)
    }

    /// The node's label, falling back to its id when the label is empty.
    /// Resource names in generated templates are derived from this.
    pub fn display_name(&self) -> &str {
        if self.data.label.is_empty() {
            &self.id
        } else {
            &self.data.label
        }
    }
}

/// The payload of a canvas node: what the designer edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    pub service: String,
    #[serde(default)]
    pub configuration: AHashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Canvas coordinates. Carried through persistence and conversion unchanged;
/// irrelevant to validation and generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A committed directed connection between two nodes.
///
/// An edge must only be committed after `validate_connection` has accepted
/// the pair; nothing here re-checks that, and the owning graph is
/// responsible for removing edges when either endpoint is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

/// Optional edge annotations surfaced in the canvas UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}
