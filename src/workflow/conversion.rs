use super::definition::Workflow;
use crate::error::WorkflowConversionError;

/// A trait for custom canvas data models that can be converted into a
/// canonical `Workflow`.
///
/// This is the primary extension point for making stackforge
/// format-agnostic. Canvas libraries all export slightly different node and
/// edge shapes; by implementing this trait on your own structs you provide
/// the translation layer that lets the rule engine and template generator
/// process your format.
///
/// # Example
///
/// ```rust,no_run
/// use stackforge::prelude::*;
/// use stackforge::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your canvas export.
/// struct MyCanvasNode { id: String, service: String, label: String }
/// struct MyCanvasExport { nodes: Vec<MyCanvasNode> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for MyCanvasExport {
///     fn into_workflow(self) -> std::result::Result<Workflow, WorkflowConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| WorkflowNode::new(n.id, n.service, n.label))
///             .collect();
///
///         Ok(Workflow {
///             name: "imported".to_string(),
///             nodes,
///             edges: vec![], // Convert your edges here as well
///             ..Workflow::default()
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a canonical workflow.
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError>;
}
