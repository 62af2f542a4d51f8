//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! stackforge crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use stackforge::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a saved workflow and export it as a template
//! let raw = std::fs::read_to_string("path/to/workflow.json")?;
//! let workflow: Workflow = serde_json::from_str(&raw)?;
//!
//! // The canvas validated edges before committing them; re-run the same
//! // check over the loaded document.
//! let catalog = builtin::aws_catalog();
//! for edge in &workflow.edges {
//!     let source = workflow.nodes.iter().find(|n| n.id == edge.source);
//!     let target = workflow.nodes.iter().find(|n| n.id == edge.target);
//!     if let (Some(source), Some(target)) = (source, target) {
//!         assert!(catalog.validate_connection(source, target));
//!     }
//! }
//!
//! let generator = TemplateGenerator::default();
//! let template = generator.generate(&workflow);
//! println!("{}", template.to_json()?);
//! # Ok(())
//! # }
//! ```

// Catalog and connection rules
pub use crate::catalog::{
    ConnectionRules, ServiceCatalog, ServiceDescriptor, TRIGGER_SERVICE, builtin,
};

// Workflow data model
pub use crate::workflow::{
    EdgeData, IntoWorkflow, NodeData, Position, Workflow, WorkflowEdge, WorkflowMetadata,
    WorkflowNode,
};

// Template generation
pub use crate::template::{
    EXECUTION_ROLE_LOGICAL_ID, Resource, ResourceBuilder, TemplateDocument, TemplateGenerator,
    sanitize_logical_id,
};

// Boundary collaborators
pub use crate::deploy::{StackStatus, StackSubmitter, Submission};
pub use crate::store::{MemoryStore, WorkflowStore};

// Error types
pub use crate::error::{CatalogError, StoreError, TemplateError, WorkflowConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
