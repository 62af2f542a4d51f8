//! # Stackforge - Workflow Validation and Template Generation Engine
//!
//! **Stackforge** is the headless core of a visual cloud-architecture
//! designer: it decides which service-to-service connections are legal and
//! deterministically compiles a graph of typed nodes into a CloudFormation
//! template. The canvas, dialogs, and persistence UI live elsewhere; this
//! crate owns the rules and the transformation.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical model of a designed workflow. The
//! primary flow is:
//!
//! 1.  **Load Your Data**: Parse your canvas export (JSON from the browser,
//!     a saved document from your database, etc.) into your own structs.
//! 2.  **Convert to the Canonical Model**: Implement the `IntoWorkflow`
//!     trait to translate your format into a `Workflow`.
//! 3.  **Validate**: Call `ServiceCatalog::validate_connection` on every
//!     proposed edge before committing it to the graph.
//! 4.  **Generate**: Hand the workflow to a `TemplateGenerator` and export
//!     the resulting `TemplateDocument` as JSON or YAML.
//!
//! ## Quick Start
//!
//! ```rust
//! use stackforge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = builtin::aws_catalog();
//!
//!     // Place two nodes the way the canvas would.
//!     let function = WorkflowNode::new("n1", "lambda", "Resize");
//!     let bucket = WorkflowNode::new("n2", "s3", "Uploads");
//!
//!     // Lambda may write to S3, and S3 accepts Lambda: the edge is legal.
//!     assert!(catalog.validate_connection(&function, &bucket));
//!
//!     let workflow = Workflow {
//!         name: "thumbnails".to_string(),
//!         nodes: vec![function, bucket],
//!         edges: vec![],
//!         ..Workflow::default()
//!     };
//!
//!     let generator = TemplateGenerator::default();
//!     let template = generator.generate(&workflow);
//!
//!     // Two node resources plus the synthesized execution role.
//!     assert_eq!(template.resources.len(), 3);
//!     println!("{}", template.to_yaml()?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod deploy;
pub mod error;
pub mod prelude;
pub mod rules;
pub mod store;
pub mod template;
pub mod workflow;
