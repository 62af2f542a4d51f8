//! Common test utilities for building workflows, nodes, and edges.
use serde_json::{Value, json};
use stackforge::prelude::*;

/// Creates a service node with the given configuration entries.
#[allow(dead_code)]
pub fn service_node(
    id: &str,
    service: &str,
    label: &str,
    config: &[(&str, Value)],
) -> WorkflowNode {
    let mut node = WorkflowNode::new(id, service, label);
    for (key, value) in config {
        node.data
            .configuration
            .insert(key.to_string(), value.clone());
    }
    node
}

/// Creates a trigger pseudo-node.
#[allow(dead_code)]
pub fn trigger_node(id: &str) -> WorkflowNode {
    WorkflowNode::new(id, TRIGGER_SERVICE, "Manual Trigger")
}

/// Creates a committed edge between two node ids.
#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        kind: "default".to_string(),
        data: None,
    }
}

/// Wraps nodes and edges into a named workflow.
#[allow(dead_code)]
pub fn workflow(name: &str, nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow {
        id: None,
        name: name.to_string(),
        description: None,
        nodes,
        edges,
        metadata: WorkflowMetadata::default(),
    }
}

/// One compute node writing to one store node: a function `MyFn` with a
/// raised timeout, and a bucket `Data` with encryption enabled.
#[allow(dead_code)]
pub fn function_and_bucket_workflow() -> Workflow {
    workflow(
        "thumbnails",
        vec![
            service_node(
                "n1",
                "lambda",
                "MyFn",
                &[("runtime", json!("nodejs18.x")), ("timeout", json!(45))],
            ),
            service_node(
                "n2",
                "s3",
                "Data",
                &[("bucketName", json!("data-bucket")), ("encryption", json!(true))],
            ),
        ],
        vec![edge("e1", "n1", "n2")],
    )
}
