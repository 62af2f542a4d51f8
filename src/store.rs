//! Persistence boundary.
//!
//! The core has no opinion on how workflows are stored; hosts bring their
//! own database-backed implementation of `WorkflowStore`. `MemoryStore` is
//! the in-process reference implementation used by tests and demos.

use crate::error::StoreError;
use crate::workflow::Workflow;
use ahash::AHashMap;

/// Contract for a persistence collaborator holding named workflow
/// documents.
///
/// `save` is an upsert: a workflow without an id is assigned one and
/// created, a workflow with an id replaces the stored document. The stored
/// (id-bearing) document is returned. Timestamp maintenance belongs to the
/// implementation, not to callers.
pub trait WorkflowStore {
    fn save(&mut self, workflow: Workflow) -> Result<Workflow, StoreError>;
    fn load(&self, id: &str) -> Result<Workflow, StoreError>;
    fn list(&self) -> Result<Vec<Workflow>, StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-memory `WorkflowStore`. Ids are assigned sequentially; `list`
/// returns documents sorted by id so output is stable across runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    workflows: AHashMap<String, Workflow>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

impl WorkflowStore for MemoryStore {
    fn save(&mut self, mut workflow: Workflow) -> Result<Workflow, StoreError> {
        let id = match workflow.id.clone() {
            Some(id) => id,
            None => {
                self.next_id += 1;
                format!("wf-{}", self.next_id)
            }
        };
        workflow.id = Some(id.clone());
        self.workflows.insert(id, workflow.clone());
        Ok(workflow)
    }

    fn load(&self, id: &str) -> Result<Workflow, StoreError> {
        self.workflows
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        let mut workflows: Vec<Workflow> = self.workflows.values().cloned().collect();
        workflows.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(workflows)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.workflows
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
