use thiserror::Error;

/// Errors that can occur while constructing a `ServiceCatalog`.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Duplicate service descriptor for id '{0}'")]
    DuplicateService(String),

    #[error("Service id '{0}' is reserved for the trigger pseudo-type")]
    ReservedIdentifier(String),

    #[error(
        "Service '{service_id}' references unknown service '{referenced_id}' in its connection rules"
    )]
    UnknownRuleReference {
        service_id: String,
        referenced_id: String,
    },
}

/// Errors that can occur while serializing a generated template.
///
/// Template generation itself is total and never fails; only the final
/// encoding step can, and in that case the export is abandoned whole.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to encode template as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode template as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur when converting a custom canvas format into a
/// canonical `Workflow`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),
}

/// Errors reported by a persistence collaborator.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Workflow '{0}' not found")]
    NotFound(String),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// Errors reported by a provisioning-submission collaborator.
#[derive(Error, Debug, Clone)]
pub enum DeployError {
    #[error("Deployment credentials are not configured; submission is unavailable")]
    MissingCredentials,

    #[error("Stack '{stack_name}' was rejected by the provisioning API: {message}")]
    Rejected { stack_name: String, message: String },

    #[error("Provisioning API failure: {0}")]
    Api(String),
}
