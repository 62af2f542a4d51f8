use super::builders::{ResourceBuilder, create_builder_by_id, register_default_builders};
use super::{Resource, TemplateDocument, sanitize_logical_id};
use crate::workflow::Workflow;
use ahash::AHashMap;
use serde_json::json;

/// Logical id of the synthesized execution role. Fixed, so repeated
/// generation against the same resource map overwrites the single entry.
pub const EXECUTION_ROLE_LOGICAL_ID: &str = "LambdaExecutionRole";

/// Transforms a validated workflow graph into a `TemplateDocument`.
///
/// Dispatch is a registry keyed by service identifier, one
/// `ResourceBuilder` per supported type; adding a service type is a single
/// builder registration. Nodes whose service id has no registered builder
/// produce no resource and no error (best-effort generation).
///
/// Generation is a pure function of the workflow: no state is kept between
/// calls, and identical input yields byte-identical serialized output.
pub struct TemplateGenerator {
    registry: AHashMap<String, Box<dyn ResourceBuilder>>,
}

/// Configures the builder registry before freezing it into a generator.
pub struct TemplateGeneratorBuilder {
    registry: AHashMap<String, Box<dyn ResourceBuilder>>,
}

impl TemplateGeneratorBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn ResourceBuilder>> = AHashMap::new();
        register_default_builders(&mut registry);
        Self { registry }
    }

    /// Registers a builder for a service type the builtin set does not
    /// cover, or overrides a builtin one.
    pub fn with_custom_builder(mut self, builder: Box<dyn ResourceBuilder>) -> Self {
        self.registry
            .insert(builder.service_id().to_string(), builder);
        self
    }

    /// Maps a host-specific service identifier onto a builtin builder, for
    /// canvases that name services differently.
    pub fn with_service_alias(mut self, alias: &str, builtin_id: &str) -> Self {
        if let Some(builder) = create_builder_by_id(builtin_id) {
            self.registry.insert(alias.to_string(), builder);
        }
        self
    }

    pub fn build(self) -> TemplateGenerator {
        TemplateGenerator {
            registry: self.registry,
        }
    }
}

impl Default for TemplateGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TemplateGenerator {
    pub fn builder() -> TemplateGeneratorBuilder {
        TemplateGeneratorBuilder::new()
    }

    /// Generates the template for a workflow.
    ///
    /// Resources are emitted in node order, named by the sanitized node
    /// label (node id when the label is empty). Edges do not alter the
    /// generated declarations; the only cross-resource output is the
    /// shared execution role added by the supporting pass.
    pub fn generate(&self, workflow: &Workflow) -> TemplateDocument {
        let mut template = TemplateDocument::new(format!(
            "CloudFormation template for workflow: {}",
            workflow.name
        ));

        for node in &workflow.nodes {
            let Some(builder) = self.registry.get(node.service()) else {
                // Unknown or unsupported service: skipped, not an error.
                continue;
            };
            let logical_id = sanitize_logical_id(node.display_name());
            template.resources.insert(logical_id, builder.build(node));
        }

        self.add_supporting_resources(&mut template, workflow);
        template
    }

    /// Synthesizes derived resources no single node declares. Currently:
    /// one shared execution role if any node's builder requires it,
    /// however many such nodes exist.
    fn add_supporting_resources(&self, template: &mut TemplateDocument, workflow: &Workflow) {
        let needs_role = workflow.nodes.iter().any(|node| {
            self.registry
                .get(node.service())
                .is_some_and(|builder| builder.requires_execution_role())
        });

        if needs_role {
            template
                .resources
                .insert(EXECUTION_ROLE_LOGICAL_ID.to_string(), execution_role());
        }
    }
}

/// The fixed baseline role: assumable by the compute service principal,
/// granted the basic execution managed policy and nothing else.
fn execution_role() -> Resource {
    Resource {
        resource_type: "AWS::IAM::Role".to_string(),
        properties: json!({
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": { "Service": "lambda.amazonaws.com" },
                    "Action": "sts:AssumeRole"
                }]
            },
            "ManagedPolicyArns": [
                "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole"
            ],
        }),
    }
}
