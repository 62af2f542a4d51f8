//! Connection validation: the decision procedure the canvas consults before
//! committing an edge.
//!
//! All answers are pure reads over the `ServiceCatalog` rule table; there is
//! no other source of connection truth. Unknown service identifiers fail
//! closed — the edge is rejected rather than raising.

use crate::catalog::{ServiceCatalog, TRIGGER_SERVICE};
use crate::workflow::WorkflowNode;

impl ServiceCatalog {
    /// Decides whether a directed edge from `source` to `target` is legal.
    ///
    /// Evaluation order:
    /// 1. a trigger source may connect to anything except another trigger;
    /// 2. nothing may connect to a trigger;
    /// 3. unknown service identifiers on either side reject the edge;
    /// 4. otherwise both rule sets must agree: the target must appear in
    ///    the source's `can_connect_to` AND the source in the target's
    ///    `can_receive_from`. Either descriptor alone may veto, so a single
    ///    misconfigured rule set cannot silently legalize an edge.
    pub fn validate_connection(&self, source: &WorkflowNode, target: &WorkflowNode) -> bool {
        self.validate_services(source.service(), target.service())
    }

    /// `validate_connection` over bare service identifiers.
    pub fn validate_services(&self, source_service: &str, target_service: &str) -> bool {
        if source_service == TRIGGER_SERVICE {
            return target_service != TRIGGER_SERVICE;
        }
        if target_service == TRIGGER_SERVICE {
            return false;
        }

        let (Some(source), Some(target)) = (self.get(source_service), self.get(target_service))
        else {
            return false;
        };

        let can_connect = source
            .connection_rules
            .can_connect_to
            .iter()
            .any(|id| id == target_service);
        let can_receive = target
            .connection_rules
            .can_receive_from
            .iter()
            .any(|id| id == source_service);

        can_connect && can_receive
    }

    /// Services a node of `source_service` may originate an edge to.
    ///
    /// This is a UI affordance hint only: it reports the source-side rule
    /// set without intersecting the reverse rules, so a listed target may
    /// still veto the edge in `validate_connection`.
    pub fn valid_targets(&self, source_service: &str) -> Vec<&str> {
        if source_service == TRIGGER_SERVICE {
            return self.ids().collect();
        }
        self.get(source_service)
            .map(|service| {
                service
                    .connection_rules
                    .can_connect_to
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Services that may originate an edge into `target_service`, with the
    /// trigger pseudo-type unconditionally first: every real service may
    /// always be triggered. Empty for triggers themselves.
    pub fn valid_sources(&self, target_service: &str) -> Vec<&str> {
        if target_service == TRIGGER_SERVICE {
            return Vec::new();
        }
        let rule_sources: Vec<&str> = self
            .get(target_service)
            .map(|service| {
                service
                    .connection_rules
                    .can_receive_from
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default();

        std::iter::once(TRIGGER_SERVICE)
            .chain(rule_sources)
            .collect()
    }

    /// A human-readable verdict for a proposed pair, suitable for a canvas
    /// tooltip: a description of what the connection does when it is legal,
    /// or an explanation that it is not supported.
    pub fn connection_message(&self, source_service: &str, target_service: &str) -> String {
        if self.validate_services(source_service, target_service) {
            connection_description(source_service, target_service)
        } else {
            format!(
                "Connection between {} and {} is not supported in AWS architecture.",
                source_service.to_uppercase(),
                target_service.to_uppercase()
            )
        }
    }
}

fn connection_description(source: &str, target: &str) -> String {
    if source == TRIGGER_SERVICE {
        return format!("Click trigger will activate {}", target.to_uppercase());
    }

    let description = match (source, target) {
        ("lambda", "s3") => "Lambda function can read from and write to S3 bucket",
        ("lambda", "dynamodb") => "Lambda function can perform CRUD operations on DynamoDB table",
        ("lambda", "sns") => "Lambda function can publish messages to SNS topic",
        ("lambda", "sqs") => "Lambda function can send messages to SQS queue",
        ("s3", "lambda") => "S3 bucket events can trigger Lambda function execution",
        ("apigateway", "lambda") => "API Gateway can invoke Lambda function for request processing",
        ("apigateway", "dynamodb") => {
            "API Gateway can directly integrate with DynamoDB for data operations"
        }
        _ => "Valid AWS service connection",
    };
    description.to_string()
}
