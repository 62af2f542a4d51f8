//! Per-service resource builders.
//!
//! One builder per supported service type, registered by id in the
//! generator. Builders are total: a missing, wrong-typed, or falsy
//! configuration value falls back to the documented default, so generation
//! never aborts because one node carries bad configuration.

use super::Resource;
use crate::workflow::WorkflowNode;
use ahash::AHashMap;
use serde_json::{Map, Value, json};

/// Defines the contract for turning one placed node into a template
/// resource declaration.
pub trait ResourceBuilder: Send + Sync {
    /// The service identifier this builder handles.
    fn service_id(&self) -> &str;

    /// Produces the `{ Type, Properties }` declaration for a node.
    fn build(&self, node: &WorkflowNode) -> Resource;

    /// Whether resources of this type run under the shared execution role.
    /// The generator synthesizes that role once if any node answers true.
    fn requires_execution_role(&self) -> bool {
        false
    }
}

/// Reads a string option, treating missing, empty, and non-string values
/// as absent.
fn string_or(node: &WorkflowNode, key: &str, default: &str) -> String {
    match node.option(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Reads a numeric option, treating missing, zero, and non-numeric values
/// as absent.
fn number_or(node: &WorkflowNode, key: &str, default: u64) -> u64 {
    match node.option(key).and_then(Value::as_u64) {
        Some(value) if value != 0 => value,
        _ => default,
    }
}

/// Reads a boolean option; non-boolean values take the default.
fn bool_or(node: &WorkflowNode, key: &str, default: bool) -> bool {
    node.option(key).and_then(Value::as_bool).unwrap_or(default)
}

const LAMBDA_CODE_STUB: &str =
    "exports.handler = async (event) => { console.log(event); return { statusCode: 200 }; };";

struct LambdaBuilder;

impl ResourceBuilder for LambdaBuilder {
    fn service_id(&self) -> &str {
        "lambda"
    }

    fn requires_execution_role(&self) -> bool {
        true
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        // The canvas carries an editable `code` option; the exported
        // function body is always the fixed stub.
        let environment = node
            .option("environment")
            .filter(|value| value.is_object())
            .cloned()
            .unwrap_or_else(|| json!({}));

        Resource {
            resource_type: "AWS::Lambda::Function".to_string(),
            properties: json!({
                "FunctionName": string_or(node, "functionName", &node.data.label),
                "Runtime": string_or(node, "runtime", "nodejs18.x"),
                "Handler": string_or(node, "handler", "index.handler"),
                "Code": { "ZipFile": LAMBDA_CODE_STUB },
                "Timeout": number_or(node, "timeout", 30),
                "MemorySize": number_or(node, "memorySize", 128),
                "Environment": { "Variables": environment },
            }),
        }
    }
}

struct S3Builder;

impl ResourceBuilder for S3Builder {
    fn service_id(&self) -> &str {
        "s3"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        let default_name = format!("{}-bucket", node.data.label.to_lowercase());
        let versioning = if bool_or(node, "versioning", false) {
            "Enabled"
        } else {
            "Suspended"
        };

        let mut properties = Map::new();
        properties.insert(
            "BucketName".to_string(),
            json!(string_or(node, "bucketName", &default_name)),
        );
        properties.insert(
            "VersioningConfiguration".to_string(),
            json!({ "Status": versioning }),
        );
        // Encryption opt-in adds the SSE block; opting out omits it
        // entirely rather than emitting a disabled block.
        if bool_or(node, "encryption", false) {
            properties.insert(
                "BucketEncryption".to_string(),
                json!({
                    "ServerSideEncryptionConfiguration": [{
                        "ServerSideEncryptionByDefault": { "SSEAlgorithm": "AES256" }
                    }]
                }),
            );
        }
        // Buckets are locked down unless the node explicitly opts into
        // public access.
        if !bool_or(node, "publicAccess", false) {
            properties.insert(
                "PublicAccessBlockConfiguration".to_string(),
                json!({
                    "BlockPublicAcls": true,
                    "BlockPublicPolicy": true,
                    "IgnorePublicAcls": true,
                    "RestrictPublicBuckets": true
                }),
            );
        }

        Resource {
            resource_type: "AWS::S3::Bucket".to_string(),
            properties: Value::Object(properties),
        }
    }
}

struct DynamoDbBuilder;

impl ResourceBuilder for DynamoDbBuilder {
    fn service_id(&self) -> &str {
        "dynamodb"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        let partition_key = string_or(node, "partitionKey", "id");

        Resource {
            resource_type: "AWS::DynamoDB::Table".to_string(),
            properties: json!({
                "TableName": string_or(node, "tableName", &node.data.label),
                "BillingMode": string_or(node, "billingMode", "PAY_PER_REQUEST"),
                "AttributeDefinitions": [{
                    "AttributeName": partition_key,
                    "AttributeType": "S"
                }],
                "KeySchema": [{
                    "AttributeName": partition_key,
                    "KeyType": "HASH"
                }],
            }),
        }
    }
}

struct ApiGatewayBuilder;

impl ResourceBuilder for ApiGatewayBuilder {
    fn service_id(&self) -> &str {
        "apigateway"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        Resource {
            resource_type: "AWS::ApiGateway::RestApi".to_string(),
            properties: json!({
                "Name": string_or(node, "name", &node.data.label),
                "Description": string_or(
                    node,
                    "description",
                    "API Gateway created by AWS Workflow Designer"
                ),
                "EndpointConfiguration": {
                    "Types": [string_or(node, "endpointType", "REGIONAL")]
                },
            }),
        }
    }
}

struct SnsBuilder;

impl ResourceBuilder for SnsBuilder {
    fn service_id(&self) -> &str {
        "sns"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        Resource {
            resource_type: "AWS::SNS::Topic".to_string(),
            properties: json!({
                "TopicName": string_or(node, "topicName", &node.data.label),
                "DisplayName": string_or(node, "displayName", &node.data.label),
                "FifoTopic": bool_or(node, "fifo", false),
            }),
        }
    }
}

struct SqsBuilder;

impl ResourceBuilder for SqsBuilder {
    fn service_id(&self) -> &str {
        "sqs"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        Resource {
            resource_type: "AWS::SQS::Queue".to_string(),
            properties: json!({
                "QueueName": string_or(node, "queueName", &node.data.label),
                "VisibilityTimeout": number_or(node, "visibilityTimeout", 30),
                "MessageRetentionPeriod": number_or(node, "messageRetentionPeriod", 345_600),
                "FifoQueue": bool_or(node, "fifo", false),
            }),
        }
    }
}

struct Ec2Builder;

impl ResourceBuilder for Ec2Builder {
    fn service_id(&self) -> &str {
        "ec2"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        let security_groups = node
            .option("securityGroups")
            .filter(|value| value.is_array())
            .cloned()
            .unwrap_or_else(|| json!([]));

        let mut properties = Map::new();
        properties.insert(
            "InstanceType".to_string(),
            json!(string_or(node, "instanceType", "t2.micro")),
        );
        properties.insert(
            "ImageId".to_string(),
            json!(string_or(node, "imageId", "ami-0abcdef1234567890")),
        );
        // KeyName has no default; it is emitted only when configured.
        if let Some(key_name) = node.option("keyName").and_then(Value::as_str) {
            properties.insert("KeyName".to_string(), json!(key_name));
        }
        properties.insert("SecurityGroups".to_string(), security_groups);

        Resource {
            resource_type: "AWS::EC2::Instance".to_string(),
            properties: Value::Object(properties),
        }
    }
}

struct RdsBuilder;

impl ResourceBuilder for RdsBuilder {
    fn service_id(&self) -> &str {
        "rds"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        Resource {
            resource_type: "AWS::RDS::DBInstance".to_string(),
            properties: json!({
                "Engine": string_or(node, "engine", "mysql"),
                "DBInstanceClass": string_or(node, "instanceClass", "db.t3.micro"),
                "AllocatedStorage": number_or(node, "allocatedStorage", 20),
                "MasterUsername": string_or(node, "masterUsername", "admin"),
                "MasterUserPassword":
                    "{{resolve:secretsmanager:rds-password:SecretString:password}}",
            }),
        }
    }
}

/// Registers the builders for every builtin service type.
pub(super) fn register_default_builders(registry: &mut AHashMap<String, Box<dyn ResourceBuilder>>) {
    for builder in [
        Box::new(LambdaBuilder) as Box<dyn ResourceBuilder>,
        Box::new(S3Builder),
        Box::new(DynamoDbBuilder),
        Box::new(ApiGatewayBuilder),
        Box::new(SnsBuilder),
        Box::new(SqsBuilder),
        Box::new(Ec2Builder),
        Box::new(RdsBuilder),
    ] {
        registry.insert(builder.service_id().to_string(), builder);
    }
}

/// Creates a builtin builder by its service id, for alias registration.
pub(super) fn create_builder_by_id(service_id: &str) -> Option<Box<dyn ResourceBuilder>> {
    match service_id {
        "lambda" => Some(Box::new(LambdaBuilder)),
        "s3" => Some(Box::new(S3Builder)),
        "dynamodb" => Some(Box::new(DynamoDbBuilder)),
        "apigateway" => Some(Box::new(ApiGatewayBuilder)),
        "sns" => Some(Box::new(SnsBuilder)),
        "sqs" => Some(Box::new(SqsBuilder)),
        "ec2" => Some(Box::new(Ec2Builder)),
        "rds" => Some(Box::new(RdsBuilder)),
        _ => None,
    }
}
