//! The built-in AWS service catalog.
//!
//! One descriptor per supported service, with the default configuration a
//! freshly placed node starts from and the connection rules consulted by
//! `validate_connection`. Hosts that need a different catalog can
//! deserialize their own descriptor list and build a `ServiceCatalog` from
//! it instead.

use super::{ConnectionRules, ServiceCatalog, ServiceDescriptor};
use ahash::AHashMap;
use serde_json::{Value, json};

const LAMBDA_DEFAULT_CODE: &str = r#"exports.handler = async (event) => {
    console.log('Event:', JSON.stringify(event, null, 2));

    // Your Lambda function logic here
    const response = {
        statusCode: 200,
        headers: {
            'Content-Type': 'application/json',
            'Access-Control-Allow-Origin': '*'
        },
        body: JSON.stringify({
            message: 'Hello from Lambda!',
            timestamp: new Date().toISOString(),
            event: event
        })
    };

    return response;
};"#;

/// The default catalog, validated. The descriptor data is static and known
/// to satisfy the catalog invariants.
pub fn aws_catalog() -> ServiceCatalog {
    ServiceCatalog::new(aws_descriptors()).expect("builtin catalog satisfies its own invariants")
}

/// The raw descriptor list behind `aws_catalog`, for hosts that want to
/// extend or filter it before building a catalog.
pub fn aws_descriptors() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor {
            id: "lambda".to_string(),
            name: "Lambda".to_string(),
            resource_type: "AWS::Lambda::Function".to_string(),
            icon: Some("Zap".to_string()),
            color: Some("#FF6B35".to_string()),
            category: "Compute".to_string(),
            description: "Run code without thinking about servers".to_string(),
            default_configuration: configuration(vec![
                ("runtime", json!("nodejs18.x")),
                ("handler", json!("index.handler")),
                ("timeout", json!(30)),
                ("memorySize", json!(128)),
                ("environment", json!({})),
                ("code", json!(LAMBDA_DEFAULT_CODE)),
            ]),
            connection_rules: rules(
                &["s3", "dynamodb", "apigateway", "sns", "sqs"],
                &["s3", "dynamodb", "apigateway", "sns", "sqs"],
            ),
        },
        ServiceDescriptor {
            id: "s3".to_string(),
            name: "S3".to_string(),
            resource_type: "AWS::S3::Bucket".to_string(),
            icon: Some("Database".to_string()),
            color: Some("#4ECDC4".to_string()),
            category: "Storage".to_string(),
            description: "Scalable storage in the cloud".to_string(),
            default_configuration: configuration(vec![
                ("bucketName", json!("")),
                ("versioning", json!(false)),
                ("encryption", json!(true)),
                ("publicAccess", json!(false)),
            ]),
            connection_rules: rules(&["lambda"], &["lambda", "ec2"]),
        },
        ServiceDescriptor {
            id: "dynamodb".to_string(),
            name: "DynamoDB".to_string(),
            resource_type: "AWS::DynamoDB::Table".to_string(),
            icon: Some("Table".to_string()),
            color: Some("#6C5CE7".to_string()),
            category: "Database".to_string(),
            description: "Fast and flexible NoSQL database".to_string(),
            default_configuration: configuration(vec![
                ("tableName", json!("")),
                ("partitionKey", json!("id")),
                ("sortKey", json!("")),
                ("billingMode", json!("PAY_PER_REQUEST")),
            ]),
            connection_rules: rules(&["lambda"], &["lambda", "apigateway"]),
        },
        ServiceDescriptor {
            id: "apigateway".to_string(),
            name: "API Gateway".to_string(),
            resource_type: "AWS::ApiGateway::RestApi".to_string(),
            icon: Some("Globe".to_string()),
            color: Some("#FF7675".to_string()),
            category: "Networking".to_string(),
            description: "Create, publish, and manage APIs".to_string(),
            default_configuration: configuration(vec![
                ("name", json!("")),
                ("description", json!("")),
                ("endpointType", json!("REGIONAL")),
                ("cors", json!(true)),
            ]),
            connection_rules: rules(&["lambda", "dynamodb"], &[]),
        },
        ServiceDescriptor {
            id: "sns".to_string(),
            name: "SNS".to_string(),
            resource_type: "AWS::SNS::Topic".to_string(),
            icon: Some("Bell".to_string()),
            color: Some("#FD79A8".to_string()),
            category: "Messaging".to_string(),
            description: "Pub/Sub messaging service".to_string(),
            default_configuration: configuration(vec![
                ("topicName", json!("")),
                ("displayName", json!("")),
                ("fifo", json!(false)),
            ]),
            connection_rules: rules(&["lambda", "sqs"], &["lambda", "s3"]),
        },
        ServiceDescriptor {
            id: "sqs".to_string(),
            name: "SQS".to_string(),
            resource_type: "AWS::SQS::Queue".to_string(),
            icon: Some("MessageSquare".to_string()),
            color: Some("#FDCB6E".to_string()),
            category: "Messaging".to_string(),
            description: "Message queuing service".to_string(),
            default_configuration: configuration(vec![
                ("queueName", json!("")),
                ("visibilityTimeout", json!(30)),
                ("messageRetentionPeriod", json!(345600)),
                ("fifo", json!(false)),
            ]),
            connection_rules: rules(&["lambda"], &["sns", "lambda"]),
        },
        ServiceDescriptor {
            id: "ec2".to_string(),
            name: "EC2".to_string(),
            resource_type: "AWS::EC2::Instance".to_string(),
            icon: Some("Server".to_string()),
            color: Some("#A29BFE".to_string()),
            category: "Compute".to_string(),
            description: "Virtual servers in the cloud".to_string(),
            default_configuration: configuration(vec![
                ("instanceType", json!("t2.micro")),
                ("imageId", json!("ami-0abcdef1234567890")),
                ("keyName", json!("")),
                ("securityGroups", json!([])),
            ]),
            connection_rules: rules(&["s3", "rds"], &[]),
        },
        ServiceDescriptor {
            id: "rds".to_string(),
            name: "RDS".to_string(),
            resource_type: "AWS::RDS::DBInstance".to_string(),
            icon: Some("Database".to_string()),
            color: Some("#74B9FF".to_string()),
            category: "Database".to_string(),
            description: "Managed relational database".to_string(),
            default_configuration: configuration(vec![
                ("engine", json!("mysql")),
                ("instanceClass", json!("db.t3.micro")),
                ("allocatedStorage", json!(20)),
                ("masterUsername", json!("admin")),
            ]),
            connection_rules: rules(&[], &["ec2", "lambda"]),
        },
    ]
}

fn configuration(pairs: Vec<(&str, Value)>) -> AHashMap<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn rules(can_connect_to: &[&str], can_receive_from: &[&str]) -> ConnectionRules {
    ConnectionRules {
        can_connect_to: can_connect_to.iter().map(|id| id.to_string()).collect(),
        can_receive_from: can_receive_from.iter().map(|id| id.to_string()).collect(),
    }
}
