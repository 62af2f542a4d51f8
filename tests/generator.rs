//! Tests for template generation: builder dispatch, configuration
//! defaults, supporting resources, and determinism.
mod common;
use common::*;
use serde_json::json;
use stackforge::prelude::*;

#[test]
fn generates_function_and_bucket_with_execution_role() {
    let workflow = function_and_bucket_workflow();
    let template = TemplateGenerator::default().generate(&workflow);

    assert_eq!(template.resources.len(), 3);

    let function = &template.resources["MyFn"];
    assert_eq!(function.resource_type, "AWS::Lambda::Function");
    assert_eq!(function.properties["Timeout"], json!(45));
    assert_eq!(function.properties["Runtime"], json!("nodejs18.x"));

    let bucket = &template.resources["Data"];
    assert_eq!(bucket.resource_type, "AWS::S3::Bucket");
    assert_eq!(bucket.properties["BucketName"], json!("data-bucket"));
    assert!(bucket.properties.get("BucketEncryption").is_some());

    let role = &template.resources[EXECUTION_ROLE_LOGICAL_ID];
    assert_eq!(role.resource_type, "AWS::IAM::Role");
}

#[test]
fn template_description_names_the_workflow() {
    let workflow = function_and_bucket_workflow();
    let template = TemplateGenerator::default().generate(&workflow);

    assert_eq!(
        template.description,
        "CloudFormation template for workflow: thumbnails"
    );
    assert_eq!(template.format_version, "2010-09-09");
}

#[test]
fn lambda_defaults_apply_when_configuration_is_empty() {
    let workflow = workflow(
        "empty",
        vec![service_node("n1", "lambda", "Fn", &[])],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    let properties = &template.resources["Fn"].properties;
    assert_eq!(properties["FunctionName"], json!("Fn"));
    assert_eq!(properties["Runtime"], json!("nodejs18.x"));
    assert_eq!(properties["Handler"], json!("index.handler"));
    assert_eq!(properties["Timeout"], json!(30));
    assert_eq!(properties["MemorySize"], json!(128));
    assert_eq!(properties["Environment"]["Variables"], json!({}));
}

#[test]
fn malformed_configuration_values_fall_back_to_defaults() {
    let workflow = workflow(
        "malformed",
        vec![service_node(
            "n1",
            "lambda",
            "Fn",
            &[
                ("timeout", json!("soon")),
                ("memorySize", json!(false)),
                ("runtime", json!("")),
                ("environment", json!("not-an-object")),
            ],
        )],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    let properties = &template.resources["Fn"].properties;
    assert_eq!(properties["Timeout"], json!(30));
    assert_eq!(properties["MemorySize"], json!(128));
    assert_eq!(properties["Runtime"], json!("nodejs18.x"));
    assert_eq!(properties["Environment"]["Variables"], json!({}));
}

#[test]
fn falsy_values_take_the_default_like_absent_ones() {
    let workflow = workflow(
        "falsy",
        vec![service_node("n1", "lambda", "Fn", &[("timeout", json!(0))])],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    assert_eq!(template.resources["Fn"].properties["Timeout"], json!(30));
}

#[test]
fn bucket_blocks_toggle_with_configuration() {
    let workflow = workflow(
        "buckets",
        vec![
            service_node(
                "n1",
                "s3",
                "Open",
                &[
                    ("encryption", json!(false)),
                    ("publicAccess", json!(true)),
                    ("versioning", json!(true)),
                ],
            ),
            service_node("n2", "s3", "Locked", &[("encryption", json!(true))]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    let open = &template.resources["Open"].properties;
    assert!(open.get("BucketEncryption").is_none());
    assert!(open.get("PublicAccessBlockConfiguration").is_none());
    assert_eq!(open["VersioningConfiguration"]["Status"], json!("Enabled"));

    let locked = &template.resources["Locked"].properties;
    assert_eq!(
        locked["BucketEncryption"]["ServerSideEncryptionConfiguration"][0]
            ["ServerSideEncryptionByDefault"]["SSEAlgorithm"],
        json!("AES256")
    );
    assert_eq!(
        locked["PublicAccessBlockConfiguration"]["BlockPublicAcls"],
        json!(true)
    );
    assert_eq!(locked["VersioningConfiguration"]["Status"], json!("Suspended"));
}

#[test]
fn bucket_name_defaults_to_lowercased_label() {
    let workflow = workflow(
        "buckets",
        vec![service_node("n1", "s3", "Data", &[])],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    assert_eq!(
        template.resources["Data"].properties["BucketName"],
        json!("data-bucket")
    );
}

#[test]
fn dynamodb_key_schema_follows_the_partition_key() {
    let workflow = workflow(
        "tables",
        vec![
            service_node("n1", "dynamodb", "Users", &[("partitionKey", json!("userId"))]),
            service_node("n2", "dynamodb", "Orders", &[]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    let users = &template.resources["Users"].properties;
    assert_eq!(users["KeySchema"][0]["AttributeName"], json!("userId"));
    assert_eq!(users["AttributeDefinitions"][0]["AttributeName"], json!("userId"));
    assert_eq!(users["AttributeDefinitions"][0]["AttributeType"], json!("S"));

    let orders = &template.resources["Orders"].properties;
    assert_eq!(orders["KeySchema"][0]["AttributeName"], json!("id"));
    assert_eq!(orders["BillingMode"], json!("PAY_PER_REQUEST"));
}

#[test]
fn ec2_key_name_is_emitted_only_when_configured() {
    let workflow = workflow(
        "instances",
        vec![
            service_node("n1", "ec2", "Bare", &[]),
            service_node("n2", "ec2", "Keyed", &[("keyName", json!("ops-key"))]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    let bare = &template.resources["Bare"].properties;
    assert!(bare.get("KeyName").is_none());
    assert_eq!(bare["InstanceType"], json!("t2.micro"));
    assert_eq!(bare["SecurityGroups"], json!([]));

    let keyed = &template.resources["Keyed"].properties;
    assert_eq!(keyed["KeyName"], json!("ops-key"));
}

#[test]
fn rds_password_is_a_secrets_manager_reference() {
    let workflow = workflow(
        "databases",
        vec![service_node("n1", "rds", "Main", &[])],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    let main = &template.resources["Main"].properties;
    assert_eq!(main["Engine"], json!("mysql"));
    assert_eq!(
        main["MasterUserPassword"],
        json!("{{resolve:secretsmanager:rds-password:SecretString:password}}")
    );
}

#[test]
fn execution_role_is_a_singleton_across_compute_nodes() {
    let workflow = workflow(
        "functions",
        vec![
            service_node("n1", "lambda", "First", &[]),
            service_node("n2", "lambda", "Second", &[]),
            service_node("n3", "lambda", "Third", &[]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    assert_eq!(template.resources.len(), 4);
    let roles: Vec<_> = template
        .resources
        .values()
        .filter(|resource| resource.resource_type == "AWS::IAM::Role")
        .collect();
    assert_eq!(roles.len(), 1);
}

#[test]
fn no_compute_nodes_means_no_execution_role() {
    let workflow = workflow(
        "storage-only",
        vec![
            service_node("n1", "s3", "Bucket", &[]),
            service_node("n2", "sqs", "Queue", &[]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    assert!(template.resources.get(EXECUTION_ROLE_LOGICAL_ID).is_none());
}

#[test]
fn unsupported_services_are_skipped_silently() {
    let workflow = workflow(
        "mixed",
        vec![
            service_node("n1", "quantum-widget", "Widget", &[]),
            service_node("n2", "s3", "Bucket", &[]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    assert_eq!(template.resources.len(), 1);
    assert!(template.resources.get("Widget").is_none());
}

#[test]
fn trigger_nodes_produce_no_resource() {
    let mut workflow = function_and_bucket_workflow();
    workflow.nodes.insert(0, trigger_node("n0"));
    workflow.edges.push(edge("e0", "n0", "n1"));

    let template = TemplateGenerator::default().generate(&workflow);
    assert_eq!(template.resources.len(), 3);
}

#[test]
fn resource_names_are_sanitized_labels_with_id_fallback() {
    let workflow = workflow(
        "names",
        vec![
            service_node("n1", "s3", "My Data Bucket!", &[]),
            service_node("n2", "s3", "3-buckets!", &[]),
            service_node("node3", "s3", "", &[]),
        ],
        vec![],
    );
    let template = TemplateGenerator::default().generate(&workflow);

    assert!(template.resources.get("MyDataBucket").is_some());
    assert!(template.resources.get("R3buckets").is_some());
    assert!(template.resources.get("node3").is_some());
}

#[test]
fn edges_do_not_alter_generated_resources() {
    let mut with_edges = function_and_bucket_workflow();
    let mut without_edges = function_and_bucket_workflow();
    without_edges.edges.clear();

    let generator = TemplateGenerator::default();
    let a = generator.generate(&with_edges);
    let b = generator.generate(&without_edges);
    assert_eq!(a, b);

    // Even a nonsensical edge changes nothing; validation happens before
    // commit, not here.
    with_edges.edges.push(edge("bogus", "n2", "n1"));
    let c = generator.generate(&with_edges);
    assert_eq!(a, c);
}

#[test]
fn generation_is_deterministic_byte_for_byte() {
    let workflow = function_and_bucket_workflow();
    let generator = TemplateGenerator::default();

    let first = generator.generate(&workflow).to_json().unwrap();
    let second = generator.generate(&workflow).to_json().unwrap();
    assert_eq!(first, second);
}

struct WidgetBuilder;

impl ResourceBuilder for WidgetBuilder {
    fn service_id(&self) -> &str {
        "quantum-widget"
    }

    fn build(&self, node: &WorkflowNode) -> Resource {
        Resource {
            resource_type: "Custom::QuantumWidget".to_string(),
            properties: json!({ "Label": node.data.label }),
        }
    }
}

#[test]
fn custom_builders_extend_the_registry() {
    let workflow = workflow(
        "custom",
        vec![service_node("n1", "quantum-widget", "Widget", &[])],
        vec![],
    );
    let generator = TemplateGenerator::builder()
        .with_custom_builder(Box::new(WidgetBuilder))
        .build();
    let template = generator.generate(&workflow);

    assert_eq!(
        template.resources["Widget"].resource_type,
        "Custom::QuantumWidget"
    );
}

#[test]
fn service_aliases_reuse_builtin_builders() {
    let workflow = workflow(
        "aliased",
        vec![service_node("n1", "object-storage", "Files", &[])],
        vec![],
    );
    let generator = TemplateGenerator::builder()
        .with_service_alias("object-storage", "s3")
        .build();
    let template = generator.generate(&workflow);

    assert_eq!(template.resources["Files"].resource_type, "AWS::S3::Bucket");
}
