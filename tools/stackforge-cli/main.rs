use clap::{Parser, ValueEnum};
use stackforge::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the designer's save payload (the shape the frontend
// posts to the workflow API) and are only used here for conversion.

#[derive(Deserialize)]
struct RawSavePayload {
    name: String,
    #[serde(default)]
    description: Option<String>,
    workflow_data: RawWorkflowData,
}

#[derive(Deserialize)]
struct RawWorkflowData {
    nodes: Vec<WorkflowNode>,
    edges: Vec<WorkflowEdge>,
    #[serde(default)]
    metadata: Option<WorkflowMetadata>,
}

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

// --- Converter Implementation ---
// This implements the conversion from the save payload to the canonical
// Workflow model.

impl IntoWorkflow for RawSavePayload {
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
        if self.name.trim().is_empty() {
            return Err(WorkflowConversionError::ValidationError(
                "workflow name must not be empty".to_string(),
            ));
        }

        Ok(Workflow {
            id: None,
            name: self.name,
            description: self.description,
            nodes: self.workflow_data.nodes,
            edges: self.workflow_data.edges,
            metadata: self.workflow_data.metadata.unwrap_or_default(),
        })
    }
}

/// Validate a designed workflow and export it as a CloudFormation template
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the saved workflow JSON file
    workflow_path: String,

    /// The template encoding to emit (defaults to JSON)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the template to this path instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Exit with an error if the workflow contains invalid edges
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let workflow_json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let payload: RawSavePayload = serde_json::from_str(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));
    let workflow = payload
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    // --- 3. Connection Validation ---
    println!("Validating workflow '{}'...", workflow.name);
    let validate_start = Instant::now();
    let catalog = builtin::aws_catalog();
    let invalid_edges = report_invalid_edges(&catalog, &workflow);
    let validate_duration = validate_start.elapsed();

    if invalid_edges > 0 {
        eprintln!("Found {} invalid edge(s)", invalid_edges);
        if cli.strict {
            exit_with_error("Aborting: --strict was given and the workflow has invalid edges");
        }
    } else {
        println!(
            "All {} edge(s) are valid connections",
            workflow.edges.len()
        );
    }

    // --- 4. Template Generation ---
    let generate_start = Instant::now();
    let generator = TemplateGenerator::default();
    let template = generator.generate(&workflow);
    let generate_duration = generate_start.elapsed();

    println!(
        "Generated {} resource(s) from {} node(s)",
        template.resources.len(),
        workflow.nodes.len()
    );

    // --- 5. Encoding and Output ---
    let encoded = match cli.format.unwrap_or(OutputFormat::Json) {
        OutputFormat::Json => template.to_json(),
        OutputFormat::Yaml => template.to_yaml(),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode template: {}", e)));

    match &cli.output {
        Some(path) => {
            fs::write(path, &encoded)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e)));
            println!("Template written to '{}'", path);
        }
        None => {
            println!("\n{}", encoded);
        }
    }

    let total_duration = total_start.elapsed();
    println!("--- Performance Summary ---");
    println!("File Loading:        {:?}", load_duration);
    println!("Edge Validation:     {:?}", validate_duration);
    println!("Template Generation: {:?}", generate_duration);
    println!("---------------------------");
    println!("Total Execution:     {:?}", total_duration);
}

/// Checks every committed edge against the catalog, printing a line per
/// invalid edge. Returns how many were invalid.
fn report_invalid_edges(catalog: &ServiceCatalog, workflow: &Workflow) -> usize {
    let mut invalid = 0;

    for edge in &workflow.edges {
        let source = workflow.nodes.iter().find(|n| n.id == edge.source);
        let target = workflow.nodes.iter().find(|n| n.id == edge.target);

        match (source, target) {
            (Some(source), Some(target)) => {
                if !catalog.validate_connection(source, target) {
                    eprintln!(
                        "  invalid edge {}: {}",
                        edge.id,
                        catalog.connection_message(source.service(), target.service())
                    );
                    invalid += 1;
                }
            }
            _ => {
                eprintln!(
                    "  dangling edge {}: missing endpoint '{}' or '{}'",
                    edge.id, edge.source, edge.target
                );
                invalid += 1;
            }
        }
    }

    invalid
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
