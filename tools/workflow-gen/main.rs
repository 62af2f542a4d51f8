use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use stackforge::prelude::*;
use std::fs;

/// A CLI tool to generate random, rule-valid workflows for testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// How many service nodes to place
    #[arg(long, default_value_t = 6)]
    nodes: usize,

    /// Chance (percent) of committing each legal edge candidate
    #[arg(long, default_value_t = 40)]
    edge_chance: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.edge_chance > 100 {
        eprintln!("Error: --edge-chance ({}) must be 0-100", cli.edge_chance);
        std::process::exit(1);
    }

    println!(
        "Generating a workflow with {} service nodes (edge chance {}%)...",
        cli.nodes, cli.edge_chance
    );

    let catalog = builtin::aws_catalog();
    let workflow = generate_workflow(&mut rng, &catalog, cli.nodes, cli.edge_chance);

    let json_output = serde_json::to_string_pretty(&workflow)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Saved workflow '{}' ({} nodes, {} edges) to '{}'",
        workflow.name,
        workflow.nodes.len(),
        workflow.edges.len(),
        cli.output
    );

    Ok(())
}

/// Places one trigger plus `count` random service nodes, then commits every
/// edge candidate that passes `validate_connection` with the configured
/// probability. Every emitted edge is legal by construction.
fn generate_workflow(
    rng: &mut ThreadRng,
    catalog: &ServiceCatalog,
    count: usize,
    edge_chance: u32,
) -> Workflow {
    let services = catalog.services();
    let mut nodes = vec![WorkflowNode::new("node-0", TRIGGER_SERVICE, "Start")];

    for index in 1..=count {
        let descriptor = &services[rng.random_range(0..services.len())];
        let mut node = WorkflowNode::new(
            format!("node-{index}"),
            descriptor.id.clone(),
            format!("{}{}", descriptor.name.replace(' ', ""), index),
        );
        node.data.configuration = descriptor.default_configuration.clone();
        node.data.icon = descriptor.icon.clone();
        node.data.color = descriptor.color.clone();
        node.position = Position {
            x: rng.random_range(0.0..1200.0),
            y: rng.random_range(0.0..800.0),
        };
        nodes.push(node);
    }

    let mut edges = Vec::new();
    for source in &nodes {
        for target in &nodes {
            if source.id == target.id {
                continue;
            }
            if !catalog.validate_connection(source, target) {
                continue;
            }
            if rng.random_range(0..100) >= edge_chance {
                continue;
            }
            edges.push(WorkflowEdge {
                id: format!("edge-{}-{}", source.id, target.id),
                source: source.id.clone(),
                target: target.id.clone(),
                kind: "default".to_string(),
                data: None,
            });
        }
    }

    Workflow {
        id: None,
        name: "generated-workflow".to_string(),
        description: Some("Randomly generated test workflow".to_string()),
        nodes,
        edges,
        metadata: WorkflowMetadata::default(),
    }
}
