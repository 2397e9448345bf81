//! Scaffold Planner CLI
//!
//! Plans the artifact tree for a validated GraphQL schema document and writes
//! a plan manifest for the materialization step.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gql_scaffold::{
    classify, is_operation_root, Pipeline, PlanCollector, PlanManifest, ScaffoldConfig,
    SchemaDocument, StructuralKind,
};

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Plan scaffolding artifacts from a parsed GraphQL schema")]
struct Cli {
    /// Path to a config file (scaffold.toml)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full planning pass and emit a plan manifest
    Plan {
        /// Path to the schema document (JSON)
        schema: PathBuf,
        /// Manifest output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify every type in a schema document without planning
    Check {
        /// Path to the schema document (JSON)
        schema: PathBuf,
    },

    /// Print the effective configuration
    Config {
        /// Save the effective configuration to a file instead of printing
        #[arg(long)]
        save: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ScaffoldConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Plan { schema, output } => {
            let document = load_document(&schema, &config)?;

            let mut pipeline = Pipeline::with_parts(config.layout(), config.scalar_registry());
            let mut collector = PlanCollector::new();
            let summary = pipeline
                .run(&document, &mut collector)
                .context("planning pass aborted")?;

            println!(
                "✅ Planned {} artifacts for '{}' ({} entities, {} fixtures, {} type definitions, {} project-level)",
                summary.stats.total,
                document.project.name,
                summary.stats.entities,
                summary.stats.fixtures,
                summary.stats.type_definitions,
                summary.stats.global,
            );
            if summary.stats.skipped_types > 0 {
                println!(
                    "   {} type(s) planned no artifacts (operation roots / personalized scalars)",
                    summary.stats.skipped_types
                );
            }
            println!("   checksum: {}", summary.checksum);

            let manifest = PlanManifest::new(document.project, &summary, collector.into_plans());
            match output {
                Some(path) => {
                    manifest.write(&path)?;
                    println!("✅ Manifest written to {:?}", path);
                }
                None => println!("{}", serde_json::to_string_pretty(&manifest)?),
            }
            Ok(())
        }

        Commands::Check { schema } => {
            let document = load_document(&schema, &config)?;

            let mut failures = 0usize;
            for record in &document.types {
                match classify(record) {
                    Ok(kind) => {
                        let note = if kind == StructuralKind::Object && is_operation_root(record) {
                            " (operation root)"
                        } else {
                            ""
                        };
                        println!("✅ {} - {}{}", record.type_name, kind.as_str(), note);
                    }
                    Err(e) => {
                        failures += 1;
                        println!("❌ {} - {}", record.type_name, e);
                    }
                }
            }

            if failures > 0 {
                bail!("{} type(s) failed classification", failures);
            }
            println!("✅ All {} types classified", document.types.len());
            Ok(())
        }

        Commands::Config { save } => {
            match save {
                Some(path) => {
                    config.save(&path)?;
                    println!("✅ Configuration written to {}", path);
                }
                None => println!("{}", toml::to_string_pretty(&config)?),
            }
            Ok(())
        }
    }
}

fn load_document(path: &PathBuf, config: &ScaffoldConfig) -> anyhow::Result<SchemaDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema document {:?}", path))?;
    let mut document = SchemaDocument::from_json(&content)?;

    // Fill metadata fallbacks from configuration
    if document.project.author.is_empty() {
        if let Some(author) = &config.project.default_author {
            document.project.author = author.clone();
        }
    }
    if document.project.description == "none" {
        if let Some(description) = &config.project.default_description {
            document.project.description = description.clone();
        }
    }

    Ok(document)
}
