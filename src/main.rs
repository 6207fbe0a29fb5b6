//! cmdrec - command-line front end for the command recommender
//!
//! # Input (stdin or `--input FILE`)
//! JSON recommendation context: messages, connectedServices, recentActions,
//! currentView, hasWorkflows, hasSavedFiles, hasPurchases
//!
//! # Output (stdout)
//! JSON with a `recommendations` array of 0-3 ranked commands, plus a
//! per-command `breakdown` when `--explain` is given
//!
//! Logs go to stderr and are controlled with RUST_LOG.

use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use command_recommender::{
    Catalog, Category, CommandEntry, ConfidenceTier, Explanation, Recommendation,
    RecommendationContext, Recommender, RecommenderError, ScoringConfig,
};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

// ============================================================================
// CLI
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "cmdrec", version, about = "Suggest the next console command for a session")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Read the context from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Scoring config (JSON); defaults to the user config dir when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Include the per-command score breakdown
    #[arg(long)]
    explain: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List or search the command catalog
    Catalog {
        /// Filter on label, description, category or invocation
        #[arg(short, long)]
        query: Option<String>,

        /// Only this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the effective scoring config
    Config,
}

// ============================================================================
// Output Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendOutput {
    version: &'static str,
    recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<Explanation>>,
}

#[derive(Debug, Serialize)]
struct CategoryGroup<'a> {
    category: Category,
    color: &'static str,
    commands: Vec<&'a CommandEntry>,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RecommenderError> {
    let config = ScoringConfig::resolve(cli.config.as_deref())?;
    let recommender = Recommender::with_config(config)?;

    match cli.command {
        Some(Command::Catalog { query, category }) => {
            list_catalog(recommender.catalog(), query.as_deref(), category.as_deref(), cli.pretty)
        }
        Some(Command::Config) => emit(recommender.config(), cli.pretty),
        None => recommend(&recommender, cli.input.as_deref(), cli.explain, cli.pretty),
    }
}

fn recommend(
    recommender: &Recommender,
    input: Option<&Path>,
    explain: bool,
    pretty: bool,
) -> Result<(), RecommenderError> {
    let input_json = read_input(input)?;
    debug!("Received input: {}", input_json);

    let ctx = RecommendationContext::from_json(&input_json)?;
    info!(
        "Context: {} message(s), {} service(s), {} recent action(s), view {:?}",
        ctx.messages.len(),
        ctx.connected_services.len(),
        ctx.recent_actions.len(),
        ctx.current_view
    );

    let recommendations = recommender.recommend(&ctx);
    for rec in &recommendations {
        info!(
            "{} {} [{}] - confidence {}",
            "⚡".yellow(),
            rec.label.bold(),
            rec.category,
            tier_colored(rec)
        );
    }

    let (generated_at, breakdown) = if explain {
        (
            Some(chrono::Utc::now().to_rfc3339()),
            Some(recommender.explain(&ctx)),
        )
    } else {
        (None, None)
    };

    let output = RecommendOutput {
        version: "1.0",
        recommendations,
        generated_at,
        breakdown,
    };
    emit(&output, pretty)
}

fn list_catalog(
    catalog: &Catalog,
    query: Option<&str>,
    category: Option<&str>,
    pretty: bool,
) -> Result<(), RecommenderError> {
    let only: Option<Category> = category.map(str::parse::<Category>).transpose()?;

    let matches = catalog
        .search(query.unwrap_or(""))
        .into_iter()
        .filter(|c| only.map_or(true, |cat| c.category == cat));

    let groups: Vec<CategoryGroup<'_>> = Catalog::grouped(matches)
        .into_iter()
        .map(|(category, commands)| CategoryGroup {
            category,
            color: category.color(),
            commands,
        })
        .collect();

    info!("{} categories matched", groups.len());
    emit(&groups, pretty)
}

// ============================================================================
// Helpers
// ============================================================================

fn read_input(path: Option<&Path>) -> Result<String, RecommenderError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| RecommenderError::InputRead {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut input_json = String::new();
            io::stdin().read_to_string(&mut input_json)?;
            Ok(input_json)
        }
    }
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), RecommenderError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(RecommenderError::OutputSerialize)?;
    println!("{}", json);
    Ok(())
}

fn tier_colored(rec: &Recommendation) -> ColoredString {
    let text = format!("{}% {}", rec.confidence, rec.tier().as_str());
    match rec.tier() {
        ConfidenceTier::High => text.green(),
        ConfidenceTier::Medium => text.yellow(),
        ConfidenceTier::Low => text.red(),
    }
}
