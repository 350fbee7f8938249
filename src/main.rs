//! DevMastery - terminal focus and growth dashboard
//!
//! CLI entry point for the dashboard and the batch plan generator.

use std::fs;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{info, warn};

use devmastery::cli::{Cli, Command, get_log_path};
use devmastery::config::Config;
use devmastery::domain::{builtin_categories, builtin_tasks};
use devmastery::llm::create_client;
use devmastery::planner::PlanGenerator;
use devmastery::tui;

fn setup_logging(verbose: bool) -> Result<()> {
    // Write to a log file, never stdout/stderr - the TUI owns the terminal
    let log_path = get_log_path();
    let log_dir = log_path.parent().unwrap_or_else(|| std::path::Path::new("."));

    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "DevMastery loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        // The dashboard is the default surface
        None | Some(Command::Tui) => cmd_tui(&config).await,
        Some(Command::Plan { objective }) => cmd_plan(&config, &objective).await,
        Some(Command::Tasks { category }) => cmd_tasks(category.as_deref()),
    }
}

/// Launch the dashboard
async fn cmd_tui(config: &Config) -> Result<()> {
    // The dashboard works without an API key; generation then resolves to
    // the failure placeholder instead of real suggestions.
    let generator = match create_client(&config.llm) {
        Ok(client) => PlanGenerator::new(client, config.generator.clone()),
        Err(e) => {
            warn!(error = %e, "LLM client unavailable, plan generation disabled");
            PlanGenerator::offline(config.generator.clone())
        }
    };

    tui::run(Arc::new(generator)).await
}

/// Generate a plan and print it (batch mode)
async fn cmd_plan(config: &Config, objective: &str) -> Result<()> {
    // Validate API key early
    if std::env::var(&config.llm.api_key_env).is_err() {
        return Err(eyre::eyre!(
            "LLM API key not found. Set the {} environment variable.",
            config.llm.api_key_env
        ));
    }

    let client = create_client(&config.llm).context("Failed to create LLM client")?;
    let generator = PlanGenerator::new(client, config.generator.clone());

    println!("Generating plan for: {}", objective.bold());
    println!();

    let plan = generator.generate(objective).await;

    if plan.is_empty() {
        println!("{}", "No tasks suggested.".yellow());
        return Ok(());
    }

    for task in &plan.tasks {
        println!(
            "  {} {} {}",
            "•".magenta(),
            task.title.bold(),
            format!("[{} XP]", task.xp).magenta()
        );
        println!("    {}", task.description.dimmed());
    }

    println!();
    println!("✓ {} task(s) suggested", plan.tasks.len());

    Ok(())
}

/// Print the builtin checklist
fn cmd_tasks(category: Option<&str>) -> Result<()> {
    let categories = builtin_categories();

    if let Some(want) = category
        && !categories.iter().any(|c| c.id == want)
    {
        return Err(eyre::eyre!(
            "Unknown category: {}. Available: mindset, code, system",
            want
        ));
    }

    let tasks = builtin_tasks();

    for cat in categories.iter().filter(|c| category.is_none_or(|want| want == c.id)) {
        println!("{} {}", cat.label.bold(), format!("({})", cat.id).dimmed());

        for task in tasks.iter().filter(|t| t.category_id == cat.id) {
            println!(
                "  {} {} {}",
                "·".magenta(),
                task.title,
                format!("[{} XP]", task.xp).dimmed()
            );
        }
        println!();
    }

    Ok(())
}
