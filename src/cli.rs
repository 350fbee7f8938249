//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DevMastery - terminal focus and growth dashboard
#[derive(Parser)]
#[command(
    name = "devmastery",
    about = "Terminal focus & growth dashboard with AI-generated daily plans",
    version,
    after_help = "Logs are written to: ~/.local/share/devmastery/logs/devmastery.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard (default)
    Tui,

    /// Generate a daily plan for an objective and print it
    Plan {
        /// The objective to break down into tasks
        objective: String,
    },

    /// Print the builtin checklist
    Tasks {
        /// Only show one category (mindset, code, system)
        #[arg(short = 't', long)]
        category: Option<String>,
    },
}

/// Path of the log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devmastery")
        .join("logs")
        .join("devmastery.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plan_subcommand() {
        let cli = Cli::parse_from(["dm", "plan", "ship the release"]);
        match cli.command {
            Some(Command::Plan { objective }) => assert_eq!(objective, "ship the release"),
            _ => panic!("expected plan subcommand"),
        }
    }

    #[test]
    fn test_default_is_no_subcommand() {
        let cli = Cli::parse_from(["dm"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_log_path_ends_with_log_file() {
        assert!(get_log_path().ends_with("devmastery/logs/devmastery.log"));
    }
}
