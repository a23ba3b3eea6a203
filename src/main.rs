use anyhow::Result;
use clap::{Parser, Subcommand};

use claude_stats::display::ReportRenderer;
use claude_stats::engine::StatisticsService;
use claude_stats::logging::init_logging;
use claude_stats::source::FsLogSource;

#[derive(Parser)]
#[command(name = "claude-stats")]
#[command(about = "Token usage and cost statistics for Claude Code session logs")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show statistics for one project
    Project {
        /// Project path as opened in the editor (e.g. /home/dev/my-project)
        path: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show aggregated statistics across all projects
    All {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();

    let service = StatisticsService::new(FsLogSource::from_config());
    let renderer = ReportRenderer::new();

    match cli.command {
        Commands::Project { path, json } => match service.project_statistics(&path) {
            Some(stats) => renderer.render(&stats, json),
            None => print_no_data(&path, json),
        },
        Commands::All { json } => match service.all_projects_statistics() {
            Some(stats) => renderer.render(&stats, json),
            None => print_no_data("all projects", json),
        },
    }

    Ok(())
}

fn print_no_data(scope: &str, json: bool) {
    if json {
        println!("null");
    } else {
        println!("No Claude usage data found for {}.", scope);
    }
}
