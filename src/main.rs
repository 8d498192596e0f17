//! tacho-view: tachograph driver-activity timeline viewer.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tacho_view::{
    cli::{run_view, ViewConfig},
    model::DaySheet,
    reports::ReportFormat,
    tui::{set_theme, Theme},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with interface info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Day-sheet JSON: {driver?, recordedOn?, activities: [{status, startHours, endHours}]}",
        "\n  or a bare activity array",
        "\n\nOutput Formats:",
        "\n  tui, summary, json (auto detects TTY)",
        "\n\nActivity statuses:",
        "\n  AVAILABLE, DRIVING, REST, OTHER_WORK, UNKNOWN"
    )
}

#[derive(Parser)]
#[command(name = "tacho-view")]
#[command(version, long_version = build_long_version())]
#[command(about = "Tachograph driver-activity timeline viewer", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Explore the built-in demo day interactively
    tacho-view view

    # View a recorded day sheet
    tacho-view view day.json

    # Export a JSON report for processing
    tacho-view view day.json -o json > report.json

    # Emit the demo dataset as a day sheet
    tacho-view demo > day.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Theme for the TUI (dark, light, high-contrast)
    #[arg(long, global = true, env = "TACHO_VIEW_THEME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View a driver-activity day (TUI when interactive)
    View {
        /// Path to a day-sheet JSON file (built-in demo day if omitted)
        input: Option<PathBuf>,

        /// Output format (auto detects TTY: tui if interactive, summary otherwise)
        #[arg(short, long, default_value = "auto")]
        output: ReportFormat,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Print the built-in demo day sheet as JSON
    Demo,

    /// Generate shell completions and print them to stdout
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let use_ansi = !cli.no_color && std::env::var("NO_COLOR").is_err();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi),
        )
        .init();

    if let Some(theme) = &cli.theme {
        set_theme(Theme::from_name(theme));
    }

    match cli.command {
        Commands::View {
            input,
            output,
            output_file,
        } => {
            run_view(ViewConfig {
                input,
                output,
                output_file,
            })?;
        }
        Commands::Demo => {
            let sheet = DaySheet::demo();
            println!("{}", serde_json::to_string_pretty(&sheet)?);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
