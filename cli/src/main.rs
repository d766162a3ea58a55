//! CLI for the Portfolio Showcase engine.
//!
//! Builds a complete portfolio page from a GitHub handle's public
//! repositories, manages the persisted theme preference, and relays contact
//! messages through the configured email service.

use clap::{Parser, Subcommand};
use portfolio_showcase::{
    ContactMessage, FilePreferences, RelayClient, RunSummary, Runner, RunnerConfig, SiteConfig,
    Theme, ThemeController,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Portfolio Showcase - Build a portfolio page from a GitHub profile.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the site configuration file.
    #[arg(long, default_value = "portfolio.toml")]
    config: PathBuf,

    /// Path to the preference state file.
    #[arg(long, default_value = "preferences.toml")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch repositories and write the rendered page.
    Build {
        /// Output path for the rendered page.
        #[arg(long, default_value = "index.html")]
        output: PathBuf,

        /// Force a theme ("light" or "dark") instead of the stored preference.
        #[arg(long)]
        theme: Option<String>,

        /// GitHub Personal Access Token for a higher rate limit.
        #[arg(long, env = "GITHUB_TOKEN")]
        token: Option<String>,
    },

    /// Read or change the persisted theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Relay a contact message through the configured email service.
    Send {
        /// Sender name.
        #[arg(long)]
        name: String,

        /// Sender email address.
        #[arg(long)]
        email: String,

        /// Message body.
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Print the stored preference.
    Get,
    /// Persist a preference ("light" or "dark").
    Set { value: String },
    /// Flip the stored preference and print the new value.
    Toggle,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match args.command {
        Command::Build {
            output,
            theme,
            token,
        } => {
            let site = SiteConfig::load(&args.config)?;
            let mut config = RunnerConfig::new(site, output)
                .with_state_path(args.state)
                .with_token(token);
            if let Some(theme) = theme {
                config = config.with_theme_override(theme.parse::<Theme>()?);
            }

            let runner = Runner::new(config)?;
            let summary = runner.run().await?;
            print_summary(&summary);

            if summary.all_success() {
                Ok(ExitCode::from(0))
            } else {
                Ok(ExitCode::from(1))
            }
        }

        Command::Theme { action } => {
            let mut controller = ThemeController::new(Box::new(FilePreferences::new(args.state)));
            match action {
                ThemeAction::Get => println!("{}", controller.preference()),
                ThemeAction::Set { value } => {
                    controller.set_preference(value.parse::<Theme>()?);
                }
                ThemeAction::Toggle => {
                    let next = controller.preference().opposite();
                    controller.set_preference(next);
                    println!("{next}");
                }
            }
            Ok(ExitCode::from(0))
        }

        Command::Send {
            name,
            email,
            message,
        } => {
            let site = SiteConfig::load(&args.config)?;
            let relay_config = site
                .relay
                .clone()
                .ok_or("no [relay] section in the site configuration")?;

            let relay = RelayClient::new(relay_config)?;
            relay
                .send(&ContactMessage {
                    from_name: name,
                    from_email: email,
                    message,
                })
                .await?;

            println!("Message sent!");
            Ok(ExitCode::from(0))
        }
    }
}

/// Prints the final build summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Theme: {}", summary.theme);

    if summary.fetch_failed {
        println!("  Projects: FAILED to load (error notice rendered)");
    } else {
        println!("  Repositories fetched: {}", summary.repositories_fetched);
        println!("  Web cards: {}", summary.web_count);
        println!("  Mobile cards: {}", summary.mobile_count);
    }
}
