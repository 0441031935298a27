//! Shorecheck CLI - UI verification for the beach-discovery app
//!
//! Usage:
//!   shorecheck verify               Run the verification checklist
//!   shorecheck verify --roundtrip   Also exercise the reverse toggle
//!   shorecheck init                 Write a default shorecheck.toml

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shorecheck_browser::{BrowserConfig, BrowserSession};
use shorecheck_core::{RunReport, RunnerConfig};
use shorecheck_runner::{wait_for_app, Scenario, VerificationRunner};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "shorecheck")]
#[command(author, version, about = "UI verification runner for the beach-discovery app")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the verification checklist against the running app
    Verify(VerifyArgs),

    /// Write a default shorecheck.toml
    Init {
        /// Directory to write the config file into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct VerifyArgs {
    /// Base URL of the target application (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Beach to select and track through the itinerary
    #[arg(long)]
    beach: Option<String>,

    /// Upper bound for every blocking wait, in seconds (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Directory containing shorecheck.toml
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Also exercise the reverse toggle (remove the beach again)
    #[arg(long)]
    roundtrip: bool,

    /// Skip the preflight reachability probe
    #[arg(long)]
    no_preflight: bool,

    /// Connect to a running Chrome on this DevTools port instead of launching one
    #[arg(long, value_name = "PORT")]
    attach: Option<u16>,

    /// Run with a visible browser window
    #[arg(long)]
    headful: bool,

    /// Write the structured run report to this file as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Exit non-zero when any check failed, not only on fatal conditions
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Verify(args) => cmd_verify(args).await,
        Commands::Init { path } => cmd_init(path),
    }
}

async fn cmd_verify(args: VerifyArgs) -> Result<()> {
    let mut config = RunnerConfig::load_or_default(&args.config_dir)
        .context("Failed to load configuration")?;

    // CLI flags override the config file
    if let Some(url) = args.url {
        config.base_url = url;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = timeout;
    }
    if args.headful {
        config.browser.headless = false;
    }
    if args.no_preflight {
        config.preflight.enabled = false;
    }

    info!("Verifying {}", config.base_url);

    if config.preflight.enabled {
        wait_for_app(
            &config.base_url,
            Duration::from_secs(config.preflight.timeout_seconds),
        )
        .await
        .context("Target application is not reachable (is it running?)")?;
    }

    let browser_config = BrowserConfig {
        headless: config.browser.headless,
        window_width: config.browser.window_width,
        window_height: config.browser.window_height,
        timeout_seconds: config.timeout_seconds,
        poll_interval_ms: config.poll_interval_ms,
    };

    let session = match args.attach {
        Some(port) => BrowserSession::connect(port, browser_config)
            .await
            .context("Failed to attach to browser")?,
        None => BrowserSession::launch_with_config(browser_config)
            .await
            .context("Failed to launch browser")?,
    };

    let mut scenario = Scenario::default().with_roundtrip(args.roundtrip);
    if let Some(beach) = args.beach {
        scenario.beach = beach;
    }

    let runner = VerificationRunner::new(&session, config, scenario);
    let result = runner.run().await;

    // Release the browser before surfacing any fatal condition
    session.close().await?;

    let report = result.context("Verification run failed")?;

    print_summary(&report);

    if let Some(path) = args.json {
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Run report written to {}", path.display());
    }

    if args.strict && !report.all_passed() {
        anyhow::bail!("{} check(s) failed", report.failures().len());
    }

    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    let config_path =
        RunnerConfig::write_default(&path).context("Failed to write default config")?;
    println!("Wrote {}", config_path.display());
    Ok(())
}

fn print_summary(report: &RunReport) {
    println!();
    println!(
        "Checks passed: {}/{}",
        report.passed_count(),
        report.checks.len()
    );
    for failure in report.failures() {
        println!("  FAILED {}", failure.name);
    }
    for screenshot in &report.screenshots {
        println!("  Artifact {}", screenshot.display());
    }
}
