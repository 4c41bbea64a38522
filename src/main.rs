//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `coffprobing` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - The maintenance commands (`--check-version`, `--update`)
//! - Saving and printing the grouped results

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use coffprobing::config::{
    Cli, RELEASE_API_URL, RELEASE_CHECK_TIMEOUT, RELEASE_DOWNLOAD_TIMEOUT, VERSION,
};
use coffprobing::initialization::{init_logger_with, init_release_client};
use coffprobing::output::{print_results, save_results, write_json_summary};
use coffprobing::run_scan;
use coffprobing::update::{check_version, self_update, UpdateOutcome, VersionStatus};

const BANNER: &str = r#"
   ______      ________                 __    _
  / ____/___  / __/ __/___  _________  / /_  (_)___  ____ _
 / /   / __ \/ /_/ /_/ __ \/ ___/ __ \/ __ \/ / __ \/ __ `/
/ /___/ /_/ / __/ __/ /_/ / /  / /_/ / /_/ / / / / / /_/ /
\____/\____/_/ /_/ / .___/_/   \____/_.___/_/_/ /_/\__, /
                  /_/                             /____/"#;

fn print_banner() {
    println!("{BANNER}   {VERSION}");
    println!("{:>59}\n", "G0urmetD");
}

async fn report_version() {
    let status = match init_release_client(RELEASE_CHECK_TIMEOUT) {
        Ok(client) => check_version(&client, RELEASE_API_URL, VERSION).await,
        Err(e) => VersionStatus::Unknown {
            reason: e.to_string(),
        },
    };
    log::info!("Release check: {status}");
    match status {
        VersionStatus::Latest => println!(
            "[{}] Coffprobing has the [{}] version: {VERSION} ...",
            "INF".blue(),
            "latest".green()
        ),
        VersionStatus::Outdated { latest } => println!(
            "[{}] Coffprobing has an [{}] version: {VERSION} (latest: {latest}) ...",
            "INF".blue(),
            "old".red()
        ),
        VersionStatus::Unknown { reason } => {
            println!("[{}] Version check failed: {reason}", "WRN".red())
        }
    }
}

async fn run_update() -> Result<UpdateOutcome> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let client = init_release_client(RELEASE_DOWNLOAD_TIMEOUT)
        .context("Failed to initialize release client")?;
    let outcome = self_update(&client, RELEASE_API_URL, VERSION, &exe)
        .await
        .context("Update failed")?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if !cli.no_banner {
        print_banner();
    }

    if cli.update {
        match run_update().await {
            Ok(UpdateOutcome::AlreadyLatest) => {
                println!("[{}] Coffprobing is already up to date ({VERSION}).", "INF".blue());
            }
            Ok(UpdateOutcome::Updated { version, backup }) => {
                println!(
                    "[{}] Tool updated to {version}! Backup saved as {}.",
                    "SUCCESS".green(),
                    backup.display()
                );
                println!("Please restart the tool to use the new version.");
            }
            Err(e) => {
                eprintln!("[{}] {:#}", "ERR".red(), e);
                process::exit(1);
            }
        }
        return Ok(());
    }

    if cli.check_version {
        report_version().await;
    }

    let report = match run_scan(cli.to_config()).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("[{}] {:#}", "ERR".red(), e);
            process::exit(1);
        }
    };

    if let Err(e) = save_results(&report.groups, &cli.output_dir).await {
        eprintln!("[{}] {:#}", "ERR".red(), e);
        process::exit(1);
    }

    print_results(
        &report.groups,
        Duration::from_secs_f64(report.elapsed_seconds),
    );

    if let Some(path) = &cli.json {
        if let Err(e) = write_json_summary(&report, path).await {
            eprintln!("[{}] {:#}", "ERR".red(), e);
            process::exit(1);
        }
    }

    Ok(())
}
