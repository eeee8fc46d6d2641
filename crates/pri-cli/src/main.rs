//! PRI Site developer CLI
//!
//! Checks pages against the markup contract the site script expects and
//! exercises the contact fallback without a browser.
//!
//! ## Usage
//!
//! ```bash
//! # Report which components a page wires up
//! pri-site check-markup index.html
//!
//! # Same, as JSON, failing when anything is inert
//! pri-site check-markup index.html --json --strict
//!
//! # Compose the mail fallback link for a submission
//! pri-site mailto --field nom=Koné --field message="Bonjour"
//!
//! # Validate a site configuration document
//! pri-site config site-config.json
//! ```

mod markup;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pri_core::{FormSnapshot, MailtoComposer, SiteConfig};

use crate::markup::MarkupIndex;
use crate::report::MarkupReport;

/// PRI Site - developer tools for the site script
#[derive(Parser)]
#[command(name = "pri-site")]
#[command(version)]
#[command(about = "PRI Site - markup contract checker and mail fallback tool")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a page for the ids and classes each component needs
    CheckMarkup {
        /// HTML file to scan
        file: PathBuf,

        /// Exit with an error when any component is inert or the config is invalid
        #[arg(long)]
        strict: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the mail-client fallback link for a form submission
    Mailto {
        /// Form field as name=value (repeatable, kept in order)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Site configuration providing the recipient and subject
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse a site configuration and summarize it
    Config {
        /// JSON configuration file
        file: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a `name=value` form field. The value may contain `=`.
fn parse_field(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}

fn read_config(path: &Path) -> Result<SiteConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    SiteConfig::from_json(&source)
        .with_context(|| format!("Invalid site config {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::CheckMarkup { file, strict, json } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let index = MarkupIndex::scan(&html);
            tracing::debug!(
                ids = index.ids.len(),
                classes = index.classes.len(),
                "markup scanned"
            );

            let report = MarkupReport::build(file.display().to_string(), &index);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render());
            }

            if strict && report.has_problems() {
                let inert = report.inert().count();
                anyhow::bail!(
                    "{} inert component(s), site config {}",
                    inert,
                    report.config.describe()
                );
            }
        }

        Commands::Mailto { fields, config } => {
            let config = match config {
                Some(path) => read_config(&path)?,
                None => SiteConfig::default(),
            };
            if fields.is_empty() {
                tracing::warn!("no fields given; the message body will be empty");
            }
            let snapshot: FormSnapshot = fields.into_iter().collect();
            println!("{}", MailtoComposer::new(&config.mail).compose(&snapshot));
        }

        Commands::Config { file } => {
            let config = read_config(&file)?;
            let relay = &config.relay;

            println!("Relay:");
            match relay.validate() {
                Ok(()) => println!("  Status: configured"),
                Err(err) => println!("  Status: mail fallback only ({})", err),
            }
            println!("  Service: {}", relay.service_id);
            println!("  Template: {}", relay.template_id);
            println!("  Form: {}", relay.form_selector);
            println!("  Send timeout: {} ms", relay.send_timeout_ms);
            println!();
            println!("Mail fallback:");
            println!("  Recipient: {}", config.mail.recipient);
            println!("  Subject: {}", config.mail.subject);
            println!();
            println!("Log filter: {}", config.log_filter);
        }
    }

    Ok(())
}
