// ABOUTME: CLI exercising the WikiSearch core helpers.
// ABOUTME: Runs each helper against real input and prints JSON for verification.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use wikisearch_core::{
    analyze, disable_links, fetch_manifest_from, fetch_tables, parse_article_url,
    select_translator_in, LanguageCatalog, Settings, LANGUAGE_CODES_FILE, LOCALE_DIR,
    MANIFEST_URL,
};

/// Exercise the WikiSearch helper functions from the command line.
#[derive(Parser, Debug)]
#[command(name = "wikisearch-cli")]
#[command(about = "Run WikiSearch core helpers and print JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disable navigation in HTML read from a file or stdin.
    Sanitize {
        /// HTML file; "-" or omitted reads stdin.
        input: Option<String>,
    },
    /// Fetch the release manifest and print it.
    CheckUpdate {
        /// Manifest URL override.
        #[arg(long, default_value = MANIFEST_URL)]
        url: String,
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
    /// Extract the tables from an article page.
    Tables {
        url: String,
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
    /// Decompose an article URL into title and language.
    ParseUrl {
        url: String,
        /// Path to the language-code list.
        #[arg(long, default_value = LANGUAGE_CODES_FILE)]
        codes: PathBuf,
    },
    /// Compute text statistics for a file or stdin.
    Stats {
        /// Text file; "-" or omitted reads stdin.
        input: Option<String>,
    },
    /// Translate a message using the configured language.
    Translate {
        message: String,
        /// Language display name, e.g. "Spanish".
        #[arg(long)]
        language: Option<String>,
        /// Catalog directory.
        #[arg(long, default_value = LOCALE_DIR)]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Sanitize { input } => {
            let html = load_text(input.as_deref())?;
            print!("{}", disable_links(&html));
        }
        Command::CheckUpdate { url, timeout_secs } => {
            // propagate policy: a failed update check is the caller's to present
            let manifest = fetch_manifest_from(&url, Duration::from_secs(timeout_secs))
                .context("update check failed")?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Tables { url, timeout_secs } => {
            // degrade policy: an empty array is a valid outcome
            let tables = fetch_tables(&url, Duration::from_secs(timeout_secs));
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
        Command::ParseUrl { url, codes } => {
            // a missing code list is fatal here, at the top level
            let catalog = LanguageCatalog::load_from(&codes)
                .context("some required files are missing")?;
            let article = parse_article_url(&url, &catalog)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "title": article.title,
                    "language": article.language_name,
                    "code": article.language_code,
                }))?
            );
        }
        Command::Stats { input } => {
            let text = load_text(input.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&analyze(&text))?);
        }
        Command::Translate {
            message,
            language,
            dir,
        } => {
            let translator = select_translator_in(&dir, &Settings { language });
            println!("{}", translator.translate(&message));
        }
    }
    Ok(())
}

fn load_text(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => {
            fs::read_to_string(Path::new(path)).with_context(|| format!("failed to read {path}"))
        }
    }
}
