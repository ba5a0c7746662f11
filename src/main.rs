//! Wordsweep main entry point
//!
//! This is the command-line interface for the Wordsweep site text harvester.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use wordsweep::config::{load_config_with_hash, validate, Config};
use wordsweep::crawler::{Coordinator, HttpFetcher};
use wordsweep::output::{print_statistics, write_outputs, CrawlStatistics};
use wordsweep::{CrawlScope, ScopeMode};
use tracing_subscriber::EnvFilter;

/// Wordsweep: a polite single-site text harvester
///
/// Wordsweep crawls a website breadth-first from a seed URL, stays on the
/// seed's domain, and collects the visible text of every HTML page into a
/// corpus file alongside a CSV log of every URL it visited.
#[derive(Parser, Debug)]
#[command(name = "wordsweep")]
#[command(version = "1.0.0")]
#[command(about = "A polite single-site text harvester", long_about = None)]
struct Cli {
    /// URL the crawl starts from
    #[arg(value_name = "SEED")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Stop after this many pages were crawled
    #[arg(short = 'n', long, value_name = "PAGE_LIMIT")]
    page_limit: Option<u32>,

    /// Minimum delay between requests, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// How strictly links must match the seed's domain
    #[arg(long, value_enum, value_name = "MODE")]
    scope: Option<ScopeMode>,

    /// Where to write the corpus text
    #[arg(long, value_name = "PATH")]
    corpus: Option<String>,

    /// Where to write the CSV crawl log
    #[arg(long, value_name = "PATH")]
    log: Option<String>,

    /// Where to write a markdown crawl summary
    #[arg(long, value_name = "PATH")]
    summary: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(limit) = self.page_limit {
            config.crawler.page_limit = Some(limit);
        }
        if let Some(delay) = self.delay_ms {
            config.crawler.politeness_delay = delay;
        }
        if let Some(scope) = self.scope {
            config.crawler.scope = scope;
        }
        if let Some(path) = &self.corpus {
            config.output.corpus_path = path.clone();
        }
        if let Some(path) = &self.log {
            config.output.log_path = path.clone();
        }
        if let Some(path) = &self.summary {
            config.output.summary_path = Some(path.clone());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    cli.apply_overrides(&mut config);
    validate(&config).context("invalid configuration")?;

    let scope = CrawlScope::new(&cli.seed, config.crawler.scope)
        .with_context(|| format!("cannot crawl '{}'", cli.seed))?;
    let fetcher =
        HttpFetcher::new(&config.user_agent, &scope).context("failed to build HTTP client")?;
    let coordinator = Coordinator::new(scope, fetcher, &config.crawler);

    let stop = coordinator.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing the current page");
            stop.stop();
        }
    });

    let report = coordinator.run().await;

    if report.corpus.is_empty() {
        tracing::warn!("No text was collected from {}", report.seed);
    }

    write_outputs(&report, &config.output, config_hash.as_deref())
        .context("failed to write crawl results")?;

    if !cli.quiet {
        println!();
        print_statistics(&CrawlStatistics::from_report(&report));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wordsweep=info,warn"),
            1 => EnvFilter::new("wordsweep=debug,info"),
            2 => EnvFilter::new("wordsweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
