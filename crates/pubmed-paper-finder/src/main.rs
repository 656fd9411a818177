//! get-papers-list - Entry Point
//!
//! Searches PubMed and lists papers with at least one non-academic author.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_paper_finder::formatters::{self, OutputFormat};
use pubmed_paper_finder::{PaperFinder, PubMedClient, config::Config};

/// Directive that turns on progress messages under `--debug`.
const DEBUG_DIRECTIVE: &str = "pubmed_paper_finder=debug";

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(
    about = "Fetch PubMed papers and extract non-academic authors from pharma/biotech companies."
)]
#[command(version)]
struct Cli {
    /// Search query to fetch PubMed papers
    #[arg(short, long)]
    query: String,

    /// Save output to this CSV file instead of printing it
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print progress messages while processing
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of papers to fetch
    #[arg(long, default_value_t = 20)]
    max_results: u32,

    /// Console output format (ignored with --file)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Contact email sent to NCBI with each request (overrides ENTREZ_EMAIL)
    #[arg(long)]
    email: Option<String>,

    /// NCBI API key, enables higher rate limits (overrides NCBI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

/// Build the log filter from `RUST_LOG` (or `warn`), forcing debug output for
/// this crate when `debug` is set.
fn log_filter(debug: bool, env_directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if debug {
        return Ok(filter.add_directive(DEBUG_DIRECTIVE.parse()?));
    }
    Ok(filter)
}

fn init_tracing(debug: bool, json: bool) -> anyhow::Result<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(debug, env_directives.as_deref())?;

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact().without_time()).init();
    }
    Ok(())
}

/// Environment configuration with non-empty command-line values on top.
fn client_config(email: Option<String>, api_key: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
        config.email = Some(email);
    }
    if let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.api_key = Some(api_key);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.debug, cli.json_logs)?;

    let config = client_config(cli.email, cli.api_key)?;
    let client = PubMedClient::new(config)?;
    let finder = PaperFinder::new(client);

    let outcome = match finder.find(&cli.query, cli.max_results).await {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(status) = err.status() {
                tracing::error!(status, "PubMed request failed");
            }
            return Err(err.into());
        }
    };

    if let Some(path) = &cli.file {
        formatters::write_csv_file(path, &outcome.papers)?;
        println!("Results saved to {}", path.display());
        return Ok(());
    }

    match cli.format {
        OutputFormat::Text => print!("{}", formatters::format_papers_text(&outcome.papers)),
        OutputFormat::Json => println!("{}", formatters::format_papers_json(&outcome.papers)?),
    }

    Ok(())
}
