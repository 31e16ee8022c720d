mod config;
mod error;
mod fetch;
mod parser;
mod report;
mod text;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info};

use config::Settings;
use error::TermFreqError;
use text::stopwords::StopwordSet;

#[derive(Parser)]
#[command(name = "termfreq", about = "Calculates term frequency for given web page")]
struct Cli {
    /// Page to fetch
    url: String,
    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let t0 = Instant::now();
    let settings = Settings::new(cli.url, cli.verbose);
    info!("Start calculating for URL: {}", settings.url);

    // Panics inside the pipeline surface as a join error, not an abort message.
    std::panic::set_hook(Box::new(|info| debug!("Panic: {}", info)));
    let result = match tokio::spawn(run(settings)).await {
        Ok(result) => result,
        Err(join) => Err(anyhow::anyhow!(join)),
    };
    debug!("Done in {}", format_duration(t0.elapsed()));

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: Settings) -> anyhow::Result<Vec<String>> {
    let markup = fetch::fetch_page(&settings).await?;
    let stats = parser::process_page(&markup, StopwordSet::english())?;
    Ok(report::format(stats.title.as_deref(), &stats.terms, None))
}

/// The single line printed for a failed run.
fn failure_line(e: &anyhow::Error) -> String {
    match e.downcast_ref::<TermFreqError>() {
        Some(TermFreqError::MalformedDocument { reason }) => {
            debug!("Exception occurred during parsing: {}", reason);
            format!("Failed. {}", e)
        }
        Some(TermFreqError::Retrieval { .. }) => format!("Failed. {}", e),
        None => {
            debug!("Unexpected failure: {:?}", e);
            format!("Failed. Unexpected exception occurred: {}", e)
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
