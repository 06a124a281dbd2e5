//! word-freq: fetch a text, count its words in parallel, chart the most frequent.

mod config;
mod coordinator;
mod count;
mod error;
mod fetch;
mod logging;
mod pipeline;
mod split;
mod tokenize;
mod visualize;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use config::{PipelineConfig, DEFAULT_NUM_CHUNKS, DEFAULT_TOP_N};
use fetch::{Source, SourceFetcher};
use pipeline::{Outcome, Pipeline};
use visualize::{BarChart, JsonReport, Visualizer};

#[derive(Parser)]
#[command(name = "word-freq")]
#[command(about = "Count word frequencies of a text with parallel map/reduce and chart the top words")]
struct Cli {
    /// URL (http/https) or local path of the text.
    source: String,

    /// Number of fragments, and of parallel workers.
    #[arg(long, short = 'c', default_value_t = DEFAULT_NUM_CHUNKS)]
    chunks: NonZeroUsize,

    /// How many of the most frequent words to show.
    #[arg(long = "top", short = 'n', default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Treat the fetched text as HTML and count only its body text.
    #[arg(long)]
    html: bool,

    /// Write a JSON report to this path instead of printing a chart.
    #[arg(long, short = 'o')]
    json: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_cli(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error::report(&*err));
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: &Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let source: Source = cli.source.parse()?;
    let config = PipelineConfig {
        num_chunks: cli.chunks,
        top_n: cli.top_n,
    };
    let fetcher = SourceFetcher::new().extract_html(cli.html);

    let outcome = match &cli.json {
        Some(path) => run(fetcher, JsonReport::new(path), config, &source)?,
        None => run(fetcher, BarChart::stdout(), config, &source)?,
    };
    match (outcome, &cli.json) {
        (Outcome::NoData(reason), _) => println!("No data to visualize: {reason}."),
        (Outcome::Rendered { entries }, Some(path)) => {
            println!("Wrote top {entries} words to {:?}", path)
        }
        (Outcome::Rendered { .. }, None) => {}
    }
    Ok(())
}

fn run<V: Visualizer>(
    fetcher: SourceFetcher,
    visualizer: V,
    config: PipelineConfig,
    source: &Source,
) -> Result<Outcome, Box<dyn std::error::Error + Send + Sync>> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut pipeline = Pipeline::new(fetcher, visualizer, config);
    let outcome = rt.block_on(pipeline.run(source))?;
    Ok(outcome)
}
