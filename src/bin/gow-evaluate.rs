//! Graph-of-words evaluation binary
//!
//! Extracts keywords from a directory of abstracts with every method and
//! compares them against the matching gold keyword files.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use graph_of_words::corpus::{load_corpus, prepare_documents};
use graph_of_words::nlp::normalizer::CleanTextNormalizer;
use graph_of_words::nlp::stopwords::StopwordFilter;
use graph_of_words::pipeline::{Evaluator, ProgressLogger, RunSpec};
use graph_of_words::Method;

#[derive(Parser)]
#[command(name = "gow-evaluate")]
#[command(about = "Compare k-core, PageRank and TF-IDF keyword extraction", long_about = None)]
struct Cli {
    /// Directory of abstract files
    #[arg(short, long)]
    abstracts: PathBuf,

    /// Directory of gold keyword files (one per abstract)
    #[arg(short, long)]
    keywords: PathBuf,

    /// JSON run specification
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Methods to compare (comma-separated, e.g. "kcore,pagerank")
    #[arg(long, value_delimiter = ',')]
    methods: Vec<Method>,

    /// Co-occurrence window size
    #[arg(short, long)]
    window: Option<usize>,

    /// Fraction of ranked candidates retained by PageRank and TF-IDF
    #[arg(short, long)]
    retain: Option<f64>,

    /// PageRank damping factor
    #[arg(long)]
    damping: Option<f64>,

    /// Use co-occurrence counts as PageRank edge weights
    #[arg(long)]
    weighted: bool,

    /// Process documents in parallel
    #[arg(long)]
    parallel: bool,

    /// Output JSON report to file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log per-document details
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Load the run specification and apply command-line overrides
    fn run_spec(&self) -> Result<RunSpec> {
        let mut spec = match &self.spec {
            Some(path) => RunSpec::from_file(path)
                .with_context(|| format!("Failed to load run specification {}", path.display()))?,
            None => RunSpec::default(),
        };

        if !self.methods.is_empty() {
            spec.methods = self.methods.clone();
        }
        if let Some(window) = self.window {
            spec.config.window_size = window;
        }
        if let Some(retain) = self.retain {
            spec.config.retain_fraction = retain;
        }
        if let Some(damping) = self.damping {
            spec.config.damping = damping;
        }
        if self.weighted {
            spec.config.use_edge_weights = true;
        }
        if self.parallel {
            spec.config.parallel = true;
        }
        Ok(spec)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let spec = cli.run_spec()?;
    let evaluator = Evaluator::from_spec(&spec).context("Invalid run specification")?;
    let config = evaluator.config();

    let raw = load_corpus(&cli.abstracts, &cli.keywords).context("Failed to load corpus")?;
    let stopwords = StopwordFilter::new(&config.language).with_extra(&config.stopwords);
    let normalizer = CleanTextNormalizer::new(stopwords);
    let documents = prepare_documents(&raw, &normalizer);

    let mut logger = ProgressLogger::new();
    let report = evaluator
        .run(&documents, &mut logger)
        .context("Evaluation failed")?;

    println!();
    print!("{}", report.render_table());
    if let Some(best) = report.best_method() {
        println!(
            "\nBest F-1: {} ({:.2}%) over {} documents",
            best.method,
            best.percentages().f1,
            best.documents
        );
    }
    if !report.failures.is_empty() {
        println!("{} documents skipped:", report.failures.len());
        for failure in &report.failures {
            println!("  {}: {}", failure.id, failure.error);
        }
    }

    if let Some(output) = &cli.output {
        let json = report.to_json()?;
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
        tracing::info!(path = %output.display(), "report written");
    }

    Ok(())
}
