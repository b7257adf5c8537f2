mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::error;

use retailgen_core::{ConfigError, GenerationConfig};
use retailgen_eval::{
    AnalysisEngine, AnalyzeOptions, DatasetSummary, EvalError, SUMMARY_FILE,
    render_generation_summary,
};
use retailgen_generate::{GenerateOptions, GenerationEngine, GenerationError, Stage};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    fn stage(&self) -> Option<Stage> {
        match self {
            CliError::Generation(err) => err.stage(),
            _ => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "retailgen", version, about = "Synthetic retail dataset generator")]
struct Cli {
    /// Also append JSON log events to this file.
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the five tables and write them as CSV.
    Generate(GenerateArgs),
    /// Print a detailed report over an existing dataset.
    Analyze(AnalyzeArgs),
    /// Print the JSON Schema of the generation config.
    ConfigSchema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML config file; flags below override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output directory for the CSV files.
    #[arg(long, default_value = ".")]
    out: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    customers: Option<u32>,
    #[arg(long)]
    products: Option<u32>,
    #[arg(long)]
    stores: Option<u32>,
    #[arg(long)]
    orders: Option<u32>,
    /// Upper bound of line items per order.
    #[arg(long)]
    max_items: Option<u32>,
    /// Upper bound for generated dates (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE")]
    reference_date: Option<NaiveDate>,
    /// Skip generation_report.json.
    #[arg(long, default_value_t = false)]
    no_report: bool,
    /// Do not print the summary.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Directory holding the five CSV files.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// Write the summary as JSON (default: <dir>/analysis_summary.json).
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    json: Option<Option<PathBuf>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.log_file.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let stage = err.stage().map(Stage::as_str).unwrap_or("-");
            error!(stage, error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => run_generate(args),
        Command::Analyze(args) => run_analyze(args),
        Command::ConfigSchema => {
            let schema = schemars::schema_for!(GenerationConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = build_config(&args)?;
    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: args.out,
        write_report: !args.no_report,
    });
    let result = engine.run(&config)?;

    if !args.quiet {
        let summary = DatasetSummary::from_dataset(&result.dataset);
        println!("{}", render_generation_summary(&summary));
        println!();
        println!("Files written to {}:", result.out_dir.display());
        for table in &result.report.tables {
            println!("- {} ({} rows)", table.file, table.rows_generated);
        }
    }
    Ok(())
}

fn build_config(args: &GenerateArgs) -> Result<GenerationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(customers) = args.customers {
        config.customers = customers;
    }
    if let Some(products) = args.products {
        config.products = products;
    }
    if let Some(stores) = args.stores {
        config.stores = stores;
    }
    if let Some(orders) = args.orders {
        config.orders = orders;
    }
    if let Some(max_items) = args.max_items {
        config.max_items_per_order = max_items;
    }
    if args.reference_date.is_some() {
        config.reference_date = args.reference_date;
    }

    config.validate()?;
    Ok(config)
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let summary_path = args
        .json
        .map(|path| path.unwrap_or_else(|| args.dir.join(SUMMARY_FILE)));
    let engine = AnalysisEngine::new(AnalyzeOptions { summary_path });
    let result = engine.run(&args.dir)?;

    println!("{}", result.report);
    if let Some(path) = &result.summary_path {
        println!();
        println!("Summary written to {}", path.display());
    }
    Ok(())
}
