//! Proximity Search CLI
//!
//! Find the points within a radius of a named point.
//!
//! Usage:
//!     proximity-search query --data cities.txt --point "Boston, MA" --radius 5 --metric 0
//!     proximity-search interactive --data cities.txt
//!     proximity-search list --data cities.txt

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use proximity_search::adapters::session;
use proximity_search::core::{ConfigError, InvalidMetricCode};
use proximity_search::logging::init_logging;
use proximity_search::{
    DatasetError, DatasetReader, Metric, Near, Place, PointRegistry, ProximitySearchEngine,
    SearchConfig, SearchError, SearchReport,
};

/// Proximity Search - radius queries over named points
#[derive(Debug, Parser)]
#[command(name = "proximity-search")]
#[command(version)]
#[command(about = "Radius queries over named points in the plane", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a single query
    Query {
        /// Dataset file (overrides the configuration)
        #[arg(short, long)]
        data: Option<String>,

        /// Reference point name
        #[arg(short, long)]
        point: String,

        /// Search radius
        #[arg(short, long, allow_hyphen_values = true)]
        radius: f64,

        /// Metric code: 0 Euclidean, 1 Chebyshev, 2 Manhattan
        #[arg(short, long, allow_hyphen_values = true)]
        metric: Option<i64>,
    },

    /// Prompt for queries until `0` is entered
    Interactive {
        /// Dataset file (overrides the configuration)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// List every point in the dataset
    List {
        /// Dataset file (overrides the configuration)
        #[arg(short, long)]
        data: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<InvalidMetricCode> for CliError {
    fn from(err: InvalidMetricCode) -> Self {
        CliError::Search(err.into())
    }
}

/// Replace a leading `~` component with the home directory
fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn load_config(path: Option<&str>) -> Result<SearchConfig, CliError> {
    match path {
        Some(path) => Ok(SearchConfig::load(expand_path(path))?),
        None => Ok(SearchConfig::default()),
    }
}

/// `--data` wins over `data_file`; both get `~` expansion
fn data_path(config: &SearchConfig, data: Option<&str>) -> PathBuf {
    match data {
        Some(data) => expand_path(data),
        None => expand_path(&config.data_file),
    }
}

fn query_metric(config: &SearchConfig, metric: Option<i64>) -> Result<Metric, CliError> {
    match metric {
        Some(code) => Ok(Metric::from_code(code)?),
        None => Ok(config.default_metric),
    }
}

fn load_registry(config: &SearchConfig, data: Option<&str>) -> Result<PointRegistry, CliError> {
    Ok(DatasetReader::load(data_path(config, data))?)
}

fn cmd_query(
    config: &SearchConfig,
    data: Option<&str>,
    point: &str,
    radius: f64,
    metric: Option<i64>,
) -> Result<(), CliError> {
    let metric = query_metric(config, metric)?;
    let registry = load_registry(config, data)?;
    let engine = ProximitySearchEngine::new(&registry);

    let ranked = engine.search_with(point, radius, metric)?;
    let report = SearchReport::build(&engine, point, &ranked)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}")?;
    Ok(())
}

fn cmd_interactive(config: &SearchConfig, data: Option<&str>) -> Result<(), CliError> {
    let registry = load_registry(config, data)?;
    let engine = ProximitySearchEngine::new(&registry);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    session::run(&engine, stdin, &mut stdout)?;
    Ok(())
}

fn cmd_list(config: &SearchConfig, data: Option<&str>) -> Result<(), CliError> {
    let registry = load_registry(config, data)?;

    let mut stdout = io::stdout().lock();
    for (name, coordinates) in registry.entries() {
        writeln!(stdout, "{name}\t{coordinates}")?;
    }
    writeln!(stdout, "{} point(s)", registry.len())?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match cli.command {
        Commands::Query {
            data,
            point,
            radius,
            metric,
        } => cmd_query(&config, data.as_deref(), &point, radius, metric),
        Commands::Interactive { data } => cmd_interactive(&config, data.as_deref()),
        Commands::List { data } => cmd_list(&config, data.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
