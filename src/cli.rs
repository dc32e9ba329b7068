//! Command line front end: flags become a [`ConfigLayer`] on top of an optional config file.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::generation_config::{ConfigError, ConfigLayer, GenerationConfig, GraphKind, OutputFormat};
use crate::graph::Cost;
use crate::pipeline::{self, RunError, RunSummary};

#[derive(Debug, Parser, Clone)]
#[command(name = "graphgen", version, about = "Random Graph Generator")]
pub struct Cli {
    /// Number of nodes.
    #[arg(short = 'n', long)]
    pub nodes: Option<usize>,

    /// Graph model to generate.
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<GraphKind>,

    /// Edge density in (0, 1].
    #[arg(short = 'p', long)]
    pub density: Option<f64>,

    /// Output format.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seed for reproducible output, drawn from the OS if omitted.
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Smallest arc cost [default: 1].
    #[arg(long, allow_negative_numbers = true)]
    pub min_cost: Option<Cost>,

    /// Largest arc cost [default: 100].
    #[arg(long, allow_negative_numbers = true)]
    pub max_cost: Option<Cost>,

    /// Number of centers written by the pmed format [default: nodes / 3].
    #[arg(short = 'c', long)]
    pub centers: Option<usize>,

    /// Generate an undirected graph.
    #[arg(long)]
    pub undirected: bool,

    /// Size of the fully connected seed of scale free graphs [default: 2].
    #[arg(long)]
    pub initial_nodes: Option<usize>,

    /// Minimum degree of every node added to scale free graphs [default: 1].
    #[arg(long)]
    pub min_degree: Option<usize>,

    /// Exponent applied to the attachment probability of scale free graphs [default: 1.0].
    #[arg(long)]
    pub offset_exponent: Option<f64>,

    /// Random draws the rejection sampling generators may spend before giving up.
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// YAML or RON file with parameters, flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the graph to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short = 'd', long)]
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("could not create output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Run(RunError::Config(err))
    }
}

impl Cli {
    /// Parameters given on the command line.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            nodes: self.nodes,
            kind: self.kind,
            density: self.density,
            format: self.format,
            seed: self.seed,
            min_cost: self.min_cost,
            max_cost: self.max_cost,
            centers: self.centers,
            directed: if self.undirected { Some(false) } else { None },
            initial_nodes: self.initial_nodes,
            min_degree: self.min_degree,
            offset_exponent: self.offset_exponent,
            max_attempts: self.max_attempts,
        }
    }

    /// Merges the config file, if any, with the flags and validates the result.
    pub fn generation_config(&self) -> Result<GenerationConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => ConfigLayer::from_path(path)?,
            None => ConfigLayer::default(),
        };
        base.merge(self.layer()).resolve()
    }
}

/// Resolves the configuration and runs the generator, writing to the requested output.
/// The output file is only created once the configuration is known to be valid.
pub fn run_cli(cli: &Cli) -> Result<RunSummary, CliError> {
    let config = cli.generation_config()?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            Ok(pipeline::run(&config, &mut writer)?)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let summary = pipeline::run(&config, &mut writer)?;
            writer.flush().map_err(RunError::from)?;
            Ok(summary)
        }
    }
}
