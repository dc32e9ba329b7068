use std::io::{self, Write};
use thiserror::Error;
use tracing::{info, info_span, warn};

use crate::generation_config::{
    centers_fit, ConfigError, Fix, GenerationConfig, GraphKind, OutputFormat, SeededConfig,
};
use crate::graph::export::{Export, Pajek, Pmed};
use crate::graph::generate::{
    ConnectedRandom, Generate, GenerationError, Grid, ScaleFree, UniformRandom,
};
use crate::graph::{GraphStats, ListGraph};
use crate::rng::rng64;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("could not write graph: {0}")]
    Write(#[from] io::Error),
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub stats: GraphStats,
}

/// Validates the config, generates one graph and writes it to `writer`.
/// Nothing is written unless generation succeeded.
pub fn run(config: &GenerationConfig, writer: &mut dyn Write) -> Result<RunSummary, RunError> {
    config.validate()?;
    let SeededConfig { seed, config } = config.to_fixed()?;
    let span = info_span!("run", seed, kind = ?config.kind, nodes = config.nodes);
    let _guard = span.enter();
    info!(seed, "starting generation, rerun with --seed {} to reproduce", seed);

    let graph = generate(&config, seed)?;
    let stats = GraphStats::of(&graph);
    info!(
        nodes = stats.order,
        arcs = stats.arcs,
        min_out_degree = stats.min_out_degree,
        max_out_degree = stats.max_out_degree,
        weakly_connected = stats.weakly_connected,
        "graph generated"
    );

    let exporter: Box<dyn Export> = match config.format {
        OutputFormat::Pajek => Box::new(Pajek),
        OutputFormat::Pmed => {
            let centers = config.centers();
            if !centers_fit(centers, stats.order) {
                warn!(
                    centers,
                    nodes = stats.order,
                    "center count does not fit the generated graph"
                );
            }
            Box::new(Pmed { centers })
        }
    };
    exporter.write_graph(&graph, writer)?;
    writer.flush()?;

    Ok(RunSummary { seed, stats })
}

/// Builds the generator selected by `config.kind` and runs it on a cursor seeded with `seed`.
pub fn generate(config: &GenerationConfig, seed: u64) -> Result<ListGraph, RunError> {
    let mut rng = rng64(seed as u128);
    let weights = config.weights()?;
    let generator: Box<dyn Generate> = match config.kind {
        GraphKind::Random => Box::new(UniformRandom::new(
            config.nodes,
            config.directed,
            config.density,
            weights,
        )?),
        GraphKind::Connected => {
            let gen = ConnectedRandom::new(config.nodes, config.density, weights)?;
            Box::new(match config.max_attempts {
                Some(limit) => gen.with_max_attempts(limit),
                None => gen,
            })
        }
        GraphKind::Grid => Box::new(Grid::new(
            config.nodes,
            config.directed,
            config.density,
            weights,
        )?),
        GraphKind::ScaleFree => {
            let params = config.scale_free;
            let gen = ScaleFree::new(
                config.nodes,
                params.initial_nodes,
                params.offset_exponent,
                params.min_degree,
                weights,
            )?;
            Box::new(match config.max_attempts {
                Some(limit) => gen.with_max_attempts(limit),
                None => gen,
            })
        }
    };

    Ok(generator.generate(&mut rng)?)
}
