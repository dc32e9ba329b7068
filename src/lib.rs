//! Random weighted graph generation for p-median and shortest-path benchmarks.
//!
//! Four models are available under [`graph::generate`]: uniform random, connected random,
//! grid and scale free. Generated graphs are written as Pajek or pmed text by
//! [`graph::export`] and can be read back with [`graph::import`].

pub mod cli;
pub mod generation_config;
pub mod graph;
pub mod logging;
pub mod pipeline;
pub mod rng;
