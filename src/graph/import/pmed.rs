use std::io::BufRead;

use super::{announced_graph, parse_arc, ImportError};
use crate::graph::{ListGraph, WeightedGraph};

/// Reads a p-median instance, returning the graph and its center count.
/// The arc count in the header has to match the arc lines that follow.
pub fn import_pmed<R: BufRead>(reader: R) -> Result<(ListGraph, usize), ImportError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)));

    let (header_no, header) = loop {
        match lines.next() {
            Some(line) => {
                let (no, text) = line?;
                if !text.trim().is_empty() {
                    break (no, text);
                }
            }
            None => return Err(ImportError::invalid(0, "missing header line")),
        }
    };

    let numbers = header
        .split_whitespace()
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| ImportError::invalid(header_no, format!("invalid number `{}`", raw)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let (order, arcs, centers) = match numbers.as_slice() {
        [order, arcs, centers] => (*order, *arcs, *centers),
        _ => {
            return Err(ImportError::invalid(
                header_no,
                "expected `nodes arcs centers`",
            ))
        }
    };

    let mut graph = announced_graph(header_no, order)?;
    for line in lines {
        let (no, text) = line?;
        if !text.trim().is_empty() {
            parse_arc(&mut graph, no, &text)?;
        }
    }

    if graph.size() != arcs {
        return Err(ImportError::invalid(
            header_no,
            format!("header announces {} arcs, found {}", arcs, graph.size()),
        ));
    }
    Ok((graph, centers))
}
