mod error;
mod pajek;
mod pmed;

pub use error::ImportError;
pub use pajek::import_pajek;
pub use pmed::import_pmed;

use crate::graph::{Cost, ListGraph, WeightedGraph};

/// Largest vertex count a file may announce.
pub const MAX_IMPORT_ORDER: usize = 1 << 24;

/// Allocates the graph announced on line `line_no`, refusing counts above [`MAX_IMPORT_ORDER`].
fn announced_graph(line_no: usize, order: usize) -> Result<ListGraph, ImportError> {
    if order > MAX_IMPORT_ORDER {
        return Err(ImportError::TooLarge {
            line: line_no,
            order,
            max: MAX_IMPORT_ORDER,
        });
    }
    Ok(ListGraph::with_size(order))
}

/// Parses a `from to weight` line with 1-based node ids and appends the arc to `graph`.
fn parse_arc(graph: &mut ListGraph, line_no: usize, line: &str) -> Result<(), ImportError> {
    let order = graph.order();
    let mut fields = line.split_whitespace();
    let mut next_node = |what: &str| -> Result<usize, ImportError> {
        let raw = fields
            .next()
            .ok_or_else(|| ImportError::invalid(line_no, format!("missing {} node", what)))?;
        let id: usize = raw.parse().map_err(|_| {
            ImportError::invalid(line_no, format!("invalid {} node `{}`", what, raw))
        })?;
        if id == 0 || id > order {
            return Err(ImportError::MissingNode {
                line: line_no,
                node: id,
                order,
            });
        }
        Ok(id - 1)
    };
    let from = next_node("source")?;
    let to = next_node("target")?;

    // Pajek allows unweighted arcs, those get weight 1.
    let weight: Cost = match fields.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| ImportError::invalid(line_no, format!("invalid weight `{}`", raw)))?,
        None => 1,
    };
    graph.add_edge(from, to, weight);
    Ok(())
}
