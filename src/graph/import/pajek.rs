use std::io::BufRead;

use super::{announced_graph, parse_arc, ImportError};
use crate::graph::ListGraph;

enum Section {
    Vertices,
    Arcs,
}

/// Reads a graph in Pajek format.
///
/// Vertex label lines are skipped, lines under `*arcs` or `*edges` become arcs in the
/// order they appear. `*edges` are stored as a single arc as well.
pub fn import_pajek<R: BufRead>(reader: R) -> Result<ListGraph, ImportError> {
    let mut graph: Option<ListGraph> = None;
    let mut section = Section::Vertices;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        if trimmed.starts_with('*') {
            let mut fields = trimmed.split_whitespace();
            let keyword = fields.next().unwrap_or_default().to_ascii_lowercase();
            match keyword.as_str() {
                "*vertices" => {
                    if graph.is_some() {
                        return Err(ImportError::invalid(line_no, "duplicate *vertices line"));
                    }
                    let raw = fields
                        .next()
                        .ok_or_else(|| ImportError::invalid(line_no, "missing vertex count"))?;
                    let order = raw.parse().map_err(|_| {
                        ImportError::invalid(line_no, format!("invalid vertex count `{}`", raw))
                    })?;
                    graph = Some(announced_graph(line_no, order)?);
                    section = Section::Vertices;
                }
                "*arcs" | "*edges" => section = Section::Arcs,
                other => {
                    return Err(ImportError::invalid(
                        line_no,
                        format!("unknown section `{}`", other),
                    ))
                }
            }
            continue;
        }

        let graph = graph
            .as_mut()
            .ok_or_else(|| ImportError::invalid(line_no, "data before *vertices line"))?;
        if let Section::Arcs = section {
            parse_arc(graph, line_no, trimmed)?;
        }
    }

    graph.ok_or_else(|| ImportError::invalid(0, "missing *vertices line"))
}
