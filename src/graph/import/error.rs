use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read graph: {0}")]
    Io(#[from] io::Error),
    #[error("invalid format on line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },
    #[error("line {line} references node {node}, but the graph only has {order} nodes")]
    MissingNode {
        line: usize,
        node: usize,
        order: usize,
    },
    #[error("line {line} announces {order} nodes, at most {max} are supported")]
    TooLarge {
        line: usize,
        order: usize,
        max: usize,
    },
}

impl ImportError {
    pub(super) fn invalid(line: usize, reason: impl Into<String>) -> Self {
        ImportError::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }
}
