use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum GenerationError {
    #[error("{generator} generator gave up after {limit} random draws without finishing")]
    AttemptLimitExceeded {
        generator: &'static str,
        limit: u64,
    },
    #[error("invalid {generator} parameters: {reason}")]
    InvalidParameters {
        generator: &'static str,
        reason: String,
    },
}
