/// Caller errors surfaced by the engine's fallible entry points.
///
/// Parsing itself never fails: unsupported tokens are skipped and malformed
/// markers are clamped. Only contract violations end up here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Base offset must not be negative, got {0}")]
    NegativeOffset(i64),
    #[error("Invalid token tree: {0}")]
    InvalidTokens(#[from] serde_json::Error),
}
