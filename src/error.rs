use thiserror::Error;

/// Errors surfaced at the configuration and runtime edges.
///
/// The tracking core itself never fails: missing entities are silent no-ops
/// or sentinel returns, checked by callers rather than caught.
#[derive(Debug, Error)]
pub enum GradeflowError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
