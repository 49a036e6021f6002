use thiserror::Error;

pub type WaveResult<T> = Result<T, WaveError>;

/// Errors raised at the edges of the crate.
///
/// Rendering itself never fails; these come from id generators, theme and
/// document loading, and the `wave-render` binary.
#[derive(Error, Debug, Clone)]
pub enum WaveError {
    #[error("Id generation failed: {0}")]
    IdGeneration(String),

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("Empty document: no root node found")]
    EmptyDocument,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Usage: {0}")]
    Usage(String),
}

impl From<serde_yaml::Error> for WaveError {
    fn from(err: serde_yaml::Error) -> Self {
        WaveError::YamlError(err.to_string())
    }
}

impl From<std::io::Error> for WaveError {
    fn from(err: std::io::Error) -> Self {
        WaveError::Io(err.to_string())
    }
}
