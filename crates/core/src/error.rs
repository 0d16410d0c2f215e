use reports_wire::WireError;

/// Failures that move the reports view into its error state.
///
/// Each variant's display text is the message shown on the error panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Decode(String),
    #[error("failed to read reports file: {0}")]
    Io(String),
    #[error("report fetch task failed: {0}")]
    Task(String),
}

impl From<WireError> for LoadError {
    fn from(err: WireError) -> Self {
        LoadError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid reports URL '{url}': {reason}")]
    UnparseableUrl { url: String, reason: String },
    #[error("invalid fetch timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error(transparent)]
    DisplayZone(#[from] swasthya_types::TypesError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
