use thiserror::Error;

/// Unified error type for git-version-bump operations
#[derive(Error, Debug)]
pub enum VersionBumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-version-bump
pub type Result<T> = std::result::Result<T, VersionBumpError>;

impl VersionBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionBumpError::Config(msg.into())
    }

    /// Create a descriptor error with context
    pub fn descriptor(msg: impl Into<String>) -> Self {
        VersionBumpError::Descriptor(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionBumpError::Version(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        VersionBumpError::Command(msg.into())
    }

    /// Create an event payload error with context
    pub fn event(msg: impl Into<String>) -> Self {
        VersionBumpError::Event(msg.into())
    }
}
