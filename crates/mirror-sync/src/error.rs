//! Error types for mirror-sync

/// Result type for mirror-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a sync run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The release archive could not be retrieved. Nothing on disk has
    /// been touched when this fires; the run aborts with no cleanup.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The fetched bytes are not a readable archive.
    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),

    /// A downstream generator failed against the finished mirror.
    #[error("Generator '{name}' failed: {message}")]
    Generator { name: String, message: String },

    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn fetch(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
