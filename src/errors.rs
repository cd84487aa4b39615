use thiserror::Error;

/// Errors raised while loading version tables or generating user-agents.
///
/// A failure aborts the whole generation call, batches included.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty sampling sequence, missing sequence or missing sub-variant list.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A version table breaks the homogeneity invariant or lacks its primary versions.
    #[error("data shape error in {table}: {message}")]
    DataShape {
        /// The table file name.
        table: String,
        /// What is wrong with it.
        message: String,
    },
    /// The table file could not be read.
    #[error("failed to read version table {file}: {source}")]
    Io {
        /// The table file name.
        file: String,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },
    /// The table file is not valid json for the table schema.
    #[error("failed to parse version table {file}: {source}")]
    Parse {
        /// The table file name.
        file: String,
        /// The underlying json error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Build a data shape error for a table.
    pub fn data_shape(table: impl Into<String>, message: impl Into<String>) -> Self {
        Error::DataShape {
            table: table.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
