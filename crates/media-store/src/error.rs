use std::error::Error as StdError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    InvalidArgs { message: String },
    #[error("{message}")]
    InsertFailed { message: String },
    #[error("{message}")]
    StreamNull { message: String },
    #[error("{context}: {source}")]
    External {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn insert_failed(message: impl Into<String>) -> Self {
        Self::InsertFailed {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn stream_null(message: impl Into<String>) -> Self {
        Self::StreamNull {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn external<E>(context: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::External {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Flat category string reported across the channel boundary.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgs { .. } => "invalid_args",
            Self::InsertFailed { .. } => "insert_failed",
            Self::StreamNull { .. } => "stream_null",
            Self::External { .. } => "exception",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
