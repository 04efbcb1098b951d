//! Error types shared by notification producers.

use thiserror::Error;

/// Errors raised by notification producers
///
/// `producer` names the backend ("kafka", "kinesis") the error came from.
/// The underlying cause is preserved as the error source.
#[derive(Error, Debug)]
pub enum ProducerError {
    /// The producer could not be constructed or could not reach its backend
    #[error("Failed to create {producer} producer")]
    Connection {
        producer: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A single send (or flush) failed, including payload serialization
    #[error("Failed to send notification via {producer}")]
    Transport {
        producer: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ProducerError {
    pub fn connection(producer: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Connection {
            producer,
            source: source.into(),
        }
    }

    pub fn transport(producer: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Transport {
            producer,
            source: source.into(),
        }
    }

    /// Name of the producer that raised the error
    pub fn producer(&self) -> &'static str {
        match self {
            Self::Connection { producer, .. } | Self::Transport { producer, .. } => producer,
        }
    }
}

/// Type alias for Result with ProducerError
pub type ProducerResult<T> = Result<T, ProducerError>;
