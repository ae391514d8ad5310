use thiserror::Error;

use crate::dns::DnsQuestion;
use crate::dnssec::UnverifiedReason;

/// Misuse of a resolver result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// Answers were requested from a result whose query did not succeed.
    #[error("Illegal use: {0}")]
    IllegalUse(String),

    #[error("Answer to {question} is not authentic ({} unverified reasons)", .reasons.len())]
    NotAuthentic {
        question: DnsQuestion,
        reasons: Vec<UnverifiedReason>,
    },
}

/// Failures reported by a resolution engine. These never escape the
/// resolver API; they are stored in the unsuccessful result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Operation timed out")]
    Timeout,

    #[error("IO error: {0}")]
    Io(String),

    #[error("No response: {0}")]
    NoResponse(String),

    #[error("Resolution failed: {0}")]
    Other(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::TimedOut {
            EngineError::Timeout
        } else {
            EngineError::Io(err.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid IP version setting: {0}")]
    InvalidIpVersion(String),

    #[error("Conflicting configuration: {0}")]
    Conflict(String),
}

pub type Result<T> = std::result::Result<T, ResolverError>;
