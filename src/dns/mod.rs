pub mod enums;
pub mod name;
pub mod question;
pub mod record;

pub use enums::{RecordClass, RecordType, ResponseCode};
pub use name::DnsName;
pub use question::DnsQuestion;
pub use record::{A, Aaaa, InternetAddress, RData, Record, RecordData, Srv};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid DNS label: {0}")]
    InvalidLabel(String),

    #[error("DNS name too long")]
    NameTooLong,

    #[error("Invalid {rtype} record data: expected {expected} bytes, got {actual}")]
    InvalidRdataLength {
        rtype: RecordType,
        expected: usize,
        actual: usize,
    },

    #[error("Trailing bytes after {0} record data")]
    TrailingData(RecordType),

    #[error("Invalid bit stream: {0}")]
    InvalidBitStream(String),
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::InvalidBitStream(e.to_string())
    }
}
