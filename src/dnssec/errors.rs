use thiserror::Error;

/// Failures of the DNSSEC decode and verify layer.
///
/// A signature that simply does not validate is not an error; see
/// [`SignatureVerifier::verify`](super::SignatureVerifier::verify).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsSecError {
    /// Wire bytes shorter than the format requires or otherwise structurally
    /// invalid. The offending bytes are kept for diagnostics.
    #[error("Malformed DNSSEC data ({reason}): {}", hex::encode(.data))]
    DataMalformed { reason: String, data: Vec<u8> },

    /// Decoded parameters were rejected by the key construction primitive.
    #[error("Invalid key specification: {0}")]
    InvalidKeySpec(String),

    #[error("Unsupported DNSSEC algorithm: {0}")]
    UnsupportedAlgorithm(u8),

    #[error("Unsupported digest type: {0}")]
    UnsupportedDigestType(u8),

    /// Key or signature material of one family handed to another family's
    /// codec or primitive.
    #[error("Expected {expected} material, got {actual}")]
    AlgorithmMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl DnsSecError {
    pub fn malformed(reason: impl Into<String>, data: &[u8]) -> Self {
        DnsSecError::DataMalformed {
            reason: reason.into(),
            data: data.to_vec(),
        }
    }

    /// Whether the failure means verification could not even be attempted
    /// because the algorithm is unknown, as opposed to bad input.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            DnsSecError::UnsupportedAlgorithm(_) | DnsSecError::UnsupportedDigestType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DnsSecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_carries_bytes() {
        let err = DnsSecError::malformed("short read", &[0x01, 0xab]);
        assert_eq!(err.to_string(), "Malformed DNSSEC data (short read): 01ab");
        match err {
            DnsSecError::DataMalformed { data, .. } => assert_eq!(data, vec![0x01, 0xab]),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_is_unsupported() {
        assert!(DnsSecError::UnsupportedAlgorithm(200).is_unsupported());
        assert!(!DnsSecError::InvalidKeySpec("bad".into()).is_unsupported());
    }
}
