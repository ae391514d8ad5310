use std::fmt;

use super::{DnsSecAlgorithm, DnsSecError};
use crate::dns::{DnsName, DnsQuestion, RecordType};

/// Why an answer could not be shown to be DNSSEC secure.
///
/// Reasons travel with a result instead of failing it: the answers stay
/// usable and the caller decides what level of trust it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnverifiedReason {
    AlgorithmNotSupported {
        algorithm: u8,
        covered_type: RecordType,
        record: String,
    },
    AlgorithmExceptionThrown {
        algorithm: u8,
        covered_type: RecordType,
        record: String,
        error: DnsSecError,
    },
    ConflictsWithSep {
        record: String,
    },
    NoTrustAnchor {
        zone: DnsName,
    },
    NoSecureEntryPoint {
        zone: DnsName,
    },
    NoRootSecureEntryPoint,
    NoSignatures {
        question: DnsQuestion,
    },
    NoActiveSignatures {
        question: DnsQuestion,
    },
    NsecDoesNotMatch {
        question: DnsQuestion,
        record: String,
    },
}

impl UnverifiedReason {
    /// Records a failed signature check. An unknown algorithm only makes the
    /// answer insecure; anything else the verifier reports is kept verbatim.
    pub fn from_verification_error(
        algorithm: u8,
        covered_type: RecordType,
        record: impl Into<String>,
        error: DnsSecError,
    ) -> Self {
        match error {
            DnsSecError::UnsupportedAlgorithm(_) => UnverifiedReason::AlgorithmNotSupported {
                algorithm,
                covered_type,
                record: record.into(),
            },
            error => UnverifiedReason::AlgorithmExceptionThrown {
                algorithm,
                covered_type,
                record: record.into(),
                error,
            },
        }
    }
}

fn algorithm_name(number: u8) -> String {
    match DnsSecAlgorithm::from_u8(number) {
        Some(algorithm) => algorithm.to_string(),
        None => number.to_string(),
    }
}

impl fmt::Display for UnverifiedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnverifiedReason::AlgorithmNotSupported {
                algorithm,
                covered_type,
                record,
            } => write!(
                f,
                "No usable verifier for algorithm {} covering {}: {}",
                algorithm_name(*algorithm),
                covered_type,
                record
            ),
            UnverifiedReason::AlgorithmExceptionThrown {
                algorithm,
                covered_type,
                record,
                error,
            } => write!(
                f,
                "Verification with algorithm {} covering {} failed ({}): {}",
                algorithm_name(*algorithm),
                covered_type,
                error,
                record
            ),
            UnverifiedReason::ConflictsWithSep { record } => write!(
                f,
                "Zone contains a record conflicting with its SEP: {}",
                record
            ),
            UnverifiedReason::NoTrustAnchor { zone } => {
                write!(f, "No trust anchor was found for zone {}", zone)
            }
            UnverifiedReason::NoSecureEntryPoint { zone } => {
                write!(f, "No secure entry point was found for zone {}", zone)
            }
            UnverifiedReason::NoRootSecureEntryPoint => {
                write!(f, "No secure entry point was found for the root zone")
            }
            UnverifiedReason::NoSignatures { question } => write!(
                f,
                "No signatures were attached to answer on question {}",
                question
            ),
            UnverifiedReason::NoActiveSignatures { question } => write!(
                f,
                "No currently active signatures were attached to answer on question {}",
                question
            ),
            UnverifiedReason::NsecDoesNotMatch { question, record } => write!(
                f,
                "NSEC {} does not match question {}",
                record, question
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_algorithm_is_insecure() {
        let reason = UnverifiedReason::from_verification_error(
            12,
            RecordType::A,
            "example. RRSIG",
            DnsSecError::UnsupportedAlgorithm(12),
        );
        assert!(matches!(
            reason,
            UnverifiedReason::AlgorithmNotSupported { algorithm: 12, .. }
        ));
        assert!(reason.to_string().contains("ECC-GOST"));
    }

    #[test]
    fn test_other_errors_are_kept() {
        let error = DnsSecError::InvalidKeySpec("bad modulus".to_string());
        let reason =
            UnverifiedReason::from_verification_error(8, RecordType::SRV, "rec", error.clone());
        match &reason {
            UnverifiedReason::AlgorithmExceptionThrown { error: kept, .. } => {
                assert_eq!(kept, &error)
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(reason.to_string().contains("bad modulus"));
    }

    #[test]
    fn test_display_root() {
        assert_eq!(
            UnverifiedReason::NoTrustAnchor {
                zone: DnsName::root()
            }
            .to_string(),
            "No trust anchor was found for zone ."
        );
    }
}
