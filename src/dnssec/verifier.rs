use std::sync::Arc;

use tracing::{debug, trace};

use super::errors::{DnsSecError, Result};
use super::{AlgorithmRegistry, DnsSecAlgorithm};

/// Checks RRSIG signatures against DNSKEY public keys.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    registry: Arc<AlgorithmRegistry>,
}

impl Default for SignatureVerifier {
    fn default() -> Self {
        Self::new(Arc::new(AlgorithmRegistry::with_defaults()))
    }
}

impl SignatureVerifier {
    pub fn new(registry: Arc<AlgorithmRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Verifies `signature` (RRSIG signature field) over `message` with
    /// `key` (DNSKEY public key field).
    ///
    /// Returns `Ok(false)` when the signature simply does not validate.
    /// Errors mean the inputs could not be used at all.
    pub fn verify(
        &self,
        algorithm: DnsSecAlgorithm,
        message: &[u8],
        signature: &[u8],
        key: &[u8],
    ) -> Result<bool> {
        let entry = self.registry.get(algorithm).inspect_err(|_| {
            debug!("No verifier registered for algorithm {}", algorithm);
        })?;
        trace!(
            "Verifying {} signature ({} bytes) over {} bytes",
            algorithm,
            signature.len(),
            message.len()
        );
        if algorithm.is_deprecated() {
            debug!("{} is deprecated by RFC 8624", algorithm);
        }

        let material = entry.key_codec.decode(key).inspect_err(|e| {
            debug!("Rejected {} public key: {}", algorithm, e);
        })?;
        let decoded = entry.signature_codec.decode(signature).inspect_err(|e| {
            debug!("Rejected {} signature: {}", algorithm, e);
        })?;
        let canonical = entry.signature_codec.encode(&decoded)?;

        let valid = entry
            .primitive
            .verify(&material, message, &canonical)
            .inspect_err(|e| debug!("{} verification aborted: {}", algorithm, e))?;
        trace!("{} signature valid: {}", algorithm, valid);
        Ok(valid)
    }

    /// Same as [`verify`](Self::verify) for a raw algorithm number.
    pub fn verify_u8(
        &self,
        algorithm: u8,
        message: &[u8],
        signature: &[u8],
        key: &[u8],
    ) -> Result<bool> {
        let algorithm = DnsSecAlgorithm::from_u8(algorithm)
            .ok_or(DnsSecError::UnsupportedAlgorithm(algorithm))?;
        self.verify(algorithm, message, signature, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_algorithms() {
        let verifier = SignatureVerifier::default();
        assert_eq!(
            verifier.verify(DnsSecAlgorithm::RsaMd5, b"m", b"s", b"k"),
            Err(DnsSecError::UnsupportedAlgorithm(1))
        );
        assert_eq!(
            verifier.verify_u8(99, b"m", b"s", b"k"),
            Err(DnsSecError::UnsupportedAlgorithm(99))
        );
    }

    #[test]
    fn test_malformed_key_propagates() {
        let verifier = SignatureVerifier::default();
        let result = verifier.verify(DnsSecAlgorithm::Dsa, b"m", &[0u8; 41], &[0u8; 10]);
        assert!(matches!(result, Err(DnsSecError::DataMalformed { .. })));
    }

    #[test]
    fn test_malformed_signature_propagates() {
        let verifier = SignatureVerifier::default();
        let result = verifier.verify(
            DnsSecAlgorithm::EcdsaP256Sha256,
            b"m",
            &[1u8; 10],
            &[1u8; 64],
        );
        assert!(matches!(result, Err(DnsSecError::DataMalformed { .. })));
    }
}
