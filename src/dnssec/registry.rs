use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::codec::{
    DsaKeyCodec, DsaSignatureCodec, EcdsaKeyCodec, EcdsaSignatureCodec, EdDsaKeyCodec,
    EdDsaSignatureCodec, KeyCodec, RsaKeyCodec, RsaSignatureCodec, SignatureCodec,
};
use super::errors::{DnsSecError, Result};
use super::key::{EcCurve, EdCurve};
use super::primitive::{
    DsaPrimitive, EcdsaPrimitive, EdDsaPrimitive, HashAlgorithm, RsaPrimitive, VerifyPrimitive,
};
use super::{DigestType, DnsSecAlgorithm};
use crate::dns::DnsName;

/// Everything needed to verify signatures of one algorithm.
#[derive(Clone)]
pub struct AlgorithmEntry {
    pub key_codec: Arc<dyn KeyCodec>,
    pub signature_codec: Arc<dyn SignatureCodec>,
    pub primitive: Arc<dyn VerifyPrimitive>,
}

impl AlgorithmEntry {
    pub fn new(
        key_codec: impl KeyCodec + 'static,
        signature_codec: impl SignatureCodec + 'static,
        primitive: impl VerifyPrimitive + 'static,
    ) -> Self {
        Self {
            key_codec: Arc::new(key_codec),
            signature_codec: Arc::new(signature_codec),
            primitive: Arc::new(primitive),
        }
    }

    fn dsa() -> Self {
        Self::new(
            DsaKeyCodec,
            DsaSignatureCodec,
            DsaPrimitive {
                hash: HashAlgorithm::Sha1,
            },
        )
    }

    fn rsa(hash: HashAlgorithm) -> Self {
        Self::new(RsaKeyCodec, RsaSignatureCodec, RsaPrimitive { hash })
    }

    fn ecdsa(curve: EcCurve, hash: HashAlgorithm) -> Self {
        Self::new(
            EcdsaKeyCodec { curve },
            EcdsaSignatureCodec { curve },
            EcdsaPrimitive { hash },
        )
    }

    fn eddsa(curve: EdCurve) -> Self {
        Self::new(
            EdDsaKeyCodec { curve },
            EdDsaSignatureCodec { curve },
            EdDsaPrimitive,
        )
    }
}

impl std::fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmEntry").finish_non_exhaustive()
    }
}

/// Algorithm number to codec and primitive table.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    entries: BTreeMap<DnsSecAlgorithm, AlgorithmEntry>,
}

impl AlgorithmRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(DnsSecAlgorithm::Dsa, AlgorithmEntry::dsa());
        registry.register(DnsSecAlgorithm::DsaNsec3Sha1, AlgorithmEntry::dsa());
        registry.register(
            DnsSecAlgorithm::RsaSha1,
            AlgorithmEntry::rsa(HashAlgorithm::Sha1),
        );
        registry.register(
            DnsSecAlgorithm::RsaSha1Nsec3Sha1,
            AlgorithmEntry::rsa(HashAlgorithm::Sha1),
        );
        registry.register(
            DnsSecAlgorithm::RsaSha256,
            AlgorithmEntry::rsa(HashAlgorithm::Sha256),
        );
        registry.register(
            DnsSecAlgorithm::RsaSha512,
            AlgorithmEntry::rsa(HashAlgorithm::Sha512),
        );
        registry.register(
            DnsSecAlgorithm::EcdsaP256Sha256,
            AlgorithmEntry::ecdsa(EcCurve::P256, HashAlgorithm::Sha256),
        );
        registry.register(
            DnsSecAlgorithm::EcdsaP384Sha384,
            AlgorithmEntry::ecdsa(EcCurve::P384, HashAlgorithm::Sha384),
        );
        registry.register(
            DnsSecAlgorithm::Ed25519,
            AlgorithmEntry::eddsa(EdCurve::Ed25519),
        );
        registry.register(
            DnsSecAlgorithm::Ed448,
            AlgorithmEntry::eddsa(EdCurve::Ed448),
        );
        registry
    }

    /// Adds or replaces the entry for `algorithm`, returning the old one.
    pub fn register(
        &mut self,
        algorithm: DnsSecAlgorithm,
        entry: AlgorithmEntry,
    ) -> Option<AlgorithmEntry> {
        debug!("Registering DNSSEC algorithm {}", algorithm);
        self.entries.insert(algorithm, entry)
    }

    pub fn get(&self, algorithm: DnsSecAlgorithm) -> Result<&AlgorithmEntry> {
        self.entries
            .get(&algorithm)
            .ok_or(DnsSecError::UnsupportedAlgorithm(algorithm.to_u8()))
    }

    pub fn supports(&self, algorithm: DnsSecAlgorithm) -> bool {
        self.entries.contains_key(&algorithm)
    }

    pub fn algorithms(&self) -> impl Iterator<Item = DnsSecAlgorithm> + '_ {
        self.entries.keys().copied()
    }

    pub fn digest(&self, digest_type: DigestType, data: &[u8]) -> Result<Vec<u8>> {
        digest_type.digest(data)
    }

    pub fn ds_digest(
        &self,
        digest_type: DigestType,
        owner: &DnsName,
        dnskey_rdata: &[u8],
    ) -> Result<Vec<u8>> {
        digest_type.ds_digest(owner, dnskey_rdata)
    }

    /// Looks up a raw digest type number.
    pub fn digest_type(&self, value: u8) -> Result<DigestType> {
        DigestType::from_u8(value)
            .filter(DigestType::is_supported)
            .ok_or(DnsSecError::UnsupportedDigestType(value))
    }
}
