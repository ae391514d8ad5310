//! Per-algorithm transcoding between DNSSEC wire formats and the
//! representations the verification primitives consume.

pub mod der;
pub mod dsa;
pub mod ecdsa;
pub mod eddsa;
pub mod rsa;

pub use dsa::{DsaKeyCodec, DsaSignatureCodec};
pub use ecdsa::{EcdsaKeyCodec, EcdsaSignatureCodec};
pub use eddsa::{EdDsaKeyCodec, EdDsaSignatureCodec};
pub use rsa::{RsaKeyCodec, RsaSignatureCodec};

use bitstream_io::{BigEndian, BitRead, BitReader};

use super::errors::{DnsSecError, Result};
use super::key::PublicKeyMaterial;
use super::signature::SignatureValue;

/// Translates DNSKEY public key bytes into key material and back.
pub trait KeyCodec: Send + Sync {
    fn decode(&self, wire: &[u8]) -> Result<PublicKeyMaterial>;

    fn encode(&self, key: &PublicKeyMaterial) -> Result<Vec<u8>>;
}

/// Translates RRSIG signature bytes into signature components, and those
/// into the canonical bytes the verify primitive expects.
pub trait SignatureCodec: Send + Sync {
    fn decode(&self, wire: &[u8]) -> Result<SignatureValue>;

    fn encode(&self, signature: &SignatureValue) -> Result<Vec<u8>>;
}

/// Big-endian reader over wire bytes that reports short reads as
/// [`DnsSecError::DataMalformed`] carrying the whole input.
pub(crate) struct WireReader<'a> {
    reader: BitReader<&'a [u8], BigEndian>,
    data: &'a [u8],
    consumed: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(data),
            data,
            consumed: 0,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.consumed
    }

    fn ensure(&self, len: usize, field: &str) -> Result<()> {
        if len > self.remaining() {
            return Err(DnsSecError::malformed(
                format!(
                    "need {} bytes for {}, {} remaining",
                    len,
                    field,
                    self.remaining()
                ),
                self.data,
            ));
        }
        Ok(())
    }

    pub(crate) fn read_u8(&mut self, field: &str) -> Result<u8> {
        self.ensure(1, field)?;
        let value = self
            .reader
            .read_var::<u8>(8)
            .map_err(|e| DnsSecError::malformed(format!("{}: {}", field, e), self.data))?;
        self.consumed += 1;
        Ok(value)
    }

    pub(crate) fn read_u16(&mut self, field: &str) -> Result<u16> {
        self.ensure(2, field)?;
        let value = self
            .reader
            .read_var::<u16>(16)
            .map_err(|e| DnsSecError::malformed(format!("{}: {}", field, e), self.data))?;
        self.consumed += 2;
        Ok(value)
    }

    pub(crate) fn read_bytes(&mut self, len: usize, field: &str) -> Result<Vec<u8>> {
        self.ensure(len, field)?;
        let mut buf = vec![0u8; len];
        self.reader
            .read_bytes(&mut buf)
            .map_err(|e| DnsSecError::malformed(format!("{}: {}", field, e), self.data))?;
        self.consumed += len;
        Ok(buf)
    }

    pub(crate) fn read_array<const N: usize>(&mut self, field: &str) -> Result<[u8; N]> {
        self.ensure(N, field)?;
        let mut buf = [0u8; N];
        self.reader
            .read_bytes(&mut buf)
            .map_err(|e| DnsSecError::malformed(format!("{}: {}", field, e), self.data))?;
        self.consumed += N;
        Ok(buf)
    }

    pub(crate) fn read_rest(&mut self, field: &str) -> Result<Vec<u8>> {
        self.read_bytes(self.remaining(), field)
    }

    /// Fails if any input is left unread.
    pub(crate) fn finish(self, what: &str) -> Result<()> {
        if self.remaining() != 0 {
            return Err(DnsSecError::malformed(
                format!("{} trailing bytes after {}", self.remaining(), what),
                self.data,
            ));
        }
        Ok(())
    }
}

/// Rejects input whose length differs from a fixed-size layout.
pub(crate) fn expect_exact_len(data: &[u8], expected: usize, what: &str) -> Result<()> {
    if data.len() != expected {
        return Err(DnsSecError::malformed(
            format!("{} must be {} bytes, got {}", what, expected, data.len()),
            data,
        ));
    }
    Ok(())
}

pub(crate) fn key_mismatch(expected: &'static str, key: &PublicKeyMaterial) -> DnsSecError {
    DnsSecError::AlgorithmMismatch {
        expected,
        actual: key.family(),
    }
}

pub(crate) fn signature_mismatch(
    expected: &'static str,
    signature: &SignatureValue,
) -> DnsSecError {
    let actual = match signature {
        SignatureValue::Dsa { .. } => "DSA",
        SignatureValue::Rsa(_) => "RSA",
        SignatureValue::Ecdsa { .. } => "ECDSA",
        SignatureValue::EdDsa { .. } => "EdDSA",
    };
    DnsSecError::AlgorithmMismatch { expected, actual }
}
