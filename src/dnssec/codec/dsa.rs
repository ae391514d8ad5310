//! DSA key and signature layouts (RFC 2536).
//!
//! ```text
//! key:       T (1) | Q (20) | P (64 + 8T) | G (64 + 8T) | Y (64 + 8T)
//! signature: T (1) | R (20) | S (20)
//! ```

use tracing::trace;

use super::{KeyCodec, SignatureCodec, WireReader, der, key_mismatch, signature_mismatch};
use crate::dnssec::errors::{DnsSecError, Result};
use crate::dnssec::key::{PublicKeyMaterial, UnsignedInt};
use crate::dnssec::signature::{DSA_FIELD_LEN, SignatureValue};

/// Width of the subprime Q.
pub const Q_LEN: usize = 20;

/// Largest T allowed by RFC 2536 section 2 (1024-bit P).
pub const MAX_T: u8 = 8;

/// Width of P, G and Y for a given T.
pub fn field_len(t: u8) -> usize {
    64 + 8 * usize::from(t)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DsaKeyCodec;

impl KeyCodec for DsaKeyCodec {
    fn decode(&self, wire: &[u8]) -> Result<PublicKeyMaterial> {
        let mut reader = WireReader::new(wire);
        let t = reader.read_u8("T")?;
        // RFC 2536 section 2: "T ... 0 <= T <= 8". Larger T is not a DSA key.
        if t > MAX_T {
            return Err(DnsSecError::malformed(
                format!("T must not exceed {}, got {}", MAX_T, t),
                wire,
            ));
        }
        let len = field_len(t);
        let q = reader.read_bytes(Q_LEN, "Q")?;
        let p = reader.read_bytes(len, "P")?;
        let g = reader.read_bytes(len, "G")?;
        let y = reader.read_bytes(len, "Y")?;
        trace!("decoded DSA key with T={} ({} bit prime)", t, len * 8);

        Ok(PublicKeyMaterial::Dsa {
            t,
            q: UnsignedInt::from_be_bytes(&q),
            p: UnsignedInt::from_be_bytes(&p),
            g: UnsignedInt::from_be_bytes(&g),
            y: UnsignedInt::from_be_bytes(&y),
        })
    }

    fn encode(&self, key: &PublicKeyMaterial) -> Result<Vec<u8>> {
        let PublicKeyMaterial::Dsa { t, q, p, g, y } = key else {
            return Err(key_mismatch("DSA", key));
        };
        if *t > MAX_T {
            return Err(DnsSecError::InvalidKeySpec(format!(
                "T must not exceed {}, got {}",
                MAX_T, t
            )));
        }
        let len = field_len(*t);
        let mut out = Vec::with_capacity(1 + Q_LEN + 3 * len);
        out.push(*t);
        for (name, value, width) in [("Q", q, Q_LEN), ("P", p, len), ("G", g, len), ("Y", y, len)] {
            let field = value.to_be_bytes_padded(width).ok_or_else(|| {
                DnsSecError::malformed(
                    format!("{} wider than {} bytes", name, width),
                    value.as_bytes(),
                )
            })?;
            out.extend_from_slice(&field);
        }
        Ok(out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DsaSignatureCodec;

impl SignatureCodec for DsaSignatureCodec {
    fn decode(&self, wire: &[u8]) -> Result<SignatureValue> {
        let mut reader = WireReader::new(wire);
        let t = reader.read_u8("T")?;
        let r = reader.read_array::<DSA_FIELD_LEN>("R")?;
        let s = reader.read_array::<DSA_FIELD_LEN>("S")?;
        Ok(SignatureValue::Dsa { t, r, s })
    }

    /// `0x30 len 0x02 rlen [0x00] R 0x02 slen [0x00] S`, with R and S kept at
    /// their full 20 byte width.
    fn encode(&self, signature: &SignatureValue) -> Result<Vec<u8>> {
        let SignatureValue::Dsa { r, s, .. } = signature else {
            return Err(signature_mismatch("DSA", signature));
        };
        Ok(der::encode_integer_pair(r, s))
    }
}
