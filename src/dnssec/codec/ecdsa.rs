//! ECDSA key and signature layouts (RFC 6605 section 4): the key is `x | y`,
//! the signature `r | s`, every part one coordinate wide.

use super::{KeyCodec, SignatureCodec, der, expect_exact_len, key_mismatch, signature_mismatch};
use crate::dnssec::errors::{DnsSecError, Result};
use crate::dnssec::key::{EcCurve, PublicKeyMaterial, UnsignedInt};
use crate::dnssec::signature::SignatureValue;

#[derive(Debug, Clone, Copy)]
pub struct EcdsaKeyCodec {
    pub curve: EcCurve,
}

impl KeyCodec for EcdsaKeyCodec {
    fn decode(&self, wire: &[u8]) -> Result<PublicKeyMaterial> {
        let len = self.curve.coordinate_len();
        expect_exact_len(wire, 2 * len, "ECDSA public key")?;
        let (x, y) = wire.split_at(len);
        Ok(PublicKeyMaterial::Ecdsa {
            curve: self.curve,
            x: UnsignedInt::from_be_bytes(x),
            y: UnsignedInt::from_be_bytes(y),
        })
    }

    fn encode(&self, key: &PublicKeyMaterial) -> Result<Vec<u8>> {
        let PublicKeyMaterial::Ecdsa { curve, x, y } = key else {
            return Err(key_mismatch("ECDSA", key));
        };
        let len = curve.coordinate_len();
        let mut out = Vec::with_capacity(2 * len);
        for coordinate in [x, y] {
            let field = coordinate.to_be_bytes_padded(len).ok_or_else(|| {
                DnsSecError::malformed("coordinate wider than curve", coordinate.as_bytes())
            })?;
            out.extend_from_slice(&field);
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EcdsaSignatureCodec {
    pub curve: EcCurve,
}

impl SignatureCodec for EcdsaSignatureCodec {
    fn decode(&self, wire: &[u8]) -> Result<SignatureValue> {
        let len = self.curve.coordinate_len();
        expect_exact_len(wire, 2 * len, "ECDSA signature")?;
        let (r, s) = wire.split_at(len);
        Ok(SignatureValue::Ecdsa {
            curve: self.curve,
            r: UnsignedInt::from_be_bytes(r),
            s: UnsignedInt::from_be_bytes(s),
        })
    }

    /// Minimal integer pair encoding of `r` and `s`.
    fn encode(&self, signature: &SignatureValue) -> Result<Vec<u8>> {
        let SignatureValue::Ecdsa { r, s, .. } = signature else {
            return Err(signature_mismatch("ECDSA", signature));
        };
        Ok(der::encode_integer_pair(
            &der::minimal_field(r),
            &der::minimal_field(s),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lengths() {
        let codec = EcdsaKeyCodec {
            curve: EcCurve::P256,
        };
        assert!(codec.decode(&[0x01; 64]).is_ok());
        assert!(matches!(
            codec.decode(&[0x01; 63]),
            Err(DnsSecError::DataMalformed { .. })
        ));

        let codec = EcdsaKeyCodec {
            curve: EcCurve::P384,
        };
        let wire: Vec<u8> = (0..96).collect();
        let key = codec.decode(&wire).unwrap();
        assert_eq!(codec.encode(&key).unwrap(), wire);
    }

    #[test]
    fn test_signature_encoding() {
        let codec = EcdsaSignatureCodec {
            curve: EcCurve::P256,
        };
        let mut wire = vec![0x00; 31];
        wire.push(0x05);
        wire.extend([0x90; 32]);
        let signature = codec.decode(&wire).unwrap();
        let encoded = codec.encode(&signature).unwrap();

        assert_eq!(&encoded[..5], &[0x30, 3 + 35, 0x02, 0x01, 0x05]);
        assert_eq!(&encoded[5..8], &[0x02, 33, 0x00]);
        let (r, s) = der::decode_integer_pair(&encoded).unwrap();
        assert_eq!(r.as_bytes(), &[0x05]);
        assert_eq!(s.as_bytes(), &[0x90; 32]);
    }

    #[test]
    fn test_signature_wrong_length() {
        let codec = EcdsaSignatureCodec {
            curve: EcCurve::P384,
        };
        assert!(codec.decode(&[0u8; 64]).is_err());
    }
}
