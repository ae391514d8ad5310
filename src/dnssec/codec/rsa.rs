//! RSA key layout (RFC 3110 section 2).
//!
//! The exponent length is one octet, or a zero octet followed by a two octet
//! length for exponents longer than 255 octets. The modulus takes the rest.

use super::{KeyCodec, SignatureCodec, WireReader, key_mismatch, signature_mismatch};
use crate::dnssec::errors::{DnsSecError, Result};
use crate::dnssec::key::{PublicKeyMaterial, UnsignedInt};
use crate::dnssec::signature::SignatureValue;

#[derive(Debug, Default, Clone, Copy)]
pub struct RsaKeyCodec;

impl KeyCodec for RsaKeyCodec {
    fn decode(&self, wire: &[u8]) -> Result<PublicKeyMaterial> {
        let mut reader = WireReader::new(wire);
        let exp_len = match reader.read_u8("exponent length")? {
            0 => usize::from(reader.read_u16("exponent length")?),
            len => usize::from(len),
        };
        if exp_len == 0 {
            return Err(DnsSecError::malformed("empty exponent", wire));
        }
        let exponent = reader.read_bytes(exp_len, "exponent")?;
        let modulus = reader.read_rest("modulus")?;
        if modulus.is_empty() {
            return Err(DnsSecError::malformed("empty modulus", wire));
        }

        Ok(PublicKeyMaterial::Rsa {
            exponent: UnsignedInt::from_be_bytes(&exponent),
            modulus: UnsignedInt::from_be_bytes(&modulus),
        })
    }

    fn encode(&self, key: &PublicKeyMaterial) -> Result<Vec<u8>> {
        let PublicKeyMaterial::Rsa { exponent, modulus } = key else {
            return Err(key_mismatch("RSA", key));
        };
        let e = exponent.as_bytes();
        let n = modulus.as_bytes();
        if e.is_empty() || n.is_empty() {
            return Err(DnsSecError::InvalidKeySpec(
                "RSA exponent and modulus must be non-zero".to_string(),
            ));
        }

        let mut out = Vec::with_capacity(3 + e.len() + n.len());
        if let Ok(len) = u8::try_from(e.len()) {
            out.push(len);
        } else {
            let len = u16::try_from(e.len())
                .map_err(|_| DnsSecError::malformed("exponent exceeds 65535 bytes", e))?;
            out.push(0);
            out.extend_from_slice(&len.to_be_bytes());
        }
        out.extend_from_slice(e);
        out.extend_from_slice(n);
        Ok(out)
    }
}

/// RSA signatures are consumed as-is by the PKCS#1 v1.5 primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct RsaSignatureCodec;

impl SignatureCodec for RsaSignatureCodec {
    fn decode(&self, wire: &[u8]) -> Result<SignatureValue> {
        if wire.is_empty() {
            return Err(DnsSecError::malformed("empty RSA signature", wire));
        }
        Ok(SignatureValue::Rsa(wire.to_vec()))
    }

    fn encode(&self, signature: &SignatureValue) -> Result<Vec<u8>> {
        match signature {
            SignatureValue::Rsa(bytes) => Ok(bytes.clone()),
            other => Err(signature_mismatch("RSA", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_exponent_form() {
        let wire = [0x03, 0x01, 0x00, 0x01, 0xc5, 0x2f, 0x11];
        let key = RsaKeyCodec.decode(&wire).unwrap();
        assert_eq!(
            key,
            PublicKeyMaterial::Rsa {
                exponent: UnsignedInt::from_be_bytes(&[0x01, 0x00, 0x01]),
                modulus: UnsignedInt::from_be_bytes(&[0xc5, 0x2f, 0x11]),
            }
        );
        assert_eq!(RsaKeyCodec.encode(&key).unwrap(), wire.to_vec());
    }

    #[test]
    fn test_long_exponent_form() {
        let mut wire = vec![0x00, 0x01, 0x00];
        wire.extend(std::iter::repeat_n(0x01, 256));
        wire.extend([0xff, 0xee]);
        let key = RsaKeyCodec.decode(&wire).unwrap();
        let PublicKeyMaterial::Rsa { exponent, modulus } = &key else {
            panic!("expected RSA key material");
        };
        assert_eq!(exponent.as_bytes().len(), 256);
        assert_eq!(modulus.as_bytes(), &[0xff, 0xee]);
        assert_eq!(RsaKeyCodec.encode(&key).unwrap(), wire);
    }

    #[test]
    fn test_malformed_keys() {
        for wire in [
            &[][..],
            &[0x00, 0x01][..],
            &[0x03, 0x01, 0x00][..],
            &[0x03, 0x01, 0x00, 0x01][..],
            &[0x00, 0x00, 0x00, 0x01][..],
        ] {
            assert!(
                matches!(
                    RsaKeyCodec.decode(wire),
                    Err(DnsSecError::DataMalformed { .. })
                ),
                "accepted {:?}",
                wire
            );
        }
    }

    #[test]
    fn test_signature_passthrough() {
        let signature = RsaSignatureCodec.decode(&[1, 2, 3]).unwrap();
        assert_eq!(RsaSignatureCodec.encode(&signature).unwrap(), vec![1, 2, 3]);
        assert!(RsaSignatureCodec.decode(&[]).is_err());
    }
}
