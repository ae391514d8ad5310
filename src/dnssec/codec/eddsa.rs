//! EdDSA layouts (RFC 8080 section 3): raw public key and raw signature.

use super::{KeyCodec, SignatureCodec, expect_exact_len, key_mismatch, signature_mismatch};
use crate::dnssec::errors::Result;
use crate::dnssec::key::{EdCurve, PublicKeyMaterial};
use crate::dnssec::signature::SignatureValue;

#[derive(Debug, Clone, Copy)]
pub struct EdDsaKeyCodec {
    pub curve: EdCurve,
}

impl KeyCodec for EdDsaKeyCodec {
    fn decode(&self, wire: &[u8]) -> Result<PublicKeyMaterial> {
        expect_exact_len(wire, self.curve.key_len(), "EdDSA public key")?;
        Ok(PublicKeyMaterial::EdDsa {
            curve: self.curve,
            point: wire.to_vec(),
        })
    }

    fn encode(&self, key: &PublicKeyMaterial) -> Result<Vec<u8>> {
        match key {
            PublicKeyMaterial::EdDsa { point, .. } => Ok(point.clone()),
            other => Err(key_mismatch("EdDSA", other)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EdDsaSignatureCodec {
    pub curve: EdCurve,
}

impl SignatureCodec for EdDsaSignatureCodec {
    fn decode(&self, wire: &[u8]) -> Result<SignatureValue> {
        expect_exact_len(wire, self.curve.signature_len(), "EdDSA signature")?;
        Ok(SignatureValue::EdDsa {
            curve: self.curve,
            signature: wire.to_vec(),
        })
    }

    fn encode(&self, signature: &SignatureValue) -> Result<Vec<u8>> {
        match signature {
            SignatureValue::EdDsa { signature, .. } => Ok(signature.clone()),
            other => Err(signature_mismatch("EdDSA", other)),
        }
    }
}
