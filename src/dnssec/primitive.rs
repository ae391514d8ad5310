//! Signature verification primitives backed by OpenSSL.
//!
//! Each primitive takes decoded key material, the signed message and the
//! canonical signature bytes produced by the matching [`SignatureCodec`].
//! A signature that fails to validate yields `Ok(false)`; only unusable key
//! material or unreadable signature bytes surface as errors.
//!
//! [`SignatureCodec`]: super::codec::SignatureCodec

use openssl::bn::BigNum;
use openssl::dsa::{Dsa, DsaSig};
use openssl::ec::{EcGroup, EcKey};
use openssl::ecdsa::EcdsaSig;
use openssl::error::ErrorStack;
use openssl::hash::{MessageDigest, hash};
use openssl::nid::Nid;
use openssl::pkey::{Id, PKey, Public};
use openssl::rsa::Rsa;
use openssl::sign::Verifier;

use super::codec::{der, key_mismatch};
use super::errors::{DnsSecError, Result};
use super::key::{EcCurve, EdCurve, PublicKeyMaterial, UnsignedInt};

/// Message digest applied before the public key operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    fn message_digest(self) -> MessageDigest {
        match self {
            HashAlgorithm::Sha1 => MessageDigest::sha1(),
            HashAlgorithm::Sha256 => MessageDigest::sha256(),
            HashAlgorithm::Sha384 => MessageDigest::sha384(),
            HashAlgorithm::Sha512 => MessageDigest::sha512(),
        }
    }
}

pub trait VerifyPrimitive: Send + Sync {
    fn verify(&self, key: &PublicKeyMaterial, message: &[u8], signature: &[u8]) -> Result<bool>;
}

fn invalid_key(e: ErrorStack) -> DnsSecError {
    DnsSecError::InvalidKeySpec(e.to_string())
}

fn bignum(value: &UnsignedInt) -> Result<BigNum> {
    BigNum::from_slice(value.as_bytes()).map_err(invalid_key)
}

fn require_nonzero(components: &[(&str, &UnsignedInt)]) -> Result<()> {
    for (name, value) in components {
        if value.is_zero() {
            return Err(DnsSecError::InvalidKeySpec(format!("{name} is zero")));
        }
    }
    Ok(())
}

/// Converts the integer pair to the strict form OpenSSL accepts. R and S
/// arrive fixed-width from the DSA codec, so leading zero octets survive.
fn strict_integer_pair(
    signature: &[u8],
    build: impl FnOnce(BigNum, BigNum) -> std::result::Result<Vec<u8>, ErrorStack>,
) -> Result<Vec<u8>> {
    let (r, s) = der::decode_integer_pair(signature)?;
    let r = BigNum::from_slice(r.as_bytes())
        .map_err(|e| DnsSecError::malformed(e.to_string(), signature))?;
    let s = BigNum::from_slice(s.as_bytes())
        .map_err(|e| DnsSecError::malformed(e.to_string(), signature))?;
    build(r, s).map_err(|e| DnsSecError::malformed(e.to_string(), signature))
}

/// OpenSSL only errors here when it cannot parse the signature at all.
fn check(
    pkey: &PKey<Public>,
    digest: Option<MessageDigest>,
    message: &[u8],
    signature: &[u8],
) -> Result<bool> {
    let outcome = match digest {
        Some(digest) => Verifier::new(digest, pkey).and_then(|mut verifier| {
            verifier.update(message)?;
            verifier.verify(signature)
        }),
        None => Verifier::new_without_digest(pkey)
            .and_then(|mut verifier| verifier.verify_oneshot(signature, message)),
    };
    outcome.map_err(|e| DnsSecError::malformed(e.to_string(), signature))
}

/// DSA (RFC 2536), signature as an integer pair.
#[derive(Debug, Clone, Copy)]
pub struct DsaPrimitive {
    pub hash: HashAlgorithm,
}

impl VerifyPrimitive for DsaPrimitive {
    fn verify(&self, key: &PublicKeyMaterial, message: &[u8], signature: &[u8]) -> Result<bool> {
        let PublicKeyMaterial::Dsa { q, p, g, y, .. } = key else {
            return Err(key_mismatch("DSA", key));
        };
        require_nonzero(&[("Q", q), ("P", p), ("G", g), ("Y", y)])?;
        if g >= p || y >= p {
            return Err(DnsSecError::InvalidKeySpec(
                "DSA G and Y must be smaller than P".to_string(),
            ));
        }

        let dsa = Dsa::from_public_components(bignum(p)?, bignum(q)?, bignum(g)?, bignum(y)?)
            .map_err(invalid_key)?;
        let pkey = PKey::from_dsa(dsa).map_err(invalid_key)?;
        let der = strict_integer_pair(signature, |r, s| {
            DsaSig::from_private_components(r, s)?.to_der()
        })?;
        check(&pkey, Some(self.hash.message_digest()), message, &der)
    }
}

/// RSA PKCS#1 v1.5 (RFC 3110, RFC 5702).
#[derive(Debug, Clone, Copy)]
pub struct RsaPrimitive {
    pub hash: HashAlgorithm,
}

impl VerifyPrimitive for RsaPrimitive {
    fn verify(&self, key: &PublicKeyMaterial, message: &[u8], signature: &[u8]) -> Result<bool> {
        let PublicKeyMaterial::Rsa { exponent, modulus } = key else {
            return Err(key_mismatch("RSA", key));
        };
        require_nonzero(&[("exponent", exponent), ("modulus", modulus)])?;

        // PKCS#1 v1.5 signatures are exactly as wide as the modulus.
        let width = modulus.as_bytes().len();
        if signature.len() != width {
            return Err(DnsSecError::malformed(
                format!("RSA signature must be {} bytes", width),
                signature,
            ));
        }

        let rsa = Rsa::from_public_components(bignum(modulus)?, bignum(exponent)?)
            .map_err(invalid_key)?;
        let pkey = PKey::from_rsa(rsa).map_err(invalid_key)?;
        check(&pkey, Some(self.hash.message_digest()), message, signature)
    }
}

/// ECDSA over P-256 or P-384 (RFC 6605).
#[derive(Debug, Clone, Copy)]
pub struct EcdsaPrimitive {
    pub hash: HashAlgorithm,
}

impl VerifyPrimitive for EcdsaPrimitive {
    fn verify(&self, key: &PublicKeyMaterial, message: &[u8], signature: &[u8]) -> Result<bool> {
        let PublicKeyMaterial::Ecdsa { curve, x, y } = key else {
            return Err(key_mismatch("ECDSA", key));
        };
        let nid = match curve {
            EcCurve::P256 => Nid::X9_62_PRIME256V1,
            EcCurve::P384 => Nid::SECP384R1,
        };
        let group = EcGroup::from_curve_name(nid).map_err(invalid_key)?;
        let eckey = EcKey::from_public_key_affine_coordinates(&group, &*bignum(x)?, &*bignum(y)?)
            .map_err(invalid_key)?;
        eckey.check_key().map_err(invalid_key)?;

        let (r, s) = der::decode_integer_pair(signature)?;
        let sig = EcdsaSig::from_private_components(bignum(&r)?, bignum(&s)?)
            .map_err(|e| DnsSecError::malformed(e.to_string(), signature))?;
        let digest = hash(self.hash.message_digest(), message)
            .map_err(|e| DnsSecError::malformed(e.to_string(), message))?;

        sig.verify(&digest, &eckey)
            .map_err(|e| DnsSecError::malformed(e.to_string(), signature))
    }
}

/// Ed25519 and Ed448 (RFC 8080). The message is signed as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdDsaPrimitive;

impl VerifyPrimitive for EdDsaPrimitive {
    fn verify(&self, key: &PublicKeyMaterial, message: &[u8], signature: &[u8]) -> Result<bool> {
        let PublicKeyMaterial::EdDsa { curve, point } = key else {
            return Err(key_mismatch("EdDSA", key));
        };
        let id = match curve {
            EdCurve::Ed25519 => Id::ED25519,
            EdCurve::Ed448 => Id::ED448,
        };
        let pkey = PKey::public_key_from_raw_bytes(point, id).map_err(invalid_key)?;
        check(&pkey, None, message, signature)
    }
}
