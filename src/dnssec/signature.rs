use super::key::{EcCurve, EdCurve, UnsignedInt};

/// Width of the DSA R and S fields (RFC 2536 section 3).
pub const DSA_FIELD_LEN: usize = 20;

/// Signature components decoded from RRSIG wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureValue {
    Dsa {
        t: u8,
        r: [u8; DSA_FIELD_LEN],
        s: [u8; DSA_FIELD_LEN],
    },
    Rsa(Vec<u8>),
    Ecdsa {
        curve: EcCurve,
        r: UnsignedInt,
        s: UnsignedInt,
    },
    EdDsa { curve: EdCurve, signature: Vec<u8> },
}
