use std::cmp::Ordering;
use std::fmt;

/// A big-endian unsigned integer with leading zero octets removed.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct UnsignedInt(Vec<u8>);

impl UnsignedInt {
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        UnsignedInt(bytes[first..].to_vec())
    }

    /// Minimal big-endian octets; empty for zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bit_len(&self) -> usize {
        match self.0.first() {
            Some(&top) => self.0.len() * 8 - top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Left-pads to exactly `width` octets, or `None` if the value is wider.
    pub fn to_be_bytes_padded(&self, width: usize) -> Option<Vec<u8>> {
        if self.0.len() > width {
            return None;
        }
        let mut out = vec![0u8; width - self.0.len()];
        out.extend_from_slice(&self.0);
        Some(out)
    }
}

impl Ord for UnsignedInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for UnsignedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    P256,
    P384,
}

impl EcCurve {
    /// Octets per coordinate and per signature half.
    pub fn coordinate_len(&self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P384 => 48,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdCurve {
    Ed25519,
    Ed448,
}

impl EdCurve {
    pub fn key_len(&self) -> usize {
        match self {
            EdCurve::Ed25519 => 32,
            EdCurve::Ed448 => 57,
        }
    }

    pub fn signature_len(&self) -> usize {
        match self {
            EdCurve::Ed25519 => 64,
            EdCurve::Ed448 => 114,
        }
    }
}

/// Public key components decoded from DNSKEY wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyMaterial {
    /// RFC 2536: `T` fixes the width of P, G and Y at `64 + 8T` octets.
    Dsa {
        t: u8,
        q: UnsignedInt,
        p: UnsignedInt,
        g: UnsignedInt,
        y: UnsignedInt,
    },
    /// RFC 3110
    Rsa {
        exponent: UnsignedInt,
        modulus: UnsignedInt,
    },
    /// RFC 6605: uncompressed point without the 0x04 prefix.
    Ecdsa {
        curve: EcCurve,
        x: UnsignedInt,
        y: UnsignedInt,
    },
    /// RFC 8080
    EdDsa { curve: EdCurve, point: Vec<u8> },
}

impl PublicKeyMaterial {
    pub fn family(&self) -> &'static str {
        match self {
            PublicKeyMaterial::Dsa { .. } => "DSA",
            PublicKeyMaterial::Rsa { .. } => "RSA",
            PublicKeyMaterial::Ecdsa { .. } => "ECDSA",
            PublicKeyMaterial::EdDsa { .. } => "EdDSA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_int_strips_leading_zeros() {
        let value = UnsignedInt::from_be_bytes(&[0, 0, 0x01, 0x02]);
        assert_eq!(value.as_bytes(), &[0x01, 0x02]);
        assert_eq!(value.bit_len(), 9);
        assert_eq!(value.to_be_bytes_padded(4), Some(vec![0, 0, 1, 2]));
        assert_eq!(value.to_be_bytes_padded(1), None);
    }

    #[test]
    fn test_unsigned_int_zero() {
        let zero = UnsignedInt::from_be_bytes(&[0, 0]);
        assert!(zero.is_zero());
        assert_eq!(zero.bit_len(), 0);
        assert_eq!(zero.to_be_bytes_padded(2), Some(vec![0, 0]));
    }

    #[test]
    fn test_unsigned_int_numeric_order() {
        let small = UnsignedInt::from_be_bytes(&[0xff]);
        let large = UnsignedInt::from_be_bytes(&[0x00, 0x01, 0x00]);
        assert!(small < large);
        assert!(UnsignedInt::from_be_bytes(&[0x01, 0x00]) > small);
        assert_eq!(
            UnsignedInt::from_be_bytes(&[0, 5]).cmp(&UnsignedInt::from_be_bytes(&[5])),
            Ordering::Equal
        );
    }
}
