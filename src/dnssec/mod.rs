//! DNSSEC key and signature handling: wire format codecs, verification
//! primitives and the diagnostics attached to insecure answers.

pub mod algorithm;
pub mod codec;
pub mod digest;
pub mod errors;
pub mod key;
pub mod primitive;
pub mod reason;
pub mod registry;
pub mod signature;
pub mod verifier;

pub use algorithm::DnsSecAlgorithm;
pub use codec::{KeyCodec, SignatureCodec};
pub use digest::DigestType;
pub use errors::DnsSecError;
pub use key::{EcCurve, EdCurve, PublicKeyMaterial, UnsignedInt};
pub use primitive::{HashAlgorithm, VerifyPrimitive};
pub use reason::UnverifiedReason;
pub use registry::{AlgorithmEntry, AlgorithmRegistry};
pub use signature::SignatureValue;
pub use verifier::SignatureVerifier;
