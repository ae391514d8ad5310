pub mod config;
pub mod dns;
pub mod dnssec;
pub mod error;
pub mod resolver;

pub use config::{IpVersionSetting, ResolverConfig};
pub use dnssec::{DnsSecAlgorithm, SignatureVerifier, UnverifiedReason};
pub use error::{EngineError, ResolverError};
pub use resolver::{
    EngineResponse, ResolutionEngine, ResolvedSrvRecord, ResolverApi, ResolverResult,
    SrvResolverResult,
};
