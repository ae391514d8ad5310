//! Typed resolution on top of an external [`ResolutionEngine`], carrying
//! DNSSEC verification status from the engine through to SRV targets.

pub mod api;
pub mod result;
pub mod srv;

pub use api::{EngineResponse, ResolutionEngine, ResolverApi};
pub use result::ResolverResult;
pub use srv::{
    ResolvedSrvRecord, SrvProto, SrvResolverResult, SrvServiceProto, SrvType, sort_srv_records,
};
