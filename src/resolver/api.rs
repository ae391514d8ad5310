use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{ResolverResult, SrvResolverResult, SrvServiceProto, SrvType};
use crate::config::{IpVersionSetting, ResolverConfig};
use crate::dns::{DnsName, DnsQuestion, ParseError, Record, RecordData, ResponseCode, Srv};
use crate::dnssec::UnverifiedReason;
use crate::error::EngineError;

/// What a resolution engine reports for one question, after transport,
/// message parsing and DNSSEC chain evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineResponse {
    pub response_code: ResponseCode,
    pub answers: Vec<Record>,
    /// AD bit
    pub authentic_data: bool,
    pub unverified_reasons: Vec<UnverifiedReason>,
}

impl EngineResponse {
    pub fn new(response_code: ResponseCode) -> Self {
        Self {
            response_code,
            ..Default::default()
        }
    }

    pub fn with_answers(mut self, answers: Vec<Record>) -> Self {
        self.answers = answers;
        self
    }

    pub fn with_reasons(mut self, reasons: Vec<UnverifiedReason>) -> Self {
        self.unverified_reasons = reasons;
        self
    }

    pub fn authentic(mut self) -> Self {
        self.authentic_data = true;
        self
    }
}

/// Network resolution plus DNSSEC chain evaluation.
#[async_trait]
pub trait ResolutionEngine: Send + Sync {
    async fn query(
        &self,
        question: &DnsQuestion,
        ip_version: IpVersionSetting,
    ) -> Result<EngineResponse, EngineError>;
}

/// Runs questions against an engine and wraps the outcome in typed results.
#[derive(Clone)]
pub struct ResolverApi {
    engine: Arc<dyn ResolutionEngine>,
    config: ResolverConfig,
}

impl ResolverApi {
    pub fn new(engine: Arc<dyn ResolutionEngine>, config: ResolverConfig) -> Self {
        Self { engine, config }
    }

    pub fn with_engine(engine: Arc<dyn ResolutionEngine>) -> Self {
        Self::new(engine, ResolverConfig::default())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn ip_version(&self) -> IpVersionSetting {
        self.config.ip_version
    }

    pub async fn resolve<T: RecordData>(&self, name: &DnsName) -> ResolverResult<T> {
        self.resolve_question(DnsQuestion::new(name.clone(), T::RTYPE)).await
    }

    /// Never fails: engine errors become an unsuccessful result.
    pub async fn resolve_question<T: RecordData>(
        &self,
        question: DnsQuestion,
    ) -> ResolverResult<T> {
        debug!("Resolving {}", question);
        match self.engine.query(&question, self.config.ip_version).await {
            Ok(response) => ResolverResult::from_response(question, response),
            Err(e) => {
                warn!("Resolution of {} failed: {}", question, e);
                ResolverResult::from_failure(question, e)
            }
        }
    }

    /// Resolves the SRV set at `name`. The service and protocol are taken from
    /// the leading `_service._proto` labels when present.
    pub async fn resolve_srv(&self, name: &DnsName) -> SrvResolverResult {
        let service_proto = SrvServiceProto::from_name(name);
        let result = self.resolve::<Srv>(name).await;
        SrvResolverResult::new(result, service_proto, self.clone())
    }

    pub async fn resolve_srv_type(
        &self,
        srv_type: SrvType,
        domain: &DnsName,
    ) -> Result<SrvResolverResult, ParseError> {
        self.resolve_srv_service(&srv_type.service_proto(), domain).await
    }

    pub async fn resolve_srv_service(
        &self,
        service_proto: &SrvServiceProto,
        domain: &DnsName,
    ) -> Result<SrvResolverResult, ParseError> {
        let name = domain.prepend(&service_proto.to_name()?)?;
        Ok(self.resolve_srv(&name).await)
    }
}

impl std::fmt::Debug for ResolverApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
