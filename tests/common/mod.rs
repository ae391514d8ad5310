//! Common test utilities: a scripted resolution engine and logging setup.

#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use dnssec_srv::{
    EngineError, EngineResponse, IpVersionSetting, ResolutionEngine, UnverifiedReason,
    dns::{A, Aaaa, DnsName, DnsQuestion, RData, Record, RecordType, ResponseCode, Srv},
};
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Initialise tracing once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn name(s: &str) -> DnsName {
    s.parse().expect("valid test name")
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::new(name(owner), 300, RData::A(A(ip)))
}

pub fn aaaa_record(owner: &str, ip: Ipv6Addr) -> Record {
    Record::new(name(owner), 300, RData::Aaaa(Aaaa(ip)))
}

pub fn srv_record(owner: &str, priority: u16, weight: u16, port: u16, target: &str) -> Record {
    Record::new(
        name(owner),
        300,
        RData::Srv(Srv::new(priority, weight, port, name(target))),
    )
}

pub fn answer(records: Vec<Record>) -> Result<EngineResponse, EngineError> {
    let response = EngineResponse::new(ResponseCode::NoError).with_answers(records);
    Ok(response)
}

pub fn insecure_answer(
    records: Vec<Record>,
    reasons: Vec<UnverifiedReason>,
) -> Result<EngineResponse, EngineError> {
    Ok(EngineResponse::new(ResponseCode::NoError)
        .with_answers(records)
        .with_reasons(reasons))
}

pub fn nxdomain() -> Result<EngineResponse, EngineError> {
    Ok(EngineResponse::new(ResponseCode::NxDomain))
}

/// Engine answering from a fixed table. Unknown questions get NXDOMAIN.
#[derive(Default)]
pub struct StubEngine {
    responses: HashMap<(DnsName, RecordType), Result<EngineResponse, EngineError>>,
    queries: AtomicUsize,
    log: Mutex<Vec<DnsQuestion>>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        owner: &str,
        rtype: RecordType,
        response: Result<EngineResponse, EngineError>,
    ) -> Self {
        self.responses.insert((name(owner), rtype), response);
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn queried(&self) -> Vec<DnsQuestion> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolutionEngine for StubEngine {
    async fn query(
        &self,
        question: &DnsQuestion,
        _ip_version: IpVersionSetting,
    ) -> Result<EngineResponse, EngineError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(question.clone());
        self.responses
            .get(&(question.name.clone(), question.qtype))
            .cloned()
            .unwrap_or_else(nxdomain)
    }
}
