mod common;

use common::*;
use dnssec_srv::dns::{A, Aaaa, DnsQuestion, RecordType, ResponseCode};
use dnssec_srv::{EngineError, EngineResponse, ResolverApi, ResolverError, UnverifiedReason};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

#[tokio::test]
async fn test_resolve_typed_answers() {
    init_tracing();
    let engine = Arc::new(
        StubEngine::new()
            .with(
                "example.com",
                RecordType::A,
                Ok(EngineResponse::new(ResponseCode::NoError)
                    .authentic()
                    .with_answers(vec![
                        a_record("example.com", Ipv4Addr::new(192, 0, 2, 7)),
                        a_record("example.com", Ipv4Addr::new(192, 0, 2, 7)),
                    ])),
            )
            .with(
                "example.com",
                RecordType::AAAA,
                answer(vec![aaaa_record("example.com", Ipv6Addr::LOCALHOST)]),
            ),
    );
    let api = ResolverApi::with_engine(engine.clone());

    let a = api.resolve::<A>(&name("example.com")).await;
    assert!(a.was_successful());
    assert!(a.is_authentic());
    assert_eq!(a.answers().unwrap().len(), 1);
    assert_eq!(
        a.question(),
        &DnsQuestion::new(name("example.com"), RecordType::A)
    );

    let aaaa = api.resolve::<Aaaa>(&name("example.com")).await;
    assert!(!aaaa.is_authentic());
    assert!(aaaa.answers().unwrap().contains(&Aaaa(Ipv6Addr::LOCALHOST)));
    assert_eq!(engine.query_count(), 2);
}

#[tokio::test]
async fn test_engine_failure_becomes_unsuccessful_result() {
    let engine = Arc::new(StubEngine::new().with(
        "down.example",
        RecordType::A,
        Err(EngineError::NoResponse("all servers failed".to_string())),
    ));
    let api = ResolverApi::with_engine(engine);

    let result = api.resolve::<A>(&name("down.example")).await;
    assert!(!result.was_successful());
    assert_eq!(result.response_code(), None);
    assert!(matches!(result.failure(), Some(EngineError::NoResponse(_))));
    assert!(matches!(
        result.answers(),
        Err(ResolverError::IllegalUse(_))
    ));
}

#[tokio::test]
async fn test_nxdomain_is_unsuccessful() {
    let api = ResolverApi::with_engine(Arc::new(StubEngine::new()));

    let result = api.resolve::<A>(&name("missing.example")).await;
    assert_eq!(result.response_code(), Some(ResponseCode::NxDomain));
    assert!(result.failure().is_none());
    assert!(result.answers_or_empty().is_empty());
    assert!(result.ensure_authentic().is_err());
}

#[tokio::test]
async fn test_unverified_reasons_are_carried() {
    let reasons = vec![
        UnverifiedReason::NoTrustAnchor {
            zone: name("example."),
        },
        UnverifiedReason::NoRootSecureEntryPoint,
    ];
    let engine = Arc::new(StubEngine::new().with(
        "example.com",
        RecordType::A,
        insecure_answer(
            vec![a_record("example.com", Ipv4Addr::new(192, 0, 2, 1))],
            reasons.clone(),
        ),
    ));
    let api = ResolverApi::with_engine(engine);

    let result = api.resolve::<A>(&name("example.com")).await;
    assert!(result.has_unverified_reasons());
    assert_eq!(result.unverified_reasons(), reasons.as_slice());
    // Answers stay usable, trust is up to the caller.
    assert_eq!(result.answers().unwrap().len(), 1);
    match result.ensure_authentic() {
        Err(ResolverError::NotAuthentic { reasons: got, .. }) => assert_eq!(got, reasons),
        other => panic!("unexpected {other:?}"),
    }
}
