use std::collections::BTreeSet;

use tracing::trace;

use super::EngineResponse;
use crate::dns::{DnsQuestion, RecordData, ResponseCode};
use crate::dnssec::UnverifiedReason;
use crate::error::{EngineError, ResolverError, Result};

/// The outcome of one question: its answers plus everything known about how
/// far they can be trusted.
///
/// Read-only once built. When the query did not succeed the answer set is
/// empty and [`answers`](Self::answers) reports misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverResult<T: RecordData> {
    question: DnsQuestion,
    response_code: Option<ResponseCode>,
    answers: BTreeSet<T>,
    authentic_data: bool,
    unverified_reasons: Vec<UnverifiedReason>,
    failure: Option<EngineError>,
}

impl<T: RecordData> ResolverResult<T> {
    /// Keeps the answers owned by the question name that carry `T` data.
    pub fn from_response(question: DnsQuestion, response: EngineResponse) -> Self {
        let EngineResponse {
            response_code,
            answers,
            authentic_data,
            unverified_reasons,
        } = response;

        let answers: BTreeSet<T> = if response_code == ResponseCode::NoError {
            answers
                .iter()
                .filter(|record| {
                    record.name == question.name
                        && record.class == question.qclass
                        && record.rtype() == question.qtype
                })
                .filter_map(|record| T::from_rdata(&record.data))
                .collect()
        } else {
            BTreeSet::new()
        };
        trace!(
            "{} -> {} ({} answers, {} unverified reasons)",
            question,
            response_code,
            answers.len(),
            unverified_reasons.len()
        );

        Self {
            question,
            response_code: Some(response_code),
            answers,
            authentic_data,
            unverified_reasons,
            failure: None,
        }
    }

    /// A query that produced no response at all.
    pub fn from_failure(question: DnsQuestion, failure: EngineError) -> Self {
        Self {
            question,
            response_code: None,
            answers: BTreeSet::new(),
            authentic_data: false,
            unverified_reasons: Vec::new(),
            failure: Some(failure),
        }
    }

    pub fn question(&self) -> &DnsQuestion {
        &self.question
    }

    /// `None` when no response was received.
    pub fn response_code(&self) -> Option<ResponseCode> {
        self.response_code
    }

    pub fn was_successful(&self) -> bool {
        self.response_code == Some(ResponseCode::NoError)
    }

    pub fn failure(&self) -> Option<&EngineError> {
        self.failure.as_ref()
    }

    pub fn ensure_successful(&self) -> Result<()> {
        if self.was_successful() {
            return Ok(());
        }
        let outcome = match (&self.response_code, &self.failure) {
            (Some(code), _) => code.to_string(),
            (None, Some(failure)) => failure.to_string(),
            (None, None) => "no response".to_string(),
        };
        Err(ResolverError::IllegalUse(format!(
            "query {} was not successful ({}); check was_successful() before reading answers",
            self.question, outcome
        )))
    }

    pub fn answers(&self) -> Result<&BTreeSet<T>> {
        self.ensure_successful()?;
        Ok(&self.answers)
    }

    /// The answers, empty for an unsuccessful query.
    pub fn answers_or_empty(&self) -> &BTreeSet<T> {
        &self.answers
    }

    pub fn into_answers(self) -> Result<BTreeSet<T>> {
        self.ensure_successful()?;
        Ok(self.answers)
    }

    /// The AD bit of the response.
    pub fn authentic_data(&self) -> bool {
        self.authentic_data
    }

    pub fn unverified_reasons(&self) -> &[UnverifiedReason] {
        &self.unverified_reasons
    }

    pub fn has_unverified_reasons(&self) -> bool {
        !self.unverified_reasons.is_empty()
    }

    pub fn is_authentic(&self) -> bool {
        self.was_successful() && self.authentic_data && !self.has_unverified_reasons()
    }

    pub fn ensure_authentic(&self) -> Result<()> {
        self.ensure_successful()?;
        if self.is_authentic() {
            return Ok(());
        }
        Err(ResolverError::NotAuthentic {
            question: self.question.clone(),
            reasons: self.unverified_reasons.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{A, DnsName, RData, Record, RecordType, Srv};
    use std::net::Ipv4Addr;

    fn name(s: &str) -> DnsName {
        s.parse().unwrap()
    }

    fn a_record(owner: &str, ip: [u8; 4]) -> Record {
        Record::new(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
    }

    #[test]
    fn test_answers_filtered_and_deduplicated() {
        let question = DnsQuestion::new(name("example.com"), RecordType::A);
        let response = EngineResponse::new(ResponseCode::NoError).with_answers(vec![
            a_record("example.com", [192, 0, 2, 2]),
            a_record("EXAMPLE.com", [192, 0, 2, 1]),
            a_record("example.com", [192, 0, 2, 2]),
            a_record("other.com", [198, 51, 100, 1]),
            Record::new(
                name("example.com"),
                300,
                RData::Srv(Srv::new(1, 1, 1, name("x.example.com"))),
            ),
        ]);

        let result = ResolverResult::<A>::from_response(question, response);
        let answers: Vec<A> = result.answers().unwrap().iter().copied().collect();
        assert_eq!(
            answers,
            vec![
                A(Ipv4Addr::new(192, 0, 2, 1)),
                A(Ipv4Addr::new(192, 0, 2, 2)),
            ]
        );
    }

    #[test]
    fn test_unsuccessful_answers_are_illegal() {
        let question = DnsQuestion::new(name("missing.example"), RecordType::A);
        let response = EngineResponse::new(ResponseCode::NxDomain)
            .with_answers(vec![a_record("missing.example", [192, 0, 2, 1])]);
        let result = ResolverResult::<A>::from_response(question, response);

        assert!(!result.was_successful());
        assert!(result.answers_or_empty().is_empty());
        assert!(matches!(
            result.answers(),
            Err(ResolverError::IllegalUse(_))
        ));
        assert_eq!(result.response_code(), Some(ResponseCode::NxDomain));
    }

    #[test]
    fn test_failure_has_no_response_code() {
        let question = DnsQuestion::new(name("slow.example"), RecordType::A);
        let result = ResolverResult::<A>::from_failure(question, EngineError::Timeout);
        assert_eq!(result.response_code(), None);
        assert_eq!(result.failure(), Some(&EngineError::Timeout));
        let err = result.into_answers().unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_authenticity() {
        let question = DnsQuestion::new(name("example.com"), RecordType::A);
        let secure = ResolverResult::<A>::from_response(
            question.clone(),
            EngineResponse::new(ResponseCode::NoError).authentic(),
        );
        assert!(secure.is_authentic());
        assert!(secure.ensure_authentic().is_ok());

        let insecure = ResolverResult::<A>::from_response(
            question,
            EngineResponse::new(ResponseCode::NoError)
                .authentic()
                .with_reasons(vec![UnverifiedReason::NoRootSecureEntryPoint]),
        );
        assert!(insecure.has_unverified_reasons());
        assert!(!insecure.is_authentic());
        match insecure.ensure_authentic() {
            Err(ResolverError::NotAuthentic { reasons, .. }) => {
                assert_eq!(reasons, vec![UnverifiedReason::NoRootSecureEntryPoint])
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
