//! SRV service resolution (RFC 2782): order the SRV set, resolve target
//! addresses and keep only the ones that passed DNSSEC validation.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use tokio::sync::OnceCell;
use tracing::debug;

use super::{ResolverApi, ResolverResult};
use crate::config::IpVersionSetting;
use crate::dns::{A, Aaaa, DnsName, InternetAddress, ParseError, RecordData, Srv};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrvProto {
    Tcp,
    Udp,
}

impl SrvProto {
    pub fn as_str(&self) -> &'static str {
        match self {
            SrvProto::Tcp => "tcp",
            SrvProto::Udp => "udp",
        }
    }
}

/// The `_service._proto` prefix of an SRV owner name, stored without the
/// leading underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SrvServiceProto {
    pub service: String,
    pub proto: String,
}

impl SrvServiceProto {
    pub fn new(service: impl Into<String>, proto: SrvProto) -> Self {
        Self {
            service: service.into(),
            proto: proto.as_str().to_string(),
        }
    }

    /// Reads the first two labels of `name` if both start with `_`.
    pub fn from_name(name: &DnsName) -> Option<Self> {
        match name.labels() {
            [service, proto, ..] => Some(Self {
                service: service.strip_prefix('_')?.to_string(),
                proto: proto.strip_prefix('_')?.to_string(),
            }),
            _ => None,
        }
    }

    pub fn to_name(&self) -> std::result::Result<DnsName, ParseError> {
        DnsName::from_labels([format!("_{}", self.service), format!("_{}", self.proto)])
    }
}

impl fmt::Display for SrvServiceProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}._{}", self.service, self.proto)
    }
}

/// Well-known services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrvType {
    XmppClient,
    XmppServer,
}

impl SrvType {
    pub fn service_proto(&self) -> SrvServiceProto {
        match self {
            SrvType::XmppClient => SrvServiceProto::new("xmpp-client", SrvProto::Tcp),
            SrvType::XmppServer => SrvServiceProto::new("xmpp-server", SrvProto::Tcp),
        }
    }
}

/// Ascending priority, then descending weight. Stable, so equal records keep
/// their input order.
pub fn sort_srv_records(mut records: Vec<Srv>) -> Vec<Srv> {
    records.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.weight.cmp(&a.weight))
    });
    records
}

/// An SRV record together with the addresses its target resolved to.
#[derive(Debug, Clone)]
pub struct ResolvedSrvRecord {
    name: DnsName,
    service_proto: Option<SrvServiceProto>,
    srv: Srv,
    addresses: Vec<IpAddr>,
    a_result: Option<ResolverResult<A>>,
    aaaa_result: Option<ResolverResult<Aaaa>>,
}

impl ResolvedSrvRecord {
    /// The queried SRV owner name.
    pub fn name(&self) -> &DnsName {
        &self.name
    }

    pub fn service_proto(&self) -> Option<&SrvServiceProto> {
        self.service_proto.as_ref()
    }

    pub fn srv(&self) -> &Srv {
        &self.srv
    }

    pub fn target(&self) -> &DnsName {
        &self.srv.target
    }

    pub fn port(&self) -> u16 {
        self.srv.port
    }

    /// Merged addresses in the configured family order.
    pub fn addresses(&self) -> &[IpAddr] {
        &self.addresses
    }

    /// `None` when IPv4 was not queried.
    pub fn a_result(&self) -> Option<&ResolverResult<A>> {
        self.a_result.as_ref()
    }

    /// `None` when IPv6 was not queried.
    pub fn aaaa_result(&self) -> Option<&ResolverResult<Aaaa>> {
        self.aaaa_result.as_ref()
    }

    pub fn socket_addrs(&self) -> Vec<SocketAddr> {
        self.addresses
            .iter()
            .map(|ip| SocketAddr::new(*ip, self.srv.port))
            .collect()
    }
}

/// The result of an SRV query, with lazily resolved target addresses.
///
/// The type is `Send + Sync` and can be shared behind an `Arc`. Target
/// resolution runs at most once: concurrent callers of
/// [`sorted_srv_resolved_addresses`](Self::sorted_srv_resolved_addresses)
/// wait on the same `OnceCell` initialization and then read the same list.
#[derive(Debug)]
pub struct SrvResolverResult {
    result: ResolverResult<Srv>,
    service_proto: Option<SrvServiceProto>,
    resolver: ResolverApi,
    resolved: OnceCell<Vec<ResolvedSrvRecord>>,
}

impl SrvResolverResult {
    pub fn new(
        result: ResolverResult<Srv>,
        service_proto: Option<SrvServiceProto>,
        resolver: ResolverApi,
    ) -> Self {
        Self {
            result,
            service_proto,
            resolver,
            resolved: OnceCell::new(),
        }
    }

    /// The underlying SRV query result.
    pub fn result(&self) -> &ResolverResult<Srv> {
        &self.result
    }

    pub fn service_proto(&self) -> Option<&SrvServiceProto> {
        self.service_proto.as_ref()
    }

    /// Resolves every SRV target once and returns the records in RFC 2782
    /// order. Targets without usable addresses are left out. Later calls
    /// return the cached list without querying again.
    pub async fn sorted_srv_resolved_addresses(&self) -> Result<&[ResolvedSrvRecord]> {
        self.result.ensure_successful()?;
        let resolved = self.resolved.get_or_init(|| self.resolve_targets()).await;
        Ok(resolved.as_slice())
    }

    async fn resolve_targets(&self) -> Vec<ResolvedSrvRecord> {
        let records = sort_srv_records(self.result.answers_or_empty().iter().cloned().collect());
        if records.len() == 1 && records[0].is_service_unavailable() {
            debug!("{} advertises no service", self.result.question().name);
            return Vec::new();
        }

        let ip_version = self.resolver.ip_version();
        let mut resolved = Vec::with_capacity(records.len());
        for srv in records {
            let a_result = if ip_version.v4() {
                Some(self.resolver.resolve::<A>(&srv.target).await)
            } else {
                None
            };
            let aaaa_result = if ip_version.v6() {
                Some(self.resolver.resolve::<Aaaa>(&srv.target).await)
            } else {
                None
            };

            let v4 = usable_addresses(a_result.as_ref());
            let v6 = usable_addresses(aaaa_result.as_ref());
            if v4.is_empty() && v6.is_empty() {
                // CNAME targets are not followed, they end up here as well.
                debug!("Skipping SRV target {}: no usable addresses", srv.target);
                continue;
            }

            let addresses = match ip_version {
                IpVersionSetting::V4Only => v4,
                IpVersionSetting::V6Only => v6,
                IpVersionSetting::V4V6 => v4.into_iter().chain(v6).collect(),
                IpVersionSetting::V6V4 => v6.into_iter().chain(v4).collect(),
            };
            resolved.push(ResolvedSrvRecord {
                name: self.result.question().name.clone(),
                service_proto: self.service_proto.clone(),
                srv,
                addresses,
                a_result,
                aaaa_result,
            });
        }
        resolved
    }
}

/// Addresses of a successful result without unverified reasons.
fn usable_addresses<T>(result: Option<&ResolverResult<T>>) -> Vec<IpAddr>
where
    T: RecordData + InternetAddress,
{
    let Some(result) = result else {
        return Vec::new();
    };
    if !result.was_successful() {
        return Vec::new();
    }
    if result.has_unverified_reasons() {
        if !result.answers_or_empty().is_empty() {
            debug!(
                "Discarding {} insecure answers for {}",
                result.answers_or_empty().len(),
                result.question()
            );
        }
        return Vec::new();
    }
    result
        .answers_or_empty()
        .iter()
        .map(InternetAddress::ip_addr)
        .collect()
}
