use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bitstream_io::{BigEndian, BitRead, BitReader};

use super::{
    ParseError,
    enums::{RecordClass, RecordType},
    name::DnsName,
};

/// Typed record data that can be extracted from an answer record.
pub trait RecordData: Clone + Ord + fmt::Debug + Send + Sync + 'static {
    const RTYPE: RecordType;

    /// Parses uncompressed wire-format RDATA.
    fn parse(rdata: &[u8]) -> Result<Self, ParseError>;

    fn from_rdata(data: &RData) -> Option<Self>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct A(pub Ipv4Addr);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Aaaa(pub Ipv6Addr);

/// Service location record data (RFC 2782).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Srv {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: DnsName,
}

impl Srv {
    pub fn new(priority: u16, weight: u16, port: u16, target: DnsName) -> Self {
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// A target of "." means the service is decidedly not available.
    pub fn is_service_unavailable(&self) -> bool {
        self.target.is_root()
    }
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// Address record data, either family.
pub trait InternetAddress {
    fn ip_addr(&self) -> IpAddr;
}

impl InternetAddress for A {
    fn ip_addr(&self) -> IpAddr {
        IpAddr::V4(self.0)
    }
}

impl InternetAddress for Aaaa {
    fn ip_addr(&self) -> IpAddr {
        IpAddr::V6(self.0)
    }
}

fn expect_len(rtype: RecordType, rdata: &[u8], expected: usize) -> Result<(), ParseError> {
    if rdata.len() != expected {
        return Err(ParseError::InvalidRdataLength {
            rtype,
            expected,
            actual: rdata.len(),
        });
    }
    Ok(())
}

impl RecordData for A {
    const RTYPE: RecordType = RecordType::A;

    fn parse(rdata: &[u8]) -> Result<Self, ParseError> {
        expect_len(Self::RTYPE, rdata, 4)?;
        let octets: [u8; 4] = [rdata[0], rdata[1], rdata[2], rdata[3]];
        Ok(A(Ipv4Addr::from(octets)))
    }

    fn from_rdata(data: &RData) -> Option<Self> {
        match data {
            RData::A(a) => Some(*a),
            _ => None,
        }
    }
}

impl RecordData for Aaaa {
    const RTYPE: RecordType = RecordType::AAAA;

    fn parse(rdata: &[u8]) -> Result<Self, ParseError> {
        expect_len(Self::RTYPE, rdata, 16)?;
        let mut octets = [0u8; 16];
        octets.copy_from_slice(rdata);
        Ok(Aaaa(Ipv6Addr::from(octets)))
    }

    fn from_rdata(data: &RData) -> Option<Self> {
        match data {
            RData::Aaaa(aaaa) => Some(*aaaa),
            _ => None,
        }
    }
}

impl RecordData for Srv {
    const RTYPE: RecordType = RecordType::SRV;

    fn parse(rdata: &[u8]) -> Result<Self, ParseError> {
        let mut reader = BitReader::<_, BigEndian>::new(rdata);
        let priority = reader.read_var::<u16>(16)?;
        let weight = reader.read_var::<u16>(16)?;
        let port = reader.read_var::<u16>(16)?;
        let target = DnsName::read_wire(&mut reader)?;
        if 6 + target.wire_len() != rdata.len() {
            return Err(ParseError::TrailingData(Self::RTYPE));
        }
        Ok(Srv::new(priority, weight, port, target))
    }

    fn from_rdata(data: &RData) -> Option<Self> {
        match data {
            RData::Srv(srv) => Some(srv.clone()),
            _ => None,
        }
    }
}

/// Record data as handed over by the message parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RData {
    A(A),
    Aaaa(Aaaa),
    Srv(Srv),
    Other { rtype: RecordType, data: Vec<u8> },
}

impl RData {
    pub fn rtype(&self) -> RecordType {
        match self {
            RData::A(_) => RecordType::A,
            RData::Aaaa(_) => RecordType::AAAA,
            RData::Srv(_) => RecordType::SRV,
            RData::Other { rtype, .. } => *rtype,
        }
    }

    /// Decodes A, AAAA and SRV data; anything else is kept opaque.
    pub fn parse(rtype: RecordType, rdata: &[u8]) -> Result<Self, ParseError> {
        Ok(match rtype {
            RecordType::A => RData::A(A::parse(rdata)?),
            RecordType::AAAA => RData::Aaaa(Aaaa::parse(rdata)?),
            RecordType::SRV => RData::Srv(Srv::parse(rdata)?),
            other => RData::Other {
                rtype: other,
                data: rdata.to_vec(),
            },
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: DnsName,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RData,
}

impl Record {
    pub fn new(name: DnsName, ttl: u32, data: RData) -> Self {
        Self {
            name,
            class: RecordClass::IN,
            ttl,
            data,
        }
    }

    pub fn from_wire(
        name: DnsName,
        rtype: RecordType,
        class: RecordClass,
        ttl: u32,
        rdata: &[u8],
    ) -> Result<Self, ParseError> {
        Ok(Self {
            name,
            class,
            ttl,
            data: RData::parse(rtype, rdata)?,
        })
    }

    pub fn rtype(&self) -> RecordType {
        self.data.rtype()
    }
}
