use std::fmt;

use super::{
    enums::{RecordClass, RecordType},
    name::DnsName,
};

/// The identity of a resolution request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnsQuestion {
    pub name: DnsName,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl DnsQuestion {
    pub fn new(name: DnsName, qtype: RecordType) -> Self {
        Self {
            name,
            qtype,
            qclass: RecordClass::IN,
        }
    }
}

impl fmt::Display for DnsQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.name, self.qclass, self.qtype)
    }
}
