use std::fmt;
use std::str::FromStr;

use bitstream_io::BitRead;

use super::ParseError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// An absolute domain name.
///
/// Labels are stored lowercased so that equality, ordering and hashing follow
/// the case-insensitive comparison DNS requires. The root name has no labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DnsName {
    labels: Vec<String>,
}

impl DnsName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name = Self::root();
        for label in labels {
            let label = label.as_ref();
            if label.is_empty() {
                return Err(ParseError::InvalidLabel("empty label".to_string()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(ParseError::InvalidLabel(format!(
                    "label exceeds {} octets: {}",
                    MAX_LABEL_LEN, label
                )));
            }
            name.labels.push(label.to_ascii_lowercase());
        }
        if name.wire_len() > MAX_NAME_LEN {
            return Err(ParseError::NameTooLong);
        }
        Ok(name)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `prefix` followed by the labels of `self`.
    pub fn prepend(&self, prefix: &DnsName) -> Result<Self, ParseError> {
        Self::from_labels(prefix.labels.iter().chain(self.labels.iter()))
    }

    /// Drops the `n` leftmost labels. Stripping every label yields the root.
    pub fn strip_labels(&self, n: usize) -> Self {
        Self {
            labels: self.labels.iter().skip(n).cloned().collect(),
        }
    }

    /// Length of the uncompressed wire form including the root label.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    /// Canonical (lowercase, uncompressed) wire form, RFC 4034 section 6.2.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wire_len());
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        buf
    }

    /// Reads an uncompressed name, as carried in SRV record data.
    pub fn read_wire<R: BitRead>(reader: &mut R) -> Result<Self, ParseError> {
        let mut labels = Vec::new();
        loop {
            let label_len = reader.read_var::<u8>(8)?;
            if label_len == 0 {
                break;
            }
            if label_len & 0xC0 != 0 {
                return Err(ParseError::InvalidLabel(
                    "compressed name in record data".to_string(),
                ));
            }
            let mut buf = vec![0; label_len as usize];
            reader.read_bytes(&mut buf)?;
            let label = String::from_utf8(buf)
                .map_err(|_| ParseError::InvalidLabel("label is not valid UTF-8".to_string()))?;
            labels.push(label);
        }
        Self::from_labels(labels)
    }
}

impl FromStr for DnsName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Self::from_labels(trimmed.split('.'))
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write!(f, "{}.", label)?;
        }
        Ok(())
    }
}
