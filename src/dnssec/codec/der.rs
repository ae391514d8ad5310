//! The composite `SEQUENCE { INTEGER r, INTEGER s }` encoding that DSA and
//! ECDSA verification primitives consume.

use super::WireReader;
use crate::dnssec::errors::{DnsSecError, Result};
use crate::dnssec::key::UnsignedInt;

pub const SEQUENCE_TAG: u8 = 0x30;
pub const INTEGER_TAG: u8 = 0x02;

/// An unsigned field whose top bit is set would read as negative, so it
/// needs a leading zero octet.
pub fn needs_sign_pad(field: &[u8]) -> bool {
    field.first().is_some_and(|b| b & 0x80 != 0)
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    }
}

fn push_integer(out: &mut Vec<u8>, field: &[u8]) {
    let padded = needs_sign_pad(field);
    out.push(INTEGER_TAG);
    push_len(out, field.len() + usize::from(padded));
    if padded {
        out.push(0);
    }
    out.extend_from_slice(field);
}

/// Encodes two unsigned big-endian fields verbatim, adding a sign pad octet
/// to each one independently when needed.
pub fn encode_integer_pair(r: &[u8], s: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(r.len() + s.len() + 6);
    push_integer(&mut body, r);
    push_integer(&mut body, s);

    let mut out = Vec::with_capacity(body.len() + 3);
    out.push(SEQUENCE_TAG);
    push_len(&mut out, body.len());
    out.extend_from_slice(&body);
    out
}

/// Minimal octets of an unsigned value; zero is a single zero octet.
pub fn minimal_field(value: &UnsignedInt) -> Vec<u8> {
    if value.is_zero() {
        vec![0]
    } else {
        value.as_bytes().to_vec()
    }
}

fn read_len(reader: &mut WireReader<'_>, data: &[u8]) -> Result<usize> {
    match reader.read_u8("length")? {
        len if len < 0x80 => Ok(usize::from(len)),
        0x81 => Ok(usize::from(reader.read_u8("length")?)),
        0x82 => Ok(usize::from(reader.read_u16("length")?)),
        other => Err(DnsSecError::malformed(
            format!("unsupported length form 0x{:02x}", other),
            data,
        )),
    }
}

fn read_integer(reader: &mut WireReader<'_>, data: &[u8]) -> Result<UnsignedInt> {
    if reader.read_u8("integer tag")? != INTEGER_TAG {
        return Err(DnsSecError::malformed("expected INTEGER", data));
    }
    let len = read_len(reader, data)?;
    if len == 0 {
        return Err(DnsSecError::malformed("empty INTEGER", data));
    }
    let bytes = reader.read_bytes(len, "integer")?;
    if needs_sign_pad(&bytes) {
        return Err(DnsSecError::malformed("negative INTEGER", data));
    }
    Ok(UnsignedInt::from_be_bytes(&bytes))
}

/// Reads back the two unsigned values of an integer pair. Redundant leading
/// zero octets are tolerated.
pub fn decode_integer_pair(data: &[u8]) -> Result<(UnsignedInt, UnsignedInt)> {
    let mut reader = WireReader::new(data);
    if reader.read_u8("sequence tag")? != SEQUENCE_TAG {
        return Err(DnsSecError::malformed("expected SEQUENCE", data));
    }
    let len = read_len(&mut reader, data)?;
    if len != reader.remaining() {
        return Err(DnsSecError::malformed("SEQUENCE length mismatch", data));
    }
    let r = read_integer(&mut reader, data)?;
    let s = read_integer(&mut reader, data)?;
    reader.finish("integer pair")?;
    Ok((r, s))
}
