use bytes::Buf;

use crate::error::{PacketError, Result};
use crate::header::{PartHeader, HEADER_SIZE};
use crate::part_type::part_type_name;
use crate::value::Value;

/// Size of a numeric payload.
pub const NUMERIC_SIZE: usize = 8;

/// A NUL-terminated string part (host, plugin, type, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringPart {
    pub header: PartHeader,
    /// Text without the trailing NUL.
    pub content: String,
}

/// A single 64-bit numeric part (time, interval, severity, ...).
///
/// High-resolution time and interval values are surfaced raw; see
/// [`crate::time::HighResTime`] to split them into seconds and fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericPart {
    pub header: PartHeader,
    pub content: u64,
}

/// A values part: ordered samples for one value list.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePart {
    pub header: PartHeader,
    pub values: Vec<Value>,
}

/// One decoded unit of a collectd packet.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    String(StringPart),
    Numeric(NumericPart),
    Values(ValuePart),
}

impl Part {
    pub fn header(&self) -> &PartHeader {
        match self {
            Part::String(part) => &part.header,
            Part::Numeric(part) => &part.header,
            Part::Values(part) => &part.header,
        }
    }

    pub fn part_type(&self) -> u16 {
        self.header().part_type
    }

    /// Human-readable name of the part type.
    pub fn type_name(&self) -> &'static str {
        part_type_name(self.part_type())
    }

    pub fn as_string(&self) -> Option<&StringPart> {
        match self {
            Part::String(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericPart> {
        match self {
            Part::Numeric(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_values(&self) -> Option<&ValuePart> {
        match self {
            Part::Values(part) => Some(part),
            _ => None,
        }
    }
}

/// Decode a string payload, stripping its NUL terminator.
pub fn decode_string(header: PartHeader, payload: &[u8], offset: usize) -> Result<StringPart> {
    let malformed = |reason| PacketError::MalformedString {
        offset,
        part_type: header.part_type,
        reason,
    };

    let text = match payload.split_last() {
        None => return Err(malformed("empty payload")),
        Some((&0, text)) => text,
        Some(_) => return Err(malformed("missing NUL terminator")),
    };

    let content = std::str::from_utf8(text)
        .map_err(|_| malformed("invalid utf-8"))?
        .to_owned();

    Ok(StringPart { header, content })
}

/// Decode an 8-byte big-endian numeric payload.
///
/// Any declared payload size other than 8 is a length mismatch.
pub fn decode_numeric(
    header: PartHeader,
    mut payload: &[u8],
    offset: usize,
) -> Result<NumericPart> {
    if payload.len() != NUMERIC_SIZE {
        return Err(PacketError::LengthMismatch {
            offset,
            part_type: header.part_type,
            declared: header.length as usize,
            expected: HEADER_SIZE + NUMERIC_SIZE,
        });
    }

    Ok(NumericPart {
        header,
        content: payload.get_u64(),
    })
}
