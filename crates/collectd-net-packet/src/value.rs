//! Typed samples carried by a values part.

use std::fmt;

use bytes::Buf;

use crate::error::{PacketError, Result};
use crate::header::{PartHeader, HEADER_SIZE};

/// Size of the sample count field.
pub const COUNT_SIZE: usize = 2;

/// Size of a single sample.
pub const SAMPLE_SIZE: usize = 8;

/// How a sample is numerically interpreted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Counter = 0,
    Gauge = 1,
    Derive = 2,
    Absolute = 3,
}

impl ValueType {
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Counter),
            1 => Some(Self::Gauge),
            2 => Some(Self::Derive),
            3 => Some(Self::Absolute),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Gauge => "gauge",
            Self::Derive => "derive",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sample from a values part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Counter(u64),
    Gauge(f64),
    Derive(i64),
    Absolute(u64),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Counter(_) => ValueType::Counter,
            Value::Gauge(_) => ValueType::Gauge,
            Value::Derive(_) => ValueType::Derive,
            Value::Absolute(_) => ValueType::Absolute,
        }
    }

    /// Lossy conversion for display and aggregation.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Counter(v) | Value::Absolute(v) => v as f64,
            Value::Gauge(v) => v,
            Value::Derive(v) => v as f64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Counter(v) | Value::Absolute(v) => write!(f, "{v}"),
            Value::Gauge(v) => write!(f, "{v}"),
            Value::Derive(v) => write!(f, "{v}"),
        }
    }
}

/// Total part length required to carry `count` samples.
pub fn values_part_len(count: usize) -> usize {
    HEADER_SIZE + COUNT_SIZE + count * (1 + SAMPLE_SIZE)
}

/// Decode the payload of a values part.
///
/// Payload layout:
/// ```text
/// ┌────────────┬──────────────────┬──────────────────────────┐
/// │ Count N    │ Type tags        │ Samples                  │
/// │ (2B BE)    │ (N x 1B)         │ (N x 8B, order of tags)  │
/// └────────────┴──────────────────┴──────────────────────────┘
/// ```
///
/// GAUGE samples are little-endian doubles; all other samples are big-endian
/// integers. `offset` is the position of the part header in the packet.
pub fn decode_values(header: PartHeader, mut payload: &[u8], offset: usize) -> Result<Vec<Value>> {
    let declared = header.length as usize;

    if payload.remaining() < COUNT_SIZE {
        return Err(PacketError::LengthMismatch {
            offset,
            part_type: header.part_type,
            declared,
            expected: values_part_len(0),
        });
    }

    let count = payload.get_u16() as usize;
    let expected = values_part_len(count);
    if declared != expected || payload.remaining() != expected - HEADER_SIZE - COUNT_SIZE {
        return Err(PacketError::LengthMismatch {
            offset,
            part_type: header.part_type,
            declared,
            expected,
        });
    }

    let (tags, mut samples) = payload.split_at(count);
    let tags_offset = offset + HEADER_SIZE + COUNT_SIZE;

    let mut values = Vec::with_capacity(count);
    for (i, &tag) in tags.iter().enumerate() {
        let value_type = ValueType::from_u8(tag).ok_or(PacketError::UnknownValueType {
            offset: tags_offset + i,
            tag,
        })?;

        let value = match value_type {
            ValueType::Counter => Value::Counter(samples.get_u64()),
            ValueType::Gauge => Value::Gauge(samples.get_f64_le()),
            ValueType::Derive => Value::Derive(samples.get_i64()),
            ValueType::Absolute => Value::Absolute(samples.get_u64()),
        };
        values.push(value);
    }

    Ok(values)
}
