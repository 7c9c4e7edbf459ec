use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{PacketError, Result};
use crate::header::{read_header, HEADER_SIZE};
use crate::part::{decode_numeric, decode_string, Part, ValuePart};
use crate::part_type::{part_kind, part_type_name, PartKind};
use crate::value::decode_values;

/// Decode a complete packet into its parts, in wire order.
///
/// Unknown part types are skipped using their declared length. Any framing
/// or payload error aborts the whole decode; an empty buffer yields no parts.
pub fn decode_packet(buf: &[u8]) -> Result<Vec<Part>> {
    PartIter::new(buf).collect()
}

/// Lazily decodes the parts of one packet.
///
/// Yields `Err` at most once: after the first error the iterator is
/// exhausted, since offsets past a corrupted part cannot be trusted.
#[derive(Debug, Clone)]
pub struct PartIter<'a> {
    buf: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> PartIter<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            failed: false,
        }
    }

    /// Position of the next part header within the packet.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Decode parts until one is produced, skipping unknown types.
    fn next_part(&mut self) -> Result<Option<Part>> {
        while self.offset < self.buf.len() {
            let offset = self.offset;
            let mut src = &self.buf[offset..];
            let header = read_header(&mut src, offset)?;

            let Some(payload_len) = header.payload_len() else {
                return Err(PacketError::LengthMismatch {
                    offset,
                    part_type: header.part_type,
                    declared: header.length as usize,
                    expected: HEADER_SIZE,
                });
            };

            let remaining = src.len();
            if payload_len > remaining {
                return Err(PacketError::TruncatedPayload {
                    offset,
                    part_type: header.part_type,
                    declared: payload_len,
                    remaining,
                });
            }
            let payload = &src[..payload_len];

            let part = match part_kind(header.part_type) {
                Some(PartKind::String) => Part::String(decode_string(header, payload, offset)?),
                Some(PartKind::Numeric) => Part::Numeric(decode_numeric(header, payload, offset)?),
                Some(PartKind::Values) => Part::Values(ValuePart {
                    header,
                    values: decode_values(header, payload, offset)?,
                }),
                None => {
                    debug!(
                        offset,
                        part_type = header.part_type,
                        name = part_type_name(header.part_type),
                        length = header.length,
                        "skipping unrecognized part"
                    );
                    self.offset += header.length as usize;
                    continue;
                }
            };

            trace!(
                offset,
                part_type = header.part_type,
                name = part_type_name(header.part_type),
                length = header.length,
                "decoded part"
            );
            self.offset += header.length as usize;
            return Ok(Some(part));
        }

        Ok(None)
    }
}

impl Iterator for PartIter<'_> {
    type Item = Result<Part>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_part() {
            Ok(Some(part)) => Some(Ok(part)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for PartIter<'_> {}
