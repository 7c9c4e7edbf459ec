use bytes::Buf;

use crate::error::{PacketError, Result};

/// Part header: type (2) + length (2) = 4 bytes.
pub const HEADER_SIZE: usize = 4;

/// The type/length preamble shared by every part.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────┬────────────────────────┐
/// │ Type (2B BE) │ Length       │ Payload                │
/// │              │ (2B BE)      │ (Length - 4 bytes)     │
/// └──────────────┴──────────────┴────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartHeader {
    /// Part type identifier, see [`crate::part_type`].
    pub part_type: u16,
    /// Total length of header and payload in bytes.
    pub length: u16,
}

impl PartHeader {
    /// Create a new header.
    pub fn new(part_type: u16, length: u16) -> Self {
        Self { part_type, length }
    }

    /// Payload size implied by the declared length.
    ///
    /// Returns `None` when the declared length cannot even cover the header.
    pub fn payload_len(&self) -> Option<usize> {
        (self.length as usize).checked_sub(HEADER_SIZE)
    }
}

/// Read a part header from the front of `src`, advancing it by 4 bytes.
///
/// `offset` is the position of `src` within the packet and is only used for
/// error context.
pub fn read_header(src: &mut &[u8], offset: usize) -> Result<PartHeader> {
    if src.remaining() < HEADER_SIZE {
        return Err(PacketError::TruncatedHeader {
            offset,
            remaining: src.remaining(),
        });
    }

    let part_type = src.get_u16();
    let length = src.get_u16();
    Ok(PartHeader { part_type, length })
}
