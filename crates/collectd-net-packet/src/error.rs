/// Errors that can occur while decoding a collectd packet.
///
/// Every variant except `Io` and `PacketTooLarge` describes the first
/// structural violation found in the buffer. Offsets are byte positions from
/// the start of the packet.
#[derive(Debug, thiserror::Error)]
pub enum PacketError {
    /// Fewer than 4 bytes remain where a part header is expected.
    #[error("truncated part header at offset {offset} ({remaining} bytes remain, need 4)")]
    TruncatedHeader { offset: usize, remaining: usize },

    /// The declared payload runs past the end of the buffer.
    #[error(
        "truncated payload for part 0x{part_type:04x} at offset {offset} \
         (declared {declared} bytes, {remaining} remain)"
    )]
    TruncatedPayload {
        offset: usize,
        part_type: u16,
        declared: usize,
        remaining: usize,
    },

    /// A string payload is empty, lacks its NUL terminator, or is not UTF-8.
    #[error("malformed string in part 0x{part_type:04x} at offset {offset}: {reason}")]
    MalformedString {
        offset: usize,
        part_type: u16,
        reason: &'static str,
    },

    /// A values part carries a type tag outside COUNTER/GAUGE/DERIVE/ABSOLUTE.
    #[error("unknown value type tag {tag} at offset {offset}")]
    UnknownValueType { offset: usize, tag: u8 },

    /// The declared part length disagrees with the size its payload requires.
    #[error(
        "length mismatch for part 0x{part_type:04x} at offset {offset} \
         (declared {declared} bytes, expected {expected})"
    )]
    LengthMismatch {
        offset: usize,
        part_type: u16,
        declared: usize,
        expected: usize,
    },

    /// The packet exceeds the configured maximum size.
    #[error("packet too large ({size} bytes, max {max})")]
    PacketTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading a packet.
    #[error("packet I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PacketError {
    /// Byte offset of the violation, when the error came from the decoder.
    pub fn offset(&self) -> Option<usize> {
        match self {
            PacketError::TruncatedHeader { offset, .. }
            | PacketError::TruncatedPayload { offset, .. }
            | PacketError::MalformedString { offset, .. }
            | PacketError::UnknownValueType { offset, .. }
            | PacketError::LengthMismatch { offset, .. } => Some(*offset),
            PacketError::PacketTooLarge { .. } | PacketError::Io(_) => None,
        }
    }
}

/// Errors raised while folding decoded parts into value lists.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    /// A values or message part arrived before a required identifier.
    #[error("{field} not set before part at index {index}")]
    MissingField { field: &'static str, index: usize },

    /// The packet itself failed to decode.
    #[error(transparent)]
    Packet(#[from] PacketError),
}

pub type Result<T> = std::result::Result<T, PacketError>;
