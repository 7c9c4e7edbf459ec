use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::decoder::decode_packet;
use crate::error::{PacketError, Result};
use crate::part::Part;

/// Default maximum packet size: the largest UDP payload.
pub const DEFAULT_MAX_PACKET_SIZE: usize = 65_535;

/// collectd's default send buffer size, a typical packet upper bound.
pub const COLLECTD_BUFFER_SIZE: usize = 1452;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Configuration for reading and decoding packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum packet size in bytes. Default: 65 535.
    pub max_packet_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_packet_size: DEFAULT_MAX_PACKET_SIZE,
        }
    }
}

impl DecoderConfig {
    /// Fail with `PacketTooLarge` when `size` exceeds the limit.
    pub fn check_size(&self, size: usize) -> Result<()> {
        if size > self.max_packet_size {
            return Err(PacketError::PacketTooLarge {
                size,
                max: self.max_packet_size,
            });
        }
        Ok(())
    }
}

/// Read one whole packet from `reader` (a capture file, stdin, ...).
///
/// Reads until EOF. Fails with `PacketTooLarge` as soon as more than
/// `max_packet_size` bytes have been seen.
pub fn read_packet_bytes<R: Read>(mut reader: R, config: &DecoderConfig) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(COLLECTD_BUFFER_SIZE);
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let read = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(PacketError::Io(err)),
        };

        buf.extend_from_slice(&chunk[..read]);
        config.check_size(buf.len())?;
    }

    debug!(size = buf.len(), "read packet");
    Ok(buf)
}

/// Read one whole packet from `reader` and decode it.
pub fn read_packet<R: Read>(reader: R, config: &DecoderConfig) -> Result<Vec<Part>> {
    let buf = read_packet_bytes(reader, config)?;
    decode_packet(&buf)
}
