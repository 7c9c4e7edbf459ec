use bytes::BytesMut;
use tokio_util::codec::Decoder;

use crate::decoder::decode_packet;
use crate::error::PacketError;
use crate::part::Part;
use crate::reader::DecoderConfig;

/// Datagram decoder for use with `tokio_util::udp::UdpFramed`.
///
/// Every call treats the whole buffer as one packet, matching the
/// one-packet-per-datagram framing of the collectd network plugin.
#[derive(Debug, Clone, Default)]
pub struct CollectdCodec {
    config: DecoderConfig,
}

impl CollectdCodec {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}

impl Decoder for CollectdCodec {
    type Item = Vec<Part>;
    type Error = PacketError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let datagram = src.split();
        self.config.check_size(datagram.len())?;
        decode_packet(&datagram).map(Some)
    }
}
