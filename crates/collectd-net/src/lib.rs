//! Decode and inspect collectd network plugin packets.
//!
//! collectd-net decodes the binary format the collectd network plugin sends
//! over UDP: hostnames, timestamps, plugin and type identifiers, and typed
//! value arrays.
//!
//! # Crate Structure
//!
//! - [`packet`] — Part decoder, value-list assembly and capture reading
//!
//! The `collectd-net` binary (behind the `cli` feature) prints the parts or
//! the assembled value lists of a capture file.

/// Re-export packet types.
pub mod packet {
    pub use collectd_net_packet::*;
}
