//! Decoder for the collectd network plugin binary packet format.
//!
//! A packet is a sequence of type-length-value parts. Every part starts with:
//! - A 2-byte big-endian part type
//! - A 2-byte big-endian total length (header included)
//!
//! followed by a string, a single 64-bit number, or an array of typed
//! samples, depending on the type. [`decode_packet`] turns one complete
//! packet into an ordered `Vec<Part>`; [`records`] folds those parts into
//! complete value lists and notifications.

#[cfg(feature = "async")]
pub mod codec;
pub mod decoder;
pub mod error;
pub mod header;
pub mod metric;
pub mod part;
pub mod part_type;
pub mod reader;
pub mod select;
pub mod time;
pub mod value;

#[cfg(feature = "async")]
pub use codec::CollectdCodec;
pub use decoder::{decode_packet, PartIter};
pub use error::{MetricError, PacketError, Result};
pub use header::{read_header, PartHeader, HEADER_SIZE};
pub use metric::{records, value_lists, Notification, Record, Severity, ValueList};
pub use part::{NumericPart, Part, StringPart, ValuePart};
pub use part_type::{
    part_kind, part_type_name, PartKind, ENCRYPTION, HIGH_DEF_INTERVAL, HIGH_DEF_TIME, HOST,
    INTERVAL, MESSAGE, PLUGIN, PLUGIN_INSTANCE, SEVERITY, SIGNATURE, TIME, TYPE, TYPE_INSTANCE,
    VALUES,
};
pub use reader::{read_packet, read_packet_bytes, DecoderConfig, DEFAULT_MAX_PACKET_SIZE};
pub use select::{numeric_parts, string_parts, value_parts};
pub use time::HighResTime;
pub use value::{Value, ValueType};
