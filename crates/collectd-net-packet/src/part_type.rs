//! Well-known part type identifiers.
//!
//! Codes follow the collectd binary protocol. Types not listed here are
//! skipped by the decoder using their declared length.

/// Hostname the values were collected on.
pub const HOST: u16 = 0x0000;

/// Timestamp in whole seconds since the epoch (collectd < 5.0).
pub const TIME: u16 = 0x0001;

/// Plugin name, e.g. `cpu`.
pub const PLUGIN: u16 = 0x0002;

/// Plugin instance, e.g. `sda1`.
pub const PLUGIN_INSTANCE: u16 = 0x0003;

/// Type name as found in `types.db`, e.g. `disk_octets`.
pub const TYPE: u16 = 0x0004;

/// Type instance, e.g. `idle`.
pub const TYPE_INSTANCE: u16 = 0x0005;

/// Array of typed samples.
pub const VALUES: u16 = 0x0006;

/// Collection interval in whole seconds (collectd < 5.0).
pub const INTERVAL: u16 = 0x0007;

/// High-resolution timestamp (2^-30 second units).
pub const HIGH_DEF_TIME: u16 = 0x0008;

/// High-resolution collection interval (2^-30 second units).
pub const HIGH_DEF_INTERVAL: u16 = 0x0009;

/// Notification message text.
pub const MESSAGE: u16 = 0x0100;

/// Notification severity.
pub const SEVERITY: u16 = 0x0101;

/// HMAC-SHA-256 signature. Not verified; skipped.
pub const SIGNATURE: u16 = 0x0200;

/// AES-256 encrypted payload. Not decrypted; skipped.
pub const ENCRYPTION: u16 = 0x0210;

/// Payload shape selected by a part type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// NUL-terminated string.
    String,
    /// Single big-endian 64-bit unsigned integer.
    Numeric,
    /// Count, type tags and samples.
    Values,
}

/// Returns the payload shape for a part type, or `None` for types the
/// decoder skips.
pub fn part_kind(part_type: u16) -> Option<PartKind> {
    match part_type {
        HOST | PLUGIN | PLUGIN_INSTANCE | TYPE | TYPE_INSTANCE | MESSAGE => Some(PartKind::String),
        TIME | INTERVAL | HIGH_DEF_TIME | HIGH_DEF_INTERVAL | SEVERITY => Some(PartKind::Numeric),
        VALUES => Some(PartKind::Values),
        _ => None,
    }
}

/// Returns a human-readable name for a part type.
pub fn part_type_name(part_type: u16) -> &'static str {
    match part_type {
        HOST => "HOST",
        TIME => "TIME",
        PLUGIN => "PLUGIN",
        PLUGIN_INSTANCE => "PLUGIN_INSTANCE",
        TYPE => "TYPE",
        TYPE_INSTANCE => "TYPE_INSTANCE",
        VALUES => "VALUES",
        INTERVAL => "INTERVAL",
        HIGH_DEF_TIME => "HIGH_DEF_TIME",
        HIGH_DEF_INTERVAL => "HIGH_DEF_INTERVAL",
        MESSAGE => "MESSAGE",
        SEVERITY => "SEVERITY",
        SIGNATURE => "SIGNATURE",
        ENCRYPTION => "ENCRYPTION",
        _ => "UNKNOWN",
    }
}
