//! High-resolution time and interval values.
//!
//! collectd 5 sends time and interval as fixed-point numbers: whole seconds
//! in the upper 34 bits and a fraction in units of 2^-30 seconds in the lower
//! 30 bits.

use std::fmt;
use std::time::Duration;

const FRACTION_BITS: u32 = 30;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;

/// A collectd fixed-point time or interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HighResTime(u64);

impl HighResTime {
    /// Wrap a raw value from a `HIGH_DEF_TIME` or `HIGH_DEF_INTERVAL` part.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Convert whole seconds, as carried by legacy `TIME` and `INTERVAL` parts.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs << FRACTION_BITS)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whole seconds.
    pub const fn seconds(self) -> u64 {
        self.0 >> FRACTION_BITS
    }

    /// Sub-second fraction in units of 2^-30 seconds.
    pub const fn fraction(self) -> u64 {
        self.0 & FRACTION_MASK
    }

    /// Sub-second fraction in nanoseconds, rounded to nearest.
    pub fn subsec_nanos(self) -> u32 {
        let nanos = (self.fraction() * 1_000_000_000 + (1 << (FRACTION_BITS - 1))) >> FRACTION_BITS;
        nanos.min(999_999_999) as u32
    }

    pub fn as_duration(self) -> Duration {
        Duration::new(self.seconds(), self.subsec_nanos())
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRACTION_BITS) as f64
    }
}

impl From<Duration> for HighResTime {
    fn from(d: Duration) -> Self {
        let fraction = ((d.subsec_nanos() as u64) << FRACTION_BITS) / 1_000_000_000;
        Self((d.as_secs() << FRACTION_BITS) | fraction)
    }
}

impl fmt::Display for HighResTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.as_secs_f64())
    }
}
