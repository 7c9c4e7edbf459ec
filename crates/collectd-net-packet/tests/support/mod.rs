//! Test-only packet encoder and reference captures.
#![allow(dead_code)]

use bytes::{BufMut, BytesMut};
use collectd_net_packet::{
    Part, Value, HIGH_DEF_INTERVAL, HIGH_DEF_TIME, HOST, PLUGIN, PLUGIN_INSTANCE, TYPE,
    TYPE_INSTANCE, VALUES,
};

/// First timestamp of the reference capture, in whole seconds.
pub const REFERENCE_TIME: u64 = 1_419_765_641;

#[derive(Debug, Default)]
pub struct PacketBuilder {
    buf: BytesMut,
}

impl PacketBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(&mut self, part_type: u16, text: &str) -> &mut Self {
        self.buf.put_u16(part_type);
        self.buf.put_u16((4 + text.len() + 1) as u16);
        self.buf.put_slice(text.as_bytes());
        self.buf.put_u8(0);
        self
    }

    pub fn numeric(&mut self, part_type: u16, value: u64) -> &mut Self {
        self.buf.put_u16(part_type);
        self.buf.put_u16(12);
        self.buf.put_u64(value);
        self
    }

    pub fn values(&mut self, values: &[Value]) -> &mut Self {
        self.buf.put_u16(VALUES);
        self.buf.put_u16((4 + 2 + values.len() * 9) as u16);
        self.buf.put_u16(values.len() as u16);
        for value in values {
            self.buf.put_u8(value.value_type() as u8);
        }
        for value in values {
            match *value {
                Value::Counter(v) | Value::Absolute(v) => self.buf.put_u64(v),
                Value::Gauge(v) => self.buf.put_f64_le(v),
                Value::Derive(v) => self.buf.put_i64(v),
            }
        }
        self
    }

    /// A part with an arbitrary declared length and payload.
    pub fn raw(&mut self, part_type: u16, length: u16, payload: &[u8]) -> &mut Self {
        self.buf.put_u16(part_type);
        self.buf.put_u16(length);
        self.buf.put_slice(payload);
        self
    }

    pub fn part(&mut self, part: &Part) -> &mut Self {
        match part {
            Part::String(p) => self.string(p.header.part_type, &p.content),
            Part::Numeric(p) => self.numeric(p.header.part_type, p.content),
            Part::Values(p) => self.values(&p.values),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(&self) -> Vec<u8> {
        self.buf.to_vec()
    }
}

fn hr(secs: u64) -> u64 {
    secs << 30
}

/// One disk + cpu round from a localhost agent, laid out the way the network
/// plugin emits it: identifiers are only written when they change.
pub fn reference_capture() -> Vec<u8> {
    let mut b = PacketBuilder::new();
    b.string(HOST, "localhost")
        .numeric(HIGH_DEF_TIME, hr(REFERENCE_TIME))
        .numeric(HIGH_DEF_INTERVAL, hr(2))
        .string(PLUGIN, "disk");

    let disks = ["sda1", "sda2", "sda5", "dm-0", "dm-1"];
    let types = ["disk_octets", "disk_ops", "disk_time", "disk_merged"];
    let mut first = true;
    let mut counter = 0i64;
    for disk in disks {
        b.string(PLUGIN_INSTANCE, disk);
        for type_name in types {
            if !first {
                b.numeric(HIGH_DEF_TIME, hr(REFERENCE_TIME) + 1000);
            }
            first = false;
            counter += 1;
            b.string(TYPE, type_name)
                .values(&[Value::Derive(counter * 512), Value::Derive(counter * 256)]);
        }
    }

    b.string(PLUGIN, "cpu")
        .string(PLUGIN_INSTANCE, "0")
        .string(TYPE, "cpu");
    let states = ["user", "nice", "system", "idle", "wait", "interrupt"];
    for (i, state) in states.iter().enumerate() {
        b.numeric(HIGH_DEF_TIME, hr(REFERENCE_TIME + 1))
            .string(TYPE_INSTANCE, state)
            .values(&[Value::Derive(1000 * (i as i64 + 1))]);
    }

    b.finish()
}
