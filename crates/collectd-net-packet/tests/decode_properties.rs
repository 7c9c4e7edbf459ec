mod support;

use collectd_net_packet::{
    decode_packet, HighResTime, NumericPart, Part, PacketError, PartHeader, StringPart, Value,
    ValuePart, HIGH_DEF_TIME, HOST, INTERVAL, MESSAGE, PLUGIN, SEVERITY, TYPE_INSTANCE, VALUES,
};

use support::{reference_capture, PacketBuilder};

#[test]
fn decode_reproduces_encoded_parts() {
    let original = vec![
        Part::String(StringPart {
            header: PartHeader::new(HOST, 4 + 12),
            content: "db-primary1".to_string(),
        }),
        Part::Numeric(NumericPart {
            header: PartHeader::new(HIGH_DEF_TIME, 12),
            content: HighResTime::from_secs(1_700_000_000).raw() | 12345,
        }),
        Part::Numeric(NumericPart {
            header: PartHeader::new(INTERVAL, 12),
            content: 10,
        }),
        Part::String(StringPart {
            header: PartHeader::new(TYPE_INSTANCE, 4 + 1),
            content: String::new(),
        }),
        Part::Values(ValuePart {
            header: PartHeader::new(VALUES, 4 + 2 + 4 * 9),
            values: vec![
                Value::Counter(u64::MAX),
                Value::Gauge(-0.000125),
                Value::Derive(i64::MIN),
                Value::Absolute(0),
            ],
        }),
        Part::Numeric(NumericPart {
            header: PartHeader::new(SEVERITY, 12),
            content: 4,
        }),
        Part::String(StringPart {
            header: PartHeader::new(MESSAGE, 4 + 8),
            content: "all ok!".to_string(),
        }),
    ];

    let mut builder = PacketBuilder::new();
    for part in &original {
        builder.part(part);
    }

    assert_eq!(decode_packet(&builder.finish()).unwrap(), original);
}

#[test]
fn truncation_is_never_silent() {
    let packet = reference_capture();
    let first_len = u16::from_be_bytes([packet[2], packet[3]]) as usize;

    for len in 1..first_len {
        let err = decode_packet(&packet[..len]).unwrap_err();
        assert!(
            matches!(
                err,
                PacketError::TruncatedHeader { .. } | PacketError::TruncatedPayload { .. }
            ),
            "unexpected error at {len}: {err}"
        );
    }
}

#[test]
fn truncated_reference_capture_fails_at_every_cut() {
    let packet = reference_capture();
    let boundaries = part_boundaries(&packet);

    for len in 1..packet.len() {
        let result = decode_packet(&packet[..len]);
        if boundaries.contains(&len) {
            assert!(result.is_ok(), "cut on a part boundary at {len} should decode");
        } else {
            assert!(result.is_err(), "cut inside a part at {len} should fail");
        }
    }
}

fn part_boundaries(packet: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut offset = 0;
    while offset < packet.len() {
        offset += u16::from_be_bytes([packet[offset + 2], packet[offset + 3]]) as usize;
        offsets.push(offset);
    }
    offsets
}

#[test]
fn values_length_mismatch_for_every_count() {
    for count in 0..8usize {
        let good = 4 + 2 + count * 9;
        for declared in [good - 1, good + 1, good + 9] {
            let mut payload = vec![0u8; declared - 4];
            if payload.len() >= 2 {
                payload[1] = count as u8;
            }

            let mut builder = PacketBuilder::new();
            builder.raw(VALUES, declared as u16, &payload);

            let err = decode_packet(&builder.finish()).unwrap_err();
            match err {
                PacketError::LengthMismatch {
                    declared: d,
                    expected,
                    ..
                } => {
                    assert_eq!(d, declared);
                    assert_eq!(expected, good);
                }
                other => panic!("count {count}, declared {declared}: {other}"),
            }
        }
    }
}

#[test]
fn unknown_value_type_tag() {
    for tag in [4u8, 0x10, 0xff] {
        let mut payload = vec![0x00, 0x02, 0x01, tag];
        payload.extend_from_slice(&[0u8; 16]);

        let mut builder = PacketBuilder::new();
        builder.string(HOST, "h").raw(VALUES, 4 + 2 + 18, &payload);

        let err = decode_packet(&builder.finish()).unwrap_err();
        assert!(
            matches!(err, PacketError::UnknownValueType { offset: 13, tag: t } if t == tag),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn mixed_values_decode_each_sample_independently() {
    let samples = [
        Value::Gauge(f64::from_bits(0x0102_0304_0506_0708)),
        Value::Counter(0x0102_0304_0506_0708),
        Value::Derive(-2),
        Value::Gauge(3.25),
        Value::Absolute(1 << 40),
    ];

    let mut builder = PacketBuilder::new();
    builder.values(&samples);
    let packet = builder.finish();

    // The first gauge is stored least significant byte first, the counter
    // most significant byte first.
    assert_eq!(&packet[11..19], &[8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(&packet[19..27], &[1, 2, 3, 4, 5, 6, 7, 8]);

    let parts = decode_packet(&packet).unwrap();
    assert_eq!(parts[0].as_values().unwrap().values, samples);
}

#[test]
fn unknown_part_between_known_parts() {
    let mut builder = PacketBuilder::new();
    builder
        .string(HOST, "h")
        .raw(0x0abc, 4 + 3, b"\x01\x02\x03")
        .string(PLUGIN, "memory")
        .values(&[Value::Gauge(42.0)]);

    let parts = decode_packet(&builder.finish()).unwrap();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1].as_string().unwrap().content, "memory");
    assert_eq!(parts[2].as_values().unwrap().values, vec![Value::Gauge(42.0)]);
}

#[test]
fn empty_buffer_decodes_to_nothing() {
    assert_eq!(decode_packet(&[]).unwrap(), Vec::<Part>::new());
}

#[test]
fn errors_carry_offsets() {
    let mut builder = PacketBuilder::new();
    builder.string(HOST, "h").raw(PLUGIN, 4 + 3, b"abc");

    let err = decode_packet(&builder.finish()).unwrap_err();
    assert_eq!(err.offset(), Some(6));
    assert!(err.to_string().contains("offset 6"));
}
