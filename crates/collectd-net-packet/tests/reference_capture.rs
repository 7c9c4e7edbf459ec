mod support;

use collectd_net_packet::{
    decode_packet, numeric_parts, string_parts, value_lists, value_parts, HighResTime, Part,
    HIGH_DEF_INTERVAL, HIGH_DEF_TIME, HOST, PLUGIN, PLUGIN_INSTANCE, TYPE, TYPE_INSTANCE,
};

use support::{reference_capture, REFERENCE_TIME};

fn parts() -> Vec<Part> {
    decode_packet(&reference_capture()).expect("reference capture should decode")
}

fn strings(parts: &[Part], part_type: u16) -> Vec<String> {
    string_parts(parts, part_type)
        .map(|p| p.content.clone())
        .collect()
}

#[test]
fn parses_the_hostname() {
    assert_eq!(strings(&parts(), HOST), vec!["localhost"]);
}

#[test]
fn parses_the_high_definition_time() {
    let parts = parts();
    let times: Vec<_> = numeric_parts(&parts, HIGH_DEF_TIME).collect();

    assert_eq!(times.len(), 26);
    assert_eq!(
        HighResTime::from_raw(times[0].content).seconds(),
        REFERENCE_TIME
    );
}

#[test]
fn parses_the_plugin() {
    assert_eq!(strings(&parts(), PLUGIN), vec!["disk", "cpu"]);
}

#[test]
fn parses_the_plugin_instance() {
    assert_eq!(
        strings(&parts(), PLUGIN_INSTANCE),
        vec!["sda1", "sda2", "sda5", "dm-0", "dm-1", "0"]
    );
}

#[test]
fn parses_the_type() {
    let types = strings(&parts(), TYPE);

    assert_eq!(types.len(), 21);
    for chunk in types[..20].chunks(4) {
        assert_eq!(chunk, ["disk_octets", "disk_ops", "disk_time", "disk_merged"]);
    }
    assert_eq!(types[20], "cpu");
}

#[test]
fn parses_the_type_instance() {
    assert_eq!(
        strings(&parts(), TYPE_INSTANCE),
        vec!["user", "nice", "system", "idle", "wait", "interrupt"]
    );
}

#[test]
fn parses_the_high_definition_interval() {
    let parts = parts();
    let intervals: Vec<_> = numeric_parts(&parts, HIGH_DEF_INTERVAL).collect();

    assert_eq!(intervals.len(), 1);
    assert_eq!(HighResTime::from_raw(intervals[0].content).seconds(), 2);
}

#[test]
fn parses_the_values_part() {
    let parts = parts();
    assert_eq!(value_parts(&parts).count(), 26);
}

#[test]
fn assembles_value_lists() {
    let lists = value_lists(&parts()).unwrap();

    assert_eq!(lists.len(), 26);
    assert_eq!(lists[0].identifier(), "localhost/disk-sda1/disk_octets");
    assert_eq!(lists[19].identifier(), "localhost/disk-dm-1/disk_merged");
    assert_eq!(lists[20].identifier(), "localhost/cpu-0/cpu-user");
    assert_eq!(lists[25].identifier(), "localhost/cpu-0/cpu-interrupt");
    assert!(lists.iter().all(|l| l.interval.seconds() == 2));
    assert!(lists[..20].iter().all(|l| l.values.len() == 2));
}
