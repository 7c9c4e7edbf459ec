use std::io::IsTerminal;

use clap::ValueEnum;
use collectd_net_packet::{
    HighResTime, Part, Record, Value, HIGH_DEF_INTERVAL, HIGH_DEF_TIME, INTERVAL, TIME,
};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ValueOutput {
    #[serde(rename = "type")]
    value_type: &'static str,
    value: serde_json::Value,
}

impl From<&Value> for ValueOutput {
    fn from(value: &Value) -> Self {
        let json = match *value {
            Value::Counter(v) | Value::Absolute(v) => serde_json::Value::from(v),
            Value::Gauge(v) => serde_json::Value::from(v),
            Value::Derive(v) => serde_json::Value::from(v),
        };
        Self {
            value_type: value.value_type().as_str(),
            value: json,
        }
    }
}

#[derive(Serialize)]
struct PartOutput<'a> {
    type_id: u16,
    type_name: &'static str,
    length: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    string: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    numeric: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<ValueOutput>>,
}

impl<'a> From<&'a Part> for PartOutput<'a> {
    fn from(part: &'a Part) -> Self {
        let header = part.header();
        let mut out = PartOutput {
            type_id: header.part_type,
            type_name: part.type_name(),
            length: header.length,
            string: None,
            numeric: None,
            seconds: None,
            values: None,
        };
        match part {
            Part::String(p) => out.string = Some(p.content.as_str()),
            Part::Numeric(p) => {
                out.numeric = Some(p.content);
                out.seconds = time_seconds(header.part_type, p.content);
            }
            Part::Values(p) => out.values = Some(p.values.iter().map(ValueOutput::from).collect()),
        }
        out
    }
}

#[derive(Serialize)]
struct DecodeOutput<'a> {
    source: &'a str,
    size: usize,
    parts: Vec<PartOutput<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RecordOutput<'a> {
    Values {
        identifier: String,
        host: &'a str,
        plugin: &'a str,
        plugin_instance: &'a str,
        #[serde(rename = "type")]
        type_name: &'a str,
        type_instance: &'a str,
        time: f64,
        interval: f64,
        values: Vec<ValueOutput>,
    },
    Notification {
        host: &'a str,
        plugin: &'a str,
        plugin_instance: &'a str,
        #[serde(rename = "type")]
        type_name: &'a str,
        type_instance: &'a str,
        time: f64,
        severity: String,
        message: &'a str,
    },
}

impl<'a> From<&'a Record> for RecordOutput<'a> {
    fn from(record: &'a Record) -> Self {
        match record {
            Record::Values(list) => RecordOutput::Values {
                identifier: list.identifier(),
                host: &list.host,
                plugin: &list.plugin,
                plugin_instance: &list.plugin_instance,
                type_name: &list.type_name,
                type_instance: &list.type_instance,
                time: list.time.as_secs_f64(),
                interval: list.interval.as_secs_f64(),
                values: list.values.iter().map(ValueOutput::from).collect(),
            },
            Record::Notification(n) => RecordOutput::Notification {
                host: &n.host,
                plugin: &n.plugin,
                plugin_instance: &n.plugin_instance,
                type_name: &n.type_name,
                type_instance: &n.type_instance,
                time: n.time.as_secs_f64(),
                severity: n.severity.to_string(),
                message: &n.message,
            },
        }
    }
}

/// Seconds represented by a time or interval part.
fn time_seconds(part_type: u16, raw: u64) -> Option<f64> {
    match part_type {
        HIGH_DEF_TIME | HIGH_DEF_INTERVAL => Some(HighResTime::from_raw(raw).as_secs_f64()),
        TIME | INTERVAL => Some(raw as f64),
        _ => None,
    }
}

fn part_content(part: &Part) -> String {
    match part {
        Part::String(p) => p.content.clone(),
        Part::Numeric(p) => match time_seconds(p.header.part_type, p.content) {
            Some(secs) => format!("{} ({secs:.3}s)", p.content),
            None => p.content.to_string(),
        },
        Part::Values(p) => format_values(&p.values),
    }
}

fn format_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| format!("{}:{v}", v.value_type()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_parts(source: &str, size: usize, parts: &[Part], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = DecodeOutput {
                source,
                size,
                parts: parts.iter().map(PartOutput::from).collect(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "TYPE", "NAME", "LENGTH", "CONTENT"]);
            for (i, part) in parts.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    format!("0x{:04x}", part.part_type()),
                    part.type_name().to_string(),
                    part.header().length.to_string(),
                    part_content(part),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for part in parts {
                println!(
                    "{:<18} len={:<4} {}",
                    part.type_name(),
                    part.header().length,
                    part_content(part)
                );
            }
        }
    }
}

pub fn print_records(records: &[Record], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<RecordOutput<'_>> = records.iter().map(RecordOutput::from).collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["IDENTIFIER", "TIME", "INTERVAL", "VALUES"]);
            for record in records {
                match record {
                    Record::Values(list) => table.add_row(vec![
                        list.identifier(),
                        list.time.to_string(),
                        list.interval.to_string(),
                        format_values(&list.values),
                    ]),
                    Record::Notification(n) => table.add_row(vec![
                        format!("{}/{}", n.host, n.plugin),
                        n.time.to_string(),
                        String::new(),
                        format!("{}: {}", n.severity, n.message),
                    ]),
                };
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for record in records {
                match record {
                    Record::Values(list) => println!(
                        "{} {} {}",
                        list.time,
                        list.identifier(),
                        format_values(&list.values)
                    ),
                    Record::Notification(n) => println!(
                        "{} {}/{} {}: {}",
                        n.time, n.host, n.plugin, n.severity, n.message
                    ),
                }
            }
        }
    }
}
