//! Assembly of decoded parts into complete samples.
//!
//! The sender only emits identifiers that changed since the previous value
//! list, so each values part inherits the most recent host, time, interval,
//! plugin and type seen before it in the packet.

use std::fmt;

use crate::error::MetricError;
use crate::part::Part;
use crate::part_type::{
    HIGH_DEF_INTERVAL, HIGH_DEF_TIME, HOST, INTERVAL, MESSAGE, PLUGIN, PLUGIN_INSTANCE, SEVERITY,
    TIME, TYPE, TYPE_INSTANCE,
};
use crate::time::HighResTime;
use crate::value::Value;

/// One complete metric sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueList {
    pub host: String,
    pub time: HighResTime,
    pub interval: HighResTime,
    pub plugin: String,
    pub plugin_instance: String,
    pub type_name: String,
    pub type_instance: String,
    pub values: Vec<Value>,
}

impl ValueList {
    /// The `host/plugin-instance/type-instance` identifier collectd uses.
    pub fn identifier(&self) -> String {
        let mut id = format!("{}/{}", self.host, self.plugin);
        if !self.plugin_instance.is_empty() {
            id.push('-');
            id.push_str(&self.plugin_instance);
        }
        id.push('/');
        id.push_str(&self.type_name);
        if !self.type_instance.is_empty() {
            id.push('-');
            id.push_str(&self.type_instance);
        }
        id
    }
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Failure,
    Warning,
    Okay,
    Unknown(u64),
}

impl From<u64> for Severity {
    fn from(code: u64) -> Self {
        match code {
            1 => Self::Failure,
            2 => Self::Warning,
            4 => Self::Okay,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Failure => f.write_str("FAILURE"),
            Severity::Warning => f.write_str("WARNING"),
            Severity::Okay => f.write_str("OKAY"),
            Severity::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// A notification carried by a `MESSAGE` part.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub host: String,
    pub time: HighResTime,
    pub severity: Severity,
    pub plugin: String,
    pub plugin_instance: String,
    pub type_name: String,
    pub type_instance: String,
    pub message: String,
}

/// A sample or notification produced from a packet.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Values(ValueList),
    Notification(Notification),
}

#[derive(Debug, Default)]
struct Identity {
    host: Option<String>,
    time: HighResTime,
    interval: HighResTime,
    plugin: Option<String>,
    plugin_instance: String,
    type_name: Option<String>,
    type_instance: String,
    severity: Option<Severity>,
}

impl Identity {
    fn require<'a>(
        value: &'a Option<String>,
        field: &'static str,
        index: usize,
    ) -> Result<&'a str, MetricError> {
        value
            .as_deref()
            .ok_or(MetricError::MissingField { field, index })
    }
}

/// Fold a decoded part sequence into value lists and notifications.
///
/// Every identifier, instances included, holds until a part of the same
/// type replaces it. A values part requires host, plugin and type; a
/// message part requires host and severity.
pub fn records(parts: &[Part]) -> Result<Vec<Record>, MetricError> {
    let mut state = Identity::default();
    let mut out = Vec::new();

    for (index, part) in parts.iter().enumerate() {
        match part {
            Part::String(part) => {
                let content = part.content.clone();
                match part.header.part_type {
                    HOST => state.host = Some(content),
                    PLUGIN => state.plugin = Some(content),
                    PLUGIN_INSTANCE => state.plugin_instance = content,
                    TYPE => state.type_name = Some(content),
                    TYPE_INSTANCE => state.type_instance = content,
                    MESSAGE => {
                        let severity = state.severity.ok_or(MetricError::MissingField {
                            field: "severity",
                            index,
                        })?;
                        out.push(Record::Notification(Notification {
                            host: Identity::require(&state.host, "host", index)?.to_owned(),
                            time: state.time,
                            severity,
                            plugin: state.plugin.clone().unwrap_or_default(),
                            plugin_instance: state.plugin_instance.clone(),
                            type_name: state.type_name.clone().unwrap_or_default(),
                            type_instance: state.type_instance.clone(),
                            message: content,
                        }));
                    }
                    _ => {}
                }
            }
            Part::Numeric(part) => match part.header.part_type {
                TIME => state.time = HighResTime::from_secs(part.content),
                HIGH_DEF_TIME => state.time = HighResTime::from_raw(part.content),
                INTERVAL => state.interval = HighResTime::from_secs(part.content),
                HIGH_DEF_INTERVAL => state.interval = HighResTime::from_raw(part.content),
                SEVERITY => state.severity = Some(Severity::from(part.content)),
                _ => {}
            },
            Part::Values(part) => {
                out.push(Record::Values(ValueList {
                    host: Identity::require(&state.host, "host", index)?.to_owned(),
                    time: state.time,
                    interval: state.interval,
                    plugin: Identity::require(&state.plugin, "plugin", index)?.to_owned(),
                    plugin_instance: state.plugin_instance.clone(),
                    type_name: Identity::require(&state.type_name, "type", index)?.to_owned(),
                    type_instance: state.type_instance.clone(),
                    values: part.values.clone(),
                }));
            }
        }
    }

    Ok(out)
}

/// Value lists only, skipping notifications.
pub fn value_lists(parts: &[Part]) -> Result<Vec<ValueList>, MetricError> {
    Ok(records(parts)?
        .into_iter()
        .filter_map(|record| match record {
            Record::Values(list) => Some(list),
            Record::Notification(_) => None,
        })
        .collect())
}
