use collectd_net_packet::{decode_packet, records, DecoderConfig, Record};

use crate::cmd::{read_input, source_label, MetricsArgs};
use crate::exit::{metric_error, packet_error, CliResult, SUCCESS};
use crate::output::{print_records, OutputFormat};

pub fn run(args: MetricsArgs, format: OutputFormat, config: &DecoderConfig) -> CliResult<i32> {
    let source = source_label(&args.input);
    let bytes = read_input(&args.input, config)?;

    let parts = decode_packet(&bytes).map_err(|err| packet_error("decode failed", err))?;
    let mut assembled = records(&parts).map_err(|err| metric_error("assemble failed", err))?;

    if let Some(plugin) = &args.plugin {
        assembled.retain(|record| match record {
            Record::Values(list) => &list.plugin == plugin,
            Record::Notification(n) => &n.plugin == plugin,
        });
        if assembled.is_empty() {
            tracing::warn!(source = %source, plugin = %plugin, "no records for plugin");
        }
    }

    tracing::info!(source = %source, records = assembled.len(), "assembled records");
    print_records(&assembled, format);
    Ok(SUCCESS)
}
