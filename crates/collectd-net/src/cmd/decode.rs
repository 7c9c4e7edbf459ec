use collectd_net_packet::{decode_packet, DecoderConfig};

use crate::cmd::{read_input, source_label, DecodeArgs};
use crate::exit::{packet_error, CliResult, SUCCESS};
use crate::output::{print_parts, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat, config: &DecoderConfig) -> CliResult<i32> {
    let source = source_label(&args.input);
    let bytes = read_input(&args.input, config)?;

    let parts = decode_packet(&bytes).map_err(|err| packet_error("decode failed", err))?;
    tracing::info!(source = %source, size = bytes.len(), parts = parts.len(), "decoded packet");

    print_parts(&source, bytes.len(), &parts, format);
    Ok(SUCCESS)
}
