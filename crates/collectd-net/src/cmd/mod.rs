use clap::{Args, Subcommand};
use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use collectd_net_packet::{read_packet_bytes, DecoderConfig};

use crate::exit::{io_error, packet_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod metrics;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a packet capture and print every part.
    Decode(DecodeArgs),
    /// Decode a packet capture and print assembled value lists.
    Metrics(MetricsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: &DecoderConfig) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format, config),
        Command::Metrics(args) => metrics::run(args, format, config),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Capture file holding one raw packet (`-` for stdin).
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Capture file holding one raw packet (`-` for stdin).
    pub input: PathBuf,
    /// Only print value lists from this plugin.
    #[arg(long)]
    pub plugin: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Read the raw bytes of one packet from a file or stdin.
pub fn read_input(input: &Path, config: &DecoderConfig) -> CliResult<Vec<u8>> {
    if input == Path::new("-") {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(CliError::new(
                USAGE,
                "refusing to read a binary packet from a terminal",
            ));
        }
        return read_packet_bytes(stdin.lock(), config)
            .map_err(|err| packet_error("read stdin failed", err));
    }

    let file = File::open(input)
        .map_err(|err| io_error(&format!("open {} failed", input.display()), err))?;
    read_packet_bytes(file, config)
        .map_err(|err| packet_error(&format!("read {} failed", input.display()), err))
}

/// Label used for the input in output and logs.
pub fn source_label(input: &Path) -> String {
    if input == Path::new("-") {
        "stdin".to_string()
    } else {
        input.display().to_string()
    }
}
