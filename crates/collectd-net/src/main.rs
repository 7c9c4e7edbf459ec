mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use collectd_net_packet::{DecoderConfig, DEFAULT_MAX_PACKET_SIZE};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "collectd-net", version, about = "collectd network packet inspector")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    /// Largest packet accepted, in bytes.
    #[arg(
        long,
        value_name = "BYTES",
        env = "COLLECTD_NET_MAX_PACKET_SIZE",
        default_value_t = DEFAULT_MAX_PACKET_SIZE,
        global = true
    )]
    max_packet_size: usize,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = DecoderConfig {
        max_packet_size: cli.max_packet_size,
    };
    let result = cmd::run(cli.command, format, &config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
