mod decode;
mod describe;

use std::io::stderr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode APRS packets, one per line.
    ///
    /// Each line is decoded into a position report. Fields that cannot be decoded are
    /// reported along with the reason instead of failing the whole packet.
    Decode {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: decode::Format,

        /// Anchor day/hour/minute timestamps to this time (RFC3339) rather than now.
        ///
        /// Month and year of decoded timestamps come from this time.
        #[arg(short, long, value_parser = parse_timestamp, value_name = "timestamp")]
        reference: Option<DateTime<Utc>>,

        /// UTC offset of local timestamps, e.g. -05:00. Defaults to the system time zone.
        #[arg(
            short = 'z',
            long,
            value_parser = parse_offset,
            value_name = "offset",
            allow_hyphen_values = true
        )]
        utc_offset: Option<FixedOffset>,

        /// Input file with one packet per line. Reads stdin if not provided or `-`.
        input: Option<PathBuf>,
    },
    /// Describe symbolic packet error codes.
    Describe {
        /// Error code, e.g. loc_short
        code: Option<String>,

        /// List all known codes
        #[arg(long, action)]
        all: bool,
    },
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| "Could not parse into an RFC3339 timestamp".to_string())
}

fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    FixedOffset::from_str(s).map_err(|_| "Could not parse into a UTC offset like +02:00".to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("APRS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Decode {
            format,
            reference,
            utc_offset,
            input,
        } => decode::decode(input.as_deref(), format, *reference, *utc_offset),
        Commands::Describe { code, all } => describe::describe(code.as_deref(), *all),
    }
}
