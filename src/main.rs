use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use twvarint::{VarintReader, decode_varint32, decode_varint64, to_varint32, to_varint64};

#[derive(Parser)]
#[command(name = "twvarint")]
#[command(about = "Encode and decode Teeworlds protocol varints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the hex encoding of each value.
    Encode {
        #[arg(long, value_enum, default_value = "32")]
        width: IntWidth,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode every varint in a hex string.
    Decode {
        #[arg(long, value_enum, default_value = "32")]
        width: IntWidth,
        /// Use the non-failing buffer decoder instead of the strict one.
        #[arg(long)]
        lenient: bool,
        hex: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IntWidth {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();
    let outcome = match cli.command {
        Command::Encode { width, values } => encode(&mut out, width, &values),
        Command::Decode {
            width,
            lenient,
            hex,
        } => decode(&mut out, width, lenient, &hex),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn encode<W: Write>(out: &mut W, width: IntWidth, values: &[i64]) -> Result<()> {
    for &value in values {
        let bytes = match width {
            IntWidth::W32 => {
                let narrow = i32::try_from(value)
                    .with_context(|| format!("{value} does not fit in i32"))?;
                to_varint32(narrow)
            }
            IntWidth::W64 => to_varint64(value),
        };
        writeln!(out, "{value}\t{}", hex::encode(&bytes))?;
    }
    Ok(())
}

fn decode<W: Write>(out: &mut W, width: IntWidth, lenient: bool, text: &str) -> Result<()> {
    let bytes = hex::decode(text.trim()).context("input is not valid hex")?;
    if lenient {
        let mut offset = 0;
        while offset < bytes.len() {
            let (value, read) = match width {
                IntWidth::W32 => {
                    let (value, read) = decode_varint32(&bytes[offset..]);
                    (i64::from(value), read)
                }
                IntWidth::W64 => decode_varint64(&bytes[offset..]),
            };
            if read == 0 {
                eprintln!("{} trailing bytes do not form a varint", bytes.len() - offset);
                break;
            }
            debug!(offset, read, value, "decoded varint");
            writeln!(out, "{value}\t({read} bytes)")?;
            offset += read;
        }
        return Ok(());
    }

    let mut reader = VarintReader::new(bytes.as_slice());
    while reader.position() < bytes.len() as u64 {
        let start = reader.position();
        let value = match width {
            IntWidth::W32 => reader.read_i32().map(i64::from),
            IntWidth::W64 => reader.read_i64(),
        }
        .with_context(|| format!("bad varint at byte offset {start}"))?;
        let read = reader.position() - start;
        debug!(offset = start, read, value, "decoded varint");
        writeln!(out, "{value}\t({read} bytes)")?;
    }
    Ok(())
}
