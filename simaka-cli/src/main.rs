//! simaka CLI tool
//!
//! Decodes EAP-SIM, EAP-AKA and EAP-AKA' type data or whole EAP packets
//! given as hex, and builds Client-Error responses.

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use simaka_common::{format_hex_dump, init_logging, parse_hex, LogLevel, ToolConfig};
use simaka_eap::{ClientErrorCode, EapMessage, EapMethod, TypeData};

/// Exit code when the input decoded to a client error
const EXIT_CLIENT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "simaka")]
#[command(author, version, about = "EAP-SIM / EAP-AKA / EAP-AKA' decoder", long_about = None)]
pub struct Args {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(short = 'l', long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode bare type data (subtype, reserved, attributes)
    Decode {
        /// EAP method, defaults to the configured method
        #[arg(short, long, value_name = "METHOD")]
        method: Option<EapMethod>,
        /// Type data as hex
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Decode a whole EAP packet
    DecodePacket {
        /// Packet as hex
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Print a Client-Error response packet as hex
    ClientError {
        /// EAP method, defaults to the configured method
        #[arg(short, long, value_name = "METHOD")]
        method: Option<EapMethod>,
        /// EAP identifier
        #[arg(short, long, default_value_t = 0)]
        id: u8,
        /// Client error code (0-3)
        #[arg(long, default_value_t = 0)]
        code: u16,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(args.log_level.unwrap_or(config.log_level));
    debug!(?config, "Configuration loaded");

    match args.command {
        Command::Decode { method, hex } => {
            let method = resolve_method(method, &config)?;
            let bytes = read_hex(&hex, &config)?;
            match TypeData::decode(method, &bytes) {
                Ok(type_data) => {
                    println!("{}", report::render_type_data(&type_data));
                    Ok(ExitCode::SUCCESS)
                }
                Err(code) => {
                    println!("{}", report::render_client_error(code));
                    Ok(ExitCode::from(EXIT_CLIENT_ERROR))
                }
            }
        }
        Command::DecodePacket { hex } => {
            let bytes = read_hex(&hex, &config)?;
            let message =
                EapMessage::decode(&mut bytes.as_slice()).context("Failed to decode EAP packet")?;
            println!("{}", report::render_packet(&message));
            if message.method().is_some() && message.sim_aka_type_data().is_err() {
                return Ok(ExitCode::from(EXIT_CLIENT_ERROR));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::ClientError { method, id, code } => {
            let method = resolve_method(method, &config)?;
            let code = ClientErrorCode::try_from(code)
                .map_err(|c| anyhow!("Unknown client error code {c}, expected 0 to 3"))?;
            let message = EapMessage::client_error_response(method, id, code);
            let bytes = message
                .encode_to_vec()
                .context("Failed to encode Client-Error response")?;
            println!("{}", simaka_common::format_hex_compact(&bytes, 0));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ToolConfig> {
    match path {
        Some(path) => ToolConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ToolConfig::default()),
    }
}

fn resolve_method(method: Option<EapMethod>, config: &ToolConfig) -> Result<EapMethod> {
    match method {
        Some(method) => Ok(method),
        None => config
            .default_method
            .parse::<EapMethod>()
            .map_err(|e| anyhow!(e))
            .context("Invalid default_method in configuration"),
    }
}

fn read_hex(input: &str, config: &ToolConfig) -> Result<Vec<u8>> {
    let bytes = parse_hex(input).context("Input is not valid hex")?;
    if config.hex_dump {
        println!("{}", format_hex_dump(&bytes));
    }
    Ok(bytes)
}
