//! OxiBits CLI - bit layout inspection and packing
//!
//! Builds bit views of byte strings, packs integer fields at arbitrary bit
//! offsets, and converts between integers and hex text.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{PackOptions, cmd_collect, cmd_hex_decode, cmd_hex_encode, cmd_pack, cmd_render};
use utils::{FieldSpec, init_logging, parse_field};

#[derive(Parser)]
#[command(name = "oxibits")]
#[command(
    author,
    version,
    about = "OxiBits - inspect and pack bit-level layouts"
)]
#[command(long_about = "
OxiBits views byte strings as LSB-first bit sequences and packs integer
fields into them. Bytes are given as hex, two digits per byte.

Examples:
  oxibits render 0D
  oxibits render \"34 12\" --bits 13
  oxibits pack --bits 16 0=5 8=0x2A
  oxibits pack --bits 8 --fixed 4 0=0xF 0=1
  oxibits collect \"78 56 34 12\" --count 4
  oxibits hex encode 48879
  oxibits hex decode BEEF
")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bit view of a byte string
    #[command(alias = "r")]
    Render {
        /// Bytes as hex digits (e.g. "0D FF" or 0x0dff)
        bytes: String,

        /// Bit capacity (defaults to 8 bits per byte given)
        #[arg(short, long)]
        bits: Option<usize>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Pack integer fields into a zeroed bit sequence
    #[command(alias = "p")]
    Pack {
        /// Bit capacity of the sequence
        #[arg(short, long)]
        bits: usize,

        /// Fields as START=VALUE (VALUE decimal or 0x hex), applied in order
        #[arg(value_parser = parse_field)]
        fields: Vec<FieldSpec>,

        /// Clear WIDTH bits at each start before writing
        #[arg(short, long, value_name = "WIDTH")]
        fixed: Option<usize>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Assemble leading bytes into a little-endian integer
    #[command(alias = "c")]
    Collect {
        /// Bytes as hex digits
        bytes: String,

        /// Number of bytes to assemble
        #[arg(short = 'n', long, default_value = "8")]
        count: usize,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Convert between integers and uppercase hex text
    Hex {
        #[command(subcommand)]
        action: HexAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum HexAction {
    /// Integer (decimal or 0x hex) to minimal uppercase hex
    Encode {
        /// Value to encode
        value: String,
    },

    /// Uppercase hex digits to decimal
    Decode {
        /// Hex digits to decode
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render { bytes, bits, json } => cmd_render(&bytes, bits, json),
        Commands::Pack {
            bits,
            fields,
            fixed,
            json,
        } => cmd_pack(&PackOptions {
            bits,
            fields: &fields,
            fixed,
            json,
        }),
        Commands::Collect { bytes, count, json } => cmd_collect(&bytes, count, json),
        Commands::Hex { action } => match action {
            HexAction::Encode { value } => cmd_hex_encode(&value),
            HexAction::Decode { text } => cmd_hex_decode(&text),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxibits", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
