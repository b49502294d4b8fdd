//! Utility functions for the CLI.

use oxibits_core::hex::{parse_hex_string, to_hex_string};
use oxibits_core::{BitSequence, OxiBitsError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// A bit field to pack: start bit index and the value written there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub start: usize,
    pub value: u64,
}

/// JSON view of a bit sequence.
#[derive(Debug, Serialize)]
pub struct SequenceJson {
    pub num_bits: usize,
    pub bytes_allocated: usize,
    pub bytes: String,
    pub bits: String,
}

impl SequenceJson {
    pub fn from_sequence(seq: &BitSequence) -> Self {
        Self {
            num_bits: seq.num_bits(),
            bytes_allocated: seq.bytes_allocated(),
            bytes: format_bytes(seq.as_bytes()),
            bits: seq.render(),
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse a byte string such as `"0D FF"`, `"0x0dff"` or `"0d_ff"`.
///
/// Whitespace and `_` separators are dropped and the remaining digits must
/// pair up into whole bytes. Invalid digits are reported at their character
/// offset in `input`.
pub fn parse_bytes(input: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let chars: Vec<char> = input.chars().collect();

    let mut start = chars.iter().take_while(|c| c.is_whitespace()).count();
    if chars.get(start) == Some(&'0') && matches!(chars.get(start + 1), Some('x' | 'X')) {
        start += 2;
    }

    let digits: Vec<(usize, char)> = chars
        .iter()
        .copied()
        .enumerate()
        .skip(start)
        .filter(|&(_, c)| !c.is_whitespace() && c != '_')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in {:?}", input).into());
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let mut byte = 0u8;
        for &(position, c) in pair {
            let nibble = parse_hex_string(&c.to_ascii_uppercase().to_string())
                .map_err(|_| OxiBitsError::invalid_hex_digit(c, position))?;
            byte = (byte << 4) | nibble as u8;
        }
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Parse an integer written in decimal or with a `0x` prefix in hex.
pub fn parse_value(input: &str) -> Result<u64, Box<dyn std::error::Error>> {
    let input = input.trim();
    match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => Ok(parse_hex_string(&hex.to_ascii_uppercase())?),
        None => Ok(input.parse::<u64>()?),
    }
}

/// Parse a `START=VALUE` field argument.
pub fn parse_field(input: &str) -> Result<FieldSpec, String> {
    let (start, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected START=VALUE, got {:?}", input))?;

    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid start index {:?}: {}", start, e))?;
    let value = parse_value(value).map_err(|e| format!("invalid value {:?}: {}", value, e))?;

    Ok(FieldSpec { start, value })
}

/// Format bytes as space-separated two-digit uppercase hex.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| format!("{:0>2}", to_hex_string(u64::from(b))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group a rendered bit string into bytes, aligned on storage boundaries.
///
/// The rendering runs from the highest bit down, so a partial top byte
/// comes first.
pub fn group_bits(rendered: &str) -> String {
    let head = rendered.len() % 8;
    let mut groups = Vec::with_capacity(rendered.len() / 8 + 1);
    if head > 0 {
        groups.push(&rendered[..head]);
    }
    let mut pos = head;
    while pos < rendered.len() {
        groups.push(&rendered[pos..pos + 8]);
        pos += 8;
    }
    groups.join(" ")
}
