//! Command-line interface for `gf-sbox`.

#![forbid(unsafe_code)]

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gf_sbox::{generate, generate_unchecked, validate_modulus, SboxPair};
use log::info;

use crate::render::{render_hex, render_table};

/// GF(2^8) S-box generator.
#[derive(Parser)]
#[command(
    name = "sboxgen",
    version,
    author,
    about = "AES-style S-box generator over GF(2^8)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Sixteen uppercase hex values per row.
    Table,
    /// One lowercase hex string per table.
    Hex,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print an S-box and its inverse.
    Show {
        /// Modulus polynomial as hex (9 bits, bit 8 set).
        #[arg(long, value_name = "HEX", default_value = "0x11d")]
        modulus: String,
        /// Additive constant as hex.
        #[arg(long, value_name = "HEX", default_value = "0x63")]
        constant: String,
        /// Skip modulus validation and print whatever the tables come out as.
        #[arg(long, default_value_t = false)]
        unchecked: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Generate an S-box pair and write it to a file.
    Gen {
        /// Modulus polynomial as hex (9 bits, bit 8 set).
        #[arg(long, value_name = "HEX", default_value = "0x11d")]
        modulus: String,
        /// Additive constant as hex.
        #[arg(long, value_name = "HEX", default_value = "0x63")]
        constant: String,
        /// Output path for the serialized pair.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Load a serialized pair, verify it and print it.
    Inspect {
        /// Path to the serialized pair.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Check whether a modulus defines GF(2^8).
    Check {
        /// Modulus polynomial as hex.
        #[arg(long, value_name = "HEX", default_value = "0x11d")]
        modulus: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Show {
            modulus,
            constant,
            unchecked,
            format,
        } => cmd_show(&modulus, &constant, unchecked, format),
        Commands::Gen {
            modulus,
            constant,
            out,
        } => cmd_gen(&modulus, &constant, &out),
        Commands::Inspect { input, format } => cmd_inspect(&input, format),
        Commands::Check { modulus } => cmd_check(&modulus),
    }
}

fn cmd_show(modulus: &str, constant: &str, unchecked: bool, format: Format) -> Result<()> {
    let modulus = parse_modulus(modulus)?;
    let constant = parse_constant(constant)?;
    let pair = if unchecked {
        generate_unchecked(modulus, constant)
    } else {
        generate(modulus, constant).context("generate s-box")?
    };
    print_pair(&pair, format);
    Ok(())
}

fn cmd_gen(modulus: &str, constant: &str, out: &PathBuf) -> Result<()> {
    let modulus = parse_modulus(modulus)?;
    let constant = parse_constant(constant)?;
    let pair = generate(modulus, constant).context("generate s-box")?;
    let bytes = pair.to_bytes().context("serialize s-box")?;
    fs::write(out, bytes).with_context(|| format!("write {}", out.display()))?;
    info!("wrote s-box for modulus {modulus:#05x} to {}", out.display());
    Ok(())
}

fn cmd_inspect(input: &PathBuf, format: Format) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let pair = SboxPair::from_bytes(&bytes).context("deserialize s-box")?;
    pair.verify()
        .with_context(|| format!("verify {}", input.display()))?;
    println!(
        "modulus {:#05x}, constant {:#04x}",
        pair.modulus(),
        pair.constant()
    );
    print_pair(&pair, format);
    Ok(())
}

fn cmd_check(modulus: &str) -> Result<()> {
    let modulus = parse_modulus(modulus)?;
    validate_modulus(modulus)?;
    println!("modulus {modulus:#05x} defines GF(2^8)");
    Ok(())
}

fn print_pair(pair: &SboxPair, format: Format) {
    let render = match format {
        Format::Table => render_table,
        Format::Hex => render_hex,
    };
    print!("{}", render(pair.forward(), "S-Box"));
    print!("{}", render(pair.inverse(), "Inverse S-Box"));
}

fn parse_modulus(text: &str) -> Result<u16> {
    let value = parse_hex(text).with_context(|| format!("parse modulus {text:?}"))?;
    u16::try_from(value).with_context(|| format!("modulus {text:?} does not fit in 16 bits"))
}

fn parse_constant(text: &str) -> Result<u8> {
    let value = parse_hex(text).with_context(|| format!("parse constant {text:?}"))?;
    u8::try_from(value).with_context(|| format!("constant {text:?} does not fit in a byte"))
}

fn parse_hex(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        bail!("expected hex digits");
    }
    Ok(u32::from_str_radix(digits, 16)?)
}
