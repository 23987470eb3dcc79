//! Register Map CLI.
//!
//! Loads a register block description from TOML, allocates the register map
//! and reports the resulting layout.
//!
//! # Usage
//!
//! ```text
//! mmio-regmap --config configs/default.toml [--header regs.h] [--json]
//! ```

use clap::Parser;
use std::{fs, process};
use tracing::error;
use tracing_subscriber::EnvFilter;

use mmio_regmap::common::Result;
use mmio_regmap::config::Config;
use mmio_regmap::header::{render_header, render_json};
use mmio_regmap::soc::Peripheral;

/// Command-line arguments for the register map tool.
#[derive(Parser, Debug)]
#[command(author, version, about = "MMIO register map allocator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Write a C header with one offset constant per register.
    #[arg(long)]
    header: Option<String>,

    /// Include guard for the generated header.
    #[arg(long, default_value = "REGMAP_H")]
    guard: String,

    /// Print the decode spec and layout as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(&args.config)?;
    let peripheral = Peripheral::new(&config)?;
    let map = peripheral.bus.map();

    if args.json {
        println!("{}", render_json(map)?);
    } else {
        println!("Register Map: {}", config.bus.name);
        println!("--------------------");
        print!("{}", map);
        println!("--------------------");
    }

    if let Some(path) = &args.header {
        fs::write(path, render_header(map, &args.guard))?;
        println!("[*] Header written to {}", path);
    }

    Ok(())
}

/// Main entry point for the register map tool.
///
/// 1. **Logging**: installs a `tracing` subscriber honouring `RUST_LOG`.
/// 2. **Configuration**: parses arguments and loads the TOML description.
/// 3. **Allocation**: builds the peripheral, which validates bus geometry
///    and allocates every register.
/// 4. **Output**: prints the layout and optionally writes the header.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{e}");
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    }
}
