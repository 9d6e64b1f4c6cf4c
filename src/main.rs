use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};

use islsb::{capacity, utils, Obfuscation, Pattern, Payload, Raster, StegConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Print debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hide a file inside an image
    #[command(name = "hide")]
    Hide {
        image: PathBuf,

        file: PathBuf,

        /// Where to write the cover image (PNG)
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        params: Params,
    },

    /// Recover a file hidden inside an image
    #[command(name = "unhide")]
    Unhide {
        image: PathBuf,

        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        params: Params,
    },

    /// Show how much an image can hold
    #[command(name = "capacity")]
    Capacity {
        image: PathBuf,

        #[arg(short, long, default_value_t = 1)]
        bits: u8,

        #[arg(short, long, default_value = "1")]
        method: Pattern,
    },
}

#[derive(clap::Args)]
struct Params {
    /// Least significant bits used per pixel byte (1-8)
    #[arg(short, long, default_value_t = 1)]
    bits: u8,

    /// "<n>" for every n-th byte, or "random,<seed>,<lo>,<hi>"
    #[arg(short, long, default_value = "1")]
    method: Pattern,

    /// "none", "caesar<n>" or "vigenere<key>"
    #[arg(short = 'e', long, default_value = "none")]
    obfuscation: Obfuscation,
}

impl Params {
    fn config(self) -> islsb::Result<StegConfig> {
        StegConfig::new(self.bits, self.method, self.obfuscation)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Hide {
            image,
            file,
            output,
            params,
        } => {
            hide(&image, &file, &output, params.config()?)?;
        }
        Command::Unhide {
            image,
            output,
            params,
        } => {
            unhide(&image, &output, params.config()?)?;
        }
        Command::Capacity {
            image,
            bits,
            method,
        } => {
            show_capacity(&image, StegConfig::new(bits, method, Obfuscation::None)?)?;
        }
    }

    println!("Ok");

    Ok(())
}

fn hide(image: &Path, file: &Path, output: &Path, config: StegConfig) -> Result<()> {
    let raster = Raster::load(image)?;
    let payload = Payload::read(file)?;

    info!(
        "Hiding {} ({}) in {}",
        payload.filename,
        utils::format_bytes(payload.content.len() as u64),
        image.display()
    );

    let cover = islsb::encode_file(&raster, &payload, &config)?;
    cover.save(output)?;

    info!("Cover image written to {}", output.display());

    Ok(())
}

fn unhide(image: &Path, output_dir: &Path, config: StegConfig) -> Result<()> {
    let raster = Raster::load(image)?;
    let payload = islsb::decode_file(&raster, &config)?;

    let out = payload.write_to(output_dir)?;

    info!(
        "Recovered {} ({})",
        out.display(),
        utils::format_bytes(payload.content.len() as u64)
    );

    Ok(())
}

fn show_capacity(image: &Path, config: StegConfig) -> Result<()> {
    let raster = Raster::load(image)?;

    let max = capacity::max_payload_bytes(
        raster.width(),
        raster.height(),
        config.bits_used,
        &config.pattern,
        0,
    );

    println!(
        "{}x{} px, {} bits per byte, method {}: {} bytes ({})",
        raster.width(),
        raster.height(),
        config.bits_used,
        config.pattern,
        max,
        utils::format_bytes(max)
    );

    if let Pattern::Random { .. } = config.pattern {
        println!("This is an estimate; a random walk may run out of pixels sooner");
    }

    Ok(())
}
