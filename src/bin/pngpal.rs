//! `pngpal` - check palette configurations and patch PNG files with them.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use pngpal::{
  png::{PngRawChunkIter, PLTE},
  PngConf,
};

/// Synthesize PNG palette chunks from a configuration file.
#[derive(Parser)]
#[command(name = "pngpal")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Load a configuration and report what it sets up
  Check {
    /// Configuration file
    config: PathBuf,
  },

  /// Print the encoded PLTE and tRNS chunks as hex
  Chunks {
    /// Configuration file
    config: PathBuf,
  },

  /// Replace the palette of an indexed-color PNG
  Patch {
    /// Configuration file
    config: PathBuf,

    /// PNG to read
    input: PathBuf,

    /// Where to write the result
    output: PathBuf,

    /// Request URI to check against the configured patterns
    #[arg(short, long)]
    uri: Option<String>,

    /// Treat the request as a sub-request
    #[arg(short, long)]
    subrequest: bool,
  },
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  match cli.command {
    Commands::Check { config } => cmd_check(&config)?,
    Commands::Chunks { config } => cmd_chunks(&config)?,
    Commands::Patch { config, input, output, uri, subrequest } => {
      cmd_patch(&config, &input, &output, uri.as_deref(), subrequest)?
    }
  }

  Ok(())
}

fn load(config: &Path) -> Result<PngConf> {
  PngConf::load(config).with_context(|| format!("Failed to load {}", config.display()))
}

fn cmd_check(config: &Path) -> Result<()> {
  let conf = load(config)?;
  println!("{}: ok", config.display());
  println!("  patterns: {}", conf.regexps().len());
  println!("  indirect: {}", conf.indirect());
  println!("  only png: {}", conf.only());
  match conf.chunks() {
    Some(chunks) => {
      println!("  palette entries: {}", chunks.palette_len());
      println!("  tRNS entries: {}", chunks.trns_len());
    }
    None => println!("  palette: off"),
  }
  Ok(())
}

fn cmd_chunks(config: &Path) -> Result<()> {
  let conf = load(config)?;
  let Some(chunks) = conf.chunks() else {
    bail!("{} has no `Palette` line", config.display());
  };
  let mut bytes = Vec::new();
  chunks.write_to(&mut bytes);
  for chunk in PngRawChunkIter::from_chunks(&bytes) {
    println!("{} ({} bytes, crc {:08X})", chunk.ty(), chunk.data().len(), chunk.declared_crc());
    if let Ok(plte) = PLTE::try_from(chunk) {
      for (i, [r, g, b]) in plte.entries().iter().enumerate() {
        println!("  {i:3}: {r:02X}{g:02X}{b:02X}");
      }
    } else {
      for line in chunk.data().chunks(16) {
        let hex: Vec<String> = line.iter().map(|b| format!("{b:02X}")).collect();
        println!("  {}", hex.join(" "));
      }
    }
  }
  Ok(())
}

fn cmd_patch(
  config: &Path, input: &Path, output: &Path, uri: Option<&str>, subrequest: bool,
) -> Result<()> {
  let conf = load(config)?;
  let body = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

  let uri = uri.unwrap_or("/");
  if !conf.applies_to(uri, subrequest) {
    log::info!("{uri} is not handled by this configuration, copying unchanged");
    fs::write(output, &body).context("Failed to write output file")?;
    return Ok(());
  }

  let patched = conf.patch(&body).with_context(|| format!("Failed to patch {}", input.display()))?;
  log::info!("{} -> {}: {} bytes in, {} bytes out", input.display(), output.display(), body.len(), patched.len());
  fs::write(output, &patched).context("Failed to write output file")?;
  Ok(())
}
