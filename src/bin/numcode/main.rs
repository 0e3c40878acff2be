//! `numcode` CLI.

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = run() {
        output::Output::error_user(err.user_message());
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("numcode CLI not enabled. Build with: cargo build --features cli --bin numcode");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
/// Subcommand implementations.
mod commands;
#[cfg(feature = "cli")]
/// Settings file and character set resolution.
mod config;
#[cfg(feature = "cli")]
/// CLI error type.
mod error;
#[cfg(feature = "cli")]
/// Console output.
mod output;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use config::Settings;
#[cfg(feature = "cli")]
use error::{CliError, Result};
#[cfg(feature = "cli")]
use numcode::{Codec, DEFAULT_CHARSET};
#[cfg(feature = "cli")]
use output::Output;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "numcode")]
#[command(about = "Convert short codes to and from 32-bit integers", version)]
#[command(arg_required_else_help = true)]
/// Command line.
struct Cli {
    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only errors).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Character set (10-64 ASCII symbols; first symbol is the zero symbol).
    #[arg(long, global = true, value_name = "SYMBOLS")]
    charset: Option<String>,

    /// Settings file (defaults to ~/.numcode/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    /// Selected subcommand.
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
/// Subcommands.
enum Commands {
    /// Encode codes to integers.
    Encode(commands::encode::CmdArgs),

    /// Decode integers to codes.
    Decode(commands::decode::CmdArgs),

    /// Show the character set and its limits.
    Info,
}

#[cfg(feature = "cli")]
/// Shared state for subcommands.
struct Context {
    /// Console output.
    out: Output,
    /// Codec for the resolved character set.
    codec: Codec,
    /// Loaded settings.
    settings: Settings,
}

#[cfg(feature = "cli")]
/// Parse arguments, resolve the codec and dispatch.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet && cli.verbose {
        return Err(CliError::QuietVerboseConflict);
    }
    let out = Output::new(cli.quiet, cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let codec = match settings.resolve_charset(cli.charset) {
        Some(charset) => Codec::try_new(charset)?,
        None => Codec::standard(),
    };
    if codec.charset_str() == DEFAULT_CHARSET {
        out.info_diag("charset: default");
    } else {
        out.info_diag(format!("charset: {:?}", codec.charset_str()));
    }
    out.info_diag(format!(
        "base: {}, max chars: {}",
        codec.base(),
        codec.max_chars()
    ));

    let ctx = Context {
        out,
        codec,
        settings,
    };

    match cli.command {
        Commands::Encode(args) => commands::encode::run(&ctx, &args),
        Commands::Decode(args) => commands::decode::run(&ctx, &args),
        Commands::Info => {
            commands::info::run(&ctx);
            Ok(())
        }
    }
}
