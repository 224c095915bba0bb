mod args;
mod global;
mod handlers;
mod input;

use base32_codec::{CodecConfig, CodecError, should_use_color};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{BatchArgs, ConfigArgs, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base32-codec")]
#[command(version)]
#[command(about = "Encode and decode RFC 4648 and Crockford Base32", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode binary data as Base32 text
    Encode(EncodeArgs),
    /// Decode Base32 text back to binary data
    Decode(DecodeArgs),
    /// Run a JSON array of encode/decode requests
    Batch(BatchArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    // Load configuration with user overrides
    let config = CodecConfig::load_with_overrides()?;

    let result = match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Command::Batch(args) => handlers::batch::handle(args, &cli.global, &config),
        Command::Config(args) => handlers::config::handle(args, &cli.global, &config),
    };

    // Codec errors render their own report, honoring --no-color
    let use_color = !cli.global.no_color && should_use_color();
    result.map_err(|err| match err.downcast::<CodecError>() {
        Ok(codec_err) => codec_err.render(use_color).into(),
        Err(other) => other,
    })
}

/// Logs go to stderr. `RUST_LOG` applies unless `-v` raises the level.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
