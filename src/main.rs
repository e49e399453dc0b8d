//! qrmint CLI entrypoint

use chrono::Local;
use clap::Parser;
use qrmint::{Error, MintConfig, Minter, Result, logging, output};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// URL encoded when `--url` is not supplied
const DEFAULT_URL: &str = "https://example.com";

#[derive(Parser, Debug)]
#[command(name = "qrmint", version, about = "Generate a QR code PNG from a URL")]
struct Cli {
    /// The URL to encode in the QR code
    #[arg(long, value_name = "URL", default_value = DEFAULT_URL)]
    url: String,

    /// Optional configuration file (toml/yaml). Defaults to qrmint.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the output directory (takes precedence over config file)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Override the QR foreground color
    #[arg(long, value_name = "COLOR")]
    fill_color: Option<String>,

    /// Override the QR background color
    #[arg(long, value_name = "COLOR")]
    back_color: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, minter) = match startup(&cli) {
        Ok(ready) => ready,
        Err(err) => {
            // Startup failures can predate the tracing subscriber, so
            // report on stderr directly.
            eprintln!("qrmint: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!("QR code generation started");

    let filename = output::timestamped_filename(Local::now());
    info!("Generated filename for QR code: {filename}");

    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            error!("Failed to read working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let qr_dir = cwd.join(&config.output.directory);
    let qr_path = qr_dir.join(&filename);
    info!("Full path for QR code file: {}", qr_path.display());

    if let Err(err) = output::ensure_directory(&qr_dir) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    match minter.mint_to(&cli.url, &qr_path) {
        Ok(()) => {}
        Err(Error::InvalidUrl(_)) => {
            // Outcome already logged by the validator; the encode step is
            // skipped and the run still counts as completed.
        }
        Err(err) => {
            error!("An error occurred while generating or saving the QR code: {err}");
        }
    }

    // Completion is reported regardless of whether the encode step
    // succeeded; only directory creation is fatal.
    info!("QR code generation run completed");
    ExitCode::SUCCESS
}

/// Load configuration, apply CLI overrides, and bring up logging.
fn startup(cli: &Cli) -> Result<(MintConfig, Minter)> {
    let mut config = MintConfig::load(cli.config.as_deref())?;

    if let Some(ref dir) = cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(ref fill) = cli.fill_color {
        config.output.fill_color = fill.clone();
    }
    if let Some(ref back) = cli.back_color {
        config.output.back_color = back.clone();
    }

    logging::init(&config.logging)?;

    let minter = Minter::new(&config.output)?;
    Ok((config, minter))
}
