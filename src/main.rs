use bicsv::config::{self, ConfigSource};
use bicsv::{scan, table};
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "bicsv")]
#[command(about = "Generates a CSV file that contains data from bulk image import")]
#[command(long_about = "\
Generates a CSV file that contains data from bulk image import

The command accepts exactly one argument, the path to the images directory,
and writes the table to STDOUT. Images are named <sku>_<suffix>.<ext>:

  product_images/
  ├── 100_1.jpg       # suffix 1: base, small and thumbnail image
  ├── 100_2.png       # suffix 2: rollover image
  └── 200_1.jpeg

Output format:

  sku,base_image,small_image,thumbnail_image,rollover_image
  100,100_1.jpg,100_1.jpg,100_1.jpg,100_2.png
  200,200_1.jpeg,200_1.jpeg,200_1.jpeg,

The delimiter is set by `delimiter` in the config file or BICSV_DELIMITER.

Example: bicsv ./product_images")]
#[command(version = version_string())]
struct Cli {
    /// Images directory
    image_dir: PathBuf,

    /// Config file (default is $HOME/.bicsv.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Accepted for compatibility; has no effect
    #[arg(short, long, hide = true)]
    toggle: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.toggle {
        debug!("--toggle has no effect");
    }

    let source = ConfigSource::resolve(cli.config.as_deref());
    let loaded = match config::load_config(&source) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(file) = &loaded.file {
        info!("Using config file: {}", file.display());
    }
    let delimiter = match loaded.config.delimiter_byte() {
        Ok(delimiter) => delimiter,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match scan::scan(&cli.image_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(products = catalog.len(), "aggregated catalog");

    match table::render_catalog(&catalog, delimiter) {
        Ok(bytes) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(&bytes).and_then(|()| stdout.flush()) {
                error!("failed to write table: {e}");
                return ExitCode::FAILURE;
            }
        }
        Err(e) => warn!("table not written: {e}"),
    }

    ExitCode::SUCCESS
}

/// Log to stderr so stdout carries only the table. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
