mod handler;
mod io;
mod protocol;

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use filemenu_core::config::FeatureToggles;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("Usage: filemenu-agent --stdio [--config <path>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --stdio          Run in stdio mode (NDJSON over stdin/stdout)");
    eprintln!("  --config <path>  Load feature toggles from a JSON file");
    eprintln!("  --version        Print version and exit");
    eprintln!("  --help           Print this help message");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut stdio = false;
    let mut config_path: Option<PathBuf> = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" => {
                println!("filemenu-agent {}", VERSION);
                return Ok(());
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            "--stdio" => stdio = true,
            "--config" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config requires a path");
                    print_usage();
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
    }

    if !stdio {
        print_usage();
        std::process::exit(1);
    }

    // Logs go to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let features = match config_path {
        Some(path) => FeatureToggles::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FeatureToggles::default(),
    };

    info!("filemenu-agent {} starting in stdio mode", VERSION);
    io::stdio::run_stdio_loop(features).await
}
