//! `limg-edit`: Terminal editor for `.limg` images.

use clap::Parser;
use limg::shell::{self, parse_size, ShellConfig, Startup};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "limg-edit", version, about = "Paint bitonal .limg images in the terminal")]
struct Args {
    /// Image file to open
    path: Option<PathBuf>,

    /// Start with a blank canvas, e.g. --new 32x16
    #[arg(long, value_name = "WxH", conflicts_with = "path", value_parser = parse_size)]
    new: Option<(u32, u32)>,

    /// Write logs here instead of the temp directory (filter with LIMG_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

/// Log to a file; the terminal belongs to the editor.
fn init_logging(path: Option<PathBuf>) -> std::io::Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("limg-edit.log"));
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("LIMG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file) {
        eprintln!("limg-edit: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    let startup = Startup {
        open: args.path,
        new: args.new,
    };
    match shell::run(ShellConfig::default(), startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: "limg::shell", error = %e, "terminal error");
            eprintln!("limg-edit: {e}");
            ExitCode::FAILURE
        }
    }
}
