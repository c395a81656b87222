#![forbid(unsafe_code)]

//! tipkit demo binary entry point.

mod app;
mod cli;

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }

    if let Err(e) = app::run(&opts) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

/// Log to the file named by `TIPKIT_DEMO_LOG`. Stderr would tear the
/// alternate screen, so without the variable nothing is installed.
fn init_logging() -> std::io::Result<()> {
    let Some(path) = std::env::var_os("TIPKIT_DEMO_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
