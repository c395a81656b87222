#![forbid(unsafe_code)]

//! Command-line argument parsing for the tooltip demo.
//!
//! Parses args manually. Delay defaults come from `TIPKIT_SHOW_DELAY_MS`
//! and `TIPKIT_HIDE_DELAY_MS` via the core config layer; `--delay` wins.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tipkit demo: hover the label to see its tooltip

USAGE:
    tipkit-demo [OPTIONS]

OPTIONS:
    --delay=MS        Show delay in milliseconds
    --message=TEXT    Tooltip message (empty disables the tooltip)
    --label=TEXT      Trigger label (default: \"[ hover me ]\")
    --help, -h        Show this help message
    --version, -V     Show version

KEYBINDINGS:
    e               Toggle the message between set and empty
    q / Esc / Ctrl+C Quit

ENVIRONMENT VARIABLES:
    TIPKIT_SHOW_DELAY_MS   Default show delay
    TIPKIT_HIDE_DELAY_MS   Hide delay
    TIPKIT_DEMO_LOG        Write debug logs to this file
    RUST_LOG               Log filter (default: debug)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Show delay override.
    pub delay_ms: Option<u64>,
    pub message: String,
    pub label: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            delay_ms: None,
            message: "Tooltips appear after the show delay".into(),
            label: "[ hover me ]".into(),
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments, exiting on `--help`, `--version`, or errors.
    pub fn parse() -> Self {
        match Self::from_args(env::args().skip(1)) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("tipkit-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse an argument list (without the program name).
    pub fn from_args<I>(args: I) -> Result<Parsed, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--delay=") {
                        match val.parse() {
                            Ok(n) => opts.delay_ms = Some(n),
                            Err(_) => return Err(format!("Invalid --delay value: {val}")),
                        }
                    } else if let Some(val) = other.strip_prefix("--message=") {
                        opts.message = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--label=") {
                        if val.is_empty() {
                            return Err("--label must not be empty".into());
                        }
                        opts.label = val.to_string();
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }
        Ok(Parsed::Run(opts))
    }
}
