#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `TABLEHEAD_DEMO_*`.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tablehead-demo: scripted walkthrough of the headless table pipeline

USAGE:
    tablehead-demo [OPTIONS]

OPTIONS:
    --rows=N         Number of sample rows to generate (default: 7)
    --page-size=N    Rows per page (default: 3)
    --log[=FILTER]   Enable tracing output (default filter: debug)
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    TABLEHEAD_DEMO_ROWS        Override --rows
    TABLEHEAD_DEMO_PAGE_SIZE   Override --page-size
    TABLEHEAD_DEMO_LOG         Override --log filter";

/// Parsed command-line options.
pub struct Opts {
    /// Number of sample rows to generate.
    pub rows: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Tracing filter, when logging is requested.
    pub log_filter: Option<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            rows: 7,
            page_size: 3,
            log_filter: None,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("TABLEHEAD_DEMO_ROWS")
            && let Ok(n) = val.parse()
        {
            opts.rows = n;
        }
        if let Ok(val) = env::var("TABLEHEAD_DEMO_PAGE_SIZE")
            && let Ok(n) = val.parse()
        {
            opts.page_size = n;
        }
        if let Ok(val) = env::var("TABLEHEAD_DEMO_LOG") {
            opts.log_filter = Some(val);
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("tablehead-demo {VERSION}");
                    process::exit(0);
                }
                "--log" => {
                    opts.log_filter = Some("debug".to_string());
                }
                other => {
                    if let Some(val) = other.strip_prefix("--rows=") {
                        match val.parse() {
                            Ok(n) => opts.rows = n,
                            Err(_) => {
                                eprintln!("Invalid --rows value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--page-size=") {
                        match val.parse() {
                            Ok(n) => opts.page_size = n,
                            Err(_) => {
                                eprintln!("Invalid --page-size value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log_filter = Some(val.to_string());
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
