#![deny(missing_docs)]
//! Shared logging utilities for the vodgrab workspace.
//!
//! This crate provides the `grab_*` logging macros used across the
//! codebase, the CLI logger setup (terminal plus log file), and a
//! minimal test initializer for the global logger.

use std::fs::OpenOptions;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Name of the log file created in the current working directory.
pub const LOG_FILE: &str = "vodgrab.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! grab_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! grab_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! grab_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! grab_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! grab_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes terminal and file logging for the CLI.
///
/// The console logger runs at `Info`, or `Debug` when `verbose` is set;
/// the log file always receives `Debug` and is appended to across runs.
/// If the log file cannot be opened, a warning is printed and logging
/// continues on the terminal only.
pub fn initialize(verbose: bool) {
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        console_level,
        build_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            loggers.push(WriteLogger::new(LevelFilter::Debug, build_config(), file));
        }
        Err(err) => {
            eprintln!("Warning: could not open log file {LOG_FILE}: {err}");
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
