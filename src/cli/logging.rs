//! Output gating for the centinela CLI
//!
//! The validate and info commands print materialization results at
//! `Normal`, with per-component detail reserved for `Verbose`. `Quiet`
//! suppresses everything except the final error path in `main`.

/// Verbosity selected by the `--quiet` / `--verbose` flags
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// No output
    Quiet,
    /// Materialization results only
    Normal,
    /// Results plus per-component detail
    Verbose,
}

/// Whether a message gated at `required` is emitted at `level`.
pub fn should_log(level: LogLevel, required: LogLevel) -> bool {
    match level {
        LogLevel::Quiet => false,
        LogLevel::Normal => required == LogLevel::Normal,
        LogLevel::Verbose => true,
    }
}

/// Print a message if the selected level permits it.
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if should_log(level, required) {
        println!("{msg}");
    }
}
