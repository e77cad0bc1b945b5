//! # Output Configuration
//!
//! Controls how the CLI decorates its output. Status lines carry a marker
//! that is a colored symbol on capable terminals and a bracketed tag
//! otherwise.
//!
//! Colors follow, in order: the `--color=always|never|auto` flag, then in
//! auto mode `NO_COLOR`, `CLICOLOR=0`, `CLICOLOR_FORCE` and `TERM=dumb`, and
//! finally the terminal's own capabilities.

use console::style;
use std::env;

/// Kind of status line being printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Status::Ok => "✔",
            Status::Error => "✘",
            Status::Info => "•",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Error => "[ERR]",
            Status::Info => "[INFO]",
        }
    }
}

/// Output configuration derived from the `--color` flag and environment.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Marker placed in front of a status line.
    pub fn marker(&self, status: Status) -> String {
        if !self.use_color {
            return status.tag().to_string();
        }
        let symbol = style(status.symbol()).force_styling(true);
        match status {
            Status::Ok => symbol.green().to_string(),
            Status::Error => symbol.red().bold().to_string(),
            Status::Info => symbol.cyan().to_string(),
        }
    }

    /// Formats a complete status line.
    pub fn line(&self, status: Status, message: &str) -> String {
        format!("{} {}", self.marker(status), message)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
