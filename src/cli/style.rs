//! Console styling helpers
//!
//! Output goes through `anstream`, which drops the escape codes when
//! stdout is not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Success mark
pub const CHECK: &str = "✓";
/// Failure mark
pub const CROSS: &str = "✗";

/// Semantic styles for console text
pub trait Stylize: Display + Sized {
    /// Bold text
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Secondary text
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Highlighted value
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Positive result
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Non-fatal problem
    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    /// Fatal problem
    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Styled success mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled failure mark
pub fn cross() -> String {
    CROSS.warn()
}
