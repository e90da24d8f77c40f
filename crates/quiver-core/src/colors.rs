//! Terminal palette for traces, listings and query headers.
//!
//! Colors are named by role, not by hue:
//! - `name`: template, particle and capture names
//! - `token`: question words and literal values
//! - `failure`: failed token tests and rejected runs
//! - `dim`: VM bookkeeping and comment headers

/// Role-based ANSI palette. Every field is empty when color is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    pub name: &'static str,
    pub token: &'static str,
    pub failure: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        token: "\x1b[32m",
        failure: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        token: "",
        failure: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// `text` wrapped in `role` and a reset, or unchanged when color is off.
    pub fn paint(&self, role: &str, text: impl std::fmt::Display) -> String {
        if role.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", role, text, self.reset)
        }
    }
}
