use colored::{ColoredString, Colorize};
use std::fmt::Display;

pub enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    fn symbol(&self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Success => "+".green(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Standard output carries records, so every status line goes to stderr.
pub fn status(status: &Status, message: &impl Display) {
    eprintln!("[{status}] {message}");
}

/// Turns coloured status symbols off for the rest of the run.
pub fn disable_color() {
    colored::control::set_override(false);
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Info, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_success {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Success, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Warning, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Error, &$message.to_string());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_without_color() {
        disable_color();
        assert_eq!(Status::Info.to_string(), "~");
        assert_eq!(Status::Success.to_string(), "+");
        assert_eq!(Status::Warning.to_string(), "!");
        assert_eq!(Status::Error.to_string(), "!");
    }
}
