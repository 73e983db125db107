use std::fmt::Display;

use colored::Colorize;

/// Semantic level of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Helper function to print a status message with semantic level
pub fn set_status(text: impl Display, level: StatusLevel) {
    let marker = match level {
        StatusLevel::Info => "info:".cyan(),
        StatusLevel::Success => "done:".green(),
        StatusLevel::Warning => "warning:".yellow(),
        StatusLevel::Error => "error:".red(),
    };
    eprintln!("{} {}", marker.bold(), text);
}

/// Helper function to show a blocking alert
pub fn show_alert(message: impl Display) {
    eprintln!("{} {}", "!".yellow().bold(), message.to_string().bold());
}

/// Helper function to show an error with title, message and details
pub fn show_error(title: impl Display, message: impl Display, details: impl Display) {
    eprintln!("{} {}", title.to_string().red().bold(), message);
    for line in details.to_string().lines() {
        eprintln!("  {}", line);
    }
}
