// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Errors always print; notices are silenced when machine-readable output is requested

use owo_colors::OwoColorize;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
    structured: bool,
}

impl CliOutput {
    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self {
            use_color,
            structured: false,
        }
    }

    /// Suppress warnings and info notices (JSON output mode)
    pub fn structured(mut self, structured: bool) -> Self {
        self.structured = structured;
        self
    }

    /// Whether non-error notices will be shown
    pub fn emits_notices(&self) -> bool {
        !self.structured
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "error:".red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    /// Display a hint below an error
    pub fn hint(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "hint:".cyan().bold(), message);
        } else {
            eprintln!("hint: {}", message);
        }
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if !self.emits_notices() {
            return;
        }
        if self.use_color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    /// Display an informational message
    pub fn info(&self, message: &str) {
        if !self.emits_notices() {
            return;
        }
        if self.use_color {
            eprintln!("{} {}", "info:".blue().bold(), message);
        } else {
            eprintln!("info: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_output_creation() {
        let cli_color = CliOutput::with_color(true);
        assert!(cli_color.use_color);

        let cli_no_color = CliOutput::with_color(false);
        assert!(!cli_no_color.use_color);
    }

    #[test]
    fn test_structured_mode_silences_notices() {
        assert!(CliOutput::with_color(false).emits_notices());
        assert!(!CliOutput::with_color(false).structured(true).emits_notices());
    }

    #[test]
    fn test_message_formatting() {
        let cli = CliOutput::with_color(false);

        // These tests don't capture output, but verify methods can be called
        cli.error("test error");
        cli.hint("test hint");
        cli.warning("test warning");
        cli.info("test info");
    }
}
