//! Output formatting for the CLI.
//!
//! Human-readable console output for run results and errors.

use colored::Colorize;
use std::io::Write;

/// Output formatter for human-readable console output.
pub struct ConsoleOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> ConsoleOutput<W> {
    /// Creates a new console output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes the successful-submission summary with the reviewer list.
    pub fn write_requested(
        &mut self,
        pull_number: u64,
        reviewers: &[String],
    ) -> std::io::Result<()> {
        let message = if reviewers.is_empty() {
            format!("✓ No reviewers left to request on pull request #{}", pull_number)
        } else {
            format!(
                "✓ Requested {} reviewer(s) on pull request #{}: {}",
                reviewers.len(),
                pull_number,
                reviewers.join(", ")
            )
        };

        if self.use_colors {
            writeln!(self.writer, "{}", message.green().bold())
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Writes a non-fatal run failure.
    pub fn write_failure(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", format!("✗ {}", message).yellow())
        } else {
            writeln!(self.writer, "✗ {}", message)
        }
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {}", message)
        }
    }
}
