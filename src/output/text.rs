//! Text output formatter for human-readable display

use crate::orchestrator::RunReport;
use crate::output::{error_message, OutputFormatter, Verbosity};
use crate::provider::UrlProvider;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_candidates(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} in {}:",
            self.dim(&format!("{} candidate(s)", report.candidates.len())),
            report.index_url
        )?;
        for (index, candidate) in report.candidates.iter().enumerate() {
            let marker = if index == report.selected {
                "*"
            } else {
                " "
            };
            match &candidate.version {
                Some(version) => writeln!(writer, "  {} {} ({})", marker, candidate.link, version)?,
                None => writeln!(writer, "  {} {}", marker, candidate.link)?,
            }
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return writeln!(writer, "{}", report.result.url);
        }

        if self.verbosity == Verbosity::Verbose {
            self.write_candidates(report, writer)?;
        }

        writeln!(writer, "{} {}", self.label("Found URL"), report.result.url)?;

        if self.verbosity == Verbosity::Verbose {
            for (name, value) in report.outputs.iter() {
                writeln!(writer, "  {}: {}", name, value)?;
            }
        }

        Ok(())
    }

    fn describe(
        &self,
        provider: &dyn UrlProvider,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}: {}",
            self.label(provider.name()),
            provider.description()
        )?;
        writeln!(writer)?;

        writeln!(writer, "Input variables:")?;
        for input in provider.input_variables() {
            let detail = match (input.required, input.default) {
                (true, _) => "required".to_string(),
                (false, Some(default)) => format!("optional, default: {}", default),
                (false, None) => "optional".to_string(),
            };
            writeln!(writer, "  {} {}", input.name, self.dim(&format!("({})", detail)))?;
            writeln!(writer, "      {}", input.description)?;
        }

        writeln!(writer, "Output variables:")?;
        for output in provider.output_variables() {
            writeln!(writer, "  {}", output.name)?;
            writeln!(writer, "      {}", output.description)?;
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = if self.color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        writeln!(writer, "{} {}", prefix, error_message(error))
    }
}
