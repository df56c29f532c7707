//! JSON output formatter for machine processing

use crate::domain::{Candidate, Environment, InputVariable, OutputVariable};
use crate::error::{ErrorKind, ProviderError};
use crate::orchestrator::RunReport;
use crate::output::{error_message, OutputFormatter, Verbosity};
use crate::provider::UrlProvider;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a successful run
#[derive(Serialize)]
struct JsonOutput<'a> {
    provider: &'a str,
    index_url: &'a str,
    /// Output variables written by the provider
    outputs: &'a Environment,
    /// Every matched candidate (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<&'a [Candidate]>,
}

/// JSON representation of a provider declaration
#[derive(Serialize)]
struct JsonDescription<'a> {
    name: &'a str,
    description: &'a str,
    input_variables: &'a [InputVariable],
    output_variables: &'a [OutputVariable],
}

/// JSON representation of a failure
#[derive(Serialize)]
struct JsonError {
    error: JsonErrorBody,
}

#[derive(Serialize)]
struct JsonErrorBody {
    /// Provider error kind, absent for configuration errors
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            provider: report.provider,
            index_url: &report.index_url,
            outputs: &report.outputs,
            candidates: (self.verbosity == Verbosity::Verbose).then_some(&report.candidates[..]),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn describe(
        &self,
        provider: &dyn UrlProvider,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let description = JsonDescription {
            name: provider.name(),
            description: provider.description(),
            input_variables: provider.input_variables(),
            output_variables: provider.output_variables(),
        };
        serde_json::to_writer_pretty(&mut *writer, &description)?;
        writeln!(writer)
    }

    fn format_error(&self, error: &anyhow::Error, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonError {
            error: JsonErrorBody {
                kind: error.downcast_ref::<ProviderError>().map(ProviderError::kind),
                message: error_message(error),
            },
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
