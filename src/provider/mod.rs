//! URL providers
//!
//! Each provider turns an input [`Environment`] into an [`IndexQuery`] and
//! writes the resolved result back as output variables:
//! - Praat: architecture-specific disk image from the Praat download page
//! - Puppet Labs: versioned product disk images from the Puppet Labs index

mod praat;
mod puppetlabs;

pub use praat::{Arch, PraatProvider, PraatRequest};
pub use puppetlabs::{Product, PuppetlabsProvider, PuppetlabsRequest};

use crate::domain::{Environment, InputVariable, OutputVariable, ResolvedResult};
use crate::error::ProviderError;
use crate::resolve::IndexQuery;
use clap::ValueEnum;
use regex::Regex;
use std::fmt;

/// Trait for URL providers
pub trait UrlProvider: Send + Sync {
    /// Short name used on the command line
    fn name(&self) -> &'static str;

    /// One-line summary of what the provider resolves
    fn description(&self) -> &'static str;

    /// Input variables the provider reads
    fn input_variables(&self) -> &'static [InputVariable];

    /// Output variables the provider writes
    fn output_variables(&self) -> &'static [OutputVariable];

    /// Build the index query from the input environment
    fn build_query(&self, env: &Environment) -> Result<IndexQuery, ProviderError>;

    /// Write the resolved result into the environment
    fn emit(&self, result: &ResolvedResult, env: &mut Environment);
}

/// Available providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ProviderKind {
    /// Praat phonetics software
    Praat,
    /// Puppet Labs products (puppet, facter, hiera, agent)
    Puppetlabs,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Praat => write!(f, "praat"),
            ProviderKind::Puppetlabs => write!(f, "puppetlabs"),
        }
    }
}

/// Create a provider of the given kind
pub fn create_provider(kind: ProviderKind) -> Box<dyn UrlProvider> {
    match kind {
        ProviderKind::Praat => Box::new(PraatProvider),
        ProviderKind::Puppetlabs => Box::new(PuppetlabsProvider),
    }
}

/// Compile a link pattern assembled from escaped inputs
fn compile_pattern(pattern: &str) -> Result<Regex, ProviderError> {
    Regex::new(pattern)
        .map_err(|e| ProviderError::invalid_input("link pattern", pattern, e.to_string()))
}
