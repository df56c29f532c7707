//! Praat URL provider
//!
//! Scrapes the Praat macOS download page for links like
//! `praat6123_mac64.dmg`. Links are relative to the page itself.

use super::{compile_pattern, UrlProvider};
use crate::domain::{Environment, InputVariable, OutputVariable, ResolvedResult};
use crate::error::ProviderError;
use crate::resolve::{IndexQuery, LinkBase};
use std::fmt;
use std::str::FromStr;

/// Praat macOS download page
pub const PRAAT_BASE_URL: &str = "http://www.fon.hum.uva.nl/praat/download_mac.html";

const INPUTS: &[InputVariable] = &[
    InputVariable {
        name: "arch_edition",
        required: false,
        default: Some("32"),
        description: "Build architecture to retrieve. Can be either '32' or '64'.",
    },
    InputVariable {
        name: "base_url",
        required: false,
        default: Some(PRAAT_BASE_URL),
        description: "Download page to scrape.",
    },
];

const OUTPUTS: &[OutputVariable] = &[OutputVariable {
    name: "url",
    description: "URL to the latest release of Praat.",
}];

/// Build architecture of a Praat disk image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arch {
    #[default]
    Bits32,
    Bits64,
}

impl Arch {
    /// Suffix used in Praat file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Bits32 => "32",
            Arch::Bits64 => "64",
        }
    }
}

impl FromStr for Arch {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "32" => Ok(Arch::Bits32),
            "64" => Ok(Arch::Bits64),
            other => Err(ProviderError::invalid_input(
                "arch_edition",
                other,
                "expected '32' or '64'",
            )),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved inputs for one Praat lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PraatRequest {
    pub base_url: String,
    pub arch: Arch,
}

impl Default for PraatRequest {
    fn default() -> Self {
        Self {
            base_url: PRAAT_BASE_URL.to_string(),
            arch: Arch::default(),
        }
    }
}

impl PraatRequest {
    /// Read the request from the input environment, applying defaults
    pub fn from_env(env: &Environment) -> Result<Self, ProviderError> {
        let arch: Arch = match env.get_non_empty("arch_edition") {
            Some(value) => value.parse()?,
            None => Arch::default(),
        };
        let base_url = env
            .get_non_empty("base_url")
            .unwrap_or(PRAAT_BASE_URL)
            .to_string();

        Ok(Self { base_url, arch })
    }

    /// Link pattern for this request's architecture
    pub fn pattern(&self) -> String {
        format!(
            r#"a href="?(?P<link>praat(?P<version>\d+)_mac{}\.dmg)"?"#,
            self.arch.as_str()
        )
    }

    /// Build the index query
    pub fn query(&self) -> Result<IndexQuery, ProviderError> {
        Ok(IndexQuery::new(
            self.base_url.clone(),
            compile_pattern(&self.pattern())?,
            LinkBase::Page(self.base_url.clone()),
        ))
    }
}

/// Provides the URL of the latest Praat release
pub struct PraatProvider;

impl UrlProvider for PraatProvider {
    fn name(&self) -> &'static str {
        "praat"
    }

    fn description(&self) -> &'static str {
        "Provides URL to the latest release of Praat."
    }

    fn input_variables(&self) -> &'static [InputVariable] {
        INPUTS
    }

    fn output_variables(&self) -> &'static [OutputVariable] {
        OUTPUTS
    }

    fn build_query(&self, env: &Environment) -> Result<IndexQuery, ProviderError> {
        env.check_required(INPUTS)?;
        PraatRequest::from_env(env)?.query()
    }

    fn emit(&self, result: &ResolvedResult, env: &mut Environment) {
        env.set("url", &result.url);
    }
}
