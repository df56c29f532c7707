//! Puppet Labs products URL provider
//!
//! Generic products (`puppet`, `facter`, `hiera`) are listed directly in the
//! index as `product-1.2.3.dmg`. The collection-style agent lives under an
//! OS-specific path, e.g. `10.10/PC1/x86_64/puppet-agent-1.2.5-1.osx10.10.dmg`.

use super::{compile_pattern, UrlProvider};
use crate::domain::{Environment, InputVariable, OutputVariable, ResolvedResult};
use crate::error::ProviderError;
use crate::resolve::{IndexQuery, LinkBase, VersionConstraint, LATEST};
use std::fmt;
use std::str::FromStr;

/// Puppet Labs macOS download index
pub const DL_INDEX: &str = "https://downloads.puppetlabs.com/mac";

/// OS version used for agent packages when none is given
pub const DEFAULT_OS_VERSION: &str = "10.10";

const INPUTS: &[InputVariable] = &[
    InputVariable {
        name: "product_name",
        required: true,
        default: None,
        description: "Product to fetch URL for. One of 'puppet', 'facter', 'hiera', or 'agent'.",
    },
    InputVariable {
        name: "get_version",
        required: false,
        default: Some(LATEST),
        description: "Specific version to request. 'latest' finds the highest available release.",
    },
    InputVariable {
        name: "get_os_version",
        required: false,
        default: Some(DEFAULT_OS_VERSION),
        description: "When fetching the puppet-agent, collection-style pkg, designates OS.",
    },
    InputVariable {
        name: "index_url",
        required: false,
        default: Some(DL_INDEX),
        description: "Download index to scrape.",
    },
];

const OUTPUTS: &[OutputVariable] = &[
    OutputVariable {
        name: "version",
        description: "Version of the product.",
    },
    OutputVariable {
        name: "url",
        description: "Download URL.",
    },
];

/// Products published in the Puppet Labs index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Puppet,
    Facter,
    Hiera,
    /// Collection-style puppet-agent package
    Agent,
}

impl Product {
    /// File name prefix used in the index
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Product::Puppet => "puppet",
            Product::Facter => "facter",
            Product::Hiera => "hiera",
            Product::Agent => "puppet-agent",
        }
    }
}

impl FromStr for Product {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "puppet" => Ok(Product::Puppet),
            "facter" => Ok(Product::Facter),
            "hiera" => Ok(Product::Hiera),
            "agent" => Ok(Product::Agent),
            _ => Err(ProviderError::invalid_input(
                "product_name",
                s,
                "expected one of 'puppet', 'facter', 'hiera', or 'agent'",
            )),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Agent => f.write_str("agent"),
            other => f.write_str(other.file_prefix()),
        }
    }
}

/// Resolved inputs for one Puppet Labs lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuppetlabsRequest {
    pub index_url: String,
    pub product: Product,
    pub version: VersionConstraint,
    pub os_version: String,
}

impl PuppetlabsRequest {
    /// Create a request for `product` with default settings
    pub fn new(product: Product) -> Self {
        Self {
            index_url: DL_INDEX.to_string(),
            product,
            version: VersionConstraint::Latest,
            os_version: DEFAULT_OS_VERSION.to_string(),
        }
    }

    /// Read the request from the input environment, applying defaults
    pub fn from_env(env: &Environment) -> Result<Self, ProviderError> {
        let product: Product = env
            .get_non_empty("product_name")
            .ok_or_else(|| ProviderError::missing_input("product_name"))?
            .parse()?;

        let mut request = Self::new(product);
        request.version = VersionConstraint::from_input(env.get("get_version"));
        if let Some(os_version) = env.get_non_empty("get_os_version") {
            request.os_version = os_version.to_string();
        }
        if let Some(index_url) = env.get_non_empty("index_url") {
            request.index_url = index_url.to_string();
        }
        Ok(request)
    }

    /// Directory holding this product's disk images
    pub fn download_url(&self) -> String {
        match self.product {
            Product::Agent => format!("{}/{}/PC1/x86_64", self.index_url, self.os_version),
            _ => self.index_url.clone(),
        }
    }

    /// Link pattern for this request
    pub fn pattern(&self) -> String {
        let version = self.version.pattern();
        match self.product {
            Product::Agent => format!(
                r#"href="(?P<link>puppet-agent-(?P<version>{})-1\.osx{}\.dmg)""#,
                version,
                regex::escape(&self.os_version)
            ),
            product => format!(
                r#"href="(?P<link>{}-(?P<version>{})\.dmg)""#,
                product.file_prefix(),
                version
            ),
        }
    }

    /// Build the index query
    pub fn query(&self) -> Result<IndexQuery, ProviderError> {
        let download_url = self.download_url();
        Ok(IndexQuery::new(
            download_url.clone(),
            compile_pattern(&self.pattern())?,
            LinkBase::Directory(download_url),
        ))
    }
}

/// Extracts a URL for a Puppet Labs item
pub struct PuppetlabsProvider;

impl UrlProvider for PuppetlabsProvider {
    fn name(&self) -> &'static str {
        "puppetlabs"
    }

    fn description(&self) -> &'static str {
        "Extracts a URL for a Puppet Labs item."
    }

    fn input_variables(&self) -> &'static [InputVariable] {
        INPUTS
    }

    fn output_variables(&self) -> &'static [OutputVariable] {
        OUTPUTS
    }

    fn build_query(&self, env: &Environment) -> Result<IndexQuery, ProviderError> {
        env.check_required(INPUTS)?;
        PuppetlabsRequest::from_env(env)?.query()
    }

    fn emit(&self, result: &ResolvedResult, env: &mut Environment) {
        if let Some(version) = result.version() {
            env.set("version", version);
        }
        env.set("url", &result.url);
    }
}
