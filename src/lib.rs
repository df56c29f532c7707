//! urlprovider - download URL resolution library
//!
//! This library resolves the current download URL of a product by scraping
//! a vendor's HTML download index:
//! - Praat (architecture-specific disk images)
//! - Puppet Labs products (puppet, facter, hiera, puppet-agent)

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod provider;
pub mod resolve;
