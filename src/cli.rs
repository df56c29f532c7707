//! CLI argument parsing module for urlprovider

use crate::config::{load_input_file, parse_key_value};
use crate::domain::Environment;
use crate::error::ConfigError;
use crate::provider::ProviderKind;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Resolve vendor download URLs from HTML download indexes
#[derive(Parser, Debug, Clone)]
#[command(
    name = "urlprovider",
    version,
    about = "Resolve vendor download URLs from HTML download indexes"
)]
pub struct CliArgs {
    /// Provider to run
    #[arg(value_enum)]
    pub provider: ProviderKind,

    // Inputs
    /// Set an input variable (can be specified multiple times)
    #[arg(short = 'k', long = "key", value_name = "KEY=VALUE", value_parser = parse_key_value, action = ArgAction::Append)]
    pub keys: Vec<(String, String)>,

    /// Read input variables from a TOML file; --key values take precedence
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Index fetch timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - print only the URL
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the provider's input and output variables and exit
    #[arg(long)]
    pub describe: bool,
}

impl CliArgs {
    /// Fetch timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Build the input environment from --input and --key
    pub fn input_environment(&self) -> Result<Environment, ConfigError> {
        let mut env = match &self.input {
            Some(path) => load_input_file(path)?,
            None => Environment::new(),
        };
        env.merge(self.keys.iter().cloned().collect());
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["urlprovider", "praat"]);
        assert_eq!(args.provider, ProviderKind::Praat);
        assert!(args.keys.is_empty());
        assert!(args.input.is_none());
        assert_eq!(args.timeout(), Duration::from_secs(30));
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.describe);
        assert!(!args.no_color);
    }

    #[test]
    fn test_provider_is_required() {
        assert!(CliArgs::try_parse_from(["urlprovider"]).is_err());
        assert!(CliArgs::try_parse_from(["urlprovider", "sparkle"]).is_err());
    }

    #[test]
    fn test_key_multiple() {
        let args = CliArgs::parse_from([
            "urlprovider",
            "puppetlabs",
            "-k",
            "product_name=agent",
            "--key",
            "get_os_version=10.9",
        ]);
        assert_eq!(args.provider, ProviderKind::Puppetlabs);
        assert_eq!(
            args.keys,
            vec![
                ("product_name".to_string(), "agent".to_string()),
                ("get_os_version".to_string(), "10.9".to_string()),
            ]
        );
    }

    #[test]
    fn test_key_invalid() {
        let result = CliArgs::try_parse_from(["urlprovider", "praat", "-k", "arch_edition"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_timeout() {
        let args = CliArgs::parse_from(["urlprovider", "praat", "--timeout", "5"]);
        assert_eq!(args.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_output_flags() {
        let args = CliArgs::parse_from(["urlprovider", "praat", "--json", "--verbose"]);
        assert!(args.json);
        assert!(args.verbose);

        let args = CliArgs::parse_from(["urlprovider", "praat", "-q", "--no-color"]);
        assert!(args.quiet);
        assert!(args.no_color);
    }

    #[test]
    fn test_input_environment_from_keys() {
        let args = CliArgs::parse_from(["urlprovider", "praat", "-k", "arch_edition=64"]);
        let env = args.input_environment().unwrap();
        assert_eq!(env.get("arch_edition"), Some("64"));
    }

    #[test]
    fn test_later_key_wins() {
        let args = CliArgs::parse_from([
            "urlprovider",
            "praat",
            "-k",
            "arch_edition=32",
            "-k",
            "arch_edition=64",
        ]);
        let env = args.input_environment().unwrap();
        assert_eq!(env.get("arch_edition"), Some("64"));
    }

    #[test]
    fn test_keys_override_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.toml");
        fs::write(
            &path,
            "product_name = \"facter\"\nget_version = \"3.1.0\"\n",
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "urlprovider",
            "puppetlabs",
            "--input",
            path.to_str().unwrap(),
            "-k",
            "get_version=latest",
        ]);
        let env = args.input_environment().unwrap();
        assert_eq!(env.get("product_name"), Some("facter"));
        assert_eq!(env.get("get_version"), Some("latest"));
    }
}
