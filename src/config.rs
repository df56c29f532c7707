//! Input variables from files and command-line pairs
//!
//! Input files are flat TOML tables:
//!
//! ```toml
//! product_name = "agent"
//! get_os_version = "10.9"
//! ```
//!
//! Integers and booleans are accepted and stringified. Floats are rejected
//! because `10.10` would silently read back as `10.1`.

use crate::domain::Environment;
use crate::error::ConfigError;
use std::path::Path;
use toml::Value;

/// Parse a `KEY=VALUE` pair
pub fn parse_key_value(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidKeyValue {
            value: s.to_string(),
        }),
    }
}

/// Read input variables from a TOML file
pub fn load_input_file(path: &Path) -> Result<Environment, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
    parse_input_table(path, &content)
}

/// Parse input variables from TOML text; `path` is used in error messages
pub fn parse_input_table(path: &Path, content: &str) -> Result<Environment, ConfigError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))?;

    let mut env = Environment::new();
    for (key, value) in table {
        let value = match value {
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
            other => {
                return Err(ConfigError::parse_error(
                    path,
                    format!(
                        "value for '{}' must be a string, found {}",
                        key,
                        other.type_str()
                    ),
                ))
            }
        };
        env.set(key, value);
    }
    Ok(env)
}
