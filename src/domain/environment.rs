//! Key-value environment shared between the caller and a provider
//!
//! Inputs are read from it before resolution and outputs are written back
//! into it afterwards. Providers declare which variables they consume and
//! produce through [`InputVariable`] and [`OutputVariable`].

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered string key-value map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Get a variable, treating an empty value as unset
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Returns true if the variable is set
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Merge another environment into this one; `other` wins on conflicts
    pub fn merge(&mut self, other: Environment) {
        self.vars.extend(other.vars);
    }

    /// Iterate variables in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are set
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Check that every required input is present
    pub fn check_required(&self, inputs: &[InputVariable]) -> Result<(), ProviderError> {
        match inputs
            .iter()
            .find(|input| input.required && self.get_non_empty(input.name).is_none())
        {
            Some(missing) => Err(ProviderError::missing_input(missing.name)),
            None => Ok(()),
        }
    }

    /// Keep only the named variables, in declaration order
    pub fn select(&self, outputs: &[OutputVariable]) -> Environment {
        let mut selected = Environment::new();
        for output in outputs {
            if let Some(value) = self.get(output.name) {
                selected.set(output.name, value);
            }
        }
        selected
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}

/// Declaration of an input variable a provider reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputVariable {
    pub name: &'static str,
    pub required: bool,
    /// Value used when the variable is not set
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// Declaration of an output variable a provider writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputVariable {
    pub name: &'static str,
    pub description: &'static str,
}
