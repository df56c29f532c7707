//! Core domain models
//!
//! This module contains the fundamental types used throughout the crate:
//! - Version tokens and their ordering
//! - Candidates matched in an index page and the resolved result
//! - The key-value environment and variable declarations

mod candidate;
mod environment;
mod version;

pub use candidate::{Candidate, ResolvedResult};
pub use environment::{Environment, InputVariable, OutputVariable};
pub use version::{compare_versions, VersionToken};
