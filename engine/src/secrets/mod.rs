//! Credential handling
//!
//! The API key is held in a `SecretString` from the moment the CLI parses
//! it, so neither `tracing` output nor `Debug` dumps of the config can leak
//! it.

pub mod string;

pub use string::SecretString;
