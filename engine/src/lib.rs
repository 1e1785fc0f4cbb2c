//! Signguard Engine Library
//!
//! Finds hosted images that can be fetched without a signed URL and patches
//! them to require one. Used by the `signguard` binary and the integration
//! tests.

/// Configuration management module
pub mod config;

/// Credential handling module
pub mod secrets;

/// Image directory abstraction and HTTP client
pub mod directory;

/// List, secure, verify orchestration
pub mod remediation;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;
