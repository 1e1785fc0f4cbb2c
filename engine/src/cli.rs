//! CLI interface for signguard
//!
//! Two flags and nothing else. Both flags are optional to clap. When either
//! one is missing, `main` prints usage and exits successfully instead of
//! failing with a parse error.

use clap::Parser;

use crate::config::DirectoryConfig;
use crate::secrets::SecretString;

/// Require signed URLs on every hosted Cloudflare image
///
/// Lists the account's images, patches each one that is publicly fetchable,
/// then lists again and reports anything still unprotected.
#[derive(Parser, Debug)]
#[command(name = "signguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// cloudflare account id
    #[arg(long = "cf-acct-id", value_name = "ID")]
    pub account_id: Option<String>,

    /// cloudflare api key
    #[arg(long = "cf-api-key", value_name = "KEY")]
    pub api_key: Option<SecretString>,
}

impl Cli {
    /// Directory settings, or `None` when a required flag is missing or blank
    pub fn directory_config(&self) -> Option<DirectoryConfig> {
        let account_id = self
            .account_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())?;
        let api_key = self.api_key.as_ref().filter(|key| !key.is_empty())?;

        Some(DirectoryConfig::new(account_id, api_key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_flags_build_config() {
        let cli = Cli::try_parse_from(["signguard", "--cf-acct-id", "acct", "--cf-api-key", "key"])
            .unwrap();
        let config = cli.directory_config().unwrap();
        assert_eq!(config.account_id, "acct");
        assert_eq!(config.api_key.unsecure(), "key");
    }

    #[test]
    fn test_missing_flag_yields_no_config() {
        let cli = Cli::try_parse_from(["signguard", "--cf-acct-id", "acct"]).unwrap();
        assert!(cli.directory_config().is_none());

        let cli = Cli::try_parse_from(["signguard", "--cf-api-key", "key"]).unwrap();
        assert!(cli.directory_config().is_none());

        let cli = Cli::try_parse_from(["signguard"]).unwrap();
        assert!(cli.directory_config().is_none());
    }

    #[test]
    fn test_empty_flag_yields_no_config() {
        let cli =
            Cli::try_parse_from(["signguard", "--cf-acct-id", "", "--cf-api-key", "key"]).unwrap();
        assert!(cli.directory_config().is_none());
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["signguard", "--config", "x.toml"]).is_err());
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let cli = Cli::try_parse_from(["signguard", "--cf-api-key", "very-secret"]).unwrap();
        assert!(!format!("{:?}", cli).contains("very-secret"));
    }
}
