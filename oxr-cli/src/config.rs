//! Configuration from flags, falling back to environment variables.

use chrono::NaiveDate;
use clap::Args;

use oxr_client::ApiOptions;

/// Client settings shared by every subcommand.
#[derive(Debug, Args)]
pub struct Settings {
    /// Open Exchange Rates app id
    #[arg(long, env = "OXR_APP_ID", hide_env_values = true)]
    pub app_id: String,

    /// Default base currency
    #[arg(long, env = "OXR_BASE_CURRENCY", default_value = "")]
    pub base_currency: String,

    /// Use https for requests
    #[arg(
        long,
        env = "OXR_HTTPS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub https: bool,
}

impl Settings {
    pub fn api_options(&self) -> ApiOptions {
        ApiOptions::new(self.base_currency.clone(), self.https)
    }
}

/// Parses a `YYYY-MM-DD` day.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        settings: Settings,
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2014-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()
        );
        assert!(parse_date("2014-13-01").is_err());
        assert!(parse_date("01/01/2014").is_err());
    }

    #[test]
    fn test_settings_from_flags() {
        let harness = Harness::try_parse_from([
            "oxr",
            "--app-id",
            "f4k31d",
            "--base-currency",
            "USD",
            "--https",
            "false",
        ])
        .unwrap();

        assert_eq!(harness.settings.app_id, "f4k31d");
        assert_eq!(
            harness.settings.api_options(),
            ApiOptions::new("USD", false)
        );
    }
}
