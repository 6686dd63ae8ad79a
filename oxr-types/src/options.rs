//! Per-client API options.

use serde::{Deserialize, Serialize};

/// Options supplied alongside the app id when building a client.
///
/// Deserializes from `{"base_currency": "USD", "https": true}`; both keys
/// are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiOptions {
    /// Currency rates are expressed against when a call does not override it.
    pub base_currency: String,
    /// Whether requests go over https.
    pub https: bool,
}

impl ApiOptions {
    pub fn new(base_currency: impl Into<String>, https: bool) -> Self {
        Self {
            base_currency: base_currency.into(),
            https,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: ApiOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ApiOptions::default());
        assert_eq!(opts.base_currency, "");
        assert!(!opts.https);
    }

    #[test]
    fn test_options_deserialize_full() {
        let opts: ApiOptions =
            serde_json::from_str(r#"{"base_currency": "USD", "https": true}"#).unwrap();
        assert_eq!(opts, ApiOptions::new("USD", true));
    }
}
