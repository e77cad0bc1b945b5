//! # Common Importer Settings
//!
//! Schema validation for the settings every content importer shares: TLS
//! material, proxy and basic-auth credentials, and download throttling. The
//! server framework runs these checks for all plugins; the Puppet importer
//! relies on them before applying its own field checks.
//!
//! Unlike the per-field importer validators, this pass does not stop at the
//! first problem. Every offending field contributes one message to a single
//! [`Error::InvalidConfig`].

use serde_json::Value;

use crate::error::{Error, Result};
use crate::plugin_config::{
    display_value, parse_boolean, type_name, ConfigMap, PluginCallConfiguration,
};

pub const KEY_SSL_VALIDATION: &str = "ssl_validation";
pub const KEY_SSL_CA_CERT: &str = "ssl_ca_cert";
pub const KEY_SSL_CLIENT_CERT: &str = "ssl_client_cert";
pub const KEY_SSL_CLIENT_KEY: &str = "ssl_client_key";
pub const KEY_PROXY_HOST: &str = "proxy_host";
pub const KEY_PROXY_PORT: &str = "proxy_port";
pub const KEY_PROXY_USER: &str = "proxy_username";
pub const KEY_PROXY_PASS: &str = "proxy_password";
pub const KEY_BASIC_AUTH_USER: &str = "basic_auth_username";
pub const KEY_BASIC_AUTH_PASS: &str = "basic_auth_password";
pub const KEY_MAX_DOWNLOADS: &str = "max_downloads";
pub const KEY_MAX_SPEED: &str = "max_speed";
pub const KEY_VALIDATE: &str = "validate";

const BOOLEAN_KEYS: &[&str] = &[KEY_SSL_VALIDATION, KEY_VALIDATE];

const STRING_KEYS: &[&str] = &[
    KEY_SSL_CA_CERT,
    KEY_SSL_CLIENT_CERT,
    KEY_SSL_CLIENT_KEY,
    KEY_PROXY_HOST,
    KEY_PROXY_USER,
    KEY_PROXY_PASS,
    KEY_BASIC_AUTH_USER,
    KEY_BASIC_AUTH_PASS,
];

const POSITIVE_INTEGER_KEYS: &[&str] = &[KEY_PROXY_PORT, KEY_MAX_DOWNLOADS];

/// `(key, required companion)`: setting the key without its companion is an
/// error.
const DEPENDENT_KEYS: &[(&str, &str)] = &[
    (KEY_SSL_CLIENT_KEY, KEY_SSL_CLIENT_CERT),
    (KEY_PROXY_PORT, KEY_PROXY_HOST),
    (KEY_PROXY_USER, KEY_PROXY_PASS),
    (KEY_PROXY_PASS, KEY_PROXY_USER),
    (KEY_BASIC_AUTH_USER, KEY_BASIC_AUTH_PASS),
    (KEY_BASIC_AUTH_PASS, KEY_BASIC_AUTH_USER),
];

/// Validates the shared importer settings of the flattened configuration.
pub fn validate_config(config: &PluginCallConfiguration) -> Result<()> {
    let flat = config.flatten();
    let mut messages = Vec::new();

    for key in BOOLEAN_KEYS {
        if let Some(value) = present(&flat, key) {
            if parse_boolean(value).is_none() {
                messages.push(format!(
                    "The configuration parameter <{}> may only be set to a boolean value, \
                     but is currently set to <{}>.",
                    key,
                    display_value(value)
                ));
            }
        }
    }

    for key in STRING_KEYS {
        if let Some(value) = present(&flat, key) {
            if !value.is_string() {
                messages.push(format!(
                    "The configuration parameter <{}> should be a string, but it was of type <{}>.",
                    key,
                    type_name(value)
                ));
            }
        }
    }

    for (key, companion) in DEPENDENT_KEYS {
        if present(&flat, key).is_some() && present(&flat, companion).is_none() {
            messages.push(format!(
                "The configuration parameter <{}> requires the <{}> parameter to also be set.",
                key, companion
            ));
        }
    }

    for key in POSITIVE_INTEGER_KEYS {
        if let Some(value) = present(&flat, key) {
            if !is_positive_integer(value) {
                messages.push(format!(
                    "The configuration parameter <{}> must be set to a positive integer, \
                     but is currently set to <{}>.",
                    key,
                    display_value(value)
                ));
            }
        }
    }

    if let Some(value) = present(&flat, KEY_MAX_SPEED) {
        if !is_positive_number(value) {
            messages.push(format!(
                "The configuration parameter <{}> must be set to a positive numerical value, \
                 but is currently set to <{}>.",
                KEY_MAX_SPEED,
                display_value(value)
            ));
        }
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidConfig { messages })
    }
}

fn present<'a>(flat: &'a ConfigMap, key: &str) -> Option<&'a Value> {
    flat.get(key).filter(|v| !v.is_null())
}

fn is_positive_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_u64().is_some_and(|n| n > 0),
        Value::String(s) => s.trim().parse::<u64>().is_ok_and(|n| n > 0),
        _ => false,
    }
}

fn is_positive_number(value: &Value) -> bool {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.is_some_and(|n| n.is_finite() && n > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo_config(value: Value) -> PluginCallConfiguration {
        let Value::Object(map) = value else {
            panic!("test config must be an object");
        };
        PluginCallConfiguration::new(ConfigMap::new(), map)
    }

    fn mentions(messages: &[String], needle: &str) -> bool {
        messages.iter().any(|m| m.contains(needle))
    }

    fn messages(config: &PluginCallConfiguration) -> Vec<String> {
        match validate_config(config) {
            Ok(()) => Vec::new(),
            Err(Error::InvalidConfig { messages }) => messages,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(validate_config(&PluginCallConfiguration::default()).is_ok());
    }

    #[test]
    fn test_valid_settings_pass() {
        let config = repo_config(json!({
            "ssl_validation": "true",
            "ssl_ca_cert": "-----BEGIN CERTIFICATE-----",
            "proxy_host": "proxy.example.com",
            "proxy_port": 3128,
            "proxy_username": "user",
            "proxy_password": "secret",
            "max_downloads": "4",
            "max_speed": 512.5,
        }));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let config = repo_config(json!({"max_speed": "fast", "ssl_ca_cert": 5}));
        let messages = messages(&config);

        assert_eq!(messages.len(), 2);
        assert!(mentions(&messages, "<ssl_ca_cert> should be a string"));
        assert!(mentions(&messages, "a positive numerical value"));
        assert!(mentions(&messages, "currently set to <fast>"));
    }

    #[test]
    fn test_boolean_settings() {
        let config = repo_config(json!({"ssl_validation": "maybe", "validate": false}));
        let messages = messages(&config);
        assert_eq!(messages.len(), 1);
        assert!(mentions(&messages, "<ssl_validation> may only be set to a boolean"));
    }

    #[test]
    fn test_positive_integers() {
        for bad in [json!(0), json!(-3), json!("many"), json!(1.5)] {
            let config = repo_config(json!({"max_downloads": bad}));
            let messages = messages(&config);
            assert_eq!(messages.len(), 1, "value should be rejected: {:?}", config);
            assert!(messages[0].contains("positive integer"));
        }
    }

    #[test]
    fn test_max_speed_rejects_non_positive() {
        for bad in [json!(0), json!(-1.0), json!("NaN"), json!(true)] {
            let config = repo_config(json!({"max_speed": bad}));
            assert_eq!(messages(&config).len(), 1);
        }
    }

    #[test]
    fn test_dependent_settings() {
        let config = repo_config(json!({
            "ssl_client_key": "key",
            "proxy_port": 8080,
            "basic_auth_password": "secret",
        }));
        let messages = messages(&config);

        assert_eq!(messages.len(), 3);
        assert!(mentions(&messages, "<ssl_client_key> requires the"));
        assert!(mentions(&messages, "<proxy_port> requires the"));
        assert!(mentions(&messages, "<basic_auth_password> requires the"));
        assert!(mentions(&messages, "<basic_auth_username> parameter"));
        assert!(mentions(&messages, "<proxy_host> parameter"));
    }

    #[test]
    fn test_layers_are_flattened() {
        let mut global = ConfigMap::new();
        global.insert(KEY_MAX_SPEED.to_string(), json!("fast"));
        let mut repo = ConfigMap::new();
        repo.insert(KEY_MAX_SPEED.to_string(), json!(100));

        let config = PluginCallConfiguration::new(global, repo);
        assert!(validate_config(&config).is_ok());
    }
}
