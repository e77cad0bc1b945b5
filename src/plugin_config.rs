//! # Plugin Call Configuration
//!
//! The server hands importers their configuration as three layers:
//!
//! - the plugin-global config (e.g. proxy or connection settings shared by
//!   every repository),
//! - the repository plugin config, set when the importer was attached to the
//!   repository,
//! - an optional override config supplied with a single call.
//!
//! Lookups walk the layers from most to least specific. An explicit `null`
//! in a more specific layer hides the value below it.
//!
//! ```
//! use pulp_puppet::plugin_config::{ConfigMap, PluginCallConfiguration};
//! use serde_json::json;
//!
//! let mut global = ConfigMap::new();
//! global.insert("max_speed".into(), json!(100));
//! let mut repo = ConfigMap::new();
//! repo.insert("max_speed".into(), json!(50));
//!
//! let config = PluginCallConfiguration::new(global, repo);
//! assert_eq!(config.get("max_speed"), Some(&json!(50)));
//! ```

use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};

/// One configuration layer.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Layered, read-only configuration for a single plugin call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginCallConfiguration {
    plugin_config: ConfigMap,
    repo_plugin_config: ConfigMap,
    override_config: ConfigMap,
}

impl PluginCallConfiguration {
    pub fn new(plugin_config: ConfigMap, repo_plugin_config: ConfigMap) -> Self {
        Self {
            plugin_config,
            repo_plugin_config,
            override_config: ConfigMap::new(),
        }
    }

    /// Adds the per-call override layer.
    pub fn with_override(mut self, override_config: ConfigMap) -> Self {
        self.override_config = override_config;
        self
    }

    /// Returns the value for `key` from the most specific layer defining it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let layers = [
            &self.override_config,
            &self.repo_plugin_config,
            &self.plugin_config,
        ];
        let value = layers.into_iter().find_map(|layer| layer.get(key))?;

        if value.is_null() {
            None
        } else {
            Some(value)
        }
    }

    /// Returns the value for `key` interpreted as a boolean.
    ///
    /// Accepts JSON booleans and the strings `true`/`false` in any case.
    /// Any other value is an [`Error::ValueType`].
    pub fn get_boolean(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => match parse_boolean(value) {
                Some(flag) => Ok(Some(flag)),
                None => Err(Error::ValueType {
                    key: key.to_string(),
                    expected: "boolean".to_string(),
                    value: display_value(value),
                }),
            },
        }
    }

    /// Merges the layers into one map, more specific layers winning.
    pub fn flatten(&self) -> ConfigMap {
        let mut flat = self.plugin_config.clone();
        for layer in [&self.repo_plugin_config, &self.override_config] {
            for (key, value) in layer {
                flat.insert(key.clone(), value.clone());
            }
        }
        flat
    }

    /// Every key defined in any layer.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.plugin_config
            .keys()
            .chain(self.repo_plugin_config.keys())
            .chain(self.override_config.keys())
            .map(String::as_str)
            .collect()
    }
}

/// Interprets a configuration value as a boolean flag.
pub fn parse_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Renders a value for messages; strings are shown without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Name of a value's type as used in messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Parses one configuration layer from YAML or JSON text.
///
/// An empty document is an empty layer.
pub fn parse_layer(content: &str) -> Result<ConfigMap> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(ConfigMap::new()),
        other => {
            let found = type_name(&other);
            Err(Error::ConfigParse {
                message: format!("expected a mapping of options, found a {found}"),
                hint: Some("Write the layer as `option: value` pairs".to_string()),
            })
        }
    }
}

/// Loads one configuration layer from a YAML or JSON file.
pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
    let content = std::fs::read_to_string(path)?;
    parse_layer(&content)
}

const OVERRIDE_HINT: &str =
    "Use the form KEY=VALUE, e.g. --override feed=http://forge.example.com";

/// Parses a `key=value` override. The value is read as a YAML scalar or flow
/// collection, so `queries=[httpd, mysql]` yields a list and an empty value
/// yields `null`.
pub fn parse_override(spec: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = spec.split_once('=') else {
        return Err(Error::ConfigParse {
            message: format!("override '{}' is missing a value", spec),
            hint: Some(OVERRIDE_HINT.to_string()),
        });
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::ConfigParse {
            message: format!("override '{}' has an empty key", spec),
            hint: None,
        });
    }

    let value = serde_yaml::from_str::<Value>(raw)?;
    Ok((key.to_string(), value))
}
