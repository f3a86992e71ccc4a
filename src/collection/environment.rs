use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^{}]+)\}\}").unwrap();
}

/// Postman environment export. Only `values` matters to the viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentFile {
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<EnvEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvEntry {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl EnvironmentFile {
    /// Replaces every `{{key}}` occurrence with the value of an enabled
    /// entry. Disabled entries do not participate.
    pub fn apply(&self, input: &str) -> String {
        let mut output = input.to_owned();
        for entry in self.values.iter().filter(|entry| entry.enabled) {
            let key = format!("{{{{{}}}}}", entry.key);
            output = output.replace(&key, &entry.value);
        }
        output
    }
}

/// Substitutes `value` through `env` (when present) and records any keys that
/// remain unresolved afterwards.
pub fn substitute(
    env: Option<&EnvironmentFile>,
    value: String,
    unresolved: &mut BTreeSet<String>,
) -> String {
    let output = match env {
        Some(env) => env.apply(&value),
        None => value,
    };
    for capture in PLACEHOLDER.captures_iter(&output) {
        unresolved.insert(capture[1].to_owned());
    }
    output
}
