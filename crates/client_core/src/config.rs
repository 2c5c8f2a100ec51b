use std::{collections::HashMap, fs, path::Path, time::Duration};

use shared::protocol::default_endpoint;
use tracing::warn;
use url::Url;

use crate::pipeline::NamePolicy;

pub const SETTINGS_FILE: &str = "item_list.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: String,
    pub request_timeout_secs: u64,
    pub name_policy: NamePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            name_policy: NamePolicy::default(),
        }
    }
}

impl Settings {
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.endpoint_url.trim())
    }

    /// Command-line values win over file and environment settings.
    pub fn with_overrides(
        mut self,
        endpoint_url: Option<String>,
        request_timeout_secs: Option<u64>,
        name_policy: Option<NamePolicy>,
    ) -> Self {
        if let Some(v) = endpoint_url {
            self.endpoint_url = v;
        }
        if let Some(v) = request_timeout_secs {
            self.request_timeout_secs = v;
        }
        if let Some(v) = name_policy {
            self.name_policy = v;
        }
        self
    }

    /// Zero is treated as one second; reqwest has no "no timeout" sentinel.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Defaults, then `item_list.toml` in the working directory, then the environment.
pub fn load_settings() -> Settings {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_settings_from(Path::new(SETTINGS_FILE), &env)
}

pub fn load_settings_from(file: &Path, env: &HashMap<String, String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("endpoint_url").and_then(toml::Value::as_str) {
                    settings.endpoint_url = v.to_string();
                }
                if let Some(v) = file_cfg
                    .get("request_timeout_secs")
                    .and_then(toml::Value::as_integer)
                {
                    match u64::try_from(v) {
                        Ok(secs) => settings.request_timeout_secs = secs,
                        Err(_) => warn!(value = v, "ignoring negative request_timeout_secs"),
                    }
                }
                if let Some(v) = file_cfg.get("name_policy").and_then(toml::Value::as_str) {
                    set_name_policy(&mut settings, v);
                }
            }
            Err(err) => warn!(path = %file.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    if let Some(v) = env.get("ITEM_LIST_ENDPOINT") {
        settings.endpoint_url = v.clone();
    }
    if let Some(v) = env.get("APP__ENDPOINT_URL") {
        settings.endpoint_url = v.clone();
    }

    if let Some(v) = env.get("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(err) => warn!(value = %v, "ignoring invalid APP__REQUEST_TIMEOUT_SECS: {err}"),
        }
    }

    if let Some(v) = env.get("APP__NAME_POLICY") {
        set_name_policy(&mut settings, v);
    }

    settings
}

fn set_name_policy(settings: &mut Settings, raw: &str) {
    match raw.parse::<NamePolicy>() {
        Ok(policy) => settings.name_policy = policy,
        Err(err) => warn!("{err}"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
