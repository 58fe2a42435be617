use std::{fs, path::Path};

use dashboard_api::DEFAULT_PAGE_SIZE;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "coachctl.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_filter: String,
    pub page_size: usize,
    pub seed_sample_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            page_size: DEFAULT_PAGE_SIZE,
            seed_sample_data: true,
        }
    }
}

/// Defaults, then the TOML file (if readable), then environment overrides.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub(crate) fn apply_file(settings: &mut Settings, raw: &str) {
    let table = match raw.parse::<toml::Table>() {
        Ok(table) => table,
        Err(error) => {
            warn!(%error, "ignoring unparsable config file");
            return;
        }
    };

    if let Some(v) = table.get("log_filter").and_then(|v| v.as_str()) {
        settings.log_filter = v.to_string();
    }
    if let Some(v) = table.get("page_size").and_then(|v| v.as_integer()) {
        if let Ok(size) = usize::try_from(v) {
            if size > 0 {
                settings.page_size = size;
            }
        }
    }
    if let Some(v) = table.get("seed_sample_data").and_then(|v| v.as_bool()) {
        settings.seed_sample_data = v;
    }
}

pub(crate) fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("COACH_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    for key in ["COACH_PAGE_SIZE", "APP__PAGE_SIZE"] {
        if let Some(size) = lookup(key).and_then(|v| v.trim().parse::<usize>().ok()) {
            if size > 0 {
                settings.page_size = size;
            }
        }
    }

    for key in ["COACH_SEED", "APP__SEED"] {
        if let Some(seed) = lookup(key).and_then(|v| parse_bool(&v)) {
            settings.seed_sample_data = seed;
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
