use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        "log_filter = \"debug\"\npage_size = 25\nseed_sample_data = false\n",
    );
    assert_eq!(
        settings,
        Settings {
            log_filter: "debug".into(),
            page_size: 25,
            seed_sample_data: false,
        }
    );
}

#[test]
fn bad_file_keeps_defaults() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "page_size = [not toml");
    assert_eq!(settings, Settings::default());

    apply_file(&mut settings, "page_size = -3\nseed_sample_data = \"maybe\"");
    assert_eq!(settings, Settings::default());
}

#[test]
fn prefixed_env_wins_over_bare() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[
            ("COACH_LOG", "warn"),
            ("APP__LOG_FILTER", "store=debug"),
            ("COACH_PAGE_SIZE", "5"),
            ("APP__PAGE_SIZE", "7"),
            ("COACH_SEED", "off"),
        ]),
    );
    assert_eq!(settings.log_filter, "store=debug");
    assert_eq!(settings.page_size, 7);
    assert!(!settings.seed_sample_data);
}

#[test]
fn unparsable_env_is_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[("COACH_PAGE_SIZE", "ten"), ("APP__SEED", "sometimes")]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn loads_explicit_config_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "page_size = 3\n").expect("write config");

    let settings = load_settings(Some(path.as_path()));
    // env may override page size on a developer machine
    if std::env::var("COACH_PAGE_SIZE").is_err() && std::env::var("APP__PAGE_SIZE").is_err() {
        assert_eq!(settings.page_size, 3);
    }
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = load_settings(Some(dir.path().join("absent.toml").as_path()));
    assert!(settings.page_size > 0);
}
