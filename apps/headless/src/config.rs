use std::{collections::HashMap, fs, path::Path, path::PathBuf, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_url: Option<String>,
    pub data_path: Option<PathBuf>,
    pub log_filter: String,
    pub skip_unchanged: bool,
    pub jitter_seed: u64,
    pub fetch_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: None,
            data_path: None,
            log_filter: "info".into(),
            skip_unchanged: false,
            jitter_seed: 20_240_101,
            fetch_timeout_ms: 5_000,
        }
    }
}

impl Settings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Defaults, then `path` if it exists, then the process environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

/// The file is a flat table of string values, e.g. `skip_unchanged = "true"`.
/// A file that does not parse is ignored.
fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        tracing::warn!("ignoring unparsable settings file");
        return;
    };

    if let Some(v) = file_cfg.get("data_url") {
        settings.data_url = Some(v.clone());
    }
    if let Some(v) = file_cfg.get("data_path") {
        settings.data_path = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    if let Some(parsed) = file_cfg.get("skip_unchanged").and_then(|v| parse_flag(v)) {
        settings.skip_unchanged = parsed;
    }
    if let Some(Ok(parsed)) = file_cfg.get("jitter_seed").map(|v| v.parse::<u64>()) {
        settings.jitter_seed = parsed;
    }
    if let Some(Ok(parsed)) = file_cfg.get("fetch_timeout_ms").map(|v| v.parse::<u64>()) {
        settings.fetch_timeout_ms = parsed;
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DASHBOARD_DATA_URL") {
        settings.data_url = Some(v);
    }
    if let Some(v) = var("APP__DATA_URL") {
        settings.data_url = Some(v);
    }

    if let Some(v) = var("APP__DATA_PATH") {
        settings.data_path = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(parsed) = var("APP__SKIP_UNCHANGED").and_then(|v| parse_flag(&v)) {
        settings.skip_unchanged = parsed;
    }

    if let Some(v) = var("APP__JITTER_SEED") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.jitter_seed = parsed;
        }
    }

    if let Some(v) = var("APP__FETCH_TIMEOUT_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.fetch_timeout_ms = parsed;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
