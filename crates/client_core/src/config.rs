use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::warn;

pub const CONFIG_FILE: &str = "needhi.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 120;

const FILE_KEYS: [&str; 4] = [
    "api_url",
    "request_timeout_secs",
    "upload_timeout_secs",
    "download_dir",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub upload_timeout_secs: u64,
    pub download_dir: Option<PathBuf>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            upload_timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
            download_dir: None,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    /// Directory generated PDFs are written to: the configured one, else the
    /// user's download folder, else the working directory.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Some(Path::new(CONFIG_FILE)), |name| std::env::var(name).ok())
}

/// Layers defaults, then the optional toml file, then environment values.
/// Blank values are skipped.
pub fn load_settings_from(
    config_file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(raw) = config_file.and_then(|path| fs::read_to_string(path).ok()) {
        match raw.parse::<toml::Table>() {
            Ok(file_cfg) => {
                for key in FILE_KEYS {
                    apply_value(&mut settings, key, file_cfg.get(key).map(toml_scalar));
                }
            }
            Err(err) => warn!("ignoring malformed {CONFIG_FILE}: {err}"),
        }
    }

    apply_value(&mut settings, "api_url", env("NEEDHI_API_URL"));
    apply_value(&mut settings, "api_url", env("APP__API_URL"));
    apply_value(
        &mut settings,
        "request_timeout_secs",
        env("APP__REQUEST_TIMEOUT_SECS"),
    );
    apply_value(
        &mut settings,
        "upload_timeout_secs",
        env("APP__UPLOAD_TIMEOUT_SECS"),
    );
    apply_value(&mut settings, "download_dir", env("NEEDHI_DOWNLOAD_DIR"));

    settings
}

fn toml_scalar(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn apply_value(settings: &mut ClientSettings, key: &str, value: Option<String>) {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return;
    };

    match key {
        "api_url" => settings.api_url = value,
        "download_dir" => settings.download_dir = Some(PathBuf::from(value)),
        "request_timeout_secs" | "upload_timeout_secs" => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => {
                if key == "request_timeout_secs" {
                    settings.request_timeout_secs = secs;
                } else {
                    settings.upload_timeout_secs = secs;
                }
            }
            _ => warn!(key, value = %value, "ignoring invalid timeout setting"),
        },
        _ => {}
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
