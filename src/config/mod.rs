use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use crate::utils::date::WeekStart;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which repository adapter backs the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Embedded SQLite file
    #[default]
    Local,
    /// Hosted REST backend
    Remote,
}

/// Development builds substitute sample data when a load fails;
/// production builds report the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl Default for BuildMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub build_mode: BuildMode,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_location: Option<GeoPoint>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "default_colors")]
    pub colors: bool,
}

const REDACTED: &str = "***";

fn default_timeout_secs() -> u64 {
    30
}
fn default_user_id() -> String {
    "local".to_string()
}
fn default_recent_limit() -> usize {
    5
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            backend: Backend::default(),
            remote: RemoteConfig::default(),
            user_id: default_user_id(),
            access_token: None,
            week_start: WeekStart::default(),
            build_mode: BuildMode::default(),
            recent_limit: default_recent_limit(),
            home_location: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            colors: default_colors(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.fitlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fitlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fitlog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fitlog.sqlite")
    }

    /// Load configuration from the default file, or defaults if not found.
    /// Environment overrides are applied on top.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        cfg.apply_overrides(|key| env::var(key).ok());
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply the `FITLOG_*` overrides; `lookup` is the environment in
    /// production.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup("FITLOG_ACCESS_TOKEN") {
            self.access_token = Some(token);
        }
        if let Some(url) = lookup("FITLOG_REMOTE_URL") {
            self.remote.url = url;
        }
        if let Some(key) = lookup("FITLOG_REMOTE_KEY") {
            self.remote.api_key = key;
        }
        if let Some(user) = lookup("FITLOG_USER_ID") {
            self.user_id = user;
        }
    }

    /// Copy safe to print: secrets are masked.
    pub fn redacted(&self) -> Self {
        let mask = |s: &str| if s.is_empty() { String::new() } else { REDACTED.to_string() };
        let mut out = self.clone();
        out.access_token = self.access_token.as_deref().map(mask);
        out.remote.api_key = mask(&self.remote.api_key);
        out
    }

    /// Colors are on unless disabled in the file or through `NO_COLOR`.
    pub fn use_colors(&self) -> bool {
        self.colors && env::var_os("NO_COLOR").is_none()
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Create the config directory and, outside test mode, write the config
    /// file. An existing file is kept; only `--db` overrides its database.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let path = Self::config_file();
        let mut cfg = if is_test {
            Self::default()
        } else {
            Self::load_from(&path)?
        };
        if let Some(db) = custom_db {
            cfg.database = db;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            cfg.save(&path)?;
        }
        Ok(cfg)
    }

    /// Validate the fields the selected backend depends on.
    pub fn check(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::Config("user_id must not be empty".into()));
        }
        if self.backend == Backend::Remote && self.remote.url.trim().is_empty() {
            return Err(AppError::Config(
                "remote backend selected but remote.url is empty".into(),
            ));
        }
        if self.backend == Backend::Remote && self.remote.api_key.trim().is_empty() {
            return Err(AppError::Config(
                "remote backend selected but remote.api_key is empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.backend, Backend::Local);
        assert_eq!(cfg.user_id, "local");
        assert_eq!(cfg.week_start, WeekStart::Monday);
        assert_eq!(cfg.recent_limit, 5);
        assert_eq!(cfg.remote.timeout_secs, 30);
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn parses_remote_section() {
        let yaml = r#"
database: /tmp/x.sqlite
backend: remote
remote:
  url: https://example.supabase.co
  api_key: anon
week_start: sunday
build_mode: production
home_location:
  latitude: 45.0
  longitude: 9.0
"#;
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.backend, Backend::Remote);
        assert_eq!(cfg.remote.url, "https://example.supabase.co");
        assert_eq!(cfg.week_start, WeekStart::Sunday);
        assert_eq!(cfg.build_mode, BuildMode::Production);
        assert_eq!(cfg.home_location.map(|p| p.longitude), Some(9.0));
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn remote_without_url_is_rejected() {
        let cfg = Config::from_yaml("database: x\nbackend: remote\n").unwrap();
        assert!(matches!(cfg.check(), Err(AppError::Config(_))));
    }

    #[test]
    fn overrides_replace_file_values() {
        let yaml = r#"
database: x
user_id: from-file
access_token: file-token
remote:
  url: https://file.example
  api_key: file-key
"#;
        let mut cfg = Config::from_yaml(yaml).unwrap();
        cfg.apply_overrides(|key| match key {
            "FITLOG_ACCESS_TOKEN" => Some("env-token".into()),
            "FITLOG_REMOTE_URL" => Some("https://env.example".into()),
            "FITLOG_REMOTE_KEY" => Some("env-key".into()),
            "FITLOG_USER_ID" => Some("env-user".into()),
            _ => None,
        });
        assert_eq!(cfg.access_token.as_deref(), Some("env-token"));
        assert_eq!(cfg.remote.url, "https://env.example");
        assert_eq!(cfg.remote.api_key, "env-key");
        assert_eq!(cfg.user_id, "env-user");
    }

    #[test]
    fn unset_overrides_keep_file_values() {
        let mut cfg = Config::from_yaml("database: x\nuser_id: from-file\n").unwrap();
        cfg.apply_overrides(|_| None);
        assert_eq!(cfg.user_id, "from-file");
        assert_eq!(cfg.access_token, None);
        assert!(cfg.remote.url.is_empty());
    }

    #[test]
    fn redacted_masks_secrets_only() {
        let mut cfg = Config::default();
        cfg.access_token = Some("s3cr3t".into());
        cfg.remote.api_key = "anon-key".into();
        cfg.remote.url = "https://x.example".into();

        let yaml = cfg.redacted().to_yaml().unwrap();
        assert!(!yaml.contains("s3cr3t"));
        assert!(!yaml.contains("anon-key"));
        assert!(yaml.contains("https://x.example"));
        assert_eq!(cfg.access_token.as_deref(), Some("s3cr3t"));
    }

    #[test]
    fn yaml_round_trip_through_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("fitlog.conf");
        let cfg = Config {
            database: "/tmp/y.sqlite".into(),
            ..Config::default()
        };
        cfg.save(&path).unwrap();
        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.database, "/tmp/y.sqlite");
    }
}
