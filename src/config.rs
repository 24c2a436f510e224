use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::FormulaWeights;

/// Environment variable naming the directory relative model paths resolve against
pub const BASE_DIR_VAR: &str = "SCORE_BASE_DIR";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Which prediction strategy the service runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Formula,
    Model,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionSettings {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            model_path: default_model_path(),
            weights: WeightsConfig::default(),
        }
    }
}

impl PredictionSettings {
    /// Model path, with relative paths joined onto `SCORE_BASE_DIR` when it is set
    pub fn resolved_model_path(&self) -> PathBuf {
        resolve_against(&self.model_path, std::env::var_os(BASE_DIR_VAR).map(PathBuf::from))
    }
}

fn resolve_against(path: &Path, base: Option<PathBuf>) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn default_model_path() -> PathBuf { PathBuf::from("models/student_score.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_study_hours_weight")]
    pub study_hours: f64,
    #[serde(default = "default_attendance_weight")]
    pub attendance: f64,
    #[serde(default = "default_participation_weight")]
    pub participation: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            study_hours: default_study_hours_weight(),
            attendance: default_attendance_weight(),
            participation: default_participation_weight(),
        }
    }
}

impl From<&WeightsConfig> for FormulaWeights {
    fn from(cfg: &WeightsConfig) -> Self {
        Self {
            study_hours: cfg.study_hours,
            attendance: cfg.attendance,
            participation: cfg.participation,
        }
    }
}

fn default_study_hours_weight() -> f64 { 2.0 }
fn default_attendance_weight() -> f64 { 0.5 }
fn default_participation_weight() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SCORE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCORE__PREDICTION__STRATEGY -> prediction.strategy
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SCORE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.study_hours, 2.0);
        assert_eq!(weights.attendance, 0.5);
        assert_eq!(weights.participation, 5.0);
        assert_eq!(FormulaWeights::from(&weights), FormulaWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                port = 9000

                [prediction]
                strategy = "model"
                model_path = "artifacts/linear.toml"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.prediction.strategy, Strategy::Model);
        assert_eq!(settings.prediction.model_path, PathBuf::from("artifacts/linear.toml"));
        assert_eq!(settings.prediction.weights.participation, 5.0);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_load_from_file_with_env_overrides() {
        let dir = std::env::temp_dir().join(format!("score-predict-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 9001

            [prediction]
            strategy = "formula"

            [prediction.weights]
            study_hours = 1.0
            "#,
        )
        .unwrap();

        std::env::set_var("SCORE__PREDICTION__STRATEGY", "model");
        std::env::set_var("SCORE__PREDICTION__WEIGHTS__STUDY_HOURS", "3.5");
        let settings = Settings::load_from(&path);
        std::env::remove_var("SCORE__PREDICTION__STRATEGY");
        std::env::remove_var("SCORE__PREDICTION__WEIGHTS__STUDY_HOURS");

        let settings = settings.unwrap();
        assert_eq!(settings.server.port, 9001);
        assert_eq!(settings.prediction.strategy, Strategy::Model);
        assert_eq!(settings.prediction.weights.study_hours, 3.5);
        assert_eq!(settings.prediction.weights.attendance, 0.5);
    }

    #[test]
    fn test_resolve_model_path() {
        let rel = Path::new("models/m.json");
        assert_eq!(resolve_against(rel, None), PathBuf::from("models/m.json"));
        assert_eq!(
            resolve_against(rel, Some(PathBuf::from("/srv/app"))),
            PathBuf::from("/srv/app/models/m.json")
        );
        assert_eq!(
            resolve_against(Path::new("/abs/m.json"), Some(PathBuf::from("/srv/app"))),
            PathBuf::from("/abs/m.json")
        );
    }
}
