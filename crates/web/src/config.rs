//! Configuration du serveur web

use primered_core::{EngineSettings, Primer3Config};
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration du serveur
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Taille maximale d'un corps JSON
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: 4,
            json_limit: 1024 * 1024, // 1MB
        }
    }
}

/// Configuration de l'exécutable Primer3
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Primer3Section {
    pub executable: PathBuf,
    pub timeout_secs: u64,
    pub thermodynamic_parameters_path: Option<String>,
}

impl Default for Primer3Section {
    fn default() -> Self {
        let engine = Primer3Config::default();
        Self {
            executable: engine.executable,
            timeout_secs: engine.timeout_secs,
            thermodynamic_parameters_path: None,
        }
    }
}

impl Primer3Section {
    pub fn engine_config(&self) -> Primer3Config {
        Primer3Config {
            executable: self.executable.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            thermodynamic_parameters_path: self.thermodynamic_parameters_path.clone(),
        }
    }
}

/// Configuration CORS
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// `*` autorise toutes les origines
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://frontend-service".to_string(),
                "http://primered.shane-schroeder.com".to_string(),
                "https://primered.shane-schroeder.com".to_string(),
                "*".to_string(),
            ],
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub primer3: Primer3Section,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge la configuration: fichier optionnel puis variables `PRIMERED__*`
    ///
    /// Exemple: `PRIMERED__PRIMER3__EXECUTABLE=/usr/bin/primer3_core`.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PRIMERED")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
