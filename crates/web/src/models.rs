//! Modèles de données pour l'API web

use primered_core::PrimerDesignService;
use serde::{Deserialize, Serialize};

/// État global de l'application
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: PrimerDesignService,
}

/// Réponse d'erreur standard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
    pub code: u16,
}

impl ErrorResponse {
    pub fn with_details(error: String, details: String, code: u16) -> Self {
        Self {
            error,
            details: Some(details),
            code,
        }
    }
}

/// Réponse de /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_error: Option<String>,
}
