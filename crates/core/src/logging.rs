//! Initialisation du logging pour le serveur et la CLI

use tracing_subscriber::{fmt, EnvFilter};

/// Normalise un niveau de log; inconnu => `info`
pub fn normalize_level(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Initialise le système de logging
///
/// `RUST_LOG` l'emporte sur `level` lorsqu'elle est définie. `format` vaut
/// `json` ou `compact` (défaut).
pub fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(level)));

    let result = match format.to_lowercase().as_str() {
        "json" => fmt().json().with_env_filter(filter).try_init(),
        _ => fmt()
            .compact()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
    };

    // Déjà initialisé (tests, réutilisation): on garde l'abonné existant
    let _ = result;
}

/// Évalue une expression (éventuellement `.await`) et journalise sa durée
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $body:expr) => {{
        let started = std::time::Instant::now();
        tracing::debug!("Début de l'opération: {}", $name);
        let result = $body;
        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fin de l'opération: {}",
            $name
        );
        result
    }};
}
