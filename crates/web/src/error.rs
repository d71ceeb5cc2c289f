//! Conversion des erreurs de conception en réponses HTTP

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use primered_core::PrimerError;
use std::fmt;

use crate::models::ErrorResponse;

/// Erreur renvoyée par les handlers
#[derive(Debug)]
pub struct ApiError(pub PrimerError);

impl From<PrimerError> for ApiError {
    fn from(err: PrimerError) -> Self {
        ApiError(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ApiError {
    fn label(&self) -> &'static str {
        match &self.0 {
            PrimerError::InfeasibleDesign { .. } => "Paramètres de conception infaisables",
            PrimerError::EmptySequence
            | PrimerError::InvalidBase { .. }
            | PrimerError::InvalidPrimerLength(_)
            | PrimerError::GcContentOutOfRange(_) => "Requête invalide",
            PrimerError::NoPrimersFound { .. } => "Aucune amorce trouvée",
            PrimerError::EngineUnavailable { .. } => "Moteur Primer3 indisponible",
            PrimerError::EngineTimeout(_) => "Délai Primer3 dépassé",
            PrimerError::Io(_) => "Erreur interne",
            _ => "Erreur du moteur Primer3",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            err if err.is_client_error() => StatusCode::BAD_REQUEST,
            PrimerError::NoPrimersFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PrimerError::EngineUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PrimerError::EngineTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            PrimerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Échec de la conception");
        } else {
            tracing::warn!(error = %self.0, "Requête rejetée");
        }

        HttpResponse::build(status).json(ErrorResponse::with_details(
            self.label().to_string(),
            self.0.to_string(),
            status.as_u16(),
        ))
    }
}
