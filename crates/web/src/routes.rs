//! Routes de l'API web

use actix_web::{error, get, post, web, HttpRequest, HttpResponse, Responder};
use primered_core::{PrimerDesignRequest, PrimerDesigner};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::models::{AppState, ErrorResponse, HealthResponse};

/// Enregistre les routes de l'application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(design_primer)
        .service(health_check);
}

/// Configuration de l'extracteur JSON: erreurs au format `ErrorResponse`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req: &HttpRequest| {
            let details = err.to_string();
            let body = ErrorResponse::with_details("Corps JSON invalide".to_string(), details, 422);
            error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body))
                .into()
        })
}

/// Route de vivacité
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "Hello": "World" }))
}

/// Conception d'une paire d'amorces
#[post("/design-primer/")]
#[instrument(skip(data, request))]
pub async fn design_primer(
    data: web::Data<AppState>,
    request: web::Json<PrimerDesignRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Nouvelle requête de conception d'amorces");

    let response = data.service.design_primer(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Route pour la santé de l'API
#[get("/health")]
#[instrument(skip(data))]
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let designer = data.service.designer();

    let (status, engine_version, engine_error) = match designer.version().await {
        Ok(version) => ("healthy", Some(version), None),
        Err(e) => ("degraded", None, Some(e.to_string())),
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine: designer.describe(),
        engine_version,
        engine_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use primered_core::testing::CannedDesigner;
    use primered_core::{Primer3Config, Primer3Designer, PrimerDesignService, PrimerResponse};
    use std::sync::Arc;

    const TEMPLATE: &str = "GCTTGCATGCCTGCAGGTCGACTCTAGAGGATCCCCCTACATTTTAGCATCAGTGAGTACAGCATGCTTACTGGAAGAGAGGGTCATGCAACAGATTAGGAGGTAAGTTTGCAAAGGCAGGCTAAGGAGG";

    const OUTPUT: &str = "\
PRIMER_PAIR_NUM_RETURNED=1
PRIMER_INTERNAL_NUM_RETURNED=0
PRIMER_LEFT_0_SEQUENCE=CCTGCAGGTCGACTCTAGAG
PRIMER_LEFT_0=10,20
PRIMER_LEFT_0_TM=60.2
PRIMER_LEFT_0_GC_PERCENT=60.0
PRIMER_LEFT_0_PENALTY=0.2
PRIMER_RIGHT_0_SEQUENCE=CCTCCTTAGCCTGCCTTTGC
PRIMER_RIGHT_0=129,20
PRIMER_RIGHT_0_TM=61.0
PRIMER_RIGHT_0_GC_PERCENT=60.0
PRIMER_RIGHT_0_PENALTY=1.0
=
";

    fn state(output: &str) -> web::Data<AppState> {
        let designer = Arc::new(CannedDesigner::new(output));
        web::Data::new(AppState {
            service: PrimerDesignService::new(designer),
        })
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data(json_config(4096))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_root() {
        let app = app!(state(OUTPUT));
        let resp: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp, serde_json::json!({ "Hello": "World" }));
    }

    #[actix_web::test]
    async fn test_design_primer() {
        let app = app!(state(OUTPUT));
        let req = test::TestRequest::post()
            .uri("/design-primer/")
            .set_json(serde_json::json!({
                "sequence": TEMPLATE,
                "primer_length": 20,
                "gc_content": 55.0
            }))
            .to_request();

        let resp: PrimerResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.left_primer.start, 10);
        assert_eq!(resp.right_primer.sequence, "CCTCCTTAGCCTGCCTTTGC");
        assert!(resp.internal_primers.is_empty());
    }

    #[actix_web::test]
    async fn test_sequence_too_short() {
        let app = app!(state(OUTPUT));
        let req = test::TestRequest::post()
            .uri("/design-primer/")
            .set_json(serde_json::json!({
                "sequence": &TEMPLATE[..50],
                "primer_length": 30,
                "gc_content": 50.0
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, 400);
        assert!(body.details.unwrap().contains("50"));
    }

    #[actix_web::test]
    async fn test_malformed_body() {
        let app = app!(state(OUTPUT));
        let req = test::TestRequest::post()
            .uri("/design-primer/")
            .set_json(serde_json::json!({ "sequence": TEMPLATE }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_no_primers_found() {
        let app = app!(state("PRIMER_PAIR_NUM_RETURNED=0\nPRIMER_PAIR_EXPLAIN=considered 0, ok 0\n=\n"));
        let req = test::TestRequest::post()
            .uri("/design-primer/")
            .set_json(serde_json::json!({
                "sequence": TEMPLATE,
                "primer_length": 20,
                "gc_content": 50.0
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_health_degraded_without_engine() {
        let designer = Arc::new(Primer3Designer::new(Primer3Config {
            executable: "/nonexistent/primer3_core".into(),
            timeout_secs: 1,
        }));
        let state = web::Data::new(AppState {
            service: PrimerDesignService::new(designer),
        });
        let app = app!(state);

        let resp: HealthResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(resp.status, "degraded");
        assert_eq!(resp.engine, "/nonexistent/primer3_core");
        assert!(resp.engine_error.is_some());
    }
}
