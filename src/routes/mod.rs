//! # Routes Module
//!
//! 모든 HTTP 라우트와 추출기(extractor) 설정을 등록합니다.
//!
//! 추출 실패(잘못된 JSON, UUID가 아닌 경로 ID, 잘못된 쿼리)는 모두
//! `AppError::ValidationError`로 바뀌어 `400 {"error": "..."}`로 응답합니다.

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_country_routes(cfg);
    configure_person_routes(cfg);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 경로 값: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리: {}", err)).into()
    }));
}

fn configure_country_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/countries")
            .service(handlers::countries::list_countries)
            .service(handlers::countries::create_country)
            .service(handlers::countries::get_country)
    );
}

fn configure_person_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/persons")
            .service(handlers::persons::list_persons)
            // `/{person_id}`보다 먼저 등록
            .service(handlers::persons::list_search_fields)
            .service(handlers::persons::create_person)
            .service(handlers::persons::get_person)
            .service(handlers::persons::update_person)
            .service(handlers::persons::delete_person)
    );
}

#[actix_web::get("/api/v1/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "persons_directory",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "persons_directory");
    }
}
