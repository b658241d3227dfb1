//! 오류 로깅 미들웨어
//!
//! 핸들러나 추출기가 오류로 끝난 요청을 기록합니다. 응답은 바꾸지 않으며,
//! 클라이언트에게는 [`AppError`](crate::core::errors::AppError)의
//! `ResponseError` 구현이 만든 본문이 그대로 전달됩니다.
//!
//! - 4xx: `warn!`
//! - 5xx: `error!`
//!
//! # 예제
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(ErrorLoggingMiddleware)
//!     .configure(configure_all_routes)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use crate::middlewares::error_logging_inner::ErrorLoggingMiddlewareService;

#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorLoggingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorLoggingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ErrorLoggingMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorLoggingMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::core::errors::AppError;

    async fn failing() -> Result<HttpResponse, AppError> {
        Err(AppError::DuplicateNameError("Norway".to_string()))
    }

    async fn succeeding() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_error_response_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorLoggingMiddleware)
                .route("/fail", web::get().to(failing))
                .route("/ok", web::get().to(succeeding)),
        )
        .await;

        let req = test::TestRequest::get().uri("/fail").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Duplicate name error: Norway");

        let req = test::TestRequest::get().uri("/ok").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
