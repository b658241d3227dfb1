//! # Application Error Handling System
//!
//! 인명부 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 서비스 계층이 구분하는 실패 사유(인자 누락, 검증 실패, 이름 중복, 잘못된 ID)와
//! 저장소 계층의 장애를 하나의 열거형으로 표현하고, `actix_web::ResponseError`
//! 구현을 통해 일관된 JSON 에러 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! ### 1. 요청 계층 에러 (서비스가 저장소 호출 전에 동기적으로 발생)
//! - `ArgumentNullError`: 요청 객체 또는 필수 필드 자체가 없음
//! - `ValidationError`: 필드 제약(길이, 필수, 패턴, 이메일 형식) 위반
//!
//! ### 2. 비즈니스 계층 에러
//! - `DuplicateNameError`: 이름 유일성 규칙 위반 (Country.name, Person.name)
//! - `InvalidIdError`: 수정 대상 ID에 해당하는 레코드가 없음
//! - `NotFound`: 핸들러에서 조회 결과가 없음을 HTTP 404로 표현할 때 사용
//!
//! ### 3. 인프라 계층 에러
//! - `DatabaseError`: 저장소 장애. 서비스는 변환하거나 재시도하지 않고 그대로 전파
//! - `InternalError`: 예상하지 못한 시스템 오류
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ArgumentNullError` | 400 Bad Request |
//! | `ValidationError` | 400 Bad Request |
//! | `DuplicateNameError` | 409 Conflict |
//! | `InvalidIdError` | 404 Not Found |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! impl CountriesService {
//!     pub async fn add_country(&self, request: Option<CountryAddRequest>) -> AppResult<CountryResponse> {
//!         let request = request.ok_or_else(|| {
//!             AppError::ArgumentNullError("'CountryAddRequest' object is null".to_string())
//!         })?;
//!
//!         if self.countries_repo.get_country_by_name(&name).await?.is_some() {
//!             return Err(AppError::DuplicateNameError("Given country name already exists".to_string()));
//!         }
//!         // ...
//!     }
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 반환하면 그대로 HTTP 응답이 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 인자 누락 에러
    ///
    /// 요청 객체가 없거나, 요청의 필수 필드(예: `name`)가 비어 있을 때 발생합니다.
    /// 항상 저장소 호출 이전에 발생하며 재시도 대상이 아닙니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let request = request.ok_or_else(|| {
    ///     AppError::ArgumentNullError("'PersonAddRequest' object is null".to_string())
    /// })?;
    /// ```
    #[error("Argument null error: {0}")]
    ArgumentNullError(String),

    /// 입력값 검증 에러
    ///
    /// 선언된 필드 제약 조건을 만족하지 않을 때 발생합니다.
    /// 여러 제약이 동시에 실패해도 첫 번째 위반 메시지 하나만 담습니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 이름 중복 에러
    ///
    /// 이미 같은 이름을 가진 국가나 인물이 저장되어 있을 때 발생합니다.
    /// 비교는 대소문자를 구분하는 완전 일치입니다.
    #[error("Duplicate name error: {0}")]
    DuplicateNameError(String),

    /// 잘못된 ID 에러
    ///
    /// 수정 요청의 ID에 해당하는 인물이 없을 때 발생합니다.
    /// 단건 조회와 삭제는 이 경우를 에러가 아닌 "없음" 결과로 다룹니다.
    #[error("Invalid id error: {0}")]
    InvalidIdError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 실패, 외래 키/유니크 제약 위반 등 저장소 계층의 장애입니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&person).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그에 남길 오류 종류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ArgumentNullError(_) => "ArgumentNullError",
            AppError::ValidationError(_) => "ValidationError",
            AppError::DuplicateNameError(_) => "DuplicateNameError",
            AppError::InvalidIdError(_) => "InvalidIdError",
            AppError::NotFound(_) => "NotFound",
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ArgumentNullError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateNameError(_) => StatusCode::CONFLICT,
            AppError::InvalidIdError(_) => StatusCode::NOT_FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// use crate::core::errors::AppResult;
///
/// async fn get_all_countries(&self) -> AppResult<Vec<CountryResponse>> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("Failed to read seed file {}", path))?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_argument_null_error_response() {
        let error = AppError::ArgumentNullError("'PersonAddRequest' object is null".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Person 'Email' can't be empty".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_name_error_response() {
        let error = AppError::DuplicateNameError("Given country name already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_id_error_response() {
        let error = AppError::InvalidIdError("Given person id doesn't exist".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message_carries_kind_prefix() {
        let error = AppError::DuplicateNameError("Norway".to_string());

        assert_eq!(error.to_string(), "Duplicate name error: Norway");
    }

    #[test]
    fn test_kind_names_variant() {
        assert_eq!(AppError::InvalidIdError("x".to_string()).kind(), "InvalidIdError");
        assert_eq!(AppError::DatabaseError("x".to_string()).kind(), "DatabaseError");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
