//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 서비스 계층이 구분하는 실패 사유와 저장소 장애
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **AppResult**: `Result<T, AppError>` 별칭
//!
//! 의존성 주입은 전역 컨테이너 없이 생성자 인자로 명시적으로 전달합니다.
//!
//! ```rust,ignore
//! let persons_repo: Arc<dyn PersonsRepository> = Arc::new(MongoPersonsRepository::new(db));
//! let persons_service = PersonsService::new(persons_repo);
//! ```

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
