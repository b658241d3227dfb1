//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 백엔드, 시드 데이터, 요청 제한, CORS 설정을
//! 환경 변수에서 읽습니다. 각 설정은 상태 없는 구조체의 연관 함수로 제공되며,
//! 호출 시점의 환경 변수를 반영합니다.

use std::env;
use std::fmt;
use log::warn;

/// 애플리케이션 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 결정되며, 값이 없거나 알 수 없으면 `Production`입니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 영속 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    /// `STORAGE_BACKEND` 값(`mongodb` | `memory`)을 따르고, 없으면 환경별 기본값을 사용합니다.
    pub fn current() -> Self {
        match env::var("STORAGE_BACKEND") {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                warn!("알 수 없는 STORAGE_BACKEND 값: {}. 환경 기본값 사용", value);
                Self::for_env(&Environment::current())
            }),
            Err(_) => Self::for_env(&Environment::current()),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Some(StorageBackend::MongoDb),
            "memory" | "in-memory" | "inmemory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }

    pub fn for_env(env: &Environment) -> Self {
        match env {
            Environment::Development | Environment::Test => StorageBackend::Memory,
            Environment::Staging | Environment::Production => StorageBackend::MongoDb,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::MongoDb => f.write_str("mongodb"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "persons_directory".to_string())
    }
}

/// 시작 시 적재할 시드 데이터 설정
pub struct SeedConfig;

impl SeedConfig {
    /// `SEED_DATA_PATH`가 지정된 경우에만 경로를 반환합니다.
    pub fn data_path() -> Option<String> {
        env::var("SEED_DATA_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|workers: &usize| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 속도 제한 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본 100), `RATE_LIMIT_BURST_SIZE` (기본 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                warn!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                warn!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_for_each_environment() {
        assert_eq!(
            StorageBackend::for_env(&Environment::Development),
            StorageBackend::Memory
        );
        assert_eq!(StorageBackend::for_env(&Environment::Test), StorageBackend::Memory);
        assert_eq!(
            StorageBackend::for_env(&Environment::Staging),
            StorageBackend::MongoDb
        );
        assert_eq!(
            StorageBackend::for_env(&Environment::Production),
            StorageBackend::MongoDb
        );
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(StorageBackend::parse("MongoDB"), Some(StorageBackend::MongoDb));
        assert_eq!(StorageBackend::parse(" memory "), Some(StorageBackend::Memory));
        assert_eq!(StorageBackend::parse("postgres"), None);
        assert_eq!(StorageBackend::Memory.to_string(), "memory");
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = CorsConfig::parse_origins("http://a.test, ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }
}
