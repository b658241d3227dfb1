//! # Configuration Module
//!
//! 환경 변수 기반 설정을 제공합니다. `PROFILE`에 따라 `main`이 `.env.dev` /
//! `.env.prod`를 먼저 로드하므로, 여기서는 `std::env`만 읽습니다.
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | 실행 환경 |
//! | `HOST` / `PORT` / `WORKERS` | `127.0.0.1` / `8080` / `4` | HTTP 서버 |
//! | `STORAGE_BACKEND` | 개발/테스트 `memory`, 그 외 `mongodb` | 저장소 |
//! | `MONGODB_URI` / `DATABASE_NAME` | `mongodb://localhost:27017` / `persons_directory` | MongoDB |
//! | `SEED_DATA_PATH` | 없음 | 시드 JSON 경로 |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` | 요청 제한 |
//! | `CORS_ALLOWED_ORIGINS` | localhost 3000/8080 | 쉼표 구분 |

pub mod data_config;

pub use data_config::*;
