//! 인물 디렉터리 서비스 메인 애플리케이션
//!
//! 설정을 로드하고, 저장소 백엔드(MongoDB 또는 인메모리)를 준비한 뒤
//! 서비스를 조립해 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use persons_directory::config::{CorsConfig, RateLimitConfig, SeedConfig, ServerConfig, StorageBackend};
use persons_directory::core::errors::AppResult;
use persons_directory::db::seed::{apply_seed, load_seed_file};
use persons_directory::db::Database;
use persons_directory::middlewares::ErrorLoggingMiddleware;
use persons_directory::repositories::countries::MongoCountriesRepository;
use persons_directory::repositories::memory::{MemoryCountriesRepository, MemoryPersonsRepository, MemoryStore};
use persons_directory::repositories::persons::MongoPersonsRepository;
use persons_directory::repositories::{CountriesRepository, PersonsRepository};
use persons_directory::routes::configure_all_routes;
use persons_directory::services::{CountriesService, PersonsService};
use persons_directory::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_seed_loaded, print_step_complete,
    print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 인물 디렉터리 서비스 시작중...");
    print_boxed_title("Persons Directory");

    let backend = StorageBackend::current();
    let (countries_repo, persons_repo) = initialize_repositories(backend)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    load_seed_data(&countries_repo, &persons_repo)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    print_step_start(3, "Assembling services");
    let countries_service = Arc::new(CountriesService::new(countries_repo.clone()));
    let persons_service = Arc::new(PersonsService::new(persons_repo.clone()));
    print_step_complete(3, "Services assembled", 2);

    let countries = countries_repo.count().await.unwrap_or_else(|e| {
        warn!("국가 수 조회 실패, 0으로 표시합니다: {}", e);
        0
    });
    let persons = persons_repo.count().await.unwrap_or_else(|e| {
        warn!("인물 수 조회 실패, 0으로 표시합니다: {}", e);
        0
    });
    print_final_summary(&backend.to_string(), countries, persons);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(countries_service, persons_service).await
}

/// 저장소 백엔드에 맞는 리포지토리 구현을 생성합니다
///
/// MongoDB 백엔드는 연결 확인 후 unique 인덱스를 생성하고,
/// 인메모리 백엔드는 두 리포지토리가 하나의 `MemoryStore`를 공유합니다.
async fn initialize_repositories(
    backend: StorageBackend,
) -> AppResult<(Arc<dyn CountriesRepository>, Arc<dyn PersonsRepository>)> {
    print_step_start(1, &format!("Connecting storage backend ({})", backend));

    let repositories: (Arc<dyn CountriesRepository>, Arc<dyn PersonsRepository>) = match backend {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);
            print_sub_task("MongoDB", database.database_name());

            let countries = MongoCountriesRepository::new(database.clone());
            let persons = MongoPersonsRepository::new(database);
            countries.create_indexes().await?;
            persons.create_indexes().await?;
            print_sub_task("Indexes", "OK");

            (Arc::new(countries), Arc::new(persons))
        }
        StorageBackend::Memory => {
            let store = Arc::new(MemoryStore::new());
            print_sub_task("MemoryStore", "OK");

            (
                Arc::new(MemoryCountriesRepository::new(store.clone())),
                Arc::new(MemoryPersonsRepository::new(store)),
            )
        }
    };

    print_step_complete(1, "Repositories ready", 2);
    Ok(repositories)
}

/// `SEED_DATA_PATH`가 설정된 경우 시드 데이터를 적재합니다
async fn load_seed_data(
    countries_repo: &Arc<dyn CountriesRepository>,
    persons_repo: &Arc<dyn PersonsRepository>,
) -> AppResult<()> {
    print_step_start(2, "Loading seed data");

    let Some(path) = SeedConfig::data_path() else {
        print_sub_task("Seed", "SEED_DATA_PATH not set, skipped");
        print_step_complete(2, "Seed data skipped", 0);
        return Ok(());
    };

    let data = load_seed_file(&path)?;
    let summary = apply_seed(data, countries_repo, persons_repo).await?;

    print_seed_loaded("Countries", summary.countries);
    print_seed_loaded("Persons", summary.persons);
    print_step_complete(2, "Seed data applied", summary.countries + summary.persons);

    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청 제한, CORS, 요청 로깅, 오류 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    countries_service: Arc<CountriesService>,
    persons_service: Arc<PersonsService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/v1/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let countries_data = web::Data::from(countries_service);
    let persons_data = web::Data::from(persons_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(ErrorLoggingMiddleware)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(countries_data.clone())
            .app_data(persons_data.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=persons_directory::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`(쉼표 구분)에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
