//! 계정 서비스 메인 애플리케이션
//!
//! 설정을 읽어 `AppContext`를 구성하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use account_service_backend::config::{DatabaseConfig, MailConfig, ServerConfig, StoreBackend};
use account_service_backend::core::context::AppContext;
use account_service_backend::core::errors::AppError;
use account_service_backend::db::Database;
use account_service_backend::repositories::accounts::{
    AccountStore, InMemoryAccountStore, MongoAccountStore,
};
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::accounts::AccountService;
use account_service_backend::services::auth::{PasswordHasher, TokenIssuer};
use account_service_backend::services::notifications::{LogNotifier, Notifier, SmtpMailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let port = ServerConfig::port();
    let context = build_context(port).await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(AccountService::new(context), port).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: AccountService, port: u16) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), port);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let service = web::Data::new(service);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 설정값으로 `AppContext`를 구성합니다
///
/// 서명 키가 없으면 저장소 연결 전에 실패합니다.
async fn build_context(port: u16) -> Result<AppContext, AppError> {
    let tokens = TokenIssuer::from_config()?;
    let hasher = PasswordHasher::from_config();
    info!("🔐 bcrypt cost: {}", hasher.cost());

    let store = initialize_store().await?;
    let notifier = initialize_notifier()?;
    let base_url = ServerConfig::public_base_url(port);
    info!("🔗 확인 링크 기본 주소: {}", base_url);

    Ok(AppContext::new(store, hasher, tokens, notifier, base_url))
}

/// `ACCOUNT_STORE` 설정에 따라 계정 저장소를 초기화합니다
async fn initialize_store() -> Result<Arc<dyn AccountStore>, AppError> {
    match StoreBackend::current() {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
            let store = MongoAccountStore::new(&database.get_database());
            store.create_indexes().await?;

            info!("✅ accounts 인덱스 준비 완료 ({})", database.database_name());
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용: 재시작하면 모든 계정이 사라집니다");
            Ok(Arc::new(InMemoryAccountStore::new()))
        }
    }
}

/// 메일 자격 증명이 있으면 SMTP 메일러를, 없으면 로그 알림기를 사용합니다
fn initialize_notifier() -> Result<Arc<dyn Notifier>, AppError> {
    match MailConfig::from_env() {
        Some(config) => {
            info!("📧 SMTP 릴레이 사용: {}:{} ({:?})", config.host, config.port, config.security);
            Ok(Arc::new(SmtpMailer::new(&config)?))
        }
        None => {
            warn!("⚠️ EMAIL_USER/EMAIL_PASSWORD 미설정: 확인 링크를 로그로만 남깁니다");
            Ok(Arc::new(LogNotifier))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    eprintln!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => if let Err(e) = dotenv::from_filename(".env.prod") {
            eprintln!(".env.prod 파일 로드 실패: {}", e);
        },
        "dev" => if let Err(e) = dotenv::from_filename(".env.dev") {
            eprintln!(".env.dev 파일 로드 실패: {}", e);
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버 주소를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5000")
        .allowed_origin("http://127.0.0.1:5000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
