use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::middleware::{self, TrailingSlash};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use expense_tracker_api::config::{
    DatabaseConfig, JwtSettings, PasswordHasherSettings, RateLimitConfig, ServerConfig,
};
use expense_tracker_api::db::Database;
use expense_tracker_api::middlewares::JwtAuthentication;
use expense_tracker_api::services::auth::{PasswordHasher, TokenService};
use expense_tracker_api::startup::{AppState, build_dispatcher, configure_app, configure_cors};
use expense_tracker_api::utils::display_terminal::{
    print_pipeline_summary, print_step_complete, print_step_start,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 지출 관리 API 시작중...");

    let server_config = ServerConfig::from_env();
    let jwt_settings = Arc::new(JwtSettings::from_env());
    let hasher = PasswordHasher::new(PasswordHasherSettings::from_env());
    let tokens = Arc::new(TokenService::new(jwt_settings));

    print_step_start(1, "데이터베이스 연결");
    let database = Database::connect(&DatabaseConfig::from_env())
        .await
        .map_err(|e| {
            error!("데이터베이스 연결 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;
    print_step_complete(1, "데이터베이스 연결", 1);

    print_step_start(2, "요청 파이프라인 구성");
    let dispatcher = build_dispatcher(tokens.as_ref().clone(), hasher).map_err(|e| {
        error!("디스패처 구성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    print_step_complete(2, "요청 파이프라인 구성", dispatcher.request_types().len());
    print_pipeline_summary(&dispatcher);

    let state = web::Data::new(AppState::new(Arc::new(dispatcher), database));

    start_http_server(server_config, state, tokens).await
}

async fn start_http_server(
    server_config: ServerConfig,
    state: web::Data<AppState>,
    tokens: Arc<TokenService>,
) -> std::io::Result<()> {
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/swagger-ui/", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    HttpServer::new(move || {
        // 마지막에 wrap한 미들웨어가 가장 먼저 실행됩니다.
        // Governor의 내부 서비스 future는 Unpin이어야 하므로 가장 안쪽에 둡니다.
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(JwtAuthentication::new(tokens.clone()))
            .wrap(middleware::NormalizePath::new(TrailingSlash::MergeOnly))
            .wrap(middleware::Logger::default())
            .wrap(configure_cors())
            .configure(configure_app(state.clone()))
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

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

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
