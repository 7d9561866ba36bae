//! 시세 게이트웨이 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 환율(캐시) 조회, 주식 캔들 조회, 헬스 체크 엔드포인트를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{http::StatusCode, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use quote_api::routes::create_api_router;
use quote_api::state::AppState;
use quote_core::{init_logging, AppConfig, CorsConfig, LogConfig, LogFormat};
use quote_data::{ForexCache, XRatesFetcher, YahooCandleProvider};

/// CORS 레이어 생성.
///
/// `cors.allowed_origins`가 비어 있으면 모든 origin을 허용합니다.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .allowed_origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        if !config.allowed_origins.is_empty() {
            warn!("cors.allowed_origins contains no valid origins, allowing any");
        }
        AllowOrigin::any()
    } else {
        info!("CORS configured with {} allowed origins", origins.len());
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        // preflight 요청 캐시 시간
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 - 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .layer(cors_layer(&config.cors))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // 설정 로드
    let config = AppConfig::load_default().context("설정 로드 실패")?;

    // tracing 초기화
    let mut log_config = LogConfig::from_settings(&config.logging);
    if let Ok(format) = std::env::var("LOG_FORMAT") {
        log_config = log_config.with_format(format.parse::<LogFormat>().unwrap_or_default());
    }
    init_logging(log_config).map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    info!("Starting Quote API server...");

    let addr = config.server.socket_addr().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            error = %e,
            "소켓 주소 설정이 유효하지 않습니다. QUOTE__SERVER__HOST, QUOTE__SERVER__PORT를 확인하세요."
        );
        e
    })?;

    // 환율 캐시 (프로세스 전역 단일 인스턴스)
    let fetcher = XRatesFetcher::from_config(&config.forex)?;
    info!(url = %fetcher.url(), ttl_secs = config.forex.ttl_secs, "Forex cache configured");
    let forex = Arc::new(ForexCache::from_config(Arc::new(fetcher), &config.forex));

    // 캔들 제공자
    let candles = Arc::new(YahooCandleProvider::new()?);

    let state = Arc::new(
        AppState::new(Arc::clone(&forex), candles).with_stocks_config(config.stocks.clone()),
    );
    info!(version = %state.version, "Application state initialized");

    if config.forex.warm_on_start && forex.refresh().is_some() {
        info!("Forex cache warm-up scheduled");
    }

    // 라우터 생성
    let app = create_router(state, &config);

    // 서버 시작
    info!(%addr, "API server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 반환합니다.
/// 시그널 핸들러 설치에 실패하면 해당 시그널은 기다리지 않습니다.
/// 진행 중인 환율 갱신 태스크는 런타임 종료와 함께 중단됩니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
