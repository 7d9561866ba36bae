//! 헬스 체크 endpoint.
//!
//! - `GET /` - 간단한 응답 확인 (`{"status":"success","data":"hello"}`)
//! - `GET /health` - liveness probe
//! - `GET /health/ready` - 환율 캐시 상태를 포함한 readiness 정보

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use quote_data::forex::ForexCacheStatus;

use crate::response::Envelope;
use crate::state::AppState;

/// 헬스 체크 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 전체 서비스 상태 ("healthy" | "degraded")
    pub status: String,

    /// API 버전
    pub version: String,

    /// 서버 업타임(초)
    pub uptime_secs: i64,

    /// 현재 시간 (ISO 8601)
    pub timestamp: String,

    /// 개별 컴포넌트 상태
    pub components: ComponentHealth,

    /// 환율 캐시 상세
    pub forex: ForexCacheStatus,
}

/// 개별 컴포넌트 상태.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// 환율 캐시 상태
    pub forex_cache: ComponentStatus,

    /// 캔들 제공자
    pub candle_provider: ComponentStatus,
}

/// 컴포넌트 상태.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentStatus {
    /// 상태 ("up" | "stale" | "empty")
    pub status: String,

    /// 추가 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentStatus {
    /// 정보 포함 정상 상태.
    pub fn up_with_info(message: impl Into<String>) -> Self {
        Self {
            status: "up".to_string(),
            message: Some(message.into()),
        }
    }

    /// 환율 캐시 상태에서 변환.
    pub fn from_forex(cache: &ForexCacheStatus) -> Self {
        let status = if cache.fresh {
            "up"
        } else if cache.fetched_at.is_some() {
            "stale"
        } else {
            "empty"
        };

        let mut message = format!("{} pairs", cache.entries);
        if let Some(fetched_at) = cache.fetched_at {
            message.push_str(&format!(", fetched at {}", fetched_at.to_rfc3339()));
        }
        if cache.refreshing {
            message.push_str(", refreshing");
        }

        Self {
            status: status.to_string(),
            message: Some(message),
        }
    }
}

/// 간단한 응답 확인.
///
/// GET /
pub async fn hello() -> impl IntoResponse {
    Envelope::success("hello")
}

/// 간단한 헬스 체크 (liveness probe용).
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 상세 헬스 체크 (readiness probe용).
///
/// 환율 캐시가 비어 있거나 만료되어도 서비스는 응답 가능하므로 200을 반환하고,
/// 전체 상태만 "degraded"로 표시합니다.
///
/// GET /health/ready
pub async fn health_ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let forex = state.forex.status(now);

    let overall_status = if forex.fresh { "healthy" } else { "degraded" };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: state.version.clone(),
        uptime_secs: state.uptime_secs(),
        timestamp: now.to_rfc3339(),
        components: ComponentHealth {
            forex_cache: ComponentStatus::from_forex(&forex),
            candle_provider: ComponentStatus::up_with_info(state.candles.name()),
        },
        forex,
    };

    (StatusCode::OK, Json(response))
}

/// 헬스 체크 라우터 생성.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(health_ready))
}
