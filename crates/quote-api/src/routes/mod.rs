//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/` - 응답 확인
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/forex/` - USD 기준 환율 목록 (캐시)
//! - `/api/stocks/{symbol}/candlesticks/` - 주식 캔들
//!
//! 끝 슬래시가 없는 API 경로는 307로 슬래시 경로에 리다이렉트합니다.

pub mod forex;
pub mod health;
pub mod stocks;

pub use forex::{forex_router, get_forex};
pub use health::{health_router, hello, ComponentHealth, ComponentStatus, HealthResponse};
pub use stocks::{get_candlesticks, stocks_router, CandleQuery};

use axum::{http::Uri, response::Redirect, routing::get, Router};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// 등록되지 않은 경로.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("경로를 찾을 수 없습니다: {}", uri.path()))
}

/// 끝 슬래시를 붙인 경로로 307 리다이렉트 (쿼리 문자열 유지).
pub(crate) async fn redirect_with_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(hello))
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // API 엔드포인트
        .merge(forex_router())
        .merge(stocks_router())
        .fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn status_of(uri: &str) -> StatusCode {
        let app = create_api_router().with_state(Arc::new(create_test_state()));
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_routes_are_wired() {
        assert_eq!(status_of("/").await, StatusCode::OK);
        assert_eq!(status_of("/health").await, StatusCode::OK);
        assert_eq!(status_of("/health/ready").await, StatusCode::OK);
        assert_eq!(status_of("/api/forex/").await, StatusCode::ACCEPTED);
        assert_eq!(
            status_of("/api/stocks/AAPL/candlesticks/").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_missing_trailing_slash_redirects() {
        let app = create_api_router().with_state(Arc::new(create_test_state()));

        let cases = [
            ("/api/forex", "/api/forex/"),
            (
                "/api/stocks/AAPL/candlesticks",
                "/api/stocks/AAPL/candlesticks/",
            ),
            (
                "/api/stocks/AAPL/candlesticks?timeframe=1d&duration=1y",
                "/api/stocks/AAPL/candlesticks/?timeframe=1d&duration=1y",
            ),
        ];

        for (uri, location) in cases {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{}", uri);
            assert_eq!(response.headers()["location"], location);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let app = create_api_router().with_state(Arc::new(create_test_state()));
        let response = app
            .oneshot(Request::builder().uri("/api/bonds/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["data"]["code"], "NOT_FOUND");
    }
}
