//! 환율 endpoint.
//!
//! `GET /api/forex/`
//! - 캐시가 신선하면 `200 {"status":"success","data":[..]}`
//! - 아니면 갱신을 예약하고 즉시 `202 {"status":"fetching","data":".."}`
//!
//! 요청은 업스트림 수집을 기다리지 않습니다.

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tracing::debug;

use quote_data::forex::cache::FETCHING_MESSAGE;
use quote_data::ForexLookup;

use crate::response::Envelope;
use crate::routes::redirect_with_slash;
use crate::state::AppState;

/// 환율 목록 조회.
///
/// GET /api/forex/
pub async fn get_forex(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.forex.lookup() {
        ForexLookup::Fresh(snapshot) => {
            debug!(count = snapshot.entries.len(), "캐시된 환율 반환");
            Envelope::success(&snapshot.entries).into_response()
        }
        ForexLookup::Fetching => Envelope::fetching(FETCHING_MESSAGE).into_response(),
    }
}

/// 환율 라우터 생성.
///
/// 경로는 끝 슬래시를 포함하므로 `nest` 대신 `merge`로 조합합니다.
pub fn forex_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/forex/", get(get_forex))
        .route("/api/forex", get(redirect_with_slash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(state: Arc<AppState>) -> Router {
        forex_router().with_state(state)
    }

    async fn call(state: Arc<AppState>) -> (StatusCode, Value) {
        let response = app(state)
            .oneshot(Request::builder().uri("/api/forex/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_empty_cache_returns_fetching() {
        let state = Arc::new(create_test_state());

        let (status, json) = call(state.clone()).await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(json["status"], "fetching");
        assert_eq!(json["data"], FETCHING_MESSAGE);

        // 예약된 갱신이 끝나면 신선한 데이터 반환
        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while !state.forex.snapshot().is_populated() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        let (status, json) = call(state).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
    }

    #[tokio::test]
    async fn test_fresh_cache_returns_entries() {
        let state = Arc::new(create_test_state());
        state.forex.refresh().unwrap().await.unwrap();

        let (status, json) = call(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(
            json["data"],
            serde_json::json!([
                {"pair": "USD/EUR", "rate": 0.92},
                {"pair": "USD/JPY", "rate": 151.25}
            ])
        );
    }
}
