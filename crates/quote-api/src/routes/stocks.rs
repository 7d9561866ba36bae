//! 주식 캔들 endpoint.
//!
//! `GET /api/stocks/{symbol}/candlesticks/?timeframe=1m&duration=1d`
//!
//! 캐시 없이 요청마다 제공자를 호출합니다.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use quote_core::Candle;
use quote_data::CandleRequest;

use crate::error::ApiResult;
use crate::response::Envelope;
use crate::routes::redirect_with_slash;
use crate::state::AppState;

/// 캔들 조회 쿼리.
#[derive(Debug, Default, Deserialize)]
pub struct CandleQuery {
    /// 캔들 간격 (기본값: 설정의 `default_timeframe`)
    pub timeframe: Option<String>,
    /// 조회 기간 (기본값: 설정의 `default_duration`)
    pub duration: Option<String>,
}

/// 캔들 목록 조회.
///
/// GET /api/stocks/{symbol}/candlesticks/
pub async fn get_candlesticks(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<CandleQuery>,
) -> ApiResult<Envelope<Vec<Candle>>> {
    let request = CandleRequest::parse(
        &symbol,
        query.timeframe.as_deref(),
        query.duration.as_deref(),
        &state.stocks,
    )?;

    let candles = state.candles.get_candles(&request).await?;

    info!(
        symbol = %request.symbol,
        interval = %request.interval,
        range = %request.range,
        provider = state.candles.name(),
        count = candles.len(),
        "캔들 조회 완료"
    );

    Ok(Envelope::success(candles))
}

/// 캔들 라우터 생성.
pub fn stocks_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stocks/{symbol}/candlesticks/", get(get_candlesticks))
        .route(
            "/api/stocks/{symbol}/candlesticks",
            get(redirect_with_slash),
        )
}
