//! Yahoo Finance 캔들 제공자.
//!
//! chart API(`interval`, `range`)로 OHLC 시계열을 가져옵니다.
//!
//! # 지원 심볼
//!
//! - 미국 주식: `AAPL`, `MSFT`, `SPY`
//! - 한국 주식: `005930.KS` (KOSPI), `035720.KQ` (KOSDAQ)
//! - 환율/지수: `EURUSD=X`, `^GSPC`
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use quote_data::{CandleProvider, CandleRequest, YahooCandleProvider};
//! use quote_core::{ChartInterval, ChartRange};
//!
//! let provider = YahooCandleProvider::new()?;
//! let request = CandleRequest::new("AAPL", ChartInterval::D1, ChartRange::Mo1);
//! let candles = provider.get_candles(&request).await?;
//! ```

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::{debug, info, warn};
use yahoo_finance_api as yahoo;

use quote_core::Candle;

use crate::error::{DataError, Result};
use crate::stocks::{CandleProvider, CandleRequest};

/// Yahoo Finance 캔들 제공자.
pub struct YahooCandleProvider {
    connector: yahoo::YahooConnector,
}

impl YahooCandleProvider {
    /// 새 제공자 생성.
    pub fn new() -> Result<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| DataError::ConfigError(format!("Yahoo Finance 연결 실패: {}", e)))?;
        Ok(Self { connector })
    }

    /// Yahoo Quote를 Candle로 변환. 시각이 유효하지 않으면 None.
    fn quote_to_candle(quote: &yahoo::Quote) -> Option<Candle> {
        let time = Utc.timestamp_opt(quote.timestamp as i64, 0).single()?;
        Some(Candle {
            time,
            open: quote.open,
            high: quote.high,
            low: quote.low,
            close: quote.close,
        })
    }
}

/// Yahoo 오류 메시지가 알 수 없는 심볼을 뜻하는지 판단합니다.
fn is_not_found_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("404") || lower.contains("not found") || lower.contains("no data found")
}

/// Yahoo 오류를 도메인 오류로 변환.
fn map_yahoo_error(symbol: &str, message: String) -> DataError {
    if is_not_found_message(&message) {
        DataError::NotFound(format!("심볼을 찾을 수 없습니다: {}", symbol))
    } else {
        DataError::FetchError(format!("Yahoo Finance API 오류 ({}): {}", symbol, message))
    }
}

#[async_trait]
impl CandleProvider for YahooCandleProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn get_candles(&self, request: &CandleRequest) -> Result<Vec<Candle>> {
        let symbol = request.symbol.as_str();
        let interval = request.interval.as_str();
        let range = request.range.as_str();

        info!(symbol, interval, range, "Yahoo Finance 캔들 요청");

        let response = self
            .connector
            .get_quote_range(symbol, interval, range)
            .await
            .map_err(|e| map_yahoo_error(symbol, e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::ParseError(format!("Quote 파싱 오류 ({}): {}", symbol, e)))?;

        if quotes.is_empty() {
            warn!(symbol, "Yahoo Finance 데이터 없음");
            return Ok(Vec::new());
        }

        let mut candles: Vec<Candle> = quotes.iter().filter_map(Self::quote_to_candle).collect();
        candles.sort_by_key(|c| c.time);

        debug!(symbol, count = candles.len(), "Yahoo Finance 캔들 수신");
        Ok(candles)
    }
}
