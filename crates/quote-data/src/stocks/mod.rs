//! 주식 캔들 데이터 제공자.
//!
//! 캔들 엔드포인트는 캐시 없이 요청마다 제공자를 호출합니다.

pub mod yahoo;

use async_trait::async_trait;

use quote_core::{Candle, ChartInterval, ChartRange, StocksConfig, INTRADAY_WINDOW_DAYS};

use crate::error::{DataError, Result};

pub use yahoo::YahooCandleProvider;

/// 정규화·검증된 캔들 조회 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleRequest {
    /// 대문자로 정규화된 심볼 (예: "AAPL", "005930.KS")
    pub symbol: String,
    /// 캔들 간격
    pub interval: ChartInterval,
    /// 조회 기간
    pub range: ChartRange,
}

impl CandleRequest {
    /// 요청 생성.
    pub fn new(symbol: impl Into<String>, interval: ChartInterval, range: ChartRange) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            range,
        }
    }

    /// 경로/쿼리 파라미터에서 요청을 만듭니다.
    ///
    /// 호출자가 준 값이 우선이며, 파라미터가 없을 때만 설정의 기본값을 씁니다.
    ///
    /// # Errors
    /// 심볼이 비어 있거나, 간격/기간이 지원 목록에 없거나,
    /// 분봉/시간봉에 `INTRADAY_WINDOW_DAYS`를 넘는 기간을 요청하면 `DataError::InvalidInput`.
    pub fn parse(
        symbol: &str,
        timeframe: Option<&str>,
        duration: Option<&str>,
        defaults: &StocksConfig,
    ) -> Result<Self> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DataError::InvalidInput("심볼이 비어 있습니다".to_string()));
        }

        let interval: ChartInterval = timeframe
            .unwrap_or(&defaults.default_timeframe)
            .trim()
            .parse()?;
        let range: ChartRange = duration
            .unwrap_or(&defaults.default_duration)
            .trim()
            .parse()?;

        if interval.is_intraday() && !range.within_intraday_window() {
            return Err(DataError::InvalidInput(format!(
                "timeframe '{}'은 최근 {}일 이내 duration만 지원합니다 (요청: '{}')",
                interval, INTRADAY_WINDOW_DAYS, range
            )));
        }

        Ok(Self::new(symbol, interval, range))
    }
}

/// 캔들 데이터 제공자 트레잇.
#[async_trait]
pub trait CandleProvider: Send + Sync {
    /// 제공자 이름.
    fn name(&self) -> &str;

    /// 시간 오름차순 캔들 목록을 가져옵니다.
    async fn get_candles(&self, request: &CandleRequest) -> Result<Vec<Candle>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uses_defaults_when_absent() {
        let req = CandleRequest::parse(" aapl ", None, None, &StocksConfig::default()).unwrap();
        assert_eq!(req.symbol, "AAPL");
        assert_eq!(req.interval, ChartInterval::M1);
        assert_eq!(req.range, ChartRange::D1);
    }

    #[test]
    fn test_parse_caller_values_win() {
        let req =
            CandleRequest::parse("msft", Some("1d"), Some("1y"), &StocksConfig::default()).unwrap();
        assert_eq!(req.interval, ChartInterval::D1);
        assert_eq!(req.range, ChartRange::Y1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let defaults = StocksConfig::default();

        let err = CandleRequest::parse("   ", None, None, &defaults).unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));

        let err = CandleRequest::parse("AAPL", Some("7m"), None, &defaults).unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));

        let err = CandleRequest::parse("AAPL", None, Some("forever"), &defaults).unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_intraday_beyond_window() {
        let defaults = StocksConfig::default();

        let err = CandleRequest::parse("AAPL", Some("1m"), Some("1y"), &defaults).unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));

        // 기본 timeframe(1m)에도 같은 제한 적용
        let err = CandleRequest::parse("AAPL", None, Some("max"), &defaults).unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));

        let req = CandleRequest::parse("AAPL", Some("1h"), Some("1mo"), &defaults).unwrap();
        assert_eq!(req.interval, ChartInterval::H1);
        assert_eq!(req.range, ChartRange::Mo1);

        let req = CandleRequest::parse("AAPL", Some("1wk"), Some("max"), &defaults).unwrap();
        assert_eq!(req.range, ChartRange::Max);
    }
}
