//! 애플리케이션 공유 상태.
//!
//! 모든 핸들러가 `State<Arc<AppState>>`로 공유합니다.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use quote_core::StocksConfig;
use quote_data::{CandleProvider, ForexCache};

/// 애플리케이션 상태.
pub struct AppState {
    /// 환율 캐시 (프로세스 전역 단일 인스턴스)
    pub forex: Arc<ForexCache>,

    /// 캔들 데이터 제공자
    pub candles: Arc<dyn CandleProvider>,

    /// 캔들 파라미터 기본값
    pub stocks: StocksConfig,

    /// 서버 시작 시간
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(forex: Arc<ForexCache>, candles: Arc<dyn CandleProvider>) -> Self {
        Self {
            forex,
            candles,
            stocks: StocksConfig::default(),
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 캔들 파라미터 기본값 설정.
    pub fn with_stocks_config(mut self, stocks: StocksConfig) -> Self {
        self.stocks = stocks;
        self
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        Utc::now().signed_duration_since(self.started_at).num_seconds()
    }
}

/// 테스트용 AppState 생성.
///
/// 환율 소스는 고정 환율표를 즉시 반환하고, 캔들 제공자는 고정 캔들 두 개를 반환합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use testing::{StaticCandleProvider, StaticForexSource};

    let forex = ForexCache::new(Arc::new(StaticForexSource), chrono::Duration::seconds(600));
    AppState::new(Arc::new(forex), Arc::new(StaticCandleProvider))
}

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    //! 테스트용 고정 데이터 소스.

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use quote_core::{Candle, RateEntry};
    use quote_data::{CandleProvider, CandleRequest, DataError, ForexSource, Result};

    /// 고정 환율표를 반환하는 소스.
    pub struct StaticForexSource;

    #[async_trait]
    impl ForexSource for StaticForexSource {
        async fn fetch_rates(&self) -> Result<Vec<RateEntry>> {
            Ok(vec![
                RateEntry::from_usd("EUR", 0.92),
                RateEntry::from_usd("JPY", 151.25),
            ])
        }
    }

    /// 고정 캔들을 반환하는 제공자. 심볼 `NOPE`은 NotFound.
    pub struct StaticCandleProvider;

    #[async_trait]
    impl CandleProvider for StaticCandleProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn get_candles(&self, request: &CandleRequest) -> Result<Vec<Candle>> {
            if request.symbol == "NOPE" {
                return Err(DataError::NotFound(format!(
                    "심볼을 찾을 수 없습니다: {}",
                    request.symbol
                )));
            }

            let base = Utc
                .with_ymd_and_hms(2024, 5, 1, 13, 30, 0)
                .single()
                .ok_or_else(|| DataError::Internal("invalid test timestamp".to_string()))?;
            Ok(vec![
                Candle {
                    time: base,
                    open: 170.0,
                    high: 171.5,
                    low: 169.8,
                    close: 171.2,
                },
                Candle {
                    time: base + chrono::Duration::minutes(1),
                    open: 171.2,
                    high: 171.9,
                    low: 171.0,
                    close: 171.7,
                },
            ])
        }
    }
}
