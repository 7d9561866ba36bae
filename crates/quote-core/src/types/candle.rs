//! 캔들(OHLC) 데이터 구조체.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 단일 캔들.
///
/// JSON 형식: `{"time": "2024-05-01T13:30:00Z", "open": .., "high": .., "low": .., "close": ..}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// 봉 시작 시각 (UTC)
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
