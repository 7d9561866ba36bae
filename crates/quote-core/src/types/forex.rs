//! 환율 엔트리 및 캐시 스냅샷.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 모든 환율의 기준 통화.
pub const BASE_CURRENCY: &str = "USD";

/// 통화쌍과 환율.
///
/// `pair`는 `"USD/<코드>"` 형식이며 한 스냅샷 안에서 유일합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// 통화쌍 (예: "USD/EUR")
    pub pair: String,
    /// 1 USD 기준 환율 (양의 유한값)
    pub rate: f64,
}

impl RateEntry {
    /// 기준 통화(USD) 대비 통화 코드로 엔트리를 생성합니다.
    pub fn from_usd(code: &str, rate: f64) -> Self {
        Self {
            pair: format!("{}/{}", BASE_CURRENCY, code),
            rate,
        }
    }
}

/// 캐시가 보관하는 환율표 스냅샷.
///
/// `entries`와 `fetched_at`은 항상 같은 갱신에서 함께 만들어지며,
/// 스냅샷은 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// 수집 순서대로의 환율 엔트리
    pub entries: Vec<RateEntry>,
    /// 수집 성공 시각 (첫 수집 전에는 None)
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CacheSnapshot {
    /// 빈 스냅샷 (프로세스 시작 상태).
    pub fn empty() -> Self {
        Self::default()
    }

    /// 수집 완료된 스냅샷 생성.
    pub fn new(entries: Vec<RateEntry>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            entries,
            fetched_at: Some(fetched_at),
        }
    }

    /// 한 번이라도 수집된 적이 있는지 확인합니다.
    pub fn is_populated(&self) -> bool {
        self.fetched_at.is_some()
    }

    /// `now` 시점의 스냅샷 나이.
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.fetched_at.map(|fetched_at| now - fetched_at)
    }

    /// `now - fetched_at < ttl`이면 신선한 것으로 봅니다. 정확히 ttl이면 만료입니다.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now).is_some_and(|age| age < ttl)
    }
}
