//! 외부 시세 데이터 수집 및 캐싱.
//!
//! 이 crate는 다음을 제공합니다:
//! - 환율표 스크래퍼 (x-rates 환율표 → `RateEntry`)
//! - 환율 스냅샷 저장소 (원자적 교체, TTL 기반 신선도 판단)
//! - 단일 실행(single-flight) 백그라운드 갱신 코디네이터
//! - Yahoo Finance 캔들 데이터 제공자

pub mod error;
pub mod forex;
pub mod stocks;

pub use error::{DataError, Result};

// 환율 캐시 재내보내기
pub use forex::{
    currency_code, parse_rates_table, ForexCache, ForexLookup, ForexSource, ForexStore,
    RefreshCoordinator, XRatesFetcher,
};

// 캔들 제공자 재내보내기
pub use stocks::{CandleProvider, CandleRequest, YahooCandleProvider};
