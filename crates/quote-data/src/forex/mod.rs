//! 환율 캐시.
//!
//! - `source`: 환율표 페이지 수집 (`ForexSource`, `XRatesFetcher`)
//! - `parser`: 환율표 HTML → `RateEntry` 변환
//! - `currency`: 통화 이름 → 코드 매핑
//! - `store`: 최신 스냅샷 보관 및 신선도 판단
//! - `coordinator`: 단일 실행(single-flight) 백그라운드 갱신
//! - `cache`: 요청 처리 프로토콜 (신선하면 반환, 아니면 갱신 예약)

pub mod cache;
pub mod coordinator;
pub mod currency;
pub mod parser;
pub mod source;
pub mod store;

pub use cache::{ForexCache, ForexCacheStatus, ForexLookup};
pub use coordinator::RefreshCoordinator;
pub use currency::currency_code;
pub use parser::{parse_rate, parse_rates_table};
pub use source::{ForexSource, XRatesFetcher};
pub use store::ForexStore;
