//! # Quote Core
//!
//! 시세 게이트웨이의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 게이트웨이 전반에서 사용되는 기본 타입을 제공합니다:
//! - 환율 엔트리 및 캐시 스냅샷
//! - 캔들(OHLC) 데이터 구조체
//! - 캔들 조회 간격/기간 정의
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
