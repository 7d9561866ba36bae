//! 시세 게이트웨이 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (환율, 주식 캔들)
//! - 공통 응답 봉투 및 에러 응답
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`response`]: `{"status", "data"}` 응답 봉투
//! - [`error`]: 에러 응답 및 상태 코드 매핑

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use response::{Envelope, EnvelopeStatus};
pub use routes::*;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
