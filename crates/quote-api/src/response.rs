//! 공통 응답 봉투.
//!
//! 모든 API 응답은 `{"status": .., "data": ..}` 형식을 따릅니다.
//!
//! ```json
//! {"status": "success", "data": [{"pair": "USD/EUR", "rate": 0.92}]}
//! {"status": "fetching", "data": "Forex data is being updated. Try again shortly."}
//! {"status": "error", "data": {"code": "NOT_FOUND", "message": ".."}}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 응답 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Fetching,
    Error,
}

/// 응답 봉투.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub data: T,
}

impl<T> Envelope<T> {
    /// 성공 응답.
    pub fn success(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data,
        }
    }

    /// 갱신 중 응답.
    pub fn fetching(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Fetching,
            data,
        }
    }

    /// 에러 응답.
    pub fn error(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let code = match self.status {
            EnvelopeStatus::Success => StatusCode::OK,
            EnvelopeStatus::Fetching => StatusCode::ACCEPTED,
            // 에러 상태 코드는 ApiError가 직접 지정
            EnvelopeStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (code, Json(self)).into_response()
    }
}
