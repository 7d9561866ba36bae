//! 데이터 모듈 오류 타입.

use quote_core::GatewayError;
use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 데이터 가져오기 오류 (외부 소스)
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// 파싱 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 레코드를 찾을 수 없음 (알 수 없는 심볼 등)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 잘못된 요청 파라미터
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 설정 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 오류 (백그라운드 태스크 실패 등)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DataError {
    /// 업스트림 장애인지 확인합니다.
    pub fn is_upstream(&self) -> bool {
        matches!(self, DataError::FetchError(_))
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::FetchError(err.to_string())
    }
}

impl From<GatewayError> for DataError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidInput(msg) => DataError::InvalidInput(msg),
            GatewayError::NotFound(msg) => DataError::NotFound(msg),
            GatewayError::Serialization(msg) => DataError::ParseError(msg),
            GatewayError::Config(msg) => DataError::ConfigError(msg),
            GatewayError::Internal(msg) => DataError::Internal(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
