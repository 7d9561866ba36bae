//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 기본값 → TOML 파일(선택) → 환경 변수(`QUOTE__` 접두사) 순서로 덮어씁니다.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{GatewayError, GatewayResult};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 설정 파일 경로를 지정하는 환경 변수.
pub const CONFIG_PATH_ENV: &str = "QUOTE_CONFIG";

/// 환율 캐시 TTL 상한 (하루).
pub const MAX_FOREX_TTL_SECS: u64 = 86_400;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 환율 캐시 설정
    pub forex: ForexConfig,
    /// 캔들 조회 설정
    pub stocks: StocksConfig,
    /// CORS 설정
    pub cors: CorsConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 전역 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `GatewayError::Config`를 반환합니다.
    pub fn socket_addr(&self) -> GatewayResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| GatewayError::Config(format!("잘못된 서버 주소 {}:{}: {}", self.host, self.port, e)))
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// span 진입/종료 이벤트 기록 여부
    pub span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            span_events: false,
        }
    }
}

/// 환율 캐시 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForexConfig {
    /// 환율표 페이지 URL
    pub source_url: String,
    /// 캐시 TTL (초)
    pub ttl_secs: u64,
    /// 환율표 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
    /// 환율표 요청 User-Agent
    pub user_agent: String,
    /// 서버 시작 시 한 번 갱신을 예약할지 여부
    pub warm_on_start: bool,
}

impl Default for ForexConfig {
    fn default() -> Self {
        Self {
            source_url: "https://www.x-rates.com/table/?from=USD&amount=1".to_string(),
            ttl_secs: 600,
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            warm_on_start: false,
        }
    }
}

impl ForexConfig {
    /// TTL을 chrono 기간으로 반환합니다.
    ///
    /// 표현할 수 없는 값은 `chrono::Duration::MAX`로 포화됩니다.
    /// 로드된 설정은 `validate()`에서 `MAX_FOREX_TTL_SECS` 이하로 제한됩니다.
    pub fn ttl(&self) -> chrono::Duration {
        i64::try_from(self.ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

/// 캔들 조회 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StocksConfig {
    /// `timeframe` 파라미터가 없을 때 사용할 간격
    pub default_timeframe: String,
    /// `duration` 파라미터가 없을 때 사용할 기간
    pub default_duration: String,
}

impl Default for StocksConfig {
    fn default() -> Self {
        Self {
            default_timeframe: "1m".to_string(),
            default_duration: "1d".to_string(),
        }
    }
}

/// CORS 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// 허용 origin 목록 (비어 있으면 모든 origin 허용)
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일은 없어도 됩니다. 환경 변수는 `QUOTE__FOREX__TTL_SECS=300` 형식입니다.
    pub fn load<P: AsRef<Path>>(path: P) -> GatewayResult<Self> {
        let builder = config::Config::builder()
            // 파일에서 로드 (선택)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("QUOTE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 기본 경로(또는 `QUOTE_CONFIG`)에서 설정을 로드합니다.
    pub fn load_default() -> GatewayResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// 설정 값 검증.
    pub fn validate(&self) -> GatewayResult<()> {
        if self.forex.ttl_secs == 0 {
            return Err(GatewayError::Config(
                "forex.ttl_secs는 0보다 커야 합니다".to_string(),
            ));
        }
        if self.forex.ttl_secs > MAX_FOREX_TTL_SECS {
            return Err(GatewayError::Config(format!(
                "forex.ttl_secs는 {} 이하여야 합니다 (현재 {})",
                MAX_FOREX_TTL_SECS, self.forex.ttl_secs
            )));
        }
        if self.forex.request_timeout_secs == 0 {
            return Err(GatewayError::Config(
                "forex.request_timeout_secs는 0보다 커야 합니다".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(GatewayError::Config(
                "server.request_timeout_secs는 0보다 커야 합니다".to_string(),
            ));
        }
        if self.forex.source_url.trim().is_empty() {
            return Err(GatewayError::Config(
                "forex.source_url이 비어 있습니다".to_string(),
            ));
        }
        self.server.socket_addr()?;
        Ok(())
    }
}
