//! 환율표 수집 소스.
//!
//! ## 사용 예시
//! ```rust,ignore
//! let fetcher = XRatesFetcher::from_config(&config.forex)?;
//! let entries = fetcher.fetch_rates().await?;
//! println!("{} 개 통화쌍 수집", entries.len());
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use quote_core::{ForexConfig, RateEntry};

use crate::error::{DataError, Result};
use crate::forex::parser::parse_rates_table;

/// 환율 데이터 소스 트레잇.
///
/// 백그라운드 갱신은 이 트레잇을 통해서만 업스트림에 접근합니다.
#[async_trait]
pub trait ForexSource: Send + Sync {
    /// 최신 환율표를 가져옵니다.
    async fn fetch_rates(&self) -> Result<Vec<RateEntry>>;
}

/// x-rates 환율표 크롤러.
///
/// HTML 파싱을 통해 USD 기준 환율표를 수집합니다.
pub struct XRatesFetcher {
    client: Client,
    url: String,
}

impl XRatesFetcher {
    /// 설정에서 생성.
    pub fn from_config(config: &ForexConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DataError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self::with_client(client, config.source_url.clone()))
    }

    /// 이미 구성된 HTTP 클라이언트로 생성.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// 환율표 페이지 URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ForexSource for XRatesFetcher {
    async fn fetch_rates(&self) -> Result<Vec<RateEntry>> {
        debug!(url = %self.url, "환율표 요청");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::FetchError(format!(
                "환율표 응답 상태 {}: {}",
                status, self.url
            )));
        }

        let html = response.text().await?;
        let entries = parse_rates_table(&html)?;

        // 페이지 구조가 바뀌어 아무것도 못 읽은 경우 기존 캐시를 유지하도록 실패 처리
        if entries.is_empty() {
            return Err(DataError::ParseError(
                "환율표에서 유효한 행을 찾지 못했습니다".to_string(),
            ));
        }

        info!(count = entries.len(), "환율표 수집 완료");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <table class="ratesTable">
          <tr><th>US Dollar</th><th>1.00 USD</th><th>inv. 1.00 USD</th></tr>
          <tr><td>Euro</td><td class="rtRates"><a href="/graph/">0.921</a></td><td>1.085</td></tr>
          <tr><td>South Korean Won</td><td class="rtRates"><a href="/graph/">1,352.40</a></td><td>0.0007</td></tr>
        </table>
        </body></html>"#;

    fn fetcher_for(server: &mockito::ServerGuard) -> XRatesFetcher {
        XRatesFetcher::with_client(
            Client::new(),
            format!("{}/table/?from=USD&amount=1", server.url()),
        )
    }

    #[tokio::test]
    async fn test_fetch_rates_from_page() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/table/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(PAGE)
            .create_async()
            .await;

        let entries = fetcher_for(&server).fetch_rates().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            entries,
            vec![
                RateEntry::from_usd("EUR", 0.921),
                RateEntry::from_usd("KRW", 1352.40),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_rates_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/table/")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let err = fetcher_for(&server).fetch_rates().await.unwrap_err();
        assert!(matches!(err, DataError::FetchError(_)));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_fetch_rates_empty_table_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/table/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html><body>maintenance</body></html>")
            .create_async()
            .await;

        let err = fetcher_for(&server).fetch_rates().await.unwrap_err();
        assert!(matches!(err, DataError::ParseError(_)));
    }

    #[test]
    fn test_from_config_uses_source_url() {
        let config = ForexConfig::default();
        let fetcher = XRatesFetcher::from_config(&config).unwrap();
        assert_eq!(fetcher.url(), "https://www.x-rates.com/table/?from=USD&amount=1");
    }

    #[tokio::test]
    #[ignore] // 실제 네트워크 호출 필요
    async fn test_fetch_live_page() {
        let fetcher = XRatesFetcher::from_config(&ForexConfig::default()).unwrap();
        match fetcher.fetch_rates().await {
            Ok(entries) => {
                println!("{} 개 통화쌍", entries.len());
                assert!(entries.iter().any(|e| e.pair == "USD/EUR"));
            }
            Err(e) => eprintln!("환율표 수집 실패: {}", e),
        }
    }
}
