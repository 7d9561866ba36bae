//! 환율 캐시 갱신 흐름 통합 테스트.
//!
//! 빈 캐시 → 갱신 중 → 신선 → 만료 → 재갱신 전 과정을 검증합니다.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use quote_core::RateEntry;
use quote_data::forex::cache::FETCHING_MESSAGE;
use quote_data::{DataError, ForexCache, ForexLookup, ForexSource, Result, XRatesFetcher};

/// 호출마다 세대 번호를 환율로 돌려주는 소스. `gate`가 열릴 때까지 대기합니다.
struct SequencedSource {
    calls: AtomicUsize,
    gate: Notify,
}

#[async_trait]
impl ForexSource for SequencedSource {
    async fn fetch_rates(&self) -> Result<Vec<RateEntry>> {
        let generation = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.gate.notified().await;
        Ok(vec![
            RateEntry::from_usd("EUR", generation as f64),
            RateEntry::from_usd("JPY", 100.0 * generation as f64),
        ])
    }
}

/// 진행 중인 갱신이 끝날 때까지 대기.
async fn wait_for_refresh(cache: &ForexCache) {
    tokio::time::timeout(std::time::Duration::from_secs(5), async {
        while cache.status(Utc::now()).refreshing {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("refresh did not finish in time");
}

#[tokio::test]
async fn test_cache_lifecycle_fetching_fresh_stale() {
    let source = Arc::new(SequencedSource {
        calls: AtomicUsize::new(0),
        gate: Notify::new(),
    });
    let ttl = Duration::seconds(600);
    let cache = ForexCache::new(source.clone(), ttl);

    // 빈 캐시: 갱신 중
    assert!(matches!(cache.lookup(), ForexLookup::Fetching));
    assert!(matches!(cache.lookup(), ForexLookup::Fetching));
    assert!(cache.refresh().is_none());

    // 첫 갱신 완료
    source.gate.notify_one();
    wait_for_refresh(&cache).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    let fetched_at = match cache.lookup() {
        ForexLookup::Fresh(snapshot) => {
            assert_eq!(snapshot.entries[0], RateEntry::from_usd("EUR", 1.0));
            snapshot.fetched_at.unwrap()
        }
        ForexLookup::Fetching => panic!("expected fresh snapshot after refresh"),
    };

    // TTL 경과: 만료 → 새 갱신 예약, 이전 스냅샷은 완료 전까지 유지
    let later = fetched_at + ttl + Duration::seconds(1);
    assert!(matches!(cache.lookup_at(later), ForexLookup::Fetching));
    assert!(cache.status(later).refreshing);
    assert_eq!(cache.snapshot().entries[0].rate, 1.0);

    source.gate.notify_one();
    wait_for_refresh(&cache).await;

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    let snapshot = cache.snapshot();
    assert_eq!(snapshot.entries[0], RateEntry::from_usd("EUR", 2.0));
    assert_eq!(snapshot.entries[1], RateEntry::from_usd("JPY", 200.0));
    assert!(snapshot.fetched_at.unwrap() >= fetched_at);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_concurrent_lookups_single_upstream_call() {
    let source = Arc::new(SequencedSource {
        calls: AtomicUsize::new(0),
        gate: Notify::new(),
    });
    let cache = Arc::new(ForexCache::new(source.clone(), Duration::seconds(600)));

    let tasks: Vec<_> = (0..64)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { matches!(cache.lookup(), ForexLookup::Fetching) })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        assert!(result.unwrap());
    }

    source.gate.notify_one();
    wait_for_refresh(&cache).await;

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert!(matches!(cache.lookup(), ForexLookup::Fresh(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_upstream_failure_keeps_stale_entries() {
    let mut server = mockito::Server::new_async().await;
    let page = r#"<table class="ratesTable">
        <tr><th>US Dollar</th><th>1.00 USD</th></tr>
        <tr><td>Euro</td><td>0.92</td></tr>
        <tr><td>British Pound</td><td>0.79</td></tr>
    </table>"#;

    let ok = server
        .mock("GET", "/table/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(page)
        .expect(1)
        .create_async()
        .await;

    let fetcher = XRatesFetcher::with_client(
        reqwest::Client::new(),
        format!("{}/table/?from=USD&amount=1", server.url()),
    );
    let cache = ForexCache::new(Arc::new(fetcher), Duration::seconds(600));

    cache.refresh().unwrap().await.unwrap();
    ok.assert_async().await;
    assert_eq!(cache.snapshot().entries.len(), 2);
    let fetched_at = cache.snapshot().fetched_at.unwrap();

    // 업스트림 장애 발생
    ok.remove_async().await;
    let _down = server
        .mock("GET", "/table/")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let later = fetched_at + Duration::seconds(601);
    assert!(matches!(cache.lookup_at(later), ForexLookup::Fetching));
    wait_for_refresh(&cache).await;

    let snapshot = cache.snapshot();
    assert_eq!(
        snapshot.entries,
        vec![
            RateEntry::from_usd("EUR", 0.92),
            RateEntry::from_usd("GBP", 0.79)
        ]
    );
    assert_eq!(snapshot.fetched_at, Some(fetched_at));
}

#[test]
fn test_fetching_message_text() {
    assert_eq!(
        FETCHING_MESSAGE,
        "Forex data is being updated. Try again shortly."
    );
    let err = DataError::FetchError("x".into());
    assert!(err.is_upstream());
}
