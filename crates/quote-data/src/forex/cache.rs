//! 환율 캐시 요청 처리.
//!
//! 요청마다 다음 순서로 동작합니다:
//! 1. 스냅샷이 신선하면 그대로 반환
//! 2. 아니면 갱신을 예약(이미 진행 중이면 합류)하고 즉시 "갱신 중" 응답
//!
//! 요청 경로는 업스트림 응답을 기다리지 않습니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;

use quote_core::{CacheSnapshot, ForexConfig};

use crate::forex::coordinator::RefreshCoordinator;
use crate::forex::source::ForexSource;
use crate::forex::store::ForexStore;

/// 캐시가 신선하지 않을 때 클라이언트에게 보낼 메시지.
pub const FETCHING_MESSAGE: &str = "Forex data is being updated. Try again shortly.";

/// 조회 결과.
#[derive(Debug, Clone)]
pub enum ForexLookup {
    /// 신선한 스냅샷
    Fresh(Arc<CacheSnapshot>),
    /// 갱신 중 (예약되었거나 이미 진행 중)
    Fetching,
}

/// 캐시 상태 요약 (헬스 체크용).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForexCacheStatus {
    /// 보관 중인 엔트리 수
    pub entries: usize,
    /// 마지막 수집 시각
    pub fetched_at: Option<DateTime<Utc>>,
    /// 신선 여부
    pub fresh: bool,
    /// 갱신 진행 여부
    pub refreshing: bool,
}

/// 환율 캐시.
pub struct ForexCache {
    store: Arc<ForexStore>,
    coordinator: RefreshCoordinator,
    ttl: Duration,
}

impl ForexCache {
    /// 소스와 TTL로 캐시를 생성합니다. 저장소는 빈 상태로 시작합니다.
    pub fn new(source: Arc<dyn ForexSource>, ttl: Duration) -> Self {
        let store = Arc::new(ForexStore::new());
        let coordinator = RefreshCoordinator::new(source, Arc::clone(&store));
        Self {
            store,
            coordinator,
            ttl,
        }
    }

    /// 설정의 TTL로 생성.
    pub fn from_config(source: Arc<dyn ForexSource>, config: &ForexConfig) -> Self {
        Self::new(source, config.ttl())
    }

    /// 캐시 TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 현재 시각 기준 조회.
    pub fn lookup(&self) -> ForexLookup {
        self.lookup_at(Utc::now())
    }

    /// `now` 기준 조회. 신선하지 않으면 갱신을 예약합니다.
    pub fn lookup_at(&self, now: DateTime<Utc>) -> ForexLookup {
        let snapshot = self.store.get();
        if snapshot.is_fresh(now, self.ttl) {
            return ForexLookup::Fresh(snapshot);
        }

        self.coordinator.ensure_refresh_scheduled();
        ForexLookup::Fetching
    }

    /// 신선도와 무관하게 갱신을 예약합니다 (서버 시작 시 예열 등).
    pub fn refresh(&self) -> Option<JoinHandle<()>> {
        self.coordinator.ensure_refresh_scheduled()
    }

    /// 현재 스냅샷 (신선도 무관).
    pub fn snapshot(&self) -> Arc<CacheSnapshot> {
        self.store.get()
    }

    /// `now` 기준 상태 요약.
    pub fn status(&self, now: DateTime<Utc>) -> ForexCacheStatus {
        let snapshot = self.store.get();
        ForexCacheStatus {
            entries: snapshot.entries.len(),
            fetched_at: snapshot.fetched_at,
            fresh: snapshot.is_fresh(now, self.ttl),
            refreshing: self.coordinator.is_refreshing(),
        }
    }
}
