//! 환율 스냅샷 저장소.
//!
//! 최신 `CacheSnapshot`을 `Arc`로 보관하고, 갱신 시 포인터를 통째로 교체합니다.
//! 락은 포인터 복제/교체 동안에만 잡히며 I/O 동안에는 잡지 않습니다.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use quote_core::{CacheSnapshot, RateEntry};

/// 환율 스냅샷 저장소.
///
/// 프로세스 시작 시 빈 스냅샷으로 생성되며, 성공한 갱신마다 전체가 교체됩니다.
#[derive(Debug, Default)]
pub struct ForexStore {
    snapshot: RwLock<Arc<CacheSnapshot>>,
}

impl ForexStore {
    /// 빈 저장소 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 스냅샷 반환 (비어 있을 수 있음).
    pub fn get(&self) -> Arc<CacheSnapshot> {
        // 쓰기 측은 포인터 교체만 하므로 poison 상태여도 내용은 항상 완전한 스냅샷
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `now - fetched_at < ttl`인 스냅샷이 있으면 true.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.get().is_fresh(now, ttl)
    }

    /// 엔트리와 수집 시각을 한 번에 교체합니다.
    pub fn replace(&self, entries: Vec<RateEntry>, now: DateTime<Utc>) {
        let next = Arc::new(CacheSnapshot::new(entries, now));
        let count = next.entries.len();

        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;

        debug!(count, fetched_at = %now, "환율 스냅샷 교체");
    }
}
