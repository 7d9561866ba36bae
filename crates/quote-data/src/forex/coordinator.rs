//! 단일 실행(single-flight) 환율 갱신 코디네이터.
//!
//! 동시에 몇 번 호출되더라도 진행 중인 갱신은 최대 하나입니다.
//! 갱신은 요청 경로와 분리된 tokio 태스크에서 실행되며, 요청은 결과를 기다리지 않습니다.

use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::forex::source::ForexSource;
use crate::forex::store::ForexStore;

/// 환율 갱신 코디네이터.
#[derive(Clone)]
pub struct RefreshCoordinator {
    source: Arc<dyn ForexSource>,
    store: Arc<ForexStore>,
    refreshing: Arc<AtomicBool>,
}

/// 갱신 태스크 종료 시(성공/실패/패닉 무관) 진행 플래그를 해제합니다.
struct RefreshGuard(Arc<AtomicBool>);

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RefreshCoordinator {
    /// 새 코디네이터 생성.
    pub fn new(source: Arc<dyn ForexSource>, store: Arc<ForexStore>) -> Self {
        Self {
            source,
            store,
            refreshing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 갱신이 진행 중인지 확인합니다.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// 진행 중인 갱신이 없으면 새 갱신 태스크를 시작합니다.
    ///
    /// 새 태스크를 시작한 경우에만 `Some(handle)`을 반환합니다.
    /// 이미 갱신 중이면 아무것도 하지 않고 `None`을 반환합니다.
    /// tokio 런타임 안에서 호출해야 합니다.
    pub fn ensure_refresh_scheduled(&self) -> Option<JoinHandle<()>> {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("환율 갱신이 이미 진행 중");
            return None;
        }

        let guard = RefreshGuard(Arc::clone(&self.refreshing));
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);

        Some(tokio::spawn(async move {
            let _guard = guard;
            info!("환율 갱신 시작");

            match source.fetch_rates().await {
                Ok(entries) => {
                    let count = entries.len();
                    store.replace(entries, Utc::now());
                    info!(count, "환율 캐시 갱신 완료");
                }
                Err(e) => {
                    // 기존 스냅샷은 그대로 두고 다음 요청에서 재시도
                    warn!(error = %e, "환율 갱신 실패");
                }
            }
        }))
    }
}
