//! # 보존 기간 정리 작업
//!
//! `PURGE_INTERVAL_SECS`가 설정되면 주기적으로 모든 삭제 컬렉션에서
//! 보존 기간이 지난 레코드를 영구 삭제합니다. 설정이 없으면 정리는
//! `DELETE /api/deleted-users/cleanup` 같은 엔드포인트 호출로만 일어납니다.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::services::lifecycle::SoftDeleteLifecycle;
use crate::services::managers::ManagerService;
use crate::services::users::UserService;

/// 주어진 생명주기들에 대해 정리를 한 번 수행하고 총 삭제 건수를 반환합니다.
///
/// 한 컬렉션의 실패가 다른 컬렉션의 정리를 막지 않습니다.
pub async fn sweep_once(lifecycles: &[&SoftDeleteLifecycle], now: DateTime<Utc>) -> u64 {
    let mut total = 0;

    for lifecycle in lifecycles {
        match lifecycle.cleanup(now).await {
            Ok(removed) => total += removed,
            Err(e) => log::error!(
                "❌ {} 정리 실패: {}",
                lifecycle.deleted_collection(),
                e
            ),
        }
    }

    total
}

/// 백그라운드 정리 작업을 시작합니다.
///
/// actix 런타임 안에서 호출해야 합니다.
pub fn spawn_retention_sweeper(interval: Duration) {
    log::info!("🧹 보존 기간 정리 작업 시작: {}초 주기", interval.as_secs());

    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(interval);

        loop {
            ticker.tick().await;

            let managers = ManagerService::instance();
            let users = UserService::instance();
            let removed = sweep_once(&[managers.lifecycle(), users.lifecycle()], Utc::now()).await;

            log::debug!("보존 기간 정리 완료: {}건", removed);
        }
    });
}
