//! 핸들러 테스트용 메모리 서비스 묶음

use std::sync::Arc;

use actix_web::web;
use chrono::Duration;

use crate::repositories::memory_store::MemoryStore;
use crate::services::managers::ManagerService;
use crate::services::societies::SocietyService;
use crate::services::tickets::TicketService;
use crate::services::users::UserService;

pub(crate) struct MemoryServices {
    pub societies: Arc<SocietyService>,
    pub managers: Arc<ManagerService>,
    pub users: Arc<UserService>,
    pub tickets: Arc<TicketService>,
}

impl MemoryServices {
    pub(crate) fn new() -> Self {
        Self {
            societies: Arc::new(SocietyService::with_store(Arc::new(MemoryStore::new("societyData")))),
            managers: Arc::new(ManagerService::with_stores(
                Arc::new(MemoryStore::new("managers")),
                Arc::new(MemoryStore::new("deleted_managers")),
                Duration::days(30),
            )),
            users: Arc::new(UserService::with_stores(
                Arc::new(MemoryStore::new("users")),
                Arc::new(MemoryStore::new("deleted_users")),
                Duration::days(30),
            )),
            tickets: Arc::new(TicketService::with_store(Arc::new(MemoryStore::new("tickets")))),
        }
    }

    /// 라우트가 사용할 서비스를 앱 데이터로 등록합니다.
    pub(crate) fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.societies.clone()))
            .app_data(web::Data::from(self.managers.clone()))
            .app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.tickets.clone()));
    }
}
