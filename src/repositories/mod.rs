//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`DocumentStore`] trait을 통해 컬렉션에 접근합니다.
//! 운영 환경에서는 MongoDB 컬렉션을 감싼 [`CollectionRepository`]가,
//! 테스트에서는 메모리 저장소가 이 trait을 구현합니다.
//!
//! ```text
//! Services
//!    │  Arc<dyn DocumentStore>
//!    ▼
//! CollectionRepository ──► MongoDB collection
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::managers::ManagerRepository;
//!
//! let repo = ManagerRepository::instance();
//! let managers = repo.active().find_many(RecordFilter::All).await?;
//! ```

pub mod document_store;
pub mod collection_repo;
pub mod societies;
pub mod tickets;
pub mod managers;
pub mod users;

#[cfg(test)]
pub(crate) mod memory_store;

pub use collection_repo::CollectionRepository;
pub use document_store::{DocumentStore, RecordFilter};
