//! Manager 데이터 액세스
//!
//! [`ManagerRepository`](manager_repo::ManagerRepository)는 활성 컬렉션 `managers`와
//! 소프트 삭제 컬렉션 `deleted_managers`를 함께 담당합니다.

pub mod manager_repo;

pub use manager_repo::ManagerRepository;
