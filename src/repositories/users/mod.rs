//! User 데이터 액세스
//!
//! [`UserRepository`](user_repo::UserRepository)는 활성 컬렉션 `users`와
//! 소프트 삭제 컬렉션 `deleted_users`를 함께 담당합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
