//! Society 데이터 액세스
//!
//! [`SocietyRepository`](society_repo::SocietyRepository)는 `societyData` 컬렉션을 담당합니다.

pub mod society_repo;

pub use society_repo::SocietyRepository;
