//! Ticket 데이터 액세스
//!
//! [`TicketRepository`](ticket_repo::TicketRepository)는 `tickets` 컬렉션을 담당합니다.

pub mod ticket_repo;

pub use ticket_repo::TicketRepository;
