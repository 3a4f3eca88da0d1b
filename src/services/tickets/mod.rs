//! 티켓 서비스 모듈

pub mod ticket_service;

pub use ticket_service::TicketService;
