//! Society 서비스 모듈

pub mod society_service;

pub use society_service::SocietyService;
