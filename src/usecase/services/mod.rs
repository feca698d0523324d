pub mod record_service;
pub mod session_service;
