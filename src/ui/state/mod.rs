pub mod app_state;
pub mod auth_store;
