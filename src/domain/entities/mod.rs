pub mod record;
pub mod table;
pub mod user;
