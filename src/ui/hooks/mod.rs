pub mod current_user;
pub mod workshop_settings;
