pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;
