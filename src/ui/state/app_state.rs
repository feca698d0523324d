use dioxus::prelude::{use_signal, Signal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Records,
    Settings,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub page: Signal<Page>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: use_signal(|| Page::Records),
            busy: use_signal(|| false),
            status: use_signal(|| "就緒".to_string()),
        }
    }
}
