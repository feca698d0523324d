use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::default_db_path;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::hooks::current_user::use_current_user;
use crate::ui::pages::records::RecordsPage;
use crate::ui::pages::settings::SettingsPage;
use crate::ui::pages::sign_in::SignInPage;
use crate::ui::state::app_state::{AppState, Page};
use crate::ui::state::auth_store::AuthStore;
use crate::usecase::services::record_service::RecordService;
use crate::usecase::services::session_service::SessionService;

#[derive(Clone)]
pub struct Services {
    pub session: Arc<SessionService>,
    pub records: Arc<RecordService>,
}

impl Services {
    pub fn new(db_path: PathBuf) -> Self {
        let repo = Arc::new(SqliteRepo { db_path });
        Self {
            session: Arc::new(SessionService::new(repo.clone())),
            records: Arc::new(RecordService::new(repo)),
        }
    }
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 0 12px; box-sizing: border-box;"
}

pub fn nav_button_style(active: bool) -> &'static str {
    if active {
        "border: 1px solid #36c; background: #eef4ff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}

#[component]
pub fn App() -> Element {
    let db_path = match default_db_path() {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "無法取得資料庫路徑：{err}" }
                }
            };
        }
    };

    let app_state = AppState::new();
    use_context_provider(|| app_state);
    let store = use_context_provider(|| AuthStore::new(None));
    let services = use_context_provider(|| Services::new(db_path));
    let current_user = use_current_user();

    let AppState {
        mut page,
        mut busy,
        mut status,
    } = app_state;

    let services_for_restore = services.clone();
    let store_for_restore = store.clone();
    use_effect(move || {
        *busy.write() = true;
        match run_blocking(|| services_for_restore.session.restore()) {
            Ok(Some(user)) => {
                info!(user_id = user.id.0, "restored session");
                *status.write() = format!("歡迎回來，{}", user.username);
                store_for_restore.set_user(Some(user));
            }
            Ok(None) => {
                *status.write() = "請先登入".to_string();
            }
            Err(err) => {
                error!("failed to restore session: {err}");
                *status.write() = format!("初始化資料庫失敗：{err}");
            }
        }
        *busy.write() = false;
    });

    let current_page = page();
    let body = match current_user() {
        None => rsx! { SignInPage {} },
        Some(user) => match current_page {
            Page::Records => rsx! {
                RecordsPage { key: "records-{user.id.0}", user_id: user.id }
            },
            Page::Settings => rsx! {
                SettingsPage { key: "settings-{user.id.0}", user_id: user.id }
            },
        },
    };
    let signed_in_name = current_user().map(|user| user.username);
    let records_button_style = nav_button_style(current_page == Page::Records);
    let settings_button_style = nav_button_style(current_page == Page::Settings);

    rsx! {
        div {
            style: "{root_container_style()}",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                if let Some(name) = signed_in_name {
                    button {
                        style: "{records_button_style}",
                        onclick: move |_| page.set(Page::Records),
                        "我的紀錄"
                    }
                    button {
                        style: "{settings_button_style}",
                        onclick: move |_| page.set(Page::Settings),
                        "工坊設定"
                    }
                    span { "使用者：{name}" }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            match run_blocking(|| services.session.sign_out()) {
                                Ok(()) => {
                                    store.sign_out();
                                    page.set(Page::Records);
                                    status.set("已登出".to_string());
                                }
                                Err(err) => {
                                    error!("failed to sign out: {err}");
                                    status.set(format!("登出失敗：{err}"));
                                }
                            }
                        },
                        "登出"
                    }
                }
                span { " {status}" }
            }

            {body}
        }
    }
}
