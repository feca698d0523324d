use dioxus::prelude::*;
use tracing::warn;

use crate::app::Services;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::hooks::workshop_settings::use_workshop_settings;
use crate::ui::state::app_state::AppState;
use crate::ui::state::auth_store::AuthStore;

#[component]
pub fn SignInPage() -> Element {
    let services = use_context::<Services>();
    let store = use_context::<AuthStore>();
    let AppState {
        mut busy,
        mut status,
        ..
    } = use_context::<AppState>();
    let settings = use_workshop_settings();
    let mut username = use_signal(String::new);
    let business_label = settings().business_label;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; max-width: 320px; margin: 48px auto;",
            h2 { "{business_label}記件" }
            label {
                style: "display: flex; flex-direction: column; gap: 4px;",
                "使用者名稱"
                input {
                    value: "{username}",
                    oninput: move |event| username.set(event.value()),
                }
            }
            button {
                disabled: busy(),
                onclick: move |_| {
                    if busy() {
                        return;
                    }
                    busy.set(true);
                    match run_blocking(|| services.session.sign_in(&username())) {
                        Ok(user) => {
                            status.set(format!("歡迎，{}", user.username));
                            username.set(String::new());
                            store.set_user(Some(user));
                        }
                        Err(err) => {
                            warn!("sign in failed: {err}");
                            status.set(format!("登入失敗：{err}"));
                        }
                    }
                    busy.set(false);
                },
                "登入"
            }
        }
    }
}
