use dioxus::prelude::*;
use tracing::error;

use crate::app::Services;
use crate::domain::entities::user::{
    UserId, WorkshopSettings, DEFAULT_BUSINESS_LABEL, DEFAULT_PIECE_UNIT,
};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::hooks::workshop_settings::use_workshop_settings;
use crate::ui::state::app_state::AppState;
use crate::ui::state::auth_store::AuthStore;

#[component]
pub fn SettingsPage(user_id: UserId) -> Element {
    let services = use_context::<Services>();
    let store = use_context::<AuthStore>();
    let AppState {
        mut busy,
        mut status,
        ..
    } = use_context::<AppState>();
    let resolved = use_workshop_settings();
    let mut piece_unit_input = use_signal(|| {
        store
            .workshop_settings()
            .and_then(|settings| settings.piece_unit)
            .unwrap_or_default()
    });
    let mut business_label_input = use_signal(|| {
        store
            .workshop_settings()
            .and_then(|settings| settings.business_label)
            .unwrap_or_default()
    });

    let current = resolved();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; max-width: 360px;",
            h2 { style: "margin: 0;", "工坊設定" }
            label {
                style: "display: flex; flex-direction: column; gap: 4px;",
                "計件單位"
                input {
                    placeholder: DEFAULT_PIECE_UNIT,
                    value: "{piece_unit_input}",
                    oninput: move |event| piece_unit_input.set(event.value()),
                }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 4px;",
                "工坊名稱"
                input {
                    placeholder: DEFAULT_BUSINESS_LABEL,
                    value: "{business_label_input}",
                    oninput: move |event| business_label_input.set(event.value()),
                }
            }
            p {
                style: "color: #666; margin: 0;",
                "目前顯示：{current.business_label}，單位「{current.piece_unit}」"
            }
            button {
                disabled: busy(),
                onclick: move |_| {
                    if busy() {
                        return;
                    }
                    busy.set(true);
                    let settings = WorkshopSettings {
                        piece_unit: Some(piece_unit_input()),
                        business_label: Some(business_label_input()),
                    };
                    match run_blocking(|| services.session.update_workshop_settings(user_id, settings)) {
                        Ok(saved) => {
                            piece_unit_input.set(saved.piece_unit.clone().unwrap_or_default());
                            business_label_input.set(saved.business_label.clone().unwrap_or_default());
                            store.update_workshop(saved);
                            status.set("已儲存工坊設定".to_string());
                        }
                        Err(err) => {
                            error!("saving workshop settings failed: {err}");
                            status.set(format!("儲存失敗：{err}"));
                        }
                    }
                    busy.set(false);
                },
                "儲存"
            }
        }
    }
}
