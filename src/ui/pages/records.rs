use chrono::Local;
use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::warn;

use crate::app::Services;
use crate::domain::entities::record::{format_work_date, parse_work_date, NewPieceRecord};
use crate::domain::entities::user::UserId;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::loading_view::LoadingView;
use crate::ui::hooks::workshop_settings::use_workshop_settings;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::record_service::{records_table_config, total_quantity};

pub fn records_page_title(business_label: &str) -> String {
    format!("{business_label}・我的紀錄")
}

#[component]
pub fn RecordsPage(user_id: UserId) -> Element {
    let services = use_context::<Services>();
    let AppState {
        mut busy,
        mut status,
        ..
    } = use_context::<AppState>();
    let settings = use_workshop_settings();
    let mut reload = use_signal(|| 0_u64);
    let mut date_input = use_signal(|| format_work_date(Local::now().date_naive()));
    let mut product_input = use_signal(String::new);
    let mut quantity_input = use_signal(String::new);
    let mut note_input = use_signal(String::new);

    let services_for_list = services.clone();
    let records = use_resource(move || {
        let services = services_for_list.clone();
        let _generation = reload();
        async move { run_blocking(|| services.records.list_records(user_id)) }
    });

    let resolved = settings();
    let title = records_page_title(&resolved.business_label);
    let piece_unit = resolved.piece_unit.clone();
    let body = match &*records.read() {
        None => rsx! { LoadingView {} },
        Some(Ok(list)) => {
            let total = total_quantity(list);
            let count = list.len();
            let config = records_table_config(list, &resolved);
            rsx! {
                p { style: "margin: 4px 0;", "合計：{total} {piece_unit}（{count} 筆）" }
                DataTable { config }
            }
        }
        Some(Err(err)) => rsx! {
            p { style: "color: #c22;", "載入紀錄失敗：{err}" }
        },
    };

    let services_for_import = services.clone();
    let services_for_add = services.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; flex: 1; min-height: 0;",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                h2 { style: "margin: 0;", "{title}" }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file() else {
                            status.set("已取消匯入".to_string());
                            return;
                        };

                        busy.set(true);
                        status.set(format!("正在匯入 {}", file_path.display()));
                        match run_blocking(|| services_for_import.records.import_csv(user_id, &file_path)) {
                            Ok(count) => {
                                status.set(format!("已匯入 {count} 筆紀錄"));
                                *reload.write() += 1;
                            }
                            Err(err) => {
                                status.set(format!("匯入失敗：{err}"));
                            }
                        }
                        busy.set(false);
                    },
                    "匯入 CSV"
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;",
                input {
                    r#type: "date",
                    value: "{date_input}",
                    oninput: move |event| date_input.set(event.value()),
                }
                input {
                    placeholder: "品項",
                    value: "{product_input}",
                    oninput: move |event| product_input.set(event.value()),
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "數量（{piece_unit}）",
                    value: "{quantity_input}",
                    oninput: move |event| quantity_input.set(event.value()),
                }
                input {
                    placeholder: "備註",
                    value: "{note_input}",
                    oninput: move |event| note_input.set(event.value()),
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(work_date) = parse_work_date(&date_input()) else {
                            status.set("日期格式需為 YYYY-MM-DD".to_string());
                            return;
                        };
                        let Ok(quantity) = quantity_input().trim().parse::<i64>() else {
                            status.set("數量需為整數".to_string());
                            return;
                        };
                        let record = NewPieceRecord {
                            work_date,
                            product: product_input(),
                            quantity,
                            note: note_input(),
                        };

                        busy.set(true);
                        match run_blocking(|| services_for_add.records.add_record(user_id, record)) {
                            Ok(_) => {
                                product_input.set(String::new());
                                quantity_input.set(String::new());
                                note_input.set(String::new());
                                status.set("已新增紀錄".to_string());
                                *reload.write() += 1;
                            }
                            Err(err) => {
                                warn!("add record failed: {err}");
                                status.set(format!("新增失敗：{err}"));
                            }
                        }
                        busy.set(false);
                    },
                    "新增"
                }
            }

            {body}
        }
    }
}
