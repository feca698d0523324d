use dioxus::prelude::*;

use crate::domain::entities::table::{TableConfig, TableLayout};
use crate::ui::components::data_table::DataTable;

pub const LOADING_TABLE_ID: &str = "my-records-loading";

/// Table configuration shown while a records table is still being fetched.
pub fn loading_table_config() -> TableConfig {
    TableConfig {
        id: LOADING_TABLE_ID.to_string(),
        columns: Vec::new(),
        data: Vec::new(),
        is_loading: true,
        layout: TableLayout::Auto,
    }
}

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        DataTable { config: loading_table_config() }
    }
}
