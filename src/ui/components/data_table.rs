use dioxus::prelude::*;

use crate::domain::entities::table::{TableConfig, TableDisplayState, TableLayout};

const SKELETON_ROWS: usize = 5;

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 6px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f3f3f3; border: 1px solid #bbb; padding: 6px; white-space: nowrap;"
}

pub fn table_layout_style(layout: TableLayout) -> &'static str {
    match layout {
        TableLayout::Auto => "table-layout: auto; width: auto;",
        TableLayout::Fixed => "table-layout: fixed; width: 100%;",
    }
}

#[component]
pub fn DataTable(config: TableConfig) -> Element {
    let layout_style = table_layout_style(config.layout);
    let layout_name = config.layout.as_str();

    match config.display_state() {
        TableDisplayState::Loading => rsx! {
            div {
                id: "{config.id}",
                style: "{table_container_style()}",
                role: "status",
                "aria-busy": "true",
                "data-layout": "{layout_name}",
                table { style: "border-collapse: collapse; {layout_style}",
                    tbody {
                        for idx in 0..SKELETON_ROWS {
                            tr { key: "{idx}",
                                td { style: "padding: 8px;",
                                    div { style: "height: 14px; min-width: 240px; border-radius: 4px; background: #e6e6e6;" }
                                }
                            }
                        }
                    }
                }
                p { style: "margin: 8px; color: #666;", "載入中…" }
            }
        },
        TableDisplayState::Empty => rsx! {
            div {
                id: "{config.id}",
                style: "{table_container_style()}",
                "data-layout": "{layout_name}",
                p { style: "margin: 16px; color: #666;", "尚無資料" }
            }
        },
        TableDisplayState::Populated => rsx! {
            div {
                id: "{config.id}",
                style: "{table_container_style()}",
                "data-layout": "{layout_name}",
                table { style: "border-collapse: collapse; background: #fff; {layout_style}",
                    thead {
                        tr {
                            for column in config.columns.iter() {
                                th { key: "{column.key}", style: "{table_header_cell_style()}", "{column.header}" }
                            }
                        }
                    }
                    tbody {
                        {config.data.iter().enumerate().map(|(row_idx, row)| {
                            let cells = row.iter().enumerate().map(|(col_idx, value)| {
                                let alignment = config
                                    .columns
                                    .get(col_idx)
                                    .map(|column| column.align.as_css())
                                    .unwrap_or("left");
                                rsx!(
                                    td {
                                        style: "border: 1px solid #bbb; padding: 4px 6px; text-align: {alignment};",
                                        "{value}"
                                    }
                                )
                            });
                            rsx!(
                                tr { key: "{row_idx}", {cells} }
                            )
                        })}
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::table::ColumnDef;
    use dioxus::dioxus_core::VirtualDom;

    fn render(config: TableConfig) -> String {
        let mut dom =
            VirtualDom::new_with_props(DataTable, DataTableProps::builder().config(config).build());
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn config(is_loading: bool, data: Vec<Vec<String>>) -> TableConfig {
        TableConfig {
            id: "records".to_string(),
            columns: vec![ColumnDef::new("product", "品項")],
            data,
            is_loading,
            layout: TableLayout::Auto,
        }
    }

    #[test]
    fn loading_table_renders_busy_placeholder() {
        let html = render(config(true, vec![vec!["襯衫".to_string()]]));

        assert!(html.contains(r#"aria-busy="true""#), "{html}");
        assert!(html.contains(r#"role="status""#), "{html}");
        assert!(html.contains("載入中…"), "{html}");
        assert!(!html.contains("襯衫"), "{html}");
        assert!(!html.contains("尚無資料"), "{html}");
    }

    #[test]
    fn empty_table_renders_no_data_message() {
        let html = render(config(false, Vec::new()));

        assert!(html.contains("尚無資料"), "{html}");
        assert!(!html.contains("aria-busy"), "{html}");
        assert!(!html.contains("<th"), "{html}");
    }

    #[test]
    fn populated_table_renders_headers_and_cells() {
        let html = render(config(false, vec![vec!["襯衫".to_string()]]));

        assert!(html.contains(r#"id="records""#), "{html}");
        assert!(html.contains("品項"), "{html}");
        assert!(html.contains("襯衫"), "{html}");
    }

    #[test]
    fn root_carries_layout_mode() {
        let mut fixed = config(false, vec![vec!["襯衫".to_string()]]);
        fixed.layout = TableLayout::Fixed;

        assert!(render(fixed).contains(r#"data-layout="fixed""#));
        assert!(render(config(false, Vec::new())).contains(r#"data-layout="auto""#));
    }
}
