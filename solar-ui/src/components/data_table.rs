//! Table of samples for the active period.

use dioxus::prelude::*;
use solar_core::table::{TableBody, TableView, COLUMN_COUNT};

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub view: TableView,
}

/// Renders a [`TableView`]: one row per sample, or a single spanning
/// placeholder row.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let headers = props.view.headers;

    rsx! {
        div {
            class: "table-container",
            style: "overflow-x: auto; margin-bottom: 12px;",
            table {
                id: "data-table",
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for header in headers {
                            th {
                                style: "text-align: left; padding: 6px 8px; border-bottom: 1px solid #555;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    {match &props.view.body {
                        TableBody::Rows(rows) => rsx! {
                            for (i, row) in rows.iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    for cell in row.iter() {
                                        td {
                                            style: "padding: 4px 8px; border-bottom: 1px solid #333;",
                                            "{cell}"
                                        }
                                    }
                                }
                            }
                        },
                        TableBody::Placeholder(text) => rsx! {
                            tr {
                                td {
                                    colspan: "{COLUMN_COUNT}",
                                    style: "text-align: center; padding: 12px;",
                                    "{text}"
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}
