//! Reusable Dioxus RSX components for the solar map.

mod chart_container;
mod data_panel;
mod data_table;
mod loading_spinner;
mod map_view;
mod notice_banner;
mod panel_header;
mod period_selector;
mod search_bar;

pub use chart_container::{ChartContainer, CHART_CONTAINER_ID};
pub use data_panel::DataPanel;
pub use data_table::DataTable;
pub use loading_spinner::LoadingSpinner;
pub use map_view::{MapView, MAP_CONTAINER_ID};
pub use notice_banner::NoticeBanner;
pub use panel_header::PanelHeader;
pub use period_selector::PeriodSelector;
pub use search_bar::SearchBar;
