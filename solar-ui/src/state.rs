//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use solar_core::config::{ApiConfig, SUGGESTION_DEBOUNCE_MS};
use solar_core::debounce::Debouncer;
use solar_core::geocode::GeocodingClient;
use solar_core::models::{Coordinate, GeocodeResult};
use solar_core::notice::NoticeBoard;
use solar_core::panel::PanelLayout;
use solar_core::selection::SelectionController;
use solar_core::solar::SolarDataClient;

/// HTTP clients for the backend, cheap to clone.
#[derive(Clone)]
pub struct Backend {
    pub solar: SolarDataClient,
    pub geocoder: GeocodingClient,
}

impl Backend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            solar: SolarDataClient::new(config.clone()),
            geocoder: GeocodingClient::new(config),
        }
    }
}

/// Shared application state for the solar map.
#[derive(Clone, Copy)]
pub struct AppState {
    pub backend: Signal<Backend>,
    /// Selected location, loaded series and active period
    pub selection: Signal<SelectionController>,
    /// Side panel geometry
    pub panel: Signal<PanelLayout>,
    /// The visible transient notice, if any
    pub notices: Signal<NoticeBoard>,
    /// Coalesces search-as-you-type requests
    pub debouncer: Signal<Debouncer>,
    /// Candidates shown in the search dropdown
    pub suggestions: Signal<Vec<GeocodeResult>>,
    /// Current contents of the search input
    pub search_text: Signal<String>,
    /// Whether an explicit search is in flight
    pub searching: Signal<bool>,
    /// Heading of the data panel
    pub location_name: Signal<String>,
    /// Map click not yet handled, written from the Leaflet callback
    pub pending_click: Signal<Option<Coordinate>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            backend: Signal::new(Backend::new(config)),
            selection: Signal::new(SelectionController::new()),
            panel: Signal::new(PanelLayout::new()),
            notices: Signal::new(NoticeBoard::new()),
            debouncer: Signal::new(Debouncer::new(SUGGESTION_DEBOUNCE_MS)),
            suggestions: Signal::new(Vec::new()),
            search_text: Signal::new(String::new()),
            searching: Signal::new(false),
            location_name: Signal::new(String::new()),
            pending_click: Signal::new(None),
        }
    }
}
