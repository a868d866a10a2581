//! Selection state machine: which location is chosen and which series is shown.
//!
//! The controller never performs I/O. Selecting a location hands back a
//! [`FetchTicket`]; the caller runs the fetch and reports the outcome through
//! [`SelectionController::complete`]. Only the most recently issued ticket is
//! applied, so a slow response for an earlier click can no longer overwrite
//! the series of a later one.

use crate::error::{Result, SolarError};
use crate::models::{Coordinate, GeocodeResult, Period, ServiceArea, SolarSample, SolarSeries, THAILAND};
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected, or the last fetch failed.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// A series is available for the active period.
    Loaded,
}

/// Everything the renderers and the panel read about the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Where the marker currently sits.
    pub marker: Option<Coordinate>,
    /// Last successfully fetched series. Kept on failure.
    pub series: Option<SolarSeries>,
    pub period: Period,
    /// Gates panel toggling. Set on a successful load, cleared on failure.
    pub location_selected: bool,
}

/// Proof that a fetch was requested, matched against later completions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    pub coordinate: Coordinate,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened when a fetch outcome was reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The series was stored; render the active period.
    Loaded,
    /// The fetch failed; show the error, keep the previous panel content.
    Failed(SolarError),
    /// A newer selection superseded this fetch; nothing changed.
    Stale,
}

/// Samples of one period, borrowed from the held series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodView<'a> {
    pub period: Period,
    pub samples: &'a [SolarSample],
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    phase: Phase,
    area: ServiceArea,
    issued: u64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Controller restricted to Thailand.
    pub fn new() -> Self {
        Self::with_area(THAILAND)
    }

    pub fn with_area(area: ServiceArea) -> Self {
        Self {
            state: SelectionState::default(),
            phase: Phase::Idle,
            area,
            issued: 0,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn area(&self) -> ServiceArea {
        self.area
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Move the marker to `coordinate` and start loading its series.
    ///
    /// Valid from any phase. Coordinates outside the service area are
    /// rejected without touching the state.
    pub fn select_coordinate(&mut self, coordinate: Coordinate) -> Result<FetchTicket> {
        let coordinate = self.area.validate(coordinate)?;
        self.issued += 1;
        self.state.marker = Some(coordinate);
        self.phase = Phase::Loading;
        info!("Selected coordinates: {}", coordinate);
        Ok(FetchTicket {
            seq: self.issued,
            coordinate,
        })
    }

    /// Accept a geocoding candidate. The caller re-centers the map on
    /// `ticket.coordinate`.
    pub fn select_search_result(&mut self, result: &GeocodeResult) -> Result<FetchTicket> {
        if let Err(err) = self.area.validate(result.coordinate) {
            warn!(
                "Rejected search result '{}' at {}",
                result.display_name, result.coordinate
            );
            return Err(err);
        }
        info!(
            "Selected location: {}, Coordinates: {}",
            result.display_name, result.coordinate
        );
        self.select_coordinate(result.coordinate)
    }

    /// Report the outcome of the fetch started with `ticket`.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<SolarSeries>) -> Completion {
        if ticket.seq != self.issued {
            debug!(
                "Discarding stale response #{} for {} (latest is #{})",
                ticket.seq, ticket.coordinate, self.issued
            );
            return Completion::Stale;
        }
        match outcome {
            Ok(series) => {
                self.state.series = Some(series);
                self.state.location_selected = true;
                self.phase = Phase::Loaded;
                Completion::Loaded
            }
            Err(err) => {
                warn!("Error fetching solar data for {}: {}", ticket.coordinate, err);
                self.state.location_selected = false;
                self.phase = Phase::Idle;
                Completion::Failed(err)
            }
        }
    }

    /// Switch the displayed period without refetching.
    ///
    /// The choice is always remembered for the next load; a view is only
    /// returned while a series is loaded.
    pub fn change_period(&mut self, period: Period) -> Option<PeriodView<'_>> {
        self.state.period = period;
        if self.phase != Phase::Loaded {
            return None;
        }
        self.active_view()
    }

    /// The active period's samples from whatever series is held, loaded or
    /// retained after a failure.
    pub fn active_view(&self) -> Option<PeriodView<'_>> {
        let series = self.state.series.as_ref()?;
        Some(PeriodView {
            period: self.state.period,
            samples: series.samples(self.state.period),
        })
    }
}
