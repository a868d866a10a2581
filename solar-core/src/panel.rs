//! Geometry of the collapsible, resizable side panel.
//!
//! Pure state: the UI reads [`PanelLayout::rendered_width`] and
//! [`PanelLayout::is_interactive`] when it renders, so handlers are bound once
//! and never need re-attaching after a collapse/expand cycle.

pub const MIN_PANEL_WIDTH: f64 = 500.0;
pub const MAX_PANEL_WIDTH: f64 = 900.0;
pub const DEFAULT_PANEL_WIDTH: f64 = 650.0;

/// Fraction of the pointer displacement applied to the width per move.
pub const RESIZE_DAMPING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    collapsed: bool,
    /// Last known expanded width, always within bounds.
    width: f64,
    /// Pointer x where the current drag started.
    drag_origin: Option<f64>,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelLayout {
    /// Starts collapsed, remembering the default width for the first expand.
    pub fn new() -> Self {
        Self {
            collapsed: true,
            width: DEFAULT_PANEL_WIDTH,
            drag_origin: None,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Controls inside the panel accept input only while expanded.
    pub fn is_interactive(&self) -> bool {
        !self.collapsed
    }

    pub fn is_resizing(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Expanded width in whole pixels, remembered while collapsed.
    pub fn width_px(&self) -> u32 {
        self.width.round() as u32
    }

    /// Width to lay out right now: zero while collapsed.
    pub fn rendered_width(&self) -> u32 {
        if self.collapsed {
            0
        } else {
            self.width_px()
        }
    }

    /// Toggle glyph: points toward the panel's next state.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.collapsed {
            "▶"
        } else {
            "◀"
        }
    }

    /// Force the expanded geometry at the default width, as a new selection
    /// does. Returns whether anything changed.
    pub fn expand(&mut self) -> bool {
        let changed = self.collapsed || self.width != DEFAULT_PANEL_WIDTH;
        self.collapsed = false;
        self.width = DEFAULT_PANEL_WIDTH;
        changed
    }

    /// Flip collapsed/expanded. Does nothing unless a location is selected.
    /// Returns whether anything changed.
    pub fn toggle(&mut self, location_selected: bool) -> bool {
        if !location_selected {
            return false;
        }
        self.collapsed = !self.collapsed;
        if self.collapsed {
            self.drag_origin = None;
        }
        true
    }

    /// Begin a resize drag at pointer x. Ignored while collapsed.
    pub fn start_resize(&mut self, pointer_x: f64) -> bool {
        if self.collapsed {
            return false;
        }
        self.drag_origin = Some(pointer_x);
        true
    }

    /// Apply a pointer move. Returns the new width in pixels if it was
    /// recomputed; the chart must then be re-fit.
    ///
    /// Displacement is measured from the drag origin and applied to the
    /// current width on each move, so moving right narrows the panel.
    pub fn drag_resize(&mut self, pointer_x: f64) -> Option<u32> {
        if self.collapsed {
            return None;
        }
        let origin = self.drag_origin?;
        let delta = (pointer_x - origin) * RESIZE_DAMPING;
        self.width = (self.width - delta).clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
        Some(self.width_px())
    }

    /// Finish the drag. Returns whether a drag was active.
    pub fn end_resize(&mut self) -> bool {
        self.drag_origin.take().is_some()
    }
}
