/// Open/close state machine and layout planning for one annotation overlay

use crate::config::OverlayConfig;
use crate::geometry::{AnchorPosition, marker_position, popover_position};

/// Whether an overlay's popover is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationState {
    #[default]
    Closed,
    Open,
}

/// Where a pointer-down landed, relative to one overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Marker,
    Popover,
    Outside,
}

/// User interactions the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationEvent {
    MarkerClicked,
    PointerDown(PointerTarget),
    Dismissed,
}

impl AnnotationState {
    pub fn is_open(&self) -> bool {
        matches!(self, AnnotationState::Open)
    }

    /// Apply one event and return the next state
    ///
    /// - MarkerClicked toggles.
    /// - A pointer-down outside both marker and popover closes an open overlay.
    /// - Dismissed closes an open overlay.
    /// - Everything else leaves the state alone.
    pub fn next(self, event: AnnotationEvent) -> AnnotationState {
        match (self, event) {
            (AnnotationState::Closed, AnnotationEvent::MarkerClicked) => AnnotationState::Open,
            (AnnotationState::Open, AnnotationEvent::MarkerClicked) => AnnotationState::Closed,
            (AnnotationState::Open, AnnotationEvent::PointerDown(PointerTarget::Outside)) => {
                AnnotationState::Closed
            }
            (AnnotationState::Open, AnnotationEvent::Dismissed) => AnnotationState::Closed,
            (state, _) => state,
        }
    }

    /// The document pointer-down listener is only needed while open
    pub fn wants_outside_listener(&self) -> bool {
        self.is_open()
    }
}

/// Classify a pointer-down given containment checks against marker and popover
pub fn classify_pointer(in_marker: bool, in_popover: bool) -> PointerTarget {
    if in_marker {
        PointerTarget::Marker
    } else if in_popover {
        PointerTarget::Popover
    } else {
        PointerTarget::Outside
    }
}

/// What to draw into the render target for one overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub marker: AnchorPosition,
    pub popover: Option<AnchorPosition>,
}

/// Plan the overlay for the current frame
///
/// Returns `None` when nothing but the invisible anchor should render: the
/// render target is missing, or the anchor has not been measured yet.
pub fn plan_layout(
    state: AnnotationState,
    anchor: Option<AnchorPosition>,
    target_available: bool,
    config: &OverlayConfig,
) -> Option<OverlayLayout> {
    if !target_available {
        return None;
    }

    let marker = marker_position(anchor?, config.marker_offset);
    let popover = state
        .is_open()
        .then(|| popover_position(marker, config.marker_size, config.popover_gap));

    Some(OverlayLayout { marker, popover })
}
