/// Anchor geometry: viewport to document conversion and overlay offsets
use serde::{Deserialize, Serialize};

/// Document-relative position of an anchor (or of anything placed next to it)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorPosition {
    pub top: f64,
    pub left: f64,
}

impl AnchorPosition {
    pub fn new(top: f64, left: f64) -> AnchorPosition {
        AnchorPosition { top, left }
    }

    /// CSS for an element placed at this position inside the render target
    pub fn to_style(&self) -> String {
        format!("position: absolute; top: {}px; left: {}px;", self.top, self.left)
    }
}

/// Bounding box origin of an element relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRect {
    pub top: f64,
    pub left: f64,
}

/// Current window scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Fixed pixel offset from an anchor to its marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerOffset {
    pub top: f64,
    pub left: f64,
}

impl Default for MarkerOffset {
    fn default() -> Self {
        MarkerOffset { top: -6.0, left: 2.0 }
    }
}

/// Convert a viewport-relative rect into absolute document coordinates
///
/// The render target sits at the document origin, so everything mounted into
/// it must be placed relative to the unscrolled document, not the viewport.
pub fn document_position(rect: ViewportRect, scroll: ScrollOffset) -> AnchorPosition {
    AnchorPosition {
        top: rect.top + scroll.y,
        left: rect.left + scroll.x,
    }
}

/// Where the marker goes for an anchor at `anchor`
pub fn marker_position(anchor: AnchorPosition, offset: MarkerOffset) -> AnchorPosition {
    AnchorPosition {
        top: anchor.top + offset.top,
        left: anchor.left + offset.left,
    }
}

/// Where the popover goes: level with the marker, just past its right edge
pub fn popover_position(marker: AnchorPosition, marker_size: f64, gap: f64) -> AnchorPosition {
    AnchorPosition {
        top: marker.top,
        left: marker.left + marker_size + gap,
    }
}
