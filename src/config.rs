/// Overlay configuration shared by every annotation on the page

use crate::geometry::MarkerOffset;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Id of the page-level element all overlays mount into
pub const DEFAULT_TARGET_ID: &str = "bug-indicator-root";

/// Footnote shown under every description
pub const DEFAULT_FOOTNOTE: &str = "In the Replay extension, ask it to fix this.";

/// Tunable overlay settings
///
/// Every field has a default, so a partial object from JavaScript (or `{}`)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayConfig {
    pub target_id: String,
    pub marker_offset: MarkerOffset,
    pub marker_size: f64,
    pub popover_gap: f64,
    pub popover_width: f64,
    pub z_index: i32,
    pub footnote: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            target_id: DEFAULT_TARGET_ID.to_string(),
            marker_offset: MarkerOffset::default(),
            marker_size: 16.0,
            popover_gap: 4.0,
            popover_width: 288.0,
            z_index: 9998,
            footnote: DEFAULT_FOOTNOTE.to_string(),
        }
    }
}

impl OverlayConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<OverlayConfig, String> {
        let config: OverlayConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make overlays unplaceable
    pub fn validate(&self) -> Result<(), String> {
        // an HTML id: no whitespace, starts with a letter
        let id_pattern = Regex::new(r"^[A-Za-z][A-Za-z0-9_:.-]*$")
            .map_err(|e| format!("Invalid id pattern: {}", e))?;

        if !id_pattern.is_match(&self.target_id) {
            return Err(format!("Invalid render target id: {:?}", self.target_id));
        }

        let sizes = [
            ("markerSize", self.marker_size),
            ("popoverGap", self.popover_gap),
            ("popoverWidth", self.popover_width),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        // the popover stacks one above the marker
        if !(0..i32::MAX).contains(&self.z_index) {
            return Err(format!("zIndex must be in 0..{}, got {}", i32::MAX, self.z_index));
        }

        if !self.marker_offset.top.is_finite() || !self.marker_offset.left.is_finite() {
            return Err("markerOffset must be finite".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = OverlayConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.target_id, "bug-indicator-root");
        assert_eq!(config.marker_offset, MarkerOffset { top: -6.0, left: 2.0 });
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = OverlayConfig::from_json("{}").unwrap();
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = OverlayConfig::from_json(
            r#"{"targetId": "overlay-root", "markerOffset": {"top": -8, "left": -4}, "zIndex": 50}"#,
        )
        .unwrap();

        assert_eq!(config.target_id, "overlay-root");
        assert_eq!(config.marker_offset, MarkerOffset { top: -8.0, left: -4.0 });
        assert_eq!(config.z_index, 50);
        assert_eq!(config.marker_size, 16.0);
    }

    #[test]
    fn test_rejects_bad_target_id() {
        let result = OverlayConfig::from_json(r#"{"targetId": "not an id"}"#);
        assert!(result.is_err());

        let result = OverlayConfig::from_json(r#"{"targetId": ""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_sizes() {
        let config = OverlayConfig {
            marker_size: -1.0,
            ..OverlayConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.contains("markerSize"));
    }

    #[test]
    fn test_partial_marker_offset_keeps_other_default() {
        let config = OverlayConfig::from_json(r#"{"markerOffset": {"top": -8}}"#).unwrap();
        assert_eq!(config.marker_offset, MarkerOffset { top: -8.0, left: 2.0 });
    }

    #[test]
    fn test_rejects_out_of_range_z_index() {
        let err = OverlayConfig::from_json(r#"{"zIndex": 2147483647}"#).unwrap_err();
        assert!(err.contains("zIndex"));

        let err = OverlayConfig::from_json(r#"{"zIndex": -1}"#).unwrap_err();
        assert!(err.contains("zIndex"));

        let config = OverlayConfig::from_json(r#"{"zIndex": 2147483646}"#).unwrap();
        assert_eq!(config.z_index.saturating_add(1), i32::MAX);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = OverlayConfig::from_json("{targetId:").unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&OverlayConfig::default()).unwrap();

        assert!(json.contains("\"targetId\":\"bug-indicator-root\""));
        let back: OverlayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OverlayConfig::default());
    }
}
