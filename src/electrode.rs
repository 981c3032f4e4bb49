//! Electrode image panels
//!
//! Before/after photographs of each electrode, captioned with the operating
//! hours of the track the electrode belongs to.

use serde::{Deserialize, Serialize};

use crate::mass::Electrode;

/// Caption under every "before" image.
pub const BEFORE_CAPTION: &str = "Before experiment (new condition)";

/// Configuration of one electrode's before/after images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElectrodeImage {
    key: String,
    label: String,
    before: String,
    after: String,
    track: String,
    electrode: Electrode,
}

impl ElectrodeImage {
    /// Create a new electrode image entry.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
        track: impl Into<String>,
        electrode: Electrode,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            before: before.into(),
            after: after.into(),
            track: track.into(),
            electrode,
        }
    }

    /// Unique key, e.g. `"304_cathode"`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Path of the "before" image.
    #[must_use]
    pub fn before(&self) -> &str {
        &self.before
    }

    /// Path of the "after" image.
    #[must_use]
    pub fn after(&self) -> &str {
        &self.after
    }

    /// ID of the owning track.
    #[must_use]
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Which electrode is pictured.
    #[must_use]
    pub const fn electrode(&self) -> Electrode {
        self.electrode
    }

    /// Resolve captions given the owning track's total hours.
    ///
    /// `None` hours (the track failed to summarize) leaves the after caption
    /// empty.
    #[must_use]
    pub fn panel(&self, total_hours: Option<f64>) -> ElectrodePanel {
        ElectrodePanel {
            label: self.label.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
            before_caption: BEFORE_CAPTION.to_string(),
            after_caption: total_hours.map(|h| format!("After {h:.1} hours of operation")),
        }
    }
}

/// Rendered electrode panel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ElectrodePanel {
    /// Display label
    pub label: String,
    /// Path of the "before" image
    pub before: String,
    /// Path of the "after" image
    pub after: String,
    /// Caption under the "before" image
    pub before_caption: String,
    /// Caption under the "after" image, if the track's hours are known
    pub after_caption: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ElectrodeImage {
        ElectrodeImage::new(
            "304_anode",
            "304 Steel - Anode (Red)",
            "304_316_new.webp",
            "304_red.webp",
            "304",
            Electrode::Anode,
        )
    }

    #[test]
    fn test_panel_captions() {
        let panel = image().panel(Some(58.284));
        assert_eq!(panel.before_caption, BEFORE_CAPTION);
        assert_eq!(panel.after_caption.as_deref(), Some("After 58.3 hours of operation"));
        assert_eq!(panel.after, "304_red.webp");
    }

    #[test]
    fn test_panel_without_hours() {
        assert!(image().panel(None).after_caption.is_none());
    }

    #[test]
    fn test_electrode_image_json() {
        let json = r#"{"key":"316_cathode","label":"316 Steel - Cathode (Black)","before":"a.webp","after":"b.webp","track":"316","electrode":"Cathode"}"#;
        let img: ElectrodeImage = serde_json::from_str(json).unwrap();
        assert_eq!(img.track(), "316");
        assert_eq!(img.electrode(), Electrode::Cathode);
        assert_eq!(img.key(), "316_cathode");
    }
}
