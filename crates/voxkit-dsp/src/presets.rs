//! Built-in character-voice preset catalog.
//!
//! The catalog is pure reference data: an ordered list of categories, each an
//! ordered list of named parameter sets. It is embedded as JSON, parsed once
//! on first use, and never mutated afterwards.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::params::VoiceParams;

/// Embedded catalog source data.
const CATALOG_JSON: &str = include_str!("presets.json");

/// A named, pre-built parameter set representing one character voice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// Display name, e.g. "Movie Trailer".
    pub name: String,
    /// The knobs this voice applies.
    pub params: VoiceParams,
}

/// An ordered group of presets under one display heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetCategory {
    /// Display name, e.g. "Fun & Creative".
    pub name: String,
    /// Presets in display order.
    pub presets: Vec<Preset>,
}

/// The full catalog in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub categories: Vec<PresetCategory>,
}

/// Returns the process-wide catalog, parsing the embedded data on first use.
pub fn catalog() -> &'static PresetCatalog {
    static CATALOG: OnceLock<PresetCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(CATALOG_JSON).expect("embedded preset catalog is valid JSON")
    })
}

/// Looks up a preset by category and display name.
///
/// Names match exactly; a miss on either level is `PresetNotFound`.
pub fn find(category: &str, name: &str) -> EngineResult<&'static Preset> {
    catalog()
        .categories
        .iter()
        .find(|c| c.name == category)
        .and_then(|c| c.presets.iter().find(|p| p.name == name))
        .ok_or_else(|| EngineError::PresetNotFound {
            category: category.to_string(),
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.categories.len(), 7);

        let total: usize = catalog.categories.iter().map(|c| c.presets.len()).sum();
        assert_eq!(total, 49);
    }

    #[test]
    fn test_find_known_preset() {
        let preset = find("Fun & Creative", "Robot").unwrap();
        assert_eq!(preset.params.pitch, Some(1.0));
        assert!(preset.params.robotic);
    }

    #[test]
    fn test_find_miss_reports_both_names() {
        let err = find("Fun & Creative", "Nope").unwrap_err();
        match err {
            EngineError::PresetNotFound { category, name } => {
                assert_eq!(category, "Fun & Creative");
                assert_eq!(name, "Nope");
            }
            other => panic!("expected PresetNotFound, got {other:?}"),
        }

        assert!(find("No Such Category", "Robot").is_err());
    }

    #[test]
    fn test_every_preset_has_sane_knobs() {
        for category in &catalog().categories {
            for preset in &category.presets {
                let p = &preset.params;
                if let Some(pitch) = p.pitch {
                    assert!(pitch > 0.0, "{}: pitch {}", preset.name, pitch);
                }
                if let Some(bass) = p.bass {
                    assert!(bass >= 1.0, "{}: bass {}", preset.name, bass);
                }
                if let Some(reverb) = p.reverb {
                    assert!((0.0..=1.0).contains(&reverb), "{}: reverb {}", preset.name, reverb);
                }
                if let Some((low, high)) = p.bandpass {
                    assert!(low > 0.0 && low < high, "{}: band {}-{}", preset.name, low, high);
                }
                // no preset drives the custom-only speed knob
                assert_eq!(p.speed, None, "{} must not set speed", preset.name);
            }
        }
    }

    #[test]
    fn test_flavor_tags_survive_parsing() {
        let preset = find("Masculine Deep Voices", "Movie Trailer").unwrap();
        assert_eq!(preset.params.tags["dramatic"], serde_json::json!(true));
    }
}
