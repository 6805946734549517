//! Persisted viewer settings and content lists, stored as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::camera::controller::{TourSettings, DEFAULT_TOUR_SPEED};
use crate::math::Rgb;
use crate::tree::DEFAULT_TREE_COLOR;
use crate::types::ContentItem;

/// User-facing knobs; missing fields take their defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tour_enabled: bool,
    pub tour_speed: f32,
    pub tree_color: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tour_enabled: true,
            tour_speed: DEFAULT_TOUR_SPEED,
            tree_color: DEFAULT_TREE_COLOR,
        }
    }
}

impl Settings {
    /// Clamps `tour_speed` into [0, 1]; a non-finite value falls back to the default.
    pub fn sanitized(mut self) -> Self {
        self.tour_speed = if self.tour_speed.is_finite() {
            self.tour_speed.clamp(0.0, 1.0)
        } else {
            DEFAULT_TOUR_SPEED
        };
        self
    }

    pub fn tour(&self) -> TourSettings {
        TourSettings {
            enabled: self.tour_enabled,
            speed: self.tour_speed,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("Failed to parse settings")?;
        let sanitized = settings.sanitized();
        if sanitized.tour_speed != settings.tour_speed {
            warn!(
                "tour_speed {} out of range, using {}",
                settings.tour_speed, sanitized.tour_speed
            );
        }
        Ok(sanitized)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// A content list entry: either a bare id or a full item
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentEntry {
    Id(String),
    Item(ContentItem),
}

impl From<ContentEntry> for ContentItem {
    fn from(entry: ContentEntry) -> Self {
        match entry {
            ContentEntry::Id(id) => ContentItem::new(id),
            ContentEntry::Item(item) => item,
        }
    }
}

/// Parses a JSON array of ids or `{ "id", "colorHint" }` objects.
pub fn parse_content(json: &str) -> Result<Vec<ContentItem>> {
    let entries: Vec<ContentEntry> =
        serde_json::from_str(json).context("Failed to parse content list")?;
    Ok(entries.into_iter().map(ContentItem::from).collect())
}

pub fn load_content(path: &Path) -> Result<Vec<ContentItem>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content list from {}", path.display()))?;
    let content = parse_content(&json)
        .with_context(|| format!("Invalid content file {}", path.display()))?;
    info!("Loaded {} content items from {}", content.len(), path.display());
    Ok(content)
}

/// Placeholder content for runs without a content file
pub fn sample_content(count: usize) -> Vec<ContentItem> {
    (1..=count).map(|i| ContentItem::new(format!("photo-{:02}", i))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.tour_enabled);
        assert_eq!(settings.tour_speed, 0.12);
        assert_eq!(settings.tree_color.to_string(), "#2e8b57");
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings = Settings::from_json(r#"{ "tour_enabled": false }"#).unwrap();
        assert!(!settings.tour_enabled);
        assert_eq!(settings.tour_speed, DEFAULT_TOUR_SPEED);
    }

    #[test]
    fn test_settings_tour_speed_clamped() {
        let settings = Settings::from_json(r#"{ "tour_speed": 4.0 }"#).unwrap();
        assert_eq!(settings.tour_speed, 1.0);
        let settings = Settings::from_json(r#"{ "tour_speed": -1.0 }"#).unwrap();
        assert_eq!(settings.tour_speed, 0.0);
    }

    #[test]
    fn test_settings_color_parsed() {
        let settings = Settings::from_json(r##"{ "tree_color": "#FF0000" }"##).unwrap();
        assert_eq!(settings.tree_color, Rgb::new(255, 0, 0));
        assert!(Settings::from_json(r#"{ "tree_color": "green" }"#).is_err());
    }

    #[test]
    fn test_settings_to_tour() {
        let settings = Settings {
            tour_enabled: false,
            tour_speed: 0.5,
            ..Settings::default()
        };
        assert_eq!(
            settings.tour(),
            TourSettings {
                enabled: false,
                speed: 0.5
            }
        );
    }

    #[test]
    fn test_settings_round_trip_json() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"#2e8b57\""));
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_content_mixed_entries() {
        let content =
            parse_content(r##"["a.jpg", { "id": "b.jpg", "colorHint": "#102030" }]"##).unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0], ContentItem::new("a.jpg"));
        assert_eq!(content[1].color_hint, Some(Rgb::new(0x10, 0x20, 0x30)));
    }

    #[test]
    fn test_parse_content_rejects_object() {
        assert!(parse_content(r#"{ "id": "a" }"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_content(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/content.json"));
    }

    #[test]
    fn test_sample_content() {
        let content = sample_content(3);
        assert_eq!(content.len(), 3);
        assert_eq!(content[0].id, "photo-01");
    }
}
