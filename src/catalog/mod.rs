//! Endpoint catalog: the declared route metadata the sitemap is built from.
//!
//! Handlers opt into sitemap inclusion by registering an [`InclusionMarker`]
//! on themselves or on their owning group. Discovery is a plain lookup over
//! this registered data — no runtime introspection. The catalog is also
//! serde-loadable, so the CLI and server can read it from a JSON file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Priority applied when an inclusion marker leaves it unset.
pub const DEFAULT_PRIORITY: f32 = 0.8;

/// Change frequency applied when an inclusion marker leaves it unset.
pub const DEFAULT_CHANGE_FREQUENCY: &str = "daily";

/// Errors loading a catalog from a file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Opt-in marker carrying sitemap entry metadata.
///
/// Unset fields fall back to [`DEFAULT_PRIORITY`] and
/// [`DEFAULT_CHANGE_FREQUENCY`] at collection time. Values pass through
/// uninterpreted: priority is not range-checked and the change-frequency
/// vocabulary is not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InclusionMarker {
    pub priority: Option<f32>,
    pub change_frequency: Option<String>,
}

impl InclusionMarker {
    /// Marker with both fields left to their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker with explicit priority and change frequency.
    pub fn with(priority: f32, change_frequency: &str) -> Self {
        Self {
            priority: Some(priority),
            change_frequency: Some(change_frequency.to_string()),
        }
    }
}

/// Declared image attachment for a handler's sitemap entry.
///
/// `url` may be absolute or a path resolved against the root URL at
/// collection time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageMarker {
    pub url: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub license: Option<String>,
}

/// Declared video attachment for a handler's sitemap entry.
///
/// `thumbnail_url` follows the same absolute-vs-relative resolution as
/// images. Unset optionals stay unset through collection — they are never
/// defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMarker {
    pub thumbnail_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content_url: Option<String>,
    pub player_url: Option<String>,
    pub duration_seconds: Option<u32>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub publication_date: Option<DateTime<Utc>>,
    pub rating: Option<f32>,
    pub view_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub family_friendly: Option<bool>,
    pub allow_embed: Option<bool>,
    #[serde(default)]
    pub countries: Vec<String>,
}

/// One registered handler (a route action reachable under its group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
    /// Publicly invokable. Framework-reserved/special methods register as
    /// non-public and are never sitemap candidates.
    #[serde(default = "default_public")]
    pub public: bool,
    pub marker: Option<InclusionMarker>,
    #[serde(default)]
    pub images: Vec<ImageMarker>,
    #[serde(default)]
    pub videos: Vec<VideoMarker>,
}

fn default_public() -> bool {
    true
}

impl Endpoint {
    /// Register a public handler with no markers.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            public: true,
            marker: None,
            images: Vec::new(),
            videos: Vec::new(),
        }
    }

    /// Attach an inclusion marker to this handler.
    pub fn set_marker(&mut self, marker: InclusionMarker) {
        self.marker = Some(marker);
    }

    /// Append an image marker. Declaration order is preserved in output.
    pub fn add_image(&mut self, image: ImageMarker) {
        self.images.push(image);
    }

    /// Append a video marker. Declaration order is preserved in output.
    pub fn add_video(&mut self, video: VideoMarker) {
        self.videos.push(video);
    }

    /// Two-level marker lookup: handler-level wins, group-level is the
    /// fallback, neither means the handler is excluded from the sitemap.
    pub fn effective_marker<'a>(&'a self, group: &'a EndpointGroup) -> Option<&'a InclusionMarker> {
        self.marker.as_ref().or(group.marker.as_ref())
    }
}

/// The owning collection of handlers sharing a common path prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointGroup {
    /// Group name as registered, e.g. "BlogController". A trailing
    /// group-type suffix is stripped when deriving the path segment.
    pub name: String,
    /// Group-level default marker, applied to handlers without their own.
    pub marker: Option<InclusionMarker>,
    #[serde(default)]
    pub handlers: Vec<Endpoint>,
}

impl EndpointGroup {
    /// Register a group with no default marker and no handlers.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            marker: None,
            handlers: Vec::new(),
        }
    }

    /// Attach a group-level default marker.
    pub fn set_marker(&mut self, marker: InclusionMarker) {
        self.marker = Some(marker);
    }

    /// Append a handler. Enumeration order is the registration order.
    pub fn add_handler(&mut self, handler: Endpoint) {
        self.handlers.push(handler);
    }
}

/// The application's registered handler catalog.
///
/// Read-only input to collection; built once at startup via the
/// registration API or loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointCatalog {
    #[serde(default)]
    pub groups: Vec<EndpointGroup>,
}

impl EndpointCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. Enumeration order is the registration order.
    pub fn add_group(&mut self, group: EndpointGroup) {
        self.groups.push(group);
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_marker_wins_over_group() {
        let mut group = EndpointGroup::new("BlogController");
        group.set_marker(InclusionMarker::with(0.5, "monthly"));

        let mut handler = Endpoint::new("Index");
        handler.set_marker(InclusionMarker::with(0.9, "hourly"));

        let marker = handler.effective_marker(&group).unwrap();
        assert_eq!(marker.priority, Some(0.9));
        assert_eq!(marker.change_frequency.as_deref(), Some("hourly"));
    }

    #[test]
    fn test_group_marker_is_fallback() {
        let mut group = EndpointGroup::new("BlogController");
        group.set_marker(InclusionMarker::with(0.5, "monthly"));

        let handler = Endpoint::new("Index");
        let marker = handler.effective_marker(&group).unwrap();
        assert_eq!(marker.priority, Some(0.5));
    }

    #[test]
    fn test_no_marker_means_excluded() {
        let group = EndpointGroup::new("BlogController");
        let handler = Endpoint::new("Index");
        assert!(handler.effective_marker(&group).is_none());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{
            "groups": [
                {
                    "name": "BlogController",
                    "marker": { "priority": 0.6 },
                    "handlers": [
                        {
                            "name": "Index",
                            "marker": { "change_frequency": "weekly" },
                            "images": [ { "url": "logo.png", "title": "Logo" } ]
                        },
                        { "name": "Hidden", "public": false }
                    ]
                }
            ]
        }"#;

        let catalog = EndpointCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.groups.len(), 1);

        let group = &catalog.groups[0];
        assert_eq!(group.handlers.len(), 2);
        assert!(group.handlers[0].public);
        assert!(!group.handlers[1].public);
        assert_eq!(group.handlers[0].images[0].title.as_deref(), Some("Logo"));

        // Partial markers: unset fields stay None until collection.
        let marker = group.handlers[0].marker.as_ref().unwrap();
        assert_eq!(marker.priority, None);
        assert_eq!(marker.change_frequency.as_deref(), Some("weekly"));
    }

    #[test]
    fn test_catalog_json_rejects_garbage() {
        assert!(matches!(
            EndpointCatalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
