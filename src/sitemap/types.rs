//! URL record types: the transient output of collection, input to rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sitemap entry. Built fresh per invocation, discarded after rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Absolute URL. Always non-empty.
    pub location: String,
    pub last_modified: DateTime<Utc>,
    /// Passed through verbatim; the conventional vocabulary (always, hourly,
    /// daily, weekly, monthly, yearly, never) is not enforced here.
    pub change_frequency: String,
    /// Conventionally in [0.0, 1.0]; not range-checked.
    pub priority: f32,
    /// Image sub-entries in declaration order.
    pub images: Vec<ImageRecord>,
    /// Video sub-entries in declaration order.
    pub videos: Vec<VideoRecord>,
}

/// An `image:image` sub-entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Absolute URL, already resolved against the root.
    pub location: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub license: Option<String>,
}

/// A `video:video` sub-entry.
///
/// `title` and `description` are always rendered, even when empty; every
/// `Option` field is rendered only when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Absolute URL, already resolved against the root.
    pub thumbnail_location: String,
    pub title: String,
    pub description: String,
    pub content_location: Option<String>,
    pub player_location: Option<String>,
    pub duration_seconds: Option<u32>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub publication_date: Option<DateTime<Utc>>,
    pub rating: Option<f32>,
    pub view_count: Option<u64>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub family_friendly: Option<bool>,
    pub allow_embed: Option<bool>,
    pub countries: Vec<String>,
}
