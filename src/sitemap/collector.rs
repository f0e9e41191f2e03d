//! Walk the endpoint catalog and build the sequence of URL records.
//!
//! Pure function of the catalog and the injected clock reading: no I/O, no
//! shared state, safe to call concurrently. The root record is always first;
//! handlers follow in catalog enumeration order with no sorting and no
//! deduplication of handlers that resolve to the same location.

use crate::catalog::{
    EndpointCatalog, ImageMarker, VideoMarker, DEFAULT_CHANGE_FREQUENCY, DEFAULT_PRIORITY,
};
use crate::sitemap::types::{ImageRecord, UrlRecord, VideoRecord};
use chrono::{DateTime, Utc};

/// Priority of the root/home entry. Fixed, independent of marker defaults.
const ROOT_PRIORITY: f32 = 1.0;

/// Change frequency of the root/home entry.
const ROOT_CHANGE_FREQUENCY: &str = "daily";

/// Group-type suffix stripped when deriving a group's path segment.
const GROUP_SUFFIX: &str = "controller";

/// Build URL records for the root URL plus every opted-in public handler.
///
/// `now` is the invocation's single clock reading; the caller injects it so
/// collection stays deterministic under test.
pub fn collect(root_url: &str, now: DateTime<Utc>, catalog: &EndpointCatalog) -> Vec<UrlRecord> {
    let mut records = Vec::new();

    records.push(UrlRecord {
        location: root_url.to_string(),
        last_modified: now,
        change_frequency: ROOT_CHANGE_FREQUENCY.to_string(),
        priority: ROOT_PRIORITY,
        images: Vec::new(),
        videos: Vec::new(),
    });

    for group in &catalog.groups {
        let group_segment = path_segment(&group.name);

        for handler in &group.handlers {
            if !handler.public {
                continue;
            }
            let Some(marker) = handler.effective_marker(group) else {
                continue;
            };

            records.push(UrlRecord {
                location: format!(
                    "{root_url}/{group_segment}/{}",
                    handler.name.to_lowercase()
                ),
                last_modified: now,
                change_frequency: marker
                    .change_frequency
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHANGE_FREQUENCY.to_string()),
                priority: marker.priority.unwrap_or(DEFAULT_PRIORITY),
                images: handler
                    .images
                    .iter()
                    .map(|m| image_record(root_url, m))
                    .collect(),
                videos: handler
                    .videos
                    .iter()
                    .map(|m| video_record(root_url, m))
                    .collect(),
            });
        }
    }

    records
}

/// Lower-cased group name with any trailing group-type suffix removed.
///
/// A group named exactly "Controller" keeps its full name rather than
/// collapsing to an empty segment.
fn path_segment(group_name: &str) -> String {
    let lower = group_name.to_lowercase();
    match lower.strip_suffix(GROUP_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => lower,
    }
}

/// Declared URLs that already carry a scheme pass through verbatim; anything
/// else is a path under the root URL.
fn resolve_media_url(root_url: &str, declared: &str) -> String {
    if declared.starts_with("http") {
        declared.to_string()
    } else {
        format!("{root_url}/{}", declared.trim_start_matches('/'))
    }
}

fn image_record(root_url: &str, marker: &ImageMarker) -> ImageRecord {
    ImageRecord {
        location: resolve_media_url(root_url, &marker.url),
        title: marker.title.clone(),
        caption: marker.caption.clone(),
        license: marker.license.clone(),
    }
}

fn video_record(root_url: &str, marker: &VideoMarker) -> VideoRecord {
    VideoRecord {
        thumbnail_location: resolve_media_url(root_url, &marker.thumbnail_url),
        title: marker.title.clone(),
        description: marker.description.clone(),
        content_location: marker.content_url.clone(),
        player_location: marker.player_url.clone(),
        duration_seconds: marker.duration_seconds,
        expiration_date: marker.expiration_date,
        publication_date: marker.publication_date,
        rating: marker.rating,
        view_count: marker.view_count,
        tags: marker.tags.clone(),
        category: marker.category.clone(),
        family_friendly: marker.family_friendly,
        allow_embed: marker.allow_embed,
        countries: marker.countries.clone(),
    }
}
