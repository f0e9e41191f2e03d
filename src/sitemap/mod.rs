//! Sitemap generation: collect URL records from the catalog, render XML.

pub mod collector;
pub mod serializer;
pub mod types;

pub use collector::collect;
pub use serializer::render;
pub use types::{ImageRecord, UrlRecord, VideoRecord};

use crate::catalog::EndpointCatalog;
use chrono::{DateTime, Utc};

/// Build and render the sitemap in one call.
///
/// `root_url` must be absolute with the trailing slash already trimmed;
/// `now` is the invocation's clock reading (see [`collector::collect`]).
pub fn generate(root_url: &str, now: DateTime<Utc>, catalog: &EndpointCatalog) -> String {
    serializer::render(&collector::collect(root_url, now, catalog))
}
