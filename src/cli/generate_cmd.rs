//! Generate a sitemap from a catalog file and print or write it.

use crate::catalog::EndpointCatalog;
use crate::sitemap;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;
use url::Url;

/// Load the catalog, generate the document, emit to stdout or a file.
pub fn run(catalog_path: &Path, root_url: &str, output: Option<&Path>) -> Result<()> {
    let root = normalize_root_url(root_url)?;
    let catalog = EndpointCatalog::from_json_file(catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;
    tracing::debug!(groups = catalog.groups.len(), "catalog loaded");

    let document = sitemap::generate(&root, Utc::now(), &catalog);

    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("writing sitemap to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = document.len(), "sitemap written");
        }
        None => println!("{document}"),
    }
    Ok(())
}

/// Validate the configured root URL and trim its trailing slash.
///
/// The collector concatenates the root verbatim, so rejecting a malformed
/// root here at the configuration boundary is the only URL validation in
/// the pipeline.
pub fn normalize_root_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).with_context(|| format!("invalid root URL: {raw}"))?;
    anyhow::ensure!(
        parsed.scheme() == "http" || parsed.scheme() == "https",
        "root URL must be http(s): {raw}"
    );
    Ok(raw.trim_end_matches('/').to_string())
}
