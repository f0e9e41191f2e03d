//! Run the HTTP surface serving /sitemap.xml.

use crate::catalog::EndpointCatalog;
use crate::cli::generate_cmd::normalize_root_url;
use crate::rest::{self, AppState};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Load the catalog and serve it until shutdown.
pub async fn run(catalog_path: &Path, root_url: &str, port: u16) -> Result<()> {
    let root = normalize_root_url(root_url)?;
    let catalog = EndpointCatalog::from_json_file(catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;
    tracing::info!(
        groups = catalog.groups.len(),
        root_url = %root,
        "catalog loaded"
    );

    let state = Arc::new(AppState {
        root_url: root,
        catalog,
    });
    rest::start(port, state).await
}
