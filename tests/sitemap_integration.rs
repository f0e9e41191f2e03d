//! End-to-end tests: catalog registration → collection → XML document,
//! plus the HTTP surface and JSON catalog loading.

use chrono::{TimeZone, Utc};
use routemap::catalog::{
    Endpoint, EndpointCatalog, EndpointGroup, ImageMarker, InclusionMarker,
};
use routemap::rest::{self, AppState};
use routemap::sitemap;
use std::io::Write;
use std::sync::Arc;

const ROOT: &str = "https://ex.com";

fn ts() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 0).unwrap()
}

fn count_urls(xml: &str) -> usize {
    xml.matches("<url>").count()
}

#[test]
fn test_empty_catalog_renders_root_only_entry() {
    let xml = sitemap::generate(ROOT, ts(), &EndpointCatalog::new());

    assert_eq!(count_urls(&xml), 1);
    assert!(xml.contains("<loc>https://ex.com</loc>"));
    assert!(xml.contains("<priority>1.0</priority>"));
    assert!(xml.contains("<changefreq>daily</changefreq>"));
    assert!(xml.contains("<lastmod>2024-03-05</lastmod>"));
}

#[test]
fn test_round_trip_marked_and_unmarked_handlers() {
    let mut group = EndpointGroup::new("PageController");
    let mut index = Endpoint::new("Index");
    index.set_marker(InclusionMarker::with(0.3, "weekly"));
    group.add_handler(index);
    group.add_handler(Endpoint::new("About"));

    let mut catalog = EndpointCatalog::new();
    catalog.add_group(group);

    let records = sitemap::collect(ROOT, ts(), &catalog);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].location, ROOT);
    assert_eq!(records[1].location, "https://ex.com/page/index");

    let xml = sitemap::render(&records);
    assert_eq!(count_urls(&xml), 2);
    assert!(xml.contains("<loc>https://ex.com/page/index</loc>"));
    assert!(xml.contains("<priority>0.3</priority>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
    // Root entry comes first.
    let root_pos = xml.find("<loc>https://ex.com</loc>").unwrap();
    let page_pos = xml.find("<loc>https://ex.com/page/index</loc>").unwrap();
    assert!(root_pos < page_pos);
}

#[test]
fn test_duplicate_locations_render_as_separate_entries() {
    let mut group = EndpointGroup::new("AController");
    let mut first = Endpoint::new("B");
    first.set_marker(InclusionMarker::new());
    let mut second = Endpoint::new("B");
    second.set_marker(InclusionMarker::new());
    group.add_handler(first);
    group.add_handler(second);

    let mut catalog = EndpointCatalog::new();
    catalog.add_group(group);

    let xml = sitemap::generate(ROOT, ts(), &catalog);
    assert_eq!(count_urls(&xml), 3);
    assert_eq!(xml.matches("<loc>https://ex.com/a/b</loc>").count(), 2);
}

#[test]
fn test_image_markers_flow_through_to_extension_elements() {
    let mut group = EndpointGroup::new("GalleryController");
    let mut show = Endpoint::new("Show");
    show.set_marker(InclusionMarker::new());
    show.add_image(ImageMarker {
        url: "logo.png".into(),
        title: Some("Sunset".into()),
        ..Default::default()
    });
    show.add_image(ImageMarker {
        url: "https://cdn.ex.com/banner.png".into(),
        ..Default::default()
    });
    group.add_handler(show);

    let mut catalog = EndpointCatalog::new();
    catalog.add_group(group);

    let xml = sitemap::generate(ROOT, ts(), &catalog);
    assert_eq!(xml.matches("<image:image>").count(), 2);
    assert!(xml.contains("<image:loc>https://ex.com/logo.png</image:loc>"));
    assert!(xml.contains("<image:loc>https://cdn.ex.com/banner.png</image:loc>"));
    assert_eq!(xml.matches("<image:title>Sunset</image:title>").count(), 1);
}

#[test]
fn test_catalog_loaded_from_json_file() {
    let json = r#"{
        "groups": [
            {
                "name": "BlogController",
                "marker": { "priority": 0.6, "change_frequency": "weekly" },
                "handlers": [
                    { "name": "Index" },
                    { "name": "Archive", "marker": { "priority": 0.2 } }
                ]
            }
        ]
    }"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let catalog = EndpointCatalog::from_json_file(file.path()).unwrap();
    let xml = sitemap::generate(ROOT, ts(), &catalog);

    assert_eq!(count_urls(&xml), 3);
    assert!(xml.contains("<loc>https://ex.com/blog/index</loc>"));
    assert!(xml.contains("<loc>https://ex.com/blog/archive</loc>"));
    assert!(xml.contains("<priority>0.6</priority>"));
    // Handler marker with unset frequency falls back to the default, not
    // to the group value.
    assert!(xml.contains("<priority>0.2</priority>"));
}

async fn spawn_server(catalog: EndpointCatalog) -> std::net::SocketAddr {
    let state = Arc::new(AppState {
        root_url: ROOT.to_string(),
        catalog,
    });
    let app = rest::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_http_serves_sitemap_with_xml_content_type() {
    let addr = spawn_server(EndpointCatalog::new()).await;

    let resp = reqwest::get(format!("http://{addr}/sitemap.xml"))
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/xml"), "{content_type}");

    let body = resp.text().await.unwrap();
    assert!(body.contains("<urlset"));
    assert!(body.contains("<loc>https://ex.com</loc>"));
}

#[tokio::test]
async fn test_http_path_match_is_case_insensitive() {
    let addr = spawn_server(EndpointCatalog::new()).await;

    let resp = reqwest::get(format!("http://{addr}/SITEMAP.XML"))
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert!(resp.text().await.unwrap().contains("<urlset"));
}

#[tokio::test]
async fn test_http_other_paths_are_not_found() {
    let addr = spawn_server(EndpointCatalog::new()).await;

    let resp = reqwest::get(format!("http://{addr}/robots.txt"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
