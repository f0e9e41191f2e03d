//! Render URL records into the sitemap XML document.
//!
//! Output is a UTF-8 document in the sitemap 0.9 namespace carrying the
//! Google image and video extension namespaces. Element order within each
//! `url` is fixed; optional elements are fully absent when their source
//! field is unset, never emitted as empty tags. Text escaping is delegated
//! to quick-xml's text events.

use crate::sitemap::types::{ImageRecord, UrlRecord, VideoRecord};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const NS_SITEMAP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const NS_IMAGE: &str = "http://www.google.com/schemas/sitemap-image/1.1";
const NS_VIDEO: &str = "http://www.google.com/schemas/sitemap-video/1.1";

/// Render records into the complete sitemap document, in input order.
pub fn render(records: &[UrlRecord]) -> String {
    let mut buf = Vec::new();
    write_document(&mut buf, records).expect("render to Vec should not fail");
    String::from_utf8(buf).expect("sitemap XML is valid UTF-8")
}

fn write_document<W: Write>(out: W, records: &[UrlRecord]) -> quick_xml::Result<()> {
    let mut w = Writer::new(out);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", NS_SITEMAP));
    urlset.push_attribute(("xmlns:image", NS_IMAGE));
    urlset.push_attribute(("xmlns:video", NS_VIDEO));
    w.write_event(Event::Start(urlset))?;

    for record in records {
        write_url(&mut w, record)?;
    }

    w.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(())
}

fn write_url<W: Write>(w: &mut Writer<W>, record: &UrlRecord) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new("url")))?;

    text_element(w, "loc", &record.location)?;
    text_element(w, "lastmod", &format_date(&record.last_modified))?;
    text_element(w, "changefreq", &record.change_frequency)?;
    text_element(w, "priority", &format_priority(record.priority))?;

    for image in &record.images {
        write_image(w, image)?;
    }
    for video in &record.videos {
        write_video(w, video)?;
    }

    w.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_image<W: Write>(w: &mut Writer<W>, image: &ImageRecord) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new("image:image")))?;

    text_element(w, "image:loc", &image.location)?;
    opt_text_element(w, "image:title", image.title.as_deref())?;
    opt_text_element(w, "image:caption", image.caption.as_deref())?;
    opt_text_element(w, "image:license", image.license.as_deref())?;

    w.write_event(Event::End(BytesEnd::new("image:image")))?;
    Ok(())
}

fn write_video<W: Write>(w: &mut Writer<W>, video: &VideoRecord) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new("video:video")))?;

    text_element(w, "video:thumbnail_loc", &video.thumbnail_location)?;
    // Title and description are mandatory in the video extension schema,
    // so they are emitted even when empty.
    text_element(w, "video:title", &video.title)?;
    text_element(w, "video:description", &video.description)?;

    opt_text_element(w, "video:content_loc", video.content_location.as_deref())?;
    opt_text_element(w, "video:player_loc", video.player_location.as_deref())?;
    if let Some(duration) = video.duration_seconds {
        text_element(w, "video:duration", &duration.to_string())?;
    }
    if let Some(expiration) = &video.expiration_date {
        text_element(w, "video:expiration_date", &format_date(expiration))?;
    }
    if let Some(rating) = video.rating {
        text_element(w, "video:rating", &rating.to_string())?;
    }
    if let Some(views) = video.view_count {
        text_element(w, "video:view_count", &views.to_string())?;
    }
    if let Some(published) = &video.publication_date {
        text_element(w, "video:publication_date", &format_date(published))?;
    }
    for tag in &video.tags {
        text_element(w, "video:tag", tag)?;
    }
    opt_text_element(w, "video:category", video.category.as_deref())?;
    if let Some(friendly) = video.family_friendly {
        text_element(w, "video:family_friendly", bool_text(friendly))?;
    }
    if let Some(embed) = video.allow_embed {
        text_element(w, "video:allow_embed", bool_text(embed))?;
    }
    for country in &video.countries {
        text_element(w, "video:country", country)?;
    }

    w.write_event(Event::End(BytesEnd::new("video:video")))?;
    Ok(())
}

fn text_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Emit the element only when the value is present and non-empty.
fn opt_text_element<W: Write>(
    w: &mut Writer<W>,
    name: &str,
    value: Option<&str>,
) -> quick_xml::Result<()> {
    match value {
        Some(text) if !text.is_empty() => text_element(w, name, text),
        _ => Ok(()),
    }
}

/// Date-only, ISO order, UTC. The time component is discarded.
fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Exactly one decimal digit with `.` as separator, independent of any
/// host locale convention.
fn format_priority(priority: f32) -> String {
    format!("{priority:.1}")
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
