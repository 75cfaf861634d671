//! Sitemap XML document writers.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::sitemap_gen::errors::{Result, SitemapGenError};

/// Namespace carried by sitemap and sitemap-index documents.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serializes one shard as a `<urlset>` document.
///
/// Every path becomes a `<url><loc>` entry with the hostname prefixed; the
/// hostname's trailing slash is trimmed so the join carries exactly one `/`.
///
/// # Errors
///
/// [`SitemapGenError::Serialize`] when XML writing fails.
pub fn write_urlset(hostname: &str, paths: &[String]) -> Result<String> {
    let base = hostname.trim_end_matches('/');
    let locs = paths.iter().map(|path| format!("{base}{path}"));
    write_loc_document("urlset", "url", locs)
}

/// Serializes the index document of a sharded sitemap.
///
/// Every shard file becomes a `<sitemap><loc>` entry located at
/// `hostname + public_path + file_name`, in shard order.
///
/// # Errors
///
/// [`SitemapGenError::Serialize`] when XML writing fails.
pub fn write_sitemap_index(hostname: &str, public_path: &str, file_names: &[String]) -> Result<String> {
    let base = hostname.trim_end_matches('/');
    let prefix = normalize_public_path(public_path);
    let locs = file_names.iter().map(|name| format!("{base}{prefix}{name}"));
    write_loc_document("sitemapindex", "sitemap", locs)
}

/// Forces surrounding slashes onto the public path so the concatenated
/// location stays well-formed.
fn normalize_public_path(public_path: &str) -> String {
    let trimmed = public_path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Writes a document whose root wraps a flat list of `<loc>` entries, the
/// shape shared by `<urlset>` and `<sitemapindex>`.
fn write_loc_document<I>(root: &str, entry: &str, locs: I) -> Result<String>
where
    I: Iterator<Item = String>,
{
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(into_serialize)?;

    let mut open = BytesStart::new(root);
    open.push_attribute(("xmlns", SITEMAP_XMLNS));
    writer.write_event(Event::Start(open)).map_err(into_serialize)?;

    for loc in locs {
        writer.write_event(Event::Start(BytesStart::new(entry))).map_err(into_serialize)?;
        writer.write_event(Event::Start(BytesStart::new("loc"))).map_err(into_serialize)?;
        writer.write_event(Event::Text(BytesText::new(&loc))).map_err(into_serialize)?;
        writer.write_event(Event::End(BytesEnd::new("loc"))).map_err(into_serialize)?;
        writer.write_event(Event::End(BytesEnd::new(entry))).map_err(into_serialize)?;
    }

    writer.write_event(Event::End(BytesEnd::new(root))).map_err(into_serialize)?;

    String::from_utf8(writer.into_inner()).map_err(|e| SitemapGenError::Serialize(e.to_string()))
}

fn into_serialize<E: std::fmt::Display>(err: E) -> SitemapGenError {
    SitemapGenError::Serialize(err.to_string())
}
