//! HTML rendering of publication lists
//!
//! Everything that reaches the markup from a record is escaped first; ORCID
//! data is third-party input.

use std::fmt::Write;

use crate::domain::{DisplayOptions, PublicationRecord};

/// CSS custom property carrying the configured font size
pub const FONT_SIZE_PROPERTY: &str = "--orcid-publications-font-size";

/// Render records into an HTML fragment. Never fails; an empty slice gives
/// an empty wrapper.
pub fn render_publications(records: &[PublicationRecord], options: &DisplayOptions) -> String {
    let mut output = String::new();

    let _ = write!(
        output,
        r#"<div class="orcid-publications {}" style="{}: {}px">"#,
        options.layout.css_class(),
        FONT_SIZE_PROPERTY,
        options.font_size
    );

    for record in records {
        render_record(&mut output, record, options);
    }

    output.push_str("</div>");
    output
}

fn render_record(output: &mut String, record: &PublicationRecord, options: &DisplayOptions) {
    let tag = options.title_tag.as_str();
    let title = escape_html(&record.title);

    output.push_str(r#"<div class="publication">"#);

    let href = if record.has_link() {
        sanitize_url(&record.url)
    } else {
        None
    };

    match href {
        Some(href) => {
            let _ = write!(
                output,
                r#"<{tag} class="publication-title"><a href="{href}" target="_blank" rel="noopener noreferrer">{title}</a></{tag}>"#
            );
        }
        None => {
            let _ = write!(output, r#"<{tag} class="publication-title">{title}</{tag}>"#);
        }
    }

    if let Some(meta) = metadata_line(record, options) {
        let _ = write!(output, r#"<p class="publication-meta">{}</p>"#, meta);
    }

    output.push_str("</div>");
}

/// Year and type spans joined by a space, or `None` when nothing is shown
fn metadata_line(record: &PublicationRecord, options: &DisplayOptions) -> Option<String> {
    if !options.shows_metadata() {
        return None;
    }

    let mut parts = Vec::with_capacity(2);

    if options.show_year && !record.year.is_empty() {
        parts.push(format!(
            r#"<span class="year">({})</span>"#,
            escape_html(&record.year)
        ));
    }
    if options.show_type && !record.work_type.is_empty() {
        parts.push(format!(
            r#"<span class="type">{}</span>"#,
            escape_html(&record.work_type)
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Make record text safe to place in element content or inside a
/// double- or single-quoted attribute value
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Normalize a link target for use in an `href` attribute.
///
/// Only absolute http(s) URLs survive; the result is re-serialized by the
/// URL parser (percent-encoding stray characters) and then attribute-escaped.
pub fn sanitize_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let url = url::Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => Some(escape_html(url.as_str())),
        _ => None,
    }
}
