//! # View Renderer
//! HTML table markup for the raw listing and the magType summary.
//!
//! Empty input renders [`NO_DATA`] instead of a header-only table.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

use crate::extract::NormalizedRecord;
use crate::summary::CountSummary;

pub const NO_DATA: &str = "No data available. Please fetch data first.";

pub fn no_data() -> String {
    format!(r#"<div class="no-data">{NO_DATA}</div>"#)
}

pub fn render_raw(records: &[NormalizedRecord]) -> String {
    render_indexed(records.iter().enumerate())
}

/// Raw table over `(position, record)` pairs. The position is the record's
/// place in the full feed and stands in for a missing id.
pub fn render_indexed<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (usize, &'a NormalizedRecord)>,
{
    let mut rows = rows.into_iter().peekable();
    if rows.peek().is_none() {
        return no_data();
    }

    let mut out = String::from(
        r#"<table class="raw-table"><tr><th>ID</th><th>Location</th><th>Magnitude</th><th>magType</th><th>Time</th><th>More Info</th></tr>"#,
    );
    for (i, r) in rows {
        let id = r.id.clone().unwrap_or_else(|| (i + 1).to_string());
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&id),
            encode_text(&r.location),
            encode_text(&r.magnitude),
            encode_text(&r.mag_type),
            encode_text(&r.time),
            info_link(&r.url),
        );
    }
    out.push_str("</table>");
    out
}

/// Only http(s) URLs become links; anything else is shown as text.
fn info_link(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        format!(
            r#"<a href="{}" target="_blank">More Info</a>"#,
            encode_double_quoted_attribute(url)
        )
    } else {
        encode_text(url).into_owned()
    }
}

pub fn render_summary(summary: &CountSummary) -> String {
    if summary.is_empty() {
        return no_data();
    }

    let mut out = String::from(
        r#"<table id="summary-table"><tr><th>magType</th><th>Count</th></tr>"#,
    );
    for row in summary.rows() {
        let _ = write!(
            out,
            r#"<tr data-mag-type="{}"><td>{}</td><td>{}</td></tr>"#,
            encode_double_quoted_attribute(&row.mag_type),
            encode_text(&row.mag_type),
            row.count,
        );
    }
    out.push_str("</table>");
    out
}
