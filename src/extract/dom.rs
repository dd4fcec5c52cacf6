//! Markup-to-row bridging for the two acquisition paths.
//!
//! Rows reach the extractor as rendered text, never markup. The static path
//! here parses an HTML fragment with `scraper` (tests, pre-rendered HTML);
//! the live path builds a JavaScript snippet that reads each cell's
//! `innerText` inside the page — the scripting escape hatch the source site
//! needs for correct visible-text capture. Both paths produce identical
//! cell-count branching input.

use crate::extract::rows::RawRow;
use scraper::{ElementRef, Html, Selector};

/// Collect raw rows from a section's rendered HTML.
///
/// Selects every `tr` in the fragment (nested tables contribute their own
/// rows, and their wrapping row is flagged) and, per row, the visible text
/// of each `td` plus the nested-table flag.
pub fn rows_from_html(html: &str) -> Vec<RawRow> {
    let fragment = Html::parse_fragment(html);
    let (Ok(tr), Ok(td), Ok(table)) = (
        Selector::parse("tr"),
        Selector::parse("td"),
        Selector::parse("table"),
    ) else {
        return Vec::new();
    };

    fragment
        .select(&tr)
        .map(|row| RawRow {
            cells: row.select(&td).map(visible_text).collect(),
            nested_table: row.select(&table).next().is_some(),
        })
        .collect()
}

/// Approximate the browser's `innerText` for one element: source whitespace
/// collapses to single spaces, `<br>` becomes a newline, ends are trimmed.
fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        if let Some(text) = node.value().as_text() {
            push_collapsed(&mut out, text);
        } else if let Some(child) = node.value().as_element() {
            if child.name() == "br" {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push('\n');
            }
        }
    }
    out.trim().to_string()
}

fn push_collapsed(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with([' ', '\n']) {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
}

/// JavaScript for the live path: per row under `selector`, the `innerText`
/// of each `td` and whether the row wraps a nested table.
pub fn row_script(selector: &str) -> String {
    format!(
        r#"(() => {{
            const rows = document.querySelectorAll('{sel}');
            return Array.from(rows).map((row) => ({{
                cells: Array.from(row.querySelectorAll('td')).map((td) => td.innerText),
                nested_table: row.querySelector('table') !== null,
            }}));
        }})()"#,
        sel = selector.replace('\'', "\\'")
    )
}

/// JavaScript for the live path: raw `src` attribute of every image under
/// `selector`, in document order.
pub fn photo_script(selector: &str) -> String {
    format!(
        r#"(() => {{
            const images = document.querySelectorAll('{sel}');
            return Array.from(images).map((img) => img.getAttribute('src') || '');
        }})()"#,
        sel = selector.replace('\'', "\\'")
    )
}
