//! Photo-strip extraction — index-keyed image URLs.

use crate::records::FieldMap;
use scraper::{Html, Selector};

/// Build the photos field map from an ordered list of image source URLs.
///
/// Keys are the zero-based position as a decimal string, values the `src`
/// exactly as the page rendered it — absolute or relative, never resolved,
/// deduplicated, or checked for reachability.
pub fn index_photos<I, S>(srcs: I) -> FieldMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    srcs.into_iter()
        .enumerate()
        .map(|(i, src)| (i.to_string(), src.into()))
        .collect()
}

/// Collect `img` sources from a photo-container HTML fragment, in document
/// order. Images without a `src` attribute still occupy their index with an
/// empty value so positions stay stable.
pub fn photos_from_html(html: &str) -> FieldMap {
    let fragment = Html::parse_fragment(html);
    let Ok(selector) = Selector::parse("img") else {
        return FieldMap::new();
    };
    index_photos(
        fragment
            .select(&selector)
            .map(|el| el.value().attr("src").unwrap_or_default().to_string()),
    )
}
