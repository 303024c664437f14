//! Query-string parsing for overlay activation.

use url::Url;

/// Query flag that requests the console overlay.
pub const ACTIVATION_FLAG: &str = "webconsole";

/// Ordered query parameters with first-match lookup.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create new empty params.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string, with or without the leading `?`.
    ///
    /// Pairs keep page order; a pair without `=` parses to an empty value.
    /// Pairs that fail percent-decoding are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let params: Vec<(String, String)> = query
            .split('&')
            .filter(|s| !s.is_empty())
            .filter_map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next()?;
                let value = parts.next().unwrap_or("");
                Some((
                    urlencoding::decode(key).ok()?.into_owned(),
                    urlencoding::decode(value).ok()?.into_owned(),
                ))
            })
            .collect();

        Self { params }
    }

    /// Get the first value for a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a parameter exists, with any value.
    pub fn has(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| n == name)
    }

    /// All pairs in page order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Whether a page URL requests the overlay via its query flag.
///
/// Presence is enough; the flag's value is not interpreted.
pub fn overlay_requested(page_url: &Url, flag: &str) -> bool {
    match page_url.query() {
        Some(query) => QueryParams::parse(query).has(flag),
        None => false,
    }
}
