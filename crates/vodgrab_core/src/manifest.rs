use regex::Regex;

/// Finds a playlist manifest URL in raw page text.
///
/// Patterns are tried in priority order and the first one that matches
/// anywhere in the text wins; later patterns are never consulted. A
/// quoted structured-metadata field is preferred over a bare URL token,
/// so pages that carry both yield the structured value.
pub struct ManifestLocator {
    patterns: Vec<Regex>,
}

impl ManifestLocator {
    pub fn new() -> Self {
        let patterns = vec![
            // "contentUrl": "https://…/playlist.m3u8?query"
            Regex::new(r#""contentUrl"\s*:\s*"([^"]+\.m3u8[^"]*)""#),
            // Any bare http(s) token ending in .m3u8 plus optional query.
            Regex::new(r#"https?://[^\s"'<>]+\.m3u8[^\s"'<>]*"#),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self { patterns }
    }

    /// Returns the first manifest URL found, or `None` when the page
    /// references none. Absence is a normal outcome, not a fault.
    pub fn locate(&self, html: &str) -> Option<String> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(html) {
                if let Some(found) = caps.get(1).or_else(|| caps.get(0)) {
                    return Some(found.as_str().to_string());
                }
            }
        }
        None
    }
}

impl Default for ManifestLocator {
    fn default() -> Self {
        Self::new()
    }
}
