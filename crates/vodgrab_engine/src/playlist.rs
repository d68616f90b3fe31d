use regex::Regex;

/// Tag that distinguishes a master playlist from a media playlist.
const STREAM_VARIANT_MARKER: &str = "#EXT-X-STREAM-INF";

/// True when the text is a master playlist listing stream variants.
pub fn is_master_playlist(text: &str) -> bool {
    text.contains(STREAM_VARIANT_MARKER)
}

/// First non-comment, non-empty line of a master playlist: the first
/// variant reference, relative to the playlist URL.
pub fn first_variant_line(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Sum of all `#EXTINF` segment durations in a media playlist, in
/// seconds. Unparseable declarations are skipped.
pub fn sum_segment_durations(text: &str) -> f64 {
    let Ok(tag) = Regex::new(r"#EXTINF:\s*([\d.]+)") else {
        return 0.0;
    };
    tag.captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .sum()
}
