use std::collections::BTreeSet;

/// Parses an interactive episode selection into zero-based indices.
///
/// `all`, `a`, `*` and the empty string select every episode. Anything
/// else is split on commas; each token is a 1-based integer or an
/// inclusive 1-based range `lo-hi`. Tokens that do not parse, and
/// values outside `[1, total]`, are dropped without invalidating the
/// rest of the input. The result is deduplicated and ascending; an
/// empty result means nothing usable was entered and the caller should
/// ask again.
pub fn parse_selection(raw: &str, total: usize) -> Vec<usize> {
    let raw = raw.trim().to_lowercase();
    if matches!(raw.as_str(), "all" | "a" | "*" | "") {
        return (0..total).collect();
    }

    let mut picked = BTreeSet::new();
    for token in raw.split(',') {
        let token = token.trim();
        if let Some((lo, hi)) = token.split_once('-') {
            let (Ok(lo), Ok(hi)) = (lo.trim().parse::<usize>(), hi.trim().parse::<usize>()) else {
                continue;
            };
            for value in lo.max(1)..=hi.min(total) {
                picked.insert(value - 1);
            }
        } else if let Ok(value) = token.parse::<usize>() {
            if (1..=total).contains(&value) {
                picked.insert(value - 1);
            }
        }
    }
    picked.into_iter().collect()
}
