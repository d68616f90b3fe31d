use std::collections::HashSet;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;
use vodgrab_logging::{grab_debug, grab_info};

/// One selectable episode from a show listing page, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub title: String,
    pub url: String,
}

/// Extracts the episode list from a show page.
///
/// Candidates are the `a.card-link` anchors carrying a non-empty
/// `.card-title`; each href is resolved against the page origin.
/// Off-program links (when the page URL carries a `p-<digits>` path
/// segment), trailers and duplicate URLs are dropped. Page order is
/// preserved.
pub fn harvest_episodes(html: &str, page_url: &str) -> Vec<Episode> {
    grab_info!("looking for episodes…");
    let (Ok(card_sel), Ok(title_sel)) = (
        Selector::parse("a.card-link[href]"),
        Selector::parse(".card-title"),
    ) else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let base = Url::parse(page_url).ok().and_then(|url| url.join("/").ok());
    let program_id = program_identifier(page_url);
    let trailer = Regex::new(r"(?i)טריילר|trailer").ok();

    let mut seen: HashSet<String> = HashSet::new();
    let mut episodes = Vec::new();
    for anchor in doc.select(&card_sel) {
        let Some(title_el) = anchor.select(&title_sel).next() else {
            continue;
        };
        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let resolved = match &base {
            Some(base) => match base.join(href.trim()) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            },
            None => href.trim().to_string(),
        };

        if let Some(pid) = &program_id {
            if !resolved.contains(pid.as_str()) {
                grab_debug!("skipping unrelated link: {resolved}");
                continue;
            }
        }
        if trailer.as_ref().is_some_and(|re| re.is_match(&title)) {
            grab_debug!("skipping trailer: {title}");
            continue;
        }
        if !seen.insert(resolved.clone()) {
            grab_debug!("skipping duplicate link: {resolved}");
            continue;
        }

        episodes.push(Episode {
            title,
            url: resolved,
        });
    }

    grab_info!("found {} episode(s)", episodes.len());
    episodes
}

/// Title for a single episode page: the `og:title` metadata content,
/// falling back to the last non-empty path segment of the URL.
pub fn episode_title(html: &str, page_url: &str) -> String {
    let doc = Html::parse_document(html);
    if let Ok(meta_sel) = Selector::parse(r#"meta[property="og:title"]"#) {
        if let Some(content) = doc
            .select(&meta_sel)
            .next()
            .and_then(|meta| meta.value().attr("content"))
        {
            let content = content.trim();
            if !content.is_empty() {
                return content.to_string();
            }
        }
    }
    last_path_segment(page_url).unwrap_or_else(|| "episode".to_string())
}

/// Stable `p-<digits>` token from a show URL, used to filter unrelated
/// links off the listing page. `None` disables the filter.
fn program_identifier(page_url: &str) -> Option<String> {
    let pattern = Regex::new(r"/(p-\d+)/").ok()?;
    pattern
        .captures(page_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn last_path_segment(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(ToOwned::to_owned)
}
