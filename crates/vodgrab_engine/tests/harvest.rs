use pretty_assertions::assert_eq;
use vodgrab_engine::{episode_title, harvest_episodes, Episode};

const SHOW_URL: &str = "https://tv.example.com/shows/p-123/some-show/";

fn card(href: &str, title: &str) -> String {
    format!(r#"<a class="card-link" href="{href}"><span class="card-title">{title}</span></a>"#)
}

#[test]
fn episodes_keep_page_order_and_resolve_relative_links() {
    let html = format!(
        "<div>{}{}</div>",
        card("/shows/p-123/ep-1/", "Episode 1"),
        card("https://tv.example.com/shows/p-123/ep-2/", "Episode 2"),
    );

    let episodes = harvest_episodes(&html, SHOW_URL);
    assert_eq!(
        episodes,
        vec![
            Episode {
                title: "Episode 1".to_string(),
                url: "https://tv.example.com/shows/p-123/ep-1/".to_string(),
            },
            Episode {
                title: "Episode 2".to_string(),
                url: "https://tv.example.com/shows/p-123/ep-2/".to_string(),
            },
        ]
    );
}

#[test]
fn duplicate_urls_are_kept_once() {
    let html = format!(
        "{}{}{}",
        card("/shows/p-123/ep-1/", "Episode 1"),
        card("/shows/p-123/ep-1/", "Episode 1 (again)"),
        card("/shows/p-123/ep-2/", "Episode 2"),
    );

    let episodes = harvest_episodes(&html, SHOW_URL);
    let urls: Vec<_> = episodes.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://tv.example.com/shows/p-123/ep-1/",
            "https://tv.example.com/shows/p-123/ep-2/",
        ]
    );
    assert_eq!(episodes[0].title, "Episode 1");
}

#[test]
fn trailers_are_excluded_in_any_language() {
    let html = format!(
        "{}{}{}",
        card("/shows/p-123/ep-1/", "Episode 1"),
        card("/shows/p-123/promo/", "Official TRAILER"),
        card("/shows/p-123/promo-2/", "טריילר לעונה 2"),
    );

    let episodes = harvest_episodes(&html, SHOW_URL);
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].title, "Episode 1");
}

#[test]
fn links_to_other_programs_are_excluded() {
    let html = format!(
        "{}{}",
        card("/shows/p-123/ep-1/", "Episode 1"),
        card("/shows/p-456/ep-9/", "Another show"),
    );

    let episodes = harvest_episodes(&html, SHOW_URL);
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].url, "https://tv.example.com/shows/p-123/ep-1/");
}

#[test]
fn without_a_program_identifier_the_filter_is_skipped() {
    let html = format!(
        "{}{}",
        card("/shows/p-123/ep-1/", "Episode 1"),
        card("/shows/p-456/ep-9/", "Unrelated but kept"),
    );

    let episodes = harvest_episodes(&html, "https://tv.example.com/watch/");
    assert_eq!(episodes.len(), 2);
}

#[test]
fn anchors_without_a_title_element_are_ignored() {
    let html = format!(
        r#"<a class="card-link" href="/shows/p-123/bare/">no title inside</a>{}"#,
        card("/shows/p-123/ep-1/", "Episode 1"),
    );

    let episodes = harvest_episodes(&html, SHOW_URL);
    assert_eq!(episodes.len(), 1);
}

#[test]
fn empty_titles_are_ignored() {
    let html = format!(
        "{}{}",
        card("/shows/p-123/ep-0/", "   "),
        card("/shows/p-123/ep-1/", "Episode 1"),
    );

    let episodes = harvest_episodes(&html, SHOW_URL);
    assert_eq!(episodes.len(), 1);
}

#[test]
fn pages_without_cards_yield_nothing() {
    assert_eq!(
        harvest_episodes("<html><body><p>empty</p></body></html>", SHOW_URL),
        Vec::new()
    );
}

#[test]
fn episode_title_prefers_og_title() {
    let html = r#"<html><head><meta property="og:title" content="The Finale"></head></html>"#;
    assert_eq!(
        episode_title(html, "https://tv.example.com/shows/p-123/ep-8/"),
        "The Finale"
    );
}

#[test]
fn episode_title_falls_back_to_url_path() {
    let html = "<html><head></head><body></body></html>";
    assert_eq!(
        episode_title(html, "https://tv.example.com/shows/p-123/season-finale/"),
        "season-finale"
    );
}
