use vodgrab_core::ManifestLocator;

#[test]
fn structured_field_value_is_returned() {
    let html = r#"<script>{"contentUrl": "https://cdn.example.com/show/master.m3u8?token=abc"}</script>"#;
    let found = ManifestLocator::new().locate(html);
    assert_eq!(
        found.as_deref(),
        Some("https://cdn.example.com/show/master.m3u8?token=abc")
    );
}

#[test]
fn structured_field_wins_over_bare_url() {
    let html = concat!(
        "<p>https://other.example.com/early/bare.m3u8</p>",
        r#"<script>{"contentUrl":"https://cdn.example.com/structured.m3u8"}</script>"#,
    );
    let found = ManifestLocator::new().locate(html);
    assert_eq!(
        found.as_deref(),
        Some("https://cdn.example.com/structured.m3u8")
    );
}

#[test]
fn bare_url_is_the_fallback() {
    let html = "var src = 'https://cdn.example.com/media/index.m3u8?session=1';";
    let found = ManifestLocator::new().locate(html);
    assert_eq!(
        found.as_deref(),
        Some("https://cdn.example.com/media/index.m3u8?session=1")
    );
}

#[test]
fn pages_without_a_manifest_yield_none() {
    let locator = ManifestLocator::new();
    assert_eq!(locator.locate("<html><body>nothing here</body></html>"), None);
    assert_eq!(locator.locate(""), None);
}
