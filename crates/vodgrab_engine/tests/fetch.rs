use std::time::Duration;

use pretty_assertions::assert_eq;
use vodgrab_engine::{FetchError, FetchSettings, PageClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_text_returns_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>episode</html>"))
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let body = tokio::task::spawn_blocking(move || {
        let client = PageClient::new(FetchSettings::default()).unwrap();
        client.get_text(&url)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(body, "<html>episode</html>");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let client = PageClient::new(FetchSettings::default()).unwrap();
        client.get_text(&url)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(FetchError::HttpStatus(404))));
}

#[tokio::test]
async fn slow_responses_map_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let url = format!("{}/slow", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let settings = FetchSettings {
            request_timeout: Duration::from_millis(200),
            ..FetchSettings::default()
        };
        let client = PageClient::new(settings).unwrap();
        client.get_text(&url)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(FetchError::Timeout)));
}

#[tokio::test]
async fn invalid_urls_are_rejected_before_any_request() {
    let result = tokio::task::spawn_blocking(move || {
        let client = PageClient::new(FetchSettings::default()).unwrap();
        client.get_text("not a url")
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
}
