use readstash::config::Config;
use readstash::fetcher::{FetchError, build_client, fetch};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn test_config() -> Config {
    Config::default()
        .with_request_timeout(Duration::from_secs(2))
        .with_max_retries(3)
        .with_retry_base_delay(Duration::from_millis(10))
}

#[tokio::test]
async fn fetch_success_decodes_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(
                    "<html><head><title>Test</title></head><body>Hello World</body></html>"
                        .as_bytes(),
                )
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/article", mock_server.uri());
    let page = fetch(&client, &url, &config).await.unwrap();

    assert!(page.status.is_success());
    assert!(page.body.contains("Hello World"));
    assert_eq!(page.encoding, "UTF-8");
    assert_eq!(page.url_final.as_str(), url);
}

#[tokio::test]
async fn fetch_404_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/missing", mock_server.uri());

    match fetch(&client, &url, &config).await {
        Err(FetchError::Http { status, retriable }) => {
            assert_eq!(status.as_u16(), 404);
            assert!(!retriable);
        }
        other => panic!("expected HTTP 404 error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_500_exhausts_all_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/flaky", mock_server.uri());

    match fetch(&client, &url, &config).await {
        Err(FetchError::Http { status, retriable }) => {
            assert_eq!(status.as_u16(), 500);
            assert!(retriable);
        }
        other => panic!("expected HTTP 500 error, got {other:?}"),
    }
    // wiremock verifies exactly 3 attempts on drop
}

#[tokio::test]
async fn fetch_recovers_when_a_retry_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eventually"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/eventually"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes("<html><body>made it</body></html>".as_bytes())
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/eventually", mock_server.uri());

    let page = fetch(&client, &url, &config).await.unwrap();
    assert!(page.body.contains("made it"));
}

#[tokio::test]
async fn fetch_403_maps_to_blocked_and_stops() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/walled"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/walled", mock_server.uri());

    assert!(matches!(
        fetch(&client, &url, &config).await,
        Err(FetchError::Blocked(_))
    ));
}

#[tokio::test]
async fn fetch_rejects_non_html_responses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/file.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-1.4".to_vec())
                .insert_header("Content-Type", "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/file.pdf", mock_server.uri());

    assert!(matches!(
        fetch(&client, &url, &config).await,
        Err(FetchError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn fetch_decodes_legacy_charset_from_meta() {
    let mock_server = MockServer::start().await;

    let mut body = b"<html><head><meta charset=\"windows-1252\"></head><body>caf".to_vec();
    body.push(0xE9); // 'é' in windows-1252
    body.extend_from_slice(b"</body></html>");

    Mock::given(method("GET"))
        .and(path("/legacy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body)
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let config = test_config();
    let client = build_client(&config).unwrap();
    let url = format!("{}/legacy", mock_server.uri());

    let page = fetch(&client, &url, &config).await.unwrap();
    assert!(page.body.contains("café"));
    assert_eq!(page.encoding, "windows-1252");
}

#[tokio::test]
async fn fetch_invalid_scheme_fails_without_io() {
    let config = test_config();
    let client = build_client(&config).unwrap();

    assert!(matches!(
        fetch(&client, "ftp://example.com/x", &config).await,
        Err(FetchError::InvalidUrl(_))
    ));
}
