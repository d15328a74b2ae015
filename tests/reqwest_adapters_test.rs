//! HTTP adapter tests using wiremock.
//!
//! These tests verify that ReqwestTransport decodes feed listings and maps
//! failures, and that ReqwestImageLoader reads image dimensions.

use std::io::Cursor;
use std::time::Duration;

use imgboard::adapters::mock::FixedHeightFactory;
use imgboard::adapters::{ReqwestImageLoader, ReqwestTransport};
use imgboard::config::BoardConfig;
use imgboard::coordinator::LoadCoordinator;
use imgboard::error::{ImageLoadError, TransportError};
use imgboard::traits::{FeedTransport, ImageLoader};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Encode a blank PNG of the given size.
fn png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::RgbImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// A listing whose threads point at images on `image_host`.
fn listing(image_host: &str, ids: &[&str], after: Option<&str>) -> serde_json::Value {
    let children: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "kind": "t3",
                "data": {
                    "id": id,
                    "url": format!("{}/img/{}.png", image_host, id),
                    "title": format!("Thread {}", id),
                }
            })
        })
        .collect();
    serde_json::json!({
        "kind": "Listing",
        "data": { "after": after, "children": children }
    })
}

// ============================================================================
// ReqwestTransport
// ============================================================================

#[tokio::test]
async fn test_fetch_decodes_listing() {
    let server = MockServer::start().await;
    let mut body = listing("https://i.test", &["a", "b"], Some("t3_b"));
    body["data"]["children"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({"kind": "t3", "data": {"id": "self", "title": "no url"}}));

    Mock::given(method("GET"))
        .and(path("/r/pics/.json"))
        .and(query_param("limit", "25"))
        .and(query_param("after", "t3_a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let url = format!("{}/r/pics/.json?limit=25&after=t3_a", server.uri());
    let page = transport.fetch(&url, Duration::from_secs(5)).await;

    let page = page.expect("fetch failed");
    assert_eq!(page.next_token.as_deref(), Some("t3_b"));
    let ids: Vec<&str> = page.threads.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_fetch_maps_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let result = transport
        .fetch(&format!("{}/r/pics/.json", server.uri()), Duration::from_secs(5))
        .await;

    assert_eq!(result, Err(TransportError::Status { status: 503 }));
}

#[tokio::test]
async fn test_fetch_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let result = transport
        .fetch(&format!("{}/r/pics/.json", server.uri()), Duration::from_secs(5))
        .await;

    assert!(matches!(result, Err(TransportError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing("https://i.test", &[], None))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let timeout = Duration::from_millis(200);
    let result = transport
        .fetch(&format!("{}/r/pics/.json", server.uri()), timeout)
        .await;

    assert_eq!(result, Err(TransportError::Timeout(timeout)));
}

// ============================================================================
// ReqwestImageLoader
// ============================================================================

#[tokio::test]
async fn test_load_reads_png_dimensions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img/wide.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png(64, 32)))
        .mount(&server)
        .await;

    let loader = ReqwestImageLoader::new();
    let url = format!("{}/img/wide.png", server.uri());
    let image = loader.load(&url).await.expect("load failed");

    assert_eq!((image.width, image.height), (64, 32));
    assert_eq!(image.source_url, url);
}

#[tokio::test]
async fn test_load_maps_missing_image() {
    let server = MockServer::start().await;
    let loader = ReqwestImageLoader::new();
    let url = format!("{}/img/missing.png", server.uri());

    let result = loader.load(&url).await;
    assert_eq!(
        result,
        Err(ImageLoadError::Status {
            url: url.clone(),
            status: 404
        })
    );
}

#[tokio::test]
async fn test_load_rejects_non_image_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("removed"))
        .mount(&server)
        .await;

    let loader = ReqwestImageLoader::new();
    let result = loader
        .load(&format!("{}/img/removed.png", server.uri()))
        .await;

    assert!(matches!(result, Err(ImageLoadError::Decode { .. })));
}

// ============================================================================
// End to end
// ============================================================================

#[tokio::test]
async fn test_coordinator_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/aww/.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing(&server.uri(), &["a", "b", "c"], None)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img/a.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png(40, 30)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img/b.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png(20, 50)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img/c.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = BoardConfig::default()
        .with_feed_base_url(server.uri())
        .with_page_size(3);
    let (mut coordinator, _events) = LoadCoordinator::new(
        config,
        ReqwestTransport::new(),
        ReqwestImageLoader::new(),
        FixedHeightFactory::new(),
        vec!["aww".to_string()],
    );

    coordinator.apply_width(620);
    coordinator.load_more();
    coordinator.run_until_settled().await;

    let mut accepted: Vec<&str> = coordinator
        .board()
        .history()
        .iter()
        .map(|item| item.thread_id.as_str())
        .collect();
    accepted.sort();
    assert_eq!(accepted, vec!["a", "b"]);
    assert_eq!(coordinator.cursor().token(), None);
    assert_eq!(coordinator.running_requests(), 0);
}
