use actix_web::{
    http::{header, StatusCode},
    test, web, App,
};
use pigeonhole::routes::{configure, AppState};

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .configure(configure),
    )
    .await;
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = test::read_body(resp).await;
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[actix_web::test]
async fn test_health() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn test_static_pages_render() {
    for (uri, marker) in [
        ("/", "Pigeonhole Streaming Fleet"),
        ("/about", "About the Flock"),
        ("/products/cyber-finch", "Cyber Finch Prime"),
        ("/products/prism-dove", "Prism Dove Studio"),
        ("/podcast/001", "Signal Boost: The CRT Renaissance"),
    ] {
        let (status, content_type, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains(marker), "{} missing {:?}", uri, marker);
        assert!(body.starts_with("<!DOCTYPE html>"));
    }
}

#[actix_web::test]
async fn test_unknown_keys_render_signal_lost() {
    for uri in ["/products/rusty-pigeon", "/podcast/999", "/does/not/exist"] {
        let (status, content_type, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Signal Lost"));
    }
}

#[actix_web::test]
async fn test_product_page_widget_names_product() {
    let (_, _, body) = get("/products/nocturne-owl").await;
    assert!(body.contains(r#"aria-label="Checkout Nocturne Owl Beacon""#));
    assert!(body.contains(r#"data-checkout-endpoint="/api/checkout/nocturne-owl""#));
    assert!(!body.contains("checkout-error"));
}
