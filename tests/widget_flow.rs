use actix_web::{dev::ServerHandle, web, App, HttpResponse, HttpServer};
use pigeonhole::catalog;
use pigeonhole::client::{CheckoutClient, CheckoutTransport};
use pigeonhole::error::CheckoutError;
use pigeonhole::routes::{configure, AppState};
use pigeonhole::widget::{failure_message, Activation, CheckoutWidget, WidgetState};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

/// Binds the storefront on an ephemeral port and runs it in the background.
fn spawn_storefront() -> (SocketAddr, ServerHandle) {
    let state = web::Data::new(AppState::default());
    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (addr, handle)
}

/// A server whose checkout endpoint always fails.
fn spawn_broken_storefront() -> (SocketAddr, ServerHandle) {
    let server = HttpServer::new(|| {
        App::new().route(
            "/api/checkout/{id}",
            web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (addr, handle)
}

fn unused_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[actix_web::test]
async fn test_widget_resolves_against_running_server() {
    let (addr, handle) = spawn_storefront();
    let product = catalog::product_by_slug("prism-dove").unwrap();
    let client = CheckoutClient::new(format!("http://{}", addr));
    let widget = CheckoutWidget::new(product.id, product.name, Arc::new(client));

    let receipt = match widget.activate().await {
        Activation::Resolved(receipt) => receipt,
        other => panic!("unexpected activation {:?}", other),
    };
    assert!(receipt.is_success());
    assert!(receipt.payment_url.contains(&receipt.reference));
    assert!(receipt.message.contains("prism-dove"));

    let html = widget.render_html().await;
    assert!(html.contains("Prism Dove Studio"));
    assert!(html.contains(&receipt.message));
    assert!(!html.contains("checkout-error"));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_client_sends_encoded_identifier() {
    let (addr, handle) = spawn_storefront();
    let client = CheckoutClient::new(format!("http://{}", addr));

    let response = client.checkout("owl with space").await.unwrap();
    assert!(response
        .message
        .starts_with("Checkout simulated for device owl with space."));

    let response = client.checkout("").await.unwrap();
    assert!(response
        .message
        .starts_with("Checkout simulated for device ."));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_non_success_status_fails_widget() {
    let (addr, handle) = spawn_broken_storefront();
    let client = CheckoutClient::new(format!("http://{}", addr));
    assert!(matches!(
        client.checkout("cyber-finch").await,
        Err(CheckoutError::Status(500))
    ));

    let widget = CheckoutWidget::new("cyber-finch", "Cyber Finch Prime", Arc::new(client));
    let activation = widget.activate().await;
    assert_eq!(activation, Activation::Failed(failure_message("Cyber Finch Prime")));
    assert!(widget.is_enabled().await);

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_unreachable_server_fails_widget() {
    let client = CheckoutClient::new(unused_port_url());
    let widget = CheckoutWidget::new("nocturne-owl", "Nocturne Owl Beacon", Arc::new(client));

    widget.activate().await;
    match widget.state().await {
        WidgetState::Failed(message) => {
            assert!(message.contains("Nocturne Owl Beacon"));
            assert!(message.contains("Please try again"));
        }
        other => panic!("unexpected state {:?}", other),
    }
    assert!(widget.is_enabled().await);
    assert!(!widget.render_html().await.contains("Signal Locked"));
}
