//! HTTP surface of the storefront.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/health` | `OK` |
//! | GET | `/`, `/about` | HTML |
//! | GET | `/products/{slug}`, `/podcast/{id}` | HTML, 404 page for unknown keys |
//! | POST | `/api/checkout/{productId}` | 200 JSON confirmation, for any id |
//!
//! Every other path renders the "Signal Lost" page with status 404.

use std::sync::Arc;

use actix_web::{
    http::{header::ContentType, StatusCode},
    web, HttpRequest, HttpResponse, Responder,
};
use log::info;

use crate::catalog;
use crate::checkout::{simulate_checkout, CheckoutRequest, RandomSource, ThreadRandom};
use crate::config::SiteConfig;
use crate::pages;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(config: SiteConfig, random: Arc<dyn RandomSource>) -> Self {
        Self { config, random }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteConfig::default(), Arc::new(ThreadRandom))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/", web::get().to(home))
        .route("/about", web::get().to(about))
        .route("/products/{slug}", web::get().to(product_page))
        .route("/podcast/{id}", web::get().to(podcast_page))
        .route("/api/checkout/", web::post().to(post_checkout_without_id))
        .route("/api/checkout/{productId}", web::post().to(post_checkout))
        .default_service(web::to(not_found));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

fn checkout_response(request: &CheckoutRequest, state: &AppState) -> HttpResponse {
    let product_id = request.product_id.as_str();
    let response = simulate_checkout(
        product_id,
        state.random.as_ref(),
        &state.config.payment_base_url,
    );
    info!(
        "checkout simulated for {:?} reference {}",
        product_id, response.reference
    );
    HttpResponse::Ok().json(response)
}

async fn post_checkout(
    request: web::Path<CheckoutRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    checkout_response(&request, &state)
}

async fn post_checkout_without_id(state: web::Data<AppState>) -> impl Responder {
    checkout_response(&CheckoutRequest::default(), &state)
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn ok_html(body: String) -> HttpResponse {
    html(StatusCode::OK, body)
}

fn not_found_html(state: &AppState, path: &str) -> HttpResponse {
    html(
        StatusCode::NOT_FOUND,
        pages::render_not_found(&state.config.site_url, path),
    )
}

async fn home(state: web::Data<AppState>) -> impl Responder {
    ok_html(pages::render_home(&state.config.site_url))
}

async fn about(state: web::Data<AppState>) -> impl Responder {
    ok_html(pages::render_about(&state.config.site_url))
}

async fn product_page(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> impl Responder {
    match catalog::product_by_slug(&path.into_inner()) {
        Some(product) => ok_html(pages::render_product(product, &state.config.site_url)),
        None => not_found_html(&state, req.path()),
    }
}

async fn podcast_page(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> impl Responder {
    match catalog::episode_by_id(&path.into_inner()) {
        Some(episode) => ok_html(pages::render_podcast(episode, &state.config.site_url)),
        None => not_found_html(&state, req.path()),
    }
}

async fn not_found(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    not_found_html(&state, req.path())
}
