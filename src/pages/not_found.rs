use super::layout::{render_page, PageMeta};
use super::BRAND;

pub fn render_not_found(site_url: &str, path: &str) -> String {
    let meta = PageMeta::new(
        format!("404 - Signal Lost | {}", BRAND),
        "The page you are looking for fractured into static.",
    );
    let body = r#"<section class="not-found"><img src="/broken-crt-pigeon.svg" alt="Broken CRT pigeon"><h1>Signal Lost</h1><p>The Broken CRT pigeon fluttered through a corrupted timeline and the page you're looking for fractured into static. Follow the humming wires back to safety.</p><a href="/">Return Home</a></section>"#;
    render_page(&meta, site_url, path, body)
}
