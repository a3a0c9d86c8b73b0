use serde_json::Value;

use super::structured_data::{organization, script_tag};
use super::{escape_html, BRAND};

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Devices", "/#devices"),
    ("About", "/about"),
    ("Podcast", "/podcast/001"),
];

/// Head-level data for one page.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub structured_data: Vec<Value>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

pub fn render_page(meta: &PageMeta, site_url: &str, current_path: &str, body: &str) -> String {
    let mut head = format!(
        r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><meta name="description" content="{}">"#,
        escape_html(&meta.title),
        escape_html(&meta.description)
    );
    if let Some(canonical) = &meta.canonical {
        head.push_str(&format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_html(canonical)
        ));
    }
    head.push_str(&script_tag(&organization(site_url)));
    for data in &meta.structured_data {
        head.push_str(&script_tag(data));
    }

    format!(
        r#"<!DOCTYPE html><html lang="en"><head>{}</head><body>{}<main>{}</main>{}</body></html>"#,
        head,
        site_header(current_path),
        body,
        site_footer()
    )
}

fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href || (href != "/" && current_path.starts_with(href))
}

fn site_header(current_path: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(label, href)| {
            let current = if is_active(current_path, href) {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<li><a href="{}"{}>{}</a></li>"#, href, current, label)
        })
        .collect();
    format!(
        r#"<header><nav aria-label="Primary"><a href="/" class="brand">Broken CRT Pigeon</a><ul>{}</ul></nav></header>"#,
        links
    )
}

fn site_footer() -> String {
    format!(
        r#"<footer><p>{} · Retro-futuristic streaming hardware.</p><p><a href="https://t.me/pigeonhole-support">Telegram support</a> · <a href="mailto:hello@pigeonhole.dev">hello@pigeonhole.dev</a></p></footer>"#,
        BRAND
    )
}
