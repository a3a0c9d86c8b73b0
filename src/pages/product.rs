use super::layout::{render_page, PageMeta};
use super::structured_data;
use super::{escape_html, BRAND};
use crate::types::Product;
use crate::widget::{render_widget, WidgetState};

pub fn render_product(product: &Product, site_url: &str) -> String {
    let mut meta = PageMeta::new(
        format!("{} | {}", product.name, BRAND),
        product.description,
    );
    meta.canonical = Some(format!("{}{}", site_url, product.path()));
    meta.structured_data
        .push(structured_data::product(product, site_url));

    let badges: String = product
        .compatibility
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    let specs: String = product
        .specs
        .iter()
        .map(|spec| format!("<li>{}</li>", escape_html(spec)))
        .collect();
    let collection = match product.tmdb_collection_id {
        Some(id) => format!(
            r#"<p class="tmdb"><a href="https://www.themoviedb.org/collection/{}" target="_blank" rel="noreferrer">Curated TMDB reel</a></p>"#,
            id
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<header><h1>{}</h1><p>{}</p><ul class="badges">{}</ul><img src="{}" alt="{}"></header><section><h2>Core Specs</h2><ul>{}</ul></section><aside>{}<p>Price</p><p class="price">{}</p>{}</aside>"#,
        escape_html(product.name),
        escape_html(product.description),
        badges,
        escape_html(product.image),
        escape_html(product.name),
        specs,
        collection,
        escape_html(product.price),
        render_widget(product.id, product.name, &WidgetState::Idle)
    );
    render_page(&meta, site_url, &product.path(), &body)
}
