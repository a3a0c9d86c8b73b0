//! JSON-LD blocks embedded in page heads.

use serde_json::{json, Value};

use super::BRAND;
use crate::types::{Episode, Product};

pub fn organization(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": BRAND,
        "url": site_url,
        "sameAs": ["https://t.me/pigeonhole-support"],
        "slogan": "Retro-futuristic streaming hardware tuned for perfect neon cinema.",
        "contactPoint": [{
            "@type": "ContactPoint",
            "contactType": "customer support",
            "areaServed": "Worldwide",
            "availableLanguage": ["English"],
            "email": "hello@pigeonhole.dev"
        }]
    })
}

pub fn product(product: &Product, site_url: &str) -> Value {
    let mut offer = json!({
        "@type": "Offer",
        "priceCurrency": "USD",
        "availability": "https://schema.org/PreOrder",
        "url": format!("{}{}", site_url, product.path()),
    });
    // Leave the price out rather than publish a zero.
    if let Some(price) = product.price_value().filter(|p| *p > 0.0) {
        offer["price"] = json!(price);
    }

    let properties: Vec<Value> = product
        .compatibility
        .iter()
        .map(|item| json!({ "@type": "PropertyValue", "name": "Compatibility", "value": item }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "image": format!("{}{}", site_url, product.image),
        "sku": product.slug,
        "brand": { "@type": "Brand", "name": BRAND },
        "offers": offer,
        "additionalProperty": properties,
    })
}

pub fn podcast_episode(episode: &Episode, site_url: &str) -> Value {
    let url = format!("{}{}", site_url, episode.path());
    json!({
        "@context": "https://schema.org",
        "@type": "PodcastEpisode",
        "name": episode.title,
        "description": episode.description,
        "url": url,
        "datePublished": episode.published_at,
        "duration": episode.iso_duration(),
        "episodeNumber": episode.episode_number(),
        "partOfSeries": { "@type": "PodcastSeries", "name": "Signal Boost Podcast", "url": url },
        "audio": {
            "@type": "AudioObject",
            "contentUrl": episode.audio_url,
            "encodingFormat": "audio/mpeg"
        }
    })
}

/// `<script>` tag for `data`. `</` is escaped so the payload cannot close the tag.
pub fn script_tag(data: &Value) -> String {
    let body = data.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{}</script>"#, body)
}
