use super::layout::{render_page, PageMeta};
use super::{escape_html, BRAND};
use crate::catalog;
use crate::types::Product;

const HERO_BADGES: [&str; 3] = ["Latency Optimized", "Neon Calibrated", "Immersive Audio"];

const FEATURES: [(&str, &str); 3] = [
    (
        "Adaptive Throughput",
        "Latency-reactive firmware auto-tunes bitrates in 12ms cycles for pristine playback during peak congestion.",
    ),
    (
        "Cinematic Pipeline",
        "12-bit color management with TMDB playlist syncing so every session opens on the perfect curated reel.",
    ),
    (
        "Immersive Audio",
        "Spatial audio chambers with phase-aligned subsonics engineered for nocturnal binge rituals.",
    ),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "The Prism Dove Studio shaved hours off our grading pipeline. The TMDB playlists feel like a concierge for our midnight screenings.",
        "Mara I., Neon Archive Curator",
    ),
    (
        "Cyber Finch Prime keeps our esports lounge streaming at 144Hz with zero packet loss. The pigeons know their networks.",
        "Dex H., Signal Basement Operator",
    ),
    (
        "Nocturne Owl Beacon is the only streamer that respects my nocturnal rituals. The ambient underglow pairs with my vinyl perfectly.",
        "Jun K., Analog Futurist",
    ),
];

pub fn render_home(site_url: &str) -> String {
    let meta = PageMeta::new(
        format!("{} | Retro-futuristic streaming hardware", BRAND),
        "Neon-infused streaming devices tuned for cinematic obsessives, studio archivists, and audio futurists.",
    );

    let badges: String = HERO_BADGES
        .iter()
        .map(|badge| format!("<li>{}</li>", badge))
        .collect();
    let hero = format!(
        r#"<section id="hero"><h1>Pigeonhole Streaming Fleet</h1><p>Neon-infused streaming devices tuned for cinematic obsessives, studio archivists, and audio futurists. Pick a bird, tune the glitches, and let the retro CRT hum guide you home.</p><ul class="badges">{}</ul><p><a href="/products/cyber-finch">Explore Devices</a> <a href="/podcast/001">Listen to the Signal</a> <a href="/about">Meet the Collective</a></p></section>"#,
        badges
    );

    let features: String = FEATURES
        .iter()
        .map(|(title, body)| format!("<article><h3>{}</h3><p>{}</p></article>", title, body))
        .collect();
    let showcase = format!(
        r#"<section aria-labelledby="feature-showcase-heading"><h2 id="feature-showcase-heading">Why the Fleet Wins</h2>{}</section>"#,
        features
    );

    let cards: String = catalog::products().iter().map(product_card).collect();
    let grid = format!(
        r#"<section id="devices"><h2>The Fleet</h2><div class="product-grid">{}</div></section>"#,
        cards
    );

    let support = r#"<div class="support"><section><h3>Telegram Support</h3><p>Join the encrypted flock for 24/7 firmware drops, neon calibration tips, and to DM the engineers who birthed the Broken CRT pigeon.</p><a href="https://t.me/pigeonhole-support" target="_blank" rel="noreferrer">Open Telegram</a></section><section><h3>Bitcoin Checkout</h3><p>Route your sats through the Broken CRT node. Once the payment hum stabilizes, our flock initiates shipment.</p><img src="/qr-bitcoin.svg" alt="Bitcoin QR" width="144" height="144"><p>Lightning invoices refresh every 15 minutes.</p></section></div>"#;

    let quotes: String = TESTIMONIALS
        .iter()
        .map(|(quote, author)| {
            format!(
                "<figure><blockquote>{}</blockquote><figcaption>{}</figcaption></figure>",
                quote, author
            )
        })
        .collect();
    let testimonials = format!(r#"<section><h2>Signal Proof</h2>{}</section>"#, quotes);

    let body = format!("{}{}{}{}{}", hero, showcase, grid, support, testimonials);
    render_page(&meta, site_url, "/", &body)
}

fn product_card(product: &Product) -> String {
    let badges: String = product
        .compatibility
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(
        r#"<article class="product-card"><img src="{}" alt="{}"><h3><a href="{}">{}</a></h3><p>{}</p><ul class="badges">{}</ul><p class="price">{}</p></article>"#,
        escape_html(product.image),
        escape_html(product.name),
        product.path(),
        escape_html(product.name),
        escape_html(product.tagline),
        badges,
        escape_html(product.price)
    )
}
