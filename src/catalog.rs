//! Static storefront data: the device line-up and the podcast episodes.
//!
//! Lookups return `None` when nothing matches; callers render the
//! "Signal Lost" page in that case.

use crate::types::{Episode, Product};

pub static PRODUCTS: [Product; 3] = [
    Product {
        id: "cyber-finch",
        slug: "cyber-finch",
        name: "Cyber Finch Prime",
        tagline: "Featherweight streamer with heavyweight decoding.",
        description: "The Cyber Finch Prime blends low-latency Wi-Fi 6E with a custom neon OS overlay that keeps your stream crisp and responsive.",
        price: "$249",
        compatibility: &["Dolby Vision", "HDR10+", "Matter Ready"],
        specs: &["Amlogic G3 Octa-Core", "32GB UFS Storage", "4GB LPDDR5", "Wi-Fi 6E"],
        image: "/products/cyber-finch.svg",
        tmdb_collection_id: Some(420818),
    },
    Product {
        id: "prism-dove",
        slug: "prism-dove",
        name: "Prism Dove Studio",
        tagline: "Color graded visuals tuned for cinematographers.",
        description: "12-bit pipeline, SDI input, and a pro-grade remote wrapped inside a reflective glass chassis inspired by cathedral windows.",
        price: "$399",
        compatibility: &["ProRes", "DaVinci Sync", "Calibrated"],
        specs: &["Snapdragon X Elite", "64GB NVMe", "8GB LPDDR5X", "Tri-Band Wi-Fi"],
        image: "/products/prism-dove.svg",
        tmdb_collection_id: Some(9485),
    },
    Product {
        id: "nocturne-owl",
        slug: "nocturne-owl",
        name: "Nocturne Owl Beacon",
        tagline: "The nocturnal powerhouse for midnight binge sessions.",
        description: "Anodized obsidian shell with passive cooling fins and a lumen-reactive underglow that adapts to ambient lighting.",
        price: "$329",
        compatibility: &["Dolby Atmos", "VRR", "Cloud DVR"],
        specs: &["Custom Ryzen Edge", "48GB SSD Cache", "6GB LPDDR5", "Bluetooth 5.4"],
        image: "/products/nocturne-owl.svg",
        tmdb_collection_id: None,
    },
];

pub static EPISODES: [Episode; 3] = [
    Episode {
        id: "001",
        title: "Signal Boost: The CRT Renaissance",
        description: "We dissect the return of CRT aesthetics in modern home theaters and talk about why pigeons keep appearing in Net tech art.",
        duration: "38:21",
        audio_url: "https://cdn.example.com/audio/signal-boost-001.mp3",
        published_at: "2024-04-01",
    },
    Episode {
        id: "002",
        title: "Firmware Glitches & Neon Switches",
        description: "A behind-the-scenes chat with the engineers who tuned the Cyber Finch Prime to glide between apps at lightning speed.",
        duration: "42:09",
        audio_url: "https://cdn.example.com/audio/signal-boost-002.mp3",
        published_at: "2024-04-15",
    },
    Episode {
        id: "003",
        title: "Projector Shadows and Prism Doves",
        description: "Cinematic color science gets the retro-futuristic treatment as we tour the Prism Dove Studio lab.",
        duration: "47:55",
        audio_url: "https://cdn.example.com/audio/signal-boost-003.mp3",
        published_at: "2024-05-02",
    },
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn episodes() -> &'static [Episode] {
    &EPISODES
}

pub fn product_by_slug(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.slug == slug)
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

pub fn episode_by_id(id: &str) -> Option<&'static Episode> {
    EPISODES.iter().find(|episode| episode.id == id)
}
