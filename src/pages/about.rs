use super::layout::{render_page, PageMeta};
use super::BRAND;

const PILLARS: [(&str, &str); 3] = [
    (
        "Signal Craft",
        "Firmware built in-house with nightly regression sweeps across latency, color accuracy, and glitch stability benchmarks.",
    ),
    (
        "Analog Reverence",
        "We study cathode ray artifacts, magnetic interference, and VHS flutter to reimagine them as modern interface poetry.",
    ),
    (
        "Community First",
        "The flock co-designs features inside our Telegram lab. Feature flags and roadmap votes are transparent to every member.",
    ),
];

// (year, headline, body)
const MILESTONES: [(&str, &str, &str); 4] = [
    (
        "2021",
        "The First Signal",
        "Pigeonhole prototypes stream the first 4K feed from a warehouse CRT wall while synthwave pigeons coo in approval.",
    ),
    (
        "2022",
        "Neon Firmware",
        "Firmware engineers unveil the neon glitch overlay that powers latency-reactive UI animations across the fleet.",
    ),
    (
        "2023",
        "TMDB Sync",
        "Partnership with TMDB allows every device to sync curated collections with a single tap from the companion app.",
    ),
    (
        "2024",
        "Broken CRT Pigeon",
        "The iconic mascot is reborn as a fractured hologram guiding fans through the portal between analog and digital.",
    ),
];

pub fn render_about(site_url: &str) -> String {
    let meta = PageMeta::new(
        format!("About the Flock | {}", BRAND),
        "A collective of glitch-artists, firmware magicians, and radio pirates building retro-future entertainment gear.",
    );

    let timeline: String = MILESTONES
        .iter()
        .map(|(year, headline, body)| {
            format!(
                "<li><span class=\"year\">{}</span><h3>{}</h3><p>{}</p></li>",
                year, headline, body
            )
        })
        .collect();
    let pillars: String = PILLARS
        .iter()
        .map(|(title, body)| format!("<div><h3>{}</h3><p>{}</p></div>", title, body))
        .collect();

    let body = format!(
        r#"<header><img src="/broken-crt-pigeon.svg" alt="Broken CRT pigeon"><h1>About the Flock</h1><p>Pigeonhole Streaming is a collective of glitch-artists, firmware magicians, and radio pirates building retro-future entertainment gear. Our mascot, the Broken CRT pigeon, symbolizes the beauty of fractured signals stitched into a coherent experience.</p></header><section><h2>Timeline</h2><ol class="timeline">{}</ol></section><section aria-labelledby="pillar-heading"><h2 id="pillar-heading">What Guides the Flock</h2>{}</section><section><h2>Manifesto</h2><p>We believe the best streams embrace imperfection. Our hardware is tuned to celebrate the artifacts: scanlines, chromatic aberrations and buffer whispers, because that texture makes every binge feel alive. Follow the pigeon, trust the hum, and never mute the neon.</p></section>"#,
        timeline, pillars
    );
    render_page(&meta, site_url, "/about", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_lists_timeline_in_order() {
        let html = render_about("https://x.test");
        let start = html.find(r#"<ol class="timeline">"#).unwrap();
        let timeline = &html[start..];
        let first = timeline.find("<h3>The First Signal</h3>").unwrap();
        let last = timeline.find("<h3>Broken CRT Pigeon</h3>").unwrap();
        assert!(first < last);
        assert!(html.contains("Manifesto"));
    }
}
