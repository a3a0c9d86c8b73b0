use super::escape_html;
use super::layout::{render_page, PageMeta};
use super::structured_data;
use crate::catalog;
use crate::types::Episode;

pub fn render_podcast(episode: &Episode, site_url: &str) -> String {
    let mut meta = PageMeta::new(
        format!("{} · Signal Boost Podcast", episode.title),
        episode.description,
    );
    meta.canonical = Some(format!("{}{}", site_url, episode.path()));
    meta.structured_data
        .push(structured_data::podcast_episode(episode, site_url));

    let others: String = catalog::episodes()
        .iter()
        .filter(|other| other.id != episode.id)
        .map(|other| {
            format!(
                r#"<li><a href="{}">{}</a> · {}</li>"#,
                other.path(),
                escape_html(other.title),
                other.duration
            )
        })
        .collect();

    let body = format!(
        r#"<header><h1>Signal Boost Podcast</h1><p>Episode {} · Published {}</p></header><section class="player"><h2>{}</h2><p>{}</p><audio controls preload="none" src="{}"></audio><p class="duration">{}</p></section><section><h2>More Episodes</h2><ul>{}</ul></section>"#,
        escape_html(episode.id),
        escape_html(episode.published_at),
        escape_html(episode.title),
        escape_html(episode.description),
        escape_html(episode.audio_url),
        escape_html(episode.duration),
        others
    );
    render_page(&meta, site_url, &episode.path(), &body)
}
