/// One episode of the Signal Boost podcast.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `mm:ss`
    pub duration: &'static str,
    pub audio_url: &'static str,
    pub published_at: &'static str,
}

impl Episode {
    /// ISO-8601 duration, `"38:21"` -> `"PT38M21S"`. Unparseable parts count as zero.
    pub fn iso_duration(&self) -> String {
        let mut parts = self.duration.split(':');
        let minutes: u32 = parts.next().and_then(|m| m.trim().parse().ok()).unwrap_or(0);
        let seconds: u32 = parts.next().and_then(|s| s.trim().parse().ok()).unwrap_or(0);
        format!("PT{}M{}S", minutes, seconds)
    }

    pub fn episode_number(&self) -> Option<u32> {
        self.id.parse().ok()
    }

    pub fn path(&self) -> String {
        format!("/podcast/{}", self.id)
    }
}
