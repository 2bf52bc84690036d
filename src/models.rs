//! Raw records as returned by the Data API, before they are assembled into entities.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub view_count: u64,
    pub like_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoContentDetails {
    pub id: String,
    /// ISO-8601 duration, e.g. `PT4M13S`.
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRecord {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaylistItemsPage {
    pub video_ids: Vec<String>,
    /// `None` once the last page has been returned.
    pub next_page_token: Option<String>,
    pub total_results: u32,
}
