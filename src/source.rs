//! The lookups the entity layer needs from a metadata provider.

use std::future::Future;
use crate::models::{ChannelRecord, PlaylistItemsPage, PlaylistRecord, VideoRecord};
use crate::{GoogleAPIRequest, YouTubeDataV3Client, YouTubeError};

/// Number of playlist items requested per page; the API maximum.
pub const PLAYLIST_PAGE_SIZE: u32 = 50;

/// Remote lookups for channels, videos and playlists.
///
/// Single-record lookups fail with [`YouTubeError::NotFound`] unless the identifier
/// resolves to exactly one record.
pub trait MetadataSource {
    fn lookup_channel(&self, channel_id: &str) -> impl Future<Output = Result<ChannelRecord, YouTubeError>> + Send;

    fn lookup_video(&self, video_id: &str) -> impl Future<Output = Result<VideoRecord, YouTubeError>> + Send;

    /// Returns the raw ISO-8601 duration string of a video.
    fn lookup_video_duration(&self, video_id: &str) -> impl Future<Output = Result<String, YouTubeError>> + Send;

    fn lookup_playlist_snippet(&self, playlist_id: &str) -> impl Future<Output = Result<PlaylistRecord, YouTubeError>> + Send;

    /// Fetches one page of a playlist's members. `None` requests the first page.
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<PlaylistItemsPage, YouTubeError>> + Send;
}

pub(crate) fn exactly_one<T>(mut records: Vec<T>) -> Result<T, YouTubeError> {
    match records.len() {
        1 => Ok(records.remove(0)),
        _ => Err(YouTubeError::NotFound),
    }
}

/// [`MetadataSource`] backed by the Data API v3, authenticated with a static API key.
pub struct YouTubeDataV3Source {
    client: YouTubeDataV3Client,
    api_key: String,
}

impl YouTubeDataV3Source {
    pub fn new(client: YouTubeDataV3Client, api_key: String) -> Self {
        YouTubeDataV3Source { client, api_key }
    }

    pub fn client(&self) -> &YouTubeDataV3Client {
        &self.client
    }
}

impl MetadataSource for YouTubeDataV3Source {
    async fn lookup_channel(&self, channel_id: &str) -> Result<ChannelRecord, YouTubeError> {
        tracing::debug!(channel_id, "looking up channel");
        let channels = self.client
            .list_channels(vec![channel_id.to_string()])
            .with_key(&self.api_key)
            .send()
            .await?;
        exactly_one(channels)
    }

    async fn lookup_video(&self, video_id: &str) -> Result<VideoRecord, YouTubeError> {
        tracing::debug!(video_id, "looking up video");
        let videos = self.client
            .list_videos(vec![video_id.to_string()])
            .with_key(&self.api_key)
            .send()
            .await?;
        exactly_one(videos)
    }

    async fn lookup_video_duration(&self, video_id: &str) -> Result<String, YouTubeError> {
        tracing::debug!(video_id, "looking up video duration");
        let details = self.client
            .list_video_content_details(vec![video_id.to_string()])
            .with_key(&self.api_key)
            .send()
            .await?;
        exactly_one(details).map(|d| d.duration)
    }

    async fn lookup_playlist_snippet(&self, playlist_id: &str) -> Result<PlaylistRecord, YouTubeError> {
        tracing::debug!(playlist_id, "looking up playlist");
        let playlists = self.client
            .list_playlists(vec![playlist_id.to_string()])
            .with_key(&self.api_key)
            .send()
            .await?;
        exactly_one(playlists)
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, YouTubeError> {
        tracing::debug!(playlist_id, page_token, "listing playlist items");
        self.client
            .list_playlist_items(
                playlist_id.to_string(),
                page_token.map(str::to_string),
                Some(PLAYLIST_PAGE_SIZE),
            )
            .with_key(&self.api_key)
            .send()
            .await
    }
}
