use crate::{execute, GoogleAPIRequestFields, HttpClient, YouTubeError};
use serde::Deserialize;
use std::time::Duration;
use crate::models::PlaylistItemsPage;

pub struct ListPlaylistItemsRequest<'a> {
    pub client: &'a HttpClient,
    pub host: &'a str,
    pub timeout: Duration,
    pub fields: GoogleAPIRequestFields<'a>,
    pub playlist_id: String,
    pub page_token: Option<String>,
    pub max_results: Option<u32>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListPlaylistItemsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(rename = "pageInfo")]
    page_info: Option<PageInfo>,
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "totalResults")]
    total_results: u32,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    #[serde(rename = "contentDetails")]
    content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemContentDetails {
    #[serde(rename = "videoId")]
    video_id: String,
}

/// Decodes a `playlistItems.list` body requested with `part=contentDetails`.
///
/// An empty `nextPageToken` is treated the same as an absent one.
pub fn parse_playlist_items(body: &[u8]) -> Result<PlaylistItemsPage, YouTubeError> {
    let api_response: ApiResponse = serde_json::from_slice(body)?;

    Ok(PlaylistItemsPage {
        video_ids: api_response.items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect(),
        next_page_token: api_response.next_page_token.filter(|token| !token.is_empty()),
        total_results: api_response.page_info.map(|p| p.total_results).unwrap_or_default(),
    })
}

impl<'a> ListPlaylistItemsRequest<'a> {
    pub async fn send(self) -> Result<PlaylistItemsPage, YouTubeError> {
        let mut url = format!(
            "https://{}/youtube/v3/playlistItems?part=contentDetails&playlistId={}",
            self.host, urlencoding::encode(&self.playlist_id)
        );

        if let Some(page_token) = &self.page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(page_token)));
        }

        if let Some(max_results) = self.max_results {
            url.push_str(&format!("&maxResults={}", max_results));
        }

        let req = self.fields.build_get(url)?;
        let body_bytes = execute(self.client, req, self.timeout).await?;

        parse_playlist_items(&body_bytes)
    }
}
