use crate::{encode_ids, execute, GoogleAPIRequestFields, HttpClient, YouTubeError};
use serde::Deserialize;
use std::time::Duration;
use crate::models::PlaylistRecord;

pub struct ListPlaylistsRequest<'a> {
    pub client: &'a HttpClient,
    pub host: &'a str,
    pub timeout: Duration,
    pub fields: GoogleAPIRequestFields<'a>,
    pub playlist_ids: Vec<String>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListPlaylistsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiPlaylist>>,
}

#[derive(Debug, Deserialize)]
struct ApiPlaylist {
    id: String,
    snippet: Option<PlaylistSnippet>,
}

#[derive(Debug, Deserialize)]
struct PlaylistSnippet {
    title: Option<String>,
}

/// Decodes a `playlists.list` body requested with `part=snippet`.
pub fn parse_playlists(body: &[u8]) -> Result<Vec<PlaylistRecord>, YouTubeError> {
    let api_response: ApiResponse = serde_json::from_slice(body)?;

    api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(|playlist| -> Result<PlaylistRecord, YouTubeError> {
            let title = playlist.snippet
                .and_then(|s| s.title)
                .ok_or_else(|| YouTubeError::ParseError(format!("playlist {} has no title", playlist.id)))?;

            Ok(PlaylistRecord {
                id: playlist.id,
                title,
            })
        })
        .collect()
}

impl<'a> ListPlaylistsRequest<'a> {
    pub async fn send(self) -> Result<Vec<PlaylistRecord>, YouTubeError> {
        let url = format!(
            "https://{}/youtube/v3/playlists?part=snippet&id={}",
            self.host,
            encode_ids(&self.playlist_ids)
        );

        let req = self.fields.build_get(url)?;
        let body_bytes = execute(self.client, req, self.timeout).await?;

        parse_playlists(&body_bytes)
    }
}
