use crate::{encode_ids, execute, parse_count, GoogleAPIRequestFields, HttpClient, YouTubeError};
use serde::Deserialize;
use std::time::Duration;
use crate::models::{VideoContentDetails, VideoRecord};

pub struct ListVideosRequest<'a> {
    pub client: &'a HttpClient,
    pub host: &'a str,
    pub timeout: Duration,
    pub fields: GoogleAPIRequestFields<'a>,
    pub video_ids: Vec<String>,
}

pub struct ListVideoContentDetailsRequest<'a> {
    pub client: &'a HttpClient,
    pub host: &'a str,
    pub timeout: Duration,
    pub fields: GoogleAPIRequestFields<'a>,
    pub video_ids: Vec<String>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListVideosRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListVideoContentDetailsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiVideo>>
}

#[derive(Debug, Deserialize)]
struct ApiVideo {
    id: String,
    snippet: Option<VideoSnippet>,
    statistics: Option<VideoStatistics>,
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

/// Decodes a `videos.list` body requested with `part=snippet,statistics`.
///
/// Videos whose owner hides the like counter carry no `likeCount`; those report 0 likes.
pub fn parse_videos(body: &[u8]) -> Result<Vec<VideoRecord>, YouTubeError> {
    let api_response: ApiResponse = serde_json::from_slice(body)?;

    api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(|video| -> Result<VideoRecord, YouTubeError> {
            let title = video.snippet
                .and_then(|s| s.title)
                .ok_or_else(|| YouTubeError::ParseError(format!("video {} has no title", video.id)))?;
            let statistics = video.statistics
                .ok_or_else(|| YouTubeError::ParseError(format!("video {} has no statistics", video.id)))?;

            let like_count = match statistics.like_count.as_deref() {
                Some(likes) => parse_count("likeCount", Some(likes))?,
                None => 0,
            };

            Ok(VideoRecord {
                title,
                view_count: parse_count("viewCount", statistics.view_count.as_deref())?,
                like_count,
                id: video.id,
            })
        })
        .collect()
}

/// Decodes a `videos.list` body requested with `part=contentDetails`.
pub fn parse_video_content_details(body: &[u8]) -> Result<Vec<VideoContentDetails>, YouTubeError> {
    let api_response: ApiResponse = serde_json::from_slice(body)?;

    api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(|video| -> Result<VideoContentDetails, YouTubeError> {
            let duration = video.content_details
                .and_then(|c| c.duration)
                .ok_or_else(|| YouTubeError::ParseError(format!("video {} has no duration", video.id)))?;

            Ok(VideoContentDetails {
                id: video.id,
                duration,
            })
        })
        .collect()
}

impl<'a> ListVideosRequest<'a> {
    pub async fn send(self) -> Result<Vec<VideoRecord>, YouTubeError> {
        let url = format!(
            "https://{}/youtube/v3/videos?part=snippet%2Cstatistics&id={}",
            self.host,
            encode_ids(&self.video_ids)
        );

        let req = self.fields.build_get(url)?;
        let body_bytes = execute(self.client, req, self.timeout).await?;

        parse_videos(&body_bytes)
    }
}

impl<'a> ListVideoContentDetailsRequest<'a> {
    pub async fn send(self) -> Result<Vec<VideoContentDetails>, YouTubeError> {
        let url = format!(
            "https://{}/youtube/v3/videos?part=contentDetails&id={}",
            self.host,
            encode_ids(&self.video_ids)
        );

        let req = self.fields.build_get(url)?;
        let body_bytes = execute(self.client, req, self.timeout).await?;

        parse_video_content_details(&body_bytes)
    }
}
