use crate::{encode_ids, execute, parse_count, GoogleAPIRequestFields, HttpClient, YouTubeError};
use serde::Deserialize;
use std::time::Duration;
use crate::models::ChannelRecord;

pub struct ListChannelsRequest<'a> {
    pub client: &'a HttpClient,
    pub host: &'a str,
    pub timeout: Duration,
    pub fields: GoogleAPIRequestFields<'a>,
    pub channel_ids: Vec<String>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListChannelsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiChannel>>
}

#[derive(Debug, Deserialize)]
struct ApiChannel {
    id: String,
    snippet: Option<ChannelSnippet>,
    statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "subscriberCount")]
    subscriber_count: Option<String>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    hidden_subscriber_count: bool,
    #[serde(rename = "videoCount")]
    video_count: Option<String>
}

/// Decodes a `channels.list` body requested with `part=snippet,statistics`.
pub fn parse_channels(body: &[u8]) -> Result<Vec<ChannelRecord>, YouTubeError> {
    let api_response: ApiResponse = serde_json::from_slice(body)?;

    api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(|channel| -> Result<ChannelRecord, YouTubeError> {
            let snippet = channel.snippet
                .ok_or_else(|| YouTubeError::ParseError(format!("channel {} has no snippet", channel.id)))?;
            let statistics = channel.statistics
                .ok_or_else(|| YouTubeError::ParseError(format!("channel {} has no statistics", channel.id)))?;

            let subscriber_count = if statistics.hidden_subscriber_count && statistics.subscriber_count.is_none() {
                0
            } else {
                parse_count("subscriberCount", statistics.subscriber_count.as_deref())?
            };

            Ok(ChannelRecord {
                title: snippet.title
                    .ok_or_else(|| YouTubeError::ParseError(format!("channel {} has no title", channel.id)))?,
                description: snippet.description.unwrap_or_default(),
                subscriber_count,
                video_count: parse_count("videoCount", statistics.video_count.as_deref())?,
                view_count: parse_count("viewCount", statistics.view_count.as_deref())?,
                id: channel.id,
            })
        })
        .collect()
}

impl<'a> ListChannelsRequest<'a> {

    pub async fn send(self) -> Result<Vec<ChannelRecord>, YouTubeError> {

        let url = format!(
            "https://{}/youtube/v3/channels?part=snippet%2Cstatistics&id={}",
            self.host,
            encode_ids(&self.channel_ids)
        );

        let req = self.fields.build_get(url)?;
        let body_bytes = execute(self.client, req, self.timeout).await?;

        parse_channels(&body_bytes)
    }

}
