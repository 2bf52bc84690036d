use std::error::Error;
use std::time::Duration;
use hyper::body::Bytes;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use http_body_util::{BodyExt, Empty};
use hyper::{Method, Request, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use native_tls::TlsConnector;
use hyper_util::rt::TokioExecutor;


pub mod models;
pub mod config;
pub use config::{Config, ConfigError};
pub mod duration;
pub use duration::{format_duration, parse_iso8601_duration};
pub mod videos;
pub use videos::{ListVideoContentDetailsRequest, ListVideosRequest};
pub mod channels;
pub use channels::ListChannelsRequest;
pub mod playlists;
pub use playlists::ListPlaylistsRequest;
pub mod playlist_items;
pub use playlist_items::ListPlaylistItemsRequest;
pub mod source;
pub use source::{MetadataSource, YouTubeDataV3Source, PLAYLIST_PAGE_SIZE};
pub mod entities;
pub use entities::{sum_subscribers, Channel, Playlist, PlaylistVideo, Video};
pub mod loader;
pub use loader::{load_channel, load_playlist, load_playlist_video, load_video};

pub const DEFAULT_HOST: &str = "youtube.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub type HttpClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(#[from] std::io::Error),
    #[error("TLS error: {0}")]
    TlsError(#[from] native_tls::Error),
}

pub fn initialize_client() -> Result<HttpClient, ClientError> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);

    let tls = TlsConnector::builder().build()?;

    // Create an HTTPS connector using the HTTP connector and the custom TLS connector
    let https = HttpsConnector::from((http, tls.into()));

    let client = Client::builder(TokioExecutor::new())
        .build::<_, Empty<Bytes>>(https);

    Ok(client)
}

pub struct GoogleAPIRequestFields<'a> {
    pub bearer_token: Option<&'a str>,
    pub key: Option<&'a str>,
    pub referrer: Option<&'a str>,
}

impl<'a> GoogleAPIRequestFields<'a> {
    pub fn empty() -> Self {
        GoogleAPIRequestFields {
            bearer_token: None,
            key: None,
            referrer: None,
        }
    }

    /// Builds a GET request for `url` carrying whichever credentials are set.
    pub(crate) fn build_get(&self, url: String) -> Result<Request<Empty<Bytes>>, YouTubeError> {
        let mut request_builder = Request::builder()
            .method(Method::GET)
            .uri(url);

        if let Some(key) = self.key {
            request_builder = request_builder.header("X-Goog-Api-Key", key);
        }

        if let Some(bearer_token) = self.bearer_token {
            request_builder = request_builder.header("Authorization", format!("Bearer {}", bearer_token));
        }

        if let Some(referrer) = self.referrer {
            if !referrer.is_empty() {
                request_builder = request_builder.header("Referer", referrer);
            }
        }

        request_builder
            .body(Empty::new())
            .map_err(|e| YouTubeError::Other(Box::new(e)))
    }
}

pub trait GoogleAPIRequest<'a> {
    fn bearer_token(&mut self) -> &mut Option<&'a str>;

    fn key(&mut self) -> &mut Option<&'a str>;

    fn referrer(&mut self) -> &mut Option<&'a str>;

    fn with_bearer_token(mut self, bearer_token: &'a str) -> Self
    where
        Self: Sized,
    {
        *self.bearer_token() = Some(bearer_token);
        self
    }

    fn with_key(mut self, key: &'a str) -> Self
    where
        Self: Sized,
    {
        *self.key() = Some(key);
        self
    }

    fn with_referrer(mut self, referrer: &'a str) -> Self
    where
        Self: Sized,
    {
        *self.referrer() = Some(referrer);
        self
    }
}

impl<'a, T> GoogleAPIRequest<'a> for T
where
    T: AsMut<GoogleAPIRequestFields<'a>>,
{
    fn bearer_token(&mut self) -> &mut Option<&'a str> {
        &mut self.as_mut().bearer_token
    }

    fn key(&mut self) -> &mut Option<&'a str> {
        &mut self.as_mut().key
    }

    fn referrer(&mut self) -> &mut Option<&'a str> {
        &mut self.as_mut().referrer
    }
}

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Not found")]
    NotFound,
    #[error("Empty collection")]
    EmptyCollection,
    #[error("Request timed out")]
    Timeout,
    #[error("Ratelimited")]
    Ratelimited,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown Status Code")]
    UnknownStatusCode(StatusCode),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] hyper::Error),
    #[error("Legacy HTTP error: {0}")]
    LegacyHttpError(#[from] hyper_util::client::legacy::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl YouTubeError {
    /// Whether the same call may succeed if issued again later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            YouTubeError::Timeout
                | YouTubeError::Ratelimited
                | YouTubeError::InternalServerError
                | YouTubeError::HttpError(_)
                | YouTubeError::LegacyHttpError(_)
        )
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

const QUOTA_EXCEEDED_PREFIX: &str = "The request cannot be completed because you have exceeded your";

/// Maps a non-OK status and its body onto the error taxonomy.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> YouTubeError {
    match status {
        StatusCode::NOT_FOUND => YouTubeError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => YouTubeError::Ratelimited,
        StatusCode::UNAUTHORIZED => {
            tracing::warn!(body = %String::from_utf8_lossy(body), "unauthorized response");
            YouTubeError::Unauthorized
        }
        StatusCode::FORBIDDEN => match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(error_response) if error_response.error.message.starts_with(QUOTA_EXCEEDED_PREFIX) => {
                YouTubeError::Ratelimited
            }
            Ok(error_response) => {
                tracing::warn!(message = %error_response.error.message, "unknown forbidden error message");
                YouTubeError::Forbidden
            }
            Err(e) => {
                tracing::warn!(error = %e, body = %String::from_utf8_lossy(body), "failed to parse error response");
                YouTubeError::Forbidden
            }
        },
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
            YouTubeError::InternalServerError
        }
        status => {
            tracing::warn!(status = status.as_u16(), body = %String::from_utf8_lossy(body), "unknown status code");
            YouTubeError::UnknownStatusCode(status)
        }
    }
}

/// Sends `req` and collects the body, all under `timeout`.
pub(crate) async fn execute(
    client: &HttpClient,
    req: Request<Empty<Bytes>>,
    timeout: Duration,
) -> Result<Bytes, YouTubeError> {
    let exchange = async {
        let resp = client.request(req).await?;
        let status = resp.status();
        let body_bytes = resp.into_body().collect().await?.to_bytes();

        if status != StatusCode::OK {
            return Err(status_error(status, &body_bytes));
        }

        Ok::<Bytes, YouTubeError>(body_bytes)
    };

    match tokio::time::timeout(timeout, exchange).await {
        Ok(result) => result,
        Err(_) => Err(YouTubeError::Timeout),
    }
}

/// Joins identifiers into the comma separated, percent-encoded `id` parameter.
pub(crate) fn encode_ids(ids: &[String]) -> String {
    ids.iter()
        .map(|id| urlencoding::encode(id).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Statistics counters arrive as decimal strings.
pub(crate) fn parse_count(name: &str, value: Option<&str>) -> Result<u64, YouTubeError> {
    let value = value.ok_or_else(|| YouTubeError::ParseError(format!("missing {}", name)))?;
    value
        .parse::<u64>()
        .map_err(|e| YouTubeError::ParseError(format!("invalid {} {:?}: {}", name, value, e)))
}

pub struct YouTubeDataV3Client {
    client: HttpClient,
    host: String,
    timeout: Duration,
}

impl YouTubeDataV3Client {
    pub fn new(host: String, client: HttpClient) -> Self {
        YouTubeDataV3Client {
            client,
            host,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn list_channels<'a>(&'a self, channel_ids: Vec<String>) -> ListChannelsRequest<'a> {
        ListChannelsRequest {
            client: &self.client,
            host: &self.host,
            timeout: self.timeout,
            fields: GoogleAPIRequestFields::empty(),
            channel_ids,
        }
    }

    pub fn list_videos<'a>(&'a self, video_ids: Vec<String>) -> ListVideosRequest<'a> {
        ListVideosRequest {
            client: &self.client,
            host: &self.host,
            timeout: self.timeout,
            fields: GoogleAPIRequestFields::empty(),
            video_ids,
        }
    }

    pub fn list_video_content_details<'a>(&'a self, video_ids: Vec<String>) -> ListVideoContentDetailsRequest<'a> {
        ListVideoContentDetailsRequest {
            client: &self.client,
            host: &self.host,
            timeout: self.timeout,
            fields: GoogleAPIRequestFields::empty(),
            video_ids,
        }
    }

    pub fn list_playlists<'a>(&'a self, playlist_ids: Vec<String>) -> ListPlaylistsRequest<'a> {
        ListPlaylistsRequest {
            client: &self.client,
            host: &self.host,
            timeout: self.timeout,
            fields: GoogleAPIRequestFields::empty(),
            playlist_ids,
        }
    }

    pub fn list_playlist_items<'a>(&'a self, playlist_id: String, page_token: Option<String>, max_results: Option<u32>) -> ListPlaylistItemsRequest<'a> {
        ListPlaylistItemsRequest {
            client: &self.client,
            host: &self.host,
            timeout: self.timeout,
            fields: GoogleAPIRequestFields::empty(),
            playlist_id,
            page_token,
            max_results,
        }
    }
}
