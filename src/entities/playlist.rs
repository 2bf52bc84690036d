use std::fmt;
use chrono::TimeDelta;
use crate::entities::PlaylistVideo;
use crate::YouTubeError;

/// A fully fetched playlist. Members keep the order the API returned them in.
#[derive(Debug, Clone)]
pub struct Playlist {
    playlist_id: String,
    title: String,
    url: String,
    videos: Vec<PlaylistVideo>,
}

impl Playlist {
    pub fn new(playlist_id: String, title: String, videos: Vec<PlaylistVideo>) -> Self {
        Playlist {
            url: format!("https://www.youtube.com/playlist?list={}", playlist_id),
            playlist_id,
            title,
            videos,
        }
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn videos(&self) -> &[PlaylistVideo] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Sum of every member's duration; zero for an empty playlist.
    ///
    /// Saturates at `TimeDelta::MAX` for members built from out-of-range durations.
    pub fn total_duration(&self) -> TimeDelta {
        self.videos
            .iter()
            .fold(TimeDelta::zero(), |total, video| {
                total.checked_add(&video.duration()).unwrap_or(TimeDelta::MAX)
            })
    }

    /// Short link of the member with the most likes.
    ///
    /// Ties go to the member that appears first.
    pub fn most_popular_video(&self) -> Result<String, YouTubeError> {
        self.videos
            .iter()
            .reduce(|best, video| if video.like_count() > best.like_count() { video } else { best })
            .map(|video| video.url())
            .ok_or(YouTubeError::EmptyCollection)
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
