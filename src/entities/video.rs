use std::fmt;
use std::ops::Deref;
use chrono::TimeDelta;
use crate::models::VideoRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    video_id: String,
    title: String,
    view_count: u64,
    like_count: u64,
}

impl Video {
    pub fn from_record(record: VideoRecord) -> Self {
        Video {
            video_id: record.id,
            title: record.title,
            view_count: record.view_count,
            like_count: record.like_count,
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    /// Short link, `https://youtu.be/{id}`.
    pub fn url(&self) -> String {
        format!("https://youtu.be/{}", self.video_id)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A [`Video`] seen as a member of a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistVideo {
    video: Video,
    playlist_id: String,
    playlist_title: String,
    duration: TimeDelta,
}

impl PlaylistVideo {
    pub fn new(video: Video, playlist_id: String, playlist_title: String, duration: TimeDelta) -> Self {
        PlaylistVideo {
            video,
            playlist_id,
            playlist_title,
            duration,
        }
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub fn playlist_title(&self) -> &str {
        &self.playlist_title
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }
}

impl Deref for PlaylistVideo {
    type Target = Video;

    fn deref(&self) -> &Video {
        &self.video
    }
}

impl fmt::Display for PlaylistVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.video.title, self.playlist_title)
    }
}
