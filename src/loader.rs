//! Factories that perform the lookups each entity needs and assemble it.
//!
//! A load either returns a complete entity or an error; nothing partially
//! populated escapes.

use crate::entities::{Channel, Playlist, PlaylistVideo, Video};
use crate::source::MetadataSource;
use crate::{parse_iso8601_duration, YouTubeError};

pub async fn load_channel<S: MetadataSource>(source: &S, channel_id: &str) -> Result<Channel, YouTubeError> {
    let record = source.lookup_channel(channel_id).await?;
    Ok(Channel::from_record(record))
}

pub async fn load_video<S: MetadataSource>(source: &S, video_id: &str) -> Result<Video, YouTubeError> {
    let record = source.lookup_video(video_id).await?;
    Ok(Video::from_record(record))
}

/// Loads a video together with the title of `playlist_id` and its own duration.
pub async fn load_playlist_video<S: MetadataSource>(
    source: &S,
    video_id: &str,
    playlist_id: &str,
) -> Result<PlaylistVideo, YouTubeError> {
    let video = load_video(source, video_id).await?;
    let playlist = source.lookup_playlist_snippet(playlist_id).await?;
    let duration = source.lookup_video_duration(video_id).await?;
    let duration = parse_iso8601_duration(&duration)?;

    Ok(PlaylistVideo::new(video, playlist_id.to_string(), playlist.title, duration))
}

/// Collects the video ids of every page, following continuation tokens until
/// the source stops returning one.
async fn collect_video_ids<S: MetadataSource>(source: &S, playlist_id: &str) -> Result<Vec<String>, YouTubeError> {
    let mut video_ids = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = source.list_playlist_items(playlist_id, page_token.as_deref()).await?;
        pages += 1;
        tracing::debug!(playlist_id, pages, items = page.video_ids.len(), "fetched playlist page");
        video_ids.extend(page.video_ids);

        match page.next_page_token {
            Some(next) => page_token = Some(next),
            None => break,
        }
    }

    Ok(video_ids)
}

/// Loads a playlist's snippet, every page of its members, and then each member
/// in page order.
pub async fn load_playlist<S: MetadataSource>(source: &S, playlist_id: &str) -> Result<Playlist, YouTubeError> {
    let record = source.lookup_playlist_snippet(playlist_id).await?;
    let video_ids = collect_video_ids(source, playlist_id).await?;
    tracing::info!(playlist_id, members = video_ids.len(), "loading playlist members");

    let mut videos = Vec::with_capacity(video_ids.len());
    for video_id in &video_ids {
        videos.push(load_playlist_video(source, video_id, playlist_id).await?);
    }

    Ok(Playlist::new(playlist_id.to_string(), record.title, videos))
}
