use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::models::ChannelRecord;
use crate::YouTubeError;

/// A channel's snippet and statistics.
///
/// Channels are compared by subscriber count only, through the named comparison
/// methods; two channels with equal subscriber counts are "the same" for ordering
/// even when every other field differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    channel_id: String,
    title: String,
    description: String,
    url: String,
    subscriber_count: u64,
    video_count: u64,
    view_count: u64,
}

impl Channel {
    pub fn from_record(record: ChannelRecord) -> Self {
        Channel {
            url: format!("https://www.youtube.com/channel/{}", record.id),
            channel_id: record.id,
            title: record.title,
            description: record.description,
            subscriber_count: record.subscriber_count,
            video_count: record.video_count,
            view_count: record.view_count,
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn subscriber_count(&self) -> u64 {
        self.subscriber_count
    }

    pub fn video_count(&self) -> u64 {
        self.video_count
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    pub fn compare_by_subscribers(&self, other: &Channel) -> Ordering {
        self.subscriber_count.cmp(&other.subscriber_count)
    }

    pub fn is_less_than(&self, other: &Channel) -> bool {
        self.compare_by_subscribers(other) == Ordering::Less
    }

    pub fn is_greater_than(&self, other: &Channel) -> bool {
        self.compare_by_subscribers(other) == Ordering::Greater
    }

    pub fn is_less_or_equal(&self, other: &Channel) -> bool {
        self.compare_by_subscribers(other) != Ordering::Greater
    }

    pub fn same_subscribers(&self, other: &Channel) -> bool {
        self.compare_by_subscribers(other) == Ordering::Equal
    }

    /// Writes the channel as a JSON object with keys `channel_id`, `title`,
    /// `description`, `url`, `subscriber_count`, `video_count` and `view_count`.
    pub fn export_json<W: Write>(&self, writer: W) -> Result<(), YouTubeError> {
        serde_json::to_writer(writer, self).map_err(|e| {
            if e.is_io() {
                YouTubeError::Io(e.into())
            } else {
                YouTubeError::JsonError(e)
            }
        })
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), YouTubeError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.export_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Pretty-printed form of the exported document.
    pub fn to_pretty_json(&self) -> Result<String, YouTubeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reloads a document written by [`Channel::export_json`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, YouTubeError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YouTube channel: {}", self.title)
    }
}

/// Combined subscriber count of two channels.
pub fn sum_subscribers(a: &Channel, b: &Channel) -> u64 {
    a.subscriber_count.saturating_add(b.subscriber_count)
}
