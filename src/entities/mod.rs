//! Read-only entities assembled from fetched metadata.
//!
//! Constructors here are pure; the lookups that feed them live in [`crate::loader`].

mod channel;
mod playlist;
mod video;

pub use channel::{sum_subscribers, Channel};
pub use playlist::Playlist;
pub use video::{PlaylistVideo, Video};
