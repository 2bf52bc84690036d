use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_metadata::{format_duration, load_channel, load_playlist, load_playlist_video, load_video, Config};

/// Fetch channel, video and playlist metadata from the YouTube Data API.
///
/// The API key is read from `YT_API_KEY`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a channel's snippet and statistics as JSON.
    Channel {
        channel_id: String,
        /// Also write the JSON document to this file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print a video's title and counters.
    Video { video_id: String },
    /// Print a video as a member of a playlist.
    PlaylistVideo { video_id: String, playlist_id: String },
    /// Print a playlist summary.
    Playlist { playlist_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let source = config.build_source()?;

    match args.command {
        Command::Channel { channel_id, export } => {
            let channel = load_channel(&source, &channel_id).await?;
            println!("{}", channel.to_pretty_json()?);
            if let Some(path) = export {
                channel.to_json_file(&path)?;
                tracing::info!(path = %path.display(), "exported channel");
            }
        }
        Command::Video { video_id } => {
            let video = load_video(&source, &video_id).await?;
            println!("{}", video);
            println!("  url:   {}", video.url());
            println!("  views: {}", video.view_count());
            println!("  likes: {}", video.like_count());
        }
        Command::PlaylistVideo { video_id, playlist_id } => {
            let video = load_playlist_video(&source, &video_id, &playlist_id).await?;
            println!("{}", video);
            println!("  duration: {}", format_duration(video.duration()));
            println!("  views:    {}", video.view_count());
            println!("  likes:    {}", video.like_count());
        }
        Command::Playlist { playlist_id } => {
            let playlist = load_playlist(&source, &playlist_id).await?;
            println!("{}", playlist);
            println!("  url:            {}", playlist.url());
            println!("  videos:         {}", playlist.len());
            println!("  total duration: {}", format_duration(playlist.total_duration()));
            match playlist.most_popular_video() {
                Ok(url) => println!("  most popular:   {}", url),
                Err(e) => println!("  most popular:   n/a ({})", e),
            }
        }
    }

    Ok(())
}
