//! `ytembed` - YouTube video metadata, thumbnails and embed markup
//!
//! Takes any user-pasted YouTube link, finds the 11-character video ID in
//! it, and — given a YouTube Data API key — answers questions about the
//! video: view and like counts, the largest available thumbnail, and
//! ready-to-paste iframe markup.
//!
//! # Example
//!
//! ```rust,no_run
//! use ytembed::Video;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let video = Video::from_env("https://youtu.be/pxk4YF46rsA")?;
//!     if let Some(url) = video.largest_thumbnail_url().await {
//!         println!("{url}");
//!     }
//!     if let Some(markup) = video.embed("player", &[]) {
//!         println!("{markup}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod embed;
pub mod extract;
pub mod thumb;
pub mod video;

pub use api::{ApiError, Snippet, Statistics, VideoInfo, VideoInfoSource, YouTubeApi};
pub use embed::{Attr, DEFAULT_PLAYER_PARAMS, EMBED_BASE};
pub use extract::{video_id, VideoId};
pub use thumb::{Thumbnail, ThumbnailSet};
pub use video::Video;

/// Version of ytembed
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
