//! Video facade: one URL, one lazily fetched metadata record.

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::api::{ApiError, Statistics, VideoInfo, VideoInfoSource, YouTubeApi};
use crate::embed::{self, Attr, DEFAULT_PLAYER_PARAMS};
use crate::extract::{self, VideoId};
use crate::thumb::{self, Thumbnail, ThumbnailSet};

/// A single video addressed by URL.
///
/// Metadata is fetched through a [`VideoInfoSource`] at most once per
/// instance. The cache is written on success only, so a miss or a failed
/// fetch leaves a later call free to try again.
pub struct Video {
    url: String,
    source: Box<dyn VideoInfoSource>,
    info: OnceCell<VideoInfo>,
}

/// Why a fetch produced nothing cacheable.
enum FetchMiss {
    NotFound,
    Failed(anyhow::Error),
}

impl Video {
    /// Build a facade over an explicit metadata source.
    pub fn new(source: impl VideoInfoSource + 'static, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: Box::new(source),
            info: OnceCell::new(),
        }
    }

    /// Build a facade backed by the real API, keyed from `YOUTUBE_API_KEY`.
    /// A missing or empty key is refused here, not on first use.
    pub fn from_env(url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self::new(YouTubeApi::from_env()?, url))
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Video ID extracted from the held URL.
    #[must_use]
    pub fn id(&self) -> Option<VideoId> {
        extract::video_id(&self.url)
    }

    /// Metadata for this video, fetched on first use.
    ///
    /// `None` when the URL has no extractable ID, the video does not
    /// exist, or the fetch fails. Remote failures are logged and swallowed
    /// here so the derived queries stay infallible. Concurrent callers
    /// share a single in-flight fetch.
    pub async fn data(&self) -> Option<&VideoInfo> {
        if let Some(info) = self.info.get() {
            return Some(info);
        }
        let id = self.id()?;

        let fetched = self
            .info
            .get_or_try_init(|| async {
                match self.source.fetch_video_info(&id).await {
                    Ok(Some(info)) => Ok(info),
                    Ok(None) => Err(FetchMiss::NotFound),
                    Err(e) => Err(FetchMiss::Failed(e)),
                }
            })
            .await;

        match fetched {
            Ok(info) => Some(info),
            Err(FetchMiss::NotFound) => {
                debug!(id = %id, "no video found");
                None
            }
            Err(FetchMiss::Failed(e)) => {
                warn!(id = %id, "video info fetch failed: {e:#}");
                None
            }
        }
    }

    async fn statistics(&self) -> Option<&Statistics> {
        self.data().await?.statistics.as_ref()
    }

    pub async fn views(&self) -> Option<u64> {
        self.statistics().await?.views()
    }

    pub async fn likes(&self) -> Option<u64> {
        self.statistics().await?.likes()
    }

    pub async fn dislikes(&self) -> Option<u64> {
        self.statistics().await?.dislikes()
    }

    pub async fn favorites(&self) -> Option<u64> {
        self.statistics().await?.favorites()
    }

    /// Thumbnail variants listed for this video.
    pub async fn thumbnails(&self) -> Option<&ThumbnailSet> {
        self.data().await?.snippet.as_ref()?.thumbnails.as_ref()
    }

    /// The thumbnail with the greatest pixel area.
    pub async fn largest_thumbnail(&self) -> Option<&Thumbnail> {
        thumb::largest(self.thumbnails().await?)
    }

    /// URL of the thumbnail with the greatest pixel area.
    pub async fn largest_thumbnail_url(&self) -> Option<&str> {
        thumb::largest_url(self.thumbnails().await?)
    }

    /// Embed URL with the default player parameters. Needs no fetch.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.embed_url_with(DEFAULT_PLAYER_PARAMS)
    }

    /// Embed URL with caller-supplied player parameters, appended verbatim.
    #[must_use]
    pub fn embed_url_with(&self, params: &str) -> Option<String> {
        Some(embed::embed_url(&self.id()?, params))
    }

    /// Iframe markup with the default player parameters.
    #[must_use]
    pub fn embed(&self, css_classes: &str, extra: &[Attr]) -> Option<String> {
        self.embed_with(css_classes, extra, DEFAULT_PLAYER_PARAMS)
    }

    /// Iframe markup: `class` from `css_classes`, default attributes
    /// overlaid with `extra` (caller wins on collision), player parameters
    /// appended verbatim.
    #[must_use]
    pub fn embed_with(&self, css_classes: &str, extra: &[Attr], params: &str) -> Option<String> {
        Some(embed::iframe(&self.id()?, css_classes, extra, params))
    }
}
