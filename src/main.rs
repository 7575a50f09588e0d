//! `ytembed` CLI - inspect YouTube links from the terminal

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ytembed::{extract, Attr, Video, DEFAULT_PLAYER_PARAMS};

#[derive(Parser)]
#[command(name = "ytembed")]
#[command(about = "YouTube video metadata, thumbnails and embed markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the 11-character video ID from a URL
    Id {
        /// URL or free-form text containing a YouTube link
        url: String,
    },

    /// Fetch and display video metadata (needs YOUTUBE_API_KEY)
    Info {
        /// Video URL
        url: String,

        /// Print the raw API record as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the URL of the largest thumbnail (needs YOUTUBE_API_KEY)
    Thumbnail {
        /// Video URL
        url: String,
    },

    /// Print iframe embed markup
    Embed {
        /// Video URL
        url: String,

        /// CSS classes for the iframe element
        #[arg(short, long, default_value = "")]
        class: String,

        /// Extra attributes, `name=value` pairs or bare tokens
        #[arg(short, long = "attr")]
        attrs: Vec<String>,

        /// Player parameters appended to the embed URL
        #[arg(short, long, default_value = DEFAULT_PLAYER_PARAMS)]
        params: String,
    },

    /// Print the embed URL
    EmbedUrl {
        /// Video URL
        url: String,

        /// Player parameters appended to the embed URL
        #[arg(short, long, default_value = DEFAULT_PLAYER_PARAMS)]
        params: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Id { url } => cmd_id(&url),
        Commands::Info { url, json } => cmd_info(&url, json).await,
        Commands::Thumbnail { url } => cmd_thumbnail(&url).await,
        Commands::Embed {
            url,
            class,
            attrs,
            params,
        } => cmd_embed(&url, &class, &attrs, &params),
        Commands::EmbedUrl { url, params } => cmd_embed_url(&url, &params),
    }
}

fn cmd_id(url: &str) -> Result<()> {
    let id = extract::video_id(url).ok_or_else(|| anyhow!("no video ID found in: {url}"))?;
    println!("{id}");
    Ok(())
}

async fn cmd_info(url: &str, json: bool) -> Result<()> {
    let video = Video::from_env(url)?;
    let info = video
        .data()
        .await
        .ok_or_else(|| anyhow!("no video info for: {url}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
        return Ok(());
    }

    if let Some(snippet) = &info.snippet {
        if let Some(title) = &snippet.title {
            println!("Title:     {title}");
        }
        if let Some(channel) = &snippet.channel_title {
            println!("Channel:   {channel}");
        }
        if let Some(published) = &snippet.published_at {
            println!("Published: {published}");
        }
    }
    if let Some(views) = video.views().await {
        println!("Views:     {views}");
    }
    if let Some(likes) = video.likes().await {
        println!("Likes:     {likes}");
    }
    if let Some(thumbnail) = video.largest_thumbnail_url().await {
        println!("Thumbnail: {thumbnail}");
    }

    Ok(())
}

async fn cmd_thumbnail(url: &str) -> Result<()> {
    let video = Video::from_env(url)?;
    let thumbnail = video
        .largest_thumbnail_url()
        .await
        .ok_or_else(|| anyhow!("no thumbnails for: {url}"))?;
    println!("{thumbnail}");
    Ok(())
}

fn cmd_embed(url: &str, class: &str, attrs: &[String], params: &str) -> Result<()> {
    let extra = attrs.iter().map(|raw| parse_attr(raw)).collect::<Vec<_>>();
    let id = extract::video_id(url).ok_or_else(|| anyhow!("no video ID found in: {url}"))?;
    println!("{}", ytembed::embed::iframe(&id, class, &extra, params));
    Ok(())
}

fn cmd_embed_url(url: &str, params: &str) -> Result<()> {
    let id = extract::video_id(url).ok_or_else(|| anyhow!("no video ID found in: {url}"))?;
    println!("{}", ytembed::embed::embed_url(&id, params));
    Ok(())
}

/// `name=value` becomes a pair, anything else a bare token.
fn parse_attr(raw: &str) -> Attr {
    match raw.split_once('=') {
        Some((name, value)) => Attr::pair(name, value),
        None => Attr::bare(raw),
    }
}
