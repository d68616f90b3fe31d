//! vodgrab: download streamed episodes referenced by a show or episode
//! page, using ffmpeg in stream-copy mode.
mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vodgrab_core::ManifestLocator;
use vodgrab_engine::{
    acquire, ensure_output_dir, episode_title, estimate_duration, harvest_episodes,
    resolve_ffmpeg, resolve_ffprobe, sanitized_media_filename, AcquireError, FetchSettings,
    PageClient,
};
use vodgrab_logging::{grab_debug, grab_error, grab_info, grab_warn};

#[derive(Debug, Parser)]
#[command(name = "vodgrab")]
#[command(about = "Download episodes published as HLS streams")]
struct Cli {
    /// URL of the show or episode page
    url: String,

    /// Output directory for downloaded episodes
    #[arg(short, long, default_value = "episodes")]
    output: PathBuf,

    /// Enable debug-level console output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Explicit path to the ffmpeg binary
    #[arg(long)]
    ffmpeg_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    vodgrab_logging::initialize(cli.verbose);

    let ffmpeg = resolve_ffmpeg(cli.ffmpeg_path.as_deref())?;
    let ffprobe = resolve_ffprobe(&ffmpeg);
    if ffprobe.is_none() {
        grab_warn!("ffprobe not found; durations will come from manifest parsing");
    }
    ensure_output_dir(&cli.output).context("preparing output directory")?;

    let downloader = Downloader {
        client: PageClient::new(FetchSettings::default()).context("building http client")?,
        locator: ManifestLocator::new(),
        ffmpeg,
        ffprobe,
        out_dir: cli.output,
    };

    let html = downloader
        .client
        .get_text(&cli.url)
        .with_context(|| format!("fetching {}", cli.url))?;
    let episodes = harvest_episodes(&html, &cli.url);

    if episodes.is_empty() {
        grab_info!("no episode cards found, treating the URL as a single episode");
        if let Err(err) = downloader.process_episode(&cli.url, None, Some(html)) {
            grab_error!("{err:#}");
        }
    } else {
        let Some(chosen) = prompt::choose_episodes(&episodes) else {
            grab_info!("cancelled");
            return Ok(());
        };
        grab_info!("downloading {} episode(s)", chosen.len());
        for (index, episode) in chosen.iter().enumerate() {
            grab_info!("[{}/{}] {}", index + 1, chosen.len(), episode.title);
            if let Err(err) = downloader.process_episode(&episode.url, Some(&episode.title), None)
            {
                grab_error!("{err:#}");
            }
        }
    }

    grab_info!("done");
    Ok(())
}

struct Downloader {
    client: PageClient,
    locator: ManifestLocator,
    ffmpeg: PathBuf,
    ffprobe: Option<PathBuf>,
    out_dir: PathBuf,
}

impl Downloader {
    /// Fetches one episode page, finds its manifest and downloads it.
    ///
    /// A page without a manifest is skipped with a warning, and a failed
    /// engine run is logged; neither stops the remaining episodes. `html`
    /// may carry an already-fetched body for the page.
    fn process_episode(
        &self,
        url: &str,
        title: Option<&str>,
        html: Option<String>,
    ) -> Result<()> {
        let html = match html {
            Some(html) => html,
            None => self
                .client
                .get_text(url)
                .with_context(|| format!("fetching {url}"))?,
        };

        let Some(manifest_url) = self.locator.locate(&html) else {
            grab_warn!("skipping (no manifest found): {url}");
            return Ok(());
        };
        grab_info!("found manifest: {manifest_url}");

        let title = match title {
            Some(title) => title.to_string(),
            None => episode_title(&html, url),
        };
        let dest = self.out_dir.join(sanitized_media_filename(&title));

        let duration = estimate_duration(self.ffprobe.as_deref(), &self.client, &manifest_url);
        if duration.is_none() {
            grab_debug!("duration unknown, progress will show elapsed time only");
        }

        let mut renderer = render::ConsoleRenderer::new(duration);
        match acquire(&self.ffmpeg, &manifest_url, &dest, &mut renderer) {
            Ok(()) => {
                grab_info!("saved {}", dest.display());
                Ok(())
            }
            Err(AcquireError::EngineFailed { status, stderr }) => {
                renderer.finish_line();
                grab_error!("ffmpeg failed for {title} ({status}): {stderr}");
                Ok(())
            }
            Err(err) => {
                renderer.finish_line();
                Err(err).with_context(|| format!("downloading {title}"))
            }
        }
    }
}
