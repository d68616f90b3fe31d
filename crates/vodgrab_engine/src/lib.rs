//! Vodgrab engine: page fetching, episode harvesting, duration probing
//! and supervision of the external copy engine.
mod acquire;
mod duration;
mod fetch;
mod filename;
mod harvest;
mod locate;
mod output;
mod playlist;

pub use acquire::{acquire, AcquireError, ProgressEvent, ProgressSink};
pub use duration::estimate_duration;
pub use fetch::{FetchError, FetchSettings, PageClient};
pub use filename::sanitized_media_filename;
pub use harvest::{episode_title, harvest_episodes, Episode};
pub use locate::{resolve_ffmpeg, resolve_ffprobe, SetupError};
pub use output::{ensure_output_dir, OutputDirError};
pub use playlist::{first_variant_line, is_master_playlist, sum_segment_durations};
