use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use url::Url;
use vodgrab_logging::grab_debug;

use crate::fetch::PageClient;
use crate::playlist::{first_variant_line, is_master_playlist, sum_segment_durations};

/// Per-request timeout for manifest and variant downloads.
const MANIFEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Deadline for one ffprobe invocation.
const PROBE_TIMEOUT: Duration = Duration::from_secs(60);

/// Best-effort total duration of the stream behind `manifest_url`.
///
/// Prefers an ffprobe format query; falls back to fetching the manifest
/// and summing its segment durations. Returns `None` when neither tier
/// produces a strictly positive value. An unknown duration is a normal
/// outcome, never an error.
pub fn estimate_duration(
    probe: Option<&Path>,
    client: &PageClient,
    manifest_url: &str,
) -> Option<f64> {
    if let Some(probe) = probe {
        if let Some(duration) = probe_duration(probe, manifest_url) {
            grab_debug!("duration (ffprobe): {duration:.2}s");
            return Some(duration);
        }
    }

    let duration = manifest_duration(client, manifest_url)?;
    grab_debug!("duration (manifest): {duration:.2}s");
    Some(duration)
}

fn probe_duration(probe: &Path, manifest_url: &str) -> Option<f64> {
    let mut child = match Command::new(probe)
        .args(["-v", "error"])
        .args(["-show_entries", "format=duration"])
        .args(["-of", "default=noprint_wrappers=1:nokey=1"])
        .arg(manifest_url)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            grab_debug!("ffprobe spawn failed: {err}");
            return None;
        }
    };

    let Some(status) = wait_with_deadline(&mut child, PROBE_TIMEOUT) else {
        grab_debug!("ffprobe timed out after {}s", PROBE_TIMEOUT.as_secs());
        return None;
    };
    if !status.success() {
        grab_debug!("ffprobe exited with {status}");
        return None;
    }

    let mut raw = String::new();
    child.stdout.take()?.read_to_string(&mut raw).ok()?;
    let duration: f64 = raw.trim().parse().ok()?;
    (duration > 0.0).then_some(duration)
}

/// Polls the child until it exits or the deadline passes; a child that
/// overruns is killed and reaped, and `None` is returned.
fn wait_with_deadline(child: &mut Child, deadline: Duration) -> Option<ExitStatus> {
    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {
                if started.elapsed() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                thread::sleep(Duration::from_millis(50));
            }
            Err(_) => return None,
        }
    }
}

fn manifest_duration(client: &PageClient, manifest_url: &str) -> Option<f64> {
    let mut text = match client.get_text_with_timeout(manifest_url, Some(MANIFEST_TIMEOUT)) {
        Ok(text) => text,
        Err(err) => {
            grab_debug!("manifest fetch failed: {err}");
            return None;
        }
    };

    // A master playlist is followed to its first variant, one hop at most.
    if is_master_playlist(&text) {
        let variant = first_variant_line(&text)?;
        let resolved = match Url::parse(manifest_url).and_then(|base| base.join(variant)) {
            Ok(url) => url.to_string(),
            Err(err) => {
                grab_debug!("variant url invalid: {err}");
                return None;
            }
        };
        text = match client.get_text_with_timeout(&resolved, Some(MANIFEST_TIMEOUT)) {
            Ok(text) => text,
            Err(err) => {
                grab_debug!("variant fetch failed: {err}");
                return None;
            }
        };
    }

    let total = sum_segment_durations(&text);
    (total > 0.0).then_some(total)
}
