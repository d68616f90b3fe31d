use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Instant;

use thiserror::Error;
use vodgrab_logging::grab_info;

/// Progress notifications produced while the copy engine runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// The engine has written `elapsed_seconds` of stream time so far.
    Sample {
        elapsed_seconds: f64,
        wall_clock_seconds: f64,
    },
    /// The engine exited successfully.
    Done { wall_clock_seconds: f64 },
}

/// Consumer of [`ProgressEvent`]s. Throttling and layout are the sink's
/// policy; the supervisor emits every sample it reads.
pub trait ProgressSink {
    fn emit(&mut self, event: ProgressEvent);
}

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("failed to launch {engine}: {source}")]
    Spawn {
        engine: String,
        source: std::io::Error,
    },
    #[error("engine exited with {status}: {stderr}")]
    EngineFailed { status: ExitStatus, stderr: String },
    #[error("io error while supervising engine: {0}")]
    Io(#[from] std::io::Error),
}

/// Kills and reaps the child if supervision unwinds before the process
/// has been waited on; an already-reaped child makes both calls no-ops.
struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// Runs the copy engine for `manifest_url`, streaming progress to `sink`.
///
/// The engine overwrites `dest`, copies streams without re-encoding and
/// applies the ADTS-to-ASC audio bitstream filter for MP4 container
/// compatibility. Its stdout carries `key=value` progress lines of which
/// only `out_time_us` is consumed; malformed payloads are skipped. A
/// nonzero exit surfaces the captured stderr as
/// [`AcquireError::EngineFailed`]. No child process survives this call.
pub fn acquire(
    engine: &Path,
    manifest_url: &str,
    dest: &Path,
    sink: &mut dyn ProgressSink,
) -> Result<(), AcquireError> {
    grab_info!("downloading to {}", dest.display());

    let child = Command::new(engine)
        .arg("-y")
        .args(["-loglevel", "error"])
        .args(["-progress", "pipe:1"])
        .args(["-i", manifest_url])
        .args(["-c", "copy"])
        .args(["-bsf:a", "aac_adtstoasc"])
        .arg(dest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| AcquireError::Spawn {
            engine: engine.display().to_string(),
            source,
        })?;

    let mut guard = ChildGuard(child);
    let start = Instant::now();

    if let Some(stdout) = guard.0.stdout.take() {
        for line in BufReader::new(stdout).lines() {
            let line = line?;
            let Some(raw) = line.strip_prefix("out_time_us=") else {
                continue;
            };
            let Ok(micros) = raw.trim().parse::<i64>() else {
                continue;
            };
            sink.emit(ProgressEvent::Sample {
                elapsed_seconds: micros as f64 / 1_000_000.0,
                wall_clock_seconds: start.elapsed().as_secs_f64(),
            });
        }
    }

    let status = guard.0.wait()?;
    if !status.success() {
        let mut stderr = String::new();
        if let Some(mut pipe) = guard.0.stderr.take() {
            let _ = pipe.read_to_string(&mut stderr);
        }
        return Err(AcquireError::EngineFailed {
            status,
            stderr: stderr.trim().to_string(),
        });
    }

    sink.emit(ProgressEvent::Done {
        wall_clock_seconds: start.elapsed().as_secs_f64(),
    });
    Ok(())
}
