//! Console rendering of supervisor progress events.

use std::io::{self, Write};

use vodgrab_core::{format_clock, percent_complete, render_bar};
use vodgrab_engine::{ProgressEvent, ProgressSink};

/// Minimum wall-clock gap between bar renders when the duration is known.
const BAR_INTERVAL_SECONDS: f64 = 0.25;
/// Minimum gap between elapsed-only renders when the duration is unknown.
const PLAIN_INTERVAL_SECONDS: f64 = 1.0;

/// Throttled single-line progress display.
///
/// With a known duration it draws the percent bar with elapsed/total/ETA;
/// without one it falls back to an elapsed-only status at a slower
/// cadence, so the console is not flooded either way.
pub struct ConsoleRenderer {
    duration: Option<f64>,
    last_render: Option<f64>,
    line_open: bool,
}

impl ConsoleRenderer {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            duration,
            last_render: None,
            line_open: false,
        }
    }

    /// Terminates an in-progress line so following output starts fresh.
    /// Used when a download fails mid-bar.
    pub fn finish_line(&mut self) {
        if self.line_open {
            println!();
            self.line_open = false;
        }
    }

    fn due(&self, wall_clock: f64, interval: f64) -> bool {
        self.last_render
            .is_none_or(|last| wall_clock - last >= interval)
    }

    fn draw(&mut self, line: &str, wall_clock: f64) {
        print!("\r{line}");
        let _ = io::stdout().flush();
        self.last_render = Some(wall_clock);
        self.line_open = true;
    }
}

impl ProgressSink for ConsoleRenderer {
    fn emit(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Sample {
                elapsed_seconds,
                wall_clock_seconds,
            } => match self.duration {
                Some(total) if total > 0.0 => {
                    let percent = percent_complete(elapsed_seconds, total);
                    if self.due(wall_clock_seconds, BAR_INTERVAL_SECONDS) || percent >= 100.0 {
                        let line =
                            format!("  {}", render_bar(percent, elapsed_seconds, Some(total)));
                        self.draw(&line, wall_clock_seconds);
                    }
                }
                _ => {
                    if self.due(wall_clock_seconds, PLAIN_INTERVAL_SECONDS) {
                        let line = format!(
                            "Downloading… {} elapsed",
                            format_clock(wall_clock_seconds)
                        );
                        self.draw(&line, wall_clock_seconds);
                    }
                }
            },
            ProgressEvent::Done { wall_clock_seconds } => {
                match self.duration {
                    Some(total) if total > 0.0 => {
                        println!("\r  {}", render_bar(100.0, total, Some(total)));
                    }
                    _ => println!("\rDone in {}", format_clock(wall_clock_seconds)),
                }
                self.line_open = false;
            }
        }
    }
}
