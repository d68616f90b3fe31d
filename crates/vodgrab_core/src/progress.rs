use crate::clock::format_clock;

/// Width of the filled/unfilled progress bar in characters.
pub const BAR_WIDTH: usize = 30;

/// Percent of the stream already written, clamped to 100.
pub fn percent_complete(elapsed_seconds: f64, duration_seconds: f64) -> f64 {
    (elapsed_seconds / duration_seconds * 100.0).min(100.0)
}

/// Renders one progress line: a fixed-width bar with percent, followed
/// by elapsed / total and the remaining time when the total is known.
///
/// Without a usable total (or before any progress registered) only the
/// elapsed clock is appended.
pub fn render_bar(percent: f64, elapsed_seconds: f64, duration_seconds: Option<f64>) -> String {
    let filled = ((BAR_WIDTH as f64 * percent / 100.0) as usize).min(BAR_WIDTH);
    let bar = format!(
        "[{}{}] {percent:5.1}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    );
    let elapsed = format_clock(elapsed_seconds);
    match duration_seconds {
        Some(total) if total > 0.0 && percent > 0.0 => {
            let remaining = (total - elapsed_seconds).max(0.0);
            format!(
                "{bar}  {elapsed} / {}  ETA {}",
                format_clock(total),
                format_clock(remaining)
            )
        }
        _ => format!("{bar}  {elapsed}"),
    }
}
