/// Formats a second count as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// The hour component is unpadded; minutes and seconds are always two
/// digits. Negative inputs clamp to zero.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
