//! Millisecond-to-display conversion.

/// Formats an elapsed time in milliseconds as `HH:MM:SS:CC`.
///
/// Four colon-separated, zero-padded fields: hours, minutes, seconds, and
/// hundredths of a second. `{:02}` is a minimum width, so the hours field
/// widens past `99:59:59:99` instead of wrapping; alignment beyond that
/// point is a cosmetic issue only.
///
/// # Example
/// ```
/// use kairos_core::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00:00");
/// assert_eq!(format_elapsed(3_661_500), "01:01:01:50");
/// ```
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let hours = elapsed_ms / 3_600_000;
    let minutes = (elapsed_ms / 60_000) % 60;
    let seconds = (elapsed_ms / 1_000) % 60;
    let hundredths = (elapsed_ms % 1_000) / 10;
    format!("{hours:02}:{minutes:02}:{seconds:02}:{hundredths:02}")
}
