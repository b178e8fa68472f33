/// Convert seconds to `hh:mm:ss`.
///
/// Fractions are truncated, never rounded. The hour field is not wrapped and
/// grows past two digits for 100 hours and more. Negative and NaN input
/// renders as zero.
pub fn format_time(seconds: f64) -> String {
    let total_seconds = seconds.floor().max(0.0) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
