/// Formats milliseconds as `MM:SS.mmm`. Minutes keep counting past 59 rather than rolling
/// into hours.
pub fn format_ms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let millis = ms % 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
}
