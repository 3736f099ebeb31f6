//! Utility functions

/// Format remaining time in mm:ss format
pub fn format_remaining(secs: u32) -> String {
    let mins = secs / 60;
    let secs = secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
