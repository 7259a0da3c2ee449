use chrono::{DateTime, Local};

pub fn format_clock(ts: DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}
