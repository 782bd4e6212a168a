//! Process memory sampling via `/proc/self/status`.
//!
//! RSS figures are an imprecise, environment-dependent signal (allocator
//! and kernel behavior both move them), so every reader returns `Option`
//! and nothing in the harness branches on the values.

/// Current resident set size in kB. `None` off Linux or if unreadable.
pub fn current_rss_kb() -> Option<u64> {
    read_status_field("VmRSS:")
}

/// Peak resident set size (high-water mark) in kB. `None` off Linux or if
/// unreadable.
pub fn peak_rss_kb() -> Option<u64> {
    read_status_field("VmHWM:")
}

#[cfg(target_os = "linux")]
fn read_status_field(field: &str) -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_status_field(&status, field)
}

#[cfg(not(target_os = "linux"))]
fn read_status_field(_field: &str) -> Option<u64> {
    None
}

/// Extract a kB-valued field from `/proc/self/status` content.
///
/// Lines look like `VmRSS:    123456 kB`.
fn parse_status_field(status: &str, field: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with(field))
        .and_then(|line| line[field.len()..].split_whitespace().next())
        .and_then(|value| value.parse::<u64>().ok())
}
