//! A single access-log line

use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::net::Ipv4Addr;

/// Timestamp layout inside the brackets, e.g. `01/Jan/2024:00:00:00 +0000`
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Every field of one request line
///
/// `Display` renders the line without its trailing newline:
///
/// ```text
/// <ip> "<user-agent>" - [<timestamp>] "GET <path><file>.<ext> HTTP/1.1" <status> <size>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub ip: Ipv4Addr,
    pub user_agent: String,
    pub timestamp: DateTime<FixedOffset>,
    pub path: String,
    pub file: String,
    pub extension: String,
    pub status: u16,
    pub size: u32,
}

impl LogEntry {
    /// Request target, e.g. `/tags/ruby/item.html`
    pub fn request_path(&self) -> String {
        format!("{}{}.{}", self.path, self.file, self.extension)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" - [{}] \"GET {}{}.{} HTTP/1.1\" {} {}",
            self.ip,
            self.user_agent,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.path,
            self.file,
            self.extension,
            self.status,
            self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> LogEntry {
        LogEntry {
            ip: Ipv4Addr::new(10, 1, 2, 3),
            user_agent: "TestAgent".to_string(),
            timestamp: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .unwrap(),
            path: "/tags/ruby/".to_string(),
            file: "item".to_string(),
            extension: "html".to_string(),
            status: 200,
            size: 512,
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            sample_entry().to_string(),
            "10.1.2.3 \"TestAgent\" - [01/Jan/2024:00:00:00 +0000] \"GET /tags/ruby/item.html HTTP/1.1\" 200 512"
        );
    }

    #[test]
    fn test_format_negative_offset() {
        let mut entry = sample_entry();
        entry.timestamp = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2015, 3, 9, 17, 4, 59)
            .unwrap();
        entry.status = 404;
        entry.size = 2239;

        assert_eq!(
            entry.to_string(),
            "10.1.2.3 \"TestAgent\" - [09/Mar/2015:17:04:59 -0500] \"GET /tags/ruby/item.html HTTP/1.1\" 404 2239"
        );
    }

    #[test]
    fn test_request_path() {
        assert_eq!(sample_entry().request_path(), "/tags/ruby/item.html");
    }
}
