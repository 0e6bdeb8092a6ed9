//! Calendar dates of posts.
//!
//! Post dates arrive as `YYYY-MM-DD`, optionally followed by a time part
//! (`2024-06-15T14:30:45Z`, `2024-06-15 14:30`). Only the date is kept.
//!
//! ```ignore
//! let date = PostDate::parse("2024-06-15T14:30:45Z").unwrap();
//! assert_eq!(date.month_key(), "2024-06");
//! ```

use std::fmt;

/// A validated calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse the leading `YYYY-MM-DD` of `s`. Anything after the date must be
    /// separated by `T` or a space.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        if bytes.len() > 10 && !matches!(bytes[10], b'T' | b' ') {
            return None;
        }

        let date = Self::from_ymd(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );
        date.is_valid().then_some(date)
    }

    pub const fn is_valid(self) -> bool {
        self.month >= 1 && self.month <= 12 && self.day >= 1 && self.day <= self.days_in_month()
    }

    /// Archive group key: `YYYY-MM`.
    pub fn month_key(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    const fn days_in_month(self) -> u8 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[inline]
#[allow(clippy::manual_is_multiple_of)] // const fn
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    let &[a, b] = bytes else { return None };
    let (d1, d2) = (a.wrapping_sub(b'0'), b.wrapping_sub(b'0'));
    (d1 <= 9 && d2 <= 9).then(|| d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    bytes.iter().try_fold(0u16, |acc, &b| {
        let d = b.wrapping_sub(b'0');
        (d <= 9).then(|| acc * 10 + u16::from(d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            PostDate::parse("2024-06-15"),
            Some(PostDate::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_ignores_time() {
        assert_eq!(
            PostDate::parse("2024-06-15T14:30:45Z"),
            Some(PostDate::from_ymd(2024, 6, 15))
        );
        assert_eq!(
            PostDate::parse("2024-06-15 09:00"),
            Some(PostDate::from_ymd(2024, 6, 15))
        );
        assert_eq!(PostDate::parse("2024-06-150"), None);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(PostDate::parse(""), None);
        assert_eq!(PostDate::parse("2024/06/15"), None);
        assert_eq!(PostDate::parse("2024-13-01"), None);
        assert_eq!(PostDate::parse("2024-04-31"), None);
        assert_eq!(PostDate::parse("2023-02-29"), None);
        assert!(PostDate::parse("2024-02-29").is_some());
        assert_eq!(PostDate::parse("1900-02-29"), None);
    }

    #[test]
    fn test_month_key_and_display() {
        let date = PostDate::from_ymd(2024, 3, 7);
        assert_eq!(date.month_key(), "2024-03");
        assert_eq!(date.to_string(), "2024-03-07");
    }

    #[test]
    fn test_ordering() {
        assert!(PostDate::from_ymd(2024, 1, 31) < PostDate::from_ymd(2024, 2, 1));
        assert!(PostDate::from_ymd(2023, 12, 31) < PostDate::from_ymd(2024, 1, 1));
    }
}
