//! Timestamp utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` for the publish/update timestamps
//! carried by blog posts. Parsing is strict: anything that is not a real
//! calendar date yields `None`, and callers omit the derived field.
//!
//! # Accepted forms
//!
//! ```text
//! 2024-06-15
//! 2024-06-15T14:30:45Z
//! 2024-06-15T14:30:45.123Z
//! 2024-06-15T14:30:45+02:00
//! 2024-06-15 14:30:45
//! ```

use anyhow::{Result, bail};

/// Calendar timestamp with an optional UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset from UTC in minutes (`0` for `Z`)
    pub offset_minutes: i16,
    /// Whether the source carried a time component
    pub has_time: bool,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_minutes: 0,
            has_time: true,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self {
            has_time: false,
            ..Self::new(year, month, day, 0, 0, 0)
        }
    }

    /// Parse any of the accepted forms listed in the module docs
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        // Time part: "THH:MM:SS" or " HH:MM:SS"
        if bytes.len() < 19 || !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return None;
        }
        let hour = parse_u8(&bytes[11..13])?;
        let minute = parse_u8(&bytes[14..16])?;
        let second = parse_u8(&bytes[17..19])?;

        // Optional fraction, ignored
        let mut rest = &bytes[19..];
        if let Some((b'.', tail)) = rest.split_first() {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            rest = &tail[digits..];
        }

        let offset_minutes = parse_offset(rest)?;

        let dt = Self {
            offset_minutes,
            ..Self::new(year, month, day, hour, minute, second)
        };
        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_minutes,
            ..
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        if offset_minutes.abs() > 14 * 60 {
            bail!("offset is invalid: {offset_minutes}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as ISO 8601 for schema.org date properties.
    ///
    /// Date-only sources stay date-only (`YYYY-MM-DD`); timestamps keep
    /// their offset (`YYYY-MM-DDTHH:MM:SSZ` or `...+02:00`).
    pub fn to_iso8601(self) -> String {
        if !self.has_time {
            return format!("{:04}-{:02}-{:02}", self.year, self.month, self.day);
        }

        let offset = if self.offset_minutes == 0 {
            "Z".to_string()
        } else {
            let sign = if self.offset_minutes < 0 { '-' } else { '+' };
            let abs = self.offset_minutes.unsigned_abs();
            format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
        };

        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{offset}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parse the trailing zone designator: empty (treated as UTC), `Z`, or `±HH:MM`
fn parse_offset(bytes: &[u8]) -> Option<i16> {
    match bytes {
        [] | [b'Z'] | [b'z'] => Some(0),
        [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
            let hours = i16::from(parse_u8(&[*h1, *h2])?);
            let minutes = i16::from(parse_u8(&[*m1, *m2])?);
            if minutes > 59 {
                return None;
            }
            let total = hours * 60 + minutes;
            Some(if *sign == b'-' { -total } else { total })
        }
        _ => None,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 6, 15));
        assert_eq!(dt.to_iso8601(), "2024-06-15");
    }

    #[test]
    fn test_parse_utc_timestamp() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_parse_fraction_is_dropped() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45.123Z").unwrap();
        assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_parse_offset_is_kept() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45+02:00").unwrap();
        assert_eq!(dt.offset_minutes, 120);
        assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45+02:00");

        let dt = DateTimeUtc::parse("2024-06-15T14:30:45-05:30").unwrap();
        assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45-05:30");
    }

    #[test]
    fn test_parse_space_separator() {
        let dt = DateTimeUtc::parse("2024-06-15 08:00:00").unwrap();
        assert_eq!(dt.to_iso8601(), "2024-06-15T08:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(DateTimeUtc::parse(""), None);
        assert_eq!(DateTimeUtc::parse("yesterday"), None);
        assert_eq!(DateTimeUtc::parse("June 15, 2024"), None);
        assert_eq!(DateTimeUtc::parse("2024-13-01"), None);
        assert_eq!(DateTimeUtc::parse("2023-02-29"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T25:00:00Z"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T10:00:00.Z"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T10:00:00+2"), None);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_time_bounds() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
        assert!(DateTimeUtc::new(2024, 12, 31, 23, 59, 59).validate().is_ok());
    }
}
