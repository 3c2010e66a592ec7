//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for the two date operations
//! feed generation needs: parsing the dotted `day.month.year` publish date
//! stored in content metadata, and rendering RFC-822 style timestamps for
//! RSS channels and items.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse_dmy("01.02.2024").unwrap();
//! assert_eq!(dt.to_rfc822(), "Thu, 01 Feb 2024 00:00:00 +0000");
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
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
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from dotted "DD.MM.YYYY" format (midnight, since content
    /// metadata stores no time of day).
    ///
    /// Day and month accept one or two digits, the year must have four.
    /// Anything else, including ISO dates, is rejected.
    pub fn parse_dmy(s: &str) -> Option<Self> {
        let mut parts = s.split('.');
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if !(1..=2).contains(&day.len()) || !(1..=2).contains(&month.len()) || year.len() != 4 {
            return None;
        }
        for part in [day, month, year] {
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        }

        let dt = Self::from_ymd(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?);
        dt.validate().ok()?;
        Some(dt)
    }

    /// Current instant in UTC.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Convert Unix seconds to a civil UTC datetime.
    ///
    /// Uses Howard Hinnant's civil-from-days algorithm.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let tod = secs % 86_400;

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (yoe + era * 400 + i64::from(month <= 2)) as u16;

        Self::new(
            year,
            month,
            day,
            (tod / 3_600) as u8,
            ((tod / 60) % 60) as u8,
            (tod % 60) as u8,
        )
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
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

    /// Format as RFC-822 style for RSS.
    ///
    /// Returns: `Dow, DD Mon YYYY HH:MM:SS +0000`. The offset is always the
    /// literal `+0000`; no timezone other than UTC is ever used.
    pub fn to_rfc822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        // Zeller's congruence for weekday calculation
        let weekday = self.weekday_index();

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} +0000",
            WEEKDAYS[weekday],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    #[inline]
    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dmy_valid() {
        let dt = DateTimeUtc::parse_dmy("01.02.2024").expect("should parse");
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 2, 1));

        // Unpadded day and month
        let dt = DateTimeUtc::parse_dmy("1.2.2024").expect("should parse");
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 2, 1));

        let dt = DateTimeUtc::parse_dmy("31.12.1999").expect("should parse");
        assert_eq!(dt, DateTimeUtc::from_ymd(1999, 12, 31));
    }

    #[test]
    fn test_parse_dmy_midnight() {
        let dt = DateTimeUtc::parse_dmy("15.06.2024").expect("should parse");
        assert_eq!((dt.hour, dt.minute, dt.second), (0, 0, 0));
    }

    #[test]
    fn test_parse_dmy_rejects_iso() {
        assert!(DateTimeUtc::parse_dmy("2024-02-01").is_none());
    }

    #[test]
    fn test_parse_dmy_rejects_malformed() {
        assert!(DateTimeUtc::parse_dmy("").is_none());
        assert!(DateTimeUtc::parse_dmy("01.02").is_none());
        assert!(DateTimeUtc::parse_dmy("01.02.2024.05").is_none());
        assert!(DateTimeUtc::parse_dmy("01.02.24").is_none());
        assert!(DateTimeUtc::parse_dmy("aa.bb.cccc").is_none());
        assert!(DateTimeUtc::parse_dmy("+1.02.2024").is_none());
        assert!(DateTimeUtc::parse_dmy("01 02 2024").is_none());
    }

    #[test]
    fn test_parse_dmy_rejects_invalid_calendar_dates() {
        assert!(DateTimeUtc::parse_dmy("32.01.2024").is_none());
        assert!(DateTimeUtc::parse_dmy("00.01.2024").is_none());
        assert!(DateTimeUtc::parse_dmy("01.13.2024").is_none());
        assert!(DateTimeUtc::parse_dmy("31.04.2024").is_none());
        assert!(DateTimeUtc::parse_dmy("29.02.2023").is_none());
    }

    #[test]
    fn test_parse_dmy_leap_year() {
        assert!(DateTimeUtc::parse_dmy("29.02.2024").is_some());
        assert!(DateTimeUtc::parse_dmy("29.02.2000").is_some()); // divisible by 400
        assert!(DateTimeUtc::parse_dmy("29.02.1900").is_none()); // divisible by 100 but not 400
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    #[test]
    fn test_to_rfc822_known_dates() {
        assert_eq!(
            DateTimeUtc::from_ymd(2024, 2, 1).to_rfc822(),
            "Thu, 01 Feb 2024 00:00:00 +0000"
        );
        assert_eq!(
            DateTimeUtc::new(2024, 6, 15, 14, 30, 45).to_rfc822(),
            "Sat, 15 Jun 2024 14:30:45 +0000"
        );
        assert_eq!(
            DateTimeUtc::from_ymd(1970, 1, 1).to_rfc822(),
            "Thu, 01 Jan 1970 00:00:00 +0000"
        );
    }

    #[test]
    fn test_to_rfc822_always_utc_offset() {
        let rfc822 = DateTimeUtc::from_ymd(2024, 12, 25).to_rfc822();
        assert!(rfc822.ends_with("+0000"));
        assert!(!rfc822.contains("GMT"));
    }

    #[test]
    fn test_from_unix_secs_epoch() {
        assert_eq!(
            DateTimeUtc::from_unix_secs(0),
            DateTimeUtc::from_ymd(1970, 1, 1)
        );
    }

    #[test]
    fn test_from_unix_secs_known_instant() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(
            DateTimeUtc::from_unix_secs(1_700_000_000),
            DateTimeUtc::new(2023, 11, 14, 22, 13, 20)
        );
    }

    #[test]
    fn test_from_unix_secs_leap_day() {
        // 2024-02-29 00:00:00 UTC
        assert_eq!(
            DateTimeUtc::from_unix_secs(1_709_164_800),
            DateTimeUtc::from_ymd(2024, 2, 29)
        );
    }

    #[test]
    fn test_now_is_valid() {
        assert!(DateTimeUtc::now().validate().is_ok());
    }
}
