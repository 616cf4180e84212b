//! Calendar date parsing for document frontmatter.
//!
//! Accepts exactly the `YYYY-MM-DD` form, validated as a real calendar date.
//! Any other shape is rejected so the caller can record an advisory and
//! exclude the document from date-dependent checks.

/// Calendar date without time-of-day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    /// Parse from "YYYY-MM-DD" format
    ///
    /// Returns `None` for any other shape or an invalid calendar date.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Exactly "YYYY-MM-DD" (10 chars)
        if bytes.len() != 10 {
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

        let date = Self { year, month, day };
        date.is_valid().then_some(date)
    }

    fn is_valid(self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= Self::days_in_month(self.year, self.month)
    }

    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    fn is_leap_year(year: u16) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

fn parse_u16(bytes: &[u8]) -> Option<u16> {
    let mut n: u16 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        n = n * 10 + u16::from(b - b'0');
    }
    Some(n)
}

fn parse_u8(bytes: &[u8]) -> Option<u8> {
    let mut n: u8 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        n = n * 10 + (b - b'0');
    }
    Some(n)
}
