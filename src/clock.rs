//! 12-hour clock normalization for the employee edit form.
//!
//! The edit form shows check-in/check-out times on a 12-hour dial with an
//! AM/PM toggle and submits them as 24-hour `HH:MM:SS` strings. This module
//! keeps the triple (hour, minute, meridiem) consistent while either side is
//! edited and performs the final conversion at submit time.
//!
//! Two behaviors are kept exactly as shipped in the dashboard, even though
//! they look like defects (see DESIGN.md before changing either):
//! - 12 AM is never mapped to hour 0.
//! - Selecting PM shifts the stored hour forward by 12; selecting AM never
//!   shifts it back.

use crate::error::{AppError, Result};
use chrono::{NaiveTime, Timelike};

/// AM/PM designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Lowercase label as shown on the toggle.
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }

    /// Parse a toggle label ("am"/"pm", case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            other => Err(AppError::parse(format!("Invalid meridiem: '{other}'"))),
        }
    }
}

/// A time as entered on the 12-hour dial.
///
/// `hour` is in [1,12] when freshly parsed, but [`apply_meridiem`] can push it
/// past 12; the struct does not re-check the range after construction.
///
/// [`apply_meridiem`]: WallClockTime::apply_meridiem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl WallClockTime {
    /// Parse an `"HH:MM"` field edit, carrying the existing meridiem through.
    ///
    /// The hour must be in [1,12] or [`AppError::HourOutOfRange`] is returned
    /// and the caller keeps its previous value. The minute is parsed but its
    /// range is not enforced; the time input widget constrains it in practice.
    pub fn parse_clock_input(raw: &str, meridiem: Meridiem) -> Result<Self> {
        let (hour_str, minute_str) = raw
            .split_once(':')
            .ok_or_else(|| AppError::parse(format!("Invalid time input: '{raw}'")))?;

        let hour: u32 = hour_str
            .trim()
            .parse()
            .map_err(|_| AppError::parse(format!("Invalid hour: '{hour_str}'")))?;
        let minute: u32 = minute_str
            .trim()
            .parse()
            .map_err(|_| AppError::parse(format!("Invalid minute: '{minute_str}'")))?;

        if !(1..=12).contains(&hour) {
            return Err(AppError::HourOutOfRange(hour));
        }

        Ok(Self { hour, minute, meridiem })
    }

    /// Decompose a 24-hour timestamp into 12-hour parts for display.
    pub fn from_naive(time: NaiveTime) -> Self {
        let meridiem = if time.hour() < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match time.hour() % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: time.minute(),
            meridiem,
        }
    }

    /// Apply an AM/PM toggle selection.
    ///
    /// Selecting PM when the hour is not 12 shifts the stored hour itself by
    /// +12, so the field immediately displays the shifted value. Selecting AM
    /// applies no inverse shift.
    pub fn apply_meridiem(self, new_meridiem: Meridiem) -> Self {
        let hour = if new_meridiem == Meridiem::Pm && self.hour != 12 {
            self.hour + 12
        } else {
            self.hour
        };
        Self {
            hour,
            minute: self.minute,
            meridiem: new_meridiem,
        }
    }

    /// Field text as shown in the time input.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Convert to the canonical 24-hour value for submission.
    pub fn to_canonical(self) -> CanonicalTime {
        CanonicalTime::from_parts(self.hour, self.minute, self.meridiem)
    }
}

/// A 24-hour time as sent to the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalTime {
    pub hour24: u32,
    pub minute: u32,
}

impl CanonicalTime {
    /// The authoritative 12-to-24-hour conversion, applied at submit time
    /// regardless of any shift [`WallClockTime::apply_meridiem`] already made.
    ///
    /// PM with hour != 12 adds 12; everything else passes through, so 12 AM
    /// stays 12 rather than becoming 0.
    pub fn from_parts(hour: u32, minute: u32, meridiem: Meridiem) -> Self {
        let hour24 = if meridiem == Meridiem::Pm && hour != 12 {
            hour + 12
        } else {
            hour
        };
        Self { hour24, minute }
    }

    /// Wire format used in the update request body.
    pub fn to_hms_string(self) -> String {
        format!("{:02}:{:02}:00", self.hour24, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        for hour in 1..=12 {
            for minute in [0, 15, 30, 59] {
                let raw = format!("{hour:02}:{minute:02}");
                let time = WallClockTime::parse_clock_input(&raw, Meridiem::Am).unwrap();
                assert_eq!(time.hour, hour);
                assert_eq!(time.minute, minute);
                assert_eq!(time.meridiem, Meridiem::Am);
            }
        }
    }

    #[test]
    fn test_parse_preserves_meridiem() {
        let time = WallClockTime::parse_clock_input("09:15", Meridiem::Pm).unwrap();
        assert_eq!(time.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_parse_hour_out_of_range() {
        for raw in ["00:30", "13:00", "17:45", "24:00"] {
            let result = WallClockTime::parse_clock_input(raw, Meridiem::Am);
            assert!(matches!(result, Err(AppError::HourOutOfRange(_))), "{raw}");
        }
    }

    #[test]
    fn test_parse_minute_not_range_checked() {
        // Minute range is intentionally unenforced.
        let time = WallClockTime::parse_clock_input("09:75", Meridiem::Am).unwrap();
        assert_eq!(time.minute, 75);
    }

    #[test]
    fn test_parse_malformed_input() {
        for raw in ["", "9", "nine:30", "09:xx", "09-30"] {
            let result = WallClockTime::parse_clock_input(raw, Meridiem::Am);
            assert!(matches!(result, Err(AppError::Parse(_))), "{raw}");
        }
    }

    #[test]
    fn test_apply_meridiem_pm_shifts_stored_hour() {
        let time = WallClockTime { hour: 7, minute: 30, meridiem: Meridiem::Am };
        let shifted = time.apply_meridiem(Meridiem::Pm);
        assert_eq!(shifted.hour, 19);
        assert_eq!(shifted.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_apply_meridiem_pm_noon_unchanged() {
        let time = WallClockTime { hour: 12, minute: 0, meridiem: Meridiem::Am };
        let shifted = time.apply_meridiem(Meridiem::Pm);
        assert_eq!(shifted.hour, 12);
    }

    #[test]
    fn test_apply_meridiem_am_never_shifts_back() {
        let time = WallClockTime { hour: 19, minute: 30, meridiem: Meridiem::Pm };
        let back = time.apply_meridiem(Meridiem::Am);
        assert_eq!(back.hour, 19);
        assert_eq!(back.meridiem, Meridiem::Am);
    }

    #[test]
    fn test_to_canonical_pm_afternoon() {
        let canonical = CanonicalTime::from_parts(5, 30, Meridiem::Pm);
        assert_eq!(canonical, CanonicalTime { hour24: 17, minute: 30 });
    }

    #[test]
    fn test_to_canonical_noon_stays_12() {
        let canonical = CanonicalTime::from_parts(12, 0, Meridiem::Pm);
        assert_eq!(canonical, CanonicalTime { hour24: 12, minute: 0 });
    }

    #[test]
    fn test_to_canonical_midnight_stays_12() {
        // Shipped behavior: 12 AM is not mapped to 0.
        let canonical = CanonicalTime::from_parts(12, 0, Meridiem::Am);
        assert_eq!(canonical, CanonicalTime { hour24: 12, minute: 0 });
    }

    #[test]
    fn test_to_canonical_am_passthrough() {
        let canonical = CanonicalTime::from_parts(9, 15, Meridiem::Am);
        assert_eq!(canonical, CanonicalTime { hour24: 9, minute: 15 });
    }

    #[test]
    fn test_hms_wire_format() {
        assert_eq!(CanonicalTime { hour24: 9, minute: 15 }.to_hms_string(), "09:15:00");
        assert_eq!(CanonicalTime { hour24: 17, minute: 45 }.to_hms_string(), "17:45:00");
    }

    #[test]
    fn test_from_naive_morning() {
        let time = WallClockTime::from_naive(NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(time, WallClockTime { hour: 9, minute: 15, meridiem: Meridiem::Am });
    }

    #[test]
    fn test_from_naive_afternoon() {
        let time = WallClockTime::from_naive(NaiveTime::from_hms_opt(17, 45, 0).unwrap());
        assert_eq!(time, WallClockTime { hour: 5, minute: 45, meridiem: Meridiem::Pm });
    }

    #[test]
    fn test_from_naive_midnight_and_noon() {
        let midnight = WallClockTime::from_naive(NaiveTime::from_hms_opt(0, 5, 0).unwrap());
        assert_eq!(midnight.hour, 12);
        assert_eq!(midnight.meridiem, Meridiem::Am);

        let noon = WallClockTime::from_naive(NaiveTime::from_hms_opt(12, 5, 0).unwrap());
        assert_eq!(noon.hour, 12);
        assert_eq!(noon.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_meridiem_labels() {
        assert_eq!(Meridiem::Am.as_str(), "am");
        assert_eq!(Meridiem::parse("PM").unwrap(), Meridiem::Pm);
        assert!(Meridiem::parse("noon").is_err());
    }

    #[test]
    fn test_display_pads_fields() {
        let time = WallClockTime { hour: 7, minute: 5, meridiem: Meridiem::Am };
        assert_eq!(time.display(), "07:05");
    }
}
