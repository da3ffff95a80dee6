//! Holds an opaque point in civil time and its clock components.

use jiff::{Span, Zoned, civil};

/// A point in civil time with read-only calendar/clock components.
///
/// An `Instant` is a wall-clock reading plus the signed minutes-from-UTC
/// offset it was read under (east of UTC positive) and, when known, the zone
/// abbreviation of the source [`Zoned`]. There is no timezone database
/// behind it; all arithmetic is plain civil arithmetic under that one fixed
/// offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Instant {
    dt: civil::DateTime,
    offset_minutes: i32,
    zone_label: Option<String>,
}

impl Instant {
    /// Create from a wall-clock reading and its minutes-from-UTC offset.
    pub fn new(dt: civil::DateTime, offset_minutes: i32) -> Self {
        Self {
            dt,
            offset_minutes,
            zone_label: None,
        }
    }

    /// The current moment in the system timezone.
    pub fn now() -> Self {
        Self::from(&Zoned::now())
    }

    /// Attach a zone label ("EDT", "UTC", ...) used by the `z` flag.
    pub fn with_zone_label(mut self, label: impl Into<String>) -> Self {
        self.zone_label = Some(label.into());
        self
    }

    pub fn year(&self) -> i16 {
        self.dt.year()
    }

    /// Month of the year, 1 through 12.
    pub fn month(&self) -> i8 {
        self.dt.month()
    }

    /// Day of the month, 1 through 31.
    pub fn day(&self) -> i8 {
        self.dt.day()
    }

    /// Day of the week where Sunday is 0 and Saturday is 6.
    pub fn weekday(&self) -> i8 {
        self.dt.weekday().to_sunday_zero_offset()
    }

    /// Hour on the 24-hour clock, 0 through 23.
    pub fn hour(&self) -> i8 {
        self.dt.hour()
    }

    pub fn minute(&self) -> i8 {
        self.dt.minute()
    }

    pub fn second(&self) -> i8 {
        self.dt.second()
    }

    pub fn millisecond(&self) -> i16 {
        self.dt.millisecond()
    }

    /// Signed minutes from UTC, east positive (UTC+02:30 is 150).
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// The zone abbreviation this reading was taken under, if known.
    pub fn zone_label(&self) -> Option<&str> {
        self.zone_label.as_deref()
    }

    /// Day of the year, 1 through 366.
    pub fn day_of_year(&self) -> i16 {
        self.dt.date().day_of_year()
    }

    /// Weekday of January 1 of this year, Sunday based like [`Self::weekday`].
    pub fn weekday_of_jan1(&self) -> i8 {
        self.dt
            .date()
            .first_of_year()
            .weekday()
            .to_sunday_zero_offset()
    }

    /// Milliseconds elapsed since local midnight.
    pub fn millisecond_of_day(&self) -> i64 {
        self.hour() as i64 * 3_600_000
            + self.minute() as i64 * 60_000
            + self.second() as i64 * 1_000
            + self.millisecond() as i64
    }

    /// Shift the wall clock so it reads like the equivalent UTC moment.
    ///
    /// This adds the negated offset to the clock reading itself; the offset
    /// and zone label stay untouched. It is not a timezone conversion: for
    /// instants far from now, around daylight-saving transitions, the result
    /// differs from true UTC. Callers of the original relied on this exact
    /// reading, so it is kept as is.
    pub fn as_fixed_offset(&self) -> Self {
        Self {
            dt: self
                .dt
                .saturating_add(Span::new().minutes(-self.offset_minutes as i64)),
            offset_minutes: self.offset_minutes,
            zone_label: self.zone_label.clone(),
        }
    }
}

impl From<&Zoned> for Instant {
    fn from(zoned: &Zoned) -> Self {
        let info = zoned.time_zone().to_offset_info(zoned.timestamp());
        Self {
            dt: zoned.datetime(),
            offset_minutes: zoned.offset().seconds() / 60,
            zone_label: Some(info.abbreviation().to_string()),
        }
    }
}

impl From<Zoned> for Instant {
    fn from(zoned: Zoned) -> Self {
        Self::from(&zoned)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn reference() -> Instant {
        Instant::new(date(2021, 8, 6).at(20, 4, 5, 678_000_000), -240)
    }

    #[test]
    fn test_components() {
        let tm = reference();
        assert_eq!(tm.year(), 2021);
        assert_eq!(tm.month(), 8);
        assert_eq!(tm.day(), 6);
        assert_eq!(tm.weekday(), 5); // Friday
        assert_eq!(tm.hour(), 20);
        assert_eq!(tm.minute(), 4);
        assert_eq!(tm.second(), 5);
        assert_eq!(tm.millisecond(), 678);
        assert_eq!(tm.offset_minutes(), -240);
        assert_eq!(tm.zone_label(), None);
    }

    #[test]
    fn test_derived_components() {
        let tm = reference();
        assert_eq!(tm.day_of_year(), 218);
        assert_eq!(tm.weekday_of_jan1(), 5); // 2021-01-01 was a Friday
        assert_eq!(
            tm.millisecond_of_day(),
            ((20 * 60 + 4) * 60 + 5) * 1_000 + 678
        );
    }

    #[test]
    fn test_fixed_offset_shifts_clock_only() {
        let shifted = reference().as_fixed_offset();
        // 20:04 at UTC-4 reads as 00:04 next day
        assert_eq!(shifted.day(), 7);
        assert_eq!(shifted.weekday(), 6);
        assert_eq!(shifted.hour(), 0);
        assert_eq!(shifted.minute(), 4);
        assert_eq!(shifted.offset_minutes(), -240);
    }

    #[test]
    fn test_fixed_offset_eastern() {
        let tm = Instant::new(date(2021, 8, 6).at(1, 0, 0, 0), 150).as_fixed_offset();
        assert_eq!(tm.day(), 5);
        assert_eq!(tm.hour(), 22);
        assert_eq!(tm.minute(), 30);
    }

    #[test]
    fn test_fixed_offset_noop_at_utc() {
        let tm = Instant::new(date(2021, 8, 6).at(20, 4, 5, 0), 0);
        assert_eq!(tm.as_fixed_offset(), tm);
    }

    #[test]
    fn test_from_zoned() {
        let zoned: Zoned = "2021-08-06T20:04:05.678[America/New_York]".parse().unwrap();
        let tm = Instant::from(&zoned);
        assert_eq!(tm.hour(), 20);
        assert_eq!(tm.millisecond(), 678);
        assert_eq!(tm.offset_minutes(), -240);
        assert_eq!(tm.zone_label(), Some("EDT"));
    }
}
