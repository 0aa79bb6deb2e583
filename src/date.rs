//! Calendar-independant date.

use std::ops::{Add, Sub};

/// Difference between a Julian day number and an absolute day number.
const ABSOLUTE_EPOCH_JDN: i64 = 1721425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with an absolute day number, i.e. the day count where
    /// January 1, AD 1 of the proleptic Gregorian calendar is day 1.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::Date;
    ///
    /// let date = Date::from_absolute(730120).unwrap();
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn from_absolute(absolute: i64) -> Option<Self> {
        u32::try_from(absolute + ABSOLUTE_EPOCH_JDN)
            .map(Self::from_jdn)
            .ok()
    }
    /// Returns the absolute day number of the date, see
    /// [`from_absolute`](Self::from_absolute).
    pub fn absolute(&self) -> i64 {
        self.jdn as i64 - ABSOLUTE_EPOCH_JDN
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Iterates over all dates from `self` up to and including `last`.
    pub fn through(self, last: Date) -> impl Iterator<Item = Date> {
        (self.jdn..=last.jdn).map(Date::from_jdn)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn absolute() {
        for ((y, m, d), abs) in [((1, 1, 1), 1), ((1970, 1, 1), 719163), ((2000, 1, 1), 730120)] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(abs, date.absolute(), "{y:04}-{m:02}-{d:02}");
            assert_eq!(Some(date), Date::from_absolute(abs));
        }
        assert_eq!(None, Date::from_absolute(-ABSOLUTE_EPOCH_JDN - 1));
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2017, 1, 28).unwrap();
        assert_eq!("2017-02-26", (date + 29).iso_gregorian());
        assert_eq!("2016-12-29", (date + -30).iso_gregorian());
        assert_eq!(29, (date + 29) - date);
        assert_eq!(3, date.through(date + 2).count());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }
}
