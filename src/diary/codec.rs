//! Packing Chinese dates into the month/day/year shape diary engines expect.

use std::fmt;

use crate::chinese::{self, ChineseDate, Month};
use crate::date::Date;
use crate::error::Error;

/// A Chinese year packed into a single integer, `cycle * 100 + year`.
///
/// # Example
///
/// ```
/// use taglibro::diary::PackedYear;
///
/// let packed = PackedYear::new(78, 34);
/// assert_eq!(7834, packed.raw());
/// assert_eq!((78, 34), (packed.cycle(), packed.year()));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PackedYear(u32);

impl PackedYear {
    pub fn new(cycle: u32, year: u32) -> Self {
        Self(cycle * 100 + year)
    }
    /// Like [`PackedYear::new`], but `None` if the packed value overflows.
    pub fn checked_new(cycle: u32, year: u32) -> Option<Self> {
        cycle.checked_mul(100)?.checked_add(year).map(Self)
    }
    /// Wraps an already packed value, e.g. a year read from a diary entry.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
    pub fn raw(&self) -> u32 {
        self.0
    }
    pub fn cycle(&self) -> u32 {
        self.0 / 100
    }
    pub fn year(&self) -> u32 {
        self.0 % 100
    }

    /// Moves by `years` Chinese years, carrying into the neighbouring cycle
    /// when crossing year 60 or year 1.
    ///
    /// Returns `None` if the result would precede cycle 1, year 1 or no longer
    /// fits a packed year.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::diary::PackedYear;
    ///
    /// assert_eq!(Some(PackedYear::new(78, 1)), PackedYear::new(77, 60).offset(1));
    /// assert_eq!(Some(PackedYear::new(77, 60)), PackedYear::new(78, 1).offset(-1));
    /// ```
    pub fn offset(&self, years: i32) -> Option<Self> {
        let n = (self.cycle() as i64 - 1) * 60 + self.year() as i64 - 1 + years as i64;
        if n < 0 {
            return None;
        }
        let cycle = u32::try_from(n / 60 + 1).ok()?;
        Self::checked_new(cycle, (n % 60 + 1) as u32)
    }
}

impl fmt::Display for PackedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Chinese date in diary form: plain month number, day and packed year.
///
/// The leap flag of the month is not kept; see [`unpack_from_diary`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiaryDate {
    pub month: u32,
    pub day: u32,
    pub year: PackedYear,
}

impl DiaryDate {
    pub fn new(month: u32, day: u32, year: PackedYear) -> Self {
        Self { month, day, year }
    }
}

/// Converts a date into diary form.
///
/// Leap months are packed under their plain number, so the first day of leap
/// month 6 and of month 6 pack to the same month and day.
///
/// # Example
///
/// ```
/// use taglibro::Date;
/// use taglibro::diary::{pack_for_diary, DiaryDate, PackedYear};
///
/// let date = Date::from_gregorian(2017, 7, 23).unwrap(); // 閏六月初一
/// assert_eq!(
///     Ok(DiaryDate::new(6, 1, PackedYear::new(78, 34))),
///     pack_for_diary(date)
/// );
/// ```
pub fn pack_for_diary(date: Date) -> Result<DiaryDate, Error> {
    let cd = ChineseDate::from_date(date)?;
    Ok(DiaryDate {
        month: cd.month.num(),
        day: cd.day,
        year: PackedYear::new(cd.cycle, cd.year),
    })
}

/// Converts a diary date back into a date.
///
/// The month is read as the leap month of that number when `prefer_leap` is
/// set and the year has such a leap month, and as the common month otherwise.
/// Errors of the underlying conversion are returned unchanged.
///
/// # Example
///
/// ```
/// use taglibro::diary::{unpack_from_diary, DiaryDate, PackedYear};
///
/// let diary = DiaryDate::new(6, 1, PackedYear::new(78, 34));
/// assert_eq!("2017-06-24", unpack_from_diary(&diary, false).unwrap().iso_gregorian());
/// assert_eq!("2017-07-23", unpack_from_diary(&diary, true).unwrap().iso_gregorian());
/// ```
pub fn unpack_from_diary(diary: &DiaryDate, prefer_leap: bool) -> Result<Date, Error> {
    let (cycle, year) = (diary.year.cycle(), diary.year.year());
    let leap = Month::Leap(diary.month);
    let month = if prefer_leap && chinese::leap_months_of(cycle, year)?.contains(&leap) {
        leap
    } else {
        Month::Common(diary.month)
    };
    let cd = ChineseDate {
        cycle,
        year,
        month,
        day: diary.day,
    };
    log::trace!("{diary:?} (prefer leap: {prefer_leap}) -> {cd:?}");
    cd.to_date()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn packing() {
        for cycle in 1..=10 {
            for year in 1..=60 {
                let packed = PackedYear::new(cycle, year);
                assert_eq!(cycle * 100 + year, packed.raw());
                assert_eq!((cycle, year), (packed.cycle(), packed.year()));
                assert_eq!(packed, PackedYear::from_raw(packed.raw()));
            }
        }
    }

    #[test]
    fn offsets() {
        let packed = PackedYear::new(78, 34);
        assert_eq!(Some(packed), packed.offset(0));
        assert_eq!(Some(PackedYear::new(78, 35)), packed.offset(1));
        assert_eq!(Some(PackedYear::new(79, 34)), packed.offset(60));
        assert_eq!(Some(PackedYear::new(77, 34)), packed.offset(-60));
        assert_eq!(None, PackedYear::new(1, 1).offset(-1));
        assert_eq!(None, PackedYear::from_raw(u32::MAX).offset(1));
        assert_eq!(None, PackedYear::from_raw(u32::MAX).offset(0));
        assert_eq!(None, PackedYear::checked_new(u32::MAX / 100 + 1, 1));
        assert_eq!("7834", packed.to_string());
    }

    #[test]
    fn pack() {
        for ((y, m, d), std) in [
            ((2013, 2, 10), (1, 1, 7830)),
            ((2017, 6, 24), (6, 1, 7834)),
            ((2017, 7, 23), (6, 1, 7834)),
            ((2017, 8, 21), (6, 30, 7834)),
            ((2000, 1, 1), (11, 25, 7816)),
        ] {
            let (month, day, year) = std;
            assert_eq!(
                Ok(DiaryDate::new(month, day, PackedYear::from_raw(year))),
                pack_for_diary(gregorian(y, m, d)),
                "{y:04}-{m:02}-{d:02}"
            );
        }
        let early = gregorian(1900, 1, 1);
        assert_eq!(Err(Error::UnsupportedDate(early)), pack_for_diary(early));
    }

    #[test]
    fn common_months_round_trip() {
        for date in gregorian(2014, 1, 1).through(gregorian(2024, 12, 31)) {
            let cd = ChineseDate::from_date(date).unwrap();
            if cd.month.is_leap() {
                continue;
            }
            let diary = pack_for_diary(date).unwrap();
            assert_eq!(Ok(date), unpack_from_diary(&diary, false), "{}", date.iso_gregorian());
        }
    }

    #[test]
    fn leap_months_round_trip() {
        let leap6 = gregorian(2017, 7, 23);
        for date in leap6.through(leap6 + 29) {
            let diary = pack_for_diary(date).unwrap();
            assert_eq!(Ok(date), unpack_from_diary(&diary, true));
            assert_ne!(Ok(date), unpack_from_diary(&diary, false));
        }
        let diary = pack_for_diary(leap6 + 14).unwrap();
        assert_eq!(Ok(gregorian(2017, 7, 8)), unpack_from_diary(&diary, false));
    }

    #[test]
    fn invalid_dates() {
        // 六月 of 2017 has 29 days, 閏六月 has 30.
        let diary = DiaryDate::new(6, 30, PackedYear::new(78, 34));
        assert_eq!(
            Err(Error::InvalidDate {
                cycle: 78,
                year: 34,
                month: Month::Common(6),
                day: 30
            }),
            unpack_from_diary(&diary, false)
        );
        assert_eq!(Ok(gregorian(2017, 8, 21)), unpack_from_diary(&diary, true));

        let diary = DiaryDate::new(13, 1, PackedYear::new(78, 34));
        assert!(matches!(
            unpack_from_diary(&diary, true),
            Err(Error::InvalidDate { .. })
        ));
        let diary = DiaryDate::new(1, 1, PackedYear::new(1, 1));
        assert_eq!(
            Err(Error::UnsupportedYear(-2636)),
            unpack_from_diary(&diary, false)
        );
    }

    #[test]
    fn oversized_years() {
        let diary = DiaryDate::new(1, 1, PackedYear::from_raw(u32::MAX));
        for prefer_leap in [false, true] {
            assert!(matches!(
                unpack_from_diary(&diary, prefer_leap),
                Err(Error::UnsupportedYear(_))
            ));
        }
    }

    #[test]
    fn last_supported_year() {
        let eve = gregorian(2101, 1, 28);
        let diary = pack_for_diary(eve).unwrap();
        assert_eq!(DiaryDate::new(12, diary.day, PackedYear::new(79, 57)), diary);
        assert_eq!(Ok(eve), unpack_from_diary(&diary, false));
        assert_eq!(
            Err(Error::UnsupportedDate(eve + 1)),
            pack_for_diary(eve + 1)
        );
    }
}
