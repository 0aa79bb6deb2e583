//! Anniversaries stored as Chinese diary dates.

use super::{unpack_from_diary, DiaryDate, PackedYear};
use crate::chinese::ChineseDate;
use crate::date::Date;
use crate::error::Error;

/// How long ago an anniversary started.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Elapsed {
    /// Chinese years since the stored year.
    Years(u32),
    /// No year was stored, the anniversary recurs every year without a count.
    Recurring,
}

impl Elapsed {
    /// The elapsed years as an English ordinal, e.g. `"3rd"`.
    ///
    /// `Recurring` has no ordinal.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::diary::Elapsed;
    ///
    /// assert_eq!(Some("22nd".to_owned()), Elapsed::Years(22).ordinal());
    /// assert_eq!(None, Elapsed::Recurring.ordinal());
    /// ```
    pub fn ordinal(&self) -> Option<String> {
        let Elapsed::Years(n) = *self else {
            return None;
        };
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        Some(format!("{n}{suffix}"))
    }
}

/// Checks whether `today` is an anniversary of the Chinese date `month`/`day`
/// of `year`.
///
/// The month matches regardless of leap status, so an anniversary in month 6
/// also falls on the same day of leap month 6. Without a `year` every match is
/// [`Elapsed::Recurring`]. With a year, `today` must lie in a later Chinese
/// year, otherwise `None` is returned.
///
/// # Example
///
/// ```
/// use taglibro::Date;
/// use taglibro::diary::{anniversary_difference, Elapsed, PackedYear};
///
/// let today = Date::from_gregorian(2017, 1, 28).unwrap(); // 丁酉年正月初一
/// assert_eq!(
///     Ok(Some(Elapsed::Years(4))),
///     anniversary_difference(1, 1, Some(PackedYear::new(78, 30)), today)
/// );
/// ```
pub fn anniversary_difference(
    month: u32,
    day: u32,
    year: Option<PackedYear>,
    today: Date,
) -> Result<Option<Elapsed>, Error> {
    let current = ChineseDate::from_date(today)?;
    if current.month.num() != month || current.day != day {
        return Ok(None);
    }
    let Some(year) = year else {
        return Ok(Some(Elapsed::Recurring));
    };

    let start = ChineseDate::from_date(unpack_from_diary(
        &DiaryDate::new(month, day, year),
        false,
    )?)?;
    let diff = 60 * (current.cycle as i64 - start.cycle as i64)
        + (current.year as i64 - start.year as i64);
    log::trace!("anniversary {month}/{day}/{year}: {diff} years");
    Ok(u32::try_from(diff)
        .ok()
        .filter(|&n| n > 0)
        .map(Elapsed::Years))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chinese(cycle: u32, year: u32, month: u32, day: u32) -> Date {
        use crate::chinese::Month::Common;
        ChineseDate {
            cycle,
            year,
            month: Common(month),
            day,
        }
        .to_date()
        .unwrap()
    }

    #[test]
    fn recurring() {
        let today = chinese(78, 30, 1, 1);
        assert_eq!(
            Ok(Some(Elapsed::Recurring)),
            anniversary_difference(1, 1, None, today)
        );
    }

    #[test]
    fn elapsed_years() {
        let today = chinese(78, 30, 1, 1);
        for (year, std) in [
            (PackedYear::new(78, 29), Some(Elapsed::Years(1))),
            (PackedYear::new(77, 30), Some(Elapsed::Years(60))),
            (PackedYear::new(77, 50), Some(Elapsed::Years(40))),
            (PackedYear::new(78, 30), None),
            (PackedYear::new(78, 31), None),
        ] {
            assert_eq!(
                Ok(std),
                anniversary_difference(1, 1, Some(year), today),
                "{year}"
            );
        }
    }

    #[test]
    fn day_or_month_mismatch() {
        let today = chinese(78, 30, 1, 2);
        assert_eq!(Ok(None), anniversary_difference(1, 1, None, today));
        assert_eq!(
            Ok(None),
            anniversary_difference(1, 1, Some(PackedYear::new(77, 1)), today)
        );
        assert_eq!(Ok(None), anniversary_difference(2, 2, None, today));
    }

    #[test]
    fn leap_month_counts() {
        // 閏六月十五, 2017
        let today = Date::from_gregorian(2017, 8, 6).unwrap();
        assert_eq!(
            Ok(Some(Elapsed::Years(2))),
            anniversary_difference(6, 15, Some(PackedYear::new(78, 32)), today)
        );
        assert_eq!(
            Ok(Some(Elapsed::Recurring)),
            anniversary_difference(6, 15, None, today)
        );
    }

    #[test]
    fn ordinals() {
        for (n, std) in [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (101, "101st"),
            (111, "111th"),
        ] {
            assert_eq!(Some(std.to_owned()), Elapsed::Years(n).ordinal());
        }
    }
}
