//! Marking dates matched by a diary pattern in a displayed calendar.
//!
//! The calendar display itself belongs to the host and is reached through
//! [`Marker`]. The routines here only decide which visible dates a pattern
//! matches, for any [`DiaryCalendar`].

use std::ops::RangeInclusive;

use super::{DiaryCalendar, DiaryDate, PackedYear};
use crate::date::Date;
use crate::error::Error;

/// A displayed calendar that dates can be marked in.
pub trait Marker {
    /// Whatever the host uses to mark a date, e.g. a face name.
    type Mark;

    /// Dates currently displayed.
    fn visible(&self) -> RangeInclusive<Date>;
    fn mark(&mut self, date: Date, mark: &Self::Mark);
}

/// A diary date pattern, `None` fields match anything.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Pattern {
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub year: Option<PackedYear>,
}

impl Pattern {
    pub fn new(month: Option<u32>, day: Option<u32>, year: Option<PackedYear>) -> Self {
        Self { month, day, year }
    }
    /// Builds a pattern from raw diary fields, where `0` is the wildcard.
    ///
    /// # Example
    ///
    /// ```
    /// use taglibro::diary::{Pattern, PackedYear};
    ///
    /// let pattern = Pattern::from_fields(0, 15, 7834);
    /// assert_eq!(None, pattern.month);
    /// assert_eq!(Some(15), pattern.day);
    /// assert_eq!(Some(PackedYear::new(78, 34)), pattern.year);
    /// ```
    pub fn from_fields(month: u32, day: u32, year: u32) -> Self {
        let field = |v| if v == 0 { None } else { Some(v) };
        Self {
            month: field(month),
            day: field(day),
            year: field(year).map(PackedYear::from_raw),
        }
    }

    pub fn matches(&self, date: &DiaryDate) -> bool {
        self.month.is_none_or(|m| m == date.month)
            && self.day.is_none_or(|d| d == date.day)
            && self.year.is_none_or(|y| y == date.year)
    }
}

/// Marks every visible date whose diary form matches `pattern`.
///
/// Visible dates the calendar cannot convert are skipped.
pub fn mark_complex<C, M>(pattern: &Pattern, calendar: &C, marker: &mut M, mark: &M::Mark)
where
    C: DiaryCalendar + ?Sized,
    M: Marker,
{
    let visible = marker.visible();
    for date in visible.start().through(*visible.end()) {
        match calendar.to_diary_date(date) {
            Ok(diary) if pattern.matches(&diary) => marker.mark(date, mark),
            Ok(_) => {}
            Err(e) => log::debug!("skipping {}: {e}", date.iso_gregorian()),
        }
    }
}

/// Marks the dates matched by `pattern`, converting back with the given leap
/// preference.
///
/// A pattern with a wildcard month or day is handled by [`mark_complex`]. A
/// fully specified pattern is converted directly and conversion errors are
/// returned. When only the year is a wildcard, the years around the middle of
/// the display are tried and years lacking that date are skipped.
pub fn mark_one<C, M>(
    pattern: &Pattern,
    calendar: &C,
    prefer_leap: bool,
    marker: &mut M,
    mark: &M::Mark,
) -> Result<(), Error>
where
    C: DiaryCalendar + ?Sized,
    M: Marker,
{
    let (Some(month), Some(day)) = (pattern.month, pattern.day) else {
        mark_complex(pattern, calendar, marker, mark);
        return Ok(());
    };
    let visible = marker.visible();

    if let Some(year) = pattern.year {
        let date = calendar.to_date(&DiaryDate::new(month, day, year), prefer_leap)?;
        if visible.contains(&date) {
            marker.mark(date, mark);
        }
        return Ok(());
    }

    let middle = *visible.start() + (*visible.end() - *visible.start()) / 2;
    let year = calendar.to_diary_date(middle)?.year;
    for year in [-1, 0, 1].into_iter().filter_map(|n| year.offset(n)) {
        match calendar.to_date(&DiaryDate::new(month, day, year), prefer_leap) {
            Ok(date) if visible.contains(&date) => marker.mark(date, mark),
            Ok(_) => {}
            Err(e) => log::debug!("no {month}/{day} in year {year}: {e}"),
        }
    }
    Ok(())
}

/// Marks the dates matched by `pattern`, counting both the common and the
/// leap month of the pattern's month number.
///
/// With a wildcard month a single scan already covers leap months, since
/// diary dates do not distinguish them.
///
/// # Example
///
/// ```
/// use std::ops::RangeInclusive;
/// use taglibro::Date;
/// use taglibro::diary::{mark_date_pattern, ChineseDiary, Marker, Pattern};
///
/// struct Window(Vec<Date>);
/// impl Marker for Window {
///     type Mark = ();
///     fn visible(&self) -> RangeInclusive<Date> {
///         Date::from_gregorian(2017, 6, 1).unwrap()..=Date::from_gregorian(2017, 8, 31).unwrap()
///     }
///     fn mark(&mut self, date: Date, _: &()) {
///         self.0.push(date);
///     }
/// }
///
/// let mut window = Window(vec![]);
/// let pattern = Pattern::from_fields(6, 1, 7834);
/// mark_date_pattern(&pattern, &ChineseDiary::default(), &mut window, &()).unwrap();
///
/// let marked: Vec<_> = window.0.iter().map(Date::iso_gregorian).collect();
/// assert_eq!(vec!["2017-06-24", "2017-07-23"], marked);
/// ```
pub fn mark_date_pattern<C, M>(
    pattern: &Pattern,
    calendar: &C,
    marker: &mut M,
    mark: &M::Mark,
) -> Result<(), Error>
where
    C: DiaryCalendar + ?Sized,
    M: Marker,
{
    log::debug!("marking {pattern:?}");
    mark_one(pattern, calendar, false, marker, mark)?;
    if pattern.month.is_some() {
        mark_one(pattern, calendar, true, marker, mark)?;
    }
    Ok(())
}
