//! Chinese calendar support for date-tagged diaries.
//!
//! Diary engines usually match entries against a fixed month/day/year shape.
//! Chinese dates are fitted into that shape by packing the sexagenary cycle
//! and the year within it into one number, see [`PackedYear`] and
//! [`DiaryDate`]. The engine is handed a [`DiaryCalendar`] and needs no other
//! knowledge of the Chinese calendar.
//!
//! # Examples
//!
//! ```
//! use taglibro::Date;
//! use taglibro::diary::{ChineseDiary, DiaryCalendar, EntryKind};
//!
//! let diary = ChineseDiary::default();
//! let date = Date::from_gregorian(2013, 2, 10).unwrap();
//!
//! let packed = diary.to_diary_date(date).unwrap();
//! assert_eq!((1, 1, 7830), (packed.month, packed.day, packed.year.raw()));
//! assert_eq!(Ok(date), diary.to_date(&packed, false));
//!
//! assert_eq!("C正月 1, 7830", diary.entry_header(date, EntryKind::Single, false).unwrap());
//! assert_eq!("癸巳年正月初一", diary.date_string(date).unwrap());
//! ```

use crate::chinese::{self, ChineseDate};
use crate::date::Date;
use crate::error::Error;

mod anniversary;
mod codec;
mod config;
pub mod entry;
pub mod mark;

pub use anniversary::{anniversary_difference, Elapsed};
pub use codec::{pack_for_diary, unpack_from_diary, DiaryDate, PackedYear};
pub use config::{DateStyle, DiaryConfig};
pub use entry::EntryKind;
pub use mark::{mark_date_pattern, Marker, Pattern};

/// A calendar system as seen by a diary engine.
pub trait DiaryCalendar {
    /// Names of months 1 through 12.
    fn month_names(&self) -> &[String];
    /// Prefix marking diary entries that use this calendar.
    fn entry_symbol(&self) -> &str;
    /// Converts `date` into this calendar's diary form.
    fn to_diary_date(&self, date: Date) -> Result<DiaryDate, Error>;
    /// Converts a diary date back, reading a leap month when `prefer_leap` is set.
    fn to_date(&self, diary: &DiaryDate, prefer_leap: bool) -> Result<Date, Error>;

    /// Marks the displayed dates matching `pattern`.
    fn mark_pattern<M: Marker>(
        &self,
        pattern: &Pattern,
        marker: &mut M,
        mark: &M::Mark,
    ) -> Result<(), Error>;
}

/// The Chinese calendar for diary engines.
#[derive(Debug, Clone, Default)]
pub struct ChineseDiary {
    pub config: DiaryConfig,
}

impl ChineseDiary {
    /// Creates a `ChineseDiary` with a validated configuration.
    pub fn new(config: DiaryConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Describes `date` in the Chinese calendar, e.g. `癸巳年正月初一`.
    pub fn date_string(&self, date: Date) -> Result<String, Error> {
        Ok(chinese::fmt::date(&ChineseDate::from_date(date)?))
    }

    /// Header of a new diary entry for `date`, see [`entry::header`].
    pub fn entry_header(
        &self,
        date: Date,
        kind: EntryKind,
        nonmarking: bool,
    ) -> Result<String, Error> {
        entry::header(&self.config, &pack_for_diary(date)?, kind, nonmarking)
    }
}

impl DiaryCalendar for ChineseDiary {
    fn month_names(&self) -> &[String] {
        &self.config.month_names
    }
    fn entry_symbol(&self) -> &str {
        &self.config.entry_symbol
    }
    fn to_diary_date(&self, date: Date) -> Result<DiaryDate, Error> {
        pack_for_diary(date)
    }
    fn to_date(&self, diary: &DiaryDate, prefer_leap: bool) -> Result<Date, Error> {
        unpack_from_diary(diary, prefer_leap)
    }
    fn mark_pattern<M: Marker>(
        &self,
        pattern: &Pattern,
        marker: &mut M,
        mark: &M::Mark,
    ) -> Result<(), Error> {
        mark_date_pattern(pattern, self, marker, mark)
    }
}
