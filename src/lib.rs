//! Chinese lunisolar calendar support for date-tagged diaries.
//!
//! Diary engines written for month/day/year dates can list, mark and insert
//! entries in the Chinese calendar through [`diary::ChineseDiary`], which
//! packs Chinese dates into that shape and back. The calendar itself lives in
//! [`chinese`] and covers Chinese years 1900 through 2100.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use taglibro::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!(730120, date.absolute());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use taglibro::Date;
//! use taglibro::chinese::{LunarYear, Month::*};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let year = LunarYear::from_date(date).unwrap();
//!
//! assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
//! ```
//!
//! Diary dates:
//!
//! ```
//! use taglibro::Date;
//! use taglibro::diary::{pack_for_diary, unpack_from_diary};
//!
//! let date = Date::from_gregorian(2017, 7, 23).unwrap(); // 閏六月初一
//! let packed = pack_for_diary(date).unwrap();
//!
//! assert_eq!((6, 1, 7834), (packed.month, packed.day, packed.year.raw()));
//! assert_eq!(Ok(date), unpack_from_diary(&packed, true));
//! ```

pub mod chinese;
pub mod date;
pub mod diary;
pub mod error;

pub use date::Date;
pub use error::Error;
