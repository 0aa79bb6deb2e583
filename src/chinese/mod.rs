//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製好的農曆年表排月，見 [`data`]。支持範圍為農曆 1900 年正月初一至 2100 年除夕。

use crate::date::Date;
use crate::error::Error;

pub mod data;
pub mod fmt;

/// 干支紀年以公元前 2637 年為第一甲子首年，公元年加此數即得自該年起算的年數。
const CYCLE_EPOCH_OFFSET: i32 = 2636;

/// 農曆年，自正月初一至次年正月初一前日。
///
/// # 用例
///
/// ```
/// use taglibro::Date;
/// use taglibro::chinese::{LunarYear, Month::*};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LunarYear {
    /// 序號，為正月初一所在的公元年
    pub year: i32,
    /// 全部月首，包括次年正月用以標記本年最末日
    pub months: Vec<NewMoon>,
}
/// 月首信息
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}
/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }

    /// 自舊式小數月序號轉換：整數為平月，加 0.5 為閏月。
    ///
    /// 整數部分須在 `1..=12`，小數部分須為 0 或 0.5，否則回報 [`Error::InvalidMonth`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use taglibro::chinese::Month::{self, *};
    ///
    /// assert_eq!(Ok(Leap(6)), Month::from_fractional(6.5));
    /// assert_eq!(Ok(Common(6)), Month::from_fractional(6.0));
    /// assert!(Month::from_fractional(6.25).is_err());
    /// ```
    pub fn from_fractional(value: f64) -> Result<Self, Error> {
        let num = value.trunc();
        if !(1.0..=12.0).contains(&num) {
            return Err(Error::InvalidMonth(value));
        }
        let frac = value - num;
        if frac == 0.0 {
            Ok(Month::Common(num as u32))
        } else if frac == 0.5 {
            Ok(Month::Leap(num as u32))
        } else {
            Err(Error::InvalidMonth(value))
        }
    }
    /// 轉為舊式小數月序號，閏月加 0.5。
    pub fn fractional(&self) -> f64 {
        self.num() as f64 + if self.is_leap() { 0.5 } else { 0.0 }
    }
}

impl LunarYear {
    /// 取得正月初一在公元 `year` 年的農曆年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use taglibro::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2017).unwrap();
    /// assert_eq!(Some(6), year.leap_month());
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let info = data::YearInfo::get(year)?;
        let mut months = Vec::with_capacity(14);
        let mut date = info.new_year;
        for (num, &days) in (1..).zip(&info.month_days) {
            months.push(NewMoon {
                month: Common(num),
                date,
            });
            date = date + days as i32;
            if info.leap_month == Some(num) {
                months.push(NewMoon {
                    month: Leap(num),
                    date,
                });
                date = date + info.leap_days as i32;
            }
        }
        months.push(NewMoon {
            month: Common(1),
            date,
        });

        Some(LunarYear { year, months })
    }
    /// 依特定日期取得其所在農曆年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use taglibro::Date;
    /// use taglibro::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(1999, year.year);
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        // 公曆年初的日期可能屬上一農曆年，年表末年亦然
        let (y, _, _) = date.gregorian();
        let mut y = y.min(data::LAST_YEAR);
        loop {
            let year = Self::new(y)?;

            let start = year.first_day();
            let end = year.end();

            if (start..end).contains(&date) {
                return Some(year);
            }

            y += if date < start { -1 } else { 1 };
        }
    }

    /// 本年正月初一
    pub fn first_day(&self) -> Date {
        self.months[0].date
    }
    /// 次年正月初一，即本年最末日的次日
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }

    /// 閏月月序號，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month.is_leap())
            .map(|m| m.month.num())
    }

    /// 取得某月的日數，該年無此月則返回 `None`。
    pub fn days_in(&self, month: Month) -> Option<u32> {
        let idx = self.months[..self.months.len() - 1]
            .iter()
            .position(|m| m.month == month)?;
        Some((self.months[idx + 1].date - self.months[idx].date) as u32)
    }

    /// 取得給定日期在該年的年月日，返回格式為 `(年, 月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use taglibro::Date;
    /// use taglibro::chinese::{LunarYear, Month::*};
    ///
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    /// let year = LunarYear::new(2017).unwrap();
    ///
    /// assert_eq!(Ok((2017, Leap(6), 1)), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        if date < self.first_day() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = &self.months[idx];
        let d = (date - m.date + 1) as u32;
        Ok((self.year, m.month, d))
    }

    /// 取得該年某月某日的日期。
    ///
    /// 若該年無此月，或日序號超出該月日數，則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use taglibro::chinese::{LunarYear, Month::*};
    ///
    /// let year = LunarYear::new(2017).unwrap();
    ///
    /// assert_eq!("2017-07-23", year.date_for(Leap(6), 1).unwrap().iso_gregorian());
    /// assert_eq!(None, year.date_for(Leap(7), 1));
    /// ```
    pub fn date_for(&self, month: Month, day: u32) -> Option<Date> {
        let days = self.days_in(month)?;
        if !(1..=days).contains(&day) {
            return None;
        }
        let start = self.months.iter().find(|m| m.month == month)?.date;
        Some(start + (day - 1) as i32)
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 以干支週期表示的農曆日期。
///
/// `cycle` 為自公元前 2637 年起算的第幾個六十年週期，`year` 為週期內年序（`1..=60`，即年干支序號）。
///
/// # 用例
///
/// ```
/// use taglibro::Date;
/// use taglibro::chinese::{ChineseDate, Month::*};
///
/// let date = Date::from_gregorian(2017, 7, 23).unwrap();
/// let cd = ChineseDate::from_date(date).unwrap();
///
/// assert_eq!((78, 34, Leap(6), 1), (cd.cycle, cd.year, cd.month, cd.day));
/// assert_eq!(Ok(date), cd.to_date());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChineseDate {
    pub cycle: u32,
    pub year: u32,
    pub month: Month,
    pub day: u32,
}

impl ChineseDate {
    /// 取得給定日期的農曆日期。
    ///
    /// 超出年表範圍則回報 [`Error::UnsupportedDate`]。
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let lunar = LunarYear::from_date(date).ok_or(Error::UnsupportedDate(date))?;
        let (y, month, day) = lunar
            .ymd_for(date)
            .map_err(|_| Error::UnsupportedDate(date))?;
        let (cycle, year) = cycle_year(y);
        log::trace!(
            "{} -> cycle {cycle}, year {year}, {month:?}, day {day}",
            date.iso_gregorian()
        );
        Ok(ChineseDate {
            cycle,
            year,
            month,
            day,
        })
    }

    /// 取得該農曆日期對應的日期。
    ///
    /// 該年無此月或無此日則回報 [`Error::InvalidDate`]，超出年表範圍則回報 [`Error::UnsupportedYear`]。
    pub fn to_date(&self) -> Result<Date, Error> {
        let lunar = self.lunar_year()?;
        lunar
            .date_for(self.month, self.day)
            .ok_or(Error::InvalidDate {
                cycle: self.cycle,
                year: self.year,
                month: self.month,
                day: self.day,
            })
    }

    /// 正月初一所在的公元年，超出 `i32` 範圍則為 `None`。
    pub fn gregorian_year(&self) -> Option<i32> {
        gregorian_year(self.cycle, self.year)
    }

    fn lunar_year(&self) -> Result<LunarYear, Error> {
        supported_year(self.cycle, self.year)
    }
}

/// 取得某週期某年的農曆年，超出年表範圍則回報 [`Error::UnsupportedYear`]。
///
/// 公元年超出 `i32` 範圍時以 `i32::MAX` 回報。
fn supported_year(cycle: u32, year: u32) -> Result<LunarYear, Error> {
    let y = gregorian_year(cycle, year).unwrap_or(i32::MAX);
    LunarYear::new(y).ok_or(Error::UnsupportedYear(y))
}

/// 列出某週期某年的全部閏月，無閏月則為空。
///
/// 超出年表範圍則回報 [`Error::UnsupportedYear`]。
///
/// # 用例
///
/// ```
/// use taglibro::chinese::{leap_months_of, Month::*};
///
/// assert_eq!(Ok(vec![Leap(6)]), leap_months_of(78, 34)); // 2017 丁酉
/// assert_eq!(Ok(vec![]), leap_months_of(78, 17)); // 2000 庚辰
/// ```
pub fn leap_months_of(cycle: u32, year: u32) -> Result<Vec<Month>, Error> {
    let lunar = supported_year(cycle, year)?;
    Ok(lunar
        .months
        .iter()
        .map(|m| m.month)
        .filter(Month::is_leap)
        .collect())
}

/// 公元年轉為 `(週期, 週期內年序)`。
///
/// # 用例
///
/// ```
/// use taglibro::chinese::cycle_year;
///
/// assert_eq!((78, 17), cycle_year(2000));
/// ```
pub fn cycle_year(year: i32) -> (u32, u32) {
    let n = year + CYCLE_EPOCH_OFFSET;
    ((n.div_euclid(60) + 1) as u32, (n.rem_euclid(60) + 1) as u32)
}

/// `(週期, 週期內年序)` 轉為公元年，見 [`cycle_year`]。
///
/// 結果超出 `i32` 範圍則返回 `None`。
///
/// # 用例
///
/// ```
/// use taglibro::chinese::gregorian_year;
///
/// assert_eq!(Some(2000), gregorian_year(78, 17));
/// assert_eq!(None, gregorian_year(u32::MAX, 1));
/// ```
pub fn gregorian_year(cycle: u32, year: u32) -> Option<i32> {
    i32::try_from(cycle)
        .ok()?
        .checked_sub(1)?
        .checked_mul(60)?
        .checked_add(i32::try_from(year).ok()?)?
        .checked_sub(1 + CYCLE_EPOCH_OFFSET)
}

/// 取得所給公元年的干支。
///
/// # 用例
///
/// ```
/// use taglibro::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
