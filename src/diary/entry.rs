//! Headers of new diary entries for a Chinese date.
//!
//! Only the header text is produced; putting it into the diary is up to the
//! host.

use super::{DateStyle, DiaryConfig, DiaryDate};
use crate::error::Error;

/// Which dates a new entry should apply to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EntryKind {
    /// That date only.
    Single,
    /// The same day of every month.
    Monthly,
    /// The same month and day of every year.
    Yearly,
    /// Yearly, counting the years since that date.
    Anniversary,
}

/// Builds the header of a new entry for `date`.
///
/// `nonmarking` prefixes the configured nonmarking symbol, so the host will
/// not mark the entry in the calendar.
pub fn header(
    config: &DiaryConfig,
    date: &DiaryDate,
    kind: EntryKind,
    nonmarking: bool,
) -> Result<String, Error> {
    use DateStyle::*;
    use EntryKind::*;

    let month_name = config
        .month_name(date.month)
        .ok_or(Error::InvalidMonth(date.month as f64))?;
    let (m, d, y) = (date.month, date.day, date.year);

    let text = match (kind, config.date_style) {
        (Single, American) => format!("{month_name} {d}, {y}"),
        (Single, European) => format!("{d} {month_name} {y}"),
        (Single, Iso) => format!("{y}-{m}-{d}"),
        (Monthly, American | Iso) => format!("* {d}"),
        (Monthly, European) => format!("{d} *"),
        (Yearly, American) => format!("{month_name} {d}"),
        (Yearly, European) => format!("{d} {month_name}"),
        (Yearly, Iso) => format!("{m}-{d}"),
        (Anniversary, style) => {
            let args = match style {
                American => format!("{m} {d} {y}"),
                European => format!("{d} {m} {y}"),
                Iso => format!("{y} {m} {d}"),
            };
            format!("{}(diary-chinese-anniversary {args})", config.sexp_symbol)
        }
    };

    let mut rt = String::new();
    if nonmarking {
        rt += &config.nonmarking_symbol;
    }
    if kind != Anniversary {
        rt += &config.entry_symbol;
    }
    rt += &text;
    Ok(rt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::PackedYear;

    fn config(style: DateStyle) -> DiaryConfig {
        DiaryConfig {
            date_style: style,
            ..DiaryConfig::default()
        }
    }

    #[test]
    fn headers() {
        use DateStyle::*;
        use EntryKind::*;
        let date = DiaryDate::new(1, 15, PackedYear::new(78, 30));
        for (kind, style, std) in [
            (Single, American, "C正月 15, 7830"),
            (Single, European, "C15 正月 7830"),
            (Single, Iso, "C7830-1-15"),
            (Monthly, American, "C* 15"),
            (Monthly, European, "C15 *"),
            (Monthly, Iso, "C* 15"),
            (Yearly, American, "C正月 15"),
            (Yearly, European, "C15 正月"),
            (Yearly, Iso, "C1-15"),
            (Anniversary, American, "%%(diary-chinese-anniversary 1 15 7830)"),
            (Anniversary, European, "%%(diary-chinese-anniversary 15 1 7830)"),
            (Anniversary, Iso, "%%(diary-chinese-anniversary 7830 1 15)"),
        ] {
            assert_eq!(
                Ok(std.to_owned()),
                header(&config(style), &date, kind, false),
                "{kind:?} {style:?}"
            );
        }
    }

    #[test]
    fn nonmarking() {
        let date = DiaryDate::new(12, 30, PackedYear::new(78, 34));
        let config = DiaryConfig::default();
        assert_eq!(
            Ok("&C臘月 30, 7834".to_owned()),
            header(&config, &date, EntryKind::Single, true)
        );
        assert_eq!(
            Ok("&%%(diary-chinese-anniversary 12 30 7834)".to_owned()),
            header(&config, &date, EntryKind::Anniversary, true)
        );
    }

    #[test]
    fn unnamed_month() {
        let date = DiaryDate::new(13, 1, PackedYear::new(78, 34));
        assert_eq!(
            Err(Error::InvalidMonth(13.0)),
            header(&DiaryConfig::default(), &date, EntryKind::Single, false)
        );
    }
}
