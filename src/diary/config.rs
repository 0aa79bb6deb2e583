//! Settings for presenting Chinese dates to a diary engine.

use serde::{Deserialize, Serialize};

use crate::chinese::fmt;
use crate::error::Error;

/// Order of fields when writing dates into diary entries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Month name, day, year.
    #[default]
    American,
    /// Day, month name, year.
    European,
    /// Numeric year-month-day.
    Iso,
}

/// Diary settings for the Chinese calendar.
///
/// Missing fields take their defaults when read from TOML.
///
/// # Example
///
/// ```
/// use taglibro::diary::{DateStyle, DiaryConfig};
///
/// let config = DiaryConfig::from_toml(r#"
///     entry_symbol = "L"
///     date_style = "european"
/// "#).unwrap();
///
/// assert_eq!("L", config.entry_symbol);
/// assert_eq!(DateStyle::European, config.date_style);
/// assert_eq!("正月", config.month_names[0]);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryConfig {
    /// Prefix telling the diary engine an entry uses this calendar.
    pub entry_symbol: String,
    /// Names of months 1 through 12.
    pub month_names: Vec<String>,
    pub date_style: DateStyle,
    /// Prefix of entries that should not be marked in the calendar.
    pub nonmarking_symbol: String,
    /// Prefix of entries computed by an expression rather than a date.
    pub sexp_symbol: String,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            entry_symbol: "C".to_owned(),
            month_names: fmt::month_names(),
            date_style: DateStyle::default(),
            nonmarking_symbol: "&".to_owned(),
            sexp_symbol: "%%".to_owned(),
        }
    }
}

impl DiaryConfig {
    /// Reads and validates a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that there are exactly 12 month names and a non-empty entry
    /// symbol.
    pub fn validate(&self) -> Result<(), Error> {
        if self.month_names.len() != 12 {
            return Err(Error::Config(format!(
                "expected 12 month names, got {}",
                self.month_names.len()
            )));
        }
        if self.entry_symbol.is_empty() {
            return Err(Error::Config("entry symbol must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Name of month `month`, `None` if not in `1..=12`.
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_names.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DiaryConfig::from_toml("").unwrap();
        assert_eq!(DiaryConfig::default(), config);
        assert_eq!("C", config.entry_symbol);
        assert_eq!(DateStyle::American, config.date_style);
        assert_eq!(Some("冬月"), config.month_name(11));
        assert_eq!(None, config.month_name(0));
        assert_eq!(None, config.month_name(13));
    }

    #[test]
    fn custom_month_names() {
        let names: Vec<_> = (1..=12).map(|m| format!("\"M{m}\"")).collect();
        let text = format!("month_names = [{}]\ndate_style = \"iso\"", names.join(", "));
        let config = DiaryConfig::from_toml(&text).unwrap();
        assert_eq!(Some("M12"), config.month_name(12));
        assert_eq!(DateStyle::Iso, config.date_style);
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(
            Err(Error::Config("expected 12 month names, got 2".to_owned())),
            DiaryConfig::from_toml(r#"month_names = ["a", "b"]"#)
        );
        assert_eq!(
            Err(Error::Config("entry symbol must not be empty".to_owned())),
            DiaryConfig::from_toml(r#"entry_symbol = """#)
        );
        assert!(matches!(
            DiaryConfig::from_toml("date_style = \"martian\""),
            Err(Error::ConfigParse(_))
        ));
    }
}
