//! Special-day classification via an external rule table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::RuleError;

/// Lookup from a Gregorian date to zero or more special-day tag strings.
///
/// The rule table is owned by an external source (festival tables,
/// star-crossing ephemerides); this engine only queries it, once per
/// rendered day cell. Implementations must be deterministic for a given
/// date so both grid views tag the same underlying day identically.
pub trait SpecialDayRules {
    /// Tag strings for the given date, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the source cannot classify the date.
    /// Callers isolate failures per cell; one bad date never blocks the
    /// rest of a grid.
    fn classes_for(&self, date: NaiveDate) -> Result<Vec<String>, RuleError>;
}

/// Rule source with no special days. Used until a real table is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl SpecialDayRules for NoRules {
    fn classes_for(&self, _date: NaiveDate) -> Result<Vec<String>, RuleError> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    days: HashMap<String, Vec<String>>,
}

/// In-memory rule table parsed from a JSON map of `"YYYY-MM-DD"` to tags.
#[derive(Debug, Clone, Default)]
pub struct TableRules {
    days: HashMap<NaiveDate, Vec<String>>,
}

impl TableRules {
    /// Builds a table from (date, tags) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NaiveDate, Vec<String>)>) -> Self {
        Self {
            days: pairs.into_iter().collect(),
        }
    }

    /// Loads a table from a JSON file of shape
    /// `{"days": {"2025-04-13": ["crossing:spica"]}}`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the file cannot be read, parsed, or
    /// contains an unparseable date key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| RuleError::Source {
            reason: format!("{}: {e}", path.display()),
        })?;
        let file: RuleFile = serde_json::from_str(&raw).map_err(|e| RuleError::Source {
            reason: e.to_string(),
        })?;
        let mut days = HashMap::with_capacity(file.days.len());
        for (key, tags) in file.days {
            let date = key
                .parse::<NaiveDate>()
                .map_err(|_| RuleError::BadDateKey { key: key.clone() })?;
            days.insert(date, tags);
        }
        Ok(Self { days })
    }
}

impl SpecialDayRules for TableRules {
    fn classes_for(&self, date: NaiveDate) -> Result<Vec<String>, RuleError> {
        Ok(self.days.get(&date).cloned().unwrap_or_default())
    }
}
