use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{FixedOffset, Local, NaiveDate};
use tracing::warn;

use lunaria_annotate::{NoRules, SpecialDayRules, TableRules};
use lunaria_coordinator::{CoordinatorError, RetryPolicy, load_with_retry};
use lunaria_dataset::{BoundaryDataset, JsonFileSource, Location, approximate_dataset};

use crate::config::LunariaConfig;

/// Everything the commands need before touching the coordinator.
pub struct Session {
    pub config: LunariaConfig,
    pub location: Location,
    pub rules: Box<dyn SpecialDayRules>,
    pub dataset: BoundaryDataset,
    pub today: NaiveDate,
}

/// Loads config, rule table, and boundary dataset.
///
/// The dataset fetch polls the collaborator snapshot within the configured
/// retry budget; when the budget is exhausted the session degrades to the
/// approximate fixed-length dataset instead of failing.
pub fn bootstrap(config_path: &Path) -> Result<Session> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config: {}", config_path.display()))?;
    let config: LunariaConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config: {}", config_path.display()))?;

    let rules: Box<dyn SpecialDayRules> = match &config.data.special_days {
        Some(path) => Box::new(
            TableRules::load(path)
                .with_context(|| format!("failed to load rule table: {}", path.display()))?,
        ),
        None => Box::new(NoRules),
    };

    let location = Location::new(
        config.location.lat,
        config.location.lon,
        config.location.label.clone(),
    );
    let policy = RetryPolicy {
        interval: Duration::from_millis(config.retry.interval_ms),
        max_attempts: config.retry.max_attempts,
    };
    let source = JsonFileSource::new(&config.data.boundaries);
    let today = Local::now().date_naive();

    let dataset = match load_with_retry(&source, &location, &policy, thread::sleep, || false) {
        Ok(ds) => ds,
        Err(CoordinatorError::DatasetUnavailable { attempts, reason }) => {
            warn!(attempts, reason = %reason, "degrading to approximate fixed-length display");
            let offset = FixedOffset::east_opt(0).context("UTC offset")?;
            approximate_dataset(location.clone(), &config.location.timezone, offset, today)
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Session {
        config,
        location,
        rules,
        dataset,
        today,
    })
}
