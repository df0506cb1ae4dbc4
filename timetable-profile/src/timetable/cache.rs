//! Per-date memoization of day views.
//!
//! Decoding the trips and connections of a day is cheap but not free, and
//! the profile computation asks for them repeatedly. The pair is cached as a
//! single value so that switching dates never mixes views of two days.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache as MokaCache;
use tracing::trace;

use super::traits::{
    Connections, Platforms, Routes, StationAliases, Stations, Timetable, Transfers, Trips,
};
use crate::error::{Result, TimetableError};

/// Configuration for the day cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of days kept.
    pub max_days: u64,

    /// Evict a day after this long without access.
    pub time_to_idle: Option<Duration>,
}

impl CacheConfig {
    pub fn with_max_days(mut self, max_days: u64) -> Self {
        self.max_days = max_days;
        self
    }

    pub fn with_time_to_idle(mut self, time_to_idle: Duration) -> Self {
        self.time_to_idle = Some(time_to_idle);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_days: 1,
            time_to_idle: None,
        }
    }
}

/// The views of one day, cached together.
#[derive(Clone)]
struct DayViews {
    trips: Arc<dyn Trips>,
    connections: Arc<dyn Connections>,
}

/// A timetable that memoizes the day views of another.
///
/// Static views are delegated untouched.
pub struct CachedTimetable<T> {
    inner: T,
    days: MokaCache<NaiveDate, DayViews>,
}

impl<T: Timetable> CachedTimetable<T> {
    pub fn new(inner: T, config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_days);
        if let Some(time_to_idle) = config.time_to_idle {
            builder = builder.time_to_idle(time_to_idle);
        }

        Self {
            inner,
            days: builder.build(),
        }
    }

    /// The wrapped timetable.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Number of days currently cached.
    pub fn cached_days(&self) -> u64 {
        self.days.run_pending_tasks();
        self.days.entry_count()
    }

    /// Drop every cached day.
    pub fn invalidate_all(&self) {
        self.days.invalidate_all();
    }

    fn day(&self, date: NaiveDate) -> Result<DayViews> {
        self.days
            .try_get_with(date, || -> Result<DayViews> {
                trace!(%date, "Decoding day views");
                Ok(DayViews {
                    trips: self.inner.trips_for(date)?,
                    connections: self.inner.connections_for(date)?,
                })
            })
            .map_err(|e: Arc<TimetableError>| (*e).clone())
    }
}

impl<T: Timetable> Timetable for CachedTimetable<T> {
    fn stations(&self) -> &dyn Stations {
        self.inner.stations()
    }

    fn station_aliases(&self) -> &dyn StationAliases {
        self.inner.station_aliases()
    }

    fn platforms(&self) -> &dyn Platforms {
        self.inner.platforms()
    }

    fn routes(&self) -> &dyn Routes {
        self.inner.routes()
    }

    fn transfers(&self) -> &dyn Transfers {
        self.inner.transfers()
    }

    fn trips_for(&self, date: NaiveDate) -> Result<Arc<dyn Trips>> {
        Ok(self.day(date)?.trips)
    }

    fn connections_for(&self, date: NaiveDate) -> Result<Arc<dyn Connections>> {
        Ok(self.day(date)?.connections)
    }
}
