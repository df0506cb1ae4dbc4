//! Indexed timetable collections.
//!
//! Each collection is a capability set over dense ids `0..size()`. The
//! buffered views implement them over raw records; tests and other sources
//! can implement them over anything else.
//!
//! Stops share one id space: ids below the station count are stations, the
//! following ids are platforms offset by the station count.

use std::sync::Arc;

use chrono::NaiveDate;

use super::vehicle::Vehicle;
use crate::bits::PackedRange;
use crate::error::{Result, TimetableError};

// ============================================================================
// Collections
// ============================================================================

/// A collection addressed by dense integer ids.
pub trait Indexed {
    /// Number of elements; valid ids are `0..size()`.
    fn size(&self) -> usize;
}

pub trait Stations: Indexed + Send + Sync {
    fn name(&self, id: usize) -> Result<&str>;

    /// Longitude in degrees.
    fn longitude(&self, id: usize) -> Result<f64>;

    /// Latitude in degrees.
    fn latitude(&self, id: usize) -> Result<f64>;
}

/// Alternative names of stations.
pub trait StationAliases: Indexed + Send + Sync {
    fn alias(&self, id: usize) -> Result<&str>;

    /// Name of the station the alias refers to.
    fn station_name(&self, id: usize) -> Result<&str>;
}

pub trait Platforms: Indexed + Send + Sync {
    /// Platform or quay name; may be empty.
    fn name(&self, id: usize) -> Result<&str>;

    /// Id of the station the platform belongs to.
    fn station_id(&self, id: usize) -> Result<usize>;
}

pub trait Routes: Indexed + Send + Sync {
    fn vehicle(&self, id: usize) -> Result<Vehicle>;
    fn name(&self, id: usize) -> Result<&str>;
}

/// The trips running on one day.
pub trait Trips: Indexed + Send + Sync {
    fn route_id(&self, id: usize) -> Result<usize>;

    /// Final destination, as shown to passengers.
    fn destination(&self, id: usize) -> Result<&str>;
}

/// The connections running on one day.
///
/// Times are minutes after midnight of the day.
pub trait Connections: Indexed + Send + Sync {
    fn dep_stop_id(&self, id: usize) -> Result<usize>;
    fn dep_mins(&self, id: usize) -> Result<u16>;
    fn arr_stop_id(&self, id: usize) -> Result<usize>;
    fn arr_mins(&self, id: usize) -> Result<u16>;
    fn trip_id(&self, id: usize) -> Result<usize>;

    /// Position of the connection within its trip, from 0.
    fn trip_pos(&self, id: usize) -> Result<u8>;

    /// The following connection of the same trip.
    ///
    /// Links form a ring: the last connection of a trip points back at the
    /// first one.
    fn next_connection_id(&self, id: usize) -> Result<usize>;
}

/// Walking transfers between stations, grouped by arrival station.
pub trait Transfers: Indexed + Send + Sync {
    fn dep_station_id(&self, id: usize) -> Result<usize>;
    fn arr_station_id(&self, id: usize) -> Result<usize>;
    fn minutes(&self, id: usize) -> Result<u8>;

    /// The block of transfer ids arriving at a station.
    ///
    /// Stations without incoming transfers get an empty range.
    fn arriving_at(&self, station_id: usize) -> PackedRange;

    /// Transfer duration from one station to another.
    fn minutes_between(&self, dep_station_id: usize, arr_station_id: usize) -> Result<u8>;
}

// ============================================================================
// Timetable
// ============================================================================

/// A complete timetable: static collections plus the trips and connections
/// of each day.
pub trait Timetable: Send + Sync {
    fn stations(&self) -> &dyn Stations;
    fn station_aliases(&self) -> &dyn StationAliases;
    fn platforms(&self) -> &dyn Platforms;
    fn routes(&self) -> &dyn Routes;
    fn transfers(&self) -> &dyn Transfers;

    /// Trips running on `date`.
    fn trips_for(&self, date: NaiveDate) -> Result<Arc<dyn Trips>>;

    /// Connections running on `date`.
    fn connections_for(&self, date: NaiveDate) -> Result<Arc<dyn Connections>>;

    fn is_station_id(&self, stop_id: usize) -> bool {
        stop_id < self.stations().size()
    }

    fn is_platform_id(&self, stop_id: usize) -> bool {
        let station_count = self.stations().size();
        stop_id >= station_count && stop_id - station_count < self.platforms().size()
    }

    /// The station a stop belongs to: itself, or a platform's parent.
    fn station_id(&self, stop_id: usize) -> Result<usize> {
        let station_count = self.stations().size();
        if self.is_station_id(stop_id) {
            Ok(stop_id)
        } else if self.is_platform_id(stop_id) {
            self.platforms().station_id(stop_id - station_count)
        } else {
            Err(TimetableError::IndexOutOfRange {
                kind: "stop",
                index: stop_id,
                size: station_count + self.platforms().size(),
            })
        }
    }

    /// Platform name of a stop, or `None` if the stop is a station.
    fn platform_name(&self, stop_id: usize) -> Result<Option<&str>> {
        if self.is_station_id(stop_id) {
            Ok(None)
        } else {
            let station_count = self.stations().size();
            self.platforms()
                .name(stop_id - station_count)
                .map(Some)
        }
    }
}
