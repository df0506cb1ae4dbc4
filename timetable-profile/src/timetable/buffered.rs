//! A timetable assembled from in-memory buffers.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use chrono::NaiveDate;

use super::aliases::BufferedStationAliases;
use super::connections::BufferedConnections;
use super::platforms::BufferedPlatforms;
use super::routes::BufferedRoutes;
use super::stations::BufferedStations;
use super::strings::StringTable;
use super::traits::{
    Connections, Platforms, Routes, StationAliases, Stations, Timetable, Transfers, Trips,
};
use super::transfers::BufferedTransfers;
use super::trips::BufferedTrips;
use crate::error::{Result, TimetableError};

/// Raw buffers of the date-independent part of a timetable.
#[derive(Debug, Clone, Default)]
pub struct TimetableBuffers {
    pub strings: StringTable,
    pub stations: Bytes,
    pub station_aliases: Bytes,
    pub platforms: Bytes,
    pub routes: Bytes,
    pub transfers: Bytes,
}

/// Raw buffers of the trips and connections running on one day.
#[derive(Debug, Clone, Default)]
pub struct DayBuffers {
    pub trips: Bytes,
    pub connections: Bytes,
    pub connection_links: Bytes,
}

/// Timetable whose views decode shared in-memory buffers.
///
/// Day views are decoded from their buffers on every request; wrap the
/// timetable in a [`CachedTimetable`](super::CachedTimetable) to reuse them.
#[derive(Debug, Clone)]
pub struct BufferedTimetable {
    strings: StringTable,
    stations: BufferedStations,
    station_aliases: BufferedStationAliases,
    platforms: BufferedPlatforms,
    routes: BufferedRoutes,
    transfers: BufferedTransfers,
    days: HashMap<NaiveDate, DayBuffers>,
}

impl BufferedTimetable {
    /// Decode the static views. Fails if any buffer is malformed.
    pub fn new(buffers: TimetableBuffers) -> Result<Self> {
        let strings = buffers.strings;
        Ok(Self {
            stations: BufferedStations::new(strings.clone(), buffers.stations)?,
            station_aliases: BufferedStationAliases::new(strings.clone(), buffers.station_aliases)?,
            platforms: BufferedPlatforms::new(strings.clone(), buffers.platforms)?,
            routes: BufferedRoutes::new(strings.clone(), buffers.routes)?,
            transfers: BufferedTransfers::new(buffers.transfers)?,
            strings,
            days: HashMap::new(),
        })
    }

    /// Register the buffers of one day, replacing any previous ones.
    ///
    /// The buffers are validated eagerly so that later lookups cannot fail
    /// on malformed input.
    pub fn insert_day(&mut self, date: NaiveDate, day: DayBuffers) -> Result<()> {
        BufferedTrips::new(self.strings.clone(), day.trips.clone())?;
        BufferedConnections::new(day.connections.clone(), day.connection_links.clone())?;
        self.days.insert(date, day);
        Ok(())
    }

    /// Builder-style variant of [`insert_day`](Self::insert_day).
    pub fn with_day(mut self, date: NaiveDate, day: DayBuffers) -> Result<Self> {
        self.insert_day(date, day)?;
        Ok(self)
    }

    /// Dates with registered buffers, in no particular order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    fn day(&self, date: NaiveDate) -> Result<&DayBuffers> {
        self.days.get(&date).ok_or(TimetableError::DateNotFound(date))
    }
}

impl Timetable for BufferedTimetable {
    fn stations(&self) -> &dyn Stations {
        &self.stations
    }

    fn station_aliases(&self) -> &dyn StationAliases {
        &self.station_aliases
    }

    fn platforms(&self) -> &dyn Platforms {
        &self.platforms
    }

    fn routes(&self) -> &dyn Routes {
        &self.routes
    }

    fn transfers(&self) -> &dyn Transfers {
        &self.transfers
    }

    fn trips_for(&self, date: NaiveDate) -> Result<Arc<dyn Trips>> {
        let day = self.day(date)?;
        Ok(Arc::new(BufferedTrips::new(
            self.strings.clone(),
            day.trips.clone(),
        )?))
    }

    fn connections_for(&self, date: NaiveDate) -> Result<Arc<dyn Connections>> {
        let day = self.day(date)?;
        Ok(Arc::new(BufferedConnections::new(
            day.connections.clone(),
            day.connection_links.clone(),
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{date, small_timetable};
    use crate::timetable::{Indexed, Vehicle};

    #[test]
    fn static_views() {
        let tt = small_timetable();
        assert_eq!(tt.stations().size(), 2);
        assert_eq!(tt.stations().name(1).unwrap(), "Palézieux");
        assert_eq!(tt.station_aliases().alias(0).unwrap(), "Losanna");
        assert_eq!(tt.platforms().size(), 3);
        assert_eq!(tt.routes().vehicle(0).unwrap(), Vehicle::Train);
        assert_eq!(tt.routes().name(0).unwrap(), "IR 15");
        assert_eq!(tt.transfers().minutes_between(1, 0).unwrap(), 5);
    }

    #[test]
    fn day_views() {
        let tt = small_timetable();
        let trips = tt.trips_for(date()).unwrap();
        assert_eq!(trips.size(), 1);
        assert_eq!(trips.destination(0).unwrap(), "Palézieux");

        let connections = tt.connections_for(date()).unwrap();
        assert_eq!(connections.size(), 2);
        assert_eq!(connections.dep_mins(0).unwrap(), 540);
        assert_eq!(connections.arr_mins(1).unwrap(), 560);
        assert_eq!(connections.trip_pos(1).unwrap(), 1);
        assert_eq!(connections.next_connection_id(1).unwrap(), 0);
        assert_eq!(tt.dates().collect::<Vec<_>>(), vec![date()]);
    }

    #[test]
    fn unknown_date() {
        let tt = small_timetable();
        let other = date().succ_opt().unwrap();
        assert!(matches!(
            tt.trips_for(other),
            Err(TimetableError::DateNotFound(d)) if d == other
        ));
        assert!(tt.connections_for(other).is_err());
    }

    #[test]
    fn stop_id_space() {
        let tt = small_timetable();
        assert!(tt.is_station_id(0));
        assert!(tt.is_station_id(1));
        assert!(!tt.is_station_id(2));
        assert!(tt.is_platform_id(2));
        assert!(tt.is_platform_id(4));
        assert!(!tt.is_platform_id(5));
        assert!(!tt.is_platform_id(1));

        assert_eq!(tt.station_id(1).unwrap(), 1);
        assert_eq!(tt.station_id(2).unwrap(), 0);
        assert_eq!(tt.station_id(3).unwrap(), 0);
        assert_eq!(tt.station_id(4).unwrap(), 1);
        assert_eq!(
            tt.station_id(5),
            Err(TimetableError::IndexOutOfRange {
                kind: "stop",
                index: 5,
                size: 5
            })
        );

        assert_eq!(tt.platform_name(0).unwrap(), None);
        assert_eq!(tt.platform_name(3).unwrap(), Some("70"));
        assert!(tt.platform_name(9).is_err());
    }

    #[test]
    fn reject_malformed_day() {
        let mut tt = small_timetable();
        let day = DayBuffers {
            trips: Bytes::new(),
            connections: Bytes::from_static(&[0; 12]),
            connection_links: Bytes::new(),
        };
        assert!(tt.insert_day(date(), day).is_err());
        // The previous buffers are kept
        assert_eq!(tt.connections_for(date()).unwrap().size(), 2);
    }

    #[test]
    fn empty_timetable() {
        let tt = BufferedTimetable::new(TimetableBuffers::default()).unwrap();
        assert_eq!(tt.stations().size(), 0);
        assert_eq!(tt.station_aliases().size(), 0);
        assert_eq!(tt.platforms().size(), 0);
        assert_eq!(tt.routes().size(), 0);
        assert_eq!(tt.transfers().size(), 0);
        assert!(!tt.is_station_id(0));
    }
}
