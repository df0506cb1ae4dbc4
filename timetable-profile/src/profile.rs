//! Per-date journey profiles.
//!
//! A [`Profile`] holds, for every station, the Pareto front of journeys from
//! that station to one destination on one day. It is assembled by a scan
//! over the day's connections through a [`ProfileBuilder`], which keeps a
//! working front per station and per trip.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, check_index};
use crate::pareto::{ParetoFront, ParetoFrontBuilder};
use crate::timetable::{Connections, Indexed, Timetable, Trips};

/// The Pareto fronts of every station towards one destination on one day.
#[derive(Clone)]
pub struct Profile {
    timetable: Arc<dyn Timetable>,
    date: NaiveDate,
    trips: Arc<dyn Trips>,
    connections: Arc<dyn Connections>,
    arr_station_id: usize,
    fronts: Vec<ParetoFront>,
}

impl Profile {
    pub fn timetable(&self) -> &Arc<dyn Timetable> {
        &self.timetable
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The trips running on the profile's date.
    pub fn trips(&self) -> &dyn Trips {
        self.trips.as_ref()
    }

    /// The connections running on the profile's date.
    pub fn connections(&self) -> &dyn Connections {
        self.connections.as_ref()
    }

    /// The destination station.
    pub fn arr_station_id(&self) -> usize {
        self.arr_station_id
    }

    pub fn station_count(&self) -> usize {
        self.fronts.len()
    }

    /// The front of journeys from a station to the destination.
    pub fn for_station(&self, station_id: usize) -> Result<&ParetoFront> {
        check_index("station", station_id, self.fronts.len())?;
        Ok(&self.fronts[station_id])
    }

    /// Fronts indexed by station id.
    pub fn fronts(&self) -> &[ParetoFront] {
        &self.fronts
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("date", &self.date)
            .field("arr_station_id", &self.arr_station_id)
            .field("fronts", &self.fronts)
            .finish_non_exhaustive()
    }
}

/// Working state of a profile computation.
///
/// Station and trip fronts are created empty on first access. The builder
/// is meant for a single scan; parallel scans each use their own builder
/// and merge fronts afterwards.
pub struct ProfileBuilder {
    timetable: Arc<dyn Timetable>,
    date: NaiveDate,
    trips: Arc<dyn Trips>,
    connections: Arc<dyn Connections>,
    arr_station_id: usize,
    station_fronts: Vec<Option<ParetoFrontBuilder>>,
    trip_fronts: Vec<Option<ParetoFrontBuilder>>,
}

impl ProfileBuilder {
    /// Start a profile towards `arr_station_id` on `date`.
    ///
    /// Fails if the timetable has no data for the date or the destination
    /// is not a station.
    pub fn new(
        timetable: Arc<dyn Timetable>,
        date: NaiveDate,
        arr_station_id: usize,
    ) -> Result<Self> {
        let station_count = timetable.stations().size();
        check_index("station", arr_station_id, station_count)?;
        let trips = timetable.trips_for(date)?;
        let connections = timetable.connections_for(date)?;
        let trip_count = trips.size();

        Ok(Self {
            timetable,
            date,
            trips,
            connections,
            arr_station_id,
            station_fronts: vec![None; station_count],
            trip_fronts: vec![None; trip_count],
        })
    }

    pub fn timetable(&self) -> &Arc<dyn Timetable> {
        &self.timetable
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn trips(&self) -> &dyn Trips {
        self.trips.as_ref()
    }

    pub fn connections(&self) -> &dyn Connections {
        self.connections.as_ref()
    }

    pub fn arr_station_id(&self) -> usize {
        self.arr_station_id
    }

    /// The working front of a station.
    pub fn for_station(&mut self, station_id: usize) -> Result<&mut ParetoFrontBuilder> {
        check_index("station", station_id, self.station_fronts.len())?;
        Ok(self.station_fronts[station_id].get_or_insert_with(ParetoFrontBuilder::new))
    }

    /// Replace the working front of a station.
    pub fn set_for_station(&mut self, station_id: usize, front: ParetoFrontBuilder) -> Result<()> {
        check_index("station", station_id, self.station_fronts.len())?;
        self.station_fronts[station_id] = Some(front);
        Ok(())
    }

    /// The working front of a trip: journeys available once aboard it.
    pub fn for_trip(&mut self, trip_id: usize) -> Result<&mut ParetoFrontBuilder> {
        check_index("trip", trip_id, self.trip_fronts.len())?;
        Ok(self.trip_fronts[trip_id].get_or_insert_with(ParetoFrontBuilder::new))
    }

    /// Replace the working front of a trip.
    pub fn set_for_trip(&mut self, trip_id: usize, front: ParetoFrontBuilder) -> Result<()> {
        check_index("trip", trip_id, self.trip_fronts.len())?;
        self.trip_fronts[trip_id] = Some(front);
        Ok(())
    }

    /// Snapshot every station front into a profile.
    ///
    /// Stations never touched get [`ParetoFront::EMPTY`]. Trip fronts are
    /// working state and are not part of the profile.
    pub fn build(&self) -> Profile {
        let fronts: Vec<ParetoFront> = self
            .station_fronts
            .iter()
            .map(|front| match front {
                Some(front) => front.build(),
                None => ParetoFront::EMPTY,
            })
            .collect();

        let reached = fronts.iter().filter(|front| !front.is_empty()).count();
        let entries: usize = fronts.iter().map(ParetoFront::size).sum();
        debug!(
            date = %self.date,
            arr_station_id = self.arr_station_id,
            stations = fronts.len(),
            reached,
            entries,
            "Built profile"
        );

        Profile {
            timetable: Arc::clone(&self.timetable),
            date: self.date,
            trips: Arc::clone(&self.trips),
            connections: Arc::clone(&self.connections),
            arr_station_id: self.arr_station_id,
            fronts,
        }
    }
}

impl fmt::Debug for ProfileBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileBuilder")
            .field("date", &self.date)
            .field("arr_station_id", &self.arr_station_id)
            .field("station_fronts", &self.station_fronts)
            .field("trip_fronts", &self.trip_fronts)
            .finish_non_exhaustive()
    }
}
