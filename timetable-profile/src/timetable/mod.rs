//! Timetable collections and their buffered implementations.
//!
//! The traits in [`traits`] describe what the profile computation needs from
//! a timetable. The `Buffered*` views implement them by decoding
//! fixed-width records (see [`crate::buffer`]) on every access, resolving
//! textual fields through a shared [`StringTable`].

mod aliases;
mod buffered;
mod cache;
mod connections;
mod platforms;
mod routes;
mod stations;
mod strings;
pub mod traits;
mod transfers;
mod trips;
mod vehicle;

pub use aliases::BufferedStationAliases;
pub use buffered::{BufferedTimetable, DayBuffers, TimetableBuffers};
pub use cache::{CacheConfig, CachedTimetable};
pub use connections::BufferedConnections;
pub use platforms::BufferedPlatforms;
pub use routes::BufferedRoutes;
pub use stations::BufferedStations;
pub use strings::{StringTable, string_table};
pub use traits::{
    Connections, Indexed, Platforms, Routes, StationAliases, Stations, Timetable, Transfers, Trips,
};
pub use transfers::BufferedTransfers;
pub use trips::BufferedTrips;
pub use vehicle::Vehicle;
