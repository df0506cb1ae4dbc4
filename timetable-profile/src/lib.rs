//! Timetable decoding and Pareto-optimal journey profiles.
//!
//! The crate reads a compact binary timetable and provides the building
//! blocks of a profile connection scan:
//!
//! - [`buffer`] decodes fixed-width big-endian records.
//! - [`timetable`] exposes stations, routes, trips, connections and
//!   transfers as indexed collections over those records.
//! - [`bits`] packs small integers and ranges into single words.
//! - [`pareto`] keeps the non-dominated (arrival, changes) candidates.
//! - [`profile`] assembles one Pareto front per station for a day.
//!
//! Loading timetable files and running the scan itself are left to the
//! caller.

pub mod bits;
pub mod buffer;
pub mod error;
pub mod pareto;
pub mod profile;
pub mod timetable;

#[cfg(test)]
mod fixtures;

pub use error::{Result, TimetableError};
pub use pareto::{FrontError, PackedCriteria, ParetoFront, ParetoFrontBuilder};
pub use profile::{Profile, ProfileBuilder};
pub use timetable::{BufferedTimetable, CachedTimetable, Timetable};
