//! Integer packing primitives.
//!
//! Several timetable values are small enough that two of them fit in one
//! machine word. Packing them avoids allocating a pair per record when the
//! timetable holds millions of connections.

mod error;
mod range;
mod split;

pub use error::PackError;
pub use range::PackedRange;
pub use split::{MAX_24, pack_24_8, unpack_8, unpack_24};
