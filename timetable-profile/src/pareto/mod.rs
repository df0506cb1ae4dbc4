//! Pareto fronts of packed journey criteria.
//!
//! A journey candidate is summarised by one [`PackedCriteria`] word. The
//! fronts keep, per station, only the candidates not dominated by another
//! one on arrival time and number of changes.

mod builder;
mod criteria;
mod error;
mod front;

pub use builder::ParetoFrontBuilder;
pub use criteria::PackedCriteria;
pub use error::FrontError;
pub use front::ParetoFront;
