//! Vehicle kinds.

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// The kind of vehicle serving a route.
///
/// The discriminants are the codes stored in route records and must not be
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Vehicle {
    Tram = 0,
    Metro = 1,
    Train = 2,
    Bus = 3,
    Ferry = 4,
    AerialLift = 5,
    Funicular = 6,
}

impl Vehicle {
    /// All kinds, in code order.
    pub const ALL: [Vehicle; 7] = [
        Vehicle::Tram,
        Vehicle::Metro,
        Vehicle::Train,
        Vehicle::Bus,
        Vehicle::Ferry,
        Vehicle::AerialLift,
        Vehicle::Funicular,
    ];

    /// Decode a stored vehicle code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// The stored code of this kind.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Vehicle {
    type Error = TimetableError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(TimetableError::UnknownVehicle(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_record_format() {
        assert_eq!(Vehicle::from_code(0), Some(Vehicle::Tram));
        assert_eq!(Vehicle::from_code(1), Some(Vehicle::Metro));
        assert_eq!(Vehicle::from_code(2), Some(Vehicle::Train));
        assert_eq!(Vehicle::from_code(3), Some(Vehicle::Bus));
        assert_eq!(Vehicle::from_code(4), Some(Vehicle::Ferry));
        assert_eq!(Vehicle::from_code(5), Some(Vehicle::AerialLift));
        assert_eq!(Vehicle::from_code(6), Some(Vehicle::Funicular));
        assert_eq!(Vehicle::from_code(7), None);
    }

    #[test]
    fn code_roundtrip() {
        for vehicle in Vehicle::ALL {
            assert_eq!(Vehicle::try_from(vehicle.code()), Ok(vehicle));
        }
    }

    #[test]
    fn unknown_code() {
        assert_eq!(
            Vehicle::try_from(200),
            Err(TimetableError::UnknownVehicle(200))
        );
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Vehicle::AerialLift).unwrap(),
            "\"AERIAL_LIFT\""
        );
        let parsed: Vehicle = serde_json::from_str("\"FUNICULAR\"").unwrap();
        assert_eq!(parsed, Vehicle::Funicular);
    }
}
