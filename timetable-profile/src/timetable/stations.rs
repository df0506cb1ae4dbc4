//! Buffered stations.

use bytes::Bytes;

use super::strings::{StringTable, resolve};
use super::traits::{Indexed, Stations};
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::Result;

const NAME_ID: usize = 0;
const LON: usize = 1;
const LAT: usize = 2;

/// Degrees per unit of a stored coordinate (a full turn spans 2^32 units).
const DEGREES_PER_UNIT: f64 = 360.0 / 4_294_967_296.0;

/// Stations decoded from records of (name, longitude, latitude).
#[derive(Debug, Clone)]
pub struct BufferedStations {
    strings: StringTable,
    buffer: StructuredBuffer,
}

impl BufferedStations {
    pub fn new(strings: StringTable, bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[
            field(NAME_ID, FieldType::U16),
            field(LON, FieldType::S32),
            field(LAT, FieldType::S32),
        ])?;
        Ok(Self {
            strings,
            buffer: StructuredBuffer::new(structure, bytes)?,
        })
    }
}

impl Indexed for BufferedStations {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl Stations for BufferedStations {
    fn name(&self, id: usize) -> Result<&str> {
        let name_id = self.buffer.get_u16(NAME_ID, id)?;
        resolve(&self.strings, usize::from(name_id))
    }

    fn longitude(&self, id: usize) -> Result<f64> {
        Ok(f64::from(self.buffer.get_s32(LON, id)?) * DEGREES_PER_UNIT)
    }

    fn latitude(&self, id: usize) -> Result<f64> {
        Ok(f64::from(self.buffer.get_s32(LAT, id)?) * DEGREES_PER_UNIT)
    }
}
