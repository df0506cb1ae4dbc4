//! Buffered station aliases.

use bytes::Bytes;

use super::strings::{StringTable, resolve};
use super::traits::{Indexed, StationAliases};
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::Result;

const ALIAS_ID: usize = 0;
const STATION_NAME_ID: usize = 1;

/// Aliases decoded from records of (alias, station name), both string ids.
#[derive(Debug, Clone)]
pub struct BufferedStationAliases {
    strings: StringTable,
    buffer: StructuredBuffer,
}

impl BufferedStationAliases {
    pub fn new(strings: StringTable, bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[
            field(ALIAS_ID, FieldType::U16),
            field(STATION_NAME_ID, FieldType::U16),
        ])?;
        Ok(Self {
            strings,
            buffer: StructuredBuffer::new(structure, bytes)?,
        })
    }
}

impl Indexed for BufferedStationAliases {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl StationAliases for BufferedStationAliases {
    fn alias(&self, id: usize) -> Result<&str> {
        let alias_id = self.buffer.get_u16(ALIAS_ID, id)?;
        resolve(&self.strings, usize::from(alias_id))
    }

    fn station_name(&self, id: usize) -> Result<&str> {
        let name_id = self.buffer.get_u16(STATION_NAME_ID, id)?;
        resolve(&self.strings, usize::from(name_id))
    }
}
