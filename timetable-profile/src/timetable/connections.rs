//! Buffered connections.

use bytes::Bytes;

use super::traits::{Connections, Indexed};
use crate::bits::{unpack_8, unpack_24};
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::{Result, TimetableError};

const DEP_STOP_ID: usize = 0;
const DEP_MINUTES: usize = 1;
const ARR_STOP_ID: usize = 2;
const ARR_MINUTES: usize = 3;
const TRIP_POS_ID: usize = 4;

const NEXT_CONNECTION_ID: usize = 0;

/// Connections of one day.
///
/// The schedule records carry the trip id and the position within the trip
/// packed as one 24/8 word. The next-connection links live in a second
/// buffer of the same record count.
#[derive(Debug, Clone)]
pub struct BufferedConnections {
    buffer: StructuredBuffer,
    links: StructuredBuffer,
}

impl BufferedConnections {
    pub fn new(bytes: Bytes, link_bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[
            field(DEP_STOP_ID, FieldType::U16),
            field(DEP_MINUTES, FieldType::U16),
            field(ARR_STOP_ID, FieldType::U16),
            field(ARR_MINUTES, FieldType::U16),
            field(TRIP_POS_ID, FieldType::S32),
        ])?;
        let link_structure = Structure::new(&[field(NEXT_CONNECTION_ID, FieldType::S32)])?;

        let buffer = StructuredBuffer::new(structure, bytes)?;
        let links = StructuredBuffer::new(link_structure, link_bytes)?;
        if buffer.size() != links.size() {
            return Err(TimetableError::ParallelBufferMismatch {
                expected: buffer.size(),
                actual: links.size(),
            });
        }

        Ok(Self { buffer, links })
    }

    fn trip_pos_word(&self, id: usize) -> Result<u32> {
        Ok(self.buffer.get_s32(TRIP_POS_ID, id)? as u32)
    }
}

impl Indexed for BufferedConnections {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl Connections for BufferedConnections {
    fn dep_stop_id(&self, id: usize) -> Result<usize> {
        Ok(usize::from(self.buffer.get_u16(DEP_STOP_ID, id)?))
    }

    fn dep_mins(&self, id: usize) -> Result<u16> {
        self.buffer.get_u16(DEP_MINUTES, id)
    }

    fn arr_stop_id(&self, id: usize) -> Result<usize> {
        Ok(usize::from(self.buffer.get_u16(ARR_STOP_ID, id)?))
    }

    fn arr_mins(&self, id: usize) -> Result<u16> {
        self.buffer.get_u16(ARR_MINUTES, id)
    }

    fn trip_id(&self, id: usize) -> Result<usize> {
        Ok(unpack_24(self.trip_pos_word(id)?) as usize)
    }

    fn trip_pos(&self, id: usize) -> Result<u8> {
        Ok(unpack_8(self.trip_pos_word(id)?))
    }

    fn next_connection_id(&self, id: usize) -> Result<usize> {
        Ok(self.links.get_s32(NEXT_CONNECTION_ID, id)? as u32 as usize)
    }
}
