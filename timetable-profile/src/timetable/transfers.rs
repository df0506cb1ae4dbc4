//! Buffered transfers.

use bytes::Bytes;
use tracing::debug;

use super::traits::{Indexed, Transfers};
use crate::bits::PackedRange;
use crate::buffer::{FieldType, Structure, StructuredBuffer, field};
use crate::error::{Result, TimetableError};

const DEP_STATION_ID: usize = 0;
const ARR_STATION_ID: usize = 1;
const TRANSFER_MINUTES: usize = 2;

/// Transfers decoded from records of (departure station, arrival station,
/// minutes).
///
/// Records must be grouped by arrival station. The range of transfers
/// arriving at each station is computed once, at construction; ungrouped
/// input gives meaningless ranges rather than an error.
#[derive(Debug, Clone)]
pub struct BufferedTransfers {
    buffer: StructuredBuffer,
    arriving: Vec<PackedRange>,
}

impl BufferedTransfers {
    pub fn new(bytes: Bytes) -> Result<Self> {
        let structure = Structure::new(&[
            field(DEP_STATION_ID, FieldType::U16),
            field(ARR_STATION_ID, FieldType::U16),
            field(TRANSFER_MINUTES, FieldType::U8),
        ])?;
        let buffer = StructuredBuffer::new(structure, bytes)?;
        let arriving = arriving_ranges(&buffer)?;

        debug!(
            transfers = buffer.size(),
            stations = arriving.len(),
            "Built transfer index"
        );

        Ok(Self { buffer, arriving })
    }
}

/// Range of transfer ids per arrival station, indexed by station id.
fn arriving_ranges(buffer: &StructuredBuffer) -> Result<Vec<PackedRange>> {
    let mut arriving = Vec::new();
    let mut start = 0;

    while start < buffer.size() {
        let station = usize::from(buffer.get_u16(ARR_STATION_ID, start)?);
        let mut end = start + 1;
        while end < buffer.size() && usize::from(buffer.get_u16(ARR_STATION_ID, end)?) == station {
            end += 1;
        }

        if arriving.len() <= station {
            arriving.resize(station + 1, PackedRange::EMPTY);
        }
        arriving[station] = PackedRange::pack(start, end)?;
        start = end;
    }

    Ok(arriving)
}

impl Indexed for BufferedTransfers {
    fn size(&self) -> usize {
        self.buffer.size()
    }
}

impl Transfers for BufferedTransfers {
    fn dep_station_id(&self, id: usize) -> Result<usize> {
        Ok(usize::from(self.buffer.get_u16(DEP_STATION_ID, id)?))
    }

    fn arr_station_id(&self, id: usize) -> Result<usize> {
        Ok(usize::from(self.buffer.get_u16(ARR_STATION_ID, id)?))
    }

    fn minutes(&self, id: usize) -> Result<u8> {
        self.buffer.get_u8(TRANSFER_MINUTES, id)
    }

    fn arriving_at(&self, station_id: usize) -> PackedRange {
        self.arriving
            .get(station_id)
            .copied()
            .unwrap_or(PackedRange::EMPTY)
    }

    fn minutes_between(&self, dep_station_id: usize, arr_station_id: usize) -> Result<u8> {
        for id in self.arriving_at(arr_station_id).as_range() {
            if self.dep_station_id(id)? == dep_station_id {
                return self.minutes(id);
            }
        }
        Err(TimetableError::TransferNotFound {
            from: dep_station_id,
            to: arr_station_id,
        })
    }
}
