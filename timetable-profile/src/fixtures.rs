//! Shared test fixtures.

use bytes::Bytes;
use chrono::NaiveDate;

use crate::timetable::{BufferedTimetable, DayBuffers, TimetableBuffers, string_table};

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
}

/// Two stations (Lausanne, Palézieux), three platforms, one route, one
/// trip of two connections, and one transfer each way.
pub fn small_timetable() -> BufferedTimetable {
    let buffers = TimetableBuffers {
        strings: string_table([
            "1", "70", "Anet", "Ins", "Lausanne", "Losanna", "Palézieux", "IR 15",
        ]),
        stations: Bytes::from_static(&[
            0x00, 0x04, 0x04, 0xb6, 0xca, 0x14, 0x21, 0x14, 0x1f, 0xa1, //
            0x00, 0x06, 0x04, 0xdc, 0xcc, 0x12, 0x21, 0x18, 0xda, 0x03,
        ]),
        station_aliases: Bytes::from_static(&[0x00, 0x05, 0x00, 0x04]),
        platforms: Bytes::from_static(&[
            0x00, 0x00, 0x00, 0x00, //
            0x00, 0x01, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x01,
        ]),
        routes: Bytes::from_static(&[0x00, 0x07, 0x02]),
        transfers: Bytes::from_static(&[
            0x00, 0x01, 0x00, 0x00, 0x05, //
            0x00, 0x00, 0x00, 0x01, 0x06,
        ]),
    };
    let day = DayBuffers {
        trips: Bytes::from_static(&[0x00, 0x00, 0x00, 0x06]),
        connections: Bytes::from_static(&[
            0x00, 0x02, 0x02, 0x1c, 0x00, 0x03, 0x02, 0x26, 0x00, 0x00, 0x00, 0x00, //
            0x00, 0x03, 0x02, 0x27, 0x00, 0x04, 0x02, 0x30, 0x00, 0x00, 0x00, 0x01,
        ]),
        connection_links: Bytes::from_static(&[
            0x00, 0x00, 0x00, 0x01, //
            0x00, 0x00, 0x00, 0x00,
        ]),
    };
    BufferedTimetable::new(buffers)
        .unwrap()
        .with_day(date(), day)
        .unwrap()
}

