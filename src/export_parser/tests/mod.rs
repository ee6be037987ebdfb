//! Test utilities for LibreLink export parser testing
//!
//! Fixture builders shared by the header, field and parser test modules.

use crate::constants::headers;
use csv::StringRecord;

mod header_tests;

/// Header row of a mg/dL export with the real column order of a LibreLink export
pub fn mg_dl_header_row() -> String {
    [
        headers::DEVICE,
        headers::SERIAL_NUMBER,
        headers::DEVICE_TIMESTAMP,
        headers::RECORD_TYPE,
        headers::mg_dl::HISTORIC_GLUCOSE,
        headers::mg_dl::SCAN_GLUCOSE,
        "Nicht numerisches schnellwirkendes Insulin",
        "Notizen",
    ]
    .join(",")
}

/// Header row of a mmol/L export
pub fn mmol_l_header_row() -> String {
    [
        headers::DEVICE,
        headers::SERIAL_NUMBER,
        headers::DEVICE_TIMESTAMP,
        headers::RECORD_TYPE,
        headers::mmol_l::HISTORIC_GLUCOSE,
        headers::mmol_l::SCAN_GLUCOSE,
        "Notizen",
    ]
    .join(",")
}

/// Split a header row into the record the reader would produce
pub fn header_record(header_row: &str) -> StringRecord {
    StringRecord::from(header_row.split(',').collect::<Vec<_>>())
}

/// Build a complete export from a header row and data rows
pub fn build_export(header_row: &str, rows: &[&str]) -> String {
    let mut text = format!("Glukosewerte,Erstellt am,15-10-2022 10:00,Erstellt von,Tester\n{header_row}\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// A mg/dL export mixing historic, scan and non-glucose records
pub fn create_mixed_mg_dl_export() -> String {
    build_export(
        &mg_dl_header_row(),
        &[
            "FreeStyle LibreLink,ABC123,15-10-2022 08:30,0,120,,,",
            "FreeStyle LibreLink,ABC123,15-10-2022 08:35,1,,131,,",
            "FreeStyle LibreLink,ABC123,15-10-2022 08:40,4,,,2,",
            "FreeStyle LibreLink,ABC123,15-10-2022 08:45,6,,,,Laufen",
            "FreeStyle LibreLink,ABC123,15-10-2022 08:45,0,118.5,,,",
        ],
    )
}
