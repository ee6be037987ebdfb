//! Tests for header row resolution

use super::super::header::{Column, HeaderIndex, HeaderSet};
use super::{header_record, mg_dl_header_row, mmol_l_header_row};
use crate::error::ConvertError;
use crate::models::GlucoseUnit;

#[test]
fn test_resolve_mg_dl_headers() {
    let index = HeaderIndex::resolve(&header_record(&mg_dl_header_row()), HeaderSet::for_unit(GlucoseUnit::MgDl))
        .unwrap();

    assert_eq!(index.position(Column::Device), 0);
    assert_eq!(index.position(Column::SerialNumber), 1);
    assert_eq!(index.position(Column::DeviceTimestamp), 2);
    assert_eq!(index.position(Column::RecordType), 3);
    assert_eq!(index.position(Column::HistoricGlucose), 4);
    assert_eq!(index.position(Column::ScanGlucose), 5);
    assert_eq!(index.name(Column::ScanGlucose), "Glukose-Scan mg/dL");
}

#[test]
fn test_resolve_mmol_l_headers() {
    let index =
        HeaderIndex::resolve(&header_record(&mmol_l_header_row()), HeaderSet::for_unit(GlucoseUnit::MmolL))
            .unwrap();

    assert_eq!(index.position(Column::HistoricGlucose), 4);
    assert_eq!(index.name(Column::HistoricGlucose), "Glukosewert-Verlauf mmol/L");
}

#[test]
fn test_unit_mismatch_reports_all_missing_columns() {
    // A mmol/L export read as mg/dL is missing both glucose columns
    let err = HeaderIndex::resolve(&header_record(&mmol_l_header_row()), HeaderSet::for_unit(GlucoseUnit::MgDl))
        .unwrap_err();

    match err {
        ConvertError::MissingColumns { missing } => {
            assert_eq!(
                missing,
                vec![
                    "Glukosewert-Verlauf mg/dL".to_string(),
                    "Glukose-Scan mg/dL".to_string()
                ]
            );
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_header_matching_is_exact() {
    let header_row = mg_dl_header_row().replace("Seriennummer", " Seriennummer");
    let err = HeaderIndex::resolve(&header_record(&header_row), HeaderSet::for_unit(GlucoseUnit::MgDl))
        .unwrap_err();

    assert!(err.to_string().contains("Seriennummer"));
}

#[test]
fn test_first_duplicate_header_wins() {
    let header_row = format!("{},Gerät", mg_dl_header_row());
    let index =
        HeaderIndex::resolve(&header_record(&header_row), HeaderSet::for_unit(GlucoseUnit::MgDl)).unwrap();

    assert_eq!(index.position(Column::Device), 0);
}

#[test]
fn test_header_sets_share_unit_independent_names() {
    let mg = HeaderSet::for_unit(GlucoseUnit::MgDl);
    let mmol = HeaderSet::for_unit(GlucoseUnit::MmolL);

    for column in [
        Column::Device,
        Column::SerialNumber,
        Column::RecordType,
        Column::DeviceTimestamp,
    ] {
        assert_eq!(mg.name(column), mmol.name(column));
    }
    assert_ne!(mg.historic_glucose, mmol.historic_glucose);
    assert_ne!(mg.scan_glucose, mmol.scan_glucose);
}
