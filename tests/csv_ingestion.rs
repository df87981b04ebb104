use production_ingest::ingestion::csv::parse_csv;

#[test]
fn partial_header_maps_missing_columns_to_null() {
    let input = "Date,Report Type,Oil BBL\n2024-01-05,Daily,123.4\n";
    let rows = parse_csv(input.as_bytes(), "daily.csv").unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.date.as_deref(), Some("2024-01-05"));
    assert_eq!(row.report_type.as_deref(), Some("Daily"));
    assert_eq!(row.oil_bbl, Some(123.4));
    assert_eq!(row.source_file, "daily.csv");

    // Every column the header lacked is materialized as null.
    assert_eq!(row.field_name_location, None);
    assert_eq!(row.oil_sales_bbl, None);
    assert_eq!(row.gas_sales_mcf, None);
    assert_eq!(row.gas_lift_mcf, None);
    assert_eq!(row.produced_water_bwpd, None);
    assert_eq!(row.return_gas_mcf, None);
    assert_eq!(row.flare_mcf, None);
    assert_eq!(row.oil_stock_bbl, None);
    assert_eq!(row.injection_pressure_psi, None);
    assert_eq!(row.suction_psi, None);
    assert_eq!(row.discharge_psi, None);
    assert_eq!(row.rpm, None);
    assert_eq!(row.gas_flow_mcfd, None);
    assert_eq!(row.hours_operating, None);
    assert_eq!(row.operational_notes, None);
}

#[test]
fn header_order_does_not_matter() {
    let input = "Oil BBL,Date\n10.5,2024-02-01\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date.as_deref(), Some("2024-02-01"));
    assert_eq!(rows[0].oil_bbl, Some(10.5));
}

#[test]
fn unknown_headers_are_ignored() {
    let input = "Rig Id,Date,Shift\nR-7,2024-02-01,Night\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date.as_deref(), Some("2024-02-01"));
    assert!(rows[0].report_type.is_none());
}

#[test]
fn values_and_headers_are_trimmed() {
    let input = " Date , Report Type \n 2024-03-01 ,  Daily  \n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date.as_deref(), Some("2024-03-01"));
    assert_eq!(rows[0].report_type.as_deref(), Some("Daily"));
}

#[test]
fn blank_lines_are_skipped_and_empty_rows_dropped() {
    let input = "Date,Report Type,Oil BBL\n\n2024-01-05,Daily,1\n\n,,\n,,not-a-number\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    // The ",," line and the line whose only value coerces to null both drop.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].oil_bbl, Some(1.0));
}

#[test]
fn invalid_cells_coerce_to_null_without_failing_the_row() {
    let input = "Date,Oil BBL,Operational Notes\nyesterday,lots,rig down\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, None);
    assert_eq!(rows[0].oil_bbl, None);
    assert_eq!(rows[0].operational_notes.as_deref(), Some("rig down"));
}

#[test]
fn short_records_map_missing_fields_to_null() {
    let input = "Date,Report Type,Oil BBL\n2024-01-05,Daily\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].oil_bbl, None);
}

#[test]
fn header_only_and_empty_inputs_yield_no_rows() {
    assert!(parse_csv(b"Date,Oil BBL\n", "r.csv").unwrap().is_empty());
    assert!(parse_csv(b"", "r.csv").unwrap().is_empty());
}

#[test]
fn quotes_are_literal_characters_not_field_delimiters() {
    // Documented simplification: no quoted-field handling. An embedded comma
    // splits the field and the quote characters survive in the data.
    let input = "Date,Report Type,Oil BBL\n2024-01-05,\"Daily, final\",9\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].report_type.as_deref(), Some("\"Daily"));
    // The shifted third field is no longer numeric.
    assert_eq!(rows[0].oil_bbl, None);
}

#[test]
fn crlf_line_endings_are_handled() {
    let input = "Date,Oil BBL\r\n2024-01-05,5\r\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].oil_bbl, Some(5.0));
}

#[test]
fn numeric_columns_reject_non_finite_text() {
    let input = "Date,Oil BBL,Suction PSI,RPM\n2024-01-05,inf,NaN,1200\n";
    let rows = parse_csv(input.as_bytes(), "r.csv").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].oil_bbl, None);
    assert_eq!(rows[0].suction_psi, None);
    assert_eq!(rows[0].rpm, Some(1200.0));
}
