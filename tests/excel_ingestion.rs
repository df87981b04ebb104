#![cfg(feature = "excel_test_writer")]

use production_ingest::ingestion::excel::parse_xlsx;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

#[tokio::test]
async fn first_worksheet_rows_are_normalized() {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "Date").unwrap();
    ws.write_string(0, 1, "Report Type").unwrap();
    ws.write_string(0, 2, "Oil BBL").unwrap();
    ws.write_string(0, 3, "Operational Notes").unwrap();

    ws.write_string(1, 0, "2024-01-05").unwrap();
    ws.write_string(1, 1, "Daily").unwrap();
    ws.write_number(1, 2, 123.4).unwrap();
    ws.write_string(1, 3, "rig down 2h").unwrap();

    // Thousands separators in a text cell still coerce.
    ws.write_string(2, 0, "01/06/2024").unwrap();
    ws.write_string(2, 1, "Daily").unwrap();
    ws.write_string(2, 2, "1,234").unwrap();

    let bytes = wb.save_to_buffer().unwrap();
    let rows = parse_xlsx(bytes, "field.xlsx").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.as_deref(), Some("2024-01-05"));
    assert_eq!(rows[0].report_type.as_deref(), Some("Daily"));
    assert_eq!(rows[0].oil_bbl, Some(123.4));
    assert_eq!(rows[0].operational_notes.as_deref(), Some("rig down 2h"));
    assert_eq!(rows[0].source_file, "field.xlsx");
    assert_eq!(rows[0].gas_sales_mcf, None);

    assert_eq!(rows[1].date.as_deref(), Some("2024-01-06"));
    assert_eq!(rows[1].oil_bbl, Some(1234.0));
}

#[tokio::test]
async fn native_date_cells_normalize_to_canonical_day() {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "Date").unwrap();
    ws.write_string(0, 1, "Oil BBL").unwrap();

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let date = ExcelDateTime::from_ymd(2024, 1, 5).unwrap();
    ws.write_datetime_with_format(1, 0, &date, &date_format)
        .unwrap();
    ws.write_number(1, 1, 7.0).unwrap();

    let bytes = wb.save_to_buffer().unwrap();
    let rows = parse_xlsx(bytes, "field.xlsx").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date.as_deref(), Some("2024-01-05"));
}

#[tokio::test]
async fn rich_text_headers_match_by_plain_text() {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();

    let bold = Format::new().set_bold();
    let plain = Format::new();
    ws.write_rich_string(0, 0, &[(&bold, "Da"), (&plain, "te")])
        .unwrap();
    ws.write_string(0, 1, "Oil BBL").unwrap();

    ws.write_string(1, 0, "2024-01-05").unwrap();
    ws.write_number(1, 1, 3.0).unwrap();

    let bytes = wb.save_to_buffer().unwrap();
    let rows = parse_xlsx(bytes, "field.xlsx").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date.as_deref(), Some("2024-01-05"));
    assert_eq!(rows[0].oil_bbl, Some(3.0));
}

#[tokio::test]
async fn only_the_first_worksheet_is_read() {
    let mut wb = Workbook::new();
    let ws1 = wb.add_worksheet();
    ws1.write_string(0, 0, "Date").unwrap();
    ws1.write_string(1, 0, "2024-01-05").unwrap();

    let ws2 = wb.add_worksheet();
    ws2.write_string(0, 0, "Date").unwrap();
    ws2.write_string(1, 0, "2030-12-31").unwrap();
    ws2.write_string(2, 0, "2030-12-30").unwrap();

    let bytes = wb.save_to_buffer().unwrap();
    let rows = parse_xlsx(bytes, "field.xlsx").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date.as_deref(), Some("2024-01-05"));
}

#[tokio::test]
async fn empty_worksheet_yields_no_rows() {
    let mut wb = Workbook::new();
    wb.add_worksheet();
    let bytes = wb.save_to_buffer().unwrap();
    assert!(parse_xlsx(bytes, "empty.xlsx").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_and_missing_cells_are_null_and_empty_rows_drop() {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "Date").unwrap();
    ws.write_string(0, 1, "Report Type").unwrap();
    ws.write_string(0, 2, "Oil BBL").unwrap();

    // Row with only whitespace text: drops after coercion.
    ws.write_string(1, 1, "   ").unwrap();
    // Row with one real value: kept, missing cells null.
    ws.write_number(2, 2, 11.0).unwrap();

    let bytes = wb.save_to_buffer().unwrap();
    let rows = parse_xlsx(bytes, "field.xlsx").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, None);
    assert_eq!(rows[0].report_type, None);
    assert_eq!(rows[0].oil_bbl, Some(11.0));
}

#[tokio::test]
async fn corrupt_workbook_bytes_are_an_error() {
    let err = parse_xlsx(b"definitely not a zip archive".to_vec(), "bad.xlsx")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("workbook"));
}
