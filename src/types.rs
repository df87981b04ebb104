//! Core data model types for ingestion.
//!
//! Parsers produce [`UnifiedRow`]s: one record per source row, projected onto
//! the fixed unified column set. Every column is present in every row (null
//! when the source lacked it), so downstream consumers never branch on
//! missing keys; the record type enforces this at compile time.

use chrono::NaiveDateTime;

use crate::coerce;
use crate::error::{IngestError, IngestResult};
use crate::schema::{col, COLUMN_COUNT};

/// A raw cell value as read from a source file, prior to coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Textual cell contents (already trimmed, never empty).
    Text(String),
    /// Native numeric cell (spreadsheet formats only).
    Number(f64),
    /// Native date/time cell (spreadsheet formats only).
    Timestamp(NaiveDateTime),
}

/// A normalized cell value in schema column order, tagged with its bind type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// Text column value (date, report type, location, notes).
    Text(Option<&'a str>),
    /// Numeric measurement value.
    Number(Option<f64>),
}

impl Cell<'_> {
    /// True when the value is null or the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Text(v) => v.map_or(true, str::is_empty),
            Cell::Number(v) => v.is_none(),
        }
    }
}

/// One normalized report row keyed by the unified 18-column schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnifiedRow {
    pub date: Option<String>,
    pub report_type: Option<String>,
    pub field_name_location: Option<String>,
    pub oil_bbl: Option<f64>,
    pub oil_sales_bbl: Option<f64>,
    pub gas_sales_mcf: Option<f64>,
    pub gas_lift_mcf: Option<f64>,
    pub produced_water_bwpd: Option<f64>,
    pub return_gas_mcf: Option<f64>,
    pub flare_mcf: Option<f64>,
    pub oil_stock_bbl: Option<f64>,
    pub injection_pressure_psi: Option<f64>,
    pub suction_psi: Option<f64>,
    pub discharge_psi: Option<f64>,
    pub rpm: Option<f64>,
    pub gas_flow_mcfd: Option<f64>,
    pub hours_operating: Option<f64>,
    pub operational_notes: Option<String>,
    /// Originating filename, stamped by the parser.
    pub source_file: String,
}

impl UnifiedRow {
    /// Build a row by looking up each unified column's raw cell and applying
    /// the per-kind coercion. `lookup` returns `None` for columns the source
    /// file does not carry; those stay null.
    pub(crate) fn from_cells(
        mut lookup: impl FnMut(&'static str) -> Option<RawCell>,
        source_file: &str,
    ) -> Self {
        Self {
            date: lookup(col::DATE).and_then(|c| coerce::cell_to_date(&c)),
            report_type: lookup(col::REPORT_TYPE).and_then(|c| coerce::cell_to_text(&c)),
            field_name_location: lookup(col::FIELD_NAME_LOCATION)
                .and_then(|c| coerce::cell_to_text(&c)),
            oil_bbl: lookup(col::OIL_BBL).and_then(|c| coerce::cell_to_number(&c)),
            oil_sales_bbl: lookup(col::OIL_SALES_BBL).and_then(|c| coerce::cell_to_number(&c)),
            gas_sales_mcf: lookup(col::GAS_SALES_MCF).and_then(|c| coerce::cell_to_number(&c)),
            gas_lift_mcf: lookup(col::GAS_LIFT_MCF).and_then(|c| coerce::cell_to_number(&c)),
            produced_water_bwpd: lookup(col::PRODUCED_WATER_BWPD)
                .and_then(|c| coerce::cell_to_number(&c)),
            return_gas_mcf: lookup(col::RETURN_GAS_MCF).and_then(|c| coerce::cell_to_number(&c)),
            flare_mcf: lookup(col::FLARE_MCF).and_then(|c| coerce::cell_to_number(&c)),
            oil_stock_bbl: lookup(col::OIL_STOCK_BBL).and_then(|c| coerce::cell_to_number(&c)),
            injection_pressure_psi: lookup(col::INJECTION_PRESSURE_PSI)
                .and_then(|c| coerce::cell_to_number(&c)),
            suction_psi: lookup(col::SUCTION_PSI).and_then(|c| coerce::cell_to_number(&c)),
            discharge_psi: lookup(col::DISCHARGE_PSI).and_then(|c| coerce::cell_to_number(&c)),
            rpm: lookup(col::RPM).and_then(|c| coerce::cell_to_number(&c)),
            gas_flow_mcfd: lookup(col::GAS_FLOW_MCFD).and_then(|c| coerce::cell_to_number(&c)),
            hours_operating: lookup(col::HOURS_OPERATING).and_then(|c| coerce::cell_to_number(&c)),
            operational_notes: lookup(col::OPERATIONAL_NOTES)
                .and_then(|c| coerce::cell_to_text(&c)),
            source_file: source_file.to_owned(),
        }
    }

    /// The 18 column values in schema order, for positional SQL binding and
    /// the emptiness check.
    pub fn cells(&self) -> [Cell<'_>; COLUMN_COUNT] {
        [
            Cell::Text(self.date.as_deref()),
            Cell::Text(self.report_type.as_deref()),
            Cell::Text(self.field_name_location.as_deref()),
            Cell::Number(self.oil_bbl),
            Cell::Number(self.oil_sales_bbl),
            Cell::Number(self.gas_sales_mcf),
            Cell::Number(self.gas_lift_mcf),
            Cell::Number(self.produced_water_bwpd),
            Cell::Number(self.return_gas_mcf),
            Cell::Number(self.flare_mcf),
            Cell::Number(self.oil_stock_bbl),
            Cell::Number(self.injection_pressure_psi),
            Cell::Number(self.suction_psi),
            Cell::Number(self.discharge_psi),
            Cell::Number(self.rpm),
            Cell::Number(self.gas_flow_mcfd),
            Cell::Number(self.hours_operating),
            Cell::Text(self.operational_notes.as_deref()),
        ]
    }

    /// True when every value across all 18 columns is null or the empty
    /// string. Empty rows are dropped by the parsers rather than persisted.
    pub fn is_empty(&self) -> bool {
        self.cells().iter().all(Cell::is_blank)
    }
}

/// Integer tenant identifier scoping persisted rows to one account.
///
/// The id is resolved externally from a tenant slug and may arrive through
/// loosely typed boundaries, so the only constructor from raw input rejects
/// anything that is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(i64);

impl AccountId {
    /// Validate an externally resolved id. Non-finite input is an
    /// [`IngestError::InvalidTenant`] hard failure, never a silent default.
    pub fn from_raw(raw: f64) -> IngestResult<Self> {
        if !raw.is_finite() {
            return Err(IngestError::InvalidTenant(raw.to_string()));
        }
        Ok(Self(raw as i64))
    }

    /// The validated integer id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
