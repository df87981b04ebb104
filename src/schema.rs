//! The fixed unified column schema shared by every tenant report.
//!
//! Incoming spreadsheets use heterogeneous layouts; parsers project them onto
//! this ordered 18-column set. Order matters only for positional SQL parameter
//! generation; field identity is by name.

/// Column name constants, one per unified column.
pub mod col {
    pub const DATE: &str = "Date";
    pub const REPORT_TYPE: &str = "Report Type";
    pub const FIELD_NAME_LOCATION: &str = "Field Name / Location";
    pub const OIL_BBL: &str = "Oil BBL";
    pub const OIL_SALES_BBL: &str = "Oil Sales BBL";
    pub const GAS_SALES_MCF: &str = "Gas Sales MCF";
    pub const GAS_LIFT_MCF: &str = "Gas Lift MCF";
    pub const PRODUCED_WATER_BWPD: &str = "Produced Water BWPD";
    pub const RETURN_GAS_MCF: &str = "Return Gas MCF";
    pub const FLARE_MCF: &str = "Flare MCF";
    pub const OIL_STOCK_BBL: &str = "Oil Stock BBL";
    pub const INJECTION_PRESSURE_PSI: &str = "Injection Pressure PSI";
    pub const SUCTION_PSI: &str = "Suction PSI";
    pub const DISCHARGE_PSI: &str = "Discharge PSI";
    pub const RPM: &str = "RPM";
    pub const GAS_FLOW_MCFD: &str = "Gas Flow MCFD";
    pub const HOURS_OPERATING: &str = "Hours Operating";
    pub const OPERATIONAL_NOTES: &str = "Operational Notes";
}

/// Number of unified columns.
pub const COLUMN_COUNT: usize = 18;

/// The unified column names, in the order the `production` table expects them.
pub const UNIFIED_COLUMNS: [&str; COLUMN_COUNT] = [
    col::DATE,
    col::REPORT_TYPE,
    col::FIELD_NAME_LOCATION,
    col::OIL_BBL,
    col::OIL_SALES_BBL,
    col::GAS_SALES_MCF,
    col::GAS_LIFT_MCF,
    col::PRODUCED_WATER_BWPD,
    col::RETURN_GAS_MCF,
    col::FLARE_MCF,
    col::OIL_STOCK_BBL,
    col::INJECTION_PRESSURE_PSI,
    col::SUCTION_PSI,
    col::DISCHARGE_PSI,
    col::RPM,
    col::GAS_FLOW_MCFD,
    col::HOURS_OPERATING,
    col::OPERATIONAL_NOTES,
];

/// The 14 numeric measurement columns (everything except the date, the two
/// free-text identity columns, and the notes column).
pub const NUMERIC_COLUMNS: [&str; 14] = [
    col::OIL_BBL,
    col::OIL_SALES_BBL,
    col::GAS_SALES_MCF,
    col::GAS_LIFT_MCF,
    col::PRODUCED_WATER_BWPD,
    col::RETURN_GAS_MCF,
    col::FLARE_MCF,
    col::OIL_STOCK_BBL,
    col::INJECTION_PRESSURE_PSI,
    col::SUCTION_PSI,
    col::DISCHARGE_PSI,
    col::RPM,
    col::GAS_FLOW_MCFD,
    col::HOURS_OPERATING,
];

/// Logical kind of a unified column, driving coercion and SQL bind types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Calendar date, normalized to `YYYY-MM-DD` text.
    Date,
    /// Free text (report type, location, notes).
    Text,
    /// Numeric measurement.
    Numeric,
}

/// Returns the kind of a unified column, or `None` for unknown names.
pub fn column_kind(name: &str) -> Option<ColumnKind> {
    if name == col::DATE {
        Some(ColumnKind::Date)
    } else if NUMERIC_COLUMNS.contains(&name) {
        Some(ColumnKind::Numeric)
    } else if UNIFIED_COLUMNS.contains(&name) {
        Some(ColumnKind::Text)
    } else {
        None
    }
}
