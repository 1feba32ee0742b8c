use crate::domain::entities::report::Report;
use crate::domain::entities::snapshot::StockSnapshot;
use crate::domain::entities::source_set::SourceResultSet;
use crate::domain::error::DomainError;
use crate::domain::ports::report_writer::ReportWriter;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

const HEADERS: [&str; 7] = [
    "Name",
    "Ticker",
    "Price",
    "Sector",
    "Industry",
    "Market Cap",
    "P/E Ratio",
];

/// Multi-sheet xlsx writer: one sheet per result set, fixed header row.
/// The workbook is assembled in memory and saved in a single step, so a
/// failed save leaves no partial file behind.
pub struct XlsxReportWriter;

/// What one snapshot puts in each column. `None` stays an empty cell,
/// never the text "None" and never a zero.
#[derive(Debug, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
}

pub(crate) fn row_cells(snapshot: &StockSnapshot) -> [Option<Cell>; 7] {
    [
        Some(Cell::Text(snapshot.company.as_str().to_string())),
        snapshot
            .ticker
            .as_ref()
            .map(|t| Cell::Text(t.as_str().to_string())),
        snapshot.price.map(Cell::Number),
        snapshot.sector.clone().map(Cell::Text),
        snapshot.industry.clone().map(Cell::Text),
        snapshot.market_cap.map(Cell::Number),
        snapshot.pe_ratio.map(Cell::Number),
    ]
}

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_sheet(
        worksheet: &mut Worksheet,
        set: &SourceResultSet,
        header_format: &Format,
    ) -> Result<(), rust_xlsxwriter::XlsxError> {
        worksheet.set_name(&set.source_name)?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
        }

        for (i, snapshot) in set.rows.iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, cell) in row_cells(snapshot).into_iter().enumerate() {
                match cell {
                    Some(Cell::Text(text)) => {
                        worksheet.write_string(row, col as u16, text)?;
                    }
                    Some(Cell::Number(value)) => {
                        worksheet.write_number(row, col as u16, value)?;
                    }
                    None => {} // absent: leave the cell empty
                }
            }
        }
        Ok(())
    }
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, report: &Report, destination: &Path) -> Result<(), DomainError> {
        let to_write_error = |e: rust_xlsxwriter::XlsxError| DomainError::Write {
            path: destination.display().to_string(),
            reason: e.to_string(),
        };

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for set in report.sheets() {
            let worksheet = workbook.add_worksheet();
            Self::write_sheet(worksheet, set, &header_format).map_err(to_write_error)?;
        }

        workbook.save(destination).map_err(to_write_error)
    }
}
