//! Attendance report export.
//!
//! One export service for every place the dashboard offers a download; the
//! CSV, Excel, and PDF writers all consume the same mapped row shape.

use crate::error::{AppError, Result};
use crate::models::attendance::AttendanceRecord;
use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

/// Report column headers, in output order.
const HEADERS: [&str; 4] = ["Employee", "EmployeeNumber", "Date", "Status"];

/// Supported download formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    /// File extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(AppError::parse(format!("Unknown export format: '{other}'"))),
        }
    }
}

/// One formatted report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub employee: String,
    pub employee_number: String,
    pub date: String,
    pub status: String,
}

/// Mapping from a domain record to a report row.
pub trait ExportRecord {
    fn export_row(&self) -> ExportRow;
}

impl ExportRecord for AttendanceRecord {
    fn export_row(&self) -> ExportRow {
        ExportRow {
            employee: self.employee_name.clone(),
            employee_number: self.employee_number.clone(),
            date: self.date.format("%d/%m/%y").to_string(),
            status: self.status.label().to_string(),
        }
    }
}

/// Export records to `path` in the given format.
pub fn export_to_file<R: ExportRecord>(records: &[R], format: ExportFormat, path: &Path) -> Result<()> {
    let rows: Vec<ExportRow> = records.iter().map(ExportRecord::export_row).collect();

    match format {
        ExportFormat::Csv => write_csv(&rows, path),
        ExportFormat::Excel => write_excel(&rows, path),
        ExportFormat::Pdf => write_pdf(&rows, path),
    }
}

fn write_csv(rows: &[ExportRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;

    for row in rows {
        writer.write_record([&row.employee, &row.employee_number, &row.date, &row.status])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_excel(rows: &[ExportRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Attendance Data")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 30)?; // Employee
    worksheet.set_column_width(1, 18)?; // EmployeeNumber
    worksheet.set_column_width(2, 12)?; // Date
    worksheet.set_column_width(3, 12)?; // Status

    // Data rows
    for (idx, record) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &record.employee)?;
        worksheet.write_string(row, 1, &record.employee_number)?;
        worksheet.write_string(row, 2, &record.date)?;
        worksheet.write_string(row, 3, &record.status)?;
    }

    // Autofilter
    if !rows.is_empty() {
        let last_row = rows.len() as u32;
        worksheet.autofilter(0, 0, last_row, 3)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

// A4 portrait, one comma-joined text line per record, 10 mm line step.
fn write_pdf(rows: &[ExportRow], path: &Path) -> Result<()> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Attendance Data", Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = 287.0;

    for row in rows {
        if y < 10.0 {
            let (page, page_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = 287.0;
        }

        let line = format!(
            "{}, {}, {}, {}",
            row.employee, row.employee_number, row.date, row.status
        );
        layer.use_text(line, 11.0, Mm(10.0), Mm(y), &font);
        y -= 10.0;
    }

    doc.save(&mut BufWriter::new(File::create(path)?))
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    Ok(())
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str, format: ExportFormat) -> String {
    let now = Local::now();
    format!(
        "{prefix}_{ts}.{ext}",
        ts = now.format("%Y%m%d_%H%M%S"),
        ext = format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::AttendanceStatus;
    use chrono::NaiveDate;

    fn sample_records() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord {
                employee_name: "John Doe".to_string(),
                employee_number: "12345".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 12, 4).unwrap(),
                status: AttendanceStatus::Present,
            },
            AttendanceRecord {
                employee_name: "Jane Smith".to_string(),
                employee_number: "67890".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 12, 4).unwrap(),
                status: AttendanceStatus::Absent,
            },
        ]
    }

    #[test]
    fn test_export_row_mapping() {
        let rows: Vec<ExportRow> = sample_records().iter().map(ExportRecord::export_row).collect();
        assert_eq!(rows[0].employee, "John Doe");
        assert_eq!(rows[0].date, "04/12/24");
        assert_eq!(rows[0].status, "Present");
        assert_eq!(rows[1].status, "Absent");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("Excel".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("doc".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("attendance_data", ExportFormat::Excel);
        assert!(name.starts_with("attendance_data_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_csv_output() {
        let path = std::env::temp_dir().join("attendance_export_test.csv");
        export_to_file(&sample_records(), ExportFormat::Csv, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "Employee,EmployeeNumber,Date,Status");
        assert_eq!(lines.next().unwrap(), "John Doe,12345,04/12/24,Present");
        assert_eq!(lines.next().unwrap(), "Jane Smith,67890,04/12/24,Absent");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_excel_output_written() {
        let path = std::env::temp_dir().join("attendance_export_test.xlsx");
        export_to_file(&sample_records(), ExportFormat::Excel, &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_pdf_output_written() {
        let path = std::env::temp_dir().join("attendance_export_test.pdf");
        export_to_file(&sample_records(), ExportFormat::Pdf, &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }
}
