use crate::Table;
use itertools::Itertools;
use log::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XLSX error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Write a single table to an `.xlsx` workbook.
pub fn export_xlsx(table: &Table, path: &Path) -> Result<(), ExportError> {
    export_xlsx_sheets(&[table], path)
}

/// Write each table to its own sheet of one `.xlsx` workbook.
pub fn export_xlsx_sheets(tables: &[&Table], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let label = Format::new().set_bold();
    for table in tables {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&table.name)?;
        write_sheet(sheet, table, &label)?;
    }
    workbook.save(path)?;
    info!("Wrote {} sheet(s) to {}", tables.len(), path.display());
    Ok(())
}

/// Labels go in row 0 and column 0; cell `(i, j)` lands at `(i + 1, j + 1)`.
fn write_sheet(sheet: &mut Worksheet, table: &Table, label: &Format) -> Result<(), XlsxError> {
    for (j, l) in table.col_labels.iter().enumerate() {
        sheet.write_string_with_format(0, j as u16 + 1, l, label)?;
    }
    for (i, (l, row)) in table.row_labels.iter().zip(&table.cells).enumerate() {
        let r = i as u32 + 1;
        sheet.write_string_with_format(r, 0, l, label)?;
        for (j, cell) in row.iter().enumerate() {
            sheet.write_string(r, j as u16 + 1, cell)?;
        }
    }
    Ok(())
}

/// Write the table as tab separated values, in the same layout as the sheet.
pub fn export_tsv(table: &Table, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, to_tsv(table))?;
    info!("Wrote {}", path.display());
    Ok(())
}

pub fn to_tsv(table: &Table) -> String {
    let mut out = format!("\t{}\n", table.col_labels.iter().join("\t"));
    for (l, row) in table.row_labels.iter().zip(&table.cells) {
        out += &format!("{l}\t{}\n", row.iter().join("\t"));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::render;
    use ed_types::Grid;

    fn table() -> Table {
        let mut g = Grid::<i32>::try_new(2, 3).unwrap();
        g[(1, 2)] = 7;
        render("Distances", &g, &['x'], &['y', 'z'])
    }

    fn tmp(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ed-table-{}-{name}", std::process::id()))
    }

    #[test]
    fn tsv_layout() {
        assert_eq!(to_tsv(&table()), "\t\ty\tz\n\t0\t0\t0\nx\t0\t0\t7\n");
    }

    #[test]
    fn tsv_roundtrip_to_disk() {
        let path = tmp("table.tsv");
        export_tsv(&table(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_tsv(&table()));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn xlsx_is_written() {
        let path = tmp("table.xlsx");
        export_xlsx(&table(), &path).unwrap();
        // xlsx files are zip archives.
        assert_eq!(&std::fs::read(&path).unwrap()[..2], b"PK");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn write_failure_is_reported() {
        let path = tmp("missing-dir").join("table.tsv");
        assert!(matches!(export_tsv(&table(), &path), Err(ExportError::Io(_))));
        let path = tmp("missing-dir").join("table.xlsx");
        assert!(export_xlsx(&table(), &path).is_err());
    }
}
