// ==========================================
// 名字→编码 - 表格写出实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sheet::SheetTable;
use crate::importer::sheet_io_trait::SheetWriter;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// 未指定来源工作表名时的输出表名
pub const DEFAULT_SHEET_NAME: &str = "Item";

// ==========================================
// CSV Writer 实现
// ==========================================
pub struct CsvSheetWriter;

impl SheetWriter for CsvSheetWriter {
    fn write_sheet(&self, table: &SheetTable, file_path: &Path) -> ImportResult<()> {
        let mut writer = csv::Writer::from_path(file_path)
            .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;

        writer
            .write_record(&table.headers)
            .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| ImportError::CsvWriteError(e.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

// ==========================================
// Excel Writer 实现
// ==========================================
pub struct XlsxSheetWriter;

impl SheetWriter for XlsxSheetWriter {
    fn write_sheet(&self, table: &SheetTable, file_path: &Path) -> ImportResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.sheet_name.as_deref().unwrap_or(DEFAULT_SHEET_NAME))?;

        let header_rows = std::iter::once(&table.headers);
        for (row_idx, row) in header_rows.chain(table.rows.iter()).enumerate() {
            let r = u32::try_from(row_idx)
                .map_err(|_| ImportError::ExcelWriteError(format!("行数超限: {}", row_idx)))?;
            for (col_idx, value) in row.iter().enumerate() {
                let c = u16::try_from(col_idx)
                    .map_err(|_| ImportError::ExcelWriteError(format!("列数超限: {}", col_idx)))?;
                if !value.is_empty() {
                    worksheet.write_string(r, c, value.as_str())?;
                }
            }
        }

        workbook.save(file_path)?;
        Ok(())
    }
}

// ==========================================
// 通用写出（根据扩展名自动选择）
// ==========================================
pub struct UniversalSheetWriter;

impl UniversalSheetWriter {
    /// 是否支持写出该扩展名
    pub fn supports(ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "xlsx" | "xlsm")
    }
}

impl SheetWriter for UniversalSheetWriter {
    fn write_sheet(&self, table: &SheetTable, file_path: &Path) -> ImportResult<()> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "csv" => CsvSheetWriter.write_sheet(table, file_path),
            "xlsx" | "xlsm" => XlsxSheetWriter.write_sheet(table, file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
