// ==========================================
// 名字→编码 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sheet::{SheetSelector, SheetTable};
use crate::importer::sheet_io_trait::SheetParser;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl SheetParser for CsvParser {
    fn parse_sheet(&self, file_path: &Path, _sheet: &SheetSelector) -> ImportResult<SheetTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut table = SheetTable::new(None, headers);
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // 跳过完全空白的行
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl SheetParser for ExcelParser {
    fn parse_sheet(&self, file_path: &Path, sheet: &SheetSelector) -> ImportResult<SheetTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = match sheet {
            SheetSelector::Index(idx) => sheet_names
                .get(*idx)
                .cloned()
                .ok_or_else(|| ImportError::SheetNotFound(format!("#{}", idx)))?,
            SheetSelector::Name(name) => {
                if !sheet_names.iter().any(|n| n == name) {
                    return Err(ImportError::SheetNotFound(name.clone()));
                }
                name.clone()
            }
        };

        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut table = SheetTable::new(Some(sheet_name), headers);
        for data_row in rows {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            // 跳过完全空白的行
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl SheetParser for UniversalFileParser {
    fn parse_sheet(&self, file_path: &Path, sheet: &SheetSelector) -> ImportResult<SheetTable> {
        let ext = extension_of(file_path);
        match ext.as_str() {
            "csv" => CsvParser.parse_sheet(file_path, sheet),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_sheet(file_path, sheet),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
