// ==========================================
// 名字→编码 - 表格追加编码列
// ==========================================
// 职责: 读表格 → 逐行取名称转化 → 追加编码列 → 写出
// 说明: 行与行之间互不依赖
// ==========================================

use crate::api::encode_api::EncodeApi;
use crate::domain::types::Scheme;
use crate::engine::dispatcher::TransformOptions;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::lookup_loader::{lookup_table_from_sheet, DEFAULT_CODE_COLUMN};
use crate::importer::sheet::{SheetSelector, SheetTable};
use crate::importer::sheet_io_trait::{SheetParser, SheetWriter};
use crate::importer::sheet_writer::UniversalSheetWriter;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 未指定名称列时按顺序探测的列
pub const DEFAULT_NAME_COLUMNS: &[&str] = &["Item Name", "Chinese name", "Item Code"];

/// 默认新列名
pub const DEFAULT_NEW_COLUMN: &str = "新编码";

/// 默认输出文件名后缀
pub const OUTPUT_SUFFIX: &str = "_with_std_code";

#[derive(Debug, Clone)]
pub struct CodeColumnOptions {
    /// 输出路径（None → `<stem>_with_std_code.<ext>`）
    pub output_path: Option<PathBuf>,
    /// 名称列（None → 探测 DEFAULT_NAME_COLUMNS，都不存在则用第一列）
    pub name_columns: Option<Vec<String>>,
    pub code_column: String,
    pub new_column: String,
    pub scheme: Scheme,
    pub exact_only: bool,
    /// 未生成编码时回填原编码列的值
    pub fallback_to_original: bool,
    /// 只保留新列非空的行
    pub only_encoded_rows: bool,
    pub sheet: SheetSelector,
}

impl Default for CodeColumnOptions {
    fn default() -> Self {
        Self {
            output_path: None,
            name_columns: None,
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            new_column: DEFAULT_NEW_COLUMN.to_string(),
            scheme: Scheme::ErpProduct,
            exact_only: false,
            fallback_to_original: true,
            only_encoded_rows: false,
            sheet: SheetSelector::default(),
        }
    }
}

/// 处理结果汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeColumnReport {
    pub output_path: PathBuf,
    pub rows_read: usize,
    pub rows_encoded: usize,
    pub rows_written: usize,
}

/// 默认输出路径：同目录，`<stem>_with_std_code.<ext>`（不可写出的格式改为 .xlsx）
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| UniversalSheetWriter::supports(e))
        .unwrap_or("xlsx");
    input.with_file_name(format!("{}{}.{}", stem, OUTPUT_SUFFIX, ext))
}

pub struct CodeColumnProcessor<'a> {
    api: &'a EncodeApi,
}

impl<'a> CodeColumnProcessor<'a> {
    pub fn new(api: &'a EncodeApi) -> Self {
        Self { api }
    }

    /// 处理文件并写出
    pub fn process<P: AsRef<Path>>(
        &self,
        input: P,
        options: &CodeColumnOptions,
    ) -> ImportResult<CodeColumnReport> {
        let input = input.as_ref();
        let mut sheet = UniversalFileParser.parse_sheet(input, &options.sheet)?;
        let rows_read = sheet.len();

        let rows_encoded = self.apply(&mut sheet, options);

        let output_path = options
            .output_path
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        UniversalSheetWriter.write_sheet(&sheet, &output_path)?;

        let report = CodeColumnReport {
            output_path,
            rows_read,
            rows_encoded,
            rows_written: sheet.len(),
        };
        info!(
            input = %input.display(),
            output = %report.output_path.display(),
            scheme = %options.scheme,
            rows_read = report.rows_read,
            rows_encoded = report.rows_encoded,
            rows_written = report.rows_written,
            "编码列已写出"
        );
        Ok(report)
    }

    /// 在内存表格上追加编码列，返回成功编码的行数
    pub fn apply(&self, sheet: &mut SheetTable, options: &CodeColumnOptions) -> usize {
        let name_columns = resolve_name_columns(sheet, options.name_columns.as_deref());
        let code_column = if sheet.has_column(&options.code_column) {
            options.code_column.clone()
        } else {
            sheet.headers.first().cloned().unwrap_or_default()
        };

        // lookup 方案以输入表自身作为查找表（编码列不参与拼接名称）
        let lookup_table = match options.scheme {
            Scheme::Lookup => {
                let key_columns: Vec<String> = name_columns
                    .iter()
                    .filter(|c| **c != code_column)
                    .cloned()
                    .collect();
                Some(lookup_table_from_sheet(sheet, Some(&key_columns), &code_column))
            }
            _ => None,
        };
        let transform_options = TransformOptions {
            lookup_table: lookup_table.as_deref(),
            exact_only: options.exact_only,
        };

        let mut rows_encoded = 0;
        let codes: Vec<String> = (0..sheet.len())
            .map(|row| {
                let original = || {
                    if options.fallback_to_original {
                        sheet.cell(row, &code_column).unwrap_or_default().to_string()
                    } else {
                        String::new()
                    }
                };

                let Some(name) = name_columns.iter().find_map(|col| sheet.cell(row, col)) else {
                    return original();
                };

                match self
                    .api
                    .dispatcher()
                    .try_transform(name, options.scheme, transform_options)
                {
                    Ok(code) => {
                        rows_encoded += 1;
                        code
                    }
                    Err(e) => {
                        debug!(row, name, error = %e, "行未生成编码");
                        original()
                    }
                }
            })
            .collect();

        sheet.set_column(&options.new_column, codes);

        if options.only_encoded_rows {
            if let Some(col) = sheet.column_index(&options.new_column) {
                sheet.rows.retain(|r| !r[col].trim().is_empty());
            }
        }

        rows_encoded
    }
}

fn resolve_name_columns(sheet: &SheetTable, requested: Option<&[String]>) -> Vec<String> {
    if let Some(cols) = requested.filter(|c| !c.is_empty()) {
        return cols.to_vec();
    }
    let detected: Vec<String> = DEFAULT_NAME_COLUMNS
        .iter()
        .filter(|c| sheet.has_column(c))
        .map(|c| c.to_string())
        .collect();
    if !detected.is_empty() {
        return detected;
    }
    sheet.headers.first().cloned().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SheetTable {
        let mut t = SheetTable::new(
            Some("Item".to_string()),
            vec!["Item Code".to_string(), "Item Name".to_string()],
        );
        t.push_row(vec!["OLD-1".to_string(), "PE Pipe 20mm Black PN10 GB (Metric)".to_string()]);
        t.push_row(vec!["OLD-2".to_string(), "Garden Hose 10m".to_string()]);
        t.push_row(vec!["OLD-3".to_string(), "".to_string()]);
        t
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/item-list-slim.xlsx")),
            PathBuf::from("/data/item-list-slim_with_std_code.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("/data/items.xls")),
            PathBuf::from("/data/items_with_std_code.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("items.csv")),
            PathBuf::from("items_with_std_code.csv")
        );
    }

    #[test]
    fn test_apply_with_fallback() {
        let api = EncodeApi::builtin();
        let mut t = sheet();
        let encoded = CodeColumnProcessor::new(api).apply(&mut t, &CodeColumnOptions::default());

        assert_eq!(encoded, 1);
        // 名称列探测顺序: Item Name 优先，其次 Item Code
        assert_eq!(t.cell(0, DEFAULT_NEW_COLUMN), Some("1101314101"));
        assert_eq!(t.cell(1, DEFAULT_NEW_COLUMN), Some("OLD-2"));
    }

    #[test]
    fn test_apply_only_encoded_rows_without_fallback() {
        let api = EncodeApi::builtin();
        let mut t = sheet();
        let options = CodeColumnOptions {
            name_columns: Some(vec!["Item Name".to_string()]),
            fallback_to_original: false,
            only_encoded_rows: true,
            ..CodeColumnOptions::default()
        };
        CodeColumnProcessor::new(api).apply(&mut t, &options);

        assert_eq!(t.len(), 1);
        assert_eq!(t.cell(0, "Item Code"), Some("OLD-1"));
    }

    #[test]
    fn test_resolve_name_columns_falls_back_to_first() {
        let t = SheetTable::new(None, vec!["名称".to_string(), "编码".to_string()]);
        assert_eq!(resolve_name_columns(&t, None), vec!["名称".to_string()]);
    }
}
