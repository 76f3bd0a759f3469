// ==========================================
// 名字→编码 - 外部查找表加载
// ==========================================
// 职责: 从表格读取 (名称, 编码) 对，作为 lookup / erp_product 方案的查找表
// 规则:
//   - 名称 = 所选名称列的非空值以单个空格拼接（默认第一列）
//   - 编码列缺失 → 空表
//   - 编码或名称为空的行跳过
// ==========================================

use crate::domain::name_code::NameCodePair;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::sheet::{SheetSelector, SheetTable};
use crate::importer::sheet_io_trait::SheetParser;
use std::path::Path;
use tracing::{info, warn};

/// 默认编码列名
pub const DEFAULT_CODE_COLUMN: &str = "Item Code";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTableOptions {
    /// 名称列（None → 第一列）
    pub name_columns: Option<Vec<String>>,
    pub code_column: String,
    pub sheet: SheetSelector,
}

impl Default for LookupTableOptions {
    fn default() -> Self {
        Self {
            name_columns: None,
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            sheet: SheetSelector::default(),
        }
    }
}

/// 从已读入的表格构造查找表
pub fn lookup_table_from_sheet(
    sheet: &SheetTable,
    name_columns: Option<&[String]>,
    code_column: &str,
) -> Vec<NameCodePair> {
    if !sheet.has_column(code_column) {
        return Vec::new();
    }

    let columns: Vec<&str> = match name_columns {
        Some(cols) if !cols.is_empty() => cols.iter().map(String::as_str).collect(),
        _ => sheet.headers.first().map(String::as_str).into_iter().collect(),
    };

    (0..sheet.len())
        .filter_map(|row| {
            let code = sheet.cell(row, code_column)?;
            let name = columns
                .iter()
                .filter_map(|col| sheet.cell(row, col))
                .collect::<Vec<_>>()
                .join(" ");
            if name.is_empty() {
                None
            } else {
                Some(NameCodePair::new(name, code))
            }
        })
        .collect()
}

/// 加载查找表（读取失败时返回错误）
pub fn try_load_lookup_table<P: AsRef<Path>>(
    path: P,
    options: &LookupTableOptions,
) -> ImportResult<Vec<NameCodePair>> {
    let path = path.as_ref();
    let sheet = UniversalFileParser.parse_sheet(path, &options.sheet)?;
    let table = lookup_table_from_sheet(&sheet, options.name_columns.as_deref(), &options.code_column);
    info!(path = %path.display(), entries = table.len(), "查找表已加载");
    Ok(table)
}

/// 加载查找表（读取失败时返回空表）
pub fn load_lookup_table<P: AsRef<Path>>(path: P, options: &LookupTableOptions) -> Vec<NameCodePair> {
    let path = path.as_ref();
    match try_load_lookup_table(path, options) {
        Ok(table) => table,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "查找表读取失败，按空表处理");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn sheet() -> SheetTable {
        let mut t = SheetTable::new(
            None,
            vec![
                "Item Name".to_string(),
                "Chinese name".to_string(),
                "Item Code".to_string(),
            ],
        );
        t.push_row(vec!["Tee".to_string(), "三通".to_string(), "T-1".to_string()]);
        t.push_row(vec!["Valve".to_string(), "".to_string(), "".to_string()]);
        t.push_row(vec!["".to_string(), "弯头".to_string(), "E-1".to_string()]);
        t
    }

    #[test]
    fn test_default_name_column_is_first() {
        let table = lookup_table_from_sheet(&sheet(), None, "Item Code");
        // 第 2 行无编码，第 3 行第一列为空
        assert_eq!(table, vec![NameCodePair::new("Tee", "T-1")]);
    }

    #[test]
    fn test_multiple_name_columns_joined() {
        let cols = vec!["Item Name".to_string(), "Chinese name".to_string()];
        let table = lookup_table_from_sheet(&sheet(), Some(&cols), "Item Code");
        assert_eq!(
            table,
            vec![NameCodePair::new("Tee 三通", "T-1"), NameCodePair::new("弯头", "E-1")]
        );
    }

    #[test]
    fn test_missing_code_column_is_empty() {
        assert!(lookup_table_from_sheet(&sheet(), None, "Code").is_empty());
    }

    #[test]
    fn test_load_nonexistent_path_is_empty() {
        let table = load_lookup_table("non_existent_lookup.xlsx", &LookupTableOptions::default());
        assert!(table.is_empty());
        assert!(try_load_lookup_table("non_existent_lookup.xlsx", &LookupTableOptions::default()).is_err());
    }

    #[test]
    fn test_load_from_csv() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "Item Name,Item Code").unwrap();
        writeln!(temp_file, "My Custom Product,CUSTOM001").unwrap();

        let table = load_lookup_table(temp_file.path(), &LookupTableOptions::default());
        assert_eq!(table, vec![NameCodePair::new("My Custom Product", "CUSTOM001")]);
    }
}
