// ==========================================
// 名字→编码 - 表格读写 Trait
// ==========================================
// 职责: 定义表格解析/写出接口（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::sheet::{SheetSelector, SheetTable};
use std::path::Path;

// ==========================================
// SheetParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait SheetParser: Send + Sync {
    /// 解析文件为表格
    ///
    /// # 参数
    /// - file_path: 文件路径
    /// - sheet: 工作表选择（CSV 忽略）
    ///
    /// # 返回
    /// - Ok(SheetTable): 首行为表头，完全空白的行已跳过
    /// - Err: 文件不存在、格式不支持、解析失败
    fn parse_sheet(&self, file_path: &Path, sheet: &SheetSelector) -> ImportResult<SheetTable>;
}

// ==========================================
// SheetWriter Trait
// ==========================================
// 实现者: CsvSheetWriter, XlsxSheetWriter
pub trait SheetWriter: Send + Sync {
    /// 写出表格（覆盖已有文件）
    fn write_sheet(&self, table: &SheetTable, file_path: &Path) -> ImportResult<()>;
}
