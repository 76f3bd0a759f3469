// ==========================================
// 名字→编码 - 表格适配层
// ==========================================
// 职责: Excel/CSV 读入、查找表加载、追加编码列写出
// 说明: 核心编码逻辑不依赖本层
// ==========================================

// 模块声明
pub mod code_column;
pub mod error;
pub mod file_parser;
pub mod lookup_loader;
pub mod sheet;
pub mod sheet_io_trait;
pub mod sheet_writer;

// 重导出核心类型
pub use code_column::{
    default_output_path, CodeColumnOptions, CodeColumnProcessor, CodeColumnReport,
    DEFAULT_NAME_COLUMNS, DEFAULT_NEW_COLUMN,
};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use lookup_loader::{
    load_lookup_table, lookup_table_from_sheet, try_load_lookup_table, LookupTableOptions,
    DEFAULT_CODE_COLUMN,
};
pub use sheet::{SheetSelector, SheetTable};
pub use sheet_writer::{CsvSheetWriter, UniversalSheetWriter, XlsxSheetWriter};

// 重导出 Trait 接口
pub use sheet_io_trait::{SheetParser, SheetWriter};
