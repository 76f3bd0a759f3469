// ==========================================
// 名字→编码 - 内存表格
// ==========================================
// 职责: 保留列顺序的表格数据（读入 → 追加编码列 → 写出）
// ==========================================

use serde::{Deserialize, Serialize};

/// 工作表选择
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl std::str::FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    /// 纯数字按序号，否则按名称
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<usize>() {
            Ok(idx) => SheetSelector::Index(idx),
            Err(_) => SheetSelector::Name(trimmed.to_string()),
        })
    }
}

/// 表格（首行为表头）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetTable {
    /// 来源工作表名（CSV 无）
    pub sheet_name: Option<String>,
    pub headers: Vec<String>,
    /// 每行与 headers 等长
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(sheet_name: Option<String>, headers: Vec<String>) -> Self {
        Self {
            sheet_name,
            headers,
            rows: Vec::new(),
        }
    }

    /// 追加一行（不足补空，超出截断）
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.column_index(header).is_some()
    }

    /// 取单元格（去首尾空白，空值返回 None）
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column_index(header)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 写入整列；列已存在则覆盖，否则追加到末尾
    pub fn set_column(&mut self, header: &str, values: Vec<String>) {
        match self.column_index(header) {
            Some(col) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
            None => {
                self.headers.push(header.to_string());
                let mut values = values.into_iter();
                for row in self.rows.iter_mut() {
                    row.push(values.next().unwrap_or_default());
                }
            }
        }
    }
}
