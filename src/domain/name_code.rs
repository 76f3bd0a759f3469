// ==========================================
// 名字→编码 - 名称/编码对
// ==========================================
// 职责: 规则文档中的转化例子 + 调用方提供的外部查找表
// ==========================================

use serde::{Deserialize, Serialize};

/// 名称 → 编码 对（ERP 例子表 / 外部查找表的一行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCodePair {
    pub name: String,
    pub code: String,
}

impl NameCodePair {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

impl From<(&str, &str)> for NameCodePair {
    fn from((name, code): (&str, &str)) -> Self {
        Self::new(name, code)
    }
}

impl From<(String, String)> for NameCodePair {
    fn from((name, code): (String, String)) -> Self {
        Self { name, code }
    }
}

/// NIK 例子（编码在前，描述在后，与规则文档列顺序一致）
///
/// 描述格式: `部门 / 姓名 / 职位 / 入职日期(dd/mm/yyyy)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NikExample {
    pub code: String,
    pub description: String,
}

impl NikExample {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
