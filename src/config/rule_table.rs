// ==========================================
// 名字→编码 - 规则表
// ==========================================
// 职责: 受控词条 → 定宽编码段 的有序映射
// 约束: 进程启动时定义一次，之后只读
// ==========================================

use serde::{Deserialize, Serialize};

/// 词条匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// 小写子串包含
    #[default]
    Substring,
    /// 小写整词匹配（词边界）
    WholeWord,
    /// 整串相等（按词条取值的表：NIK 字段、材质压力档位）
    Exact,
}

/// 规则表中的一条词条
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub label: String,
    pub code: String,
}

/// 有序规则表（声明顺序即匹配优先级，先命中者胜）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default)]
    pub mode: MatchMode,
    pub entries: Vec<RuleEntry>,
}

impl RuleTable {
    pub fn new(mode: MatchMode, entries: &[(&str, &str)]) -> Self {
        Self {
            mode,
            entries: entries
                .iter()
                .map(|(label, code)| RuleEntry {
                    label: label.to_string(),
                    code: code.to_string(),
                })
                .collect(),
        }
    }

    pub fn substring(entries: &[(&str, &str)]) -> Self {
        Self::new(MatchMode::Substring, entries)
    }

    pub fn whole_word(entries: &[(&str, &str)]) -> Self {
        Self::new(MatchMode::WholeWord, entries)
    }

    pub fn exact(entries: &[(&str, &str)]) -> Self {
        Self::new(MatchMode::Exact, entries)
    }

    /// 按词条精确取编码（区分大小写）
    pub fn code_for(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.code.as_str())
    }

    /// 第一条词条（压力档位表中即该材质最低压力）
    pub fn first(&self) -> Option<&RuleEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
