// ==========================================
// 名字→编码 - 有序规则匹配
// ==========================================
// 职责: (谓词, 编码) 规则列表，按声明顺序求值，首个命中即返回
// 输入: 已小写的名称
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::rule_table::{MatchMode, RuleTable};
use crate::domain::attributes::RuleHit;
use regex::Regex;

#[derive(Debug, Clone)]
enum Predicate {
    Contains(String),
    WholeWord(Regex),
    Equals(String),
}

impl Predicate {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::Contains(needle) => lowered.contains(needle.as_str()),
            Predicate::WholeWord(re) => re.is_match(lowered),
            Predicate::Equals(needle) => lowered == needle,
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    code: String,
    predicate: Predicate,
}

/// 编译后的有序规则表
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    rules: Vec<CompiledRule>,
}

impl RuleMatcher {
    /// 编译规则表（整词模式会为每条词条生成一个词边界正则）
    pub fn compile(table: &RuleTable) -> ConfigResult<Self> {
        let mut rules = Vec::with_capacity(table.entries.len());
        for entry in &table.entries {
            let needle = entry.label.to_lowercase();
            if needle.is_empty() {
                return Err(ConfigError::InvalidRule(format!(
                    "词条为空 (code: {})",
                    entry.code
                )));
            }
            let predicate = match table.mode {
                MatchMode::Substring => Predicate::Contains(needle),
                MatchMode::WholeWord => {
                    let pattern = format!(r"\b{}\b", regex::escape(&needle));
                    let re = Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
                        label: entry.label.clone(),
                        message: e.to_string(),
                    })?;
                    Predicate::WholeWord(re)
                }
                MatchMode::Exact => Predicate::Equals(needle),
            };
            rules.push(CompiledRule {
                label: entry.label.clone(),
                code: entry.code.clone(),
                predicate,
            });
        }
        Ok(Self { rules })
    }

    /// 首个命中的规则
    pub fn first_match(&self, lowered: &str) -> Option<RuleHit> {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(lowered))
            .map(|rule| RuleHit::new(rule.label.as_str(), rule.code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
