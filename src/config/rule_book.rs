// ==========================================
// 名字→编码 - 规则集合 (RuleBook)
// ==========================================
// 职责: ERP + NIK 规则的加载与默认值
// 存储: 内置常量，或 JSON 规则文件（字段缺省回落到内置值）
// ==========================================

use crate::config::erp_rules::ErpRules;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::nik_rules::NikRules;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 全部编码规则（构造引擎时注入，运行期只读）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleBook {
    pub erp: ErpRules,
    pub nik: NikRules,
}

impl RuleBook {
    /// 从 JSON 字符串加载规则
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let book: RuleBook = serde_json::from_str(raw)?;
        book.validate()?;
        Ok(book)
    }

    /// 从 JSON 文件加载规则
    ///
    /// # 示例
    /// ```no_run
    /// use name_to_code::config::RuleBook;
    /// let book = RuleBook::from_json_file("rules/region_id.json").unwrap();
    /// ```
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let book = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            erp_examples = book.erp.examples.len(),
            nik_examples = book.nik.examples.len(),
            "规则文件已加载"
        );
        Ok(book)
    }

    /// 基础校验：组码依赖的表不可为空
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            ("erp.materials", self.erp.materials.is_empty()),
            ("nik.departments", self.nik.departments.is_empty()),
            ("nik.jobs", self.nik.jobs.is_empty()),
            ("nik.positions", self.nik.positions.is_empty()),
        ];
        for (name, empty) in required {
            if empty {
                return Err(ConfigError::InvalidRule(format!("{} 不可为空", name)));
            }
        }
        if self.erp.division.is_empty() {
            return Err(ConfigError::InvalidRule("erp.division 不可为空".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_json_is_builtin() {
        let book = RuleBook::from_json_str("{}").unwrap();
        assert_eq!(book, RuleBook::default());
    }

    #[test]
    fn test_override_single_table() {
        let raw = r#"{"nik":{"jobs":{"entries":[{"label":"Contract","code":"3"}]}}}"#;
        let book = RuleBook::from_json_str(raw).unwrap();
        assert_eq!(book.nik.jobs.code_for("Contract"), Some("3"));
        assert_eq!(book.nik.jobs.code_for("Full Time"), None);
        assert_eq!(book.erp, RuleBook::default().erp);
    }

    #[test]
    fn test_empty_required_table_rejected() {
        let raw = r#"{"erp":{"materials":{"entries":[]}}}"#;
        let err = RuleBook::from_json_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"erp":{{"division":"2"}}}}"#).unwrap();

        let book = RuleBook::from_json_file(temp_file.path()).unwrap();
        assert_eq!(book.erp.division, "2");
    }

    #[test]
    fn test_from_json_file_not_found() {
        let err = RuleBook::from_json_file("non_existent_rules.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = RuleBook::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
