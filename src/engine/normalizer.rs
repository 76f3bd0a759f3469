// ==========================================
// 名字→编码 - 名称标准化
// ==========================================
// 职责: 折叠空白 / 去首尾空白 / ERP 英制尺寸引号收紧
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;

static RE_QUOTE_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\s*"\s*"#).unwrap());

/// 任意连续空白折叠为单个空格，并去掉首尾空白
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 可空输入的标准化（None → 空串）
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// ERP 名称标准化：在 normalize 基础上去掉引号两侧空白
///
/// 英制规格带引号，自由文本中引号两侧空格不统一：
/// `1/2 "` 与 `1/2"` 视为相同
pub fn normalize_for_erp(text: &str) -> String {
    RE_QUOTE_SPACING
        .replace_all(&normalize(text), "\"")
        .into_owned()
}

/// 标准化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    Plain,
    Erp,
}

impl NormalizeMode {
    pub fn apply(self, text: &str) -> String {
        match self {
            NormalizeMode::Plain => normalize(text),
            NormalizeMode::Erp => normalize_for_erp(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  PVC-U   Pipe\t20mm \n White "), "PVC-U Pipe 20mm White");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_opt_none_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" a  b ")), "a b");
    }

    #[test]
    fn test_normalize_for_erp_tightens_quotes() {
        assert_eq!(normalize_for_erp("Pipe 1/2 \" White"), "Pipe 1/2\"White");
        assert_eq!(
            normalize_for_erp("Pipe 1/2\" White"),
            normalize_for_erp("Pipe   1/2  \"   White")
        );
    }

    #[test]
    fn test_normalize_for_erp_without_quotes_is_plain() {
        assert_eq!(normalize_for_erp(" PE  Pipe "), "PE Pipe");
    }
}
