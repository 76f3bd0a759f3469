// ==========================================
// 名字→编码 - 精确查表
// ==========================================
// 职责: 名称与表项按相同方式标准化后比较，首个命中者胜
// 说明: 子串包含回退仅用于通用 lookup 方案，ERP/NIK 路径不使用
// ==========================================

use crate::domain::name_code::NameCodePair;
use crate::engine::normalizer::NormalizeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupMatcher {
    mode: NormalizeMode,
    case_insensitive: bool,
}

impl LookupMatcher {
    pub fn new(mode: NormalizeMode, case_insensitive: bool) -> Self {
        Self {
            mode,
            case_insensitive,
        }
    }

    /// ERP 名称：引号收紧 + 忽略大小写
    pub fn erp() -> Self {
        Self::new(NormalizeMode::Erp, true)
    }

    /// 通用：仅折叠空白，区分大小写
    pub fn plain() -> Self {
        Self::new(NormalizeMode::Plain, false)
    }

    fn key(&self, text: &str) -> String {
        let normalized = self.mode.apply(text);
        if self.case_insensitive {
            normalized.to_lowercase()
        } else {
            normalized
        }
    }

    /// 精确匹配
    pub fn find<'a, I>(&self, name: &str, table: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a NameCodePair>,
    {
        let wanted = self.key(name);
        table
            .into_iter()
            .find(|pair| self.key(&pair.name) == wanted)
            .map(|pair| pair.code.as_str())
    }

    /// 子串包含匹配（查询是表名子串，或表名是查询子串）
    ///
    /// 标准化后为空的表名不参与比较
    pub fn find_containing<'a, I>(&self, name: &str, table: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a NameCodePair>,
    {
        let wanted = self.key(name);
        if wanted.is_empty() {
            return None;
        }
        table
            .into_iter()
            .find(|pair| {
                let candidate = self.key(&pair.name);
                !candidate.is_empty()
                    && (candidate.contains(wanted.as_str()) || wanted.contains(candidate.as_str()))
            })
            .map(|pair| pair.code.as_str())
    }
}
