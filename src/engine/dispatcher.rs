// ==========================================
// 名字→编码 - 方案分发
// ==========================================
// 职责: (名称, 方案) → 对应的查表/组码路径
// 优先级: 调用方查找表 → 方案内置例子表 → 组码
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::rule_book::RuleBook;
use crate::domain::name_code::{NameCodePair, NikExample};
use crate::domain::nik::NikFields;
use crate::domain::types::Scheme;
use crate::engine::erp_composer::ErpEncoder;
use crate::engine::error::{EncodeError, EncodeResult};
use crate::engine::lookup::LookupMatcher;
use crate::engine::nik_encoder::NikEncoder;
use crate::engine::normalizer::normalize;
use tracing::debug;

/// 单次转化选项
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions<'a> {
    /// 调用方提供的查找表（优先于内置规则）
    pub lookup_table: Option<&'a [NameCodePair]>,
    /// ERP: 只做例子表精确匹配，不组码
    pub exact_only: bool,
}

impl<'a> TransformOptions<'a> {
    pub fn with_lookup_table(table: &'a [NameCodePair]) -> Self {
        Self {
            lookup_table: Some(table),
            exact_only: false,
        }
    }

    pub fn exact_only(mut self, exact_only: bool) -> Self {
        self.exact_only = exact_only;
        self
    }

    /// 非空查找表
    fn table(&self) -> Option<&'a [NameCodePair]> {
        self.lookup_table.filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    erp: ErpEncoder,
    nik: NikEncoder,
    erp_lookup: LookupMatcher,
    plain_lookup: LookupMatcher,
}

impl Dispatcher {
    pub fn new(book: &RuleBook) -> ConfigResult<Self> {
        Ok(Self {
            erp: ErpEncoder::new(&book.erp)?,
            nik: NikEncoder::new(&book.nik),
            erp_lookup: LookupMatcher::erp(),
            plain_lookup: LookupMatcher::plain(),
        })
    }

    pub fn erp(&self) -> &ErpEncoder {
        &self.erp
    }

    pub fn nik(&self) -> &NikEncoder {
        &self.nik
    }

    /// 按方案名分发（方案名非法时返回 UnsupportedScheme）
    pub fn try_transform_named(
        &self,
        name: &str,
        scheme: &str,
        options: TransformOptions<'_>,
    ) -> EncodeResult<String> {
        let scheme: Scheme = scheme.parse()?;
        self.try_transform(name, scheme, options)
    }

    /// 名称 → 编码
    ///
    /// # 路由
    /// - erp_product: 查找表(ERP 标准化/忽略大小写) → 例子表 → 组码(非 exact_only)
    /// - nik_description: 仅例子描述查表
    /// - lookup: 必须提供查找表；精确匹配 → 子串包含
    pub fn try_transform(
        &self,
        name: &str,
        scheme: Scheme,
        options: TransformOptions<'_>,
    ) -> EncodeResult<String> {
        let name = normalize(name);
        if name.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        match scheme {
            Scheme::ErpProduct => {
                if let Some(table) = options.table() {
                    if let Some(code) = self.erp_lookup.find(&name, table) {
                        debug!(name = %name, code, "调用方查找表命中");
                        return Ok(code.to_string());
                    }
                }
                self.erp.name_to_code(&name, options.exact_only)
            }
            Scheme::NikDescription => self.nik.describe_to_code(&name),
            Scheme::Lookup => {
                let table = options.table().ok_or(EncodeError::MissingLookupTable)?;
                self.plain_lookup
                    .find(&name, table)
                    .or_else(|| self.plain_lookup.find_containing(&name, table))
                    .map(str::to_string)
                    .ok_or(EncodeError::NoMatch {
                        scheme: Scheme::Lookup,
                        name,
                    })
            }
        }
    }

    /// 以"无编码"表达失败的分发
    pub fn transform(&self, name: &str, scheme: &str, options: TransformOptions<'_>) -> Option<String> {
        match self.try_transform_named(name, scheme, options) {
            Ok(code) => Some(code),
            Err(e) => {
                debug!(scheme, error = %e, "未生成编码");
                None
            }
        }
    }

    pub fn erp_name_to_code(&self, name: &str, exact_only: bool) -> EncodeResult<String> {
        self.erp.name_to_code(name, exact_only)
    }

    pub fn nik_attributes_to_code(&self, fields: &NikFields) -> EncodeResult<String> {
        self.nik.compose(fields)
    }

    pub fn nik_description_to_code(&self, description: &str) -> EncodeResult<String> {
        self.nik.describe_to_code(description)
    }

    pub fn erp_examples(&self) -> &[NameCodePair] {
        self.erp.examples()
    }

    pub fn nik_examples(&self) -> &[NikExample] {
        self.nik.examples()
    }
}
