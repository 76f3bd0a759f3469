// ==========================================
// 名字→编码 - 对外编码接口
// ==========================================
// 职责: 供适配层（Excel/CSV/命令行）调用的纯函数接口
// 约定: 失败一律返回 None（无编码）；try_* 变体保留失败原因
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::rule_book::RuleBook;
use crate::domain::name_code::{NameCodePair, NikExample};
use crate::domain::nik::NikFields;
use crate::engine::dispatcher::{Dispatcher, TransformOptions};
use crate::engine::error::EncodeResult;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<EncodeApi> = Lazy::new(|| {
    EncodeApi::new(&RuleBook::default()).expect("内置规则必须可编译")
});

/// 编码接口（持有一套已编译的规则）
#[derive(Debug, Clone)]
pub struct EncodeApi {
    dispatcher: Dispatcher,
}

impl EncodeApi {
    pub fn new(book: &RuleBook) -> ConfigResult<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(book)?,
        })
    }

    /// 内置规则实例（进程内共享，只读）
    pub fn builtin() -> &'static EncodeApi {
        &BUILTIN
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn transform(
        &self,
        name: &str,
        scheme: &str,
        lookup_table: Option<&[NameCodePair]>,
        exact_only: bool,
    ) -> Option<String> {
        self.dispatcher.transform(
            name,
            scheme,
            TransformOptions {
                lookup_table,
                exact_only,
            },
        )
    }

    pub fn try_transform(
        &self,
        name: &str,
        scheme: &str,
        lookup_table: Option<&[NameCodePair]>,
        exact_only: bool,
    ) -> EncodeResult<String> {
        self.dispatcher.try_transform_named(
            name,
            scheme,
            TransformOptions {
                lookup_table,
                exact_only,
            },
        )
    }

    pub fn erp_name_to_code(&self, name: &str, exact_only: bool) -> Option<String> {
        self.dispatcher.erp_name_to_code(name, exact_only).ok()
    }

    pub fn nik_attributes_to_code(&self, fields: &NikFields) -> Option<String> {
        self.dispatcher.nik_attributes_to_code(fields).ok()
    }

    pub fn try_nik_attributes_to_code(&self, fields: &NikFields) -> EncodeResult<String> {
        self.dispatcher.nik_attributes_to_code(fields)
    }

    pub fn nik_example_description_to_code(&self, description: &str) -> Option<String> {
        self.dispatcher.nik_description_to_code(description).ok()
    }

    pub fn erp_examples(&self) -> Vec<NameCodePair> {
        self.dispatcher.erp_examples().to_vec()
    }

    pub fn nik_examples(&self) -> Vec<NikExample> {
        self.dispatcher.nik_examples().to_vec()
    }
}

// ==========================================
// 内置规则的便捷函数
// ==========================================

/// 名称 → 编码
///
/// # 参数
/// - scheme: "erp_product" / "nik_description" / "lookup"
/// - lookup_table: 调用方查找表（lookup 方案必填，erp_product 方案优先使用）
/// - exact_only: erp_product 方案只做例子表精确匹配
///
/// # 示例
/// ```
/// use name_to_code::api::transform;
/// assert_eq!(
///     transform("PE Pipe 20mm Black PN10 GB (Metric)", "erp_product", None, false).as_deref(),
///     Some("1101314101")
/// );
/// ```
pub fn transform(
    name: &str,
    scheme: &str,
    lookup_table: Option<&[NameCodePair]>,
    exact_only: bool,
) -> Option<String> {
    EncodeApi::builtin().transform(name, scheme, lookup_table, exact_only)
}

pub fn erp_name_to_code(name: &str, exact_only: bool) -> Option<String> {
    EncodeApi::builtin().erp_name_to_code(name, exact_only)
}

/// 结构化字段 → NIK
///
/// # 示例
/// ```
/// use name_to_code::api::nik_attributes_to_code;
/// let code = nik_attributes_to_code("Board of Directors", 2025, 3, "Full Time", "Director", 1);
/// assert_eq!(code.as_deref(), Some("01250300101"));
/// ```
pub fn nik_attributes_to_code(
    department: &str,
    year: impl ToString,
    month: impl ToString,
    job: &str,
    position: &str,
    serial: impl ToString,
) -> Option<String> {
    let fields = NikFields::new(department, year, month, job, position, serial);
    EncodeApi::builtin().nik_attributes_to_code(&fields)
}

pub fn nik_example_description_to_code(description: &str) -> Option<String> {
    EncodeApi::builtin().nik_example_description_to_code(description)
}

pub fn get_erp_examples() -> Vec<NameCodePair> {
    EncodeApi::builtin().erp_examples()
}

pub fn get_nik_examples() -> Vec<NikExample> {
    EncodeApi::builtin().nik_examples()
}
