// ==========================================
// 名字→编码 - 核心库
// ==========================================
// 依据: Complete ERP Product Code List / 员工 NIK 编码规则
// 系统定位: 规则驱动的名称 → 定宽编码转化（ERP 产品编码 / 员工 NIK）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 规则表
pub mod config;

// 引擎层 - 标准化/查表/组码/分发
pub mod engine;

// API 层 - 对外纯函数接口
pub mod api;

// 适配层 - Excel/CSV
pub mod importer;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{ItemKind, NameCodePair, NikExample, NikFields, ParsedAttributes, Scheme};

// 配置
pub use config::{ErpRules, NikRules, RuleBook, RuleTable};

// 引擎
pub use engine::{Dispatcher, EncodeError, EncodeResult, TransformOptions};

// API
pub use api::{
    erp_name_to_code, get_erp_examples, get_nik_examples, nik_attributes_to_code,
    nik_example_description_to_code, transform, EncodeApi,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "名字→编码 规则转化工具";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
