// ==========================================
// 名字→编码 - 配置层
// ==========================================
// 职责: 规则表定义、默认值、规则文件加载
// ==========================================

pub mod erp_rules;
pub mod error;
pub mod nik_rules;
pub mod rule_book;
pub mod rule_table;

pub use erp_rules::{builtin_erp_examples, ErpDefaults, ErpRules};
pub use error::{ConfigError, ConfigResult};
pub use nik_rules::{builtin_nik_examples, NikRules};
pub use rule_book::RuleBook;
pub use rule_table::{MatchMode, RuleEntry, RuleTable};
