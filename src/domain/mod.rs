// ==========================================
// 名字→编码 - 领域层
// ==========================================
// 职责: 实体与类型（无业务规则）
// ==========================================

pub mod attributes;
pub mod name_code;
pub mod nik;
pub mod types;

// 重导出核心类型
pub use attributes::{ParsedAttributes, RuleHit};
pub use name_code::{NameCodePair, NikExample};
pub use nik::NikFields;
pub use types::{ItemKind, Scheme, UnknownScheme};
