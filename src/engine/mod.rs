// ==========================================
// 名字→编码 - 引擎层
// ==========================================
// 职责: 标准化 / 查表 / 属性解析组码 / 方案分发
// 约束: 纯函数调用，只读注入的规则，无共享可变状态
// ==========================================

pub mod dispatcher;
pub mod erp_composer;
pub mod error;
pub mod lookup;
pub mod nik_encoder;
pub mod normalizer;
pub mod rule_matcher;

pub use dispatcher::{Dispatcher, TransformOptions};
pub use erp_composer::{ErpComposer, ErpEncoder, ERP_CODE_LEN};
pub use error::{EncodeError, EncodeResult};
pub use lookup::LookupMatcher;
pub use nik_encoder::{NikEncoder, NIK_CODE_LEN};
pub use normalizer::{normalize, normalize_for_erp, normalize_opt, NormalizeMode};
pub use rule_matcher::RuleMatcher;
