// ==========================================
// 名字→编码 - 编码引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 对外接口仍以"无编码"(None) 表达失败；
//       此类型供需要区分"请求非法"与"未匹配"的调用方使用
// ==========================================

use crate::domain::types::{Scheme, UnknownScheme};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    // ===== 请求非法 =====
    #[error("不支持的编码方案: {0}")]
    UnsupportedScheme(String),

    #[error("lookup 方案需要提供查找表")]
    MissingLookupTable,

    // ===== 未匹配 =====
    #[error("输入为空")]
    EmptyInput,

    #[error("未匹配 (scheme: {scheme}): {name}")]
    NoMatch { scheme: Scheme, name: String },

    #[error("无法判定产品大类（非管道/管件）: {0}")]
    UnknownItemKind(String),

    #[error("未识别材质: {0}")]
    MissingMaterial(String),

    #[error("管道未识别标准: {0}")]
    MissingStandard(String),

    #[error("未知部门: {0}")]
    UnknownDepartment(String),

    #[error("未知用工类型: {0}")]
    UnknownJob(String),

    #[error("未知职位: {0}")]
    UnknownPosition(String),

    #[error("编码位数错误: {code}（期望 {expected_len} 位）")]
    MalformedCode { code: String, expected_len: usize },
}

impl EncodeError {
    /// 是否为调用方请求本身非法（区别于名称未匹配）
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            EncodeError::UnsupportedScheme(_) | EncodeError::MissingLookupTable
        )
    }
}

impl From<UnknownScheme> for EncodeError {
    fn from(err: UnknownScheme) -> Self {
        EncodeError::UnsupportedScheme(err.0)
    }
}

/// Result 类型别名
pub type EncodeResult<T> = Result<T, EncodeError>;
