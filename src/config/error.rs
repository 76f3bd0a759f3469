// ==========================================
// 名字→编码 - 配置模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 规则配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("规则文件读取失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("规则文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("规则模式编译失败 (label: {label}): {message}")]
    InvalidPattern { label: String, message: String },

    #[error("规则表非法: {0}")]
    InvalidRule(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
