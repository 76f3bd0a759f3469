// ==========================================
// 名字→编码 - 领域类型定义
// ==========================================
// 依据: Complete ERP Product Code List / 员工 NIK 编码规则
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 编码方案 (Scheme)
// ==========================================
// 序列化格式: snake_case (与调用方传入的方案名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    ErpProduct,     // ERP 产品编码 (10 位)
    NikDescription, // 员工 NIK 描述查表 (11 位)
    Lookup,         // 通用外部表查找
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::ErpProduct => "erp_product",
            Scheme::NikDescription => "nik_description",
            Scheme::Lookup => "lookup",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 方案名无法识别
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不支持的编码方案: {0}")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "erp_product" => Ok(Scheme::ErpProduct),
            "nik_description" => Ok(Scheme::NikDescription),
            "lookup" => Ok(Scheme::Lookup),
            other => Err(UnknownScheme(other.to_string())),
        }
    }
}

// ==========================================
// 产品大类 (Item Kind)
// ==========================================
// 管道 → 中类 101，管件 → 中类 102
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Pipe,    // 管道
    Fitting, // 管件
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Pipe => write!(f, "PIPE"),
            ItemKind::Fitting => write!(f, "FITTING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("erp_product".parse::<Scheme>().unwrap(), Scheme::ErpProduct);
        assert_eq!(
            " nik_description ".parse::<Scheme>().unwrap(),
            Scheme::NikDescription
        );
        assert_eq!("lookup".parse::<Scheme>().unwrap(), Scheme::Lookup);
    }

    #[test]
    fn test_scheme_unsupported() {
        let err = "barcode".parse::<Scheme>().unwrap_err();
        assert_eq!(err, UnknownScheme("barcode".to_string()));
        assert_eq!(err.to_string(), "不支持的编码方案: barcode");
    }

    #[test]
    fn test_scheme_display_roundtrips_serde_name() {
        let json = serde_json::to_string(&Scheme::NikDescription).unwrap();
        assert_eq!(json, format!("\"{}\"", Scheme::NikDescription));
    }
}
