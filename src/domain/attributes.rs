// ==========================================
// 名字→编码 - ERP 属性解析记录
// ==========================================
// 职责: 单次请求内的临时解析结果（不落库、不缓存）
// ==========================================

use crate::domain::types::ItemKind;
use serde::Serialize;

/// 规则命中：命中的受控词条及其编码段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub label: String,
    pub code: String,
}

impl RuleHit {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

/// ERP 名称解析出的属性集合
///
/// # 校验规则
/// - material: 管道/管件均必填
/// - standard: 管道必填，管件不要求
/// - 其余字段缺失时在组码阶段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAttributes {
    pub kind: ItemKind,
    pub material: Option<RuleHit>,
    pub standard: Option<RuleHit>,
    pub color: Option<RuleHit>,
    pub pressure: Option<RuleHit>,
    pub size: Option<RuleHit>,
    pub fitting_type: Option<RuleHit>,
    pub fitting_standard: Option<RuleHit>,
}

impl ParsedAttributes {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            material: None,
            standard: None,
            color: None,
            pressure: None,
            size: None,
            fitting_type: None,
            fitting_standard: None,
        }
    }
}
