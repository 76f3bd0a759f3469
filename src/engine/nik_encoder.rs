// ==========================================
// 名字→编码 - 员工 NIK 编码器
// ==========================================
// 依据: 员工 NIK 编码规则
// 路径 A: 结构化字段组码
// 路径 B: 例子描述精确查表
// ==========================================

use crate::config::nik_rules::NikRules;
use crate::config::rule_table::RuleTable;
use crate::domain::name_code::NikExample;
use crate::domain::nik::NikFields;
use crate::domain::types::Scheme;
use crate::engine::error::{EncodeError, EncodeResult};
use crate::engine::normalizer::normalize;
use tracing::debug;

/// NIK 编码固定位数
pub const NIK_CODE_LEN: usize = 11;

#[derive(Debug, Clone)]
pub struct NikEncoder {
    departments: RuleTable,
    jobs: RuleTable,
    positions: RuleTable,
    examples: Vec<NikExample>,
}

impl NikEncoder {
    pub fn new(rules: &NikRules) -> Self {
        Self {
            departments: rules.departments.clone(),
            jobs: rules.jobs.clone(),
            positions: rules.positions.clone(),
            examples: rules.examples.clone(),
        }
    }

    pub fn examples(&self) -> &[NikExample] {
        &self.examples
    }

    /// 结构化字段 → NIK
    ///
    /// # 规则
    /// - 部门/用工类型/职位: 先按标准化名称查表，再按原值查表
    /// - 年: 取字符串末 2 位（兼容 4 位/2 位年份）
    /// - 月: 左补零到 2 位后取前 2 位
    /// - 序号: 左补零到 2 位后取末 2 位
    pub fn compose(&self, fields: &NikFields) -> EncodeResult<String> {
        let dept = resolve(&self.departments, &fields.department)
            .ok_or_else(|| EncodeError::UnknownDepartment(fields.department.clone()))?;
        // 用工类型编码可以是 "0"，只判断是否存在
        let job = resolve(&self.jobs, &fields.job)
            .ok_or_else(|| EncodeError::UnknownJob(fields.job.clone()))?;
        let position = resolve(&self.positions, &fields.position)
            .ok_or_else(|| EncodeError::UnknownPosition(fields.position.clone()))?;

        let yy = last_chars(fields.year.trim(), 2);
        let mm = first_chars(&zero_pad(fields.month.trim(), 2), 2);
        let ss = last_chars(&zero_pad(fields.serial.trim(), 2), 2);

        let code = format!("{}{}{}{}{}{}", dept, yy, mm, job, position, ss);
        if code.chars().count() != NIK_CODE_LEN {
            return Err(EncodeError::MalformedCode {
                code,
                expected_len: NIK_CODE_LEN,
            });
        }
        debug!(code = %code, department = %fields.department, "NIK 组码完成");
        Ok(code)
    }

    /// 例子描述 → NIK（空白与大小写标准化后精确比较）
    pub fn describe_to_code(&self, description: &str) -> EncodeResult<String> {
        let wanted = normalize(description).to_lowercase();
        if wanted.is_empty() {
            return Err(EncodeError::EmptyInput);
        }
        self.examples
            .iter()
            .find(|e| normalize(&e.description).to_lowercase() == wanted)
            .map(|e| e.code.clone())
            .ok_or_else(|| EncodeError::NoMatch {
                scheme: Scheme::NikDescription,
                name: normalize(description),
            })
    }
}

fn resolve<'a>(table: &'a RuleTable, value: &str) -> Option<&'a str> {
    table
        .code_for(&normalize(value))
        .or_else(|| table.code_for(value))
}

fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.to_string()
    } else {
        format!("{}{}", "0".repeat(width - len), value)
    }
}

fn first_chars(value: &str, n: usize) -> String {
    value.chars().take(n).collect()
}

fn last_chars(value: &str, n: usize) -> String {
    let len = value.chars().count();
    value.chars().skip(len.saturating_sub(n)).collect()
}
