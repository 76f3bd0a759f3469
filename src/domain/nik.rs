// ==========================================
// 名字→编码 - 员工 NIK 结构化字段
// ==========================================
// 依据: 员工 NIK 编码规则
// 结构: 部门(2) + 入职年(2) + 入职月(2) + 用工类型(1) + 职位(2) + 序号(2)
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// NIK 组码输入
///
/// 年/月/序号保留字符串形式，由编码器统一截取
/// （兼容 4 位或 2 位年份、已补零或未补零的月份）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NikFields {
    pub department: String,
    pub year: String,
    pub month: String,
    pub job: String,
    pub position: String,
    pub serial: String,
}

impl NikFields {
    pub fn new(
        department: impl Into<String>,
        year: impl ToString,
        month: impl ToString,
        job: impl Into<String>,
        position: impl Into<String>,
        serial: impl ToString,
    ) -> Self {
        Self {
            department: department.into(),
            year: year.to_string(),
            month: month.to_string(),
            job: job.into(),
            position: position.into(),
            serial: serial.to_string(),
        }
    }

    /// 由入职日期构造（取日期的年、月）
    pub fn from_join_date(
        department: impl Into<String>,
        joined: NaiveDate,
        job: impl Into<String>,
        position: impl Into<String>,
        serial: u32,
    ) -> Self {
        Self::new(
            department,
            joined.year(),
            joined.month(),
            job,
            position,
            serial,
        )
    }
}
