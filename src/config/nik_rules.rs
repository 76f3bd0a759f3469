// ==========================================
// 名字→编码 - 员工 NIK 编码规则
// ==========================================
// 结构: 11 位 = 部门(2) + 年(2) + 月(2) + 用工类型(1) + 职位(2) + 序号(2)
// ==========================================

use crate::config::rule_table::RuleTable;
use crate::domain::name_code::NikExample;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NikRules {
    pub departments: RuleTable,
    pub jobs: RuleTable,
    pub positions: RuleTable,
    pub examples: Vec<NikExample>,
}

impl Default for NikRules {
    fn default() -> Self {
        Self {
            departments: RuleTable::exact(&[
                ("Board of Directors", "01"),
                ("Finance, Accounting, & Tax Department", "02"),
                ("Finance, Accounting, & Tax Dept", "02"),
                ("Procurement Department", "03"),
                ("Customer Service Department", "04"),
                ("Marketing Department", "05"),
                ("Warehouse Department", "06"),
                ("General Service Department", "07"),
                ("Human Resources Department", "08"),
            ]),
            jobs: RuleTable::exact(&[("Full Time", "0"), ("Part Time", "1"), ("Internship", "2")]),
            positions: RuleTable::exact(&[
                ("Director", "01"),
                ("Commissioner", "02"),
                ("Manager", "03"),
                ("Supervisor", "04"),
                ("Officer / Staff", "05"),
                ("Officer", "05"),
                ("Staff", "05"),
                ("Intern", "06"),
            ]),
            examples: builtin_nik_examples(),
        }
    }
}

/// 规则文档中的 NIK 例子
pub fn builtin_nik_examples() -> Vec<NikExample> {
    [
        ("01250300101", "Board of Directors / Yang Quanshe / Director / 25/03/2025"),
        ("01240900202", "Board of Directors / Yang Yaobin / Commissioner / 01/09/2024"),
        ("02241000401", "Finance, Accounting, & Tax Dept / Huda Asriati / Accounting and Tax Supervisor / 01/10/2024"),
        ("02260100501", "Finance, Accounting, & Tax Dept / Andri Hidayat / Finance Staff / 26/01/2026"),
        ("03210100401", "Procurement Department / Putri Rubi Dwi Fadlilah / Procurement Supervisor / 20/01/2021"),
        ("03211200502", "Procurement Department / Irfan Syahputra / Procurement Staff / 06/12/2021"),
        ("04250700401", "Customer Service Department / Ma Jinjin (Frida) / Quotation Supervisor / 21/07/2025"),
        ("04221100402", "Customer Service Department / Annisa Putri Aulia / Sales Supervisor / 01/11/2022"),
        ("04250700503", "Customer Service Department / Yane Fahira Rustian / Sales Staff / 21/07/2025"),
        ("04260100601", "Customer Service Department / Qiu Peisong / Intern / 05/01/2026"),
        ("04260100602", "Customer Service Department / Chai Jing / Intern / 05/01/2026"),
        ("05250300501", "Marketing Department / Yang Yaobin / Marketing Staff / 25/03/2025"),
        ("05240900302", "Marketing Department / Yang Quanshe / Marketing Manager / 01/09/2024"),
        ("06220300401", "Warehouse Department / Yoyo Rianto / Warehouse Supervisor / 26/03/2022"),
        ("06250700502", "Warehouse Department / Ahmad Faizih / Warehouse Staff / 08/07/2025"),
        ("07251200503", "General Service Department / Taryati / Housekeeper / 01/12/2025"),
        ("07221200503", "General Service Department / Hendra / Driver / 01/12/2022"),
        ("08260100501", "Human Resources Department / Andri Hidayat / HR Staff / 26/01/2026"),
    ]
    .into_iter()
    .map(|(code, description)| NikExample::new(code, description))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rule_table::MatchMode;

    #[test]
    fn test_builtin_examples_are_eleven_digits() {
        let examples = builtin_nik_examples();
        assert_eq!(examples.len(), 18);
        for example in examples {
            assert_eq!(example.code.len(), 11, "{}", example.description);
        }
    }

    #[test]
    fn test_field_tables_are_exact() {
        let rules = NikRules::default();
        for table in [&rules.departments, &rules.jobs, &rules.positions] {
            assert_eq!(table.mode, MatchMode::Exact);
        }
    }

    #[test]
    fn test_job_codes_include_zero() {
        let rules = NikRules::default();
        assert_eq!(rules.jobs.code_for("Full Time"), Some("0"));
    }
}
