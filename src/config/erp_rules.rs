// ==========================================
// 名字→编码 - ERP 产品编码规则
// ==========================================
// 依据: Complete ERP Product Code List
// 结构: 10 位 = 1(Division) + 3(Middle) + 2(Sub) + 4(Serial)
//   管道 Sub    = 材质(1) + 标准(1)
//   管道 Serial = 颜色(1) + 压力档位(1) + 规格(2)
//   管件 Sub    = 管件类型(2)
//   管件 Serial = 管件标准(1) + 等级(1) + 规格(2)
// ==========================================

use crate::config::rule_table::RuleTable;
use crate::domain::name_code::NameCodePair;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ERP 组码默认值
///
/// 名称中未出现对应词条时使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErpDefaults {
    /// 颜色缺省 → Other
    pub color: String,
    /// 规格缺省 → 最小公制规格
    pub size: String,
    /// 管道压力档位缺省
    pub pressure_rank: String,
    /// 管件类型缺省 → Socket
    pub fitting_type: String,
    /// 管件标准缺省 → GB
    pub fitting_standard: String,
    /// 管件压力码缺省（材质无压力档位表时）
    pub fitting_pressure: String,
}

impl Default for ErpDefaults {
    fn default() -> Self {
        Self {
            color: "9".to_string(),
            size: "01".to_string(),
            pressure_rank: "1".to_string(),
            fitting_type: "01".to_string(),
            fitting_standard: "0".to_string(),
            fitting_pressure: "1".to_string(),
        }
    }
}

/// ERP 规则集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErpRules {
    pub division: String,
    pub pipe_category: String,
    pub fitting_category: String,
    /// 管道判定关键词（且不含 fitting_keyword）
    pub pipe_keyword: String,
    pub fitting_keyword: String,
    /// 管件类型关键词（任一命中即为管件）
    pub fitting_markers: Vec<String>,
    pub materials: RuleTable,
    pub standards: RuleTable,
    pub colors: RuleTable,
    /// 绝对压力码
    pub pressures: RuleTable,
    /// 各材质相对压力档位（从该材质最低常用规格起计 1）
    pub material_pressure_ranks: BTreeMap<String, RuleTable>,
    pub metric_sizes: RuleTable,
    pub imperial_sizes: RuleTable,
    pub fitting_types: RuleTable,
    pub fitting_standards: RuleTable,
    pub defaults: ErpDefaults,
    /// 规则文档中的转化例子（精确查表）
    pub examples: Vec<NameCodePair>,
}

impl Default for ErpRules {
    fn default() -> Self {
        let mut material_pressure_ranks = BTreeMap::new();
        material_pressure_ranks.insert(
            "PVC-U".to_string(),
            RuleTable::exact(&[("PN10", "1"), ("PN16", "2")]),
        );
        material_pressure_ranks.insert(
            "PVC-C".to_string(),
            RuleTable::exact(&[("PN16", "1"), ("PN20", "2")]),
        );
        material_pressure_ranks.insert(
            "PE".to_string(),
            RuleTable::exact(&[("PN10", "1"), ("PN16", "2"), ("PN20", "3")]),
        );
        material_pressure_ranks.insert(
            "PPR".to_string(),
            RuleTable::exact(&[("PN20", "1"), ("PN25", "2"), ("PN32", "3")]),
        );

        Self {
            division: "1".to_string(),
            pipe_category: "101".to_string(),
            fitting_category: "102".to_string(),
            pipe_keyword: "pipe".to_string(),
            fitting_keyword: "fitting".to_string(),
            fitting_markers: [
                "socket", "elbow", "tee", "valve", "union", "flange", "reducer", "cross", "clamp",
                "cap", "bridge",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            materials: RuleTable::whole_word(&[
                ("PVC-U", "1"),
                ("PVC-C", "2"),
                ("PE", "3"),
                ("PPR", "4"),
            ]),
            standards: RuleTable::substring(&[
                ("GB", "1"),
                ("SNI", "2"),
                ("JIS", "3"),
                ("ASTM", "4"),
                ("EN", "5"),
            ]),
            colors: RuleTable::substring(&[
                ("White", "0"),
                ("Grey", "1"),
                ("Blue", "2"),
                ("Green", "3"),
                ("Black", "4"),
                ("Cream", "5"),
                ("Other", "9"),
            ]),
            pressures: RuleTable::substring(&[
                ("PN10", "1"),
                ("PN16", "2"),
                ("PN20", "3"),
                ("PN25", "4"),
                ("PN32", "5"),
            ]),
            material_pressure_ranks,
            metric_sizes: RuleTable::substring(&[
                ("20mm", "01"),
                ("25mm", "02"),
                ("32mm", "03"),
                ("40mm", "04"),
                ("50mm", "05"),
                ("63mm", "06"),
            ]),
            // 长词条在前: "1-1/2\"" 含 "1/2\"" 与 "2\""
            imperial_sizes: RuleTable::substring(&[
                ("1-1/4\"", "54"),
                ("1-1/2\"", "55"),
                ("1/2\"", "51"),
                ("3/4\"", "52"),
                ("1\"", "53"),
                ("2\"", "56"),
            ]),
            // Reducer 系列须先于 Socket / Tee
            fitting_types: RuleTable::substring(&[
                ("Reducer Socket", "06"),
                ("Reducer Tee", "07"),
                ("Socket (Direct)", "01"),
                ("Socket", "01"),
                ("Elbow 90°", "02"),
                ("90° Elbow", "02"),
                ("Elbow 45°", "03"),
                ("45° Elbow", "03"),
                ("Tee", "04"),
                ("Cross", "05"),
                ("Valve", "08"),
                ("Union", "09"),
                ("Flange", "10"),
                ("Clamp (Pipe Clip)", "11"),
                ("Pipe Clamp", "11"),
                ("Pipe Clip", "11"),
                ("End Cap (Pipe Cap)", "12"),
                ("End Cap", "12"),
                ("Pipe Cap", "12"),
                ("Bridge Bend", "13"),
            ]),
            fitting_standards: RuleTable::substring(&[
                ("GB", "0"),
                ("SNI", "1"),
                ("JIS", "3"),
                ("ASTM", "4"),
                ("EN", "5"),
            ]),
            defaults: ErpDefaults::default(),
            examples: builtin_erp_examples(),
        }
    }
}

/// 规则文档中的 ERP 转化例子
pub fn builtin_erp_examples() -> Vec<NameCodePair> {
    [
        ("PVC-U Pipe 20mm White PN10 GB (Metric)", "1101110101"),
        ("PVC-U Pipe 20mm Grey PN10 GB (Metric)", "1101111101"),
        ("PVC-U Pipe 20mm White PN10 SNI (Metric)", "1101120101"),
        ("PVC-U Pipe 20mm White PN10 JIS (Metric)", "1101130101"),
        ("PVC-U Pipe 1/2\" White PN10 ASTM (Imperial)", "1101140151"),
        ("PVC-U Pipe 25mm White PN10 EN (Metric)", "1101150102"),
        ("PVC-U Pipe 32mm White PN16 GB (Metric)", "1101110203"),
        ("PVC-C Pipe 20mm White PN16 GB (Metric)", "1101210101"),
        ("PVC-C Pipe 20mm White PN16 SNI (Metric)", "1101220101"),
        ("PVC-C Pipe 1/2\" White PN16 ASTM (Imperial)", "1101240151"),
        ("PVC-C Pipe 25mm Grey PN20 EN (Metric)", "1101250202"),
        ("PE Pipe 20mm Black PN10 GB (Metric)", "1101314101"),
        ("PE Pipe 20mm Black PN10 SNI (Metric)", "1101324101"),
        ("PE Pipe 3/4\" Black PN16 ASTM (Imperial)", "1101344252"),
        ("PE Pipe 32mm Black PN20 EN (Metric)", "1101354303"),
        ("PPR Pipe 20mm White PN20 GB (Metric)", "1101410101"),
        ("PPR Pipe 20mm Blue PN20 GB (Metric)", "1101412101"),
        ("PPR Pipe 20mm White PN20 SNI (Metric)", "1101420101"),
        ("PPR Pipe 1/2\" White PN25 ASTM (Imperial)", "1101440251"),
        ("PPR Pipe 25mm White PN32 EN (Metric)", "1101450302"),
        ("Socket PVC-U 20mm PN10 GB (Metric)", "1102010101"),
        ("Elbow 90° PVC-U 20mm PN10 SNI (Metric)", "1102021101"),
        ("Tee PVC-U 1/2\" PN10 JIS (Imperial)", "1102043151"),
        ("Valve PVC-U 25mm PN16 ASTM (Metric)", "1102084202"),
        ("Socket PVC-C 20mm PN16 GB (Metric)", "1102010201"),
        ("Elbow 90° PVC-C 20mm PN16 SNI (Metric)", "1102021201"),
        ("Socket PE 20mm PN10 GB (Metric)", "1102010301"),
        ("Tee PE 25mm PN10 SNI (Metric)", "1102041302"),
    ]
    .into_iter()
    .map(NameCodePair::from)
    .collect()
}
