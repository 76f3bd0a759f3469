// ==========================================
// 名字→编码 - ERP 属性解析与组码
// ==========================================
// 依据: Complete ERP Product Code List
// 职责: 例子表精确匹配 → (未命中) 关键词抽取属性 → 定位拼接 10 位编码
// ==========================================

use crate::config::erp_rules::{ErpDefaults, ErpRules};
use crate::config::error::ConfigResult;
use crate::config::rule_table::RuleTable;
use crate::domain::attributes::{ParsedAttributes, RuleHit};
use crate::domain::name_code::NameCodePair;
use crate::domain::types::{ItemKind, Scheme};
use crate::engine::error::{EncodeError, EncodeResult};
use crate::engine::lookup::LookupMatcher;
use crate::engine::normalizer::normalize_for_erp;
use crate::engine::rule_matcher::RuleMatcher;
use std::collections::BTreeMap;
use tracing::debug;

/// ERP 编码固定位数
pub const ERP_CODE_LEN: usize = 10;

// ==========================================
// ErpComposer - 属性解析 + 组码
// ==========================================
#[derive(Debug, Clone)]
pub struct ErpComposer {
    division: String,
    pipe_category: String,
    fitting_category: String,
    pipe_keyword: String,
    fitting_keyword: String,
    fitting_markers: Vec<String>,
    materials: RuleMatcher,
    standards: RuleMatcher,
    colors: RuleMatcher,
    pressures: RuleMatcher,
    metric_sizes: RuleMatcher,
    imperial_sizes: RuleMatcher,
    fitting_types: RuleMatcher,
    fitting_standards: RuleMatcher,
    pressure_codes: RuleTable,
    pressure_ranks: BTreeMap<String, RuleTable>,
    defaults: ErpDefaults,
}

impl ErpComposer {
    pub fn new(rules: &ErpRules) -> ConfigResult<Self> {
        Ok(Self {
            division: rules.division.clone(),
            pipe_category: rules.pipe_category.clone(),
            fitting_category: rules.fitting_category.clone(),
            pipe_keyword: rules.pipe_keyword.to_lowercase(),
            fitting_keyword: rules.fitting_keyword.to_lowercase(),
            fitting_markers: rules
                .fitting_markers
                .iter()
                .map(|m| m.to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
            materials: RuleMatcher::compile(&rules.materials)?,
            standards: RuleMatcher::compile(&rules.standards)?,
            colors: RuleMatcher::compile(&rules.colors)?,
            pressures: RuleMatcher::compile(&rules.pressures)?,
            metric_sizes: RuleMatcher::compile(&rules.metric_sizes)?,
            imperial_sizes: RuleMatcher::compile(&rules.imperial_sizes)?,
            fitting_types: RuleMatcher::compile(&rules.fitting_types)?,
            fitting_standards: RuleMatcher::compile(&rules.fitting_standards)?,
            pressure_codes: rules.pressures.clone(),
            pressure_ranks: rules.material_pressure_ranks.clone(),
            defaults: rules.defaults.clone(),
        })
    }

    /// 判定产品大类
    ///
    /// # 规则
    /// - 含 "pipe" 且不含 "fitting" → 管道
    /// - 含 "fitting" 或任一管件关键词 → 管件
    /// - 管道判定优先
    pub fn classify(&self, lowered: &str) -> Option<ItemKind> {
        let is_pipe = !self.pipe_keyword.is_empty()
            && lowered.contains(self.pipe_keyword.as_str())
            && !lowered.contains(self.fitting_keyword.as_str());
        if is_pipe {
            return Some(ItemKind::Pipe);
        }

        let is_fitting = lowered.contains(self.fitting_keyword.as_str())
            || self
                .fitting_markers
                .iter()
                .any(|m| lowered.contains(m.as_str()));
        if is_fitting {
            Some(ItemKind::Fitting)
        } else {
            None
        }
    }

    /// 解析名称属性（输入需已 ERP 标准化）
    pub fn parse(&self, normalized: &str) -> EncodeResult<ParsedAttributes> {
        let lowered = normalized.to_lowercase();

        let kind = self
            .classify(&lowered)
            .ok_or_else(|| EncodeError::UnknownItemKind(normalized.to_string()))?;

        let mut attrs = ParsedAttributes::new(kind);
        attrs.material = self.materials.first_match(&lowered);
        attrs.standard = self.standards.first_match(&lowered);
        attrs.color = self.colors.first_match(&lowered);
        attrs.pressure = self.pressures.first_match(&lowered);
        // 公制优先，其次英制
        attrs.size = self
            .metric_sizes
            .first_match(&lowered)
            .or_else(|| self.imperial_sizes.first_match(&lowered));

        if kind == ItemKind::Fitting {
            attrs.fitting_type = self.fitting_types.first_match(&lowered);
            attrs.fitting_standard = self.fitting_standards.first_match(&lowered);
        }

        if attrs.material.is_none() {
            return Err(EncodeError::MissingMaterial(normalized.to_string()));
        }

        Ok(attrs)
    }

    /// 由解析结果拼接编码
    pub fn compose(&self, attrs: &ParsedAttributes) -> EncodeResult<String> {
        let material = attrs
            .material
            .as_ref()
            .ok_or_else(|| EncodeError::MissingMaterial(String::new()))?;

        let size = code_or(&attrs.size, &self.defaults.size);

        let code = match attrs.kind {
            ItemKind::Pipe => {
                let standard = attrs
                    .standard
                    .as_ref()
                    .ok_or_else(|| EncodeError::MissingStandard(material.label.clone()))?;
                let color = code_or(&attrs.color, &self.defaults.color);
                let rank = self.pressure_rank(material, attrs.pressure.as_ref());

                format!(
                    "{}{}{}{}{}{}{}",
                    self.division,
                    self.pipe_category,
                    material.code,
                    standard.code,
                    color,
                    rank,
                    size
                )
            }
            ItemKind::Fitting => {
                let fitting_type = code_or(&attrs.fitting_type, &self.defaults.fitting_type);
                let fitting_standard =
                    code_or(&attrs.fitting_standard, &self.defaults.fitting_standard);
                let pressure = self.fitting_pressure(material, attrs.pressure.as_ref());
                // 等级 = max(材质码, 压力码)
                let grade = std::cmp::max(material.code.as_str(), pressure.as_str());

                format!(
                    "{}{}{}{}{}{}",
                    self.division,
                    self.fitting_category,
                    fitting_type,
                    fitting_standard,
                    grade,
                    size
                )
            }
        };

        if code.chars().count() != ERP_CODE_LEN {
            return Err(EncodeError::MalformedCode {
                code,
                expected_len: ERP_CODE_LEN,
            });
        }
        Ok(code)
    }

    /// 解析 + 组码
    pub fn parse_and_compose(&self, normalized: &str) -> EncodeResult<String> {
        let attrs = self.parse(normalized)?;
        debug!(name = normalized, kind = %attrs.kind, "ERP 属性解析完成");
        self.compose(&attrs)
    }

    /// 管道压力档位：该材质压力表中的相对序号，缺省 "1"
    fn pressure_rank(&self, material: &RuleHit, pressure: Option<&RuleHit>) -> String {
        pressure
            .and_then(|p| {
                self.pressure_ranks
                    .get(&material.label)
                    .and_then(|ranks| ranks.code_for(&p.label))
            })
            .unwrap_or(self.defaults.pressure_rank.as_str())
            .to_string()
    }

    /// 管件压力码：绝对压力码，缺省取该材质最低压力的绝对码
    fn fitting_pressure(&self, material: &RuleHit, pressure: Option<&RuleHit>) -> String {
        if let Some(p) = pressure {
            return p.code.clone();
        }
        self.pressure_ranks
            .get(&material.label)
            .and_then(|ranks| ranks.first())
            .and_then(|lowest| self.pressure_codes.code_for(&lowest.label))
            .unwrap_or(self.defaults.fitting_pressure.as_str())
            .to_string()
    }
}

fn code_or<'a>(hit: &'a Option<RuleHit>, default: &'a str) -> &'a str {
    hit.as_ref().map(|h| h.code.as_str()).unwrap_or(default)
}

// ==========================================
// ErpEncoder - 例子表精确匹配 + 组码回退
// ==========================================
#[derive(Debug, Clone)]
pub struct ErpEncoder {
    examples: Vec<NameCodePair>,
    matcher: LookupMatcher,
    composer: ErpComposer,
}

impl ErpEncoder {
    pub fn new(rules: &ErpRules) -> ConfigResult<Self> {
        Ok(Self {
            examples: rules.examples.clone(),
            matcher: LookupMatcher::erp(),
            composer: ErpComposer::new(rules)?,
        })
    }

    pub fn composer(&self) -> &ErpComposer {
        &self.composer
    }

    pub fn examples(&self) -> &[NameCodePair] {
        &self.examples
    }

    /// 名称 → ERP 编码
    ///
    /// # 流程
    /// 1. ERP 标准化后与例子表精确比较（忽略大小写）
    /// 2. exact_only 时到此为止
    /// 3. 否则走属性解析组码
    pub fn name_to_code(&self, name: &str, exact_only: bool) -> EncodeResult<String> {
        let normalized = normalize_for_erp(name);
        if normalized.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        if let Some(code) = self.matcher.find(&normalized, &self.examples) {
            debug!(name = %normalized, code, "ERP 例子表命中");
            return Ok(code.to_string());
        }

        if exact_only {
            return Err(EncodeError::NoMatch {
                scheme: Scheme::ErpProduct,
                name: normalized,
            });
        }

        self.composer.parse_and_compose(&normalized).map_err(|e| {
            debug!(name = %normalized, error = %e, "ERP 组码失败");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> ErpComposer {
        ErpComposer::new(&ErpRules::default()).unwrap()
    }

    fn encoder() -> ErpEncoder {
        ErpEncoder::new(&ErpRules::default()).unwrap()
    }

    #[test]
    fn test_compose_pipe() {
        let c = composer();
        assert_eq!(
            c.parse_and_compose("PVC-U Pipe 20mm White PN10 GB (Metric)").unwrap(),
            "1101110101"
        );
        assert_eq!(
            c.parse_and_compose("PE Pipe 20mm Black PN10 GB (Metric)").unwrap(),
            "1101314101"
        );
        assert_eq!(
            c.parse_and_compose("PPR Pipe 20mm Blue PN20 GB (Metric)").unwrap(),
            "1101412101"
        );
    }

    #[test]
    fn test_compose_pipe_imperial() {
        let c = composer();
        let name = normalize_for_erp("PVC-U Pipe 1/2\" White PN10 ASTM (Imperial)");
        assert_eq!(c.parse_and_compose(&name).unwrap(), "1101140151");
    }

    #[test]
    fn test_compose_fitting() {
        let c = composer();
        let cases = [
            ("Socket PVC-U 20mm PN10 GB (Metric)", "1102010101"),
            ("Elbow 90° PVC-U 20mm PN10 SNI (Metric)", "1102021101"),
            ("Tee PVC-U 1/2\" PN10 JIS (Imperial)", "1102043151"),
            ("Valve PVC-U 25mm PN16 ASTM (Metric)", "1102084202"),
            ("Socket PVC-C 20mm PN16 GB (Metric)", "1102010201"),
            ("Elbow 90° PVC-C 20mm PN16 SNI (Metric)", "1102021201"),
            ("Socket PE 20mm PN10 GB (Metric)", "1102010301"),
            ("Tee PE 25mm PN10 SNI (Metric)", "1102041302"),
        ];
        for (name, expected) in cases {
            let normalized = normalize_for_erp(name);
            assert_eq!(c.parse_and_compose(&normalized).unwrap(), expected, "{}", name);
        }
    }

    #[test]
    fn test_classify() {
        let c = composer();
        assert_eq!(c.classify("pe pipe 20mm"), Some(ItemKind::Pipe));
        assert_eq!(c.classify("pipe fitting pe"), Some(ItemKind::Fitting));
        assert_eq!(c.classify("union pvc-u 20mm"), Some(ItemKind::Fitting));
        assert_eq!(c.classify("garden hose"), None);
    }

    #[test]
    fn test_missing_material() {
        let err = composer()
            .parse_and_compose("Mystery Pipe 20mm White PN10 GB")
            .unwrap_err();
        assert!(matches!(err, EncodeError::MissingMaterial(_)));
    }

    #[test]
    fn test_pipe_requires_standard() {
        let err = composer()
            .parse_and_compose("PVC-U Pipe 20mm White PN10")
            .unwrap_err();
        assert!(matches!(err, EncodeError::MissingStandard(_)));
    }

    #[test]
    fn test_fitting_does_not_require_standard() {
        // 标准缺省 GB(0)，类型/压力/规格齐全
        assert_eq!(
            composer().parse_and_compose("Union PVC-U 20mm PN10").unwrap(),
            "1102090101"
        );
    }

    #[test]
    fn test_pipe_defaults() {
        // 无颜色 → Other(9)，无压力 → 档位 1，无规格 → 01
        assert_eq!(
            composer().parse_and_compose("PPR Pipe GB").unwrap(),
            "1101419101"
        );
    }

    #[test]
    fn test_pipe_pressure_rank_is_material_relative() {
        // PPR 的 PN25 为第 2 档，PE 的 PN16 为第 2 档
        let c = composer();
        assert_eq!(c.parse_and_compose("PPR Pipe 20mm White PN25 GB").unwrap(), "1101410201");
        assert_eq!(c.parse_and_compose("PE Pipe 20mm Black PN16 GB").unwrap(), "1101314201");
    }

    #[test]
    fn test_fitting_grade_defaults_to_material_lowest_pressure() {
        // PPR 最低压力 PN20(3)，材质码 4 → 等级 4
        assert_eq!(
            composer().parse_and_compose("Socket PPR 20mm GB").unwrap(),
            "1102010401"
        );
    }

    #[test]
    fn test_fitting_grade_takes_pressure_when_higher() {
        // PVC-U(1) + PN25(4) → 等级 4
        assert_eq!(
            composer().parse_and_compose("Socket PVC-U 25mm PN25 GB").unwrap(),
            "1102010402"
        );
    }

    #[test]
    fn test_metric_size_wins_over_imperial() {
        let name = normalize_for_erp("Socket PE 32mm 1/2\" PN10 GB");
        assert_eq!(composer().parse_and_compose(&name).unwrap(), "1102010303");
    }

    #[test]
    fn test_encoder_exact_then_compose() {
        let e = encoder();
        // 例子表命中（该例子与组码结果不同，说明例子表优先）
        assert_eq!(
            e.name_to_code("PVC-C Pipe 25mm Grey PN20 EN (Metric)", false).unwrap(),
            "1101250202"
        );
        assert_eq!(
            composer()
                .parse_and_compose("PVC-C Pipe 25mm Grey PN20 EN (Metric)")
                .unwrap(),
            "1101251202"
        );
    }

    #[test]
    fn test_encoder_exact_only() {
        let e = encoder();
        let err = e.name_to_code("Unknown Product XYZ", true).unwrap_err();
        assert!(matches!(err, EncodeError::NoMatch { .. }));
        // 非例子表名称在 exact_only 下不组码
        assert!(e.name_to_code("PVC-U Pipe 40mm White PN10 GB", true).is_err());
        assert_eq!(
            e.name_to_code("PVC-U Pipe 40mm White PN10 GB", false).unwrap(),
            "1101110104"
        );
    }

    #[test]
    fn test_encoder_empty_input() {
        assert_eq!(encoder().name_to_code("   ", false), Err(EncodeError::EmptyInput));
    }
}
