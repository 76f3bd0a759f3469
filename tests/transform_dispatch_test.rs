// ==========================================
// 方案分发集成测试
// ==========================================
// 测试目标: 查找表优先级、lookup 方案、无效请求与无匹配的区分
// ==========================================

use name_to_code::engine::{EncodeError, TransformOptions};
use name_to_code::{transform, EncodeApi, NameCodePair, Scheme};
use std::thread;

fn table(pairs: &[(&str, &str)]) -> Vec<NameCodePair> {
    pairs.iter().map(|&p| NameCodePair::from(p)).collect()
}

#[test]
fn test_caller_table_beats_examples_and_composer() {
    let overrides = table(&[
        ("PE Pipe 20mm Black PN10 GB (Metric)", "9999999999"),
        ("Union PVC-U 20mm PN10", "8888888888"),
    ]);

    // 例子表中存在的名称
    assert_eq!(
        transform("PE Pipe 20mm Black PN10 GB (Metric)", "erp_product", Some(overrides.as_slice()), false)
            .as_deref(),
        Some("9999999999")
    );
    // 只能组码的名称
    assert_eq!(
        transform("union pvc-u 20mm pn10", "erp_product", Some(overrides.as_slice()), false).as_deref(),
        Some("8888888888")
    );
    // 未命中时回落内置路径
    assert_eq!(
        transform("Socket PVC-U 20mm PN10 GB (Metric)", "erp_product", Some(overrides.as_slice()), false)
            .as_deref(),
        Some("1102010101")
    );
}

#[test]
fn test_empty_caller_table_is_ignored() {
    let empty: Vec<NameCodePair> = Vec::new();
    assert_eq!(
        transform("PE Pipe 20mm Black PN10 GB (Metric)", "erp_product", Some(empty.as_slice()), true)
            .as_deref(),
        Some("1101314101")
    );
}

#[test]
fn test_lookup_scheme() {
    let items = table(&[
        ("Garden Hose 10m", "G-010"),
        ("Garden Hose", "G-000"),
        ("Water Tank 500L", "T-500"),
    ]);

    // 精确匹配优先于子串包含
    assert_eq!(
        transform("Garden Hose", "lookup", Some(items.as_slice()), false).as_deref(),
        Some("G-000")
    );
    // 子串包含（查询是表名子串）
    assert_eq!(
        transform("Tank 500L", "lookup", Some(items.as_slice()), false).as_deref(),
        Some("T-500")
    );
    // 子串包含（表名是查询子串）
    assert_eq!(
        transform("Blue Garden Hose 10m Coil", "lookup", Some(items.as_slice()), false).as_deref(),
        Some("G-010")
    );
    // lookup 方案区分大小写
    assert_eq!(transform("water tank 500l", "lookup", Some(items.as_slice()), false), None);
}

#[test]
fn test_lookup_without_table_is_invalid_request() {
    let api = EncodeApi::builtin();
    assert_eq!(api.transform("Garden Hose", "lookup", None, false), None);

    let err = api.try_transform("Garden Hose", "lookup", None, false).unwrap_err();
    assert_eq!(err, EncodeError::MissingLookupTable);
    assert!(err.is_invalid_request());
}

#[test]
fn test_unsupported_scheme_is_invalid_request() {
    let api = EncodeApi::builtin();
    assert_eq!(api.transform("PE Pipe 20mm Black PN10 GB (Metric)", "sku", None, false), None);

    let err = api
        .try_transform("PE Pipe 20mm Black PN10 GB (Metric)", "sku", None, false)
        .unwrap_err();
    assert!(matches!(err, EncodeError::UnsupportedScheme(ref s) if s == "sku"));
    assert!(err.is_invalid_request());
}

#[test]
fn test_unmatched_name_is_not_invalid_request() {
    let err = EncodeApi::builtin()
        .try_transform("Unknown Product XYZ", "erp_product", None, true)
        .unwrap_err();
    assert!(matches!(err, EncodeError::NoMatch { scheme: Scheme::ErpProduct, .. }));
    assert!(!err.is_invalid_request());
}

#[test]
fn test_blank_input_is_absence() {
    for scheme in ["erp_product", "nik_description", "lookup"] {
        assert_eq!(transform("   \t ", scheme, None, false), None, "{}", scheme);
    }
    let err = EncodeApi::builtin()
        .dispatcher()
        .try_transform("", Scheme::ErpProduct, TransformOptions::default())
        .unwrap_err();
    assert_eq!(err, EncodeError::EmptyInput);
}

#[test]
fn test_composition_is_idempotent_across_threads() {
    let names = [
        "PPR Pipe 25mm Green PN25 JIS",
        "Reducer Tee PE 40mm PN16 SNI",
        "Valve PVC-C 50mm PN20 EN",
    ];
    let expected: Vec<Option<String>> = names
        .iter()
        .map(|n| transform(n, "erp_product", None, false))
        .collect();
    assert_eq!(expected[1].as_deref(), Some("1102071304"));
    assert!(expected.iter().all(Option::is_some));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(move || {
                names
                    .iter()
                    .map(|n| transform(n, "erp_product", None, false))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
