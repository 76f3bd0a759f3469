// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的临时表格文件、自定义规则文件
// ==========================================

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 物料清单表头（与 item-list-slim.xlsx 一致）
pub const ITEM_HEADERS: &[&str] = &["Item Code", "Item Name", "Chinese name"];

/// 物料清单测试行: (原编码, 英文名, 中文名)
pub fn item_rows() -> Vec<[&'static str; 3]> {
    vec![
        ["OLD-001", "PVC-U Pipe 20mm White PN10 GB (Metric)", "PVC-U 管 20mm 白"],
        ["OLD-002", "PE Pipe 20mm Black PN10 GB (Metric)", "PE 管 20mm 黑"],
        ["OLD-003", "Socket PVC-U 20mm PN10 GB (Metric)", "PVC-U 直接"],
        ["OLD-004", "Garden Hose 10m", "花园软管"],
        ["OLD-005", "", "无英文名"],
    ]
}

/// 在临时目录中创建 CSV 文件
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 文件路径
pub fn create_csv(
    file_name: &str,
    headers: &[&str],
    rows: &[Vec<&str>],
) -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join(file_name);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok((dir, path))
}

/// 在临时目录中创建单工作表 xlsx 文件
pub fn create_xlsx(
    file_name: &str,
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<&str>],
) -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join(file_name);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string((r + 1) as u32, col as u16, *value)?;
            }
        }
    }
    workbook.save(&path)?;

    Ok((dir, path))
}

/// 物料清单 CSV
pub fn create_item_list_csv() -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let rows: Vec<Vec<&str>> = item_rows().into_iter().map(|r| r.to_vec()).collect();
    create_csv("item-list-slim.csv", ITEM_HEADERS, &rows)
}

/// 物料清单 xlsx
pub fn create_item_list_xlsx() -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let rows: Vec<Vec<&str>> = item_rows().into_iter().map(|r| r.to_vec()).collect();
    create_xlsx("item-list-slim.xlsx", "Item", ITEM_HEADERS, &rows)
}

/// 写入自定义规则文件
pub fn write_rule_file(dir: &TempDir, json: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join("rules.json");
    fs::write(&path, json)?;
    Ok(path)
}
