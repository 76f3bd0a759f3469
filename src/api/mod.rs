// ==========================================
// 名字→编码 - API 层
// ==========================================
// 职责: 对外纯函数接口
// ==========================================

pub mod encode_api;

pub use encode_api::{
    erp_name_to_code, get_erp_examples, get_nik_examples, nik_attributes_to_code,
    nik_example_description_to_code, transform, EncodeApi,
};
