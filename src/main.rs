// ==========================================
// 名字→编码 - 命令行入口
// ==========================================
// 用法:
//   name-to-code encode "PE Pipe 20mm Black PN10 GB (Metric)"
//   name-to-code nik --department "Board of Directors" --year 2025 --month 3 \
//       --job "Full Time" --position Director --serial 1
//   name-to-code process item-list-slim.xlsx --only-encoded --no-fallback
//   name-to-code examples --scheme nik_description
// ==========================================

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use name_to_code::config::RuleBook;
use name_to_code::domain::{NikFields, Scheme};
use name_to_code::engine::TransformOptions;
use name_to_code::importer::{
    load_lookup_table, CodeColumnOptions, CodeColumnProcessor, LookupTableOptions, SheetSelector,
    DEFAULT_CODE_COLUMN, DEFAULT_NEW_COLUMN,
};
use name_to_code::{logging, EncodeApi};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "名字→编码 规则转化工具（ERP 产品编码 / 员工 NIK）")]
struct Args {
    /// 自定义规则文件（JSON，缺省字段使用内置规则）
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 单个名称转化
    Encode {
        name: String,

        #[arg(long, default_value = "erp_product")]
        scheme: Scheme,

        /// 只做例子表精确匹配
        #[arg(long)]
        exact_only: bool,

        /// 外部查找表（Excel/CSV，"Item Code" 列为编码）
        #[arg(long)]
        lookup: Option<PathBuf>,
    },

    /// 员工 NIK 结构化组码
    Nik {
        #[arg(long)]
        department: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        month: String,
        #[arg(long)]
        job: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        serial: String,
    },

    /// 表格追加编码列
    Process {
        input: PathBuf,

        #[arg(long)]
        output: Option<PathBuf>,

        /// 名称列（可重复）
        #[arg(long = "name-column")]
        name_columns: Vec<String>,

        #[arg(long, default_value = DEFAULT_CODE_COLUMN)]
        code_column: String,

        #[arg(long, default_value = DEFAULT_NEW_COLUMN)]
        new_column: String,

        #[arg(long, default_value = "erp_product")]
        scheme: Scheme,

        /// 未生成编码时留空（默认回填原编码）
        #[arg(long)]
        no_fallback: bool,

        /// 只保留生成了编码的行
        #[arg(long)]
        only_encoded: bool,

        /// 工作表序号或名称
        #[arg(long, default_value = "0")]
        sheet: SheetSelector,
    },

    /// 输出内置转化例子（JSON）
    Examples {
        #[arg(long, default_value = "erp_product")]
        scheme: Scheme,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    tracing::debug!(version = name_to_code::VERSION, "{}", name_to_code::APP_NAME);

    let book = match &args.rules {
        Some(path) => RuleBook::from_json_file(path)
            .with_context(|| format!("无法加载规则文件: {}", path.display()))?,
        None => RuleBook::default(),
    };
    let api = EncodeApi::new(&book).context("规则编译失败")?;

    match args.command {
        Command::Encode {
            name,
            scheme,
            exact_only,
            lookup,
        } => {
            let table = lookup
                .map(|path| load_lookup_table(path, &LookupTableOptions::default()))
                .unwrap_or_default();
            let options = TransformOptions {
                lookup_table: Some(table.as_slice()),
                exact_only,
            };
            match api.dispatcher().try_transform(&name, scheme, options) {
                Ok(code) => println!("{}", code),
                Err(e) => bail!("未生成编码: {}", e),
            }
        }
        Command::Nik {
            department,
            year,
            month,
            job,
            position,
            serial,
        } => {
            let fields = NikFields::new(department, year, month, job, position, serial);
            match api.try_nik_attributes_to_code(&fields) {
                Ok(code) => println!("{}", code),
                Err(e) => bail!("未生成 NIK: {}", e),
            }
        }
        Command::Process {
            input,
            output,
            name_columns,
            code_column,
            new_column,
            scheme,
            no_fallback,
            only_encoded,
            sheet,
        } => {
            let options = CodeColumnOptions {
                output_path: output,
                name_columns: (!name_columns.is_empty()).then_some(name_columns),
                code_column,
                new_column,
                scheme,
                exact_only: false,
                fallback_to_original: !no_fallback,
                only_encoded_rows: only_encoded,
                sheet,
            };
            let report = CodeColumnProcessor::new(&api)
                .process(&input, &options)
                .with_context(|| format!("处理失败: {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Examples { scheme } => {
            let json = match scheme {
                Scheme::ErpProduct => serde_json::to_string_pretty(&api.erp_examples())?,
                Scheme::NikDescription => serde_json::to_string_pretty(&api.nik_examples())?,
                Scheme::Lookup => bail!("lookup 方案无内置例子"),
            };
            println!("{}", json);
        }
    }

    Ok(())
}
