//! # dms 命令实现
//!
//! 本地 DMS 工具：解析文本、十进制度转换。不联系转换服务。
//!
//! ## 依赖关系
//! - 使用 `cli/dms.rs` 定义的参数
//! - 使用 `parsers/dms.rs`, `models/dms.rs`
//! - 使用 `utils/output.rs`

use crate::cli::dms::{DmsArgs, DmsCommands, FromDecimalArgs, ParseArgs};
use crate::error::Result;
use crate::models::{Axis, DmsValue};
use crate::parsers::dms;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 分量表格行
#[derive(Debug, Clone, Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 dms 命令
pub fn execute(args: DmsArgs) -> Result<()> {
    match args.command {
        DmsCommands::Parse(args) => execute_parse(args),
        DmsCommands::FromDecimal(args) => execute_from_decimal(args),
    }
}

fn execute_parse(args: ParseArgs) -> Result<()> {
    let text = args.joined();
    output::print_header("Parsing DMS");

    let value = dms::parse(&text)?;
    let strategy = dms::matching_strategy(&text).unwrap_or("-");

    output::print_success(&format!(
        "{} parsed successfully ({} pattern)",
        value.axis().to_string().to_uppercase(),
        strategy
    ));
    println!("{}", component_table(&value));
    Ok(())
}

fn execute_from_decimal(args: FromDecimalArgs) -> Result<()> {
    let axis: Axis = args.axis.into();
    output::print_header(&format!("Decimal {} to DMS", axis));

    let value = DmsValue::from_decimal(args.value, axis)?;
    println!("{}", component_table(&value));
    Ok(())
}

fn component_rows(value: &DmsValue) -> Vec<ComponentRow> {
    vec![
        ComponentRow {
            name: "Degrees",
            value: value.degrees().to_string(),
        },
        ComponentRow {
            name: "Minutes",
            value: value.minutes().to_string(),
        },
        ComponentRow {
            name: "Seconds",
            value: format!("{:.2}", value.seconds()),
        },
        ComponentRow {
            name: "Hemisphere",
            value: value.hemisphere().to_string(),
        },
        ComponentRow {
            name: "Canonical",
            value: value.to_string(),
        },
        ComponentRow {
            name: "Display",
            value: value.display_pretty(),
        },
        ComponentRow {
            name: "Decimal",
            value: format!("{:.6}", value.to_decimal()),
        },
    ]
}

fn component_table(value: &DmsValue) -> String {
    Table::new(component_rows(value)).to_string()
}
