//! # session 命令实现
//!
//! 交互式转换会话：逐行读取命令，驱动模式状态机与提交流程。
//!
//! ## 会话命令
//! ```text
//! direction <grid-to-geo|geo-to-grid>   切换方向（清除结果，保留字段）
//! format <dd|dms>                       切换输入格式（同上）
//! set <field> <value>                   填写字段；DMS 文本会立即解析并回填分量
//! unset <field>                         清空字段
//! fields                                显示当前模式与已填写字段
//! submit                                提交转换
//! clear                                 清除显示的结果或错误
//! help / quit
//! ```
//!
//! ## 依赖关系
//! - 使用 `cli/session.rs` 定义的参数
//! - 使用 `input/`, `service/`, `parsers/dms.rs`
//! - 使用 `utils/output.rs`, `utils/presenter.rs`, `console`

use crate::cli::session::SessionArgs;
use crate::cli::GlobalArgs;
use crate::error::{GeoconvError, Result};
use crate::input::{FieldId, RawFields};
use crate::models::{Axis, ConversionDirection, InputFormat};
use crate::parsers::dms;
use crate::service::{ConversionOrchestrator, ConversionService, HttpConversionService};
use crate::utils::{output, presenter};

use clap::ValueEnum;
use console::{style, Term};
use std::io::{self, BufRead};
use tracing::debug;

/// 会话命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Direction(ConversionDirection),
    Format(InputFormat),
    Set(FieldId, String),
    Unset(FieldId),
    Fields,
    Submit,
    Clear,
    Help,
    Quit,
    Noop,
}

const HELP: &[(&str, &str)] = &[
    ("direction <d>", "grid-to-geo | geo-to-grid"),
    ("format <f>", "dd | dms"),
    ("set <field> <v>", "fill a field (see `fields` for names)"),
    ("unset <field>", "clear a field"),
    ("fields", "show mode and filled fields"),
    ("submit", "send the conversion request"),
    ("clear", "clear the displayed result"),
    ("quit", "leave the session"),
];

/// 拆出第一个单词和剩余部分
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s, ""),
    }
}

fn require<'a>(arg: &'a str, usage: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(GeoconvError::InvalidArgument(format!("Usage: {}", usage)))
    } else {
        Ok(arg)
    }
}

/// 解析一行会话命令
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let (word, rest) = split_word(line);

    let command = match word.to_lowercase().as_str() {
        "" => SessionCommand::Noop,
        "direction" | "dir" => {
            let value = require(rest, "direction <grid-to-geo|geo-to-grid>")?;
            ConversionDirection::from_str(value, true)
                .map(SessionCommand::Direction)
                .map_err(|_| {
                    GeoconvError::InvalidArgument(format!("Unknown direction '{}'", value))
                })?
        }
        "format" | "fmt" => {
            let value = require(rest, "format <dd|dms>")?;
            InputFormat::from_str(value, true)
                .map(SessionCommand::Format)
                .map_err(|_| {
                    GeoconvError::InvalidArgument(format!("Unknown format '{}'", value))
                })?
        }
        "set" => {
            let (field, value) = split_word(rest);
            let field = require(field, "set <field> <value>")?.parse::<FieldId>()?;
            SessionCommand::Set(field, require(value, "set <field> <value>")?.to_string())
        }
        "unset" => SessionCommand::Unset(require(rest, "unset <field>")?.parse::<FieldId>()?),
        "fields" | "show" => SessionCommand::Fields,
        "submit" | "convert" => SessionCommand::Submit,
        "clear" | "back" => SessionCommand::Clear,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => {
            return Err(GeoconvError::InvalidArgument(format!(
                "Unknown command '{}' (type 'help')",
                other
            )))
        }
    };
    Ok(command)
}

/// 交互式会话状态
pub struct Session<S: ConversionService> {
    orchestrator: ConversionOrchestrator,
    fields: RawFields,
    service: S,
}

impl<S: ConversionService> Session<S> {
    pub fn new(service: S, fields: RawFields) -> Self {
        Session {
            orchestrator: ConversionOrchestrator::new(),
            fields,
            service,
        }
    }

    pub fn orchestrator(&self) -> &ConversionOrchestrator {
        &self.orchestrator
    }

    /// 处理一条命令；返回 false 表示结束会话
    pub fn handle(&mut self, command: SessionCommand) -> bool {
        debug!(?command, "session command");
        match command {
            SessionCommand::Direction(direction) => {
                self.orchestrator.select_direction(direction);
                output::print_info(&format!("Mode: {}", self.orchestrator.mode()));
            }
            SessionCommand::Format(format) => {
                self.orchestrator.select_format(format);
                output::print_info(&format!("Mode: {}", self.orchestrator.mode()));
            }
            SessionCommand::Set(field, value) => self.set_field(field, value),
            SessionCommand::Unset(field) => self.fields.clear(field),
            SessionCommand::Fields => self.print_fields(),
            SessionCommand::Submit => {
                super::submit_with_progress(
                    &mut self.orchestrator,
                    &self.fields,
                    &mut self.service,
                );
                presenter::present(self.orchestrator.display());
            }
            SessionCommand::Clear => self.orchestrator.clear_display(),
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => return false,
            SessionCommand::Noop => {}
        }
        true
    }

    /// 填写字段；DMS 文本立即解析，成功时回填该轴的分量字段
    fn set_field(&mut self, field: FieldId, value: String) {
        let axis = match field {
            FieldId::DmsLatitude => Some(Axis::Latitude),
            FieldId::DmsLongitude => Some(Axis::Longitude),
            _ => None,
        };

        if let Some(axis) = axis {
            match dms::parse(&value) {
                Ok(parsed) => {
                    self.fields.fill_components(axis, &parsed);
                    output::print_success(&format!(
                        "{} parsed successfully!",
                        axis.to_string().to_uppercase()
                    ));
                }
                Err(e) => output::print_error(&format!("Error parsing {}: {}", axis, e)),
            }
        }

        self.fields.set(field, value);
    }

    fn print_fields(&self) {
        output::print_info(&format!("Mode: {}", self.orchestrator.mode()));
        let populated = self.fields.populated();
        if populated.is_empty() {
            output::print_warning("No fields filled in");
        }
        for (id, value) in populated {
            output::print_field(id.name(), value);
        }
    }
}

fn print_help() {
    output::print_separator();
    for (command, description) in HELP {
        output::print_field(command, description);
    }
    output::print_separator();
}

/// 执行 session 命令
pub fn execute(args: SessionArgs, global: &GlobalArgs) -> Result<()> {
    let service = HttpConversionService::new(&global.service_url, global.timeout())?;
    output::print_header("geoconv interactive session");
    output::print_info(&format!("Conversion service: {}", service.endpoint()));
    output::print_info("Type 'help' for commands");

    let fields = if args.demo {
        RawFields::demo()
    } else {
        RawFields::default()
    };
    let mut session = Session::new(service, fields);

    let term = Term::stdout();
    let attended = term.is_term();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let line = if attended {
            let prompt = format!(
                "{} [{}]> ",
                style("geoconv").cyan().bold(),
                session.orchestrator().mode()
            );
            if term.write_str(&prompt).is_err() {
                break;
            }
            match term.read_line() {
                Ok(line) => line,
                Err(_) => break,
            }
        } else {
            match lines.next() {
                Some(Ok(line)) => line,
                _ => break,
            }
        };

        match parse_command(&line) {
            Ok(command) => {
                if !session.handle(command) {
                    break;
                }
            }
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    output::print_info("Session closed");
    Ok(())
}
