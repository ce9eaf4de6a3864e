//! # geoconv 终端输出
//!
//! 状态行前缀：`[OK]` 解析/转换成功，`[ERR]` 错误（写到 stderr），
//! `[WARN]` 覆盖范围等提示，`[*]` 模式与服务地址等信息。
//! 会话中的字段列表与帮助表使用 `print_field` 对齐输出。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `utils/presenter.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印键值对
pub fn print_field(label: &str, value: &str) {
    println!("    {:<16} {}", label.dimmed(), value);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
