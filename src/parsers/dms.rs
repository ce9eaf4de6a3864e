//! # DMS 文本解析器
//!
//! 将用户手工输入的度分秒文本解析为 [`DmsValue`]。
//!
//! ## 支持的格式（不区分大小写，空白与 ° ' " 标记可选）
//! ```text
//! N 5 35 18.09          半球字母在前
//! 5 35 18.09 N          半球字母在后
//! 5°35'18.09"N          带标记，半球字母紧贴秒数
//! 5° 35′ 18.09″ N       排版符号 ′ ″ 同样接受
//! ```
//!
//! ## 匹配策略
//! 按顺序尝试 `prefixed` → `suffixed` → `loose`，第一个在结构上匹配的
//! 策略胜出，不在策略之间比较“最佳”匹配。
//!
//! `loose` 是未锚定的宽松模式，存在以下已知歧义，由策略顺序决定结果：
//! - `53518N` 这类没有分隔符的输入按贪婪捕获切分（得到 535/1/8）
//! - 同时带前后两个半球字母时取前者
//! - 半球字母可以取自单词内部：`Latitude 5 35 18.09 N` 中 `LatitudE`
//!   的 `E` 被当作前置半球
//! - 只有两组数字时会拆开其中一组：`N 5 35` 得到 5/3/5
//!
//! ## 校验顺序
//! 模式匹配 → 数值解析 → 度数范围 → 分范围 → 秒范围，报告第一个失败项。
//! 度数上限只由半球字母决定（N/S → 90, E/W → 180）。
//!
//! ## 依赖关系
//! - 被 `input/collector.rs`, `commands/dms.rs`, `models/coverage.rs` 使用
//! - 使用 `models/dms.rs`

use crate::error::{DmsComponent, GeoconvError, Result};
use crate::models::dms::degrees_out_of_range;
use crate::models::{DmsValue, Hemisphere};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::num::{IntErrorKind, ParseIntError};
use tracing::debug;

const DEGREES: &str = r"(?P<deg>-?[0-9]+)";
const MINUTES: &str = r"(?P<min>[0-9]+)";
const SECONDS: &str = r"(?P<sec>[0-9]+(?:\.[0-9]*)?|\.[0-9]+)";
const DEG_SEP: &str = r"(?:\s*[°º]\s*|\s+)";
const MIN_SEP: &str = r"(?:\s*['′]\s*|\s+)";
const SEC_MARK: &str = r#"(?:\s*(?:"|″|''))?"#;

/// 单个匹配策略
struct Strategy {
    name: &'static str,
    pattern: Regex,
}

/// 匹配到但尚未转换为数值的分量
#[derive(Debug)]
struct RawDms<'t> {
    degrees: &'t str,
    minutes: &'t str,
    seconds: &'t str,
    hemisphere: Hemisphere,
}

impl Strategy {
    fn new(name: &'static str, pattern: String) -> Self {
        Strategy {
            name,
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    /// 结构匹配；没有任何半球字母时视为不匹配
    fn try_match<'t>(&self, text: &'t str) -> Option<RawDms<'t>> {
        let caps = self.pattern.captures(text)?;
        let hemisphere =
            hemisphere_capture(&caps, "pre").or_else(|| hemisphere_capture(&caps, "suf"))?;

        Some(RawDms {
            degrees: caps.name("deg")?.as_str(),
            minutes: caps.name("min")?.as_str(),
            seconds: caps.name("sec")?.as_str(),
            hemisphere,
        })
    }
}

fn hemisphere_capture(caps: &Captures<'_>, group: &str) -> Option<Hemisphere> {
    caps.name(group)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Hemisphere::from_letter)
}

/// 有序策略列表
static STRATEGIES: Lazy<Vec<Strategy>> = Lazy::new(|| {
    vec![
        Strategy::new(
            "prefixed",
            format!(r"^(?P<pre>[NSEW])\s*{DEGREES}{DEG_SEP}{MINUTES}{MIN_SEP}{SECONDS}{SEC_MARK}$"),
        ),
        Strategy::new(
            "suffixed",
            format!(r"^{DEGREES}{DEG_SEP}{MINUTES}{MIN_SEP}{SECONDS}{SEC_MARK}\s*(?P<suf>[NSEW])$"),
        ),
        Strategy::new(
            "loose",
            r#"(?P<pre>[NSEW]?)\s*(?P<deg>-?[0-9]+)[°\s]?\s*(?P<min>[0-9]+)['\s]?\s*(?P<sec>[0-9.]+)["\s]?\s*(?P<suf>[NSEW]?)"#
                .to_string(),
        ),
    ]
});

/// 解析 DMS 文本
pub fn parse(text: &str) -> Result<DmsValue> {
    let cleaned = text.trim().to_uppercase();
    if cleaned.is_empty() {
        return Err(format_error(text, "empty input"));
    }

    let (name, raw) = STRATEGIES
        .iter()
        .find_map(|s| s.try_match(&cleaned).map(|raw| (s.name, raw)))
        .ok_or_else(|| format_error(text, "no recognized pattern"))?;

    debug!(strategy = name, input = %text.trim(), "DMS pattern matched");

    // 纯数字但超出 i64 的分量按范围错误报告，且仍先检查度数
    let axis = raw.hemisphere.axis();
    let degrees = match raw.degrees.parse::<i64>() {
        Ok(v) => v,
        Err(e) if overflowed(&e) => return Err(degrees_out_of_range(axis, raw.degrees)),
        Err(_) => return Err(format_error(text, "degrees is not a valid integer")),
    };
    let minutes = match raw.minutes.parse::<i64>() {
        Ok(v) => v,
        Err(e) if overflowed(&e) => {
            DmsValue::new(degrees, 0, 0.0, raw.hemisphere)?;
            return Err(GeoconvError::OutOfRange {
                component: DmsComponent::Minutes,
                value: raw.minutes.to_string(),
                bound: "0-59",
            });
        }
        Err(_) => return Err(format_error(text, "minutes is not a valid integer")),
    };
    let seconds: f64 = raw
        .seconds
        .parse()
        .map_err(|_| format_error(text, "seconds is not a valid number"))?;

    DmsValue::new(degrees, minutes, seconds, raw.hemisphere)
}

/// 返回第一个结构匹配的策略名，用于诊断
pub fn matching_strategy(text: &str) -> Option<&'static str> {
    let cleaned = text.trim().to_uppercase();
    STRATEGIES
        .iter()
        .find(|s| s.try_match(&cleaned).is_some())
        .map(|s| s.name)
}

fn overflowed(e: &ParseIntError) -> bool {
    matches!(
        e.kind(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
    )
}

fn format_error(input: &str, reason: &str) -> GeoconvError {
    GeoconvError::InvalidDmsFormat {
        input: input.trim().to_string(),
        reason: reason.to_string(),
    }
}
