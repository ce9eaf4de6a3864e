//! # 度分秒 (DMS) 数据模型
//!
//! 定义经纬度的度/分/秒表示及其范围约束。
//!
//! ## 约束
//! - N/S 半球: 0 ≤ 度 ≤ 90
//! - E/W 半球: 0 ≤ 度 ≤ 180
//! - 0 ≤ 分 < 60, 0 ≤ 秒 < 60
//!
//! ## 依赖关系
//! - 被 `parsers/dms.rs`, `input/` 使用
//! - 使用 `error.rs`

use crate::error::{DmsComponent, GeoconvError, Result};
use std::fmt;
use std::str::FromStr;

/// 坐标轴（纬度/经度）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// 该轴允许的最大度数
    pub fn max_degrees(self) -> i64 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// 半球选择缺省时使用的默认半球
    pub fn default_hemisphere(self) -> Hemisphere {
        match self {
            Axis::Latitude => Hemisphere::North,
            Axis::Longitude => Hemisphere::West,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// 半球字母
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// 由半球字母推断坐标轴
    pub fn axis(self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }

    /// 是否为负方向（S/W）
    pub fn is_negative(self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    pub fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// 从单个字母解析（不区分大小写）
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Hemisphere {
    type Err = GeoconvError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Hemisphere::from_letter(c),
            _ => None,
        }
        .ok_or_else(|| GeoconvError::InvalidField {
            field: "hemisphere".to_string(),
            value: trimmed.to_string(),
            reason: "expected one of N, S, E, W".to_string(),
        })
    }
}

/// 度分秒坐标值
///
/// 只能通过 [`DmsValue::new`] 构造，构造后不可变且满足范围约束。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsValue {
    degrees: i64,
    minutes: i64,
    seconds: f64,
    hemisphere: Hemisphere,
}

impl DmsValue {
    /// 校验范围并构造
    ///
    /// 检查顺序固定：度 → 分 → 秒，返回第一个失败的检查。
    pub fn new(degrees: i64, minutes: i64, seconds: f64, hemisphere: Hemisphere) -> Result<Self> {
        if degrees < 0 || degrees > hemisphere.axis().max_degrees() {
            return Err(degrees_out_of_range(hemisphere.axis(), degrees));
        }

        if !(0..60).contains(&minutes) {
            return Err(GeoconvError::OutOfRange {
                component: DmsComponent::Minutes,
                value: minutes.to_string(),
                bound: "0-59",
            });
        }

        // NaN 也在此被拒绝
        if !(0.0..60.0).contains(&seconds) {
            return Err(GeoconvError::OutOfRange {
                component: DmsComponent::Seconds,
                value: seconds.to_string(),
                bound: "0-59.99",
            });
        }

        // -0.0 落在区间内，归一化为 +0.0，否则规范格式会输出 "-0"
        Ok(DmsValue {
            degrees,
            minutes,
            seconds: seconds + 0.0,
            hemisphere,
        })
    }

    pub fn degrees(&self) -> i64 {
        self.degrees
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn axis(&self) -> Axis {
        self.hemisphere.axis()
    }

    /// 转换为十进制度（S/W 为负）
    pub fn to_decimal(&self) -> f64 {
        let value = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.hemisphere.is_negative() {
            -value
        } else {
            value
        }
    }

    /// 从十进制度构造
    ///
    /// 半球由坐标轴和符号决定；秒数舍入到 60 时向分、度进位。
    pub fn from_decimal(value: f64, axis: Axis) -> Result<Self> {
        if !value.is_finite() {
            return Err(GeoconvError::InvalidField {
                field: axis.to_string(),
                value: value.to_string(),
                reason: "not a finite number".to_string(),
            });
        }

        let hemisphere = match (axis, value < 0.0) {
            (Axis::Latitude, false) => Hemisphere::North,
            (Axis::Latitude, true) => Hemisphere::South,
            (Axis::Longitude, false) => Hemisphere::East,
            (Axis::Longitude, true) => Hemisphere::West,
        };

        let abs = value.abs();
        let mut degrees = abs.trunc();
        let minutes_decimal = (abs - degrees) * 60.0;
        let mut minutes = minutes_decimal.trunc();
        let mut seconds = (minutes_decimal - minutes) * 60.0;

        if seconds >= 60.0 {
            seconds = 0.0;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes = 0.0;
            degrees += 1.0;
        }

        DmsValue::new(degrees as i64, minutes as i64, seconds, hemisphere)
    }

    /// 人类可读格式，例如 `5° 35' 18.09" N`
    pub fn display_pretty(&self) -> String {
        format!(
            "{}° {}' {:.2}\" {}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

/// 度数超出该轴上限
pub fn degrees_out_of_range(axis: Axis, value: impl ToString) -> GeoconvError {
    let (component, bound) = match axis {
        Axis::Latitude => (DmsComponent::LatitudeDegrees, "0-90"),
        Axis::Longitude => (DmsComponent::LongitudeDegrees, "0-180"),
    };
    GeoconvError::OutOfRange {
        component,
        value: value.to_string(),
        bound,
    }
}

/// 规范字符串格式 `"D M S H"`，可被解析器原样读回
impl fmt::Display for DmsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let v = DmsValue::new(5, 35, 18.09, Hemisphere::North).unwrap();
        assert_eq!(v.to_string(), "5 35 18.09 N");

        let v = DmsValue::new(0, 10, 0.0, Hemisphere::West).unwrap();
        assert_eq!(v.to_string(), "0 10 0 W");
    }

    #[test]
    fn test_degree_bound_depends_on_hemisphere() {
        assert!(DmsValue::new(90, 0, 0.0, Hemisphere::South).is_ok());
        assert!(DmsValue::new(120, 0, 0.0, Hemisphere::East).is_ok());

        let err = DmsValue::new(91, 0, 0.0, Hemisphere::North).unwrap_err();
        assert!(matches!(
            err,
            GeoconvError::OutOfRange {
                component: DmsComponent::LatitudeDegrees,
                ..
            }
        ));

        let err = DmsValue::new(181, 0, 0.0, Hemisphere::West).unwrap_err();
        assert!(matches!(
            err,
            GeoconvError::OutOfRange {
                component: DmsComponent::LongitudeDegrees,
                ..
            }
        ));
    }

    #[test]
    fn test_validation_order() {
        // 度数先于分、秒检查
        let err = DmsValue::new(-1, 75, 99.0, Hemisphere::North).unwrap_err();
        assert!(matches!(
            err,
            GeoconvError::OutOfRange {
                component: DmsComponent::LatitudeDegrees,
                ..
            }
        ));

        let err = DmsValue::new(5, 60, 99.0, Hemisphere::North).unwrap_err();
        assert!(matches!(
            err,
            GeoconvError::OutOfRange {
                component: DmsComponent::Minutes,
                ..
            }
        ));

        let err = DmsValue::new(5, 59, 60.0, Hemisphere::North).unwrap_err();
        assert!(matches!(
            err,
            GeoconvError::OutOfRange {
                component: DmsComponent::Seconds,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_seconds_rejected() {
        assert!(DmsValue::new(5, 0, f64::NAN, Hemisphere::North).is_err());
    }

    #[test]
    fn test_negative_zero_seconds_normalized() {
        let v = DmsValue::new(5, 35, -0.0, Hemisphere::North).unwrap();
        assert!(v.seconds().is_sign_positive());
        assert_eq!(v.to_string(), "5 35 0 N");
        assert_eq!(v, DmsValue::new(5, 35, 0.0, Hemisphere::North).unwrap());
    }

    #[test]
    fn test_to_decimal_sign() {
        let v = DmsValue::new(5, 35, 18.09, Hemisphere::North).unwrap();
        assert!((v.to_decimal() - 5.588358).abs() < 1e-6);

        let v = DmsValue::new(0, 10, 31.14, Hemisphere::West).unwrap();
        assert!((v.to_decimal() + 0.175317).abs() < 1e-6);
    }

    #[test]
    fn test_from_decimal() {
        let v = DmsValue::from_decimal(-0.175317, Axis::Longitude).unwrap();
        assert_eq!(v.hemisphere(), Hemisphere::West);
        assert_eq!(v.degrees(), 0);
        assert_eq!(v.minutes(), 10);
        assert!((v.seconds() - 31.14).abs() < 0.01);

        let v = DmsValue::from_decimal(0.5, Axis::Longitude).unwrap();
        assert_eq!(v.hemisphere(), Hemisphere::East);

        let v = DmsValue::from_decimal(-12.25, Axis::Latitude).unwrap();
        assert_eq!(v.hemisphere(), Hemisphere::South);
        assert_eq!(v.minutes(), 15);

        assert!(DmsValue::from_decimal(95.0, Axis::Latitude).is_err());
        assert!(DmsValue::from_decimal(f64::INFINITY, Axis::Latitude).is_err());
    }

    #[test]
    fn test_display_pretty() {
        let v = DmsValue::new(5, 35, 18.09, Hemisphere::North).unwrap();
        assert_eq!(v.display_pretty(), "5° 35' 18.09\" N");
    }

    #[test]
    fn test_hemisphere_from_str() {
        assert_eq!("s".parse::<Hemisphere>().unwrap(), Hemisphere::South);
        assert_eq!(" W ".parse::<Hemisphere>().unwrap(), Hemisphere::West);
        assert!("X".parse::<Hemisphere>().is_err());
        assert!("NE".parse::<Hemisphere>().is_err());
    }
}
