//! 数值表示模块
//!
//! 提取引擎的累加器在 i128 精确整数域内运算，只有真正出现小数部分
//! 或超出 i128 范围时才降级为 f64

use std::fmt;

/// 转换结果的数值表示
///
/// 整数路径保持精确（超过 f64 安全整数范围的刻度累加不丢位），
/// 小数路径使用 f64
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Integer(i128),
    Float(f64),
}

impl NumberValue {
    pub fn zero() -> Self {
        NumberValue::Integer(0)
    }

    pub fn is_zero(&self) -> bool {
        match self {
            NumberValue::Integer(n) => *n == 0,
            NumberValue::Float(f) => *f == 0.0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            NumberValue::Integer(n) => *n as f64,
            NumberValue::Float(f) => *f,
        }
    }

    /// 相加，整数溢出时降级为 f64
    pub fn add(self, other: NumberValue) -> NumberValue {
        match (self, other) {
            (NumberValue::Integer(a), NumberValue::Integer(b)) => match a.checked_add(b) {
                Some(sum) => NumberValue::Integer(sum),
                None => NumberValue::Float(a as f64 + b as f64),
            },
            (a, b) => NumberValue::Float(a.as_f64() + b.as_f64()),
        }
    }

    pub fn add_f64(self, f: f64) -> NumberValue {
        if f == 0.0 {
            return self;
        }
        NumberValue::Float(self.as_f64() + f)
    }

    /// 乘以 10^exp（刻度词的量级），溢出降级为 f64
    pub fn mul_pow10(self, exp: u32) -> NumberValue {
        match self {
            NumberValue::Integer(n) => match 10i128
                .checked_pow(exp)
                .and_then(|p| n.checked_mul(p))
            {
                Some(product) => NumberValue::Integer(product),
                None => NumberValue::Float(n as f64 * 10f64.powi(exp as i32)),
            },
            NumberValue::Float(f) => NumberValue::Float(f * 10f64.powi(exp as i32)),
        }
    }

    /// 零值默认为 1（裸刻度词 "thousand" = 1000）
    pub fn or_one(self) -> NumberValue {
        if self.is_zero() {
            NumberValue::Integer(1)
        } else {
            self
        }
    }

    pub fn neg(self) -> NumberValue {
        match self {
            NumberValue::Integer(n) => NumberValue::Integer(-n),
            NumberValue::Float(f) => NumberValue::Float(-f),
        }
    }
}

impl fmt::Display for NumberValue {
    /// 整数不带小数点（"1234"），小数按最短往返形式（"2.42"）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberValue::Integer(n) => write!(f, "{}", n),
            NumberValue::Float(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}", *v as i128)
                } else {
                    write!(f, "{}", v)
                }
            }
        }
    }
}

/// 检查字符串是否可以解析为数字（整数、小数、科学计数法、inf/nan）
pub fn is_numeric(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok() && !s.trim().is_empty()
}

/// 拆分小数：(整数部分, 小数部分按 places 位取整, 有效位数)
///
/// 超出精度的位直接截断，但与取整值的偏差小于 0.01 时按取整处理——
/// 1.239999999 这类浮点噪声按 1.24 读出。末尾的零连同精度一起去掉。
pub fn split_decimal(value: f64, places: usize) -> (i128, i128, usize) {
    let pre = value.trunc() as i128;
    let scaled = (value - value.trunc()).abs() * 10f64.powi(places as i32);
    let mut post = if (scaled.round() - scaled).abs() < 0.01 {
        scaled.round() as i128
    } else {
        scaled.floor() as i128
    };

    let mut precision = places;
    while post != 0 {
        let (q, r) = (post / 10, post % 10);
        if r != 0 {
            break;
        }
        post = q;
        precision -= 1;
    }

    (pre, post, precision)
}

/// 把小数近似成带分数 (整数部分, 分子, 分母)
///
/// 依次尝试 denominators 中的分母，误差阈值 0.01；找不到合适分母时
/// 返回 None。denominators 为空时使用默认范围 1..=20
pub fn convert_to_mixed_fraction(
    value: f64,
    denominators: &[i128],
) -> Option<(i128, i128, i128)> {
    let whole = value.trunc() as i128;
    if whole as f64 == value {
        return Some((whole, 0, 1));
    }

    let default_range: Vec<i128> = (1..=20).collect();
    let denominators = if denominators.is_empty() {
        &default_range[..]
    } else {
        denominators
    };

    let frac = (value - value.trunc()).abs();
    for &den in denominators {
        let numerator = frac * den as f64;
        if (numerator - numerator.round()).abs() < 0.01 {
            return Some((whole, numerator.round() as i128, den));
        }
    }
    None
}

/// 检查两个字符串是否构成分数（"1/2" 拆出的两段）
pub fn look_for_fractions(parts: &[&str]) -> bool {
    parts.len() == 2 && is_numeric(parts[0]) && is_numeric(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_stays_exact() {
        let v = NumberValue::Integer(3_840_285).mul_pow10(9);
        assert_eq!(v, NumberValue::Integer(3_840_285_000_000_000));

        let v = v.add(NumberValue::Integer(766_987_249));
        assert_eq!(v, NumberValue::Integer(3_840_285_766_987_249));
    }

    #[test]
    fn test_overflow_degrades_to_float() {
        let v = NumberValue::Integer(5).mul_pow10(38);
        assert!(matches!(v, NumberValue::Float(_)));
        assert!((v.as_f64() - 5e38).abs() / 5e38 < 1e-10);
    }

    #[test]
    fn test_or_one_for_bare_scale_words() {
        assert_eq!(NumberValue::zero().or_one(), NumberValue::Integer(1));
        assert_eq!(NumberValue::Integer(7).or_one(), NumberValue::Integer(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(NumberValue::Integer(3_000_000_000).to_string(), "3000000000");
        assert_eq!(NumberValue::Float(2.42).to_string(), "2.42");
        assert_eq!(NumberValue::Float(2300000.0).to_string(), "2300000");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("123"));
        assert!(is_numeric("-456"));
        assert!(is_numeric("123.45"));
        assert!(is_numeric("1e5"));
        assert!(is_numeric("inf"));
        assert!(is_numeric("  123  "));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("12.34.56"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("123abc"));
        assert!(!is_numeric("12 34"));
    }

    #[test]
    fn test_split_decimal_basic() {
        assert_eq!(split_decimal(2.5, 2), (2, 5, 1));
        assert_eq!(split_decimal(1.23, 2), (1, 23, 2));
        assert_eq!(split_decimal(10.05, 2), (10, 5, 2));
    }

    #[test]
    fn test_split_decimal_float_noise() {
        // 1.239999999 按 1.24 读出
        assert_eq!(split_decimal(1.239999999, 2), (1, 24, 2));
    }

    #[test]
    fn test_split_decimal_truncates_beyond_places() {
        assert_eq!(split_decimal(1.23456, 2), (1, 23, 2));
    }

    #[test]
    fn test_mixed_fraction_whole() {
        assert_eq!(convert_to_mixed_fraction(5.0, &[]), Some((5, 0, 1)));
        assert_eq!(convert_to_mixed_fraction(-3.0, &[]), Some((-3, 0, 1)));
    }

    #[test]
    fn test_mixed_fraction_simple() {
        assert_eq!(convert_to_mixed_fraction(0.5, &[]), Some((0, 1, 2)));
        assert_eq!(convert_to_mixed_fraction(2.5, &[]), Some((2, 1, 2)));
        assert_eq!(convert_to_mixed_fraction(3.25, &[]), Some((3, 1, 4)));
        assert_eq!(convert_to_mixed_fraction(1.0 / 3.0, &[]), Some((0, 1, 3)));
        assert_eq!(convert_to_mixed_fraction(0.05, &[]), Some((0, 1, 20)));
    }

    #[test]
    fn test_mixed_fraction_accuracy_threshold() {
        // 阈值 0.01 内的浮点噪声
        assert_eq!(convert_to_mixed_fraction(4.500002, &[]), Some((4, 1, 2)));
        assert_eq!(convert_to_mixed_fraction(5.00001, &[1]), Some((5, 0, 1)));
    }

    #[test]
    fn test_mixed_fraction_no_match() {
        assert_eq!(convert_to_mixed_fraction(1.0 / 7.0, &[2, 3]), None);
    }

    #[test]
    fn test_look_for_fractions() {
        assert!(look_for_fractions(&["1", "2"]));
        assert!(look_for_fractions(&["1.5", "2"]));
        assert!(!look_for_fractions(&["a", "2"]));
        assert!(!look_for_fractions(&["1"]));
        assert!(!look_for_fractions(&["1", "2", "3"]));
    }
}
