//! 提取引擎（文本 → 数值）
//!
//! 对 Token 序列做单遍折叠：显式解析状态 + 三个累加器（刻度边界内的
//! partial、跨边界的 total、匹配消费的 Token 列表）。连词和连字符先
//! 缓冲，后续不接数词就不并入跨度。词表认不出的 Token 不报错：
//! 匹配外直接放行，匹配内结束当前匹配继续扫描

use crate::grammar::{GrammarDescriptor, Scale, WordKind};
use crate::tokenize::{ReplaceableNumber, Token};
use crate::value::{is_numeric, NumberValue};

/// 提取选项
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub scale: Scale,
    /// 把序数词当作对应基数提取（third = 3 而不是 1/3）
    pub ordinals: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            scale: Scale::Short,
            ordinals: false,
        }
    }
}

/// 解析状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Unit,
    Teen,
    Ten,
    Hundred,
    Scale,
}

/// 进行中的匹配
struct Accumulator {
    state: State,
    partial: NumberValue,
    total: NumberValue,
    fraction: f64,
    negative: bool,
    decimal_digits: Option<String>,
    /// 十位词已记下高位数字，等个位补全（"forty two" → 42）
    decimal_ten_open: bool,
    tokens: Vec<Token>,
    /// 缓冲的连词/连字符/小数点词，后续接数词才并入跨度
    pending: Vec<Token>,
    pending_decimal: bool,
    has_number: bool,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            state: State::Init,
            partial: NumberValue::zero(),
            total: NumberValue::zero(),
            fraction: 0.0,
            negative: false,
            decimal_digits: None,
            decimal_ten_open: false,
            tokens: Vec::new(),
            pending: Vec::new(),
            pending_decimal: false,
            has_number: false,
        }
    }

    fn active(&self) -> bool {
        self.has_number || self.negative || !self.pending.is_empty()
    }

    fn has_pending_separator(&self) -> bool {
        !self.pending.is_empty() && !self.pending_decimal
    }

    /// 数词确认接续，把缓冲的分隔词并入跨度
    fn commit_pending(&mut self) {
        self.tokens.append(&mut self.pending);
        self.pending_decimal = false;
    }

    fn consume(&mut self, token: &Token) {
        self.commit_pending();
        self.tokens.push(token.clone());
        self.has_number = true;
    }

    /// 收尾：把累加器合成一个跨度，没有实际数词则返回 None
    fn finish(mut self) -> Option<ReplaceableNumber> {
        if !self.has_number {
            return None;
        }
        if self.decimal_ten_open {
            if let Some(digits) = self.decimal_digits.as_mut() {
                digits.push('0');
            }
        }
        let integer = self.total.add(self.partial);
        let mut value = match self.decimal_digits.as_ref().filter(|d| !d.is_empty()) {
            Some(digits) => format!("{}.{}", integer, digits)
                .parse::<f64>()
                .map(NumberValue::Float)
                .unwrap_or(integer),
            None => integer.add_f64(self.fraction),
        };
        if self.negative {
            value = value.neg();
        }
        tracing::debug!("匹配结束: {} ({} 个 token)", value, self.tokens.len());
        Some(ReplaceableNumber::new(value, self.tokens))
    }
}

/// 提取文本中的全部数字跨度，按首 Token 序号排列
pub fn extract_spans(
    tokens: &[Token],
    g: &GrammarDescriptor,
    opts: &ExtractOptions,
) -> Vec<ReplaceableNumber> {
    let mut spans: Vec<ReplaceableNumber> = Vec::new();
    let mut acc = Accumulator::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let raw = token.word.as_str();

        // 小数位读取中
        if acc.decimal_digits.is_some() {
            if consume_decimal_digit(&mut acc, token, g, opts.scale) {
                i += 1;
                continue;
            }
            flush(&mut acc, &mut spans);
            continue; // 当前 Token 用新累加器重新处理
        }

        // 数字字面量立即关闭词匹配，自成一个匹配
        if is_numeric(raw) {
            flush(&mut acc, &mut spans);
            if let Ok(v) = raw.trim().parse::<f64>() {
                let value = if v.fract() == 0.0 && v.abs() < i128::MAX as f64 {
                    NumberValue::Integer(v as i128)
                } else {
                    NumberValue::Float(v)
                };
                spans.push(ReplaceableNumber::new(value, vec![token.clone()]));
            }
            i += 1;
            continue;
        }

        // "5th" 式数字序数
        if opts.ordinals {
            if let Some(v) = parse_digit_ordinal(raw, g) {
                flush(&mut acc, &mut spans);
                spans.push(ReplaceableNumber::new(
                    NumberValue::Integer(v),
                    vec![token.clone()],
                ));
                i += 1;
                continue;
            }
        }

        // 连字符和逗号在匹配中等同连词桥接（"vinte-e-um"、刻度组间的逗号）
        if (raw == "-" || raw == ",") && acc.active() {
            acc.pending.push(token.clone());
            i += 1;
            continue;
        }

        let kind = g.classify_normalized(raw, opts.scale, opts.ordinals);
        match kind {
            WordKind::Unit(v) => {
                let ok = matches!(
                    acc.state,
                    State::Init | State::Hundred | State::Scale | State::Ten
                );
                if !ok {
                    flush(&mut acc, &mut spans);
                    continue;
                }
                acc.consume(token);
                acc.partial = acc.partial.add(NumberValue::Integer(v));
                acc.state = State::Unit;
            }
            WordKind::Teen(v) => {
                let ok = matches!(acc.state, State::Init | State::Hundred | State::Scale);
                if !ok {
                    flush(&mut acc, &mut spans);
                    continue;
                }
                acc.consume(token);
                acc.partial = acc.partial.add(NumberValue::Integer(v));
                acc.state = State::Teen;
            }
            WordKind::Ten(v) => {
                let ok = matches!(acc.state, State::Init | State::Hundred | State::Scale);
                if !ok {
                    flush(&mut acc, &mut spans);
                    continue;
                }
                acc.consume(token);
                acc.partial = acc.partial.add(NumberValue::Integer(v));
                acc.state = State::Ten;
            }
            WordKind::Hundred(v) => {
                let ok = matches!(acc.state, State::Init | State::Scale);
                if !ok {
                    flush(&mut acc, &mut spans);
                    continue;
                }
                acc.consume(token);
                acc.partial = acc.partial.add(NumberValue::Integer(v));
                acc.state = State::Hundred;
            }
            WordKind::HundredMultiplier => {
                let ok = matches!(
                    acc.state,
                    State::Init | State::Unit | State::Teen | State::Ten | State::Scale
                );
                if !ok {
                    flush(&mut acc, &mut spans);
                    continue;
                }
                acc.consume(token);
                acc.partial = acc.partial.or_one().mul_pow10(2);
                acc.state = State::Hundred;
            }
            WordKind::ScaleWord(exponent) => {
                acc.consume(token);
                if acc.state == State::Scale && acc.partial.is_zero() && !acc.total.is_zero() {
                    // 连续刻度词相乘："mil milhões" = 10^9
                    acc.total = acc.total.mul_pow10(exponent);
                } else {
                    acc.partial = acc.partial.or_one().mul_pow10(exponent);
                    acc.total = acc.total.add(acc.partial);
                    acc.partial = NumberValue::zero();
                }
                acc.state = State::Scale;
            }
            WordKind::Fraction(denominator) => {
                let den = denominator as f64;
                if acc.has_number {
                    if acc.has_pending_separator() {
                        // "dois e meio" = 2 + 1/2
                        acc.consume(token);
                        acc.fraction += 1.0 / den;
                    } else {
                        // "três quartos" = 3/4
                        acc.consume(token);
                        acc.fraction += acc.partial.as_f64() / den;
                        acc.partial = NumberValue::zero();
                    }
                    flush(&mut acc, &mut spans);
                } else if denominator == 2 {
                    // 裸的"半"独立成 0.5；其他裸分母词多半是序数，放行
                    acc = Accumulator::new();
                    acc.consume(token);
                    acc.fraction = 0.5;
                    flush(&mut acc, &mut spans);
                } else if acc.active() {
                    flush(&mut acc, &mut spans);
                    continue;
                }
            }
            WordKind::Ordinal(v) => {
                if acc.has_number {
                    if acc.state == State::Ten && v < 10 {
                        // "twenty fifth" = 25
                        acc.consume(token);
                        acc.partial = acc.partial.add(NumberValue::Integer(v));
                    } else if v >= 100 && v % 10 == 0 && is_power_of_ten(v) {
                        // "two hundredth" = 200，"two thousandth" = 2000
                        acc.consume(token);
                        acc.partial = acc.partial.or_one().mul_pow10(v.ilog10());
                    } else {
                        flush(&mut acc, &mut spans);
                        continue;
                    }
                } else {
                    acc = Accumulator::new();
                    acc.consume(token);
                    acc.partial = NumberValue::Integer(v);
                }
                // 序数不再接刻度词，立即收尾
                flush(&mut acc, &mut spans);
            }
            WordKind::Conjunction => {
                if acc.has_number {
                    acc.pending.push(token.clone());
                }
                // 匹配外的连词是普通文本
            }
            WordKind::DecimalPoint => {
                acc.pending.push(token.clone());
                acc.pending_decimal = true;
                // 下一个 Token 是数位词才真正进入小数模式
                if let Some(next) = tokens.get(i + 1) {
                    if is_digit_word(&next.word, g, opts.scale) {
                        acc.commit_pending();
                        acc.decimal_digits = Some(String::new());
                    }
                }
                if acc.decimal_digits.is_none() && !acc.has_number {
                    // 孤立的小数点词，放行
                    acc = Accumulator::new();
                } else if acc.decimal_digits.is_none() {
                    acc.pending.clear();
                    acc.pending_decimal = false;
                    flush(&mut acc, &mut spans);
                }
            }
            WordKind::Negative => {
                if acc.active() {
                    flush(&mut acc, &mut spans);
                    continue;
                }
                acc.negative = true;
                acc.pending.push(token.clone());
            }
            WordKind::Unknown => {
                if acc.active() {
                    flush(&mut acc, &mut spans);
                }
                // 认不出的 Token 原样放过
            }
        }
        i += 1;
    }

    flush(&mut acc, &mut spans);
    spans
}

/// 把进行中的匹配写入结果并重置累加器
fn flush(acc: &mut Accumulator, spans: &mut Vec<ReplaceableNumber>) {
    let finished = std::mem::replace(acc, Accumulator::new());
    if let Some(span) = finished.finish() {
        spans.push(span);
    }
}

/// 小数模式下消费一个数位词，返回是否消费成功
fn consume_decimal_digit(
    acc: &mut Accumulator,
    token: &Token,
    g: &GrammarDescriptor,
    scale: Scale,
) -> bool {
    let kind = g.classify_normalized(&token.word, scale, false);
    let digits = match acc.decimal_digits.as_mut() {
        Some(d) => d,
        None => return false,
    };
    match kind {
        WordKind::Unit(v) => {
            digits.push((b'0' + v as u8) as char);
            acc.decimal_ten_open = false;
            acc.tokens.push(token.clone());
            acc.has_number = true;
            true
        }
        WordKind::Teen(v) => {
            if acc.decimal_ten_open {
                digits.push('0');
                acc.decimal_ten_open = false;
            }
            digits.push_str(&v.to_string());
            acc.tokens.push(token.clone());
            acc.has_number = true;
            true
        }
        WordKind::Ten(v) => {
            if acc.decimal_ten_open {
                digits.push('0');
            }
            // 高位先记下，个位跟上就补齐（"forty two" → "42"）
            digits.push((b'0' + (v / 10) as u8) as char);
            acc.decimal_ten_open = true;
            acc.tokens.push(token.clone());
            acc.has_number = true;
            true
        }
        _ => false,
    }
}

/// 小数点词后能当数位的词
fn is_digit_word(raw: &str, g: &GrammarDescriptor, scale: Scale) -> bool {
    matches!(
        g.classify_normalized(raw, scale, false),
        WordKind::Unit(_) | WordKind::Teen(_) | WordKind::Ten(_)
    )
}

fn is_power_of_ten(mut v: i128) -> bool {
    while v >= 10 && v % 10 == 0 {
        v /= 10;
    }
    v == 1
}

/// "5th" / "21st" 式数字序数
fn parse_digit_ordinal(raw: &str, g: &GrammarDescriptor) -> Option<i128> {
    let rule = g.ordinal.as_ref()?;
    for suffix in rule.digit_suffixes {
        if let Some(stem) = raw.strip_suffix(suffix) {
            if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
                return stem.parse().ok();
            }
        }
    }
    None
}
