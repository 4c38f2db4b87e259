//! 生成引擎（数值 → 文本）
//!
//! 算法对所有语言一致：特殊值 → 科学计数法 → 整数刻度分组 → 小数 →
//! 序数变换。语言差异全部来自语法描述符的词表和形态钩子。
//! 超出刻度词表的量级按数字串退化输出，不报错

use crate::grammar::{
    DecimalSeparator, DigitPronunciation, ElideOne, GrammarDescriptor, Grouping, HundredsForm,
    Scale, TensJoin,
};
use crate::value::split_decimal;

/// 生成选项
#[derive(Debug, Clone, Copy)]
pub struct PronounceOptions {
    /// 最多读出的小数位数
    pub places: usize,
    pub scale: Scale,
    pub scientific: bool,
    pub ordinals: bool,
    /// 小数读法，None 用语言默认
    pub digits: Option<DigitPronunciation>,
}

impl Default for PronounceOptions {
    fn default() -> Self {
        Self {
            places: 2,
            scale: Scale::Short,
            scientific: false,
            ordinals: false,
            digits: None,
        }
    }
}

/// 把数值转成所选语言的读法
pub fn pronounce(value: f64, g: &GrammarDescriptor, opts: &PronounceOptions) -> String {
    if value.is_nan() {
        return g.nan_word.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            g.infinity_word.to_string()
        } else {
            format!("{} {}", g.negative_word, g.infinity_word)
        };
    }

    if opts.scientific && g.supports_scientific {
        if let Some(text) = scientific(value, g, opts) {
            return text;
        }
    }

    if value < 0.0 {
        let inner = PronounceOptions {
            scientific: false,
            ..*opts
        };
        return format!("{} {}", g.negative_word, pronounce(-value, g, &inner));
    }

    // 超出最大刻度词的量级退化为数字串
    if value >= 10f64.powi(g.max_exponent(opts.scale) as i32) {
        tracing::debug!("量级超出 {} 的刻度词表，按数字串输出", g.name);
        return render_digit_string(value);
    }

    if value.fract() == 0.0 {
        let n = value as i128;
        let cardinal = render_integer(n, g, opts.scale);
        if opts.ordinals {
            return ordinalize(n, cardinal, g);
        }
        return cardinal;
    }

    // 小数路径
    let (pre, post, precision) = split_decimal(value, opts.places);
    if post == 0 {
        return render_integer(pre, g, opts.scale);
    }

    let int_text = if pre == 0 && g.omit_zero_integer {
        String::new()
    } else {
        render_integer(pre, g, opts.scale)
    };
    let separator = match g.decimal_separator {
        DecimalSeparator::Word(w) => w,
        DecimalSeparator::ByIntegerPart(f) => f(pre),
    };
    let mode = opts.digits.unwrap_or(g.digit_mode);
    let frac_text = match mode {
        DigitPronunciation::DigitByDigit => digits_text(post, precision, g),
        DigitPronunciation::FractionalPart => match g.fractional_phrase {
            Some(f) => f(post, precision),
            None => digits_text(post, precision, g),
        },
    };

    if int_text.is_empty() {
        frac_text
    } else {
        format!("{} {} {}", int_text, separator, frac_text)
    }
}

/// 科学计数法：尾数和指数各走一遍基数路径，用语言的幂次短语连接。
/// 指数为 0 时退回普通路径
fn scientific(value: f64, g: &GrammarDescriptor, opts: &PronounceOptions) -> Option<String> {
    let formatted = format!("{:E}", value);
    let (mantissa_str, exponent_str) = formatted.split_once('E')?;
    let exponent: i32 = exponent_str.parse().ok()?;
    if exponent == 0 {
        return None;
    }
    let mantissa: f64 = mantissa_str.parse().ok()?;

    let mantissa_opts = PronounceOptions {
        scientific: false,
        ordinals: false,
        ..*opts
    };
    let exponent_opts = PronounceOptions {
        scientific: false,
        ..*opts
    };
    let mantissa_sign = if mantissa < 0.0 {
        format!("{} ", g.negative_word)
    } else {
        String::new()
    };
    let exponent_sign = if exponent < 0 {
        format!("{} ", g.negative_word)
    } else {
        String::new()
    };
    Some(format!(
        "{}{} {} {}{}",
        mantissa_sign,
        pronounce(mantissa.abs(), g, &mantissa_opts),
        g.power_phrase,
        exponent_sign,
        pronounce(exponent.unsigned_abs() as f64, g, &exponent_opts),
    ))
}

fn render_digit_string(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i128::MAX as f64 {
        format!("{}", value as i128)
    } else {
        format!("{}", value)
    }
}

/// 非负整数的基数渲染
pub(crate) fn render_integer(n: i128, g: &GrammarDescriptor, scale: Scale) -> String {
    if n == 0 {
        return g.unit_word(0).unwrap_or_default().to_string();
    }
    let width: u32 = match g.grouping(scale) {
        Grouping::Three => 3,
        Grouping::Six => 6,
    };
    let modulus = 10i128.pow(width);

    // 低位在前收集分组
    let mut groups: Vec<(usize, i128)> = Vec::new();
    let mut rest = n;
    let mut index = 0;
    while rest > 0 {
        groups.push((index, rest % modulus));
        rest /= modulus;
        index += 1;
    }

    // 高位在前渲染，组间连接由语法决定
    let mut result = String::new();
    let mut prev: Option<(usize, i128)> = None;
    for &(index, value) in groups.iter().rev() {
        if value == 0 {
            continue;
        }
        let piece = render_group(value, index, g, scale, width);
        match prev {
            None => result = piece,
            Some((prev_index, prev_value)) => {
                let lower = n % 10i128.pow(width * prev_index as u32);
                result.push_str((g.group_join)(lower, prev_value, prev_index));
                result.push_str(&piece);
            }
        }
        prev = Some((index, value));
    }
    result
}

/// 单个刻度组：倍数 + 刻度词，带省略和一致规则
fn render_group(
    value: i128,
    index: usize,
    g: &GrammarDescriptor,
    scale: Scale,
    width: u32,
) -> String {
    if index == 0 {
        return render_sub_group(value, g, scale, width);
    }
    let exponent = width * index as u32;
    let word = match g.scale_word(scale, exponent) {
        Some(w) => w,
        None => return format!("{}", value),
    };

    let scale_word = match g.scale_form {
        Some(f) => f(value, word),
        None => word.to_string(),
    };
    let elide = value == 1
        && match g.elide_one {
            ElideOne::Never => false,
            ElideOne::ThousandOnly => exponent == 3,
            ElideOne::AllScales => true,
        };
    if elide {
        return scale_word;
    }

    let mut multiplier = render_sub_group(value, g, scale, width);
    if let Some(f) = g.scale_multiplier_form {
        multiplier = f(value, multiplier);
    }
    format!("{}{}{}", multiplier, g.scale_junction, scale_word)
}

fn render_sub_group(value: i128, g: &GrammarDescriptor, scale: Scale, width: u32) -> String {
    if width == 6 {
        render_sub_million(value, g, scale)
    } else {
        sub_thousand(value as u16, g)
    }
}

/// 6 位组：组内复用千位词（"mil milhões" 式长刻度）
fn render_sub_million(value: i128, g: &GrammarDescriptor, scale: Scale) -> String {
    let thousands = value / 1000;
    let low = value % 1000;
    if thousands == 0 {
        return sub_thousand(low as u16, g);
    }

    let thousand_word = g.scale_word(scale, 3).unwrap_or_default();
    let elide = thousands == 1 && g.elide_one != ElideOne::Never;
    let head = if elide {
        thousand_word.to_string()
    } else {
        format!(
            "{}{}{}",
            sub_thousand(thousands as u16, g),
            g.scale_junction,
            thousand_word
        )
    };
    if low == 0 {
        return head;
    }
    let sep = (g.group_join)(low, thousands, 1);
    format!("{}{}{}", head, sep, sub_thousand(low as u16, g))
}

/// 0–999 的表驱动子渲染
fn sub_thousand(n: u16, g: &GrammarDescriptor) -> String {
    if n == 0 {
        return g.unit_word(0).unwrap_or_default().to_string();
    }
    let hundreds = n / 100;
    let remainder = n % 100;
    let mut out = String::new();

    if hundreds > 0 {
        match g.hundreds {
            HundredsForm::Table {
                words,
                exact_hundred,
            } => {
                if n == 100 && exact_hundred.is_some() {
                    out.push_str(exact_hundred.unwrap_or_default());
                } else if let Some((_, w)) = words.iter().find(|(v, _)| *v == hundreds * 100) {
                    out.push_str(w);
                }
            }
            HundredsForm::Multiplier {
                word,
                junction,
                elide_one,
                irregular,
            } => {
                if hundreds == 1 && elide_one {
                    out.push_str(word);
                } else {
                    let multiplier = irregular
                        .iter()
                        .find(|(v, _)| *v == hundreds)
                        .map(|(_, w)| *w)
                        .or_else(|| g.unit_word(hundreds))
                        .unwrap_or_default();
                    out.push_str(multiplier);
                    out.push_str(junction);
                    out.push_str(word);
                }
            }
        }
    }

    if remainder > 0 {
        if hundreds > 0 {
            out.push_str(g.hundred_junction);
        }
        if remainder <= 19 {
            out.push_str(g.unit_word(remainder).unwrap_or_default());
        } else {
            let tens = remainder / 10 * 10;
            let unit = remainder % 10;
            if unit == 0 {
                out.push_str(g.tens_word(tens).unwrap_or_default());
            } else {
                let unit_word = g.unit_word(unit).unwrap_or_default();
                match g.tens_join {
                    TensJoin::Space => {
                        out.push_str(g.tens_word(tens).unwrap_or_default());
                        out.push(' ');
                        out.push_str(unit_word);
                    }
                    TensJoin::Conjunction(junction) => {
                        out.push_str(g.tens_word(tens).unwrap_or_default());
                        out.push_str(junction);
                        out.push_str(unit_word);
                    }
                    TensJoin::UnitFirst(infix) => {
                        let unit_text = match g.tens_unit_form {
                            Some(f) => f(unit, unit_word),
                            None => unit_word.to_string(),
                        };
                        out.push_str(&unit_text);
                        out.push_str(infix);
                        out.push_str(g.tens_word(tens).unwrap_or_default());
                    }
                    TensJoin::Concat => {
                        out.push_str(g.tens_combining_word(tens).unwrap_or_default());
                        out.push_str(unit_word);
                    }
                }
            }
        }
    }

    out
}

/// 逐位读出小数位（前导零补齐到精度）
fn digits_text(post: i128, precision: usize, g: &GrammarDescriptor) -> String {
    let digits = format!("{:0>width$}", post, width = precision.max(1));
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| g.unit_word(d as u16).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 序数化：覆盖表优先，表外走语言的变换钩子
fn ordinalize(n: i128, cardinal: String, g: &GrammarDescriptor) -> String {
    let rule = match &g.ordinal {
        Some(rule) => rule,
        None => return cardinal,
    };
    if let Some((_, word)) = rule.table.iter().find(|(v, _)| *v == n) {
        return (*word).to_string();
    }
    match rule.transform {
        Some(f) => f(n, &cardinal),
        None => cardinal,
    }
}

/// 分数字面量 "n/d" 的读法：分母查表并复数化，表外用语言的兜底构成
pub(crate) fn render_fraction(
    numerator: i128,
    denominator: i128,
    g: &GrammarDescriptor,
    scale: Scale,
) -> String {
    let numerator_text = render_integer(numerator, g, scale);
    if let Some((word, _)) = g.fractions.iter().find(|(_, v)| *v == denominator) {
        let denominator_text = if numerator > 1 {
            match g.fraction_pluralize {
                Some(f) => f(word),
                None => (*word).to_string(),
            }
        } else {
            (*word).to_string()
        };
        return format!("{} {}", numerator_text, denominator_text);
    }
    if let Some(marker) = g.compound_fraction_marker {
        return format!(
            "{} {} {}",
            numerator_text,
            render_integer(denominator, g, scale),
            marker
        );
    }
    if let Some(over) = g.over_word {
        return format!(
            "{} {} {}",
            numerator_text,
            over,
            render_integer(denominator, g, scale)
        );
    }
    format!("{}/{}", numerator, denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{en::EN, fa::FA, hu::HU, pt::PT_BR, pt::PT_PT, sl::SL};

    fn say(value: f64, g: &GrammarDescriptor) -> String {
        pronounce(value, g, &PronounceOptions::default())
    }

    #[test]
    fn test_en_basic() {
        assert_eq!(say(0.0, &EN), "zero");
        assert_eq!(say(7.0, &EN), "seven");
        assert_eq!(say(15.0, &EN), "fifteen");
        assert_eq!(say(42.0, &EN), "forty two");
        assert_eq!(say(123.0, &EN), "one hundred and twenty three");
    }

    #[test]
    fn test_en_thousand_keeps_one() {
        assert_eq!(say(1000.0, &EN), "one thousand");
        assert_eq!(say(1001.0, &EN), "one thousand, one");
    }

    #[test]
    fn test_en_large_number() {
        assert_eq!(
            say(3840285766987249.0, &EN),
            "three quadrillion, eight hundred and forty trillion, two hundred and eighty \
             five billion, seven hundred and sixty six million, nine hundred and eighty \
             seven thousand, two hundred and forty nine"
        );
    }

    #[test]
    fn test_en_negative() {
        assert_eq!(say(-5.0, &EN), "negative five");
    }

    #[test]
    fn test_en_decimal_has_no_digits() {
        let text = say(0.5, &EN);
        assert_eq!(text, "zero point five");
        assert!(!text.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_en_decimal_padding() {
        assert_eq!(say(2.05, &EN), "two point zero five");
    }

    #[test]
    fn test_en_float_noise_rounds() {
        assert_eq!(say(1.239999999, &EN), "one point two four");
    }

    #[test]
    fn test_en_scales() {
        let short = PronounceOptions::default();
        let long = PronounceOptions {
            scale: Scale::Long,
            ..Default::default()
        };
        assert_eq!(pronounce(1_000_000.0, &EN, &short), "one million");
        assert_eq!(pronounce(1_000_000.0, &EN, &long), "one million");
        assert_eq!(pronounce(1e9, &EN, &short), "one billion");
        assert_eq!(pronounce(1e9, &EN, &long), "one milliard");
    }

    #[test]
    fn test_en_ordinals() {
        let opts = PronounceOptions {
            ordinals: true,
            ..Default::default()
        };
        assert_eq!(pronounce(1.0, &EN, &opts), "first");
        assert_eq!(pronounce(3.0, &EN, &opts), "third");
        assert_eq!(pronounce(20.0, &EN, &opts), "twentieth");
        assert_eq!(pronounce(23.0, &EN, &opts), "twenty third");
        assert_eq!(pronounce(1000.0, &EN, &opts), "one thousandth");
    }

    #[test]
    fn test_en_scientific() {
        let opts = PronounceOptions {
            scientific: true,
            ..Default::default()
        };
        assert_eq!(
            pronounce(2e6, &EN, &opts),
            "two times ten to the power of six"
        );
        assert_eq!(
            pronounce(1.5e-3, &EN, &opts),
            "one point five times ten to the power of negative three"
        );
    }

    #[test]
    fn test_en_infinity() {
        assert_eq!(say(f64::INFINITY, &EN), "infinity");
        assert_eq!(say(f64::NEG_INFINITY, &EN), "negative infinity");
        assert_eq!(say(f64::NAN, &EN), "not a number");
    }

    #[test]
    fn test_en_overflow_degrades_to_digits() {
        // 刻度词表之外按数字串输出
        let text = say(1e40, &EN);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pt_sub_thousand() {
        assert_eq!(say(0.0, &PT_BR), "zero");
        assert_eq!(say(21.0, &PT_BR), "vinte e um");
        assert_eq!(say(100.0, &PT_BR), "cem");
        assert_eq!(say(101.0, &PT_BR), "cento e um");
        assert_eq!(say(123.0, &PT_BR), "cento e vinte e três");
        assert_eq!(say(200.0, &PT_BR), "duzentos");
        assert_eq!(say(999.0, &PT_BR), "novecentos e noventa e nove");
    }

    #[test]
    fn test_pt_dialect_teens() {
        assert_eq!(say(16.0, &PT_BR), "dezesseis");
        assert_eq!(say(16.0, &PT_PT), "dezasseis");
        assert_eq!(say(17.0, &PT_PT), "dezassete");
        assert_eq!(say(19.0, &PT_PT), "dezanove");
    }

    #[test]
    fn test_pt_mil_elides_um() {
        let text = say(1000.0, &PT_BR);
        assert_eq!(text, "mil");
        assert!(!say(1000.0, &PT_BR).starts_with("um mil"));
        assert_eq!(say(1001.0, &PT_BR), "mil e um");
        assert_eq!(say(1100.0, &PT_BR), "mil e cem");
        assert_eq!(say(1542.0, &PT_BR), "mil quinhentos e quarenta e dois");
    }

    #[test]
    fn test_pt_scale_plurals() {
        assert_eq!(say(1_000_000.0, &PT_BR), "um milhão");
        assert_eq!(say(2_000_000.0, &PT_BR), "dois milhões");
        assert_eq!(say(2_300_000.0, &PT_BR), "dois milhões e trezentos mil");
    }

    #[test]
    fn test_pt_dialect_scales() {
        let short = PronounceOptions::default();
        assert_eq!(pronounce(1e9, &PT_BR, &short), "um bilhão");
        assert_eq!(pronounce(1e9, &PT_PT, &short), "um bilião");
        let long = PronounceOptions {
            scale: Scale::Long,
            ..Default::default()
        };
        // 长刻度没有 -iard 词，10^9 组内复用千位词
        assert_eq!(pronounce(1e9, &PT_PT, &long), "mil milhões");
        assert_eq!(pronounce(1e12, &PT_PT, &long), "um bilião");
    }

    #[test]
    fn test_pt_decimal() {
        assert_eq!(say(1.5, &PT_BR), "um vírgula cinco");
        assert_eq!(say(-5.0, &PT_BR), "menos cinco");
    }

    #[test]
    fn test_fa_cardinals() {
        assert_eq!(say(0.0, &FA), "صفر");
        assert_eq!(say(25.0, &FA), "بیست و پنج");
        assert_eq!(say(234.0, &FA), "دویست و سی و چهار");
        assert_eq!(say(1000.0, &FA), "هزار");
        assert_eq!(say(1234.0, &FA), "هزار و دویست و سی و چهار");
    }

    #[test]
    fn test_fa_half() {
        assert_eq!(say(0.5, &FA), "نیم");
        assert_eq!(say(2.5, &FA), "دو و نیم");
    }

    #[test]
    fn test_fa_fractional_part() {
        assert_eq!(say(0.25, &FA), "بیست و پنج صدم");
    }

    #[test]
    fn test_fa_ordinal() {
        let opts = PronounceOptions {
            ordinals: true,
            ..Default::default()
        };
        assert_eq!(pronounce(3.0, &FA, &opts), "سوم");
        assert_eq!(pronounce(5.0, &FA, &opts), "پنجم");
    }

    #[test]
    fn test_hu_concatenated() {
        assert_eq!(say(0.0, &HU), "nulla");
        assert_eq!(say(25.0, &HU), "huszonöt");
        assert_eq!(say(35.0, &HU), "harmincöt");
        assert_eq!(say(100.0, &HU), "száz");
        assert_eq!(say(123.0, &HU), "százhuszonhárom");
        assert_eq!(say(200.0, &HU), "kétszáz");
    }

    #[test]
    fn test_hu_group_hyphen() {
        assert_eq!(say(1500.0, &HU), "ezerötszáz");
        assert_eq!(say(2500.0, &HU), "kétezer-ötszáz");
        assert_eq!(say(1_000_000.0, &HU), "egymillió");
    }

    #[test]
    fn test_hu_decimal() {
        assert_eq!(say(5.2, &HU), "öt egész két tized");
        assert_eq!(say(-7.0, &HU), "mínusz hét");
    }

    #[test]
    fn test_hu_ordinals_vowel_harmony() {
        let opts = PronounceOptions {
            ordinals: true,
            ..Default::default()
        };
        assert_eq!(pronounce(2.0, &HU, &opts), "második");
        assert_eq!(pronounce(12.0, &HU, &opts), "tizenkettedik");
        assert_eq!(pronounce(20.0, &HU, &opts), "huszadik");
        assert_eq!(pronounce(25.0, &HU, &opts), "huszonötödik");
        assert_eq!(pronounce(100.0, &HU, &opts), "századik");
        assert_eq!(pronounce(1000.0, &HU, &opts), "ezredik");
        assert_eq!(pronounce(1_000_000.0, &HU, &opts), "egymilliomodik");
    }

    #[test]
    fn test_hu_beyond_scale_table() {
        let text = say(1e24, &HU);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sl_unit_first_composition() {
        assert_eq!(say(21.0, &SL), "enaindvajset");
        assert_eq!(say(22.0, &SL), "dvaindvajset");
        assert_eq!(say(55.0, &SL), "petinpetdeset");
        assert_eq!(say(100.0, &SL), "sto");
        assert_eq!(say(200.0, &SL), "dvesto");
        assert_eq!(say(123.0, &SL), "sto triindvajset");
    }

    #[test]
    fn test_sl_scale_agreement() {
        assert_eq!(say(1000.0, &SL), "tisoč");
        assert_eq!(say(2000.0, &SL), "dva tisoč");
        assert_eq!(say(1_000_000.0, &SL), "milijon");
        assert_eq!(say(2_000_000.0, &SL), "dva milijona");
        assert_eq!(say(3_000_000.0, &SL), "trije milijoni");
        assert_eq!(say(5_000_000.0, &SL), "pet milijonov");
    }

    #[test]
    fn test_sl_decimal_agreement() {
        assert_eq!(say(0.5, &SL), "nič celih pet");
        assert_eq!(say(1.5, &SL), "ena cela pet");
        assert_eq!(say(2.5, &SL), "dve celi pet");
        assert_eq!(say(3.5, &SL), "tri cele pet");
    }

    #[test]
    fn test_sl_ordinals() {
        let opts = PronounceOptions {
            ordinals: true,
            ..Default::default()
        };
        assert_eq!(pronounce(1.0, &SL, &opts), "prvi");
        assert_eq!(pronounce(21.0, &SL, &opts), "enaindvajseti");
        assert_eq!(pronounce(102.0, &SL, &opts), "stodrugi");
    }

    #[test]
    fn test_sl_scientific() {
        let opts = PronounceOptions {
            scientific: true,
            ..Default::default()
        };
        assert_eq!(pronounce(2e6, &SL, &opts), "dve krat deset na šest");
    }

    #[test]
    fn test_fraction_rendering() {
        assert_eq!(render_fraction(1, 2, &PT_BR, Scale::Short), "um meio");
        assert_eq!(render_fraction(2, 3, &PT_BR, Scale::Short), "dois terços");
        assert_eq!(render_fraction(3, 4, &PT_BR, Scale::Short), "três quartos");
        assert_eq!(render_fraction(5, 7, &PT_BR, Scale::Short), "cinco sétimos");
        assert_eq!(
            render_fraction(2, 13, &PT_BR, Scale::Short),
            "dois treze avos"
        );
        assert_eq!(render_fraction(0, 5, &PT_BR, Scale::Short), "zero quinto");
    }

    #[test]
    fn test_fraction_rendering_en() {
        assert_eq!(render_fraction(1, 2, &EN, Scale::Short), "one half");
        assert_eq!(render_fraction(3, 2, &EN, Scale::Short), "three halves");
        assert_eq!(
            render_fraction(1, 23, &EN, Scale::Short),
            "one over twenty three"
        );
    }
}
