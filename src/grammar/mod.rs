//! 语法描述符模块
//!
//! 每种语言一份静态描述符：数词词表、刻度词表、分数词表、序数词表、
//! 形态规则（复数、元音和谐、格一致）。提取引擎和生成引擎共用同一份
//! 描述符，进程内只读，可跨线程共享
//!
//! 形态的不规则变化以函数指针挂在描述符上，两个引擎的算法本身对所有
//! 语言保持一致

use serde::{Deserialize, Serialize};

pub mod en;
pub mod fa;
pub mod hu;
pub mod pt;
pub mod sl;

/// 大数命名刻度
///
/// 短刻度：百万之后每乘 1000 换一个新名字；
/// 长刻度：每乘 10^6 换一个新名字，中间有 -iard 一级。
/// 刻度与语言正交，同一语言可以按任一刻度输出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    Short,
    Long,
}

/// 小数部分的读法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitPronunciation {
    /// 逐位读出（"one point four two"）
    DigitByDigit,
    /// 小数位合成整数加分母词（"پنج دهم"、"két tized"）
    FractionalPart,
}

/// 刻度词表条目：10^exponent → 词
#[derive(Debug, Clone, Copy)]
pub struct ScaleEntry {
    pub exponent: u32,
    pub word: &'static str,
}

/// 刻度分组宽度
///
/// 长刻度语言若没有 -iard 中间词（葡语 10^9 = "mil milhões"），
/// 按 6 位分组并在组内复用千位词
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Three,
    Six,
}

/// 百位的构成方式
#[derive(Debug, Clone, Copy)]
pub enum HundredsForm {
    /// 100–900 直接查表（葡语 duzentos，波斯语 دویست）
    Table {
        words: &'static [(u16, &'static str)],
        /// 整百且恰为 100 时的特例词（葡语 "cem"，余数非零时用表中 "cento"）
        exact_hundred: Option<&'static str>,
    },
    /// 倍数词 + 百位词（"two hundred"、"kétszáz"、"dvesto"）
    Multiplier {
        word: &'static str,
        /// 倍数与百位词之间的连接（英语空格，匈语直接拼接）
        junction: &'static str,
        /// 1 作倍数时省略（"száz" 而非 "egyszáz"）
        elide_one: bool,
        /// 倍数的不规则形（匈语 2 → "két"）
        irregular: &'static [(u16, &'static str)],
    },
}

/// 20–99 中十位与个位的连接方式
#[derive(Debug, Clone, Copy)]
pub enum TensJoin {
    /// "twenty three"
    Space,
    /// 连词连接："vinte e um"、"بیست و پنج"
    Conjunction(&'static str),
    /// 个位在前加中缀："enaindvajset" = ena + in + dvajset
    UnitFirst(&'static str),
    /// 直接拼接："huszonöt"
    Concat,
}

/// 刻度位上 1 作倍数时的省略规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElideOne {
    /// 不省略（英语 "one thousand"）
    Never,
    /// 只省略千位（葡语 "mil"，波斯语 "هزار"）
    ThousandOnly,
    /// 所有刻度位都省略（斯洛文尼亚语 "milijon"）
    AllScales,
}

/// 生成端小数点词
#[derive(Clone, Copy)]
pub enum DecimalSeparator {
    Word(&'static str),
    /// 随整数部分变化（斯语 cela/celi/cele/celih）
    ByIntegerPart(fn(i128) -> &'static str),
}

/// 序数规则
#[derive(Clone, Copy)]
pub struct OrdinalRule {
    /// 序数词 → 数值（提取与 is_ordinal 用）
    pub lexicon: &'static [(&'static str, i128)],
    /// 数值 → 序数词（小数值的直接覆盖表）
    pub table: &'static [(i128, &'static str)],
    /// 表外数值：基数词的后缀/变干规则（元音和谐等）
    pub transform: Option<fn(i128, &str) -> String>,
    /// 数字序数后缀（英语 "5th"）
    pub digit_suffixes: &'static [&'static str],
}

/// 语言的语法描述符
///
/// 全部字段为静态数据或纯函数指针，构造后不再变更
pub struct GrammarDescriptor {
    /// 匹配的语言标签（小写，长标签在前：["pt-br", "pt"]）
    pub tags: &'static [&'static str],
    pub name: &'static str,

    // 词表
    /// 0–19（含十几）
    pub units: &'static [(u16, &'static str)],
    /// 20–90 整十
    pub tens: &'static [(u16, &'static str)],
    /// 整十的结合形（匈语 húsz → huszon），无结合形的语言为空
    pub tens_combining: &'static [(u16, &'static str)],
    pub hundreds: HundredsForm,
    /// 百位与余数之间的连接（" and " / " e " / " و " / ""）
    pub hundred_junction: &'static str,
    pub tens_join: TensJoin,
    /// UnitFirst 组合里个位词的变形（斯语 dve → dva）
    pub tens_unit_form: Option<fn(u16, &'static str) -> String>,

    // 刻度
    pub short_scale: &'static [ScaleEntry],
    pub long_scale: &'static [ScaleEntry],
    pub long_grouping: Grouping,
    /// 倍数与刻度词之间的连接（"two million" 空格，"kétezer" 拼接）
    pub scale_junction: &'static str,
    pub elide_one: ElideOne,
    /// 刻度词的数一致形（葡语 milhão→milhões，斯语 milijon→milijona/…）
    pub scale_form: Option<fn(i128, &'static str) -> String>,
    /// 刻度倍数串的变形（匈语 kettő→két，斯语 dve→dva）
    pub scale_multiplier_form: Option<fn(i128, String) -> String>,
    /// 相邻刻度组之间的连接：f(低位余值, 高位组值, 刻度序号)
    pub group_join: fn(i128, i128, usize) -> &'static str,

    // 小词
    pub conjunctions: &'static [&'static str],
    /// 解析端接受的小数点词
    pub decimal_words: &'static [&'static str],
    pub decimal_separator: DecimalSeparator,
    pub digit_mode: DigitPronunciation,
    /// FractionalPart 模式下的小数短语：f(小数位值, 位数)
    pub fractional_phrase: Option<fn(i128, usize) -> String>,
    /// 整数部分为 0 时省去整数（波斯语 "نیم" 单独成词）
    pub omit_zero_integer: bool,

    // 分数
    /// 分母词 → 分母值
    pub fractions: &'static [(&'static str, i128)],
    /// 分母词复数还原（"terços"→"terço"，"halves"→"half"）
    pub fraction_plural: Option<fn(&str) -> Option<String>>,
    /// 分母词复数化（生成端，"dois terços"）
    pub fraction_pluralize: Option<fn(&str) -> String>,
    /// 复合分数标记词（葡语 "onze avos"）
    pub compound_fraction_marker: Option<&'static str>,
    /// 表外分母的兜底构成（英语 "over"）
    pub over_word: Option<&'static str>,

    pub ordinal: Option<OrdinalRule>,

    // 符号与特殊值
    /// 解析端接受的负号词
    pub negative_words: &'static [&'static str],
    /// 生成端负号词
    pub negative_word: &'static str,
    pub infinity_word: &'static str,
    pub nan_word: &'static str,
    /// 科学计数法连接短语（"times ten to the power of"）
    pub power_phrase: &'static str,
    pub supports_scientific: bool,

    // 词形归一
    /// 异体拼写 → 词表拼写（波斯语正式体十几）
    pub aliases: &'static [(&'static str, &'static str)],
    /// 刻度词复数还原（"billions"→"billion"，"milhões"→"milhão"）
    pub plural_normalize: Option<fn(&str) -> Option<String>>,

    /// 复合正写法语言（匈、斯）不提供提取
    pub supports_extraction: bool,
}

/// 词表查询结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordKind {
    /// 0–9
    Unit(i128),
    /// 10–19
    Teen(i128),
    /// 20–90 整十
    Ten(i128),
    /// 直接查表的百位值（100–900）
    Hundred(i128),
    /// 百位倍数词（"hundred"）
    HundredMultiplier,
    /// 刻度词，值为 10 的指数
    ScaleWord(u32),
    /// 分母词，值为分母
    Fraction(i128),
    /// 序数词，值为对应基数
    Ordinal(i128),
    Conjunction,
    DecimalPoint,
    Negative,
    Unknown,
}

impl GrammarDescriptor {
    pub fn scale_table(&self, scale: Scale) -> &'static [ScaleEntry] {
        match scale {
            Scale::Short => self.short_scale,
            Scale::Long => self.long_scale,
        }
    }

    pub fn grouping(&self, scale: Scale) -> Grouping {
        match scale {
            Scale::Short => Grouping::Three,
            Scale::Long => self.long_grouping,
        }
    }

    /// 所选刻度下可命名的最大量级指数（组宽已计入）
    pub fn max_exponent(&self, scale: Scale) -> u32 {
        let width = match self.grouping(scale) {
            Grouping::Three => 3,
            Grouping::Six => 6,
        };
        self.scale_table(scale)
            .iter()
            .map(|e| e.exponent)
            .max()
            .unwrap_or(0)
            + width
    }

    pub fn unit_word(&self, value: u16) -> Option<&'static str> {
        self.units.iter().find(|(v, _)| *v == value).map(|(_, w)| *w)
    }

    pub fn tens_word(&self, value: u16) -> Option<&'static str> {
        self.tens.iter().find(|(v, _)| *v == value).map(|(_, w)| *w)
    }

    /// 整十的结合形，没有就用独立形
    pub fn tens_combining_word(&self, value: u16) -> Option<&'static str> {
        self.tens_combining
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, w)| *w)
            .or_else(|| self.tens_word(value))
    }

    pub fn scale_word(&self, scale: Scale, exponent: u32) -> Option<&'static str> {
        self.scale_table(scale)
            .iter()
            .find(|e| e.exponent == exponent)
            .map(|e| e.word)
    }

    /// 异体拼写归一 + 小写
    pub fn normalize(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        for (alias, canonical) in self.aliases {
            if lower == *alias {
                return (*canonical).to_string();
            }
        }
        lower
    }

    /// 查询一个已归一的词在所选刻度下的类别
    pub fn classify(&self, word: &str, scale: Scale, ordinals: bool) -> WordKind {
        if ordinals {
            if let Some(rule) = &self.ordinal {
                if let Some((_, v)) = rule.lexicon.iter().find(|(w, _)| *w == word) {
                    return WordKind::Ordinal(*v);
                }
            }
        }

        if let Some((v, _)) = self.units.iter().find(|(_, w)| *w == word) {
            return match v {
                0..=9 => WordKind::Unit(*v as i128),
                _ => WordKind::Teen(*v as i128),
            };
        }
        if let Some((v, _)) = self.tens.iter().find(|(_, w)| *w == word) {
            return WordKind::Ten(*v as i128);
        }

        match &self.hundreds {
            HundredsForm::Table { words, exact_hundred } => {
                if let Some(eh) = exact_hundred {
                    if word == *eh {
                        return WordKind::Hundred(100);
                    }
                }
                if let Some((v, _)) = words.iter().find(|(_, w)| *w == word) {
                    return WordKind::Hundred(*v as i128);
                }
            }
            HundredsForm::Multiplier { word: hw, .. } => {
                if word == *hw {
                    return WordKind::HundredMultiplier;
                }
            }
        }

        if let Some(entry) = self.scale_table(scale).iter().find(|e| e.word == word) {
            return WordKind::ScaleWord(entry.exponent);
        }

        if !ordinals {
            if let Some((_, d)) = self.fractions.iter().find(|(w, _)| *w == word) {
                return WordKind::Fraction(*d);
            }
        }

        if self.conjunctions.contains(&word) {
            return WordKind::Conjunction;
        }
        if self.decimal_words.contains(&word) {
            return WordKind::DecimalPoint;
        }
        if self.negative_words.contains(&word) {
            return WordKind::Negative;
        }

        WordKind::Unknown
    }

    /// classify 的宽松版：原词查不到时做复数还原再查
    pub fn classify_normalized(&self, raw: &str, scale: Scale, ordinals: bool) -> WordKind {
        let word = self.normalize(raw);
        let kind = self.classify(&word, scale, ordinals);
        if kind != WordKind::Unknown {
            return kind;
        }
        if let Some(normalize) = self.plural_normalize {
            if let Some(singular) = normalize(&word) {
                return self.classify(&singular, scale, ordinals);
            }
        }
        if let Some(normalize) = self.fraction_plural {
            if let Some(singular) = normalize(&word) {
                if !ordinals {
                    if let Some((_, d)) =
                        self.fractions.iter().find(|(w, _)| *w == singular)
                    {
                        return WordKind::Fraction(*d);
                    }
                }
            }
        }
        WordKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_tables_monotonic() {
        // 短刻度每级 ×1000
        for g in [&en::EN, &pt::PT_BR, &pt::PT_PT, &fa::FA, &hu::HU, &sl::SL] {
            for pair in g.short_scale.windows(2) {
                assert_eq!(
                    pair[1].exponent,
                    pair[0].exponent + 3,
                    "{} short scale gap",
                    g.name
                );
            }
        }
    }

    #[test]
    fn test_long_scale_named_steps_double() {
        // 长刻度主名每级 ×10^6（-iard 中间词不计）
        let named: Vec<u32> = en::EN
            .long_scale
            .iter()
            .filter(|e| !e.word.ends_with("iard"))
            .map(|e| e.exponent)
            .filter(|e| *e >= 6)
            .collect();
        for pair in named.windows(2) {
            assert_eq!(pair[1], pair[0] + 6);
        }
    }

    #[test]
    fn test_classify_en() {
        let g = &en::EN;
        assert_eq!(g.classify("five", Scale::Short, false), WordKind::Unit(5));
        assert_eq!(g.classify("fifteen", Scale::Short, false), WordKind::Teen(15));
        assert_eq!(g.classify("fifty", Scale::Short, false), WordKind::Ten(50));
        assert_eq!(
            g.classify("hundred", Scale::Short, false),
            WordKind::HundredMultiplier
        );
        assert_eq!(
            g.classify("million", Scale::Short, false),
            WordKind::ScaleWord(6)
        );
        assert_eq!(g.classify("and", Scale::Short, false), WordKind::Conjunction);
        assert_eq!(g.classify("point", Scale::Short, false), WordKind::DecimalPoint);
        assert_eq!(g.classify("banana", Scale::Short, false), WordKind::Unknown);
    }

    #[test]
    fn test_classify_plural_scale_word() {
        let g = &en::EN;
        assert_eq!(
            g.classify_normalized("billions", Scale::Short, false),
            WordKind::ScaleWord(9)
        );
    }

    #[test]
    fn test_classify_dialect_tables() {
        assert_eq!(
            pt::PT_BR.classify("dezesseis", Scale::Short, false),
            WordKind::Teen(16)
        );
        assert_eq!(
            pt::PT_PT.classify("dezasseis", Scale::Short, false),
            WordKind::Teen(16)
        );
        assert_eq!(
            pt::PT_PT.classify("dezesseis", Scale::Short, false),
            WordKind::Unknown
        );
    }

    #[test]
    fn test_fa_formal_alias_normalization() {
        let g = &fa::FA;
        // 正式体拼写归一到会话体词表
        assert_eq!(
            g.classify_normalized("هفده", Scale::Short, false),
            WordKind::Teen(17)
        );
    }
}
