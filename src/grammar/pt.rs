//! 葡萄牙语语法描述符（巴西体 / 欧洲体）
//!
//! 两个方言体共用大部分词表，区别在十几的拼写（dezesseis/dezasseis）和
//! 大数词族（bilhão/bilião）。长刻度没有 -iard 中间词，10^9 说成
//! "mil milhões"，按 6 位分组生成

use super::{
    DecimalSeparator, DigitPronunciation, ElideOne, GrammarDescriptor, Grouping, HundredsForm,
    ScaleEntry, TensJoin,
};

const UNITS_BR: &[(u16, &str)] = &[
    (0, "zero"),
    (1, "um"),
    (2, "dois"),
    (3, "três"),
    (4, "quatro"),
    (5, "cinco"),
    (6, "seis"),
    (7, "sete"),
    (8, "oito"),
    (9, "nove"),
    (10, "dez"),
    (11, "onze"),
    (12, "doze"),
    (13, "treze"),
    (14, "catorze"),
    (15, "quinze"),
    (16, "dezesseis"),
    (17, "dezessete"),
    (18, "dezoito"),
    (19, "dezenove"),
];

const UNITS_PT: &[(u16, &str)] = &[
    (0, "zero"),
    (1, "um"),
    (2, "dois"),
    (3, "três"),
    (4, "quatro"),
    (5, "cinco"),
    (6, "seis"),
    (7, "sete"),
    (8, "oito"),
    (9, "nove"),
    (10, "dez"),
    (11, "onze"),
    (12, "doze"),
    (13, "treze"),
    (14, "catorze"),
    (15, "quinze"),
    (16, "dezasseis"),
    (17, "dezassete"),
    (18, "dezoito"),
    (19, "dezanove"),
];

const TENS: &[(u16, &str)] = &[
    (20, "vinte"),
    (30, "trinta"),
    (40, "quarenta"),
    (50, "cinquenta"),
    (60, "sessenta"),
    (70, "setenta"),
    (80, "oitenta"),
    (90, "noventa"),
];

const HUNDREDS: &[(u16, &str)] = &[
    (100, "cento"),
    (200, "duzentos"),
    (300, "trezentos"),
    (400, "quatrocentos"),
    (500, "quinhentos"),
    (600, "seiscentos"),
    (700, "setecentos"),
    (800, "oitocentos"),
    (900, "novecentos"),
];

const SHORT_SCALE_BR: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "mil" },
    ScaleEntry { exponent: 6, word: "milhão" },
    ScaleEntry { exponent: 9, word: "bilhão" },
    ScaleEntry { exponent: 12, word: "trilhão" },
    ScaleEntry { exponent: 15, word: "quatrilhão" },
    ScaleEntry { exponent: 18, word: "quintilhão" },
];

const SHORT_SCALE_PT: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "mil" },
    ScaleEntry { exponent: 6, word: "milhão" },
    ScaleEntry { exponent: 9, word: "bilião" },
    ScaleEntry { exponent: 12, word: "trilião" },
    ScaleEntry { exponent: 15, word: "quatrilião" },
    ScaleEntry { exponent: 18, word: "quintilião" },
];

const LONG_SCALE_BR: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "mil" },
    ScaleEntry { exponent: 6, word: "milhão" },
    ScaleEntry { exponent: 12, word: "bilhão" },
    ScaleEntry { exponent: 18, word: "trilhão" },
    ScaleEntry { exponent: 24, word: "quatrilhão" },
];

const LONG_SCALE_PT: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "mil" },
    ScaleEntry { exponent: 6, word: "milhão" },
    ScaleEntry { exponent: 12, word: "bilião" },
    ScaleEntry { exponent: 18, word: "trilião" },
    ScaleEntry { exponent: 24, word: "quatrilião" },
];

const FRACTIONS: &[(&str, i128)] = &[
    ("meio", 2),
    ("meia", 2),
    ("metade", 2),
    ("terço", 3),
    ("quarto", 4),
    ("quinto", 5),
    ("sexto", 6),
    ("sétimo", 7),
    ("oitavo", 8),
    ("nono", 9),
    ("décimo", 10),
    ("vigésimo", 20),
    ("trigésimo", 30),
    ("quadragésimo", 40),
    ("quinquagésimo", 50),
    ("centésimo", 100),
    ("milésimo", 1_000),
    ("milionésimo", 1_000_000),
];

/// 刻度词的复数一致："dois milhões"，"mil" 不变
fn scale_form(count: i128, word: &'static str) -> String {
    if count > 1 {
        if let Some(stem) = word.strip_suffix("ão") {
            return format!("{}ões", stem);
        }
    }
    word.to_string()
}

/// 连词 "e" 只出现在收尾的小数段之前："mil e um"、"mil e cem"，
/// 但 "mil quinhentos e quarenta e dois"
fn group_join(lower: i128, _value: i128, _index: usize) -> &'static str {
    if lower > 0 && (lower < 100 || lower % 100 == 0) {
        " e "
    } else {
        " "
    }
}

fn plural_normalize(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ões") {
        return Some(format!("{}ão", stem));
    }
    word.strip_suffix('s').map(str::to_string)
}

fn fraction_singular(word: &str) -> Option<String> {
    word.strip_suffix('s').map(str::to_string)
}

fn fraction_pluralize(word: &str) -> String {
    format!("{}s", word)
}

macro_rules! pt_descriptor {
    ($tags:expr, $name:expr, $units:expr, $short:expr, $long:expr) => {
        GrammarDescriptor {
            tags: $tags,
            name: $name,
            units: $units,
            tens: TENS,
            tens_combining: &[],
            hundreds: HundredsForm::Table {
                words: HUNDREDS,
                exact_hundred: Some("cem"),
            },
            hundred_junction: " e ",
            tens_join: TensJoin::Conjunction(" e "),
            tens_unit_form: None,
            short_scale: $short,
            long_scale: $long,
            long_grouping: Grouping::Six,
            scale_junction: " ",
            elide_one: ElideOne::ThousandOnly,
            scale_form: Some(scale_form),
            scale_multiplier_form: None,
            group_join,
            conjunctions: &["e"],
            decimal_words: &["vírgula", "ponto"],
            decimal_separator: DecimalSeparator::Word("vírgula"),
            digit_mode: DigitPronunciation::DigitByDigit,
            fractional_phrase: None,
            omit_zero_integer: false,
            fractions: FRACTIONS,
            fraction_plural: Some(fraction_singular),
            fraction_pluralize: Some(fraction_pluralize),
            compound_fraction_marker: Some("avos"),
            over_word: None,
            ordinal: None,
            negative_words: &["menos"],
            negative_word: "menos",
            infinity_word: "infinito",
            nan_word: "não é um número",
            power_phrase: "vezes dez elevado a",
            supports_scientific: true,
            aliases: &[("uma", "um"), ("duas", "dois")],
            plural_normalize: Some(plural_normalize),
            supports_extraction: true,
        }
    };
}

/// 巴西体，裸 "pt" 标签的默认方言
pub static PT_BR: GrammarDescriptor =
    pt_descriptor!(&["pt-br", "pt"], "portuguese-br", UNITS_BR, SHORT_SCALE_BR, LONG_SCALE_BR);

/// 欧洲体
pub static PT_PT: GrammarDescriptor =
    pt_descriptor!(&["pt-pt"], "portuguese-pt", UNITS_PT, SHORT_SCALE_PT, LONG_SCALE_PT);
