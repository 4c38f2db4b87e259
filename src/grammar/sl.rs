//! 斯洛文尼亚语语法描述符
//!
//! 20–99 个位在前、中缀 "in"（enaindvajset），百位直接拼 sto（dvesto）。
//! 刻度词随倍数变格（milijon/milijona/milijoni/milijonov，-jarda 族按
//! 阴性变格），小数点词随整数部分变化（cela/celi/cele/celih）。
//! 序数连写成一个词

use super::{
    DecimalSeparator, DigitPronunciation, ElideOne, GrammarDescriptor, Grouping, HundredsForm,
    OrdinalRule, Scale, ScaleEntry, TensJoin,
};

const UNITS: &[(u16, &str)] = &[
    (0, "nič"),
    (1, "ena"),
    (2, "dve"),
    (3, "tri"),
    (4, "štiri"),
    (5, "pet"),
    (6, "šest"),
    (7, "sedem"),
    (8, "osem"),
    (9, "devet"),
    (10, "deset"),
    (11, "enajst"),
    (12, "dvanajst"),
    (13, "trinajst"),
    (14, "štirinajst"),
    (15, "petnajst"),
    (16, "šestnajst"),
    (17, "sedemnajst"),
    (18, "osemnajst"),
    (19, "devetnajst"),
];

const TENS: &[(u16, &str)] = &[
    (20, "dvajset"),
    (30, "trideset"),
    (40, "štirideset"),
    (50, "petdeset"),
    (60, "šestdeset"),
    (70, "sedemdeset"),
    (80, "osemdeset"),
    (90, "devetdeset"),
];

const SHORT_SCALE: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "tisoč" },
    ScaleEntry { exponent: 6, word: "milijon" },
    ScaleEntry { exponent: 9, word: "bilijon" },
    ScaleEntry { exponent: 12, word: "trilijon" },
    ScaleEntry { exponent: 15, word: "kvadrilijon" },
    ScaleEntry { exponent: 18, word: "kvintilijon" },
    ScaleEntry { exponent: 21, word: "sekstilijon" },
    ScaleEntry { exponent: 24, word: "septilijon" },
    ScaleEntry { exponent: 27, word: "oktilijon" },
    ScaleEntry { exponent: 30, word: "nonilijon" },
    ScaleEntry { exponent: 33, word: "decilijon" },
];

const LONG_SCALE: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "tisoč" },
    ScaleEntry { exponent: 6, word: "milijon" },
    ScaleEntry { exponent: 9, word: "milijarda" },
    ScaleEntry { exponent: 12, word: "bilijon" },
    ScaleEntry { exponent: 15, word: "bilijarda" },
    ScaleEntry { exponent: 18, word: "trilijon" },
    ScaleEntry { exponent: 21, word: "trilijarda" },
    ScaleEntry { exponent: 24, word: "kvadrilijon" },
    ScaleEntry { exponent: 27, word: "kvadrilijarda" },
    ScaleEntry { exponent: 30, word: "kvintilijon" },
    ScaleEntry { exponent: 33, word: "kvintilijarda" },
];

const FRACTIONS: &[(&str, i128)] = &[
    ("polovica", 2),
    ("tretjina", 3),
    ("četrtina", 4),
    ("petina", 5),
    ("šestina", 6),
    ("sedmina", 7),
    ("osmina", 8),
    ("devetina", 9),
    ("desetina", 10),
    ("enajstina", 11),
    ("dvanajstina", 12),
    ("trinajstina", 13),
    ("štirinajstina", 14),
    ("petnajstina", 15),
    ("šestnajstina", 16),
    ("sedemnajstina", 17),
    ("osemnajstina", 18),
    ("devetnajstina", 19),
    ("dvajsetina", 20),
];

const ORDINAL_TABLE: &[(i128, &str)] = &[
    (1, "prvi"),
    (2, "drugi"),
    (3, "tretji"),
    (4, "četrti"),
    (5, "peti"),
    (6, "šesti"),
    (7, "sedmi"),
    (8, "osmi"),
    (9, "deveti"),
    (10, "deseti"),
    (11, "enajsti"),
    (12, "dvanajsti"),
    (13, "trinajsti"),
    (14, "štirinajsti"),
    (15, "petnajsti"),
    (16, "šestnajsti"),
    (17, "sedemnajsti"),
    (18, "osemnajsti"),
    (19, "devetnajsti"),
    (20, "dvajseti"),
    (30, "trideseti"),
    (40, "štirideseti"),
    (50, "petdeseti"),
    (60, "šestdeseti"),
    (70, "sedemdeseti"),
    (80, "osemdeseti"),
    (90, "devetdeseti"),
    (100, "stoti"),
    (1_000, "tisoči"),
    (1_000_000, "milijonti"),
    (1_000_000_000, "bilijonti"),
];

const ORDINAL_LEXICON: &[(&str, i128)] = &[
    ("prvi", 1),
    ("drugi", 2),
    ("tretji", 3),
    ("četrti", 4),
    ("peti", 5),
    ("šesti", 6),
    ("sedmi", 7),
    ("osmi", 8),
    ("deveti", 9),
    ("deseti", 10),
    ("enajsti", 11),
    ("dvanajsti", 12),
    ("trinajsti", 13),
    ("štirinajsti", 14),
    ("petnajsti", 15),
    ("šestnajsti", 16),
    ("sedemnajsti", 17),
    ("osemnajsti", 18),
    ("devetnajsti", 19),
    ("dvajseti", 20),
    ("trideseti", 30),
    ("štirideseti", 40),
    ("petdeseti", 50),
    ("šestdeseti", 60),
    ("sedemdeseti", 70),
    ("osemdeseti", 80),
    ("devetdeseti", 90),
    ("stoti", 100),
    ("tisoči", 1_000),
    ("milijonti", 1_000_000),
];

/// "in" 组合里 2 用阳性形 dva
fn tens_unit_form(value: u16, word: &'static str) -> String {
    if value == 2 {
        "dva".to_string()
    } else {
        word.to_string()
    }
}

/// 刻度词随倍数变格；tisoč 不变
fn scale_form(count: i128, word: &'static str) -> String {
    if word == "tisoč" {
        return word.to_string();
    }
    let n = count % 100;
    if let Some(stem) = word.strip_suffix("jarda") {
        let suffix = match n {
            1 => "jarda",
            2 => "jardi",
            3 | 4 => "jarde",
            _ => "jard",
        };
        return format!("{}{}", stem, suffix);
    }
    let suffix = match n {
        1 => "",
        2 => "a",
        3 | 4 => "i",
        _ => "ov",
    };
    format!("{}{}", word, suffix)
}

/// 刻度倍数与名词的性一致：dve → dva，tri → trije
fn scale_multiplier_form(count: i128, rendered: String) -> String {
    match count % 100 {
        2 if rendered.ends_with("dve") => {
            let mut out = rendered;
            out.truncate(out.len() - "dve".len());
            out.push_str("dva");
            out
        }
        3 if rendered.ends_with("tri") => format!("{}je", rendered),
        _ => rendered,
    }
}

/// 序数连写：末两位换序数词，刻度词换序数刻度形，其余加 -i
fn ordinal_transform(n: i128, cardinal: &str) -> String {
    let rem = n % 100;
    if rem != 0 && n > 100 {
        if let Some((_, word)) = ORDINAL_TABLE.iter().find(|(v, _)| *v == rem) {
            let head = crate::pronounce::render_integer(n - rem, &SL, Scale::Short).replace(' ', "");
            return format!("{}{}", head, word);
        }
    }
    let compact = cardinal.replace(' ', "");
    if compact.ends_with("tisoč") {
        return format!("{}i", compact);
    }
    if let Some(pos) = compact.rfind("jard") {
        let tail = &compact[pos + "jard".len()..];
        if matches!(tail, "" | "a" | "i" | "e") {
            return format!("{}ti", &compact[..pos + "jard".len()]);
        }
    }
    if let Some(pos) = compact.rfind("jon") {
        let tail = &compact[pos + "jon".len()..];
        if matches!(tail, "" | "a" | "i" | "ov") {
            return format!("{}ti", &compact[..pos + "jon".len()]);
        }
    }
    if compact.ends_with("sto") {
        return format!("{}ti", compact);
    }
    format!("{}i", compact)
}

/// 小数点词随整数部分变化
fn decimal_separator(int_part: i128) -> &'static str {
    match (int_part.abs()) % 100 {
        1 => "cela",
        2 => "celi",
        3 | 4 => "cele",
        _ => "celih",
    }
}

fn group_join(_lower: i128, _value: i128, _index: usize) -> &'static str {
    " "
}

pub static SL: GrammarDescriptor = GrammarDescriptor {
    tags: &["sl"],
    name: "slovenian",
    units: UNITS,
    tens: TENS,
    tens_combining: &[],
    hundreds: HundredsForm::Multiplier {
        word: "sto",
        junction: "",
        elide_one: true,
        irregular: &[],
    },
    hundred_junction: " ",
    tens_join: TensJoin::UnitFirst("in"),
    tens_unit_form: Some(tens_unit_form),
    short_scale: SHORT_SCALE,
    long_scale: LONG_SCALE,
    long_grouping: Grouping::Three,
    scale_junction: " ",
    elide_one: ElideOne::AllScales,
    scale_form: Some(scale_form),
    scale_multiplier_form: Some(scale_multiplier_form),
    group_join,
    conjunctions: &[],
    decimal_words: &[],
    decimal_separator: DecimalSeparator::ByIntegerPart(decimal_separator),
    digit_mode: DigitPronunciation::DigitByDigit,
    fractional_phrase: None,
    omit_zero_integer: false,
    fractions: FRACTIONS,
    fraction_plural: None,
    fraction_pluralize: None,
    compound_fraction_marker: None,
    over_word: None,
    ordinal: Some(OrdinalRule {
        lexicon: ORDINAL_LEXICON,
        table: ORDINAL_TABLE,
        transform: Some(ordinal_transform),
        digit_suffixes: &[],
    }),
    negative_words: &["minus"],
    negative_word: "minus",
    infinity_word: "neskončno",
    nan_word: "ni število",
    power_phrase: "krat deset na",
    supports_scientific: true,
    aliases: &[],
    plural_normalize: None,
    supports_extraction: false,
};
