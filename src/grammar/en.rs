//! 英语语法描述符
//!
//! 短刻度与长刻度皆备；十位个位之间空格连接，百位与余数之间用 "and"，
//! 刻度组之间用逗号（"one million, two hundred and three"）

use super::{
    DecimalSeparator, DigitPronunciation, ElideOne, GrammarDescriptor, Grouping, HundredsForm,
    OrdinalRule, ScaleEntry, TensJoin,
};

const UNITS: &[(u16, &str)] = &[
    (0, "zero"),
    (1, "one"),
    (2, "two"),
    (3, "three"),
    (4, "four"),
    (5, "five"),
    (6, "six"),
    (7, "seven"),
    (8, "eight"),
    (9, "nine"),
    (10, "ten"),
    (11, "eleven"),
    (12, "twelve"),
    (13, "thirteen"),
    (14, "fourteen"),
    (15, "fifteen"),
    (16, "sixteen"),
    (17, "seventeen"),
    (18, "eighteen"),
    (19, "nineteen"),
];

const TENS: &[(u16, &str)] = &[
    (20, "twenty"),
    (30, "thirty"),
    (40, "forty"),
    (50, "fifty"),
    (60, "sixty"),
    (70, "seventy"),
    (80, "eighty"),
    (90, "ninety"),
];

const SHORT_SCALE: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "thousand" },
    ScaleEntry { exponent: 6, word: "million" },
    ScaleEntry { exponent: 9, word: "billion" },
    ScaleEntry { exponent: 12, word: "trillion" },
    ScaleEntry { exponent: 15, word: "quadrillion" },
    ScaleEntry { exponent: 18, word: "quintillion" },
    ScaleEntry { exponent: 21, word: "sextillion" },
    ScaleEntry { exponent: 24, word: "septillion" },
    ScaleEntry { exponent: 27, word: "octillion" },
    ScaleEntry { exponent: 30, word: "nonillion" },
    ScaleEntry { exponent: 33, word: "decillion" },
];

const LONG_SCALE: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "thousand" },
    ScaleEntry { exponent: 6, word: "million" },
    ScaleEntry { exponent: 9, word: "milliard" },
    ScaleEntry { exponent: 12, word: "billion" },
    ScaleEntry { exponent: 15, word: "billiard" },
    ScaleEntry { exponent: 18, word: "trillion" },
    ScaleEntry { exponent: 21, word: "trilliard" },
    ScaleEntry { exponent: 24, word: "quadrillion" },
    ScaleEntry { exponent: 27, word: "quadrilliard" },
    ScaleEntry { exponent: 30, word: "quintillion" },
    ScaleEntry { exponent: 33, word: "quintilliard" },
];

const FRACTIONS: &[(&str, i128)] = &[
    ("whole", 1),
    ("half", 2),
    ("halve", 2),
    ("third", 3),
    ("quarter", 4),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
    ("eleventh", 11),
    ("twelfth", 12),
    ("thirteenth", 13),
    ("fourteenth", 14),
    ("fifteenth", 15),
    ("sixteenth", 16),
    ("seventeenth", 17),
    ("eighteenth", 18),
    ("nineteenth", 19),
    ("twentieth", 20),
    ("hundredth", 100),
    ("thousandth", 1_000),
    ("millionth", 1_000_000),
    ("billionth", 1_000_000_000),
];

const ORDINAL_LEXICON: &[(&str, i128)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
    ("eleventh", 11),
    ("twelfth", 12),
    ("thirteenth", 13),
    ("fourteenth", 14),
    ("fifteenth", 15),
    ("sixteenth", 16),
    ("seventeenth", 17),
    ("eighteenth", 18),
    ("nineteenth", 19),
    ("twentieth", 20),
    ("thirtieth", 30),
    ("fortieth", 40),
    ("fiftieth", 50),
    ("sixtieth", 60),
    ("seventieth", 70),
    ("eightieth", 80),
    ("ninetieth", 90),
    ("hundredth", 100),
    ("thousandth", 1_000),
    ("millionth", 1_000_000),
    ("billionth", 1_000_000_000),
];

/// 基数 → 序数：末词查不规则表，-y 结尾换 -ieth，其余加 -th
fn ordinal_transform(_n: i128, cardinal: &str) -> String {
    const IRREGULAR: &[(&str, &str)] = &[
        ("one", "first"),
        ("two", "second"),
        ("three", "third"),
        ("five", "fifth"),
        ("eight", "eighth"),
        ("nine", "ninth"),
        ("twelve", "twelfth"),
    ];
    let (head, last) = match cardinal.rfind(' ') {
        Some(i) => (&cardinal[..i + 1], &cardinal[i + 1..]),
        None => ("", cardinal),
    };
    let transformed = if let Some((_, ord)) = IRREGULAR.iter().find(|(w, _)| *w == last) {
        (*ord).to_string()
    } else if let Some(stem) = last.strip_suffix('y') {
        format!("{}ieth", stem)
    } else {
        format!("{}th", last)
    };
    format!("{}{}", head, transformed)
}

fn strip_plural(word: &str) -> Option<String> {
    word.strip_suffix('s').map(str::to_string)
}

fn fraction_singular(word: &str) -> Option<String> {
    if word == "halves" {
        return Some("half".to_string());
    }
    word.strip_suffix('s').map(str::to_string)
}

fn fraction_pluralize(word: &str) -> String {
    if word == "half" {
        "halves".to_string()
    } else {
        format!("{}s", word)
    }
}

fn group_join(_lower: i128, _value: i128, _index: usize) -> &'static str {
    ", "
}

pub static EN: GrammarDescriptor = GrammarDescriptor {
    tags: &["en"],
    name: "english",
    units: UNITS,
    tens: TENS,
    tens_combining: &[],
    hundreds: HundredsForm::Multiplier {
        word: "hundred",
        junction: " ",
        elide_one: false,
        irregular: &[],
    },
    hundred_junction: " and ",
    tens_join: TensJoin::Space,
    tens_unit_form: None,
    short_scale: SHORT_SCALE,
    long_scale: LONG_SCALE,
    long_grouping: Grouping::Three,
    scale_junction: " ",
    elide_one: ElideOne::Never,
    scale_form: None,
    scale_multiplier_form: None,
    group_join,
    conjunctions: &["and", "a"],
    decimal_words: &["point"],
    decimal_separator: DecimalSeparator::Word("point"),
    digit_mode: DigitPronunciation::DigitByDigit,
    fractional_phrase: None,
    omit_zero_integer: false,
    fractions: FRACTIONS,
    fraction_plural: Some(fraction_singular),
    fraction_pluralize: Some(fraction_pluralize),
    compound_fraction_marker: None,
    over_word: Some("over"),
    ordinal: Some(OrdinalRule {
        lexicon: ORDINAL_LEXICON,
        table: &[],
        transform: Some(ordinal_transform),
        digit_suffixes: &["st", "nd", "rd", "th"],
    }),
    negative_words: &["minus", "negative"],
    negative_word: "negative",
    infinity_word: "infinity",
    nan_word: "not a number",
    power_phrase: "times ten to the power of",
    supports_scientific: true,
    aliases: &[],
    plural_normalize: Some(strip_plural),
    supports_extraction: true,
};
