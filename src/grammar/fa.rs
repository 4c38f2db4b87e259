//! 波斯语语法描述符
//!
//! 组间、十位个位之间一律用 " و " 连接；正式体的十几拼写
//! （هفده/هجده/شانزده/پانزده）归一到会话体词表再查。
//! 小数按"小数位合成整数 + 分母词"的方式读出，0.5 单独说 "نیم"

use super::{
    DecimalSeparator, DigitPronunciation, ElideOne, GrammarDescriptor, Grouping, HundredsForm,
    OrdinalRule, Scale, ScaleEntry, TensJoin,
};

const UNITS: &[(u16, &str)] = &[
    (0, "صفر"),
    (1, "یک"),
    (2, "دو"),
    (3, "سه"),
    (4, "چهار"),
    (5, "پنج"),
    (6, "شش"),
    (7, "هفت"),
    (8, "هشت"),
    (9, "نه"),
    (10, "ده"),
    (11, "یازده"),
    (12, "دوازده"),
    (13, "سیزده"),
    (14, "چهارده"),
    (15, "پونزده"),
    (16, "شونزده"),
    (17, "هیفده"),
    (18, "هیجده"),
    (19, "نوزده"),
];

const TENS: &[(u16, &str)] = &[
    (20, "بیست"),
    (30, "سی"),
    (40, "چهل"),
    (50, "پنجاه"),
    (60, "شصت"),
    (70, "هفتاد"),
    (80, "هشتاد"),
    (90, "نود"),
];

const HUNDREDS: &[(u16, &str)] = &[
    (100, "صد"),
    (200, "دویست"),
    (300, "سیصد"),
    (400, "چهارصد"),
    (500, "پانصد"),
    (600, "ششصد"),
    (700, "هفتصد"),
    (800, "هشتصد"),
    (900, "نهصد"),
];

const SCALE: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "هزار" },
    ScaleEntry { exponent: 6, word: "میلیون" },
    ScaleEntry { exponent: 9, word: "میلیارد" },
    ScaleEntry { exponent: 12, word: "تریلیون" },
    ScaleEntry { exponent: 15, word: "تریلیارد" },
];

const FRACTIONS: &[(&str, i128)] = &[
    ("نیم", 2),
    ("دوم", 2),
    ("سوم", 3),
    ("چهارم", 4),
    ("پنجم", 5),
    ("ششم", 6),
    ("هفتم", 7),
    ("هشتم", 8),
    ("نهم", 9),
    ("دهم", 10),
    ("یازدهم", 11),
    ("دوازدهم", 12),
    ("سیزدهم", 13),
    ("چهاردهم", 14),
    ("پونزدهم", 15),
    ("شونزدهم", 16),
    ("هیفدهم", 17),
    ("هیجدهم", 18),
    ("نوزدهم", 19),
    ("بیستم", 20),
];

const ORDINAL_LEXICON: &[(&str, i128)] = &[
    ("اول", 1),
    ("یکم", 1),
    ("دوم", 2),
    ("سوم", 3),
    ("چهارم", 4),
    ("پنجم", 5),
    ("ششم", 6),
    ("هفتم", 7),
    ("هشتم", 8),
    ("نهم", 9),
    ("دهم", 10),
    ("یازدهم", 11),
    ("دوازدهم", 12),
    ("سیزدهم", 13),
    ("چهاردهم", 14),
    ("پونزدهم", 15),
    ("شونزدهم", 16),
    ("هیفدهم", 17),
    ("هیجدهم", 18),
    ("نوزدهم", 19),
    ("بیستم", 20),
];

/// 正式体拼写 → 会话体词表
const ALIASES: &[(&str, &str)] = &[
    ("هفده", "هیفده"),
    ("هجده", "هیجده"),
    ("شانزده", "شونزده"),
    ("پانزده", "پونزده"),
];

/// 基数 → 序数：加 "م"，词尾 "سه" 变 "سوم"
fn ordinal_transform(_n: i128, cardinal: &str) -> String {
    if let Some(stem) = cardinal.strip_suffix('ه') {
        if stem.ends_with('س') {
            return format!("{}وم", stem);
        }
    }
    format!("{}م", cardinal)
}

/// 小数短语：10^places 分之 post。恰为一半时说 "نیم"
fn fractional_phrase(post: i128, places: usize) -> String {
    if places >= 1 && places <= 18 && post * 2 == 10i128.pow(places as u32) {
        return "نیم".to_string();
    }
    const FRAC: [&str; 3] = ["", "ده", "صد"];
    const FRAC_BIG: [&str; 4] = ["", "هزار", "میلیونی", "میلیاردی"];
    let big = (places / 3).min(FRAC_BIG.len() - 1);
    let small = places % 3;
    let mut denom = String::from(FRAC[small]);
    if !FRAC_BIG[big].is_empty() {
        if !denom.is_empty() {
            denom.push(' ');
        }
        denom.push_str(FRAC_BIG[big]);
    }
    format!(
        "{} {}م",
        crate::pronounce::render_integer(post, &FA, Scale::Short),
        denom
    )
}

fn group_join(_lower: i128, _value: i128, _index: usize) -> &'static str {
    " و "
}

pub static FA: GrammarDescriptor = GrammarDescriptor {
    tags: &["fa"],
    name: "farsi",
    units: UNITS,
    tens: TENS,
    tens_combining: &[],
    hundreds: HundredsForm::Table {
        words: HUNDREDS,
        exact_hundred: None,
    },
    hundred_junction: " و ",
    tens_join: TensJoin::Conjunction(" و "),
    tens_unit_form: None,
    short_scale: SCALE,
    long_scale: SCALE,
    long_grouping: Grouping::Three,
    scale_junction: " ",
    elide_one: ElideOne::ThousandOnly,
    scale_form: None,
    scale_multiplier_form: None,
    group_join,
    conjunctions: &["و"],
    decimal_words: &[],
    decimal_separator: DecimalSeparator::Word("و"),
    digit_mode: DigitPronunciation::FractionalPart,
    fractional_phrase: Some(fractional_phrase),
    omit_zero_integer: true,
    fractions: FRACTIONS,
    fraction_plural: None,
    fraction_pluralize: None,
    compound_fraction_marker: None,
    over_word: None,
    ordinal: Some(OrdinalRule {
        lexicon: ORDINAL_LEXICON,
        table: &[],
        transform: Some(ordinal_transform),
        digit_suffixes: &["م"],
    }),
    negative_words: &["منفی"],
    negative_word: "منفی",
    infinity_word: "بینهایت",
    nan_word: "ناعدد",
    power_phrase: "ضرب در ده به توان",
    supports_scientific: true,
    aliases: ALIASES,
    plural_normalize: None,
    supports_extraction: true,
};
