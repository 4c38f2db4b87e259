//! 匈牙利语语法描述符
//!
//! 两千以下连写成一个词，两千以上刻度组之间以连字符分隔
//! （"kétezer-ötszáz"）。倍数位置上 kettő 变 két。序数后缀按元音和谐
//! 选 -adik/-edik，千和百万的倍数有专门的序数刻度形

use super::{
    DecimalSeparator, DigitPronunciation, ElideOne, GrammarDescriptor, Grouping, HundredsForm,
    OrdinalRule, Scale, ScaleEntry, TensJoin,
};

const UNITS: &[(u16, &str)] = &[
    (0, "nulla"),
    (1, "egy"),
    (2, "kettő"),
    (3, "három"),
    (4, "négy"),
    (5, "öt"),
    (6, "hat"),
    (7, "hét"),
    (8, "nyolc"),
    (9, "kilenc"),
    (10, "tíz"),
    (11, "tizenegy"),
    (12, "tizenkettő"),
    (13, "tizenhárom"),
    (14, "tizennégy"),
    (15, "tizenöt"),
    (16, "tizenhat"),
    (17, "tizenhét"),
    (18, "tizennyolc"),
    (19, "tizenkilenc"),
];

const TENS: &[(u16, &str)] = &[
    (20, "húsz"),
    (30, "harminc"),
    (40, "negyven"),
    (50, "ötven"),
    (60, "hatvan"),
    (70, "hetven"),
    (80, "nyolcvan"),
    (90, "kilencven"),
];

/// húsz 后面跟个位时用结合形 huszon
const TENS_COMBINING: &[(u16, &str)] = &[(20, "huszon")];

// 匈语的大数命名本身就是带 -árd 中间级的长刻度，短长刻度参数不改变词表
const SCALE: &[ScaleEntry] = &[
    ScaleEntry { exponent: 3, word: "ezer" },
    ScaleEntry { exponent: 6, word: "millió" },
    ScaleEntry { exponent: 9, word: "milliárd" },
    ScaleEntry { exponent: 12, word: "billió" },
    ScaleEntry { exponent: 15, word: "billiárd" },
    ScaleEntry { exponent: 18, word: "trillió" },
    ScaleEntry { exponent: 21, word: "trilliárd" },
];

const FRACTIONS: &[(&str, i128)] = &[
    ("fél", 2),
    ("harmad", 3),
    ("negyed", 4),
    ("ötöd", 5),
    ("hatod", 6),
    ("heted", 7),
    ("nyolcad", 8),
    ("kilenced", 9),
    ("tized", 10),
    ("tizenegyed", 11),
    ("tizenketted", 12),
    ("tizenharmad", 13),
    ("tizennegyed", 14),
    ("tizenötöd", 15),
    ("tizenhatod", 16),
    ("tizenheted", 17),
    ("tizennyolcad", 18),
    ("tizenkilenced", 19),
    ("huszad", 20),
];

const ORDINALS: [&str; 11] = [
    "nulladik",
    "első",
    "második",
    "harmadik",
    "negyedik",
    "ötödik",
    "hatodik",
    "hetedik",
    "nyolcadik",
    "kilencedik",
    "tizedik",
];

const ORDINAL_TABLE: &[(i128, &str)] = &[
    (0, "nulladik"),
    (1, "első"),
    (2, "második"),
    (3, "harmadik"),
    (4, "negyedik"),
    (5, "ötödik"),
    (6, "hatodik"),
    (7, "hetedik"),
    (8, "nyolcadik"),
    (9, "kilencedik"),
    (10, "tizedik"),
];

const ORDINAL_LEXICON: &[(&str, i128)] = &[
    ("nulladik", 0),
    ("első", 1),
    ("második", 2),
    ("harmadik", 3),
    ("negyedik", 4),
    ("ötödik", 5),
    ("hatodik", 6),
    ("hetedik", 7),
    ("nyolcadik", 8),
    ("kilencedik", 9),
    ("tizedik", 10),
];

/// 词的元音类：0 低、1 高、2 混合
fn vowel_class(word: &str) -> u8 {
    let high = word.chars().filter(|c| "eéiíöőüű".contains(*c)).count();
    let low = word.chars().filter(|c| "aáoóuú".contains(*c)).count();
    if high != 0 && low != 0 {
        2
    } else if high == 0 {
        0
    } else {
        1
    }
}

/// 11 以上的序数：千/百万倍数换专门刻度形，末位数词换序数词，
/// 其余按元音和谐加 -adik/-edik
fn ordinal_transform(n: i128, cardinal: &str) -> String {
    let root = if cardinal == "húsz" {
        "husz".to_string()
    } else {
        cardinal.to_string()
    };
    let last_digit = (n % 10) as usize;

    if n % 1_000_000 == 0 {
        return root.replace("millió", "milliomodik");
    }
    if n % 1000 == 0 {
        return root.replace("ezer", "ezredik");
    }
    if last_digit == 1 {
        return format!("{}edik", root);
    }
    if root.ends_with('ő') {
        let stem: String = {
            let count = root.chars().count();
            root.chars().take(count - 1).collect()
        };
        return format!("{}edik", stem);
    }
    if last_digit != 0 {
        if let Some(word) = HU.unit_word(last_digit as u16) {
            if let Some(pos) = root.rfind(word) {
                let mut out = String::with_capacity(root.len() + 8);
                out.push_str(&root[..pos]);
                out.push_str(ORDINALS[last_digit]);
                out.push_str(&root[pos + word.len()..]);
                return out;
            }
        }
    }
    let suffix = if vowel_class(&root) == 1 { "edik" } else { "adik" };
    format!("{}{}", root, suffix)
}

/// 小数短语："egész" 之后小数位合成整数加位值后缀（tized/század/…）
fn fractional_phrase(post: i128, places: usize) -> String {
    const SUFFIXES: [&str; 5] = ["tized", "század", "ezred", "tízezred", "százezred"];
    let number =
        crate::pronounce::render_integer(post, &HU, Scale::Long).replace("kettő", "két");
    if places >= 1 && places <= SUFFIXES.len() {
        format!("{} {}", number, SUFFIXES[places - 1])
    } else {
        number
    }
}

/// 倍数位置上的 kettő → két（"tizenkettő" 同样变 "tizenkét"）
fn scale_multiplier_form(_count: i128, rendered: String) -> String {
    rendered.replace("kettő", "két")
}

/// 倍数大于 1 的刻度组后面跟连字符
fn group_join(_lower: i128, value: i128, _index: usize) -> &'static str {
    if value > 1 {
        "-"
    } else {
        ""
    }
}

pub static HU: GrammarDescriptor = GrammarDescriptor {
    tags: &["hu"],
    name: "hungarian",
    units: UNITS,
    tens: TENS,
    tens_combining: TENS_COMBINING,
    hundreds: HundredsForm::Multiplier {
        word: "száz",
        junction: "",
        elide_one: true,
        irregular: &[(2, "két")],
    },
    hundred_junction: "",
    tens_join: TensJoin::Concat,
    tens_unit_form: None,
    short_scale: SCALE,
    long_scale: SCALE,
    long_grouping: Grouping::Three,
    scale_junction: "",
    elide_one: ElideOne::ThousandOnly,
    scale_form: None,
    scale_multiplier_form: Some(scale_multiplier_form),
    group_join,
    conjunctions: &[],
    decimal_words: &[],
    decimal_separator: DecimalSeparator::Word("egész"),
    digit_mode: DigitPronunciation::FractionalPart,
    fractional_phrase: Some(fractional_phrase),
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
    negative_words: &["mínusz"],
    negative_word: "mínusz",
    infinity_word: "végtelen",
    nan_word: "nem szám",
    power_phrase: "",
    supports_scientific: false,
    aliases: &[],
    plural_normalize: None,
    supports_extraction: false,
};
