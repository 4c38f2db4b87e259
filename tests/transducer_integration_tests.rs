//! 转写集成测试
//!
//! 测试完整的 分词 → 提取 → 生成 → 回写 管道

use numword_core::{
    extract_number, is_fractional, pronounce_number, pronounce_ordinal, words_to_digits,
    NumWordConfig, NumWordEngine, NumWordError, PronounceOptions, Scale,
};

fn say(value: f64, lang: &str) -> String {
    pronounce_number(value, lang, &PronounceOptions::default()).expect("pronounce")
}

#[test]
fn test_round_trip_en() {
    // 生成再提取回到原值
    for n in [0, 7, 13, 25, 100, 123, 253, 1000, 1234, 40002, 1_000_000] {
        let text = say(n as f64, "en");
        let back = extract_number(&text, "en", true, false).expect("extract");
        assert_eq!(back, Some(n as f64), "en round trip {} via '{}'", n, text);
    }
}

#[test]
fn test_round_trip_pt_both_dialects() {
    for lang in ["pt-br", "pt-pt"] {
        for n in [1, 16, 100, 123, 1000, 1234] {
            let text = say(n as f64, lang);
            let back = extract_number(&text, lang, true, false).expect("extract");
            assert_eq!(back, Some(n as f64), "{} round trip {} via '{}'", lang, n, text);
        }
    }
}

#[test]
fn test_round_trip_fa() {
    for n in [5, 17, 250, 1234, 35000] {
        let text = say(n as f64, "fa");
        let back = extract_number(&text, "fa", true, false).expect("extract");
        assert_eq!(back, Some(n as f64), "fa round trip {} via '{}'", n, text);
    }
}

#[test]
fn test_scale_consistency_pt() {
    // 两种刻度、两个方言下生成和提取保持一致
    for scale in [Scale::Short, Scale::Long] {
        for lang in ["pt-br", "pt-pt"] {
            for n in [1_000_000.0, 1_000_000_000.0] {
                let opts = PronounceOptions {
                    scale,
                    ..Default::default()
                };
                let text = pronounce_number(n, lang, &opts).expect("pronounce");
                let back = extract_number(&text, lang, scale == Scale::Short, false)
                    .expect("extract");
                assert_eq!(back, Some(n), "{} {:?} via '{}'", lang, scale, text);
            }
        }
    }
}

#[test]
fn test_en_surface_scenarios() {
    assert_eq!(
        extract_number("twenty five", "en", true, false).unwrap(),
        Some(25.0)
    );
    assert_eq!(
        extract_number("two hundred and fifty three", "en", true, false).unwrap(),
        Some(253.0)
    );
    assert_eq!(say(123.0, "en"), "one hundred and twenty three");

    // 0.5 的读法是词不是数字
    let half = say(0.5, "en");
    assert!(!half.chars().any(|c| c.is_ascii_digit()));
    assert!(half.contains("five"));

    // 负数以负号词开头并包含 5 的词位
    let neg = say(-5.0, "en");
    assert!(neg.starts_with("negative"));
    assert!(neg.contains("five"));

    // 短刻度和长刻度的百万
    let opts_short = PronounceOptions::default();
    let opts_long = PronounceOptions {
        scale: Scale::Long,
        ..Default::default()
    };
    assert!(pronounce_number(1_000_000.0, "en", &opts_short)
        .unwrap()
        .contains("million"));
    assert!(pronounce_number(1_000_000.0, "en", &opts_long)
        .unwrap()
        .contains("million"));
}

#[test]
fn test_thousand_elision_boundary() {
    // 省略千位 1 的语言不以"一"开头
    assert!(!say(1000.0, "pt").starts_with("um"));
    assert_eq!(say(1000.0, "pt"), "mil");
    assert_eq!(say(1000.0, "fa"), "هزار");
    assert_eq!(say(1000.0, "hu"), "ezer");
    assert_eq!(say(1000.0, "sl"), "tisoč");
    // 英语不省略
    assert_eq!(say(1000.0, "en"), "one thousand");
}

#[test]
fn test_words_to_digits_pipeline() {
    assert_eq!(words_to_digits("dezesseis", "pt-br").unwrap(), "16");
    assert_eq!(words_to_digits("dezasseis", "pt-pt").unwrap(), "16");
    assert_eq!(
        words_to_digits("há duzentos e cinquenta carros", "pt").unwrap(),
        "há 250 carros"
    );
    assert_eq!(words_to_digits("three billions", "en").unwrap(), "3000000000");
    assert_eq!(
        words_to_digits("march fifth two thousand twenty five", "en").unwrap(),
        "march fifth 2025"
    );
    assert_eq!(words_to_digits("two point five", "en").unwrap(), "2.5");
    assert_eq!(words_to_digits("two point forty two", "en").unwrap(), "2.42");
    assert_eq!(words_to_digits("two point four two", "en").unwrap(), "2.42");
}

#[test]
fn test_words_to_digits_idempotent() {
    let once = words_to_digits("mil e uma noites", "pt").unwrap();
    let twice = words_to_digits(&once, "pt").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_falsy_results() {
    assert_eq!(extract_number("", "en", true, false).unwrap(), None);
    assert_eq!(
        extract_number("no numbers here", "en", true, false).unwrap(),
        None
    );
    assert_eq!(extract_number("apenas palavras", "pt", true, false).unwrap(), None);
}

#[test]
fn test_dialect_dispatch() {
    // 标签大小写和分隔符都能解析，方言选对词表
    assert_eq!(say(16.0, "pt-BR"), "dezesseis");
    assert_eq!(say(16.0, "pt_PT"), "dezasseis");
    assert_eq!(say(16.0, "pt"), "dezesseis");
}

#[test]
fn test_unsupported_language() {
    assert!(matches!(
        pronounce_number(5.0, "zz-ZZ", &PronounceOptions::default()),
        Err(NumWordError::UnsupportedLanguage(_))
    ));
    assert!(matches!(
        words_to_digits("öt", "hu"),
        Err(NumWordError::UnsupportedOperation { .. })
    ));
}

#[test]
fn test_generation_only_languages() {
    assert_eq!(say(123.0, "hu"), "százhuszonhárom");
    assert_eq!(say(21.0, "sl"), "enaindvajset");
    assert_eq!(pronounce_ordinal(2.0, "hu").unwrap(), "második");
    assert_eq!(pronounce_ordinal(25.0, "hu").unwrap(), "huszonötödik");
    assert_eq!(pronounce_ordinal(3.0, "sl").unwrap(), "tretji");
}

#[test]
fn test_fraction_predicates() {
    assert_eq!(is_fractional("meio", "pt", true).unwrap(), Some(0.5));
    assert_eq!(is_fractional("onze avos", "pt", true).unwrap(), Some(1.0 / 11.0));
    assert_eq!(is_fractional("half", "en", true).unwrap(), Some(0.5));
    assert_eq!(is_fractional("fél", "hu", true).unwrap(), Some(0.5));
    assert_eq!(is_fractional("polovica", "sl", true).unwrap(), Some(0.5));
    assert_eq!(is_fractional("نیم", "fa", true).unwrap(), Some(0.5));
}

#[test]
fn test_engine_with_config() {
    let engine = NumWordEngine::new();
    let config = NumWordConfig {
        lang: "pt-br".to_string(),
        places: 2,
        scale: Scale::Short,
        ordinals: false,
    };
    let result = engine
        .rewrite_with_config("dez carros e cinco pessoas", &config)
        .expect("rewrite");
    assert_eq!(result.text, "10 carros e 5 pessoas");
    assert_eq!(result.changes.len(), 2);
}

#[test]
fn test_extraction_exact_above_float_safe_range() {
    // 10^15 量级以上仍然精确
    let text = say(3840285766987249.0, "en");
    let back = extract_number(&text, "en", true, false).unwrap();
    assert_eq!(back, Some(3840285766987249.0));
}

#[test]
fn test_mixed_sentence_multiple_numbers() {
    let all = numword_core::extract_numbers(
        "comprei dezesseis livros e duas canetas",
        "pt",
        true,
        false,
    )
    .unwrap();
    assert_eq!(all, vec![16.0, 2.0]);
}
