//! 数词转写演示程序
//!
//! 演示多语言数词与数值的双向转换
//!
//! 运行：cargo run --example transducer_demo

use numword_core::{
    extract_number, pronounce_number, pronounce_ordinal, words_to_digits, PronounceOptions,
    Scale,
};

fn main() {
    println!("=== NumWord 数词转写演示 ===\n");

    // 文本 → 数值
    let extract_cases = vec![
        ("twenty five", "en"),
        ("two hundred and fifty three", "en"),
        ("three billions", "en"),
        ("duzentos e cinquenta e três", "pt"),
        ("mil quinhentos e quarenta e dois", "pt"),
        ("هزار و دویست و سی و چهار", "fa"),
    ];

    println!("【提取演示】\n");
    for (i, (text, lang)) in extract_cases.iter().enumerate() {
        match extract_number(text, lang, true, false) {
            Ok(Some(value)) => {
                println!("#{} [{}] \"{}\" → {}", i + 1, lang, text, value);
            }
            Ok(None) => println!("#{} [{}] \"{}\" → 没有数字", i + 1, lang, text),
            Err(e) => println!("#{} [{}] \"{}\" → 错误: {}", i + 1, lang, text, e),
        }
    }

    // 数值 → 文本
    println!("\n【生成演示】\n");
    let opts = PronounceOptions::default();
    for (value, lang) in [
        (123.0, "en"),
        (1000.0, "pt"),
        (2.5, "fa"),
        (123.0, "hu"),
        (21.0, "sl"),
        (-5.0, "en"),
    ] {
        if let Ok(text) = pronounce_number(value, lang, &opts) {
            println!("[{}] {} → \"{}\"", lang, value, text);
        }
    }

    // 长刻度
    println!("\n【刻度演示】\n");
    let long = PronounceOptions {
        scale: Scale::Long,
        ..Default::default()
    };
    for lang in ["en", "pt-pt"] {
        let short_text = pronounce_number(1e9, lang, &opts).unwrap_or_default();
        let long_text = pronounce_number(1e9, lang, &long).unwrap_or_default();
        println!("[{}] 10^9 短刻度: \"{}\"", lang, short_text);
        println!("[{}] 10^9 长刻度: \"{}\"", lang, long_text);
    }

    // 序数
    println!("\n【序数演示】\n");
    for (value, lang) in [(3.0, "en"), (25.0, "hu"), (21.0, "sl"), (3.0, "fa")] {
        if let Ok(text) = pronounce_ordinal(value, lang) {
            println!("[{}] {} → \"{}\"", lang, value, text);
        }
    }

    // 整句回写
    println!("\n【回写演示】\n");
    for (text, lang) in [
        ("há duzentos e cinquenta carros", "pt"),
        ("march fifth two thousand twenty five", "en"),
    ] {
        if let Ok(rewritten) = words_to_digits(text, lang) {
            println!("[{}] \"{}\"", lang, text);
            println!("     → \"{}\"", rewritten);
        }
    }

    println!("\n=== 演示完成 ===");
}
