//! 文本回写模块
//!
//! 组合分词与提取：数词跨度换成数字串（或反向），其余 Token 不动。
//! 每处替换带变更记录，调用方可以用来回滚或高亮

use crate::extract::{extract_spans, ExtractOptions};
use crate::grammar::GrammarDescriptor;
use crate::pronounce::{pronounce, PronounceOptions};
use crate::tokenize::tokenize;
use crate::value::is_numeric;

/// 一处替换记录
#[derive(Debug, Clone)]
pub struct RewriteChange {
    /// 原跨度文本
    pub original: String,
    /// 替换后的文本
    pub replacement: String,
    /// 跨度的起止 Token 序号
    pub start_index: usize,
    pub end_index: usize,
}

/// 回写结果
#[derive(Debug, Clone)]
pub struct RewriteResult {
    pub text: String,
    pub changes: Vec<RewriteChange>,
}

/// 数词 → 数字串
///
/// 空白折叠为单个空格；对已经全是数字的文本再跑一遍是恒等变换
pub fn words_to_digits(
    text: &str,
    g: &GrammarDescriptor,
    opts: &ExtractOptions,
) -> RewriteResult {
    let tokens = tokenize(text);
    let spans = extract_spans(&tokens, g, opts);

    let mut out_words: Vec<String> = Vec::with_capacity(tokens.len());
    let mut changes = Vec::new();
    let mut span_iter = spans.iter().peekable();
    let mut i = 0;

    while i < tokens.len() {
        if let Some(span) = span_iter.peek() {
            if span.start_index() == Some(i) {
                let replacement = span
                    .value()
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                let original = span.text();
                let end = span.end_index().unwrap_or(i);
                if original != replacement {
                    changes.push(RewriteChange {
                        original,
                        replacement: replacement.clone(),
                        start_index: i,
                        end_index: end,
                    });
                }
                out_words.push(replacement);
                span_iter.next();
                i = end + 1;
                continue;
            }
        }
        out_words.push(tokens[i].word.clone());
        i += 1;
    }

    RewriteResult {
        text: out_words.join(" "),
        changes,
    }
}

/// 数字串 → 数词（反向回写）
pub fn digits_to_words(text: &str, g: &GrammarDescriptor, opts: &PronounceOptions) -> String {
    tokenize(text)
        .iter()
        .map(|token| {
            if is_numeric(&token.word) {
                match token.word.trim().parse::<f64>() {
                    Ok(value) => pronounce(value, g, opts),
                    Err(_) => token.word.clone(),
                }
            } else {
                token.word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{en::EN, pt::PT_BR, pt::PT_PT};

    fn w2d(text: &str, g: &GrammarDescriptor) -> String {
        words_to_digits(text, g, &ExtractOptions::default()).text
    }

    #[test]
    fn test_simple_replacement() {
        assert_eq!(w2d("dezesseis", &PT_BR), "16");
        assert_eq!(w2d("dezasseis", &PT_PT), "16");
        assert_eq!(w2d("cinco", &PT_BR), "5");
    }

    #[test]
    fn test_complex_number() {
        assert_eq!(w2d("duzentos e cinquenta e três", &PT_BR), "253");
    }

    #[test]
    fn test_mixed_text_preserved() {
        assert_eq!(
            w2d("há duzentos e cinquenta carros", &PT_BR),
            "há 250 carros"
        );
    }

    #[test]
    fn test_multiple_numbers() {
        assert_eq!(
            w2d("dez carros e cinco pessoas", &PT_BR),
            "10 carros e 5 pessoas"
        );
    }

    #[test]
    fn test_no_numbers_untouched() {
        assert_eq!(w2d("apenas palavras normais", &PT_BR), "apenas palavras normais");
        assert_eq!(w2d("", &PT_BR), "");
        assert_eq!(w2d("e", &PT_BR), "e");
    }

    #[test]
    fn test_en_large_and_decimal() {
        assert_eq!(w2d("three billions", &EN), "3000000000");
        assert_eq!(w2d("two point five", &EN), "2.5");
        assert_eq!(w2d("two point forty two", &EN), "2.42");
        assert_eq!(w2d("two point four two", &EN), "2.42");
    }

    #[test]
    fn test_ordinal_words_left_alone() {
        assert_eq!(
            w2d("march fifth two thousand twenty five", &EN),
            "march fifth 2025"
        );
    }

    #[test]
    fn test_idempotent_on_converted_text() {
        let once = w2d("mil e uma noites", &PT_BR);
        let twice = w2d(&once, &PT_BR);
        assert_eq!(once, twice);

        let once = w2d("two hundred and fifty three apples", &EN);
        assert_eq!(once, "253 apples");
        assert_eq!(w2d(&once, &EN), once);
    }

    #[test]
    fn test_change_tracking() {
        let result = words_to_digits(
            "há duzentos e cinquenta carros",
            &PT_BR,
            &ExtractOptions::default(),
        );
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].original, "duzentos e cinquenta");
        assert_eq!(result.changes[0].replacement, "250");
        assert_eq!(result.changes[0].start_index, 1);
        assert_eq!(result.changes[0].end_index, 3);
    }

    #[test]
    fn test_no_change_recorded_for_identity() {
        let result = words_to_digits("253 carros", &PT_BR, &ExtractOptions::default());
        assert_eq!(result.text, "253 carros");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_digits_to_words() {
        let opts = PronounceOptions::default();
        assert_eq!(
            digits_to_words("tenho 3 gatos", &PT_BR, &opts),
            "tenho três gatos"
        );
        assert_eq!(
            digits_to_words("I saw 123 birds", &EN, &opts),
            "I saw one hundred and twenty three birds"
        );
    }
}
