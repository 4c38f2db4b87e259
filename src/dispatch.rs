//! 调度模块
//!
//! 语言标签 → 语法描述符的注册表解析（不区分大小写，最长前缀优先），
//! 以及对外的函数门面。没有本地描述符的语言交给外部的通用规则数字
//! 引擎兜底；兜底也不支持时报 UnsupportedLanguage。
//! 本层不做任何语言学处理

use crate::error::{NumWordError, NumWordResult};
use crate::extract::{extract_spans, ExtractOptions};
use crate::grammar::{en, fa, hu, pt, sl, GrammarDescriptor, Scale, WordKind};
use crate::pronounce::{pronounce, render_fraction, PronounceOptions};
use crate::rewrite;
use crate::tokenize::tokenize;
use crate::value::look_for_fractions;

/// 已注册的语法描述符
static REGISTRY: &[&GrammarDescriptor] = &[
    &en::EN,
    &pt::PT_BR,
    &pt::PT_PT,
    &fa::FA,
    &hu::HU,
    &sl::SL,
];

/// 按语言标签解析描述符，最长标签优先（"pt-PT" 先于裸 "pt"）
pub fn resolve(lang: &str) -> NumWordResult<&'static GrammarDescriptor> {
    let tag = lang.trim().to_lowercase().replace('_', "-");
    let mut best: Option<(&'static GrammarDescriptor, usize)> = None;
    for grammar in REGISTRY {
        for candidate in grammar.tags {
            let matched =
                tag == *candidate || tag.starts_with(&format!("{}-", candidate));
            if matched && best.map_or(true, |(_, len)| candidate.len() > len) {
                best = Some((*grammar, candidate.len()));
            }
        }
    }
    best.map(|(g, _)| g)
        .ok_or_else(|| NumWordError::UnsupportedLanguage(lang.to_string()))
}

/// 兜底格式化的用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPurpose {
    Cardinal,
    Ordinal,
}

/// 外部通用规则数字引擎的接口
///
/// 只在注册表没有匹配描述符时调用；返回 None 表示该语言兜底也不支持
pub trait FallbackFormatter: Send + Sync {
    fn format(&self, value: f64, lang: &str, purpose: FormatPurpose) -> Option<String>;
}

/// 数词转写引擎：注册表调度 + 可选兜底
#[derive(Default)]
pub struct NumWordEngine {
    fallback: Option<Box<dyn FallbackFormatter>>,
}

impl NumWordEngine {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    pub fn with_fallback(fallback: Box<dyn FallbackFormatter>) -> Self {
        Self {
            fallback: Some(fallback),
        }
    }

    /// 数值 → 读法
    pub fn pronounce_number(
        &self,
        value: f64,
        lang: &str,
        opts: &PronounceOptions,
    ) -> NumWordResult<String> {
        match resolve(lang) {
            Ok(grammar) => Ok(pronounce(value, grammar, opts)),
            Err(err) => self.try_fallback(value, lang, opts.ordinals).ok_or(err),
        }
    }

    /// 数值 → 序数读法
    pub fn pronounce_ordinal(&self, value: f64, lang: &str) -> NumWordResult<String> {
        let opts = PronounceOptions {
            ordinals: true,
            ..Default::default()
        };
        match resolve(lang) {
            Ok(grammar) => {
                if grammar.ordinal.is_none() {
                    // 本地描述符没有序数规则，交给兜底
                    return self.try_fallback(value, lang, true).ok_or(
                        NumWordError::UnsupportedOperation {
                            lang: lang.to_string(),
                            op: "pronounce_ordinal",
                        },
                    );
                }
                Ok(pronounce(value, grammar, &opts))
            }
            Err(err) => self.try_fallback(value, lang, true).ok_or(err),
        }
    }

    fn try_fallback(&self, value: f64, lang: &str, ordinals: bool) -> Option<String> {
        let purpose = if ordinals {
            FormatPurpose::Ordinal
        } else {
            FormatPurpose::Cardinal
        };
        let text = self.fallback.as_ref()?.format(value, lang, purpose)?;
        tracing::debug!("语言 {} 走通用规则引擎兜底", lang);
        Some(text)
    }

    /// 提取第一个数字，没有数字返回 None
    pub fn extract_number(
        &self,
        text: &str,
        lang: &str,
        opts: &ExtractOptions,
    ) -> NumWordResult<Option<f64>> {
        let grammar = extraction_grammar(lang, "extract_number")?;
        Ok(extract_spans(&tokenize(text), grammar, opts)
            .into_iter()
            .next()
            .and_then(|span| span.value())
            .map(|v| v.as_f64()))
    }

    /// 提取全部数字，按出现顺序
    pub fn extract_numbers(
        &self,
        text: &str,
        lang: &str,
        opts: &ExtractOptions,
    ) -> NumWordResult<Vec<f64>> {
        let grammar = extraction_grammar(lang, "extract_numbers")?;
        Ok(extract_spans(&tokenize(text), grammar, opts)
            .iter()
            .filter_map(|span| span.value())
            .map(|v| v.as_f64())
            .collect())
    }

    /// 文本中的数词跨度换成数字串
    pub fn words_to_digits(&self, text: &str, lang: &str) -> NumWordResult<String> {
        let grammar = extraction_grammar(lang, "words_to_digits")?;
        Ok(rewrite::words_to_digits(text, grammar, &ExtractOptions::default()).text)
    }

    /// 按配置里的默认语言和参数回写，返回带变更记录的结果
    pub fn rewrite_with_config(
        &self,
        text: &str,
        config: &crate::config::NumWordConfig,
    ) -> NumWordResult<rewrite::RewriteResult> {
        let grammar = extraction_grammar(&config.lang, "rewrite_with_config")?;
        let opts = ExtractOptions {
            scale: config.scale,
            ordinals: config.ordinals,
        };
        Ok(rewrite::words_to_digits(text, grammar, &opts))
    }

    /// 文本中的数字串换成数词
    pub fn digits_to_words(
        &self,
        text: &str,
        lang: &str,
        opts: &PronounceOptions,
    ) -> NumWordResult<String> {
        let grammar = resolve(lang)?;
        Ok(rewrite::digits_to_words(text, grammar, opts))
    }

    /// 整词判断分数："meio" → 0.5，不是分数返回 None
    pub fn is_fractional(
        &self,
        input: &str,
        lang: &str,
        scale: Scale,
    ) -> NumWordResult<Option<f64>> {
        let grammar = resolve(lang)?;
        Ok(is_fractional_impl(input, grammar, scale))
    }

    /// 整词判断序数："fifth" → 5，不是序数返回 None
    pub fn is_ordinal(&self, input: &str, lang: &str) -> NumWordResult<Option<f64>> {
        let grammar = resolve(lang)?;
        let rule = grammar
            .ordinal
            .as_ref()
            .ok_or_else(|| NumWordError::UnsupportedOperation {
                lang: lang.to_string(),
                op: "is_ordinal",
            })?;

        let word = grammar.normalize(input.trim());
        if let Some((_, v)) = rule.lexicon.iter().find(|(w, _)| *w == word) {
            return Ok(Some(*v as f64));
        }
        for suffix in rule.digit_suffixes {
            if let Some(stem) = word.strip_suffix(suffix) {
                if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
                    return Ok(stem.parse::<f64>().ok());
                }
            }
        }
        Ok(None)
    }

    /// "n/d" 分数字面量 → 读法
    pub fn pronounce_fraction(
        &self,
        fraction: &str,
        lang: &str,
        opts: &PronounceOptions,
    ) -> NumWordResult<String> {
        let grammar = resolve(lang)?;
        let parts: Vec<&str> = fraction.trim().split('/').collect();
        if !look_for_fractions(&parts) {
            return Err(NumWordError::InvalidFraction(fraction.to_string()));
        }
        let numerator = parts[0].trim().parse::<f64>().unwrap_or_default() as i128;
        let denominator = parts[1].trim().parse::<f64>().unwrap_or_default() as i128;
        Ok(render_fraction(numerator, denominator, grammar, opts.scale))
    }
}

/// 提取类操作的描述符：复合正写法语言不提供提取
fn extraction_grammar(
    lang: &str,
    op: &'static str,
) -> NumWordResult<&'static GrammarDescriptor> {
    let grammar = resolve(lang)?;
    if !grammar.supports_extraction {
        return Err(NumWordError::UnsupportedOperation {
            lang: lang.to_string(),
            op,
        });
    }
    Ok(grammar)
}

fn is_fractional_impl(input: &str, g: &GrammarDescriptor, scale: Scale) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let words: Vec<&str> = trimmed.split_whitespace().collect();

    // 复合分数："onze avos" = 1/11
    if words.len() == 2 {
        let marker = g.compound_fraction_marker?;
        if g.normalize(words[1]) != marker {
            return None;
        }
        let n = match g.classify_normalized(words[0], scale, false) {
            WordKind::Unit(v) | WordKind::Teen(v) | WordKind::Ten(v) | WordKind::Hundred(v) => v,
            _ => return None,
        };
        if n == 0 {
            return None;
        }
        return Some(1.0 / n as f64);
    }

    if words.len() != 1 {
        return None;
    }
    match g.classify_normalized(words[0], scale, false) {
        WordKind::Fraction(d) => Some(1.0 / d as f64),
        _ => None,
    }
}

// 无兜底的便捷函数门面

pub fn extract_number(
    text: &str,
    lang: &str,
    short_scale: bool,
    ordinals: bool,
) -> NumWordResult<Option<f64>> {
    let opts = ExtractOptions {
        scale: if short_scale { Scale::Short } else { Scale::Long },
        ordinals,
    };
    NumWordEngine::new().extract_number(text, lang, &opts)
}

pub fn extract_numbers(
    text: &str,
    lang: &str,
    short_scale: bool,
    ordinals: bool,
) -> NumWordResult<Vec<f64>> {
    let opts = ExtractOptions {
        scale: if short_scale { Scale::Short } else { Scale::Long },
        ordinals,
    };
    NumWordEngine::new().extract_numbers(text, lang, &opts)
}

pub fn pronounce_number(value: f64, lang: &str, opts: &PronounceOptions) -> NumWordResult<String> {
    NumWordEngine::new().pronounce_number(value, lang, opts)
}

pub fn pronounce_ordinal(value: f64, lang: &str) -> NumWordResult<String> {
    NumWordEngine::new().pronounce_ordinal(value, lang)
}

pub fn pronounce_fraction(
    fraction: &str,
    lang: &str,
    opts: &PronounceOptions,
) -> NumWordResult<String> {
    NumWordEngine::new().pronounce_fraction(fraction, lang, opts)
}

pub fn words_to_digits(text: &str, lang: &str) -> NumWordResult<String> {
    NumWordEngine::new().words_to_digits(text, lang)
}

pub fn digits_to_words(text: &str, lang: &str, opts: &PronounceOptions) -> NumWordResult<String> {
    NumWordEngine::new().digits_to_words(text, lang, opts)
}

pub fn is_fractional(input: &str, lang: &str, short_scale: bool) -> NumWordResult<Option<f64>> {
    let scale = if short_scale { Scale::Short } else { Scale::Long };
    NumWordEngine::new().is_fractional(input, lang, scale)
}

pub fn is_ordinal(input: &str, lang: &str) -> NumWordResult<Option<f64>> {
    NumWordEngine::new().is_ordinal(input, lang)
}
