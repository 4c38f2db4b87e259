//! 分词模块
//!
//! 把原始文本切分为带序号的 Token 序列，为提取引擎做准备
//!
//! 规则：
//! - 按空白切块，块序保持原文顺序
//! - "12%" 拆成 "12" 和 "%"
//! - "#1" 拆成 "#" 和 "1"
//! - 字母块之间的连字符拆开（"amo-te" → "amo" "-" "te"）
//! - 数字之间的连字符保留（"1-2" 是区间，不拆）
//! - 悬空的连字符丢弃

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::NumberValue;

static ALPHA_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Alphabetic}+$").expect("valid regex"));
static NUMERIC_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)?$").expect("valid regex"));

/// 文本 Token
///
/// index 是 Token 在序列中的序号（不是字节偏移），用于回写时定位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub index: usize,
}

impl Token {
    pub fn new(word: impl Into<String>, index: usize) -> Self {
        Self {
            word: word.into(),
            index,
        }
    }
}

/// 一段可以被数字替换的 Token 跨度
///
/// value 为 None 表示"没有找到数字"，所有使用方都按假值处理。
/// 构造之后不再变更
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceableNumber {
    value: Option<NumberValue>,
    tokens: Vec<Token>,
}

impl ReplaceableNumber {
    pub fn new(value: NumberValue, tokens: Vec<Token>) -> Self {
        Self {
            value: Some(value),
            tokens,
        }
    }

    /// "没有找到数字" 的假值结果
    pub fn none() -> Self {
        Self {
            value: None,
            tokens: Vec::new(),
        }
    }

    pub fn value(&self) -> Option<NumberValue> {
        self.value
    }

    /// 按假值语义判断
    pub fn is_number(&self) -> bool {
        self.value.is_some()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn start_index(&self) -> Option<usize> {
        self.tokens.iter().map(|t| t.index).min()
    }

    pub fn end_index(&self) -> Option<usize> {
        self.tokens.iter().map(|t| t.index).max()
    }

    /// 跨度文本：各 Token 的词用空格连接，空词跳过
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.word.as_str())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 将文本分词为 Token 序列
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut words = Vec::new();
    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut words);
    }
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| Token { word, index })
        .collect()
}

/// 处理单个空白块
fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    // 悬空连字符
    if chunk == "-" {
        return;
    }

    // 词尾标点独立成 Token（"2.5" 这类数字字面量不拆）
    if chunk.len() > 1 && !NUMERIC_PARTS.is_match(chunk) {
        if let Some(last) = chunk.chars().last() {
            if matches!(last, ',' | '.' | '!' | '?' | ';' | ':') {
                split_chunk(&chunk[..chunk.len() - last.len_utf8()], out);
                out.push(last.to_string());
                return;
            }
        }
    }

    // "12%" → "12" "%"
    if chunk.len() > 1 && chunk.ends_with('%') {
        split_chunk(&chunk[..chunk.len() - 1], out);
        out.push("%".to_string());
        return;
    }

    // "#1" → "#" "1"
    if chunk.len() > 1 && chunk.starts_with('#') {
        out.push("#".to_string());
        split_chunk(&chunk[1..], out);
        return;
    }

    if chunk.contains('-') {
        let parts: Vec<&str> = chunk.split('-').collect();

        // "1-2" 是数字区间，整块保留
        if parts.iter().all(|p| NUMERIC_PARTS.is_match(p)) {
            out.push(chunk.to_string());
            return;
        }

        // "amo-te" → "amo" "-" "te"（复合数词按三次词表查询解析）
        if parts.iter().all(|p| p.is_empty() || ALPHA_PARTS.is_match(p)) {
            let mut first = true;
            for part in parts {
                if part.is_empty() {
                    continue;
                }
                if !first {
                    out.push("-".to_string());
                }
                out.push(part.to_string());
                first = false;
            }
            return;
        }
    }

    out.push(chunk.to_string());
}
