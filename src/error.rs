use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumWordError {
    // 语言调度错误
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Operation '{op}' not available for language '{lang}'")]
    UnsupportedOperation { lang: String, op: &'static str },

    // 分数字面量错误
    #[error("Invalid fraction literal: '{0}'")]
    InvalidFraction(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config directory not available")]
    ConfigDirUnavailable,

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NumWordResult<T> = Result<T, NumWordError>;
