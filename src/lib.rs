//! NumWord Core Engine
//!
//! 多语言数词转写核心引擎：自然语言数词与数值的双向转换
//!
//! - 提取：文本中的数词跨度 → 数值（"vinte e um" → 21）
//! - 生成：数值 → 语法正确的读法（123 → "one hundred and twenty three"）
//! - 回写：整句中数词换数字串，或反向
//!
//! 语法描述符全部是进程内只读静态数据，引擎本身无共享可变状态，
//! 可以跨线程并发调用，无需加锁

#![warn(rust_2018_idioms)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod grammar;
pub mod pronounce;
pub mod rewrite;
pub mod tokenize;
pub mod value;

// Re-export key types
pub use config::NumWordConfig;
pub use dispatch::{
    digits_to_words, extract_number, extract_numbers, is_fractional, is_ordinal,
    pronounce_fraction, pronounce_number, pronounce_ordinal, resolve, words_to_digits,
    FallbackFormatter, FormatPurpose, NumWordEngine,
};
pub use error::{NumWordError, NumWordResult};
pub use extract::ExtractOptions;
pub use grammar::{DigitPronunciation, Scale};
pub use pronounce::PronounceOptions;
pub use rewrite::{RewriteChange, RewriteResult};
pub use tokenize::{tokenize, ReplaceableNumber, Token};
pub use value::NumberValue;

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): NUMWORD_LOG 控制级别
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("NUMWORD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init()，重复初始化不 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式不启用日志
    }
}
