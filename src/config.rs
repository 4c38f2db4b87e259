//! 配置模块
//!
//! 回写表面的默认参数，从 ~/.config/numword/config.toml 加载

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NumWordError, NumWordResult};
use crate::grammar::Scale;

/// 数词转写默认配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumWordConfig {
    /// 默认语言标签
    pub lang: String,
    /// 小数位数
    pub places: usize,
    /// 大数刻度
    pub scale: Scale,
    /// 是否提取序数
    pub ordinals: bool,
}

impl Default for NumWordConfig {
    fn default() -> Self {
        Self {
            lang: "en-us".to_string(),
            places: 2,
            scale: Scale::Short,
            ordinals: false,
        }
    }
}

impl NumWordConfig {
    /// 加载配置文件，不存在时用默认配置
    pub fn load() -> NumWordResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> NumWordResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| NumWordError::ConfigParse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!("📋 加载配置成功: {:?}", path);
        tracing::info!(
            "📊 转写配置: lang={}, places={}, ordinals={}",
            config.lang,
            config.places,
            config.ordinals
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> NumWordResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> NumWordResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| NumWordError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    fn config_path() -> NumWordResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(NumWordError::ConfigDirUnavailable)?;
        Ok(config_dir.join("numword").join("config.toml"))
    }
}
