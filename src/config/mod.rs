#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::content::DEFAULT_OWNER;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use toml_config::TomlConfig;

/// 編譯時的 `PORTFOLIO_BACKEND_URL`，沒設定就用本機開發位址
pub const DEFAULT_BASE_URL: &str = match option_env!("PORTFOLIO_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// 合併後的設定：命令列 > TOML > 編譯時預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub base_url: String,
    pub owner: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            owner: DEFAULT_OWNER.to_string(),
        }
    }
}

impl SiteSettings {
    pub fn resolve(
        base_url: Option<String>,
        owner: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url
                .or_else(|| file.and_then(|c| c.base_url().map(str::to_string)))
                .unwrap_or(defaults.base_url),
            owner: owner
                .or_else(|| file.and_then(|c| c.owner().map(str::to_string)))
                .unwrap_or(defaults.owner),
        }
    }
}

impl ConfigProvider for SiteSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn owner(&self) -> &str {
        &self.owner
    }
}

impl Validate for SiteSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("owner", &self.owner)
    }
}
