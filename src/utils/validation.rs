use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 表單必填欄位檢查，錯誤會回報給使用者而不是設定檔
pub fn validate_required_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::ValidationError {
            field: field_name.to_string(),
            reason: "This field is required".to_string(),
        });
    }
    Ok(())
}

/// 和瀏覽器 `type="email"` 一樣寬鬆：`local@domain`，不含空白且只有一個 @
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_required_field(field_name, value)?;

    let re = Regex::new(r"^[^@\s]+@[^@\s]+$").map_err(|e| PortfolioError::ConfigError {
        message: format!("Invalid email pattern: {}", e),
    })?;

    if !re.is_match(value) {
        return Err(PortfolioError::ValidationError {
            field: field_name.to_string(),
            reason: "Please enter a valid email address".to_string(),
        });
    }
    Ok(())
}
