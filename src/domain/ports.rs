use crate::domain::model::{ContactReply, ContactSubmission};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn owner(&self) -> &str;
}

/// 後端服務。專案清單維持原始 JSON，由載入器決定怎麼解讀。
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn fetch_projects(&self) -> Result<serde_json::Value>;
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<ContactReply>;
}
