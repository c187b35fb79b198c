use crate::domain::model::{ContactReply, ContactSubmission};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub const PROJECTS_PATH: &str = "/api/projects";
pub const CONTACT_PATH: &str = "/api/contact";

/// reqwest 實作，沒有重試也沒有額外的逾時
#[derive(Debug, Clone)]
pub struct HttpPortfolioApi {
    base_url: String,
    client: Client,
}

impl HttpPortfolioApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_projects(&self) -> Result<serde_json::Value> {
        let url = self.endpoint(PROJECTS_PATH);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        // 不看狀態碼，只要回應本體有 projects 陣列就採用
        let body = response.json::<serde_json::Value>().await?;
        Ok(body)
    }

    async fn send_contact(&self, submission: &ContactSubmission) -> Result<ContactReply> {
        let url = self.endpoint(CONTACT_PATH);
        tracing::debug!("Posting contact form to: {}", url);

        let response = self.client.post(&url).json(submission).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.json::<serde_json::Value>().await?;
        Ok(ContactReply::from(&body))
    }
}
