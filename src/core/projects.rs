use crate::adapters::http::HttpPortfolioApi;
use crate::domain::content::fallback_projects;
use crate::domain::model::Project;
use crate::domain::ports::PortfolioApi;
use crate::utils::error::Result;
use serde::de::Error as _;

pub struct ProjectLoader<A: PortfolioApi> {
    api: A,
}

impl<A: PortfolioApi> ProjectLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// 讀取後端的專案清單。任何失敗都回傳空清單，不往外丟錯誤。
    pub async fn load_projects(&self) -> Vec<Project> {
        match self.try_load().await {
            Ok(projects) => {
                tracing::info!("📦 Loaded {} projects from backend", projects.len());
                projects
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not load projects, using fallback list: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<Project>> {
        let body = self.api.fetch_projects().await?;
        parse_projects(body)
    }
}

/// 從 `{ "projects": [...] }` 取出專案；欄位缺少或不是陣列都算失敗
pub fn parse_projects(body: serde_json::Value) -> Result<Vec<Project>> {
    let items = match body {
        serde_json::Value::Object(mut obj) => obj.remove("projects"),
        _ => None,
    };

    match items {
        Some(items @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(items)?),
        Some(_) => Err(serde_json::Error::custom("`projects` is not an array").into()),
        None => Err(serde_json::Error::missing_field("projects").into()),
    }
}

/// 有資料就顯示載入的清單，否則顯示固定的備用清單
pub fn displayed_projects(loaded: &[Project]) -> Vec<Project> {
    if loaded.is_empty() {
        fallback_projects()
    } else {
        loaded.to_vec()
    }
}

/// 單次讀取 `{base_url}/api/projects`
pub async fn load_projects(base_url: &str) -> Vec<Project> {
    ProjectLoader::new(HttpPortfolioApi::new(base_url))
        .load_projects()
        .await
}
